/// Contenedor de un ingrediente. El volumen siempre esta entre 0 y la capacidad.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    capacity: f64,
    volume: f64,
}

impl Container {
    pub fn new(capacity: f64) -> Container {
        Container {
            capacity,
            volume: 0.0,
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn refill(&mut self) {
        self.volume = self.capacity;
    }

    /// Una cantidad negativa (o NaN) nunca esta disponible.
    pub fn has_at_least(&self, quantity: f64) -> bool {
        quantity >= 0.0 && self.volume - quantity >= 0.0
    }

    /// Saca `quantity` del contenedor. Si no alcanza, o si la cantidad es
    /// negativa, no se saca nada.
    pub fn take_out(&mut self, quantity: f64) -> bool {
        if !self.has_at_least(quantity) {
            return false;
        }
        self.volume -= quantity;
        true
    }
}
