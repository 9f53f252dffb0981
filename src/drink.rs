/// Ingredientes (y cantidad de cada uno) que lleva una bebida, en el orden en que se cargaron.
pub type Bom = Vec<(String, f64)>;

#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    pub name: String,
    pub price: f64,
    pub bom: Bom,
    pub command: String,
}

impl Drink {
    pub fn new(name: &str, price: f64, bom: Bom, command: &str) -> Drink {
        Drink {
            name: name.to_string(),
            price,
            bom,
            command: command.to_string(),
        }
    }
}
