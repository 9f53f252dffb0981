//! Contenedores de ingredientes de la maquina.
use std::collections::HashMap;

use log::{debug, warn};

use crate::container::Container;

/// Un contenedor por ingrediente. Los ingredientes se recuerdan en el orden en que se agregaron.
#[derive(Debug, Default)]
pub struct MaterialsDispenser {
    containers: HashMap<String, Container>,
    order: Vec<String>,
}

impl MaterialsDispenser {
    pub fn new() -> MaterialsDispenser {
        MaterialsDispenser::default()
    }

    pub fn exists(&self, material: &str) -> bool {
        self.containers.contains_key(material)
    }

    /// Agrega un contenedor vacio con la capacidad indicada.
    /// Devuelve `false` si el ingrediente ya tenia un contenedor o si la capacidad es negativa.
    pub fn allocate(&mut self, material: &str, capacity: f64) -> bool {
        if self.exists(material) {
            warn!("[MATERIALS] Container for {} already allocated", material);
            return false;
        }
        if capacity.is_nan() || capacity < 0.0 {
            warn!("[MATERIALS] Invalid capacity {} for {}", capacity, material);
            return false;
        }
        self.containers.insert(material.to_string(), Container::new(capacity));
        self.order.push(material.to_string());
        debug!("[MATERIALS] Allocated {} with capacity {}", material, capacity);
        true
    }

    pub fn capacity_of(&self, material: &str) -> Option<f64> {
        self.containers.get(material).map(Container::capacity)
    }

    pub fn volume_of(&self, material: &str) -> Option<f64> {
        self.containers.get(material).map(Container::volume)
    }

    pub fn refill(&mut self, material: &str) -> bool {
        match self.containers.get_mut(material) {
            Some(container) => {
                container.refill();
                debug!("[MATERIALS] Refilled {} to {}", material, container.volume());
                true
            }
            None => {
                warn!("[MATERIALS] Can not refill {}, there is no container", material);
                false
            }
        }
    }

    /// Saca `quantity` del contenedor. Falla sin modificar nada si no existe el
    /// contenedor o si no tiene suficiente volumen.
    pub fn take_out(&mut self, material: &str, quantity: f64) -> bool {
        let container = match self.containers.get_mut(material) {
            Some(container) => container,
            None => return false,
        };
        if !container.take_out(quantity) {
            debug!(
                "[MATERIALS] Not enough {}, requested {} and there is {}",
                material,
                quantity,
                container.volume()
            );
            return false;
        }
        debug!("[MATERIALS] Took {} of {}, remains {}", quantity, material, container.volume());
        true
    }

    pub fn has_at_least(&self, material: &str, quantity: f64) -> bool {
        self.containers
            .get(material)
            .map_or(false, |container| container.has_at_least(quantity))
    }

    pub fn materials(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_know_an_unallocated_material() {
        let dispenser = MaterialsDispenser::new();
        assert_eq!(false, dispenser.exists("coffee"));
        assert_eq!(None, dispenser.capacity_of("coffee"));
        assert_eq!(None, dispenser.volume_of("coffee"));
    }

    #[test]
    fn should_allocate_an_empty_container_only_once() {
        let mut dispenser = MaterialsDispenser::new();
        assert_eq!(true, dispenser.allocate("coffee", 50.0));
        assert_eq!(false, dispenser.allocate("coffee", 50.0));
        assert_eq!(Some(50.0), dispenser.capacity_of("coffee"));
        assert_eq!(Some(0.0), dispenser.volume_of("coffee"));
    }

    #[test]
    fn should_keep_the_capacity_of_the_first_allocation() {
        let mut dispenser = MaterialsDispenser::new();
        dispenser.allocate("coffee", 50.0);
        dispenser.allocate("coffee", 80.0);
        assert_eq!(Some(50.0), dispenser.capacity_of("coffee"));
        assert_eq!(vec!["coffee"], dispenser.materials());
    }

    #[test]
    fn should_refill_to_capacity() {
        let mut dispenser = MaterialsDispenser::new();
        dispenser.allocate("coffee", 50.0);
        assert_eq!(true, dispenser.refill("coffee"));
        assert_eq!(dispenser.capacity_of("coffee"), dispenser.volume_of("coffee"));
    }

    #[test]
    fn should_fail_to_refill_an_unknown_material() {
        let mut dispenser = MaterialsDispenser::new();
        assert_eq!(false, dispenser.refill("macchiatto"));
        assert_eq!(None, dispenser.volume_of("macchiatto"));
    }

    #[test]
    fn should_take_out_until_there_is_not_enough() {
        let mut dispenser = MaterialsDispenser::new();
        dispenser.allocate("coffee", 50.0);
        dispenser.refill("coffee");
        assert_eq!(true, dispenser.take_out("coffee", 30.0));
        assert_eq!(Some(20.0), dispenser.volume_of("coffee"));
        assert_eq!(false, dispenser.take_out("coffee", 30.0));
        assert_eq!(Some(20.0), dispenser.volume_of("coffee"));
    }

    #[test]
    fn should_take_out_the_whole_volume() {
        let mut dispenser = MaterialsDispenser::new();
        dispenser.allocate("milk", 300.0);
        dispenser.refill("milk");
        assert_eq!(true, dispenser.take_out("milk", 300.0));
        assert_eq!(Some(0.0), dispenser.volume_of("milk"));
    }

    #[test]
    fn should_not_take_out_a_negative_quantity() {
        let mut dispenser = MaterialsDispenser::new();
        dispenser.allocate("coffee", 50.0);
        dispenser.refill("coffee");
        assert_eq!(false, dispenser.take_out("coffee", -30.0));
        assert_eq!(Some(50.0), dispenser.volume_of("coffee"));
        assert_eq!(false, dispenser.has_at_least("coffee", -30.0));
    }

    #[test]
    fn should_reject_a_negative_capacity() {
        let mut dispenser = MaterialsDispenser::new();
        assert_eq!(false, dispenser.allocate("coffee", -50.0));
        assert_eq!(false, dispenser.exists("coffee"));
    }

    #[test]
    fn should_fail_to_take_out_an_unknown_material() {
        let mut dispenser = MaterialsDispenser::new();
        assert_eq!(false, dispenser.take_out("coffee", 1.0));
    }

    #[test]
    fn should_list_materials_in_allocation_order() {
        let mut dispenser = MaterialsDispenser::new();
        dispenser.allocate("water", 1000.0);
        dispenser.allocate("milk", 300.0);
        dispenser.allocate("coffee", 60.0);
        assert_eq!(vec!["water", "milk", "coffee"], dispenser.materials());
    }
}
