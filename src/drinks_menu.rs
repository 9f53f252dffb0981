//! Bebidas que se pueden comprar.
use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    drink::{Bom, Drink},
    materials_dispenser::MaterialsDispenser,
};

/// Menu de bebidas. Cada bebida tiene un comando unico con el que se la elige.
#[derive(Debug, Default)]
pub struct DrinksMenu {
    drinks: HashMap<String, Drink>,
    order: Vec<String>,
}

impl DrinksMenu {
    pub fn new() -> DrinksMenu {
        DrinksMenu::default()
    }

    pub fn exists(&self, drink: &str) -> bool {
        self.drinks.contains_key(drink)
    }

    /// Agrega una bebida al menu. Se rechaza si ya existe una bebida con ese nombre
    /// o con ese comando, si el precio no es positivo, si alguna cantidad es negativa
    /// o si alguno de sus ingredientes no tiene contenedor.
    pub fn add_drink(
        &mut self,
        drink: &str,
        price: f64,
        bom: Bom,
        command: &str,
        materials: &MaterialsDispenser,
    ) -> bool {
        if self.exists(drink) {
            warn!("[MENU] {} is already in the menu", drink);
            return false;
        }
        if price.is_nan() || price <= 0.0 {
            warn!("[MENU] Invalid price {} for {}", price, drink);
            return false;
        }
        let invalid = bom.iter().find(|(_, quantity)| quantity.is_nan() || *quantity < 0.0);
        if let Some((material, quantity)) = invalid {
            warn!("[MENU] {} needs an invalid quantity {} of {}", drink, quantity, material);
            return false;
        }
        if let Some(other) = self.drink_for_command(command) {
            warn!("[MENU] Command {} is already used by {}", command, other);
            return false;
        }
        if let Some((material, _)) = bom.iter().find(|(material, _)| !materials.exists(material)) {
            warn!("[MENU] {} needs {}, which has no container", drink, material);
            return false;
        }
        self.drinks
            .insert(drink.to_string(), Drink::new(drink, price, bom, command));
        self.order.push(drink.to_string());
        debug!("[MENU] Added {} for {} with command {}", drink, price, command);
        true
    }

    pub fn get(&self, drink: &str) -> Option<&Drink> {
        self.drinks.get(drink)
    }

    pub fn price_of(&self, drink: &str) -> Option<f64> {
        self.get(drink).map(|entry| entry.price)
    }

    pub fn bom_of(&self, drink: &str) -> Option<&Bom> {
        self.get(drink).map(|entry| &entry.bom)
    }

    pub fn command_of(&self, drink: &str) -> Option<&str> {
        self.get(drink).map(|entry| entry.command.as_str())
    }

    pub fn drink_for_command(&self, command: &str) -> Option<&str> {
        self.order
            .iter()
            .find(|name| self.command_of(name) == Some(command))
            .map(String::as_str)
    }

    pub fn drinks(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cappuccino_bom() -> Bom {
        vec![
            ("water".to_string(), 250.0),
            ("milk".to_string(), 100.0),
            ("coffee".to_string(), 24.0),
        ]
    }

    fn materials() -> MaterialsDispenser {
        let mut materials = MaterialsDispenser::new();
        materials.allocate("water", 1000.0);
        materials.allocate("milk", 300.0);
        materials.allocate("coffee", 60.0);
        materials
    }

    #[test]
    fn should_know_a_drink_after_adding_it() {
        let mut menu = DrinksMenu::new();
        assert_eq!(false, menu.exists("cappuccino"));
        assert_eq!(true, menu.add_drink("cappuccino", 3.0, cappuccino_bom(), "/c", &materials()));
        assert_eq!(true, menu.exists("cappuccino"));
    }

    #[test]
    fn should_reject_a_repeated_drink() {
        let mut menu = DrinksMenu::new();
        let materials = materials();
        assert_eq!(true, menu.add_drink("cappuccino", 3.0, cappuccino_bom(), "/c", &materials));
        assert_eq!(false, menu.add_drink("cappuccino", 3.0, cappuccino_bom(), "/c", &materials));
        assert_eq!(vec!["cappuccino"], menu.drinks());
    }

    #[test]
    fn should_reject_a_repeated_command() {
        let mut menu = DrinksMenu::new();
        let materials = materials();
        menu.add_drink("cappuccino", 3.0, cappuccino_bom(), "/c", &materials);
        assert_eq!(false, menu.add_drink("cortado", 2.0, cappuccino_bom(), "/c", &materials));
        assert_eq!(false, menu.exists("cortado"));
    }

    #[test]
    fn should_reject_a_drink_with_a_material_without_container() {
        let mut menu = DrinksMenu::new();
        let bom = vec![("cacao".to_string(), 10.0)];
        assert_eq!(false, menu.add_drink("chocolate", 2.0, bom, "/h", &materials()));
        assert_eq!(false, menu.exists("chocolate"));
    }

    #[test]
    fn should_reject_a_drink_with_a_negative_quantity() {
        let mut menu = DrinksMenu::new();
        let bom = vec![("water".to_string(), -40.0)];
        assert_eq!(false, menu.add_drink("odd", 1.0, bom, "/o", &materials()));
        assert_eq!(false, menu.exists("odd"));
    }

    #[test]
    fn should_reject_a_drink_without_a_positive_price() {
        let mut menu = DrinksMenu::new();
        let materials = materials();
        assert_eq!(false, menu.add_drink("free", 0.0, cappuccino_bom(), "/f", &materials));
        assert_eq!(false, menu.add_drink("odd", -1.0, cappuccino_bom(), "/o", &materials));
        assert_eq!(true, menu.drinks().is_empty());
    }

    #[test]
    fn should_return_price_bom_and_command() {
        let mut menu = DrinksMenu::new();
        menu.add_drink("cappuccino", 3.0, cappuccino_bom(), "/c", &materials());
        assert_eq!(Some(3.0), menu.price_of("cappuccino"));
        assert_eq!(Some(&cappuccino_bom()), menu.bom_of("cappuccino"));
        assert_eq!(Some("/c"), menu.command_of("cappuccino"));
    }

    #[test]
    fn should_return_none_for_an_unknown_drink() {
        let menu = DrinksMenu::new();
        assert_eq!(None, menu.price_of("macchiatto"));
        assert_eq!(None, menu.bom_of("macchiatto"));
        assert_eq!(None, menu.command_of("macchiatto"));
    }

    #[test]
    fn should_find_a_drink_by_its_command() {
        let mut menu = DrinksMenu::new();
        menu.add_drink("cappuccino", 3.0, cappuccino_bom(), "/c", &materials());
        assert_eq!(Some("cappuccino"), menu.drink_for_command("/c"));
        assert_eq!(None, menu.drink_for_command("/x"));
    }
}
