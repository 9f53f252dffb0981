//! Lectura de la configuracion de la maquina desde un archivo JSON.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::{
    constants::{
        ADD_COMMAND, BREW_TIME_IN_MS, REFILL_COMMAND, REPORT_COMMAND, RESET_REVENUE_COMMAND,
        RESUME_COMMAND, REVENUE_COMMAND, SHUTDOWN_COMMAND,
    },
    errors::VendingMachineError,
    maintenance::AdminCommands,
    operations::DrinksBusiness,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JsonMaterial {
    pub name: String,
    pub capacity: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JsonCoin {
    pub name: String,
    pub value: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JsonBomLine {
    pub material: String,
    pub quantity: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JsonDrink {
    pub name: String,
    pub price: f64,
    pub bom: Vec<JsonBomLine>,
    pub command: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JsonAdminCommand {
    pub keystroke: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MachineConfig {
    pub materials: Vec<JsonMaterial>,
    pub coins: Vec<JsonCoin>,
    pub menu: Vec<JsonDrink>,
    #[serde(default = "default_admin_commands")]
    pub admin_commands: Vec<JsonAdminCommand>,
    #[serde(default = "default_brew_time")]
    pub brew_time_ms: u64,
}

fn default_brew_time() -> u64 {
    BREW_TIME_IN_MS
}

fn admin_command(keystroke: &str, description: &str) -> JsonAdminCommand {
    JsonAdminCommand {
        keystroke: keystroke.to_string(),
        description: description.to_string(),
    }
}

fn default_admin_commands() -> Vec<JsonAdminCommand> {
    vec![
        admin_command(REPORT_COMMAND, "Report containers current volume"),
        admin_command(REFILL_COMMAND, "Refill containers to full capacity"),
        admin_command(ADD_COMMAND, "Add new maintenance command"),
        admin_command(REVENUE_COMMAND, "Report current revenue"),
        admin_command(RESET_REVENUE_COMMAND, "Reset revenue"),
        admin_command(RESUME_COMMAND, "Resume selling drinks"),
        admin_command(SHUTDOWN_COMMAND, "Shut down the machine"),
    ]
}

fn drink(name: &str, price: f64, bom: &[(&str, f64)], command: &str) -> JsonDrink {
    JsonDrink {
        name: name.to_string(),
        price,
        bom: bom
            .iter()
            .map(|(material, quantity)| JsonBomLine {
                material: material.to_string(),
                quantity: *quantity,
            })
            .collect(),
        command: command.to_string(),
    }
}

impl Default for MachineConfig {
    /// Maquina con agua, leche y cafe, monedas de dolar y tres bebidas.
    fn default() -> Self {
        let materials = [("water", 1000.0), ("milk", 300.0), ("coffee", 60.0)];
        let coins = [
            ("Penny", 0.01),
            ("Nickel", 0.05),
            ("Dime", 0.10),
            ("Quarter", 0.25),
        ];
        MachineConfig {
            materials: materials
                .iter()
                .map(|(name, capacity)| JsonMaterial {
                    name: name.to_string(),
                    capacity: *capacity,
                })
                .collect(),
            coins: coins
                .iter()
                .map(|(name, value)| JsonCoin {
                    name: name.to_string(),
                    value: *value,
                })
                .collect(),
            menu: vec![
                drink("expresso", 1.5, &[("water", 50.0), ("milk", 0.0), ("coffee", 18.0)], "/e"),
                drink("late", 1.0, &[("water", 200.0), ("milk", 150.0), ("coffee", 24.0)], "/l"),
                drink(
                    "cappuccino",
                    3.0,
                    &[("water", 250.0), ("milk", 100.0), ("coffee", 24.0)],
                    "/c",
                ),
            ],
            admin_commands: default_admin_commands(),
            brew_time_ms: BREW_TIME_IN_MS,
        }
    }
}

impl MachineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MachineConfig, VendingMachineError> {
        let file = File::open(&path).map_err(|error| {
            VendingMachineError::ConfigReadError(format!(
                "{}: {}",
                path.as_ref().display(),
                error
            ))
        })?;
        let reader = BufReader::new(file);
        let config: MachineConfig = serde_json::from_reader(reader)?;
        info!("[CONFIG] Loaded {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<MachineConfig, VendingMachineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Usa el archivo si existe, si no la configuracion por defecto.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<MachineConfig, VendingMachineError> {
        if path.as_ref().exists() {
            return MachineConfig::from_file(path);
        }
        info!(
            "[CONFIG] {} not found, using the default machine",
            path.as_ref().display()
        );
        Ok(MachineConfig::default())
    }

    /// Registra ingredientes, monedas y bebidas (en ese orden, asi las recetas
    /// encuentran sus contenedores). Los registros rechazados se informan y se saltean.
    pub fn build(&self) -> (DrinksBusiness, AdminCommands) {
        let mut business = DrinksBusiness::new();
        for material in &self.materials {
            if !business.materials.allocate(&material.name, material.capacity) {
                warn!("[CONFIG] Addition of {} container failed", material.name);
            }
        }
        for coin in &self.coins {
            if !business.coins.add_coin(&coin.name, coin.value) {
                warn!("[CONFIG] Addition of {} coin failed", coin.name);
            }
        }
        for drink in &self.menu {
            let bom = drink
                .bom
                .iter()
                .map(|line| (line.material.clone(), line.quantity))
                .collect();
            if !business.menu.add_drink(
                &drink.name,
                drink.price,
                bom,
                &drink.command,
                &business.materials,
            ) {
                warn!("[CONFIG] Addition of {} to the menu failed", drink.name);
            }
        }

        let mut admin_commands = AdminCommands::new();
        for command in &self.admin_commands {
            if !admin_commands.add(&command.keystroke, &command.description) {
                warn!("[CONFIG] Addition of admin command {} failed", command.keystroke);
            }
        }
        (business, admin_commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MACHINE: &str = r#"{
        "materials": [
            { "name": "water", "capacity": 500 },
            { "name": "coffee", "capacity": 50 }
        ],
        "coins": [
            { "name": "quarter", "value": 0.25 },
            { "name": "dime", "value": 0.10 }
        ],
        "menu": [
            {
                "name": "expresso",
                "price": 1.5,
                "bom": [
                    { "material": "water", "quantity": 50 },
                    { "material": "coffee", "quantity": 18 }
                ],
                "command": "/e"
            },
            {
                "name": "chocolate",
                "price": 2.0,
                "bom": [{ "material": "cacao", "quantity": 30 }],
                "command": "/h"
            }
        ],
        "brew_time_ms": 0
    }"#;

    #[test]
    fn should_parse_a_machine() {
        let config = MachineConfig::from_json(SMALL_MACHINE).unwrap();
        assert_eq!(2, config.materials.len());
        assert_eq!("dime", config.coins[1].name);
        assert_eq!(0, config.brew_time_ms);
        assert_eq!(default_admin_commands(), config.admin_commands);
    }

    #[test]
    fn should_skip_drinks_with_unknown_materials() {
        let config = MachineConfig::from_json(SMALL_MACHINE).unwrap();
        let (business, admin_commands) = config.build();
        assert_eq!(vec!["water", "coffee"], business.materials.materials());
        assert_eq!(vec!["quarter", "dime"], business.coins.coins());
        assert_eq!(vec!["expresso"], business.menu.drinks());
        assert_eq!(true, admin_commands.exists(SHUTDOWN_COMMAND));
    }

    #[test]
    fn should_fail_with_invalid_json() {
        let result = MachineConfig::from_json("{ \"materials\": 3 }");
        assert!(matches!(result, Err(VendingMachineError::ConfigParseError(_))));
    }

    #[test]
    fn should_fail_to_read_a_missing_file() {
        let result = MachineConfig::from_file("this/file/does/not/exist.json");
        assert!(matches!(result, Err(VendingMachineError::ConfigReadError(_))));
    }

    #[test]
    fn should_build_the_default_machine() {
        let (business, _) = MachineConfig::default().build();
        assert_eq!(vec!["water", "milk", "coffee"], business.materials.materials());
        assert_eq!(vec!["Penny", "Nickel", "Dime", "Quarter"], business.coins.coins());
        assert_eq!(vec!["expresso", "late", "cappuccino"], business.menu.drinks());
        assert_eq!(Some("cappuccino"), business.menu.drink_for_command("/c"));
    }
}
