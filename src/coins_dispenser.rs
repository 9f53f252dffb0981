//! Monedas que acepta la maquina.
use std::collections::HashMap;

use log::{debug, warn};

/// Monedas aceptadas con su valor. El orden de registro es el orden en que se
/// le piden las monedas al cliente.
#[derive(Debug, Default)]
pub struct AcceptedCoinsDispenser {
    values: HashMap<String, f64>,
    order: Vec<String>,
}

impl AcceptedCoinsDispenser {
    pub fn new() -> AcceptedCoinsDispenser {
        AcceptedCoinsDispenser::default()
    }

    pub fn exists(&self, coin: &str) -> bool {
        self.values.contains_key(coin)
    }

    pub fn add_coin(&mut self, coin: &str, value: f64) -> bool {
        if self.exists(coin) {
            warn!("[COINS] Coin {} already accepted", coin);
            return false;
        }
        if value.is_nan() || value <= 0.0 {
            warn!("[COINS] Invalid value {} for {}", value, coin);
            return false;
        }
        self.values.insert(coin.to_string(), value);
        self.order.push(coin.to_string());
        debug!("[COINS] Accepting {} worth {}", coin, value);
        true
    }

    pub fn value_of(&self, coin: &str) -> Option<f64> {
        self.values.get(coin).copied()
    }

    pub fn coins(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}
