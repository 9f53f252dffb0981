//! Operaciones de venta: disponibilidad, cobro y preparacion de bebidas.
use std::collections::HashMap;

use log::{debug, error, info};

use crate::{
    coins_dispenser::AcceptedCoinsDispenser, drinks_menu::DrinksMenu,
    errors::VendingMachineError, financials::VendingMachineFinancials,
    materials_dispenser::MaterialsDispenser,
};

/// Quien paga una bebida. Se le pregunta cuantas monedas de cada tipo entrega.
pub trait CoinTender {
    fn coins_for(&mut self, coin: &str, value: f64) -> Result<u32, VendingMachineError>;
}

#[derive(Debug, PartialEq)]
pub enum CheckoutOutcome {
    Paid { change: f64 },
    Insufficient { refund: f64 },
}

#[derive(Debug, PartialEq)]
pub enum SaleOutcome {
    Served { change: f64 },
    Refunded { refund: f64 },
    Unavailable,
}

/// Los cuatro registros de la maquina. Es el unico duenio de su estado.
#[derive(Debug, Default)]
pub struct DrinksBusiness {
    pub materials: MaterialsDispenser,
    pub coins: AcceptedCoinsDispenser,
    pub menu: DrinksMenu,
    pub financials: VendingMachineFinancials,
}

impl DrinksBusiness {
    pub fn new() -> DrinksBusiness {
        DrinksBusiness::default()
    }

    /// Una bebida esta disponible si existe, tiene ingredientes y todos alcanzan.
    pub fn check_availability(&self, drink: &str) -> bool {
        match self.menu.bom_of(drink) {
            Some(bom) if !bom.is_empty() => required_materials(bom)
                .iter()
                .all(|(material, quantity)| self.materials.has_at_least(material, *quantity)),
            _ => false,
        }
    }

    pub fn available_drinks(&self) -> Vec<&str> {
        self.menu
            .drinks()
            .into_iter()
            .filter(|drink| self.check_availability(drink))
            .collect()
    }

    /// Pide las monedas en orden de registro hasta cubrir el precio.
    /// Una vez que se pasa a la siguiente moneda no se vuelve a pedir la anterior.
    pub fn checkout(
        &self,
        drink: &str,
        tender: &mut dyn CoinTender,
    ) -> Result<CheckoutOutcome, VendingMachineError> {
        let price = self
            .menu
            .price_of(drink)
            .ok_or_else(|| VendingMachineError::UnknownDrink(drink.to_string()))?;
        let mut payment = 0.0;
        for coin in self.coins.coins() {
            let value = match self.coins.value_of(coin) {
                Some(value) => value,
                None => continue,
            };
            let count = tender.coins_for(coin, value)?;
            payment += value * f64::from(count);
            debug!("[OPERATIONS] {} x {}, paid {:.2} of {:.2}", count, coin, payment, price);
            if price <= payment {
                return Ok(CheckoutOutcome::Paid {
                    change: payment - price,
                });
            }
        }
        info!(
            "[OPERATIONS] {:.2} is not enough for {} that costs {:.2}",
            payment, drink, price
        );
        Ok(CheckoutOutcome::Insufficient { refund: payment })
    }

    /// Saca del inventario los ingredientes de la bebida. Primero valida todos,
    /// asi que si falla el inventario queda como estaba.
    pub fn make_drink(&mut self, drink: &str) -> Result<(), VendingMachineError> {
        let bom = self
            .menu
            .bom_of(drink)
            .ok_or_else(|| VendingMachineError::UnknownDrink(drink.to_string()))?;
        let required = required_materials(bom);

        if let Some((material, _)) = required
            .iter()
            .find(|(material, quantity)| !self.materials.has_at_least(material, *quantity))
        {
            error!("[OPERATIONS] Can not make {}, not enough {}", drink, material);
            return Err(VendingMachineError::MakeDrinkFailed(material.to_string()));
        }

        for (material, quantity) in required {
            if !self.materials.take_out(&material, quantity) {
                error!("[OPERATIONS] Could not take {} of {} for {}", quantity, material, drink);
                return Err(VendingMachineError::TakeOutFailed(material));
            }
        }
        debug!("[OPERATIONS] Made {}", drink);
        Ok(())
    }

    /// Venta completa: disponibilidad, cobro, preparacion y registro de la recaudacion.
    pub fn sell(
        &mut self,
        drink: &str,
        tender: &mut dyn CoinTender,
    ) -> Result<SaleOutcome, VendingMachineError> {
        if !self.check_availability(drink) {
            return Ok(SaleOutcome::Unavailable);
        }
        match self.checkout(drink, tender)? {
            CheckoutOutcome::Paid { change } => {
                self.make_drink(drink)?;
                let price = self.menu.price_of(drink).unwrap_or(0.0);
                self.financials.add(price);
                info!("[OPERATIONS] Sold {} for {:.2}, change {:.2}", drink, price, change);
                Ok(SaleOutcome::Served { change })
            }
            CheckoutOutcome::Insufficient { refund } => Ok(SaleOutcome::Refunded { refund }),
        }
    }
}

/// Suma las cantidades de un mismo ingrediente, manteniendo el orden de la receta.
fn required_materials(bom: &[(String, f64)]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut order = Vec::new();
    for (material, quantity) in bom {
        let total = totals.entry(material.as_str()).or_insert_with(|| {
            order.push(material.as_str());
            0.0
        });
        *total += quantity;
    }
    order
        .into_iter()
        .map(|material| (material.to_string(), totals[material]))
        .collect()
}
