//! Clientes aleatorios que usan la maquina sin terminal.
use log::{debug, info};
use rand::{seq::SliceRandom, Rng};

use crate::{
    constants::MAX_COINS_PER_TYPE,
    errors::VendingMachineError,
    maintenance::refill_all_containers,
    operations::{CoinTender, DrinksBusiness, SaleOutcome},
};

/// Cliente que entrega una cantidad aleatoria de monedas de cada tipo.
pub struct RandomCustomer<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomCustomer<'a, R> {
    pub fn new(rng: &'a mut R) -> RandomCustomer<'a, R> {
        RandomCustomer { rng }
    }

    pub fn choose_drink(&mut self, available: &[String]) -> Option<String> {
        available.choose(&mut *self.rng).cloned()
    }
}

impl<'a, R: Rng> CoinTender for RandomCustomer<'a, R> {
    fn coins_for(&mut self, _coin: &str, _value: f64) -> Result<u32, VendingMachineError> {
        Ok(self.rng.gen_range(0, MAX_COINS_PER_TYPE + 1))
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct SimulationReport {
    pub served: usize,
    pub refunded: usize,
    pub unavailable: usize,
    pub refills: usize,
    pub revenue: f64,
}

/// Atiende `customers` clientes. Cada uno elige una bebida disponible al azar.
/// Cuando no queda ninguna se llenan todos los contenedores, como haria el operador.
pub fn run_simulation<R: Rng>(
    business: &mut DrinksBusiness,
    customers: usize,
    rng: &mut R,
) -> Result<SimulationReport, VendingMachineError> {
    let mut report = SimulationReport::default();
    for customer in 0..customers {
        let mut available: Vec<String> = business
            .available_drinks()
            .into_iter()
            .map(String::from)
            .collect();
        if available.is_empty() {
            info!("[SIMULATOR] No drinks available, refilling containers");
            refill_all_containers(&mut business.materials)
                .map_err(VendingMachineError::RefillFailed)?;
            report.refills += 1;
            available = business
                .available_drinks()
                .into_iter()
                .map(String::from)
                .collect();
        }
        let mut tender = RandomCustomer::new(rng);
        let drink = match tender.choose_drink(&available) {
            Some(drink) => drink,
            None => {
                debug!("[SIMULATOR] Customer {} found nothing to buy", customer);
                report.unavailable += 1;
                continue;
            }
        };

        match business.sell(&drink, &mut tender)? {
            SaleOutcome::Served { change } => {
                debug!("[SIMULATOR] Customer {} got {}, change {:.2}", customer, drink, change);
                report.served += 1;
            }
            SaleOutcome::Refunded { refund } => {
                debug!("[SIMULATOR] Customer {} got back {:.2}", customer, refund);
                report.refunded += 1;
            }
            SaleOutcome::Unavailable => {
                debug!("[SIMULATOR] {} ran out before customer {} paid", drink, customer);
                report.unavailable += 1;
            }
        }
    }
    report.revenue = business.financials.current();
    info!(
        "[SIMULATOR] Served {} | Refunded {} | Unavailable {} | Refills {} | Revenue {:.2}",
        report.served, report.refunded, report.unavailable, report.refills, report.revenue
    );
    Ok(report)
}
