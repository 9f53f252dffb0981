use log::info;

/// Recaudacion acumulada por las ventas.
#[derive(Debug, Default)]
pub struct VendingMachineFinancials {
    revenue: f64,
}

impl VendingMachineFinancials {
    pub fn new() -> VendingMachineFinancials {
        VendingMachineFinancials::default()
    }

    pub fn reset(&mut self) -> f64 {
        info!("[FINANCIALS] Revenue reset, was {:.2}", self.revenue);
        self.revenue = 0.0;
        self.revenue
    }

    pub fn add(&mut self, amount: f64) {
        self.revenue += amount;
    }

    pub fn current(&self) -> f64 {
        self.revenue
    }
}
