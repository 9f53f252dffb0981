pub mod coins_dispenser;
pub mod config;
pub mod constants;
pub mod container;
pub mod drink;
pub mod drinks_menu;
pub mod errors;
pub mod financials;
pub mod maintenance;
pub mod materials_dispenser;
pub mod operations;
pub mod simulator;
pub mod vending_machine;

use std::{io, path::PathBuf, process, time::Duration};

use clap::Parser;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use config::MachineConfig;
use constants::{DEFAULT_CONFIG_FILE, SIMULATED_CUSTOMERS};
use errors::VendingMachineError;
use maintenance::refill_all_containers;
use simulator::run_simulation;
use vending_machine::{ExitCode, VendingMachine};

#[derive(Parser, Debug)]
#[clap(version, about = "Coin operated drinks vending machine", long_about = None)]
struct Args {
    /// Archivo JSON con la configuracion de la maquina
    #[clap(default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Atiende clientes aleatorios en lugar de leer de la terminal
    #[clap(long, value_name = "CUSTOMERS")]
    simulate: Option<Option<usize>>,
}

impl Args {
    fn customers(&self) -> Option<usize> {
        self.simulate.map(|customers| customers.unwrap_or(SIMULATED_CUSTOMERS))
    }
}

fn run() -> Result<ExitCode, VendingMachineError> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let args = Args::parse();
    let config = MachineConfig::load_or_default(&args.config)?;
    let (mut business, admin_commands) = config.build();

    match args.customers() {
        None => {
            let stdin = io::stdin();
            let mut machine = VendingMachine::new(
                business,
                admin_commands,
                Duration::from_millis(config.brew_time_ms),
                stdin.lock(),
                io::stdout(),
            );
            machine.run()
        }
        Some(customers) => {
            if let Err(material) = refill_all_containers(&mut business.materials) {
                error!("[VMS] Could not refill {} at startup", material);
                return Ok(ExitCode::RefillFailure);
            }
            business.financials.reset();
            let report = run_simulation(&mut business, customers, &mut rand::thread_rng())?;
            info!("[VMS] Simulation finished: {:?}", report);
            Ok(ExitCode::ShutdownOrdered)
        }
    }
}

fn main() {
    match run() {
        Ok(exit) => process::exit(exit.code()),
        Err(err) => {
            error!("[VMS] {}", err);
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
