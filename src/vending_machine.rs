//! Ciclo principal de la maquina: atiende clientes y, cuando no queda ninguna
//! bebida disponible, pasa a mantenimiento.
use std::{
    io::{BufRead, Write},
    thread,
    time::Duration,
};

use log::{debug, error, info, warn};

use crate::{
    constants::{
        ADD_COMMAND, REFILL_COMMAND, REPORT_COMMAND, RESET_REVENUE_COMMAND, RESUME_COMMAND,
        REVENUE_COMMAND, SHUTDOWN_COMMAND,
    },
    errors::VendingMachineError,
    maintenance::{refill_all_containers, report_containers_levels, AdminCommands},
    operations::{CoinTender, DrinksBusiness, SaleOutcome},
};

/// Codigos con los que termina el proceso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    ShutdownOrdered,
    RefillFailure,
    UnrecognizedStatus,
    AdminCommandsInconsistency,
    MakeDrinkFailed,
    DrinkAvailabilityInconsistency,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        match self {
            ExitCode::ShutdownOrdered => 0,
            ExitCode::RefillFailure => 90,
            ExitCode::UnrecognizedStatus => 91,
            ExitCode::AdminCommandsInconsistency => 92,
            ExitCode::MakeDrinkFailed => 93,
            ExitCode::DrinkAvailabilityInconsistency => 94,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Running,
    Maintenance,
}

/// Comandos que el ciclo de mantenimiento necesita para poder operar.
const REQUIRED_ADMIN_COMMANDS: [&str; 3] = [REFILL_COMMAND, RESUME_COMMAND, SHUTDOWN_COMMAND];

pub struct VendingMachine<R: BufRead, W: Write> {
    business: DrinksBusiness,
    admin_commands: AdminCommands,
    brew_time: Duration,
    status: OperationStatus,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> VendingMachine<R, W> {
    pub fn new(
        business: DrinksBusiness,
        admin_commands: AdminCommands,
        brew_time: Duration,
        input: R,
        output: W,
    ) -> VendingMachine<R, W> {
        VendingMachine {
            business,
            admin_commands,
            brew_time,
            status: OperationStatus::Running,
            input,
            output,
        }
    }

    pub fn business(&self) -> &DrinksBusiness {
        &self.business
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Llena los contenedores, reinicia la recaudacion y atiende hasta que se
    /// ordena apagar la maquina (o se termina la entrada).
    pub fn run(&mut self) -> Result<ExitCode, VendingMachineError> {
        if let Some(missing) = REQUIRED_ADMIN_COMMANDS
            .iter()
            .find(|command| !self.admin_commands.exists(command))
        {
            error!("[VMS] Admin command {} is missing", missing);
            return Ok(ExitCode::AdminCommandsInconsistency);
        }
        if let Err(material) = refill_all_containers(&mut self.business.materials) {
            error!("[VMS] Could not refill {} at startup", material);
            return Ok(ExitCode::RefillFailure);
        }
        self.business.financials.reset();

        loop {
            let exit = match self.status {
                OperationStatus::Running => self.running_cycle()?,
                OperationStatus::Maintenance => self.maintenance_cycle()?,
            };
            if let Some(exit) = exit {
                info!("[VMS] Exiting with code {}", exit.code());
                return Ok(exit);
            }
        }
    }

    fn running_cycle(&mut self) -> Result<Option<ExitCode>, VendingMachineError> {
        let available: Vec<String> = self
            .business
            .available_drinks()
            .into_iter()
            .map(String::from)
            .collect();
        if available.is_empty() {
            writeln!(self.output, "Maintenance operations triggered - NO DRINKS AVAILABLE")?;
            info!("[VMS] No drinks available, switching to maintenance");
            self.status = OperationStatus::Maintenance;
            return Ok(None);
        }

        writeln!(self.output, "Welcome! These are the drinks you can select:")?;
        for drink in &available {
            let price = self.business.menu.price_of(drink).unwrap_or(0.0);
            let command = self.business.menu.command_of(drink).unwrap_or_default();
            writeln!(self.output, "Want {} for {:.2}? Then type: {}", drink, price, command)?;
        }
        write!(self.output, "So what is your choice? ")?;
        self.output.flush()?;

        let choice = match read_line(&mut self.input)? {
            Some(choice) => choice,
            None => return Ok(Some(ExitCode::ShutdownOrdered)),
        };
        let drink = match self.business.menu.drink_for_command(&choice) {
            Some(drink) if available.iter().any(|name| name == drink) => drink.to_string(),
            _ => {
                writeln!(self.output, "Your order {} is invalid - Please reorder", choice)?;
                return Ok(None);
            }
        };
        writeln!(self.output, "You ordered {}", drink)?;

        let mut tender = TerminalTender {
            input: &mut self.input,
            output: &mut self.output,
        };
        match self.business.sell(&drink, &mut tender) {
            Ok(SaleOutcome::Served { change }) => {
                writeln!(self.output, "Checkout successful, here is your change: {:.2}", change)?;
                writeln!(self.output, "Making {} - Please wait", drink)?;
                thread::sleep(self.brew_time);
                writeln!(self.output, "{} is ready - Enjoy!", drink)?;
                Ok(None)
            }
            Ok(SaleOutcome::Refunded { refund }) => {
                let price = self.business.menu.price_of(&drink).unwrap_or(0.0);
                writeln!(
                    self.output,
                    "{:.2} is insufficient for {} that costs {:.2}. Here is your money back: {:.2}",
                    refund, drink, price, refund
                )?;
                Ok(None)
            }
            Ok(SaleOutcome::Unavailable) => {
                writeln!(self.output, "{} is no longer available", drink)?;
                Ok(None)
            }
            Err(err) => match exit_code_for(&err) {
                Some(exit) => {
                    error!("[VMS] Could not make {}: {}", drink, err);
                    writeln!(
                        self.output,
                        "We cannot make your {}, please take your payment back",
                        drink
                    )?;
                    Ok(Some(exit))
                }
                None => Err(err),
            },
        }
    }

    fn maintenance_cycle(&mut self) -> Result<Option<ExitCode>, VendingMachineError> {
        for (keystroke, description) in self.admin_commands.iter() {
            writeln!(self.output, "For {} type {}", description, keystroke)?;
        }
        write!(self.output, "So what kind of maintenance you want to do? ")?;
        self.output.flush()?;

        let choice = match read_line(&mut self.input)? {
            Some(choice) => choice,
            None => return Ok(Some(ExitCode::ShutdownOrdered)),
        };
        if !self.admin_commands.exists(&choice) {
            writeln!(
                self.output,
                "Your command {} was not recognized. Please select one of the commands displayed",
                choice
            )?;
            return Ok(None);
        }
        debug!("[VMS] Admin command {}", choice);

        match choice.as_str() {
            REPORT_COMMAND => {
                for level in report_containers_levels(&self.business.materials) {
                    writeln!(
                        self.output,
                        "Container of {} with capacity {} is filled at {}",
                        level.material, level.capacity, level.volume
                    )?;
                }
            }
            REFILL_COMMAND => {
                if let Err(material) = refill_all_containers(&mut self.business.materials) {
                    error!("[VMS] {} container refill failure", material);
                    return Ok(Some(ExitCode::RefillFailure));
                }
                writeln!(self.output, "All containers refilled")?;
            }
            ADD_COMMAND => self.add_admin_command()?,
            REVENUE_COMMAND => {
                writeln!(
                    self.output,
                    "Current revenue: {:.2}",
                    self.business.financials.current()
                )?;
            }
            RESET_REVENUE_COMMAND => {
                let revenue = self.business.financials.current();
                self.business.financials.reset();
                writeln!(self.output, "Revenue of {:.2} closed, starting from 0", revenue)?;
            }
            RESUME_COMMAND => {
                writeln!(self.output, "Back to selling drinks")?;
                self.status = OperationStatus::Running;
            }
            SHUTDOWN_COMMAND => {
                writeln!(self.output, "Shut down command triggered by administrator")?;
                return Ok(Some(ExitCode::ShutdownOrdered));
            }
            other => {
                writeln!(self.output, "Command {} has no action yet", other)?;
            }
        }
        Ok(None)
    }

    fn add_admin_command(&mut self) -> Result<(), VendingMachineError> {
        write!(self.output, "New command keystroke: ")?;
        self.output.flush()?;
        let keystroke = match read_line(&mut self.input)? {
            Some(keystroke) if !keystroke.is_empty() => keystroke,
            _ => return Ok(()),
        };
        write!(self.output, "Description: ")?;
        self.output.flush()?;
        let description = read_line(&mut self.input)?.unwrap_or_default();
        if self.admin_commands.add(&keystroke, &description) {
            writeln!(self.output, "Command {} added", keystroke)?;
        } else {
            warn!("[VMS] Admin command {} already exists", keystroke);
            writeln!(
                self.output,
                "{} already available in the admin commands list",
                keystroke
            )?;
        }
        Ok(())
    }
}

/// Errores de una venta que terminan el proceso. El resto se propaga.
fn exit_code_for(error: &VendingMachineError) -> Option<ExitCode> {
    match error {
        VendingMachineError::TakeOutFailed(_) => Some(ExitCode::MakeDrinkFailed),
        VendingMachineError::MakeDrinkFailed(_) | VendingMachineError::UnknownDrink(_) => {
            Some(ExitCode::DrinkAvailabilityInconsistency)
        }
        _ => None,
    }
}

/// Lee una linea sin el salto de linea. `None` si se termino la entrada.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, VendingMachineError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Cliente en la terminal. Una cantidad que no es un numero cuenta como cero monedas.
struct TerminalTender<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> CoinTender for TerminalTender<'a, R, W> {
    fn coins_for(&mut self, coin: &str, value: f64) -> Result<u32, VendingMachineError> {
        write!(self.output, " <{}> ({:.2}): How many? ", coin, value)?;
        self.output.flush()?;
        let count = read_line(&mut *self.input)?
            .and_then(|line| line.parse::<u32>().ok())
            .unwrap_or(0);
        Ok(count)
    }
}
