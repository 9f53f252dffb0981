use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum VendingMachineError {
    #[error("unknown drink {0}")]
    UnknownDrink(String),
    #[error("not enough {0} to make the drink")]
    MakeDrinkFailed(String),
    #[error("could not take {0} out of its container")]
    TakeOutFailed(String),
    #[error("could not refill the {0} container")]
    RefillFailed(String),
    #[error("could not read the configuration: {0}")]
    ConfigReadError(String),
    #[error("invalid configuration: {0}")]
    ConfigParseError(String),
    #[error("terminal error: {0}")]
    IoError(String),
    #[error("could not initialize the logger")]
    LoggerError,
}

// io::Error y serde_json::Error no son PartialEq: las variantes guardan el texto.
impl From<std::io::Error> for VendingMachineError {
    fn from(error: std::io::Error) -> Self {
        VendingMachineError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for VendingMachineError {
    fn from(error: serde_json::Error) -> Self {
        VendingMachineError::ConfigParseError(error.to_string())
    }
}

impl From<log::SetLoggerError> for VendingMachineError {
    fn from(_: log::SetLoggerError) -> Self {
        VendingMachineError::LoggerError
    }
}
