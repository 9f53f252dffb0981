//! Parametros de configuracion de la maquina expendedora

/// Archivo de configuracion que se busca si no se indica otro por linea de comandos
pub const DEFAULT_CONFIG_FILE: &str = "machine.json";

/// Tiempo que tarda en prepararse una bebida (es solo una pausa)
pub const BREW_TIME_IN_MS: u64 = 4000;

/// Cantidad de clientes que atiende el simulador si no se indica otra
pub const SIMULATED_CUSTOMERS: usize = 100;

/// Cantidad maxima de monedas de un mismo tipo que entrega un cliente simulado
pub const MAX_COINS_PER_TYPE: u32 = 6;

/// Comando de mantenimiento para reportar el nivel de los contenedores
pub const REPORT_COMMAND: &str = "/r";

/// Comando de mantenimiento para llenar todos los contenedores
pub const REFILL_COMMAND: &str = "/f";

/// Comando de mantenimiento para agregar un nuevo comando de mantenimiento
pub const ADD_COMMAND: &str = "/a";

/// Comando de mantenimiento para ver la recaudacion acumulada
pub const REVENUE_COMMAND: &str = "/v";

/// Comando de mantenimiento para reiniciar la recaudacion
pub const RESET_REVENUE_COMMAND: &str = "/z";

/// Comando de mantenimiento para volver a atender clientes
pub const RESUME_COMMAND: &str = "/m";

/// Comando de mantenimiento para apagar la maquina
pub const SHUTDOWN_COMMAND: &str = "/s";
