/// Cell every new snake starts on.
pub const SPAWN_X: i32 = 0;
pub const SPAWN_Y: i32 = 0;

/// Direction every new snake starts moving in.
pub const SPAWN_VEL_X: i8 = 1;
pub const SPAWN_VEL_Y: i8 = 0;

/// Random draws made before falling back to a scan when placing fruit.
pub const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Address the HTTP service binds to when none is given.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Largest request body the `/validate` route reads (1 MiB).
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SNAKE_VALIDATOR_LOG";
