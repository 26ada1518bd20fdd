//! Constants used throughout the cr-render application

/// Literal placeholder replaced by the release name
pub const RELEASE_TOKEN: &str = "__RELEASE__";

/// Literal placeholder replaced by the PostgreSQL password
pub const PG_PASSWORD_TOKEN: &str = "__PG_PASSWORD__";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
