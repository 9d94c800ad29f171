//! Logger setup for the driver binary. The library crates only use the
//! `log` facade.

use log::LevelFilter;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BULWARK_LOG";

/// Parse a level name, falling back to `Info` for anything unrecognised.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install a stderr logger at `level`.
pub fn setup_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

/// Install the stderr logger at the level named by `BULWARK_LOG`.
pub fn setup_from_env() -> Result<(), log::SetLoggerError> {
    let value = std::env::var(LOG_ENV).ok();
    setup_logging(level_from(value.as_deref()))
}
