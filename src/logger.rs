use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global logger, writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise `verbosity` picks the level:
/// 0 is warn, 1 is info, 2 is debug and anything higher is trace.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .try_init()
}
