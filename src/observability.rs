//! Structured diagnostics for the counting entry points.
//!
//! The `log_metric!` macro renders key/value pairs as a one-line JSON-ish
//! record and hands it to the `log` facade at `debug` level. Nothing is printed
//! unless a logger is installed (see `enable_verbose_logging`), and the whole
//! block is compiled out of release builds by `#[cfg(debug_assertions)]`.

/// Logs a structured key-value metric record, only in debug builds.
///
/// # Example
/// ```
/// use myrustlib::log_metric;
/// let byte_len = 4;
/// log_metric!("event"="analyze", "byte_len"=&byte_len);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::log::debug!("DOUBLES_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

/// Installs the process-wide `env_logger`: `Info` by default, overridable
/// through `RUST_LOG` (`RUST_LOG=debug` surfaces the `log_metric!` records),
/// `[LEVEL] message` lines, appended to `file` when one is given.
///
/// Fails if any logger is already installed; the existing one stays active.
#[cfg_attr(not(feature = "python"), allow(dead_code))]
pub(crate) fn install_logger(file: Option<std::fs::File>) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::new();

    builder.is_test(false);
    builder.filter_level(log::LevelFilter::Info);
    builder.parse_default_env();

    // Custom formatter: just print the level and message
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())?;
        buf.flush()?;
        Ok(())
    });

    if let Some(file) = file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()
}
