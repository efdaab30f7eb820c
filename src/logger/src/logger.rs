use log::{Level, LevelFilter};
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use thiserror::Error;

/// Environment variable overriding the verbosity requested on the command line.
pub const LOG_ENV_VAR: &str = "PED_PCA_LOG";

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to initialize logger. A global logger may already be set")]
    SetLogger(#[source] log::SetLoggerError),
}

#[derive(Debug)]
pub struct Logger;

impl Logger {

    /// Initialize the global logger.
    ///
    /// Verbosity levels: 0: Error | 1: Warn | 2: Info | 3: Debug | 4+: Trace
    ///
    /// # Errors
    /// - `SetLogger` if a global logger was already initialized.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default().filter(LOG_ENV_VAR);

        Builder::new().filter_level(log_level)
            .format(|buf, record| {
                // Errors carry their source location.
                let (traceback, set_intensity) = match record.level() {
                    Level::Error => (
                        format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)),
                        true
                    ),
                    _ => (String::new(), false)
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(set_intensity);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .try_init()
            .map_err(LoggerError::SetLogger)
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }
}
