use chrono::Local;
use clap::ValueEnum;
use colored::*;
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};
use std::io::Write;

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

#[derive(ValueEnum, Clone, Copy, Default, Debug, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN".yellow().bold(),
        Level::Info => "INFO".green().bold(),
        Level::Debug => "DEBUG".blue().bold(),
        Level::Trace => "TRACE".purple().bold(),
    }
}

/// `RUST_LOG` still wins over `--log`; actix internals stay at warn either way.
pub fn init(log_level: LogLevel) {
    let filter: LevelFilter = log_level.into();

    Builder::from_env(Env::default().default_filter_or(filter.to_string()))
        .target(Target::Stdout)
        .filter_module("actix_server", LevelFilter::Warn)
        .filter_module("actix_web", LevelFilter::Warn)
        .format(|buf, record| {
            let timestamp = format!("[{}]", Local::now().format("%Y-%m-%d %H:%M:%S")).black();

            if record.target().starts_with(CRATE_TARGET) {
                writeln!(buf, "{} {} {}", timestamp, level_label(record.level()), record.args())
            } else {
                writeln!(
                    buf,
                    "{} {} {} {}",
                    timestamp,
                    level_label(record.level()),
                    record.target().dimmed(),
                    record.args()
                )
            }
        })
        .init();
}
