use crate::logger::LogLevel;
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "frontend/dist";

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(help = "Specify the address for the server (e.g., '127.0.0.1:8080').")]
    addr: Option<String>,
    #[arg(short, long, help = "Directory with the built frontend (trunk build output).")]
    dist: Option<PathBuf>,
    #[arg(long, help = "Log level")]
    log: Option<LogLevel>,
}

pub struct Config {
    pub addr: String,
    pub dist: PathBuf,
    pub log_level: LogLevel,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            addr: cli.addr.unwrap_or_else(|| DEFAULT_ADDR.to_owned()),
            dist: cli.dist.unwrap_or_else(|| PathBuf::from(DEFAULT_DIST)),
            log_level: cli.log.unwrap_or_default(),
        }
    }
}

pub fn get_args() -> Config {
    Cli::parse().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from(Cli::parse_from(["chessbet-server"]));
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.dist, PathBuf::from(DEFAULT_DIST));
        assert!(matches!(config.log_level, LogLevel::Info));
    }

    #[test]
    fn test_explicit_args() {
        let config = Config::from(Cli::parse_from([
            "chessbet-server",
            "0.0.0.0:9000",
            "--dist",
            "/srv/chessbet",
            "--log",
            "debug",
        ]));
        assert_eq!(config.addr, "0.0.0.0:9000");
        assert_eq!(config.dist, PathBuf::from("/srv/chessbet"));
        assert!(matches!(config.log_level, LogLevel::Debug));
    }
}
