use std::io::Write;

use crate::list::ListArgs;

#[derive(Default, clap::ValueEnum, Clone, Debug)]
pub enum LogLevel {
    Debug,
    Trace,
    #[default]
    Info,
    Error,
    Warn,
}

impl From<LogLevel> for tracing::Level {
    fn from(val: LogLevel) -> Self {
        match val {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
        }
    }
}

#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "shakedown")]
pub struct Cli {
    #[clap(
        long,
        global = true,
        default_value = "error",
        env = "LOG_LEVEL",
        help = "the verbosity level to print logs at."
    )]
    pub log_level: LogLevel,

    #[clap(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(
        self,
        out: &mut impl Write,
    ) -> shakedown_errors::Result<()> {
        shakedown_suite::link();

        match self.command {
            Command::List(args) => crate::list::run(args, out),
        }
    }
}

#[derive(clap::Subcommand, Debug, Clone)]
enum Command {
    #[clap(alias = "ls", alias = "l")]
    /// lists the tests eligible for a platform and version
    List(ListArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub(crate) struct WithConfig {
    #[clap(
        short = 'd',
        long = "config-dir",
        help = "the directory containing shakedown.toml."
    )]
    pub(crate) config_dir: Option<String>,
}
