use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use crate::app::Config;
use crate::logging::{Format, Level};
use crate::utils;

pub static ENV_LOG_LEVEL: &'static str = "ARCEAGER_LOG_LEVEL";
pub static ENV_LOGDIR: &'static str = "ARCEAGER_LOGDIR";
pub static ENV_LOG_FORMAT: &'static str = "ARCEAGER_LOG_FORMAT";

#[macro_export]
macro_rules! main {
    (|$args:ident: $sopt:ty, $ctx:ident: Context| $body:block; default) => {
        fn main() {
            let $args = <$sopt as $crate::app::prelude::StructOpt>::from_args();
            let config = $crate::app::Config::default();
            $crate::app::App::from_config(config)
                .main(move |$ctx: $crate::app::Context| $body)
                .run();
        }
    };
    (|$args:ident: $sopt:ty, $ctx:ident: Context| $body:block; @$field:ident) => {
        fn main() {
            let $args = <$sopt as $crate::app::prelude::StructOpt>::from_args();
            $crate::app::App::from_config($args.$field.clone())
                .main(move |$ctx: $crate::app::Context| $body)
                .run();
        }
    };
    (|$args:ident: $sopt:ty, $ctx:ident: Context| $body:block) => {
        $crate::main!(|$args: $sopt, $ctx: Context| $body; @common);
    };
    (|$args:ident: $sopt:ty, $ctx:ident: Context| $body:expr) => {
        $crate::main!(|$args: $sopt, $ctx: Context| { $body });
    };
}

#[derive(StructOpt, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Activate debug mode
    #[structopt(short = "d", long = "debug")]
    pub debug: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: u8,

    /// Silence console logs
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,

    /// Directory for log files; enables file logging
    #[structopt(long = "logdir", parse(from_os_str))]
    pub logdir: Option<PathBuf>,
}

impl CommonArgs {
    fn verbosity(&self) -> Level {
        if self.quiet {
            return Level::Off;
        }
        match (self.debug, self.verbose) {
            (_, v) if v >= 3 => Level::Trace,
            (true, _) | (_, 2) => Level::Debug,
            (_, 1) => Level::Info,
            _ => Level::Warning,
        }
    }
}

impl From<CommonArgs> for Config {
    fn from(c: CommonArgs) -> Config {
        let mut config = Config::default();
        config.exit_on_finish = true;
        config.logging.verbosity = c.verbosity();
        match utils::env::var_opt::<_, String>(ENV_LOG_LEVEL) {
            Ok(Some(level)) => match Level::from_str(&level) {
                Ok(level) => config.logging.verbosity = level,
                Err(_) => eprintln!("ignore {}: unknown level `{}`", ENV_LOG_LEVEL, level),
            },
            Ok(None) => {}
            Err(e) => eprintln!("ignore {}: {}", ENV_LOG_LEVEL, e),
        }
        match utils::env::var_opt::<_, Format>(ENV_LOG_FORMAT) {
            Ok(Some(format)) => config.logging.format = format,
            Ok(None) => {}
            Err(e) => eprintln!("ignore {}: {}", ENV_LOG_FORMAT, e),
        }
        let logdir = c.logdir
            .map(|dir| dir.to_string_lossy().into_owned())
            .or_else(|| utils::env::var_opt::<_, String>(ENV_LOGDIR).ok().and_then(|d| d));
        if let Some(dir) = logdir {
            config.logging.level = if c.verbose >= 3 {
                Level::Trace
            } else {
                Level::Debug
            };
            config.logging.logdir = dir;
            config.logging.mkdir = true;
        }
        config
    }
}
