use std::env;
use std::error::Error;
use std::fmt;
use std::process;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use slog::Logger;

pub use self::main::CommonArgs;
use crate::logging::{AppLogger, Config as LogConfig};

#[macro_use]
mod main;
pub mod prelude;

pub type MainResult = Result<(), Box<dyn Error + Send + Sync>>;

#[derive(Debug)]
struct AppError {
    code: i32,
    error: Box<dyn Error + Send + Sync>,
}

impl AppError {
    pub fn new<E>(code: i32, error: E) -> AppError
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        AppError {
            code: code,
            error: error.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.source()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (code: {})", self.error, self.code)
    }
}

/// Handed to the main function of an `App`.
#[derive(Debug)]
pub struct Context {
    pub logger: Logger,
    pub accessid: String,
    pub accesstime: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub exit_on_finish: bool,
    pub logging: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exit_on_finish: false,
            logging: LogConfig::default(),
        }
    }
}

/// Runs a main function between logger setup and teardown and turns its
/// result into an exit code.
pub struct App {
    config: Config,
    main_fn: Option<Box<dyn FnMut(Context) -> MainResult + 'static>>,
    logger: Option<AppLogger>,
    context: Option<Context>,
}

impl App {
    pub fn new() -> Self {
        App::from_config(Config::default())
    }

    pub fn from_config<C: Into<Config>>(config: C) -> Self {
        App {
            config: config.into(),
            main_fn: None,
            logger: None,
            context: None,
        }
    }

    pub fn main<F>(mut self, f: F) -> Self
    where
        F: FnMut(Context) -> MainResult + 'static,
    {
        self.main_fn = Some(Box::new(f));
        self
    }

    /// Returns the exit code unless `exit_on_finish` terminates the process.
    pub fn run(mut self) -> i32 {
        let mut code = App::initialize(&mut self);
        if code.is_ok() {
            code = App::exec(&mut self);
        };
        App::finalize(&mut self); // `finalize` must not fail.
        let retcode = code.unwrap_or_else(|c| c);
        if self.config.exit_on_finish {
            process::exit(retcode);
        }
        retcode
    }

    #[inline]
    fn initialize(&mut self) -> Result<i32, i32> {
        if self.main_fn.is_none() {
            eprintln!("`main` must be called before running");
            return Err(1);
        }
        // an async logger spawns threads internally.
        match AppLogger::new(self.config.logging.clone()) {
            Ok(logger) => {
                let context = Context {
                    logger: logger.create(),
                    accessid: logger.accessid().to_string(),
                    accesstime: logger.accesstime().clone(),
                };
                self.logger = Some(logger);
                self.context = Some(context);
                Ok(0)
            }
            Err(e) => {
                eprintln!("{}", e);
                Err(1)
            }
        }
    }

    #[inline]
    fn exec(&mut self) -> Result<i32, i32> {
        let logger = match self.logger {
            Some(ref logger) => logger.create(),
            None => return Err(1),
        };
        self.preprocess(&logger);
        let (result, code) = match self.process() {
            Ok(_) => (Ok(0), 0),
            Err(e) => {
                error!(logger, "{}", e);
                let c = 128 + e.code();
                (Err(c), c)
            }
        };
        self.postprocess(&logger, code);
        result
    }

    #[inline]
    fn finalize(&mut self) {
        self.main_fn = None;
        self.context = None;
        self.logger = None;
        thread::sleep(Duration::from_millis(1));
    }

    #[inline]
    fn preprocess(&self, logger: &Logger) {
        info!(
            logger,
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        debug!(
            logger,
            "args: {}",
            env::args().collect::<Vec<String>>().join(" ")
        );
        debug!(logger, "{:?}", self.config);
        info!(logger, "*** [START] ***");
    }

    #[inline]
    fn process(&mut self) -> Result<(), AppError> {
        let main_fn = self.main_fn.take();
        let context = self.context.take();
        match (main_fn, context) {
            (Some(mut main_fn), Some(context)) => {
                (*main_fn)(context).map_err(|e| AppError::new(1, e))
            }
            _ => Err(AppError::new(1, "the application is not initialized")),
        }
    }

    #[inline]
    fn postprocess(&self, logger: &Logger, code: i32) {
        info!(logger, "application finished (code: {})", code);
        info!(logger, "*** [DONE] ***");
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("App").field("config", &self.config).finish()
    }
}
