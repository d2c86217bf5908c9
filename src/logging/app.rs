use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::prelude::*;
use slog::{Discard, Logger, Record};
use uuid::Uuid;

use super::{create_logger_with_kv_and_time, Config, Error};

/// Process-wide logger that brackets a run with START/END records.
#[derive(Debug)]
pub struct AppLogger {
    inner: Logger,
    config: Config,
    accessid: String,
    accesstime: DateTime<Local>,
    filepath: Option<PathBuf>,
}

impl AppLogger {
    pub fn new<C: Into<Config>>(config: C) -> Result<Self, Error> {
        let accesstime = Local::now();
        let accessid = Uuid::new_v5(&Uuid::NAMESPACE_OID, accesstime.to_rfc3339().as_bytes())
            .simple()
            .to_string()[..8]
            .to_string();
        let c = config.into();

        let (inner, filepath) = create_logger_with_kv_and_time(
            c.clone(),
            o!("accessid" => accessid.clone()),
            accesstime.clone(),
        )?;
        let mut logger = AppLogger {
            inner: inner,
            config: c,
            accessid: accessid,
            accesstime: accesstime,
            filepath: filepath,
        };
        AppLogger::initialize(&mut logger);
        Ok(logger)
    }

    fn initialize(&mut self) {
        info!(
            self.inner,
            "LOG Start with ACCESSID=[{}] ACCESSTIME=[{}]",
            self.accessid,
            self.accesstime.to_rfc3339(),
        );
    }

    fn finalize(&mut self) {
        let processtime = Local::now()
            .signed_duration_since(self.accesstime)
            .num_milliseconds() as f64
            * 1e-3;
        info!(
            self.inner,
            "LOG End with ACCESSID=[{}] ACCESSTIME=[{}] PROCESSTIME=[{}]",
            self.accessid,
            self.accesstime.to_rfc3339(),
            processtime,
        );
        // dropping the async drain flushes pending records.
        self.inner = Logger::root(Discard, o!());
        if let Some(ref path) = self.filepath {
            thread::sleep(Duration::from_millis(1));
            let result = fs::OpenOptions::new()
                .append(true)
                .open(path)
                .and_then(|mut file| writeln!(file).and_then(|()| file.flush()));
            if let Err(e) = result {
                eprintln!("unable to write a newline: {}", e);
            }
        }
    }

    #[inline]
    pub fn log(&self, record: &Record) {
        self.inner.log(record);
    }

    pub fn get_inner(&self) -> &Logger {
        &self.inner
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn accessid(&self) -> &str {
        &self.accessid
    }

    pub fn accesstime(&self) -> &DateTime<Local> {
        &self.accesstime
    }

    pub fn filepath(&self) -> Option<&PathBuf> {
        self.filepath.as_ref()
    }

    pub fn create(&self) -> Logger {
        self.inner.new(o!())
    }
}

impl Drop for AppLogger {
    fn drop(&mut self) {
        AppLogger::finalize(self);
    }
}
