extern crate chrono;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate slog;
extern crate slog_async;
extern crate slog_term;
extern crate structopt;
extern crate uuid;

#[macro_use]
pub mod app;
pub mod dataset;
pub mod format;
pub mod io;
pub mod lang;
pub mod logging;
pub mod preprocessing;
pub mod syntax;
pub mod utils;
