// Crawl files are read straight from the crawl directory on every run; the
// only state kept between runs is the optional session checkpoint, which the
// user names explicitly with --checkpoint.

mod args;
mod commands;
mod console;
pub mod context;
mod handlers;
mod logging;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
pub use logging::init_tracing;
