mod app;
pub mod logging;
mod ui;

pub use app::run_app;
