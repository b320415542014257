pub mod check;
pub mod config;
mod context;
pub mod explain;
pub mod init;

pub use check::run_check;
pub use config::run_config;
pub use explain::run_explain;
pub use init::{generate_config_template, run_init, run_init_impl};
