pub mod config;
pub mod env;
pub mod handler;

pub use handler::{check_secret, function_handler, handle, secret_marker, SecretStatus};
