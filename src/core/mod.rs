pub mod config;
pub mod errors;
pub mod kernel;
pub mod router;
pub mod traits;
