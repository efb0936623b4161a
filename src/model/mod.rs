pub mod task;
pub mod store;
pub mod config;

pub use task::*;
pub use store::*;
pub use config::*;
