pub mod application;
pub mod cli;
pub mod domain;

pub use application::LedgerStore;
pub use domain::*;
