// Application layer: the ledger store and the collaborators it talks to.

pub mod clock;
pub mod config;
pub mod error;
pub mod feedback;
pub mod store;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use feedback::*;
pub use store::*;
