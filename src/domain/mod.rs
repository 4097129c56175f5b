mod draft;
mod ledger;
mod money;
mod transaction;

pub use draft::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
