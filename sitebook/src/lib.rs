mod domain;
mod error;
pub mod ledger;
pub mod persistence;
mod store;

pub use domain::*;
pub use error::*;
pub use store::*;
