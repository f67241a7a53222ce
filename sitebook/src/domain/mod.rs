mod choices;
mod employee;
mod ids;
mod project;
mod quantity;
mod usage_record;

pub use choices::*;
pub use employee::*;
pub use ids::*;
pub use project::*;
pub use quantity::*;
pub use usage_record::*;
