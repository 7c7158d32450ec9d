mod formula;
mod instance;
mod literal;
mod model;

pub use formula::*;
pub use instance::*;
pub use literal::*;
pub use model::*;
