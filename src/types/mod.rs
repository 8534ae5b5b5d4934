pub mod dialect;
pub mod record;

pub use dialect::*;
pub use record::*;
