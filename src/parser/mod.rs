pub mod decoder;
pub mod finalizer;
pub mod main;

pub use decoder::*;
pub use finalizer::*;
pub use main::*;
