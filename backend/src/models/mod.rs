pub mod citation;
pub mod style;

pub use citation::*;
pub use style::*;
