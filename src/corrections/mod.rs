pub mod rules;
pub mod apply;
pub mod verify;

pub use rules::*;
pub use apply::*;
pub use verify::*;
