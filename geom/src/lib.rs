mod angle;
mod line;
mod segment;
mod v2;

pub use angle::*;
pub use line::*;
pub use segment::*;
pub use v2::*;
