/// Primitive TrackThis API data types and NewType-patterns.
mod endpoint;
mod enums;
mod strings;

pub use endpoint::*;
pub use enums::*;
pub use strings::*;
