pub mod inspection;
pub mod macros;
pub mod time;

pub use inspection::*;
pub use time::*;
