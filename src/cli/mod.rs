pub mod display;
pub mod input;
pub mod session;

pub use display::*;
pub use input::*;
pub use session::*;
