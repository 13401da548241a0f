pub mod crack;
pub mod freq;
pub mod input;
pub mod interactive;

pub use crack::*;
pub use freq::*;
pub use input::*;
