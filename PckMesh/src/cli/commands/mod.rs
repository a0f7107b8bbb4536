pub mod definitions;
pub mod execute;
pub mod pck;

pub use definitions::Commands;
