mod display;
mod iter;
mod list;
mod tests;

pub use display::*;
pub use iter::*;
pub use list::*;
