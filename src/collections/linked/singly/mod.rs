mod iter;
mod list;

pub use iter::*;
pub use list::*;
