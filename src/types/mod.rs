//! Data types for the grid engine.

mod column;
mod page;
mod row;
mod selection;
mod sort;

pub use column::*;
pub use page::*;
pub use row::*;
pub use selection::*;
pub use sort::*;
