mod category;
mod item;
mod price;
mod reader;

pub use category::*;
pub use item::*;
pub use price::*;
pub use reader::*;
