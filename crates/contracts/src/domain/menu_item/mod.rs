pub mod aggregate;
pub mod filter;

pub use aggregate::{MenuItem, MenuItemDto, MenuItemId, PriceRange};
pub use filter::MenuFilter;
