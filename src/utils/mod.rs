pub mod date;
pub mod formatting;
pub mod number;
pub mod path;
pub mod table;

pub use formatting::{format_currency, group_thousands};
