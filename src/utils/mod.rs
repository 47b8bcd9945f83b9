pub mod date;
pub mod formatting;
pub mod location;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::describe_category;
