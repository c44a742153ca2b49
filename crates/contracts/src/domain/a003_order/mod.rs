pub mod aggregate;
pub mod earnings;
pub mod list;
