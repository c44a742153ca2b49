pub mod list;
pub mod profile;
pub mod settings;
pub mod wizard;
