mod editor;
pub mod list;
