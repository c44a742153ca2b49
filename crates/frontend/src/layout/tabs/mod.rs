//! Tab management module
//!
//! - `page` - TabPage wrapper for one tab's content, behind the route guard
//! - `registry` - tab key (route path) to view mapping
//! - `tab_labels` - screen names, sidebar entries and tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
