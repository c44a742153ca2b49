pub mod form;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;

pub use form::{field_error, FormField, FormTextArea};
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatTone};
pub use status_badge::{StatusBadge, Tone};
