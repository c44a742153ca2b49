//! Store profile wizard: branding, contact, address and social steps.

mod address_lookup;
mod view;
mod view_model;

pub use view::ProfileWizard;
