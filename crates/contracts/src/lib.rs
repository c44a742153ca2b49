//! Shared contracts between the admin dashboard and the marketplace REST API.
//!
//! Everything here is target-independent: DTOs mirrored from the API, the
//! role-permission gate, and the form validators run before submission.

pub mod domain;
pub mod shared;
pub mod system;
