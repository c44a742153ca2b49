//! Role-based access to dashboard sections.

pub mod gate;
pub mod permissions;
pub mod role;

pub use gate::{
    check_access, check_route_access, menu_id_for_path, visible_menu_ids, AccessDecision,
    AccessDenied, AccessGrant,
};
pub use permissions::{menu, MenuPermission};
pub use role::{Role, SellerStatus};
