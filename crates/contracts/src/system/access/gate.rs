//! Single authorization entry point shared by the sidebar and the route guard.
//!
//! Decisions are advisory UI gating over client-held user state; the API
//! enforces the real authorization.

use super::permissions::{self, menu, role_permissions};
use super::role::{Role, SellerStatus};
use crate::system::auth::UserInfo;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("User not authenticated")]
    NotAuthenticated,
    #[error("Invalid role")]
    InvalidRole,
    #[error("Access denied")]
    NotPermitted,
    #[error("Your seller account is {0}. This section becomes available once the account is approved")]
    SellerNotApproved(String),
    #[error("Account suspended")]
    AccountSuspended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    pub menu_id: String,
    pub priority: u8,
}

pub type AccessDecision = Result<AccessGrant, AccessDenied>;

/// Path segments that differ from their menu id.
const PATH_ALIASES: &[(&str, &str)] = &[
    ("products-1688", menu::PRODUCTS_1688),
    ("return-center", menu::RETURN),
    ("seller-settings", menu::SELLER_SETTINGS),
];

/// Decide whether `user` may open `menu_id`.
pub fn check_access(user: Option<&UserInfo>, menu_id: &str) -> AccessDecision {
    let user = user.ok_or(AccessDenied::NotAuthenticated)?;
    let role = Role::parse(&user.role).ok_or(AccessDenied::InvalidRole)?;

    let permission = permissions::lookup(role, menu_id)
        .filter(|p| p.access)
        .ok_or(AccessDenied::NotPermitted)?;

    if role == Role::Seller && menu_id != menu::PROFILE && !is_approved_seller(user) {
        let status = user
            .seller_status
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| SellerStatus::Pending.as_str().to_string());
        return Err(AccessDenied::SellerNotApproved(status));
    }

    if user.is_suspended() {
        return Err(AccessDenied::AccountSuspended);
    }

    Ok(AccessGrant {
        menu_id: menu_id.to_string(),
        priority: permission.priority,
    })
}

/// Route-level variant: normalise the path to a menu id, then decide.
pub fn check_route_access(user: Option<&UserInfo>, path: &str) -> AccessDecision {
    check_access(user, &menu_id_for_path(path))
}

/// Map a dashboard path such as `/dashboard/return-center/12` to its menu id.
pub fn menu_id_for_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let mut first = segments.next();
    if first == Some(menu::DASHBOARD) {
        first = segments.next();
    }

    match first {
        None => menu::DASHBOARD.to_string(),
        Some(segment) => PATH_ALIASES
            .iter()
            .find(|(alias, _)| *alias == segment)
            .map(|(_, id)| id.to_string())
            .unwrap_or_else(|| segment.to_string()),
    }
}

/// Menu ids reachable by `user`, in permission-table order.
pub fn visible_menu_ids(user: Option<&UserInfo>) -> Vec<&'static str> {
    let Some(role) = user.and_then(|u| Role::parse(&u.role)) else {
        return Vec::new();
    };
    role_permissions(role)
        .iter()
        .map(|(id, _)| *id)
        .filter(|id| check_access(user, id).is_ok())
        .collect()
}

/// Exact match only: `"Approved"` or a padded value is not an approval.
fn is_approved_seller(user: &UserInfo) -> bool {
    user.is_seller == Some(true) && user.seller_status.as_deref() == Some(SellerStatus::Approved.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            role: role.to_string(),
            status: Some(true),
            ..Default::default()
        }
    }

    fn seller(is_seller: bool, status: Option<&str>) -> UserInfo {
        UserInfo {
            is_seller: Some(is_seller),
            seller_status: status.map(str::to_string),
            ..user("seller")
        }
    }

    #[test]
    fn anonymous_is_denied() {
        assert_eq!(
            check_access(None, menu::DASHBOARD),
            Err(AccessDenied::NotAuthenticated)
        );
    }

    #[test]
    fn unknown_role_is_invalid() {
        let err = check_access(Some(&user("customer")), menu::DASHBOARD).unwrap_err();
        assert_eq!(err, AccessDenied::InvalidRole);
        assert_eq!(err.to_string(), "Invalid role");
    }

    #[test]
    fn role_is_case_insensitive() {
        assert!(check_access(Some(&user("ADMIN")), menu::SELLERS).is_ok());
    }

    #[test]
    fn padded_role_is_invalid() {
        assert_eq!(
            check_access(Some(&user(" admin ")), menu::SELLERS),
            Err(AccessDenied::InvalidRole)
        );
    }

    #[test]
    fn approval_must_match_exactly() {
        for status in ["Approved", "APPROVED", " approved", "approved "] {
            assert_eq!(
                check_access(Some(&seller(true, Some(status))), menu::ORDERS),
                Err(AccessDenied::SellerNotApproved(status.to_string())),
                "status {:?}",
                status
            );
        }
        assert!(check_access(Some(&seller(true, Some("approved"))), menu::ORDERS).is_ok());
    }

    #[test]
    fn unknown_menu_is_denied() {
        assert_eq!(
            check_access(Some(&user("superadmin")), "reports"),
            Err(AccessDenied::NotPermitted)
        );
    }

    #[test]
    fn explicit_false_access_is_denied() {
        assert_eq!(
            check_access(Some(&user("agent")), menu::PAYOUTS),
            Err(AccessDenied::NotPermitted)
        );
    }

    #[test]
    fn pending_seller_reason_mentions_status() {
        let err = check_access(Some(&seller(true, Some("pending"))), menu::ORDERS).unwrap_err();
        assert!(err.to_string().contains("pending"));
    }

    #[test]
    fn seller_without_status_defaults_to_pending() {
        let err = check_access(Some(&seller(false, None)), menu::ORDERS).unwrap_err();
        assert_eq!(err, AccessDenied::SellerNotApproved("pending".to_string()));
    }

    #[test]
    fn seller_profile_is_always_reachable() {
        for status in ["pending", "rejected", "suspended", "approved"] {
            assert!(check_access(Some(&seller(false, Some(status))), menu::PROFILE).is_ok());
        }
    }

    #[test]
    fn approved_seller_reaches_payouts() {
        let grant = check_access(Some(&seller(true, Some("approved"))), menu::PAYOUTS).unwrap();
        assert_eq!(grant.priority, 6);
    }

    #[test]
    fn suspended_account_is_denied_last() {
        let mut admin = user("admin");
        admin.status = Some(false);
        assert_eq!(
            check_access(Some(&admin), menu::DASHBOARD),
            Err(AccessDenied::AccountSuspended)
        );
    }

    #[test]
    fn path_normalisation() {
        assert_eq!(menu_id_for_path("/"), "dashboard");
        assert_eq!(menu_id_for_path(""), "dashboard");
        assert_eq!(menu_id_for_path("/dashboard"), "dashboard");
        assert_eq!(menu_id_for_path("/dashboard/products-1688"), "1688-products");
        assert_eq!(menu_id_for_path("/return-center/42"), "return");
        assert_eq!(menu_id_for_path("/seller-settings"), "seller-settings");
        assert_eq!(menu_id_for_path("/orders/details/7?tab=items"), "orders");
        assert_eq!(menu_id_for_path("sellers#top"), "sellers");
    }

    #[test]
    fn route_check_uses_normalised_id() {
        let approved = seller(true, Some("approved"));
        assert!(check_route_access(Some(&approved), "/dashboard/return-center").is_ok());
        assert_eq!(
            check_route_access(Some(&approved), "/cards"),
            Err(AccessDenied::NotPermitted)
        );
    }

    #[test]
    fn pending_seller_only_sees_profile() {
        let pending = seller(true, Some("pending"));
        assert_eq!(visible_menu_ids(Some(&pending)), vec![menu::PROFILE]);
        assert!(visible_menu_ids(None).is_empty());
    }
}
