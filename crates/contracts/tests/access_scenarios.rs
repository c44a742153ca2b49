use contracts::system::access::{
    check_access, check_route_access, menu, visible_menu_ids, AccessDenied, AccessGrant,
};
use contracts::system::auth::UserInfo;

fn user(role: &str) -> UserInfo {
    UserInfo {
        id: "u1".to_string(),
        role: role.to_string(),
        status: Some(true),
        ..Default::default()
    }
}

fn seller(status: Option<&str>) -> UserInfo {
    UserInfo {
        is_seller: Some(true),
        seller_status: status.map(str::to_string),
        ..user("seller")
    }
}

#[test]
fn pending_seller_cannot_open_orders() {
    let denied = check_access(Some(&seller(Some("pending"))), menu::ORDERS).unwrap_err();
    assert!(matches!(denied, AccessDenied::SellerNotApproved(_)));
    assert!(denied.to_string().contains("pending"));
}

#[test]
fn admin_reaches_sellers_with_priority_two() {
    let grant = check_access(Some(&user("admin")), menu::SELLERS).unwrap();
    assert_eq!(
        grant,
        AccessGrant {
            menu_id: "sellers".to_string(),
            priority: 2
        }
    );
}

#[test]
fn seller_without_status_is_reported_as_pending() {
    let denied = check_access(Some(&seller(None)), menu::PAYOUTS).unwrap_err();
    assert_eq!(denied, AccessDenied::SellerNotApproved("pending".to_string()));
}

#[test]
fn rejected_seller_still_reaches_profile() {
    let grant = check_access(Some(&seller(Some("rejected"))), menu::PROFILE).unwrap();
    assert_eq!(grant.menu_id, "profile");
}

#[test]
fn anonymous_user_is_not_authenticated() {
    assert_eq!(
        check_access(None, menu::DASHBOARD),
        Err(AccessDenied::NotAuthenticated)
    );
    assert!(visible_menu_ids(None).is_empty());
}

#[test]
fn route_guard_uses_path_aliases() {
    let approved = seller(Some("approved"));
    assert!(check_route_access(Some(&approved), "/dashboard/return-center?tab=open").is_ok());
    assert!(check_route_access(Some(&approved), "/dashboard/products-1688/42").is_ok());
    assert_eq!(
        check_route_access(Some(&approved), "/dashboard/categories"),
        Err(AccessDenied::NotPermitted)
    );
}

#[test]
fn suspended_admin_loses_everything() {
    let suspended = UserInfo {
        status: Some(false),
        ..user("admin")
    };
    assert_eq!(
        check_access(Some(&suspended), menu::DASHBOARD),
        Err(AccessDenied::AccountSuspended)
    );
    assert!(visible_menu_ids(Some(&suspended)).is_empty());
}

#[test]
fn agent_sidebar_lists_only_allowed_sections() {
    let ids = visible_menu_ids(Some(&user("Agent")));
    for id in [menu::DASHBOARD, menu::ORDERS, menu::RETURN, menu::CHAT, menu::SELLERS, menu::PROFILE] {
        assert!(ids.contains(&id), "agent should see {}", id);
    }
    assert!(!ids.contains(&menu::PAYOUTS));
}
