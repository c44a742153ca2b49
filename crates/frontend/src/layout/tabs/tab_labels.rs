//! Tab labels and sidebar entries - single source of truth for screen names.

use contracts::system::access::{menu, visible_menu_ids};
use contracts::system::auth::UserInfo;

/// A dashboard section that has a screen in this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub menu_id: &'static str,
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn screen(
    menu_id: &'static str,
    path: &'static str,
    label: &'static str,
    icon: &'static str,
) -> Screen {
    Screen {
        menu_id,
        path,
        label,
        icon,
    }
}

pub const SCREENS: &[Screen] = &[
    screen(menu::DASHBOARD, "/dashboard", "Dashboard", "dashboard"),
    screen(menu::PROFILE, "/dashboard/profile", "Store profile", "user"),
    screen(menu::SELLERS, "/dashboard/sellers", "Sellers", "store"),
    screen(menu::ORDERS, "/dashboard/orders", "Orders", "orders"),
    screen(menu::CATEGORIES, "/dashboard/categories", "Categories", "tag"),
    screen(menu::PAYOUTS, "/dashboard/payouts", "Payouts", "wallet"),
    screen(menu::RETURN, "/dashboard/return-center", "Return center", "rotate"),
    screen(menu::CARDS, "/dashboard/cards", "Cards", "image"),
    screen(menu::PRIVACY, "/dashboard/privacy", "Privacy policy", "shield"),
    screen(
        menu::SELLER_SETTINGS,
        "/dashboard/seller-settings",
        "Seller settings",
        "settings",
    ),
];

pub fn screen_for_menu(menu_id: &str) -> Option<&'static Screen> {
    SCREENS.iter().find(|s| s.menu_id == menu_id)
}

/// Screens the user may open, in permission-table order.
pub fn visible_screens(user: Option<&UserInfo>) -> Vec<&'static Screen> {
    visible_menu_ids(user)
        .into_iter()
        .filter_map(screen_for_menu)
        .collect()
}

/// First screen the user may open; the dashboard when nothing is reachable.
pub fn home_path_for(user: Option<&UserInfo>) -> &'static str {
    visible_screens(user)
        .first()
        .map(|s| s.path)
        .unwrap_or("/dashboard")
}

/// Title of the tab opened for `key`. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    let path = key.split(['?', '#']).next().unwrap_or_default();
    if let Some(screen) = SCREENS.iter().find(|s| s.path == path) {
        return screen.label.to_string();
    }
    if let Some(id) = path.strip_prefix("/dashboard/orders/") {
        return detail_tab_label("Order", id);
    }
    if let Some(id) = query_value(key, "seller") {
        return detail_tab_label("Payouts", &id);
    }
    key.to_string()
}

/// Detail tab title: `<entity> · <identifier>`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

fn query_value(key: &str, name: &str) -> Option<String> {
    let (_, query) = key.split_once('?')?;
    let params: std::collections::HashMap<String, String> = serde_qs::from_str(query).ok()?;
    params.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::access::menu_id_for_path;

    #[test]
    fn every_screen_path_maps_back_to_its_menu() {
        for s in SCREENS {
            assert_eq!(menu_id_for_path(s.path), s.menu_id, "{}", s.path);
        }
    }

    fn user(role: &str, seller_status: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            role: role.to_string(),
            is_seller: seller_status.map(|_| true),
            seller_status: seller_status.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn pending_seller_lands_on_profile() {
        let pending = user("seller", Some("pending"));
        assert_eq!(home_path_for(Some(&pending)), "/dashboard/profile");
        let approved = user("seller", Some("approved"));
        assert_eq!(home_path_for(Some(&approved)), "/dashboard");
    }

    #[test]
    fn sidebar_skips_sections_without_a_screen() {
        let admin = user("admin", None);
        let ids: Vec<_> = visible_screens(Some(&admin))
            .iter()
            .map(|s| s.menu_id)
            .collect();
        assert!(ids.contains(&menu::SELLERS));
        assert!(!ids.contains(&menu::CHAT));
        assert!(!ids.contains(&menu::PRODUCTS));
    }

    #[test]
    fn labels_for_detail_tabs() {
        assert_eq!(tab_label_for_key("/dashboard/orders"), "Orders");
        assert_eq!(tab_label_for_key("/dashboard/orders/A-17"), "Order · A-17");
        assert_eq!(
            tab_label_for_key("/dashboard/payouts?seller=s9"),
            "Payouts · s9"
        );
        assert_eq!(tab_label_for_key("/unknown"), "/unknown");
    }
}
