//! Static role → menu permission table.
//!
//! Menu ids are the first path segment of a dashboard route after alias
//! normalisation (see [`super::gate::menu_id_for_path`]).

use super::role::Role;

pub mod menu {
    pub const DASHBOARD: &str = "dashboard";
    pub const PROFILE: &str = "profile";
    pub const SELLERS: &str = "sellers";
    pub const SELLER_SETTINGS: &str = "seller-settings";
    pub const ORDERS: &str = "orders";
    pub const PRODUCTS: &str = "products";
    pub const PRODUCTS_1688: &str = "1688-products";
    pub const CATEGORIES: &str = "categories";
    pub const PAYOUTS: &str = "payouts";
    pub const RETURN: &str = "return";
    pub const CARDS: &str = "cards";
    pub const PRIVACY: &str = "privacy";
    pub const CHAT: &str = "chat";
    pub const USERS: &str = "users";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPermission {
    pub access: bool,
    pub priority: u8,
}

const fn allow(priority: u8) -> MenuPermission {
    MenuPermission {
        access: true,
        priority,
    }
}

const fn deny() -> MenuPermission {
    MenuPermission {
        access: false,
        priority: 0,
    }
}

const SUPERADMIN: &[(&str, MenuPermission)] = &[
    (menu::DASHBOARD, allow(1)),
    (menu::USERS, allow(2)),
    (menu::SELLERS, allow(3)),
    (menu::ORDERS, allow(4)),
    (menu::PRODUCTS, allow(5)),
    (menu::PRODUCTS_1688, allow(6)),
    (menu::CATEGORIES, allow(7)),
    (menu::PAYOUTS, allow(8)),
    (menu::RETURN, allow(9)),
    (menu::CARDS, allow(10)),
    (menu::PRIVACY, allow(11)),
    (menu::CHAT, allow(12)),
    (menu::SELLER_SETTINGS, allow(13)),
    (menu::PROFILE, allow(14)),
];

const ADMIN: &[(&str, MenuPermission)] = &[
    (menu::DASHBOARD, allow(1)),
    (menu::SELLERS, allow(2)),
    (menu::ORDERS, allow(3)),
    (menu::PRODUCTS, allow(4)),
    (menu::PRODUCTS_1688, allow(5)),
    (menu::CATEGORIES, allow(6)),
    (menu::PAYOUTS, allow(7)),
    (menu::RETURN, allow(8)),
    (menu::CARDS, allow(9)),
    (menu::PRIVACY, allow(10)),
    (menu::CHAT, allow(11)),
    (menu::SELLER_SETTINGS, allow(12)),
    (menu::PROFILE, allow(13)),
    (menu::USERS, deny()),
];

const AGENT: &[(&str, MenuPermission)] = &[
    (menu::DASHBOARD, allow(1)),
    (menu::ORDERS, allow(2)),
    (menu::RETURN, allow(3)),
    (menu::CHAT, allow(4)),
    (menu::SELLERS, allow(5)),
    (menu::PROFILE, allow(6)),
    (menu::PRODUCTS, deny()),
    (menu::PRODUCTS_1688, deny()),
    (menu::CATEGORIES, deny()),
    (menu::PAYOUTS, deny()),
    (menu::CARDS, deny()),
    (menu::PRIVACY, deny()),
    (menu::SELLER_SETTINGS, deny()),
    (menu::USERS, deny()),
];

const SELLER: &[(&str, MenuPermission)] = &[
    (menu::DASHBOARD, allow(1)),
    (menu::PROFILE, allow(2)),
    (menu::ORDERS, allow(3)),
    (menu::PRODUCTS, allow(4)),
    (menu::PRODUCTS_1688, allow(5)),
    (menu::PAYOUTS, allow(6)),
    (menu::RETURN, allow(7)),
    (menu::CHAT, allow(8)),
    (menu::SELLER_SETTINGS, allow(9)),
    (menu::SELLERS, deny()),
    (menu::CATEGORIES, deny()),
    (menu::CARDS, deny()),
    (menu::PRIVACY, deny()),
    (menu::USERS, deny()),
];

/// Full permission table of a role, in declaration order.
pub fn role_permissions(role: Role) -> &'static [(&'static str, MenuPermission)] {
    match role {
        Role::Superadmin => SUPERADMIN,
        Role::Admin => ADMIN,
        Role::Agent => AGENT,
        Role::Seller => SELLER,
    }
}

pub fn lookup(role: Role, menu_id: &str) -> Option<MenuPermission> {
    role_permissions(role)
        .iter()
        .find(|(id, _)| *id == menu_id)
        .map(|(_, permission)| *permission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_role_lists_each_menu_once() {
        for role in Role::ALL {
            let ids: Vec<&str> = role_permissions(role).iter().map(|(id, _)| *id).collect();
            let unique: HashSet<&str> = ids.iter().copied().collect();
            assert_eq!(ids.len(), unique.len(), "duplicate menu id for {role}");
        }
    }

    #[test]
    fn admin_sellers_priority() {
        assert_eq!(lookup(Role::Admin, menu::SELLERS), Some(allow(2)));
    }

    #[test]
    fn users_menu_is_superadmin_only() {
        for role in Role::ALL {
            let granted = lookup(role, menu::USERS).map(|p| p.access).unwrap_or(false);
            assert_eq!(granted, role == Role::Superadmin);
        }
    }
}
