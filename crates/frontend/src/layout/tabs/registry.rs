//! Tab content registry - maps a tab key (route path) to its view.

use crate::dashboards::DashboardHome;
use crate::domain::a001_seller::ui::list::SellerList;
use crate::domain::a001_seller::ui::profile::ProfilePage;
use crate::domain::a001_seller::ui::settings::SellerSettingsPage;
use crate::domain::a002_payout::ui::PayoutsPage;
use crate::domain::a003_order::ui::details::OrderDetailView;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_return_request::ui::list::ReturnCenter;
use crate::domain::a005_card::ui::list::CardList;
use crate::domain::a006_category::ui::list::CategoryList;
use crate::domain::a007_privacy::ui::editor::PrivacyEditor;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashMap;

/// Split `/dashboard/payouts?seller=7` into the path and its query values.
fn split_key(key: &str) -> (&str, HashMap<String, String>) {
    match key.split_once('?') {
        Some((path, query)) => (path, serde_qs::from_str(query).unwrap_or_default()),
        None => (key, HashMap::new()),
    }
}

/// Renders the content of the tab with key `key`.
///
/// `tabs_store` lets detail views close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let (path, query) = split_key(key);

    match path {
        "/dashboard" => view! { <DashboardHome /> }.into_any(),
        "/dashboard/sellers" => view! { <SellerList /> }.into_any(),
        "/dashboard/profile" => view! { <ProfilePage /> }.into_any(),
        "/dashboard/seller-settings" => view! { <SellerSettingsPage /> }.into_any(),
        "/dashboard/payouts" => {
            let seller_id = query.get("seller").cloned();
            view! { <PayoutsPage seller_id=seller_id /> }.into_any()
        }
        "/dashboard/orders" => view! { <OrderList /> }.into_any(),
        p if p.starts_with("/dashboard/orders/") => {
            let id = p.trim_start_matches("/dashboard/orders/").to_string();
            view! {
                <OrderDetailView
                    id=id
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
        "/dashboard/return-center" => view! { <ReturnCenter /> }.into_any(),
        "/dashboard/cards" => view! { <CardList /> }.into_any(),
        "/dashboard/categories" => view! { <CategoryList /> }.into_any(),
        "/dashboard/privacy" => view! { <PrivacyEditor /> }.into_any(),
        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">{"Page not found"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_key_reads_query() {
        let (path, query) = split_key("/dashboard/payouts?seller=s1");
        assert_eq!(path, "/dashboard/payouts");
        assert_eq!(query.get("seller").map(String::as_str), Some("s1"));

        let (path, query) = split_key("/dashboard/orders");
        assert_eq!(path, "/dashboard/orders");
        assert!(query.is_empty());
    }
}
