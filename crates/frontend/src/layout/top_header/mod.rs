//! TopHeader component - application top navigation bar.
//!
//! Sidebar toggle, application title, signed-in user with role, logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::system::access::{Role, SellerStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        ctx.reset();
        spawn_local(do_logout(set_auth_state));
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_name = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.display_name())
                .unwrap_or_else(|| "Guest".to_string())
        })
    };
    let role_label = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .and_then(|u| Role::parse(&u.role))
                .map(|r| r.label())
                .unwrap_or("Unknown role")
        })
    };
    // Sellers see their approval state next to their name.
    let seller_status = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .filter(|u| Role::parse(&u.role) == Some(Role::Seller))
                .map(|u| {
                    u.seller_status
                        .as_deref()
                        .and_then(SellerStatus::parse)
                        .unwrap_or(SellerStatus::Pending)
                })
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Marketplace Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span class="top-header__user-name">{user_name}</span>
                    <span class="top-header__user-role">{role_label}</span>
                    {move || seller_status().map(|status| view! {
                        <StatusBadge status=status.as_str() label=status.label() />
                    })}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
