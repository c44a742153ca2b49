//! Application shell: auth gate in front of the main layout.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::tab_labels::home_path_for;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Shell with sidebar and tabs.
///
/// Picks the home tab for the signed-in user and syncs tabs with `?active=`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    let home = auth_state.with_untracked(|s| home_path_for(s.user_info.as_ref()));
    tabs_store.home.set(home.to_string());
    tabs_store.init_router_integration();

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any() />
    }
}

/// Shows `LoginPage` until a session exists, then `MainLayout`.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=move || {
                if auth_state.with(|s| s.restoring) {
                    view! { <div class="app-loading">"Restoring session..."</div> }.into_any()
                } else {
                    view! { <LoginPage /> }.into_any()
                }
            }
        >
            <MainLayout />
        </Show>
    }
}
