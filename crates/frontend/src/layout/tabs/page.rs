//! TabPage component - shows one tab's content when it is active.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::system::auth::guard::RequireAccess;
use leptos::logging::log;
use leptos::prelude::*;

/// Wrapper for a single tab.
///
/// Content comes from `registry::render_tab_content` behind the route guard;
/// inactive tabs stay mounted and are hidden with a CSS class.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_ref() == Some(&tab_key_for_active_check))
    };

    log!("TabPage created for '{}'", tab_key);

    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("TabPage destroyed for '{}'", tab_key_for_cleanup);
    });

    let key_for_content = tab_key.clone();
    let key_for_denied = tab_key.clone();

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key.clone()
        >
            <RequireAccess
                path=tab_key.clone()
                on_denied=Callback::new(move |_| tabs_store.redirect_home(&key_for_denied))
            >
                {render_tab_content(&key_for_content, tabs_store)}
            </RequireAccess>
        </div>
    }
}
