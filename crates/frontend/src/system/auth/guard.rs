use contracts::system::access::check_route_access;
use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::access_denied::AccessDeniedPage;

/// Renders `children` only when the signed-in user may open `path`.
///
/// The decision is re-evaluated whenever the auth state changes, so a
/// suspension reported by a refreshed profile closes the section too.
#[component]
pub fn RequireAccess(
    #[prop(into)] path: String,
    /// Called when a denied screen has shown its notice long enough
    on_denied: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let path_for_log = path.clone();
    let decision = Memo::new(move |_| {
        auth_state.with(|s| check_route_access(s.user_info.as_ref(), &path).map(|g| g.menu_id))
    });

    move || match decision.get() {
        Ok(_) => children().into_any(),
        Err(reason) => {
            let role = auth_state.with_untracked(|s| {
                s.user_info.as_ref().map(|u| u.role.clone()).unwrap_or_default()
            });
            log::warn!("Access to '{}' denied for role '{}': {}", path_for_log, role, reason);
            view! { <AccessDeniedPage reason=reason.to_string() on_redirect=on_denied /> }
                .into_any()
        }
    }
}
