use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Delay before a denied screen sends the user back to the dashboard.
pub const ACCESS_DENIED_REDIRECT_MS: u32 = 2000;

/// Full-screen notice shown instead of a section the user may not open.
#[component]
pub fn AccessDeniedPage(
    #[prop(into)] reason: String,
    /// Fired once the redirect delay has elapsed
    on_redirect: Callback<()>,
) -> impl IntoView {
    let pending = StoredValue::new_local(Some(Timeout::new(
        ACCESS_DENIED_REDIRECT_MS,
        move || on_redirect.run(()),
    )));
    on_cleanup(move || {
        // Cancel the redirect if the page goes away first.
        let _ = pending.try_update_value(|t| {
            t.take();
        });
    });

    view! {
        <div class="access-denied">
            <div class="access-denied__icon">{icon("lock")}</div>
            <h2 class="access-denied__title">"Access denied"</h2>
            <p class="access-denied__reason">{reason}</p>
            <p class="access-denied__hint">"Redirecting to the dashboard..."</p>
        </div>
    }
}
