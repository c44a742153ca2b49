use contracts::domain::a007_privacy::aggregate::{PrivacyPolicy, MIN_POLICY_LENGTH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_privacy::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_DETAIL};
use crate::shared::toast::use_toast;

/// Single-document editor for the storefront privacy policy.
#[component]
pub fn PrivacyEditor() -> impl IntoView {
    let toast = use_toast();
    let stored = RwSignal::new(PrivacyPolicy::default());
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let saving = RwSignal::new(false);

    let reset_to = move |policy: PrivacyPolicy| {
        title.set(policy.title.clone());
        content.set(policy.content.clone());
        stored.set(policy);
    };

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_policy().await {
                Ok(policy) => {
                    reset_to(policy.unwrap_or_default());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let draft = Memo::new(move |_| PrivacyPolicy {
        id: stored.with(|p| p.id.clone()),
        title: title.get(),
        content: content.get(),
        updated_at: None,
    });
    let dirty = Memo::new(move |_| draft.with(|d| stored.with(|p| p.is_changed(d))));

    let save = move || {
        let policy = draft.get_untracked();
        if let Err(e) = policy.validate() {
            set_error.set(Some(e));
            return;
        }
        set_error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::save_policy(&policy).await {
                Ok(saved) => {
                    reset_to(saved);
                    toast.success("Privacy policy saved");
                }
                Err(e) => toast.error(e),
            }
            saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="privacy--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Privacy policy" subtitle="Text shown to customers on the storefront">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || !dirty.get() || saving.get())
                        on_click=move |_| reset_to(stored.get_untracked())
                    >
                        {icon("rotate")}
                        " Discard"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !dirty.get() || saving.get() || loading.get())
                        on_click=move |_| save()
                    >
                        "Save"
                    </Button>
                </Space>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <div class="form__group">
                    <label class="form__label">"Title"</label>
                    <input
                        class="form__input"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Content"</label>
                    <textarea
                        class="form__textarea privacy-editor__content"
                        rows=20
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="privacy-editor__status text-muted">
                    <span>
                        {move || {
                            let words = draft.with(PrivacyPolicy::word_count);
                            let chars = content.with(|c| c.trim().chars().count());
                            format!("{} words · {} / {} characters minimum", words, chars, MIN_POLICY_LENGTH)
                        }}
                    </span>
                    <span>
                        {move || stored
                            .with(|p| p.updated_at.clone())
                            .map(|at| format!("Last updated {}", format_datetime(&at)))}
                    </span>
                    {move || dirty.get().then(|| view! { <span class="badge badge--warning">"Unsaved changes"</span> })}
                </div>
            </Show>
        </PageFrame>
    }
}
