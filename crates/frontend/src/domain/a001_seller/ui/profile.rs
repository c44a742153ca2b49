//! Store profile screen of the signed-in seller.

use contracts::domain::a001_seller::profile::SellerProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::wizard::ProfileWizard;
use crate::domain::a001_seller::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_current_user;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <PageFrame page_id="profile--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Store profile" subtitle="How buyers see your store" />
            <ProfileOverview />
        </PageFrame>
    }
}

/// Profile card with create/edit entry points; shared with seller settings.
#[component]
pub fn ProfileOverview() -> impl IntoView {
    let user = use_current_user();
    let profile = RwSignal::new(None::<SellerProfile>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let wizard_open = RwSignal::new(false);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_my_profile().await {
                Ok(p) => {
                    profile.set(p);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let is_pending = move || {
        user.with(|u| {
            u.as_ref()
                .and_then(|u| u.seller_status.as_deref())
                .map(|s| s == "pending")
                .unwrap_or(false)
        })
    };

    view! {
        <Show when=is_pending>
            <div class="alert alert--warning">
                "Your seller account is awaiting approval. Complete your store profile so the team can review it."
            </div>
        </Show>

        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

        {move || {
            if loading.get() {
                return view! { <Spinner /> }.into_any();
            }
            match profile.get() {
                None => view! {
                    <div class="empty-state">
                        {icon("store")}
                        <p>"You have not set up your store profile yet."</p>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| wizard_open.set(true)>
                            {icon("plus")}
                            " Create profile"
                        </Button>
                    </div>
                }
                .into_any(),
                Some(p) => view! { <ProfileCard profile=p on_edit=Callback::new(move |_| wizard_open.set(true)) /> }
                    .into_any(),
            }
        }}

        <Show when=move || wizard_open.get()>
            <ProfileWizard
                initial=profile.get_untracked()
                on_saved=Callback::new(move |saved: SellerProfile| {
                    profile.set(Some(saved));
                    wizard_open.set(false);
                })
                on_close=Callback::new(move |_| wizard_open.set(false))
            />
        </Show>
    }
}

#[component]
fn ProfileCard(profile: SellerProfile, on_edit: Callback<()>) -> impl IntoView {
    let address = &profile.address;
    let address_line = [
        address.street.as_str(),
        address.city.as_str(),
        address.state.as_str(),
        address.postal_code.as_str(),
        address.country.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    let links = profile.social_links.clone();
    let link_rows = [
        ("Website", links.website),
        ("Facebook", links.facebook),
        ("Instagram", links.instagram),
        ("Twitter", links.twitter),
    ]
    .into_iter()
    .filter(|(_, url)| !url.is_empty())
    .map(|(label, url)| {
        view! {
            <div class="profile-card__row">
                <span class="profile-card__label">{label}</span>
                <a href=url.clone() target="_blank" rel="noopener">{url.clone()}</a>
            </div>
        }
    })
    .collect_view();

    view! {
        <div class="profile-card">
            {profile.banner_url.clone().map(|src| view! {
                <img class="profile-card__banner" src=src alt="Store banner" />
            })}
            <div class="profile-card__head">
                {profile.logo_url.clone().map(|src| view! {
                    <img class="profile-card__logo" src=src alt="Store logo" />
                })}
                <div>
                    <h2>{profile.store_name.clone()}</h2>
                    <p class="text-muted">{profile.store_description.clone().unwrap_or_default()}</p>
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_edit.run(())>
                    {icon("edit")}
                    " Edit"
                </Button>
            </div>
            <div class="profile-card__row">
                <span class="profile-card__label">"Email"</span>
                <span>{profile.contact_email.clone().unwrap_or_default()}</span>
            </div>
            <div class="profile-card__row">
                <span class="profile-card__label">"Phone"</span>
                <span>{profile.phone.clone().unwrap_or_default()}</span>
            </div>
            <div class="profile-card__row">
                <span class="profile-card__label">"Address"</span>
                <span>{address_line}</span>
            </div>
            {link_rows}
        </div>
    }
}
