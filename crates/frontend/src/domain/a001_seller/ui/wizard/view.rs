use contracts::domain::a001_seller::profile::{ProfileStep, SellerProfile, SellerProfileForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::{File, HtmlInputElement};

use super::address_lookup::AddressLookup;
use super::view_model::ProfileWizardVm;
use crate::domain::a001_seller::api;
use crate::shared::components::{field_error, FormField, FormTextArea};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

fn selected_file(ev: &leptos::ev::Event) -> Option<File> {
    let input: HtmlInputElement = event_target(ev);
    input.files().and_then(|files| files.get(0))
}

/// Four-step create/edit dialog for the seller's store profile.
#[component]
pub fn ProfileWizard(
    /// Existing profile; `None` creates a new one
    initial: Option<SellerProfile>,
    on_saved: Callback<SellerProfile>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let vm = ProfileWizardVm::new();
    if let Some(profile) = &initial {
        vm.load(
            &SellerProfileForm::from_profile(profile),
            profile.logo_url.clone(),
            profile.banner_url.clone(),
        );
    }

    on_cleanup(move || vm.release_previews());

    let err = move |field: &'static str| field_error(vm.errors, field);

    let submit = move || {
        let form = match vm.validate_for_submit() {
            Ok(form) => form,
            Err(errors) => {
                toast.error(
                    errors
                        .first_message()
                        .unwrap_or("Please fix the highlighted fields")
                        .to_string(),
                );
                return;
            }
        };
        vm.saving.set(true);
        let logo = vm.logo.get_value();
        let banner = vm.banner.get_value();
        spawn_local(async move {
            match api::save_profile(&form, logo, banner).await {
                Ok(saved) => {
                    toast.success(if form.is_edit() {
                        "Store profile updated"
                    } else {
                        "Store profile created"
                    });
                    on_saved.run(saved);
                }
                Err(e) => toast.error(e),
            }
            vm.saving.set(false);
        });
    };

    let title = Signal::derive(move || {
        let step = vm.step.get();
        format!(
            "{} · {} ({}/{})",
            if vm.is_edit() { "Edit store profile" } else { "Create store profile" },
            step.title(),
            step.index() + 1,
            ProfileStep::ALL.len()
        )
    });

    let step_body = move || match vm.step.get() {
        ProfileStep::Branding => view! {
            <FormField
                label="Store name"
                value=vm.store_name
                error=err("store_name")
                on_blur=vm.blur("store_name")
                required=true
            />
            <FormTextArea
                label="Description"
                value=vm.store_description
                error=err("store_description")
                on_blur=vm.blur("store_description")
                placeholder="What do you sell?"
            />
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Logo"</label>
                    {move || vm.logo_preview.get().map(|src| view! {
                        <img class="profile-wizard__logo" src=src alt="Logo preview" />
                    })}
                    <input type="file" accept="image/*" on:change=move |ev| vm.set_logo(selected_file(&ev)) />
                </div>
                <div class="form__group">
                    <label class="form__label">"Banner"</label>
                    {move || vm.banner_preview.get().map(|src| view! {
                        <img class="profile-wizard__banner" src=src alt="Banner preview" />
                    })}
                    <input type="file" accept="image/*" on:change=move |ev| vm.set_banner(selected_file(&ev)) />
                </div>
            </div>
        }
        .into_any(),
        ProfileStep::Contact => view! {
            <FormField
                label="Contact email"
                value=vm.contact_email
                error=err("contact_email")
                on_blur=vm.blur("contact_email")
                input_type="email"
                required=true
            />
            <FormField
                label="Phone"
                value=vm.phone
                error=err("phone")
                on_blur=vm.blur("phone")
                input_type="tel"
                placeholder="+1 555 123 4567"
                required=true
            />
        }
        .into_any(),
        ProfileStep::Address => view! {
            <AddressLookup on_select=Callback::new(move |address| vm.apply_address(address)) />
            <FormField label="Street" value=vm.street error=err("street") on_blur=vm.blur("street") required=true />
            <div class="form__row">
                <FormField label="City" value=vm.city error=err("city") on_blur=vm.blur("city") required=true />
                <FormField label="State / region" value=vm.state error=err("state") on_blur=vm.blur("state") />
            </div>
            <div class="form__row">
                <FormField label="Postal code" value=vm.postal_code error=err("postal_code") on_blur=vm.blur("postal_code") required=true />
                <FormField label="Country" value=vm.country error=err("country") on_blur=vm.blur("country") required=true />
            </div>
        }
        .into_any(),
        ProfileStep::Social => view! {
            <FormField label="Website" value=vm.website error=err("website") on_blur=vm.blur("website") input_type="url" placeholder="https://" />
            <FormField label="Facebook" value=vm.facebook error=err("facebook") on_blur=vm.blur("facebook") input_type="url" />
            <FormField label="Instagram" value=vm.instagram error=err("instagram") on_blur=vm.blur("instagram") input_type="url" />
            <FormField label="Twitter" value=vm.twitter error=err("twitter") on_blur=vm.blur("twitter") input_type="url" />
        }
        .into_any(),
    };

    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Flex justify=FlexJustify::SpaceBetween>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.step.get().prev().is_none())
                    on_click=move |_| vm.prev()
                >
                    "Back"
                </Button>
                <Space>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    {move || if vm.step.get().is_last() {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || vm.saving.get())
                                on_click=move |_| submit()
                            >
                                {move || if vm.saving.get() { "Saving..." } else { "Save profile" }}
                            </Button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| { vm.next(); }>
                                "Next"
                            </Button>
                        }
                        .into_any()
                    }}
                </Space>
            </Flex>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_close footer=footer class="modal--wide">
            <ol class="wizard-steps">
                {ProfileStep::ALL
                    .iter()
                    .map(|s| {
                        let s = *s;
                        view! {
                            <li
                                class="wizard-steps__item"
                                class:wizard-steps__item--active=move || vm.step.get() == s
                                class:wizard-steps__item--done={move || vm.step.get().index() > s.index()}
                            >
                                {s.title()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <div class="profile-wizard__body">{step_body}</div>
        </Modal>
    }
}
