//! Store profile wizard - ViewModel
//!
//! One signal per input; validation runs against a [`SellerProfileForm`]
//! snapshot so the rules live in contracts.

use contracts::domain::a001_seller::profile::{
    Address, ProfileStep, SellerProfileForm, PROFILE_RULES,
};
use contracts::shared::validation::{validate_field, FieldErrors};
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ProfileWizardVm {
    pub id: RwSignal<Option<String>>,

    // Branding
    pub store_name: RwSignal<String>,
    pub store_description: RwSignal<String>,
    pub logo: StoredValue<Option<File>, LocalStorage>,
    pub banner: StoredValue<Option<File>, LocalStorage>,
    pub logo_preview: RwSignal<Option<String>>,
    pub banner_preview: RwSignal<Option<String>>,

    // Contact
    pub contact_email: RwSignal<String>,
    pub phone: RwSignal<String>,

    // Address
    pub street: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub postal_code: RwSignal<String>,
    pub country: RwSignal<String>,

    // Social
    pub website: RwSignal<String>,
    pub facebook: RwSignal<String>,
    pub instagram: RwSignal<String>,
    pub twitter: RwSignal<String>,

    pub step: RwSignal<ProfileStep>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
}

impl ProfileWizardVm {
    pub fn new() -> Self {
        let text = || RwSignal::new(String::new());
        Self {
            id: RwSignal::new(None),
            store_name: text(),
            store_description: text(),
            logo: StoredValue::new_local(None),
            banner: StoredValue::new_local(None),
            logo_preview: RwSignal::new(None),
            banner_preview: RwSignal::new(None),
            contact_email: text(),
            phone: text(),
            street: text(),
            city: text(),
            state: text(),
            postal_code: text(),
            country: text(),
            website: text(),
            facebook: text(),
            instagram: text(),
            twitter: text(),
            step: RwSignal::new(ProfileStep::Branding),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
        }
    }

    /// Fill the inputs from an existing profile (edit mode).
    pub fn load(&self, form: &SellerProfileForm, logo_url: Option<String>, banner_url: Option<String>) {
        self.id.set(form.id.clone());
        self.store_name.set(form.store_name.clone());
        self.store_description.set(form.store_description.clone());
        self.contact_email.set(form.contact_email.clone());
        self.phone.set(form.phone.clone());
        self.apply_address(form.address());
        self.website.set(form.website.clone());
        self.facebook.set(form.facebook.clone());
        self.instagram.set(form.instagram.clone());
        self.twitter.set(form.twitter.clone());
        self.logo_preview.set(logo_url);
        self.banner_preview.set(banner_url);
        self.step.set(ProfileStep::Branding);
        self.errors.set(FieldErrors::new());
    }

    pub fn snapshot(&self) -> SellerProfileForm {
        SellerProfileForm {
            id: self.id.get_untracked(),
            store_name: self.store_name.get_untracked(),
            store_description: self.store_description.get_untracked(),
            contact_email: self.contact_email.get_untracked(),
            phone: self.phone.get_untracked(),
            street: self.street.get_untracked(),
            city: self.city.get_untracked(),
            state: self.state.get_untracked(),
            postal_code: self.postal_code.get_untracked(),
            country: self.country.get_untracked(),
            website: self.website.get_untracked(),
            facebook: self.facebook.get_untracked(),
            instagram: self.instagram.get_untracked(),
            twitter: self.twitter.get_untracked(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Re-check one field, e.g. when it loses focus.
    pub fn check_field(&self, field: &'static str) {
        let message = validate_field(&self.snapshot(), PROFILE_RULES, field);
        self.errors.update(|e| e.set(field, message));
    }

    pub fn blur(&self, field: &'static str) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.check_field(field))
    }

    /// Validate the current step; advance when it is clean.
    pub fn next(&self) -> bool {
        let step = self.step.get_untracked();
        let step_errors = self.snapshot().validate_step(step);
        let clean = step_errors.is_empty();
        self.errors.update(|e| {
            for field in step.fields() {
                e.remove(field);
            }
            e.extend(step_errors);
        });
        if clean {
            if let Some(next) = step.next() {
                self.step.set(next);
            }
        }
        clean
    }

    pub fn prev(&self) {
        if let Some(prev) = self.step.get_untracked().prev() {
            self.step.set(prev);
        }
    }

    /// Full check before submit. On failure jumps to the first broken step.
    pub fn validate_for_submit(&self) -> Result<SellerProfileForm, FieldErrors> {
        let form = self.snapshot();
        let errors = form.validate();
        if errors.is_empty() {
            self.errors.set(FieldErrors::new());
            return Ok(form);
        }
        if let Some(step) = form.first_invalid_step() {
            self.step.set(step);
        }
        self.errors.set(errors.clone());
        Err(errors)
    }

    pub fn apply_address(&self, address: Address) {
        self.street.set(address.street);
        self.city.set(address.city);
        self.state.set(address.state);
        self.postal_code.set(address.postal_code);
        self.country.set(address.country);
        for field in ProfileStep::Address.fields() {
            self.errors.update(|e| e.remove(field));
        }
    }

    pub fn set_logo(&self, file: Option<File>) {
        replace_preview(self.logo_preview, file.as_ref().and_then(preview_url));
        self.logo.set_value(file);
    }

    pub fn set_banner(&self, file: Option<File>) {
        replace_preview(self.banner_preview, file.as_ref().and_then(preview_url));
        self.banner.set_value(file);
    }

    /// Free the object URLs created for picked files. Call when the wizard closes.
    pub fn release_previews(&self) {
        for slot in [self.logo_preview, self.banner_preview] {
            if let Some(Some(url)) = slot.try_get_untracked() {
                revoke_preview(&url);
            }
        }
    }
}

impl Default for ProfileWizardVm {
    fn default() -> Self {
        Self::new()
    }
}

fn preview_url(file: &File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Stored server URLs are left alone; only `blob:` URLs we created are revoked.
fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

fn revoke_preview(url: &str) {
    if is_object_url(url) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("revoke_object_url failed: {:?}", e);
        }
    }
}

fn replace_preview(slot: RwSignal<Option<String>>, next: Option<String>) {
    if let Some(previous) = slot.get_untracked() {
        revoke_preview(&previous);
    }
    slot.set(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_blob_urls_are_revoked() {
        assert!(is_object_url("blob:http://localhost:8080/5b1c0e7a"));
        assert!(!is_object_url("https://cdn.example.com/logo.png"));
        assert!(!is_object_url("/uploads/banner.jpg"));
    }
}
