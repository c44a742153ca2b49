//! Seller store profile and the multi-step form that edits it.

use crate::shared::validation::{
    validate_all, validate_fields, FieldErrors, FieldRule, Pattern, ValidationRules,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub store_name: String,
    #[serde(default)]
    pub store_description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// Wizard steps in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileStep {
    Branding,
    Contact,
    Address,
    Social,
}

impl ProfileStep {
    pub const ALL: [ProfileStep; 4] = [
        ProfileStep::Branding,
        ProfileStep::Contact,
        ProfileStep::Address,
        ProfileStep::Social,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or_default()
    }

    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProfileStep::Branding => "Store branding",
            ProfileStep::Contact => "Contact details",
            ProfileStep::Address => "Business address",
            ProfileStep::Social => "Social links",
        }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ProfileStep::Branding => &["store_name", "store_description"],
            ProfileStep::Contact => &["contact_email", "phone"],
            ProfileStep::Address => &["street", "city", "state", "postal_code", "country"],
            ProfileStep::Social => &["website", "facebook", "instagram", "twitter"],
        }
    }
}

/// Editable state of the profile wizard. Every input is kept as typed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerProfileForm {
    pub id: Option<String>,
    pub store_name: String,
    pub store_description: String,
    pub contact_email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub website: String,
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

fn check_store_name(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::required()
        .length(3, 50)
        .check(&f.store_name, "Store name")
}

fn check_store_description(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::none()
        .max_length(500)
        .check(&f.store_description, "Store description")
}

fn check_contact_email(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::required()
        .pattern(Pattern::Email)
        .with_error("Enter a valid email address")
        .check(&f.contact_email, "Contact email")
}

fn check_phone(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::required()
        .pattern(Pattern::Phone)
        .with_error("Enter a valid phone number")
        .check(&f.phone, "Phone")
}

fn check_street(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::required()
        .length(3, 120)
        .check(&f.street, "Street")
}

fn check_city(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::required().length(2, 60).check(&f.city, "City")
}

fn check_state(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::none().max_length(60).check(&f.state, "State")
}

fn check_postal_code(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::required()
        .length(3, 10)
        .check(&f.postal_code, "Postal code")
}

fn check_country(f: &SellerProfileForm) -> Option<String> {
    ValidationRules::required()
        .length(2, 60)
        .check(&f.country, "Country")
}

fn url_rule() -> ValidationRules {
    ValidationRules::none()
        .pattern(Pattern::Url)
        .with_error("Enter a full URL starting with http:// or https://")
}

fn check_website(f: &SellerProfileForm) -> Option<String> {
    url_rule().check(&f.website, "Website")
}

fn check_facebook(f: &SellerProfileForm) -> Option<String> {
    url_rule().check(&f.facebook, "Facebook")
}

fn check_instagram(f: &SellerProfileForm) -> Option<String> {
    url_rule().check(&f.instagram, "Instagram")
}

fn check_twitter(f: &SellerProfileForm) -> Option<String> {
    url_rule().check(&f.twitter, "Twitter")
}

pub const PROFILE_RULES: &[FieldRule<SellerProfileForm>] = &[
    FieldRule::new("store_name", check_store_name),
    FieldRule::new("store_description", check_store_description),
    FieldRule::new("contact_email", check_contact_email),
    FieldRule::new("phone", check_phone),
    FieldRule::new("street", check_street),
    FieldRule::new("city", check_city),
    FieldRule::new("state", check_state),
    FieldRule::new("postal_code", check_postal_code),
    FieldRule::new("country", check_country),
    FieldRule::new("website", check_website),
    FieldRule::new("facebook", check_facebook),
    FieldRule::new("instagram", check_instagram),
    FieldRule::new("twitter", check_twitter),
];

fn opt(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl SellerProfileForm {
    pub fn from_profile(profile: &SellerProfile) -> Self {
        Self {
            id: profile.id.clone(),
            store_name: profile.store_name.clone(),
            store_description: profile.store_description.clone().unwrap_or_default(),
            contact_email: profile.contact_email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            street: profile.address.street.clone(),
            city: profile.address.city.clone(),
            state: profile.address.state.clone(),
            postal_code: profile.address.postal_code.clone(),
            country: profile.address.country.clone(),
            website: profile.social_links.website.clone(),
            facebook: profile.social_links.facebook.clone(),
            instagram: profile.social_links.instagram.clone(),
            twitter: profile.social_links.twitter.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate_step(&self, step: ProfileStep) -> FieldErrors {
        validate_fields(self, PROFILE_RULES, step.fields())
    }

    pub fn validate(&self) -> FieldErrors {
        validate_all(self, PROFILE_RULES)
    }

    /// First step that still has an invalid field.
    pub fn first_invalid_step(&self) -> Option<ProfileStep> {
        ProfileStep::ALL
            .into_iter()
            .find(|step| !self.validate_step(*step).is_empty())
    }

    pub fn address(&self) -> Address {
        Address {
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country: self.country.trim().to_string(),
        }
    }

    pub fn social_links(&self) -> SocialLinks {
        SocialLinks {
            website: self.website.trim().to_string(),
            facebook: self.facebook.trim().to_string(),
            instagram: self.instagram.trim().to_string(),
            twitter: self.twitter.trim().to_string(),
        }
    }

    pub fn apply_address(&mut self, address: Address) {
        self.street = address.street;
        self.city = address.city;
        self.state = address.state;
        self.postal_code = address.postal_code;
        self.country = address.country;
    }

    /// Text parts of the multipart body. Nested objects are sent as JSON strings.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("storeName", self.store_name.trim().to_string())];
        if let Some(description) = opt(&self.store_description) {
            fields.push(("storeDescription", description));
        }
        if let Some(email) = opt(&self.contact_email) {
            fields.push(("contactEmail", email));
        }
        if let Some(phone) = opt(&self.phone) {
            fields.push(("phone", phone));
        }
        fields.push((
            "address",
            serde_json::to_string(&self.address()).unwrap_or_default(),
        ));
        fields.push((
            "socialLinks",
            serde_json::to_string(&self.social_links()).unwrap_or_default(),
        ));
        fields
    }
}

/// One result of the address lookup service (OpenStreetMap Nominatim format).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub display_name: String,
    #[serde(default)]
    pub address: SuggestionParts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionParts {
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl AddressSuggestion {
    pub fn to_address(&self) -> Address {
        let parts = &self.address;
        let street = match (&parts.road, &parts.house_number) {
            (Some(road), Some(number)) => format!("{} {}", road, number),
            (Some(road), None) => road.clone(),
            _ => String::new(),
        };
        Address {
            street,
            city: parts
                .city
                .clone()
                .or_else(|| parts.town.clone())
                .or_else(|| parts.village.clone())
                .unwrap_or_default(),
            state: parts.state.clone().unwrap_or_default(),
            postal_code: parts.postcode.clone().unwrap_or_default(),
            country: parts.country.clone().unwrap_or_default(),
        }
    }
}

/// Minimum query length before the address lookup is called.
pub const ADDRESS_QUERY_MIN_LEN: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SellerProfileForm {
        SellerProfileForm {
            id: None,
            store_name: "Green Corner".to_string(),
            store_description: "Plants".to_string(),
            contact_email: "hello@greencorner.de".to_string(),
            phone: "+49 30 1234567".to_string(),
            street: "Hauptstr. 5".to_string(),
            city: "Berlin".to_string(),
            state: String::new(),
            postal_code: "10115".to_string(),
            country: "Germany".to_string(),
            website: "https://greencorner.de".to_string(),
            facebook: String::new(),
            instagram: String::new(),
            twitter: String::new(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
        assert_eq!(valid_form().first_invalid_step(), None);
    }

    #[test]
    fn step_validation_only_reports_its_fields() {
        let mut form = valid_form();
        form.store_name = "ab".to_string();
        form.contact_email = "nope".to_string();

        let branding = form.validate_step(ProfileStep::Branding);
        assert_eq!(branding.len(), 1);
        assert!(branding.contains("store_name"));

        let all = form.validate();
        assert_eq!(all.len(), 2);
        assert_eq!(form.first_invalid_step(), Some(ProfileStep::Branding));
    }

    #[test]
    fn social_links_must_be_urls_when_present() {
        let mut form = valid_form();
        form.instagram = "instagram.com/greencorner".to_string();
        let errors = form.validate_step(ProfileStep::Social);
        assert_eq!(
            errors.get("instagram"),
            Some("Enter a full URL starting with http:// or https://")
        );
    }

    #[test]
    fn step_navigation() {
        assert_eq!(ProfileStep::Branding.next(), Some(ProfileStep::Contact));
        assert_eq!(ProfileStep::Branding.prev(), None);
        assert_eq!(ProfileStep::Social.prev(), Some(ProfileStep::Address));
        assert!(ProfileStep::Social.is_last());
    }

    #[test]
    fn multipart_fields_skip_blank_optionals() {
        let mut form = valid_form();
        form.store_description = "   ".to_string();
        let fields = form.multipart_fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["storeName", "contactEmail", "phone", "address", "socialLinks"]
        );
        let address: Address = serde_json::from_str(&fields[3].1).unwrap();
        assert_eq!(address.city, "Berlin");
    }

    #[test]
    fn form_round_trips_profile() {
        let profile = SellerProfile {
            id: Some("p1".to_string()),
            store_name: "Shop".to_string(),
            address: Address {
                city: "Köln".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let form = SellerProfileForm::from_profile(&profile);
        assert!(form.is_edit());
        assert_eq!(form.city, "Köln");
    }

    #[test]
    fn suggestion_maps_to_address() {
        let json = r#"{
            "display_name": "5, Hauptstraße, Berlin",
            "address": {"road": "Hauptstraße", "house_number": "5", "town": "Potsdam", "postcode": "14467", "country": "Deutschland"}
        }"#;
        let suggestion: AddressSuggestion = serde_json::from_str(json).unwrap();
        let address = suggestion.to_address();
        assert_eq!(address.street, "Hauptstraße 5");
        assert_eq!(address.city, "Potsdam");
        assert_eq!(address.postal_code, "14467");
    }
}
