use crate::shared::validation::{validate_all, FieldErrors, FieldRule, Pattern, ValidationRules};
use serde::{Deserialize, Serialize};

/// Promotional card shown on the storefront home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub position: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link_url: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub position: u32,
    pub is_active: bool,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            id: Some(card.id.clone()),
            title: card.title.clone(),
            description: card.description.clone().unwrap_or_default(),
            image_url: card.image_url.clone().unwrap_or_default(),
            link_url: card.link_url.clone().unwrap_or_default(),
            button_text: card.button_text.clone().unwrap_or_default(),
            position: card.position,
            is_active: card.is_active,
        }
    }
}

impl CardDto {
    pub fn new_card(position: u32) -> Self {
        Self {
            position,
            is_active: true,
            ..Default::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> FieldErrors {
        validate_all(self, CARD_RULES)
    }
}

const TITLE: ValidationRules = ValidationRules::required().length(2, 80);
const DESCRIPTION: ValidationRules = ValidationRules::none().max_length(300);
const BUTTON_TEXT: ValidationRules = ValidationRules::none().max_length(30);
const URL: ValidationRules = ValidationRules::none()
    .pattern(Pattern::Url)
    .with_error("Enter a full URL starting with http:// or https://");

fn check_title(c: &CardDto) -> Option<String> {
    TITLE.check(&c.title, "Title")
}

fn check_description(c: &CardDto) -> Option<String> {
    DESCRIPTION.check(&c.description, "Description")
}

fn check_button_text(c: &CardDto) -> Option<String> {
    BUTTON_TEXT.check(&c.button_text, "Button text")
}

fn check_link_url(c: &CardDto) -> Option<String> {
    URL.check(&c.link_url, "Link")
}

fn check_image_url(c: &CardDto) -> Option<String> {
    URL.check(&c.image_url, "Image URL")
}

pub const CARD_RULES: &[FieldRule<CardDto>] = &[
    FieldRule::new("title", check_title),
    FieldRule::new("description", check_description),
    FieldRule::new("button_text", check_button_text),
    FieldRule::new("link_url", check_link_url),
    FieldRule::new("image_url", check_image_url),
];

/// Cards ordered by position, then title.
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.title.cmp(&b.title)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_active_and_invalid_until_titled() {
        let mut dto = CardDto::new_card(3);
        assert!(dto.is_active);
        assert!(!dto.is_edit());
        assert!(dto.validate().contains("title"));

        dto.title = "Summer sale".to_string();
        dto.link_url = "https://shop.example.com/sale".to_string();
        assert!(dto.validate().is_empty());
    }

    #[test]
    fn rejects_relative_link() {
        let dto = CardDto {
            title: "Sale".to_string(),
            link_url: "/sale".to_string(),
            is_active: true,
            ..Default::default()
        };
        let errors = dto.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("link_url"));
    }

    #[test]
    fn card_defaults_to_active() {
        let card: Card = serde_json::from_str(r#"{"_id":"c1","title":"Hello"}"#).unwrap();
        assert!(card.is_active);
        let dto = CardDto::from(&card);
        assert_eq!(dto.id.as_deref(), Some("c1"));
    }

    #[test]
    fn sorts_by_position() {
        let mut cards: Vec<Card> = ["b", "a", "c"]
            .iter()
            .zip([2, 1, 1])
            .map(|(t, p)| Card {
                id: t.to_string(),
                title: t.to_string(),
                description: None,
                image_url: None,
                link_url: None,
                button_text: None,
                position: p,
                is_active: true,
                created_at: None,
            })
            .collect();
        sort_cards(&mut cards);
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "b"]);
    }
}
