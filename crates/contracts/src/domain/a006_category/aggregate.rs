use crate::shared::validation::{validate_all, FieldErrors, FieldRule, ValidationRules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub product_count: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub is_active: bool,
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            slug: c.slug.clone(),
            description: c.description.clone().unwrap_or_default(),
            parent_id: c.parent_id.clone(),
            is_active: c.is_active,
        }
    }
}

impl CategoryDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Updates the name and, unless the slug was edited by hand, regenerates it.
    pub fn set_name(&mut self, name: String) {
        if self.slug.is_empty() || self.slug == slugify(&self.name) {
            self.slug = slugify(&name);
        }
        self.name = name;
    }

    pub fn validate(&self, existing: &[Category]) -> FieldErrors {
        let mut errors = validate_all(self, CATEGORY_RULES);
        if !errors.contains("slug") {
            let taken = existing
                .iter()
                .any(|c| c.slug == self.slug && Some(&c.id) != self.id.as_ref());
            if taken {
                errors.insert("slug", "Another category already uses this slug");
            }
        }
        if self.parent_id.is_some() && self.parent_id == self.id {
            errors.insert("parent_id", "A category cannot be its own parent");
        }
        errors
    }
}

fn check_name(c: &CategoryDto) -> Option<String> {
    ValidationRules::required().length(2, 60).check(&c.name, "Name")
}

fn check_slug(c: &CategoryDto) -> Option<String> {
    if c.slug.trim().is_empty() {
        return Some("Slug is required".to_string());
    }
    (slugify(&c.slug) != c.slug)
        .then(|| "Slug may only contain lowercase letters, digits and dashes".to_string())
}

fn check_description(c: &CategoryDto) -> Option<String> {
    ValidationRules::none()
        .max_length(500)
        .check(&c.description, "Description")
}

pub const CATEGORY_RULES: &[FieldRule<CategoryDto>] = &[
    FieldRule::new("name", check_name),
    FieldRule::new("slug", check_slug),
    FieldRule::new("description", check_description),
];

/// URL-safe identifier: lowercase ASCII alphanumerics separated by single dashes.
///
/// Common Latin accents are folded (`ü` → `u`, `ß` → `ss`); everything else
/// that is not alphanumeric becomes a separator.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        let folded = fold_accent(ch);
        for c in folded.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c);
            } else {
                pending_dash = true;
            }
        }
    }
    slug
}

fn fold_accent(ch: char) -> String {
    let s = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        'æ' => "ae",
        '&' => " and ",
        _ => return ch.to_string(),
    };
    s.to_string()
}

/// Parents first, children right after their parent, both by name.
pub fn tree_order(categories: &[Category]) -> Vec<(usize, Category)> {
    fn walk(all: &[Category], parent: Option<&str>, depth: usize, out: &mut Vec<(usize, Category)>) {
        let mut level: Vec<&Category> = all
            .iter()
            .filter(|c| c.parent_id.as_deref() == parent)
            .collect();
        level.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        for c in level {
            out.push((depth, c.clone()));
            walk(all, Some(c.id.as_str()), depth + 1, out);
        }
    }

    let mut out = Vec::with_capacity(categories.len());
    walk(categories, None, 0, &mut out);
    // Orphans whose parent is not in the list.
    for c in categories {
        if !out.iter().any(|(_, seen)| seen.id == c.id) {
            out.push((0, c.clone()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            slug: slugify(name),
            description: None,
            image_url: None,
            parent_id: parent.map(str::to_string),
            product_count: 0,
            is_active: true,
        }
    }

    #[test]
    fn slugify_cases() {
        assert_eq!(slugify("Home & Garden"), "home-and-garden");
        assert_eq!(slugify("  Über Größe!! "), "uber-grosse");
        assert_eq!(slugify("TV--Audio"), "tv-audio");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn name_drives_slug_until_edited() {
        let mut dto = CategoryDto::default();
        dto.set_name("Kitchen Tools".to_string());
        assert_eq!(dto.slug, "kitchen-tools");

        dto.slug = "kitchen".to_string();
        dto.set_name("Kitchen Gear".to_string());
        assert_eq!(dto.slug, "kitchen");
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let existing = vec![category("c1", "Books", None)];
        let mut dto = CategoryDto::default();
        dto.set_name("Books".to_string());
        assert!(dto.validate(&existing).contains("slug"));

        let edit = CategoryDto::from(&existing[0]);
        assert!(edit.validate(&existing).is_empty());
    }

    #[test]
    fn slug_must_be_normalized() {
        let dto = CategoryDto {
            name: "Toys".to_string(),
            slug: "Toys Kids".to_string(),
            ..Default::default()
        };
        assert!(dto.validate(&[]).get("slug").is_some());
    }

    #[test]
    fn tree_order_nests_children() {
        let cats = vec![
            category("2", "Phones", Some("1")),
            category("1", "Electronics", None),
            category("3", "Books", None),
            category("4", "Lost", Some("missing")),
        ];
        let ordered: Vec<_> = tree_order(&cats)
            .into_iter()
            .map(|(d, c)| (d, c.id))
            .collect();
        assert_eq!(
            ordered,
            vec![
                (0, "3".to_string()),
                (0, "1".to_string()),
                (1, "2".to_string()),
                (0, "4".to_string()),
            ]
        );
    }
}
