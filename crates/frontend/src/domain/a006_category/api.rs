use contracts::domain::a006_category::aggregate::{Category, CategoryDto};

use crate::shared::http::{self, Envelope};

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    http::get_json::<Envelope<Vec<Category>>>("/api/categories", "Failed to load categories")
        .await
        .map(Envelope::into_inner)
}

pub async fn save_category(dto: &CategoryDto) -> Result<Category, String> {
    let result = match &dto.id {
        Some(id) => {
            http::put_json::<_, Envelope<Category>>(
                &format!("/api/categories/{}", id),
                dto,
                "Failed to save category",
            )
            .await
        }
        None => {
            http::post_json::<_, Envelope<Category>>("/api/categories", dto, "Failed to create category")
                .await
        }
    };
    result.map(Envelope::into_inner)
}

pub async fn delete_category(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/categories/{}", id), "Failed to delete category").await
}
