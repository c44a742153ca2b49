use contracts::domain::a005_card::aggregate::{Card, CardDto};

use crate::shared::http::{self, Envelope};

pub async fn fetch_cards() -> Result<Vec<Card>, String> {
    http::get_json::<Envelope<Vec<Card>>>("/api/cards", "Failed to load cards")
        .await
        .map(Envelope::into_inner)
}

/// Create when `dto.id` is empty, update otherwise.
pub async fn save_card(dto: &CardDto) -> Result<Card, String> {
    let result = match &dto.id {
        Some(id) => {
            http::put_json::<_, Envelope<Card>>(&format!("/api/cards/{}", id), dto, "Failed to save card")
                .await
        }
        None => http::post_json::<_, Envelope<Card>>("/api/cards", dto, "Failed to create card").await,
    };
    result.map(Envelope::into_inner)
}

pub async fn delete_card(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/cards/{}", id), "Failed to delete card").await
}
