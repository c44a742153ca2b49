use contracts::domain::a004_return_request::aggregate::{ReturnRequest, ReturnStatusUpdate};

use crate::shared::http::{self, Envelope};

pub async fn fetch_returns() -> Result<Vec<ReturnRequest>, String> {
    http::get_json::<Envelope<Vec<ReturnRequest>>>("/api/returns", "Failed to load return requests")
        .await
        .map(Envelope::into_inner)
}

pub async fn update_status(id: &str, update: &ReturnStatusUpdate) -> Result<ReturnRequest, String> {
    http::put_json::<_, Envelope<ReturnRequest>>(
        &format!("/api/returns/{}/status", id),
        update,
        "Failed to update return request",
    )
    .await
    .map(Envelope::into_inner)
}

pub async fn delete_return(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/returns/{}", id), "Failed to delete return request").await
}
