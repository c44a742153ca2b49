use contracts::domain::a001_seller::aggregate::{
    Chat, CreateChatRequest, Seller, SellerStatusUpdate,
};
use contracts::domain::a001_seller::profile::{AddressSuggestion, SellerProfile, SellerProfileForm};
use gloo_net::http::Request;
use web_sys::{AbortSignal, File, FormData};

use crate::shared::http::{self, Envelope};

const ADDRESS_LOOKUP_URL: &str = "https://nominatim.openstreetmap.org/search";

pub async fn fetch_sellers() -> Result<Vec<Seller>, String> {
    http::get_json::<Envelope<Vec<Seller>>>("/api/sellers", "Failed to load sellers")
        .await
        .map(Envelope::into_inner)
}

pub async fn update_status(id: &str, update: &SellerStatusUpdate) -> Result<(), String> {
    http::put_unit(
        &format!("/api/sellers/{}/status", id),
        update,
        "Failed to update seller status",
    )
    .await
}

pub async fn delete_seller(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/sellers/{}", id), "Failed to delete seller").await
}

/// Open (or reuse) a chat with the seller's account.
pub async fn create_chat(participant_id: &str) -> Result<Chat, String> {
    let request = CreateChatRequest {
        participant_id: participant_id.to_string(),
    };
    http::post_json::<_, Envelope<Chat>>("/api/chats", &request, "Failed to start chat")
        .await
        .map(Envelope::into_inner)
}

/// Profile of the signed-in seller; `None` until one has been created.
pub async fn fetch_my_profile() -> Result<Option<SellerProfile>, String> {
    let value =
        http::get_json::<serde_json::Value>("/api/seller-profile/me", "Failed to load store profile")
            .await?;
    http::optional_payload(value)
}

/// Create (POST) or update (PUT) the profile as multipart form data.
pub async fn save_profile(
    form: &SellerProfileForm,
    logo: Option<File>,
    banner: Option<File>,
) -> Result<SellerProfile, String> {
    let data = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    for (name, value) in form.multipart_fields() {
        data.append_with_str(name, &value)
            .map_err(|_| format!("Failed to add field {}", name))?;
    }
    if let Some(file) = logo {
        data.append_with_blob_and_filename("logo", &file, &file.name())
            .map_err(|_| "Failed to attach logo".to_string())?;
    }
    if let Some(file) = banner {
        data.append_with_blob_and_filename("banner", &file, &file.name())
            .map_err(|_| "Failed to attach banner".to_string())?;
    }

    let (path, is_update) = match &form.id {
        Some(id) => (format!("/api/seller-profile/{}", id), true),
        None => ("/api/seller-profile".to_string(), false),
    };
    http::send_form::<Envelope<SellerProfile>>(&path, data, is_update, "Failed to save store profile")
        .await
        .map(Envelope::into_inner)
}

/// Address suggestions for `query`. `signal` aborts the request when a newer
/// query supersedes it.
pub async fn search_address(
    query: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<AddressSuggestion>, String> {
    let url = format!(
        "{}?format=json&addressdetails=1&limit=5&q={}",
        ADDRESS_LOOKUP_URL,
        urlencoding::encode(query)
    );
    let response = Request::get(&url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| format!("Address lookup failed: {}", e))?;
    if !response.ok() {
        return Err(format!("Address lookup failed: {}", response.status()));
    }
    response
        .json::<Vec<AddressSuggestion>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
