use contracts::domain::a003_order::aggregate::{
    CommentRequest, OrderComment, OrderDetail, OrderStatusUpdate, TrackingInfo, TrackingUpdate,
};
use contracts::domain::a003_order::list::OrderSummary;

use crate::shared::http::{self, Envelope};

pub async fn fetch_orders() -> Result<Vec<OrderSummary>, String> {
    http::get_json::<Envelope<Vec<OrderSummary>>>("/api/orders", "Failed to load orders")
        .await
        .map(Envelope::into_inner)
}

pub async fn fetch_order(id: &str) -> Result<OrderDetail, String> {
    http::get_json::<Envelope<OrderDetail>>(&format!("/api/orders/{}", id), "Failed to load order")
        .await
        .map(Envelope::into_inner)
}

pub async fn update_status(id: &str, update: &OrderStatusUpdate) -> Result<(), String> {
    http::put_unit(
        &format!("/api/orders/{}/status", id),
        update,
        "Failed to update order status",
    )
    .await
}

pub async fn update_tracking(id: &str, update: &TrackingUpdate) -> Result<TrackingInfo, String> {
    http::put_json::<_, Envelope<TrackingInfo>>(
        &format!("/api/orders/{}/tracking", id),
        update,
        "Failed to save tracking",
    )
    .await
    .map(Envelope::into_inner)
}

pub async fn add_comment(id: &str, request: &CommentRequest) -> Result<OrderComment, String> {
    http::post_json::<_, Envelope<OrderComment>>(
        &format!("/api/orders/{}/comments", id),
        request,
        "Failed to add comment",
    )
    .await
    .map(Envelope::into_inner)
}

pub async fn delete_comment(order_id: &str, comment_id: &str) -> Result<(), String> {
    http::delete(
        &format!("/api/orders/{}/comments/{}", order_id, comment_id),
        "Failed to delete comment",
    )
    .await
}
