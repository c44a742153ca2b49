pub mod a001_seller;
pub mod a002_payout;
pub mod a003_order;
pub mod a004_return_request;
pub mod a005_card;
pub mod a006_category;
pub mod a007_privacy;
