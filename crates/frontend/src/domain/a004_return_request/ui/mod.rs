pub mod list;
mod review;
