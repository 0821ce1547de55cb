pub mod error;
pub mod feed;
pub mod providers;
pub mod store;
