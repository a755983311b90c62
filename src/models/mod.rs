pub mod cache;
pub mod error;
pub mod history;
pub mod news;
