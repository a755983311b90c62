pub mod cache;
pub mod config;
pub mod news_client;
pub mod search_store;
pub mod state;
