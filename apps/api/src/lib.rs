pub mod blocks;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;

pub use models::{ContentType, Language, Layout, VocabularyError};
