pub mod admin;
pub mod auth;
pub mod catalog;
pub mod markup;
pub mod metadata;
pub mod models;
pub mod store;

// Re-export key types for easier usage
pub use auth::{AdminGate, AuthError, AuthenticationPolicy, SessionToken, SharedSecretPolicy};
pub use catalog::{MaterialFilter, find_material};
pub use markup::{
    Alignment, DisplayBlock, EmbedProvider, InlineSpan, plain_text, render_document,
    strip_formatting, to_html,
};
pub use metadata::{ExtractError, ExtractedMetadata, MetadataExtractor};
pub use models::*;
pub use store::{MemoryStore, Record, StoreError, Table, TableStore};
