pub mod authored_text;
pub mod material;
pub mod mural;
pub mod news;
pub mod video;

pub use authored_text::AuthoredText;
pub use material::Material;
pub use mural::MuralPost;
pub use news::NewsItem;
pub use video::CuratedVideo;

/// Characters kept in card summaries.
pub const CARD_PREVIEW_CHARS: usize = 160;
