use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Body is one word; whitespace around it is ignored.
static YOUTUBE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[youtube\]\s*([^\s\[\]]+)\s*\[/youtube\]").expect("youtube token regex")
});

static SPOTIFY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[spotify\]\s*([^\s\[\]]+)\s*\[/spotify\]").expect("spotify token regex")
});

static YOUTUBE_URL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|[?&]v=|/embed/|/shorts/)([A-Za-z0-9_-]+)")
        .expect("youtube url regex")
});

static SPOTIFY_URL_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"open\.spotify\.com/(?:embed/)?(?:intl-[a-z-]+/)?([a-z]+/[A-Za-z0-9]+)")
        .expect("spotify url regex")
});

/// Media provider of an embed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedProvider {
    Youtube,
    Spotify,
}

impl EmbedProvider {
    /// Providers in detection order. YouTube wins when a line holds both.
    pub const PRECEDENCE: [EmbedProvider; 2] = [EmbedProvider::Youtube, EmbedProvider::Spotify];

    pub fn tag(self) -> &'static str {
        match self {
            EmbedProvider::Youtube => "youtube",
            EmbedProvider::Spotify => "spotify",
        }
    }

    fn token(self) -> &'static Regex {
        match self {
            EmbedProvider::Youtube => &YOUTUBE_TOKEN,
            EmbedProvider::Spotify => &SPOTIFY_TOKEN,
        }
    }

    /// Finds the first embed token on a line.
    ///
    /// Returns the provider and the normalised media id. Anything else on the
    /// line is ignored by the caller: an embed always consumes its line.
    pub fn detect(line: &str) -> Option<(EmbedProvider, String)> {
        Self::PRECEDENCE.into_iter().find_map(|provider| {
            provider
                .token()
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|body| (provider, provider.normalize_id(body.as_str())))
        })
    }

    /// Reduces a token body to the provider's media id.
    ///
    /// Bare ids pass through. Pasted share URLs are reduced to the id
    /// (YouTube) or to `<kind>/<id>` (Spotify).
    pub fn normalize_id(self, body: &str) -> String {
        if !body.contains('/') {
            return body.to_string();
        }
        let pattern = match self {
            EmbedProvider::Youtube => &YOUTUBE_URL_ID,
            EmbedProvider::Spotify => &SPOTIFY_URL_PATH,
        };
        pattern
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| body.to_string(), |m| m.as_str().to_string())
    }

    /// URL suitable for an `<iframe>` source.
    pub fn embed_url(self, id: &str) -> String {
        match self {
            EmbedProvider::Youtube => format!("https://www.youtube.com/embed/{id}"),
            EmbedProvider::Spotify if id.contains('/') => {
                format!("https://open.spotify.com/embed/{id}")
            }
            EmbedProvider::Spotify => format!("https://open.spotify.com/embed/episode/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn detect_youtube_token() {
        assert_eq!(
            EmbedProvider::detect("[youtube]abc123[/youtube]"),
            Some((EmbedProvider::Youtube, "abc123".to_string()))
        );
    }

    #[test]
    fn detect_ignores_surrounding_text() {
        assert_eq!(
            EmbedProvider::detect("texto [spotify]xyz[/spotify] mais"),
            Some((EmbedProvider::Spotify, "xyz".to_string()))
        );
    }

    #[test]
    fn youtube_wins_over_spotify_on_same_line() {
        let found = EmbedProvider::detect("[spotify]s1[/spotify] [youtube]y1[/youtube]");
        assert_eq!(found, Some((EmbedProvider::Youtube, "y1".to_string())));
    }

    #[test]
    fn unterminated_token_is_not_an_embed() {
        assert_eq!(EmbedProvider::detect("[youtube]abc123"), None);
        assert_eq!(EmbedProvider::detect("[youtube][/youtube]"), None);
    }

    #[test]
    fn token_body_must_be_one_word() {
        assert_eq!(EmbedProvider::detect("[youtube]abc 123[/youtube]"), None);
        assert_eq!(EmbedProvider::detect("[spotify]   [/spotify]"), None);
        assert_eq!(
            EmbedProvider::detect("[youtube]  abc123 [/youtube]"),
            Some((EmbedProvider::Youtube, "abc123".to_string()))
        );
    }

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/shorts/dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?list=x&v=dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    fn normalize_youtube_ids(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(EmbedProvider::Youtube.normalize_id(body), expected);
    }

    #[rstest]
    #[case("https://open.spotify.com/episode/4rOoJ6Egrf8K2IrywzwOMk", "episode/4rOoJ6Egrf8K2IrywzwOMk")]
    #[case("https://open.spotify.com/intl-pt/track/6rqhFgbbKwnb9MLmUQDhG6", "track/6rqhFgbbKwnb9MLmUQDhG6")]
    #[case("https://open.spotify.com/embed/show/5CfCWKI5pZ28U0uOzXkDHe", "show/5CfCWKI5pZ28U0uOzXkDHe")]
    #[case("4rOoJ6Egrf8K2IrywzwOMk", "4rOoJ6Egrf8K2IrywzwOMk")]
    fn normalize_spotify_ids(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(EmbedProvider::Spotify.normalize_id(body), expected);
    }

    #[test]
    fn detect_normalizes_pasted_url() {
        assert_eq!(
            EmbedProvider::detect("[youtube]https://youtu.be/abc_DEF-123[/youtube]"),
            Some((EmbedProvider::Youtube, "abc_DEF-123".to_string()))
        );
    }

    #[test]
    fn embed_urls() {
        assert_eq!(
            EmbedProvider::Youtube.embed_url("abc"),
            "https://www.youtube.com/embed/abc"
        );
        assert_eq!(
            EmbedProvider::Spotify.embed_url("track/xyz"),
            "https://open.spotify.com/embed/track/xyz"
        );
        assert_eq!(
            EmbedProvider::Spotify.embed_url("xyz"),
            "https://open.spotify.com/embed/episode/xyz"
        );
    }
}
