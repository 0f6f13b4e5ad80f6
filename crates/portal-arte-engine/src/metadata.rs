//! Contract for the AI metadata extractor used by the admin forms.
//!
//! Given a URL the extractor answers with a best-effort title, summary and,
//! when it can tell, a category and a YouTube video id. Extraction is a
//! convenience: a failure never blocks the form, the admin retries or types
//! the fields in.

use serde::{Deserialize, Serialize};

use crate::markup::EmbedProvider;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        alias = "videoId",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Metadata service unavailable: {0}")]
    Network(String),
    #[error("Metadata reply contained no JSON object")]
    MissingObject,
    #[error("Failed to parse metadata reply: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Something that can describe a URL.
pub trait MetadataExtractor {
    fn extract(&self, url: &str) -> Result<ExtractedMetadata, ExtractError>;
}

impl ExtractedMetadata {
    /// Parses a model reply for `url`.
    ///
    /// The reply may wrap its JSON object in prose or a Markdown code fence;
    /// the outermost `{ … }` is taken. Blank optional fields become `None`,
    /// and a YouTube `url` supplies the video id when the reply has none.
    pub fn from_reply(reply: &str, url: &str) -> Result<Self, ExtractError> {
        let start = reply.find('{').ok_or(ExtractError::MissingObject)?;
        let end = reply.rfind('}').ok_or(ExtractError::MissingObject)?;
        if end < start {
            return Err(ExtractError::MissingObject);
        }

        let mut metadata: ExtractedMetadata = serde_json::from_str(&reply[start..=end])?;
        metadata.title = metadata.title.trim().to_string();
        metadata.summary = metadata.summary.trim().to_string();
        metadata.category = non_blank(metadata.category);
        metadata.video_id = non_blank(metadata.video_id)
            .map(|id| EmbedProvider::Youtube.normalize_id(&id))
            .or_else(|| youtube_id_from_url(url));
        Ok(metadata)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Video id of a YouTube URL, `None` for anything else.
pub fn youtube_id_from_url(url: &str) -> Option<String> {
    let url = url.trim();
    if !(url.contains("youtube.com") || url.contains("youtu.be")) {
        return None;
    }
    let id = EmbedProvider::Youtube.normalize_id(url);
    (id != url).then_some(id)
}

/// Form fields an extraction can prefill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub summary: String,
    pub category: Option<String>,
    pub video_id: Option<String>,
}

/// Fills `draft` from the extractor's answer for `url`.
///
/// Only non-empty extracted values overwrite the draft. On failure the draft
/// is left exactly as it was and the error is returned for the caller to
/// show as a transient alert.
pub fn prefill_draft<E: MetadataExtractor + ?Sized>(
    extractor: &E,
    url: &str,
    draft: &mut FormDraft,
) -> Result<(), ExtractError> {
    let metadata = extractor.extract(url).inspect_err(|e| {
        log::warn!("metadata extraction failed for {url}: {e}");
    })?;

    if !metadata.title.is_empty() {
        draft.title = metadata.title;
    }
    if !metadata.summary.is_empty() {
        draft.summary = metadata.summary;
    }
    if metadata.category.is_some() {
        draft.category = metadata.category;
    }
    if metadata.video_id.is_some() {
        draft.video_id = metadata.video_id;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_plain_json() {
        let reply = r#"{"title": "Bienal de SP", "summary": "Resumo", "category": "Exposições"}"#;
        let meta = ExtractedMetadata::from_reply(reply, "https://bienal.org.br").unwrap();
        assert_eq!(
            meta,
            ExtractedMetadata {
                title: "Bienal de SP".into(),
                summary: "Resumo".into(),
                category: Some("Exposições".into()),
                video_id: None,
            }
        );
    }

    #[test]
    fn tolerates_code_fence_and_camel_case_video_id() {
        let reply = "Aqui está:\n```json\n{\"title\": \"Aula\", \"summary\": \"s\", \"videoId\": \"abc123\"}\n```";
        let meta = ExtractedMetadata::from_reply(reply, "https://x.y").unwrap();
        assert_eq!(meta.video_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn youtube_url_supplies_missing_video_id() {
        let reply = r#"{"title": "Aula", "summary": "s", "category": " "}"#;
        let meta =
            ExtractedMetadata::from_reply(reply, "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
                .unwrap();
        assert_eq!(meta.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(meta.category, None);
    }

    #[test]
    fn reply_without_object_is_an_error() {
        assert!(matches!(
            ExtractedMetadata::from_reply("desculpe, não sei", "https://x.y"),
            Err(ExtractError::MissingObject)
        ));
        assert!(matches!(
            ExtractedMetadata::from_reply("} {", "https://x.y"),
            Err(ExtractError::MissingObject)
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ExtractedMetadata::from_reply("{\"title\": }", "https://x.y"),
            Err(ExtractError::Parse(_))
        ));
    }

    #[test]
    fn non_youtube_url_has_no_video_id() {
        assert_eq!(youtube_id_from_url("https://example.com/watch?v=1"), None);
        assert_eq!(youtube_id_from_url("https://www.youtube.com/"), None);
        assert_eq!(
            youtube_id_from_url("https://youtu.be/abc"),
            Some("abc".into())
        );
    }

    struct Canned(Result<&'static str, &'static str>);

    impl MetadataExtractor for Canned {
        fn extract(&self, url: &str) -> Result<ExtractedMetadata, ExtractError> {
            match self.0 {
                Ok(reply) => ExtractedMetadata::from_reply(reply, url),
                Err(reason) => Err(ExtractError::Network(reason.to_string())),
            }
        }
    }

    #[test]
    fn prefill_overwrites_only_extracted_fields() {
        let extractor = Canned(Ok(r#"{"title": "Novo", "summary": ""}"#));
        let mut draft = FormDraft {
            title: "Antigo".into(),
            summary: "Mantido".into(),
            category: Some("Cinema".into()),
            video_id: None,
        };
        prefill_draft(&extractor, "https://x.y", &mut draft).unwrap();
        assert_eq!(draft.title, "Novo");
        assert_eq!(draft.summary, "Mantido");
        assert_eq!(draft.category.as_deref(), Some("Cinema"));
    }

    #[test]
    fn failed_extraction_keeps_draft() {
        let extractor = Canned(Err("timeout"));
        let mut draft = FormDraft {
            title: "Antigo".into(),
            ..FormDraft::default()
        };
        let before = draft.clone();
        let err = prefill_draft(&extractor, "https://x.y", &mut draft).unwrap_err();
        assert!(matches!(err, ExtractError::Network(_)));
        assert_eq!(draft, before);
    }
}
