//! Seams the embedding host implements for the fragment renderer.
//!
//! The renderer performs no I/O of its own: content lookup and recursive
//! shortcode expansion are delegated through these traits, and the host
//! tells the renderer per call whether the surrounding response is HTML
//! at all.

use serde::{Deserialize, Serialize};

/// A content document resolved through the host's storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Raw body as stored; may itself contain shortcodes.
    pub body: String,
}

impl ContentDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Reference to a content document, as spelled in a `page` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRef {
    Id(u64),
    Path(String),
}

impl ContentRef {
    /// Classify a raw `page` value: all-digit values address by id,
    /// anything else by path. Empty values reference nothing.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<u64>() {
                return Some(Self::Id(id));
            }
        }
        Some(Self::Path(trimmed.to_string()))
    }
}

/// Content lookup by numeric id or path.
pub trait ContentSource: Send + Sync {
    fn find_by_id(&self, id: u64) -> Option<ContentDocument>;
    fn find_by_path(&self, path: &str) -> Option<ContentDocument>;
}

/// Recursive shortcode/template expansion, owned by the host engine.
/// The renderer calls it exactly once per opaque content field.
pub trait ContentExpander: Send + Sync {
    fn expand(&self, raw: &str) -> String;
}

/// How the surrounding request will be serialised. Fragments are
/// HTML-only; data responses suppress them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResponseMode {
    #[default]
    Html,
    DataOnly,
}

impl ResponseMode {
    pub fn is_data_only(self) -> bool {
        matches!(self, Self::DataOnly)
    }
}

/// Source with no documents; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContentSource;

impl ContentSource for EmptyContentSource {
    fn find_by_id(&self, _id: u64) -> Option<ContentDocument> {
        None
    }

    fn find_by_path(&self, _path: &str) -> Option<ContentDocument> {
        None
    }
}

/// Expander that returns content untouched, for hosts without nested
/// shortcode support and for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughExpander;

impl ContentExpander for PassthroughExpander {
    fn expand(&self, raw: &str) -> String {
        raw.to_string()
    }
}
