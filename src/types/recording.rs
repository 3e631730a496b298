//! Meeting recording types

/// Length of the object token at the end of a recording URL
pub const OBJECT_TOKEN_LEN: usize = 24;

/// A meeting recording as returned by the recording lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    /// Canonical recording URL, ending in the object token
    pub url: String,
    /// Recording duration in seconds, as a string (optional)
    pub duration: Option<String>,
}

impl Recording {
    pub fn new(url: impl Into<String>) -> Self {
        Recording {
            url: url.into(),
            duration: None,
        }
    }

    /// Object token embedded in this recording's URL
    pub fn reference(&self) -> RecordingRef {
        RecordingRef::from_url(&self.url)
    }
}

/// Object token naming a recording resource
///
/// Taken verbatim from the trailing [`OBJECT_TOKEN_LEN`] characters of the
/// recording URL. The URL shape is not validated: a shorter URL yields the
/// whole string, a longer token is silently cut.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RecordingRef(String);

impl RecordingRef {
    /// Wrap an already-extracted object token
    pub fn new(token: impl Into<String>) -> Self {
        RecordingRef(token.into())
    }

    /// Extract the object token from a recording URL
    pub fn from_url(url: &str) -> Self {
        let start = url
            .char_indices()
            .rev()
            .nth(OBJECT_TOKEN_LEN - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        RecordingRef(url[start..].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no recording has been located
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Public link to this recording under `base_url`
    pub fn public_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl std::fmt::Display for RecordingRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
