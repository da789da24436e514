//! Serde helpers for scalar values embedded as plain strings.
//!
//! Metadata documents carry filesystem paths and URIs as bare strings. These
//! modules plug into `#[serde(with = "...")]` so the owning document type
//! keeps typed fields while the wire form stays a string.

/// Encode a filesystem path as its display string; decode any string.
///
/// Paths are accepted unconditionally on decode: every string is a
/// syntactically valid path here, so the only transformation is the type
/// change.
pub mod path {
    use std::path::{Path, PathBuf};

    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a path via its `display()` rendering.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying serializer.
    pub fn serialize<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&path.display())
    }

    /// Deserialize any string into a path.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying deserializer; the string itself
    /// is never rejected.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(PathBuf::from)
    }
}

/// Encode a URI as its canonical textual form; decode by parsing.
pub mod uri {
    use serde::{Deserialize, Deserializer, Serializer};
    use url::Url;

    /// Serialize a URI via its canonical textual form.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying serializer.
    pub fn serialize<S>(uri: &Url, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(uri)
    }

    /// Deserialize a string by parsing it as a URI.
    ///
    /// # Errors
    ///
    /// Fails with the URI parser's own error, unchanged, when the string is
    /// malformed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Url, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Url::parse(&s).map_err(serde::de::Error::custom)
    }
}
