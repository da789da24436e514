//! The component coordinate identifier and its canonical string codec.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::CoordinatesError;
use crate::types::{ComponentType, Provider};

/// Identifies a specific revision of a software component.
///
/// The canonical string form is slash-delimited:
///
/// ```text
/// <componentType>/<provider>/<namespace-or-dash>/<name>[/<revision>]
/// ```
///
/// An absent namespace is encoded as the placeholder `-`; an absent revision
/// is omitted entirely, leaving a 4-segment string. Segments are joined
/// without escaping, so `name` must not contain `/`. The trailing revision is
/// the one segment that may: decoding splits into at most 5 parts, and the
/// fifth absorbs any remaining separators (version strings such as `1.0/rc1`
/// survive intact).
///
/// Values are immutable once built and hold no shared state, so they can be
/// encoded and decoded freely across threads.
///
/// # Example
///
/// ```
/// use cleardef_schema::{ComponentType, Coordinates, Provider};
///
/// let coords: Coordinates =
///     "maven/mavencentral/org.apache.commons/commons-lang3/3.12.0".parse()?;
/// assert_eq!(coords.component_type, ComponentType::Maven);
/// assert_eq!(coords.provider, Provider::MavenCentral);
/// assert_eq!(coords.namespace.as_deref(), Some("org.apache.commons"));
/// assert_eq!(coords.name, "commons-lang3");
/// assert_eq!(coords.revision.as_deref(), Some("3.12.0"));
/// # Ok::<(), cleardef_schema::CoordinatesError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinates {
    /// The package ecosystem the component belongs to.
    pub component_type: ComponentType,

    /// The hosting service the component is fetched from.
    pub provider: Provider,

    /// Grouping namespace within the ecosystem (Maven group id, npm scope).
    ///
    /// Absent is distinct from empty: `None` encodes as the placeholder `-`,
    /// while `Some("")` encodes as an empty segment. A literal namespace of
    /// `-` cannot be told apart from absent after a round trip.
    pub namespace: Option<String>,

    /// The component name. Must not contain `/`.
    pub name: String,

    /// The component revision (version string, commit hash). Optional.
    pub revision: Option<String>,
}

impl Coordinates {
    /// Build coordinates from borrowed parts.
    pub fn new(
        component_type: ComponentType,
        provider: Provider,
        namespace: Option<&str>,
        name: &str,
        revision: Option<&str>,
    ) -> Self {
        Self {
            component_type,
            provider,
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            revision: revision.map(str::to_string),
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.component_type,
            self.provider,
            self.namespace.as_deref().unwrap_or("-"),
            self.name
        )?;
        if let Some(revision) = &self.revision {
            write!(f, "/{revision}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Coordinates {
    type Err = CoordinatesError;

    /// Decode the canonical slash-delimited form.
    ///
    /// Segments are consumed left to right, so an unrecognized label reports
    /// before a missing later segment. Decoding either yields a complete
    /// value or fails; no partial value is ever produced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!("decoding coordinates {s:?}");

        let mut parts = s.splitn(5, '/');

        let component_type: ComponentType = next_segment(&mut parts, "type", s)?.parse()?;
        let provider: Provider = next_segment(&mut parts, "provider", s)?.parse()?;
        let namespace = match next_segment(&mut parts, "namespace", s)? {
            "-" => None,
            ns => Some(ns.to_string()),
        };
        let name = next_segment(&mut parts, "name", s)?.to_string();
        let revision = parts.next().map(str::to_string);

        Ok(Self {
            component_type,
            provider,
            namespace,
            name,
            revision,
        })
    }
}

fn next_segment<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
    input: &str,
) -> Result<&'a str, CoordinatesError> {
    parts.next().ok_or_else(|| CoordinatesError::MissingField {
        field,
        input: input.to_string(),
    })
}

impl Serialize for Coordinates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
