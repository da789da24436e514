//! Label enumerations for the coordinate wire format.
//!
//! Both enumerations are closed sets decoded by canonical label. Lookup is a
//! static `match` over the labels, so adding a variant means adding its label
//! arm; nothing else in decoding changes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoordinatesError;

/// The kind of package ecosystem a component belongs to.
///
/// Rendered as the first segment of a coordinates string, e.g. `maven` in
/// `maven/mavencentral/org.apache.commons/commons-lang3/3.12.0`.
///
/// # Example
///
/// ```
/// use cleardef_schema::ComponentType;
///
/// let ty: ComponentType = "npm".parse()?;
/// assert_eq!(ty, ComponentType::Npm);
/// assert_eq!(ty.as_str(), "npm");
/// # Ok::<(), cleardef_schema::CoordinatesError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// PHP packages managed through Composer.
    Composer,
    /// Conda packages.
    Conda,
    /// Rust crates.
    Crate,
    /// Debian binary packages.
    Debian,
    /// Debian source packages.
    DebianSources,
    /// Ruby gems.
    Gem,
    /// Git repositories addressed by commit.
    Git,
    /// Go modules.
    Go,
    /// Maven artifacts.
    Maven,
    /// npm packages.
    Npm,
    /// `NuGet` packages.
    NuGet,
    /// `CocoaPods` pods.
    Pod,
    /// Python distributions.
    PyPi,
    /// Plain source archives.
    SourceArchive,
}

impl ComponentType {
    /// Every defined component type, in canonical order.
    pub const ALL: [Self; 14] = [
        Self::Composer,
        Self::Conda,
        Self::Crate,
        Self::Debian,
        Self::DebianSources,
        Self::Gem,
        Self::Git,
        Self::Go,
        Self::Maven,
        Self::Npm,
        Self::NuGet,
        Self::Pod,
        Self::PyPi,
        Self::SourceArchive,
    ];

    /// The canonical wire label for this component type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Composer => "composer",
            Self::Conda => "conda",
            Self::Crate => "crate",
            Self::Debian => "deb",
            Self::DebianSources => "debsrc",
            Self::Gem => "gem",
            Self::Git => "git",
            Self::Go => "go",
            Self::Maven => "maven",
            Self::Npm => "npm",
            Self::NuGet => "nuget",
            Self::Pod => "pod",
            Self::PyPi => "pypi",
            Self::SourceArchive => "sourcearchive",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ComponentType {
    type Err = CoordinatesError;

    /// Labels match exactly; lookup is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "composer" => Ok(Self::Composer),
            "conda" => Ok(Self::Conda),
            "crate" => Ok(Self::Crate),
            "deb" => Ok(Self::Debian),
            "debsrc" => Ok(Self::DebianSources),
            "gem" => Ok(Self::Gem),
            "git" => Ok(Self::Git),
            "go" => Ok(Self::Go),
            "maven" => Ok(Self::Maven),
            "npm" => Ok(Self::Npm),
            "nuget" => Ok(Self::NuGet),
            "pod" => Ok(Self::Pod),
            "pypi" => Ok(Self::PyPi),
            "sourcearchive" => Ok(Self::SourceArchive),
            _ => Err(CoordinatesError::UnknownComponentType(s.to_string())),
        }
    }
}

impl Serialize for ComponentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The hosting service a component is fetched from.
///
/// Rendered as the second segment of a coordinates string, e.g.
/// `mavencentral` in `maven/mavencentral/org.apache.commons/commons-lang3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// The `CocoaPods` registry.
    Cocoapods,
    /// The conda-forge channel.
    CondaForge,
    /// The crates.io registry.
    CratesIo,
    /// Debian package archives.
    Debian,
    /// GitHub repositories.
    GitHub,
    /// GitLab repositories.
    GitLab,
    /// Maven Central.
    MavenCentral,
    /// Google's Maven repository.
    MavenGoogle,
    /// The npm public registry.
    NpmJs,
    /// The `NuGet` gallery.
    NuGet,
    /// The Packagist registry.
    Packagist,
    /// The Python Package Index.
    PyPi,
    /// The `RubyGems` registry.
    RubyGems,
}

impl Provider {
    /// Every defined provider, in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Cocoapods,
        Self::CondaForge,
        Self::CratesIo,
        Self::Debian,
        Self::GitHub,
        Self::GitLab,
        Self::MavenCentral,
        Self::MavenGoogle,
        Self::NpmJs,
        Self::NuGet,
        Self::Packagist,
        Self::PyPi,
        Self::RubyGems,
    ];

    /// The canonical wire label for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cocoapods => "cocoapods",
            Self::CondaForge => "condaforge",
            Self::CratesIo => "cratesio",
            Self::Debian => "debian",
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::MavenCentral => "mavencentral",
            Self::MavenGoogle => "mavengoogle",
            Self::NpmJs => "npmjs",
            Self::NuGet => "nuget",
            Self::Packagist => "packagist",
            Self::PyPi => "pypi",
            Self::RubyGems => "rubygems",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = CoordinatesError;

    /// Labels match exactly; lookup is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cocoapods" => Ok(Self::Cocoapods),
            "condaforge" => Ok(Self::CondaForge),
            "cratesio" => Ok(Self::CratesIo),
            "debian" => Ok(Self::Debian),
            "github" => Ok(Self::GitHub),
            "gitlab" => Ok(Self::GitLab),
            "mavencentral" => Ok(Self::MavenCentral),
            "mavengoogle" => Ok(Self::MavenGoogle),
            "npmjs" => Ok(Self::NpmJs),
            "nuget" => Ok(Self::NuGet),
            "packagist" => Ok(Self::Packagist),
            "pypi" => Ok(Self::PyPi),
            "rubygems" => Ok(Self::RubyGems),
            _ => Err(CoordinatesError::UnknownProvider(s.to_string())),
        }
    }
}

impl Serialize for Provider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_labels_round_trip() {
        for ty in ComponentType::ALL {
            assert_eq!(ty.as_str().parse::<ComponentType>(), Ok(ty));
        }
    }

    #[test]
    fn provider_labels_round_trip() {
        for provider in Provider::ALL {
            assert_eq!(provider.as_str().parse::<Provider>(), Ok(provider));
        }
    }

    #[test]
    fn unknown_component_type_rejected() {
        assert_eq!(
            "bogus".parse::<ComponentType>(),
            Err(CoordinatesError::UnknownComponentType("bogus".to_string()))
        );
    }

    #[test]
    fn component_type_matching_is_case_sensitive() {
        assert!("Maven".parse::<ComponentType>().is_err());
        assert!("NPM".parse::<ComponentType>().is_err());
    }

    #[test]
    fn provider_matching_is_case_sensitive() {
        assert!("MavenCentral".parse::<Provider>().is_err());
    }

    #[test]
    fn serde_uses_canonical_labels() {
        let json = serde_json::to_string(&ComponentType::SourceArchive).unwrap();
        assert_eq!(json, "\"sourcearchive\"");

        let provider: Provider = serde_json::from_str("\"mavencentral\"").unwrap();
        assert_eq!(provider, Provider::MavenCentral);
    }

    #[test]
    fn serde_rejects_unknown_labels() {
        let result = serde_json::from_str::<Provider>("\"bogus\"");
        assert!(result.is_err());
    }
}
