//! Codec behavior when embedded in a larger serialized document.
//!
//! The schema crate's only contract with the serialization framework is
//! string-in, string-out per field. These tests stand in for the consuming
//! client: a metadata record carrying coordinates, a path, and a URI next to
//! ordinary fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use cleardef_schema::{ComponentType, Coordinates, Provider, wire};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct MetadataRecord {
    coordinates: Coordinates,
    component_type: ComponentType,
    #[serde(with = "wire::path")]
    license_file: PathBuf,
    #[serde(with = "wire::uri")]
    registry: Url,
    score: u32,
}

fn sample_record() -> MetadataRecord {
    MetadataRecord {
        coordinates: Coordinates::new(
            ComponentType::Maven,
            Provider::MavenCentral,
            Some("org.apache.commons"),
            "commons-lang3",
            Some("3.12.0"),
        ),
        component_type: ComponentType::Maven,
        license_file: PathBuf::from("meta/LICENSE.txt"),
        registry: Url::parse("https://repo1.maven.org/maven2/").unwrap(),
        score: 88,
    }
}

#[test]
fn record_round_trips_through_json() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let decoded: MetadataRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn every_codec_field_is_a_json_string() {
    let json = serde_json::to_value(sample_record()).unwrap();
    assert!(json["coordinates"].is_string());
    assert!(json["component_type"].is_string());
    assert!(json["license_file"].is_string());
    assert!(json["registry"].is_string());
    assert_eq!(
        json["coordinates"],
        "maven/mavencentral/org.apache.commons/commons-lang3/3.12.0"
    );
}

#[test]
fn decode_failure_in_one_field_fails_the_document() {
    let json = r#"{
        "coordinates": "bogus/mavencentral/-/commons-lang3",
        "component_type": "maven",
        "license_file": "meta/LICENSE.txt",
        "registry": "https://repo1.maven.org/maven2/",
        "score": 88
    }"#;
    let err = serde_json::from_str::<MetadataRecord>(json).unwrap_err();
    assert!(err.to_string().contains("Unknown component type"), "{err}");
}

#[test]
fn absent_namespace_round_trips_inside_a_document() {
    let record = MetadataRecord {
        coordinates: Coordinates::new(ComponentType::Npm, Provider::NpmJs, None, "leftpad", None),
        ..sample_record()
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["coordinates"], "npm/npmjs/-/leftpad");

    let decoded: MetadataRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.coordinates.namespace, None);
    assert_eq!(decoded.coordinates.revision, None);
}
