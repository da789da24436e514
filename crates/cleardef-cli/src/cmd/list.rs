//! Listing commands for the label enumerations

use cleardef_schema::{ComponentType, Provider};

/// Print every known component type label.
pub fn types() {
    for ty in ComponentType::ALL {
        println!("{ty}");
    }
}

/// Print every known provider label.
pub fn providers() {
    for provider in Provider::ALL {
        println!("{provider}");
    }
}
