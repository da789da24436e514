//! Format command

use cleardef_schema::{ComponentType, Coordinates, Provider};

/// Assemble coordinates from individual fields and print the canonical form.
pub fn format(
    component_type: ComponentType,
    provider: Provider,
    namespace: Option<&str>,
    name: &str,
    revision: Option<&str>,
) {
    let coords = Coordinates::new(component_type, provider, namespace, name, revision);
    println!("{coords}");
}
