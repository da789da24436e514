//! Parse command

use anyhow::{Context, Result};
use cleardef_schema::Coordinates;
use tracing::debug;

/// Decode each coordinate string and print its fields.
pub fn parse(coordinates: &[String], json: bool) -> Result<()> {
    debug!("decoding {} coordinate string(s)", coordinates.len());

    for (i, input) in coordinates.iter().enumerate() {
        let coords: Coordinates = input
            .parse()
            .with_context(|| format!("Failed to decode '{input}'"))?;

        if json {
            println!("{}", serde_json::to_string(&describe(&coords))?);
        } else {
            if i > 0 {
                println!();
            }
            print_fields(&coords);
        }
    }

    Ok(())
}

fn describe(coords: &Coordinates) -> serde_json::Value {
    serde_json::json!({
        "type": coords.component_type,
        "provider": coords.provider,
        "namespace": coords.namespace,
        "name": coords.name,
        "revision": coords.revision,
        "coordinates": coords,
    })
}

fn print_fields(coords: &Coordinates) {
    let lw = 12;
    println!("  {:<lw$}{}", "type", coords.component_type);
    println!("  {:<lw$}{}", "provider", coords.provider);
    println!(
        "  {:<lw$}{}",
        "namespace",
        coords.namespace.as_deref().unwrap_or("(none)")
    );
    println!("  {:<lw$}{}", "name", coords.name);
    println!(
        "  {:<lw$}{}",
        "revision",
        coords.revision.as_deref().unwrap_or("(none)")
    );
}
