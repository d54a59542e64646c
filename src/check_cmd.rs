use std::path::Path;

use anyhow::{Context, Result, bail};
use grout_render::{coverage, load_parameter};
use serde_json::json;

pub fn run(input: &Path, emit_json: bool) -> Result<()> {
    let parameter =
        load_parameter(input).with_context(|| format!("failed to load {}", input.display()))?;
    let report = coverage(&parameter);

    if emit_json {
        let doc = json!({
            "input": input.display().to_string(),
            "complete": report.is_complete(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!(
            "{} propert{} with definitions: {}",
            report.covered.len(),
            if report.covered.len() == 1 { "y" } else { "ies" },
            input.display()
        );
        if !report.missing_definitions.is_empty() {
            println!("Missing definitions:");
            for property in &report.missing_definitions {
                println!("- {property}");
            }
        }
        if !report.missing_fields.is_empty() {
            println!("Missing metadata:");
            for (property, field) in &report.missing_fields {
                println!("- {property}.{field}");
            }
        }
        if !report.unused_definitions.is_empty() {
            println!("Unused definitions:");
            for name in &report.unused_definitions {
                println!("- {name}");
            }
        }
    }

    if !report.is_complete() {
        bail!(
            "{} propert{} without a definition",
            report.missing_definitions.len(),
            if report.missing_definitions.len() == 1 { "y" } else { "ies" }
        );
    }
    Ok(())
}
