use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for console types
    let mut types = Vec::new();

    // Contact types
    types.push(clean_type(ContactStatus::export_to_string()?));
    types.push(clean_type(CallRecord::export_to_string()?));
    types.push(clean_type(Contact::export_to_string()?));

    // Contact list types
    types.push(clean_type(ContactList::export_to_string()?));
    types.push(clean_type(ContactListsResponse::export_to_string()?));

    // Import types
    types.push(clean_type(ImportReport::export_to_string()?));
    types.push(clean_type(ImportContactsResponse::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "../gui/src/api-types".to_string());
    let output_dir = Path::new(&output_dir);
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Everything lands in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
