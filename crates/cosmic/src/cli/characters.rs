//! Character listing.

use cosmic::{ContentTable, CosmicResult, OutputError};

use super::OutputFormat;

/// Print every playable character.
pub fn list_characters(content: &ContentTable, format: OutputFormat) -> CosmicResult<()> {
    let roster = content.roster();

    match format {
        OutputFormat::Json => {
            let profiles: Vec<_> = roster
                .iter()
                .map(|(character, profile)| {
                    serde_json::json!({
                        "id": character.to_string(),
                        "profile": profile,
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&profiles)
                .map_err(|e| OutputError::new("json", e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Choose your character:");
            println!("{:-<60}", "");
            for (character, profile) in &roster {
                println!("{} {} ({})", profile.icon(), profile.name(), character);
                println!("   {}", profile.description());
                println!("   Traits: {}", profile.trait_list());
            }
        }
    }

    Ok(())
}
