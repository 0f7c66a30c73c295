//! Manage the recipient registry

use replate::adapters::toml::TomlRecipientRegistry;
use replate::config::Config;
use replate::core::models::{Category, GeoPoint, Recipient};
use replate::core::ports::RecipientRegistry;
use replate::output::{OperationResult, OutputMode, RecipientListResult};

use super::super::app::RecipientAction;

/// Dispatch a recipient registry action
pub fn recipients(action: RecipientAction, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load()?;
    let registry = TomlRecipientRegistry::new(config.recipients_path());

    match action {
        RecipientAction::Add {
            id,
            name,
            lat,
            lng,
            capacity,
            categories,
            verified,
        } => {
            let accepted = parse_categories(&categories)?;

            registry.add(Recipient {
                recipient_id: id.clone(),
                name,
                location: GeoPoint::new(lat, lng),
                capacity_kg: capacity,
                accepted_categories: accepted,
                verified,
            })?;

            OperationResult {
                success: true,
                message: format!("Added recipient: {id}"),
            }
            .render(mode);
        },
        RecipientAction::List => {
            RecipientListResult {
                recipients: registry.list()?,
            }
            .render(mode);
        },
        RecipientAction::Remove { id } => {
            registry.remove(&id)?;
            OperationResult {
                success: true,
                message: format!("Removed recipient: {id}"),
            }
            .render(mode);
        },
        RecipientAction::Verify { id, revoke } => {
            registry.set_verified(&id, !revoke)?;
            let state = if revoke { "unverified" } else { "verified" };
            OperationResult {
                success: true,
                message: format!("Marked {id} as {state}"),
            }
            .render(mode);
        },
    }

    Ok(())
}

/// Parse a comma-separated category list
fn parse_categories(raw: &str) -> anyhow::Result<Vec<Category>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Category>().map_err(|e| anyhow::anyhow!(e)))
        .collect()
}
