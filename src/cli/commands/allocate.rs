//! Allocate finalized surplus to recipient organizations

use std::fs;
use std::path::Path;

use anyhow::Context;

use replate::adapters::toml::TomlRecipientRegistry;
use replate::config::Config;
use replate::core::models::{GeoPoint, SurplusItem};
use replate::core::ports::RecipientRegistry;
use replate::core::services::allocate as run_allocator;
use replate::output::{AllocationResult, OutputMode};

/// Allocate a close-out surplus file against the recipient registry
///
/// Exits nonzero when any quantity is left unallocated.
pub fn allocate(
    surplus: &Path,
    recipients_file: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load()?;

    let content = fs::read_to_string(surplus)
        .with_context(|| format!("cannot read {}", surplus.display()))?;
    let mut items: Vec<SurplusItem> = serde_json::from_str(&content)
        .with_context(|| format!("invalid surplus file {}", surplus.display()))?;

    // Shortest remaining shelf life first, so the scarcest items get the
    // nearest recipients
    items.sort_by_key(SurplusItem::expires_at);

    let registry_path =
        recipients_file.map_or_else(|| config.recipients_path(), Path::to_path_buf);
    let registry = TomlRecipientRegistry::new(registry_path);
    let recipients = registry.list()?;

    let origin = GeoPoint::new(config.site.lat, config.site.lng);
    let outcome = run_allocator(&origin, &items, &recipients)?;

    let result = AllocationResult::from_outcome(outcome);
    let fully_allocated = result.fully_allocated;
    result.render(mode);

    if !fully_allocated {
        std::process::exit(1);
    }

    Ok(())
}
