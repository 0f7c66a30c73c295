//! Initialize replate in a working directory

use std::fs;
use std::path::Path;

use replate::output::{OperationResult, OutputMode};
use replate::paths;

/// Initialize replate in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = Path::new(paths::REPLATE_TOML);
    let recipients_path = Path::new(paths::RECIPIENTS_TOML);

    if config_path.exists() && !force {
        println!("Already initialized (replate.toml exists).");
        println!("Use --force to reinitialize.");
        return Ok(());
    }

    let config_toml = r#"# replate project configuration

[site]
# Where distance to recipients is measured from
name = "kitchen"
lat = 0.0
lng = 0.0

[risk]
# Days of projected need stock may cover before counting as surplus
surplus_window_days = 7

[impact]
# Per-kilogram impact factors
co2_per_kg = 2.5
meals_per_kg = 10.0
cost_per_kg = 250.0

[llm]
model = "gemini-3-flash-preview"

[paths]
recipients = "recipients.toml"
"#;
    fs::write(config_path, config_toml)?;

    if !recipients_path.exists() || force {
        let recipients_toml = r#"# replate recipient registry
#
# Only verified recipients are ever assigned food.

# Example recipient (uncomment to use):
# [[recipient]]
# id = "akshaya-patra"
# name = "Akshaya Patra"
# lat = 12.9352
# lng = 77.5996
# capacity_kg = 120.0
# categories = ["prepared", "produce"]
# verified = true
"#;
        fs::write(recipients_path, recipients_toml)?;
    }

    let result = OperationResult {
        success: true,
        message: format!(
            "replate initialized!\n\n  Created {}\n  Created {}\n\nNext steps:\n  \
             edit [site] in replate.toml with your coordinates\n  \
             replate recipients add <id> -n <name> --lat .. --lng .. -c <kg>",
            paths::REPLATE_TOML,
            paths::RECIPIENTS_TOML
        ),
    };
    result.render(mode);

    Ok(())
}
