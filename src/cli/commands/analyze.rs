//! Prescriptive analysis for one surplus item

use replate::config::Config;
use replate::output::{AnalysisResult, OutputMode};

/// Analyze a surplus quantity of one item
///
/// With the `llm` feature this asks the hosted model; without it the
/// deterministic local estimate is printed.
pub fn analyze(item: &str, kg: f64, mode: OutputMode) -> anyhow::Result<()> {
    anyhow::ensure!(kg > 0.0 && kg.is_finite(), "surplus quantity must be positive, got {kg}");

    let config = Config::load()?;
    let factors = config.impact.into();

    #[cfg(feature = "llm")]
    let analysis = {
        use anyhow::Context;
        use replate::adapters::llm::GeminiSummarizer;
        use replate::core::ports::Summarizer;

        let summarizer = GeminiSummarizer::from_env(&config.llm.model, factors)
            .context("setting up the summarizer")?;
        summarizer.analyze(item, kg).context("requesting analysis")?
    };

    #[cfg(not(feature = "llm"))]
    let analysis = replate::core::services::fallback_analysis(item, kg, &factors);

    AnalysisResult {
        item: item.to_string(),
        surplus_kg: kg,
        analysis,
    }
    .render(mode);

    Ok(())
}
