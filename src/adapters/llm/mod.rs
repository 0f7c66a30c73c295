//! Hosted-model summarizer (feature `llm`)
//!
//! Implements the `Summarizer` port against the Gemini `generateContent`
//! endpoint with JSON response mode. The port is synchronous; the adapter
//! owns a tokio runtime and blocks on its own requests, so the core never
//! sees async.
//!
//! The model is asked for a fixed JSON shape. A reply that is not valid
//! JSON degrades to the deterministic local estimate with zero confidence;
//! a reply missing individual fields keeps what arrived and fills the rest
//! from the estimate. Only transport and envelope problems are errors.

use serde::Deserialize;

use crate::core::models::SurplusAnalysis;
use crate::core::ports::{Summarizer, SummarizerError};
use crate::core::services::{ImpactFactors, estimate_impact, fallback_analysis};

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Summarizer backed by the Gemini API
#[derive(Debug)]
pub struct GeminiSummarizer {
    api_key: String,
    model: String,
    factors: ImpactFactors,
    http: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl GeminiSummarizer {
    /// Create a summarizer reading the API key from the environment
    pub fn from_env(model: &str, factors: ImpactFactors) -> Result<Self, SummarizerError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| SummarizerError::MissingApiKey(API_KEY_VAR))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SummarizerError::Request(e.to_string()))?;

        Ok(Self {
            api_key,
            model: model.to_string(),
            factors,
            http: reqwest::Client::new(),
            runtime,
        })
    }

    async fn request(&self, prompt: &str) -> Result<String, SummarizerError> {
        let url = format!("{ENDPOINT}/{}:generateContent", self.model);

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.7,
                "topP": 0.95
            }
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizerError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::Request(format!("HTTP {status}: {body}")));
        }

        let envelope: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::BadResponse(e.to_string()))?;

        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| SummarizerError::BadResponse("no candidates in reply".to_string()))
    }

    fn build_prompt(&self, item: &str, surplus_kg: f64) -> String {
        let today = chrono::Utc::now().format("%Y-%m-%d");
        format!(
            r#"You are a food waste expert for a restaurant kitchen management system.

TASK: Analyze surplus food and provide a structured action plan.

CONTEXT:
- Item: {item}
- Surplus quantity: {surplus_kg} kg
- Current date: {today}

Return ONLY valid JSON with these keys:
1. "reasoning" - 2-3 sentences on why the surplus likely occurred
   (demand fluctuations, over-ordering, cancellations, spoilage risk)
2. "ngo_recommendation" - which local organization should receive this food,
   as "Name (distance, who they serve)"
3. "impact_metrics" - {{"co2_saved_kg": {co2}, "meals_provided": {meals}, "cost_saved": {cost}}}
4. "handling_instructions" - safety and logistics, e.g.
   "Keep at 4C | Consume within 6 hours | Transport in insulated box"
5. "confidence_score" - your confidence in the recommendation, 0-100

Now analyze {item} ({surplus_kg} kg) and return ONLY JSON:"#,
            co2 = surplus_kg * self.factors.co2_per_kg,
            meals = surplus_kg * self.factors.meals_per_kg,
            cost = surplus_kg * self.factors.cost_per_kg,
        )
    }

    /// Map the model's JSON to a `SurplusAnalysis`, filling missing fields
    /// from the deterministic estimate
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn parse_reply(&self, text: &str, item: &str, surplus_kg: f64) -> SurplusAnalysis {
        let Ok(raw) = serde_json::from_str::<RawAnalysis>(text) else {
            log::warn!("summarizer reply was not valid JSON, using local estimate");
            return fallback_analysis(item, surplus_kg, &self.factors);
        };

        let estimate = estimate_impact(surplus_kg, &self.factors);
        let impact = raw.impact_metrics.map_or(estimate, |m| {
            crate::core::models::ImpactMetrics {
                co2_saved_kg: m.co2_saved_kg.unwrap_or(estimate.co2_saved_kg),
                meals_provided: m
                    .meals_provided
                    .map_or(estimate.meals_provided, |v| v.max(0.0) as u32),
                cost_saved: m.cost_saved.unwrap_or(estimate.cost_saved),
            }
        });

        SurplusAnalysis {
            reasoning: raw
                .reasoning
                .unwrap_or_else(|| format!("No reasoning returned for {item}")),
            recommended_recipient: raw
                .ngo_recommendation
                .unwrap_or_else(|| "Manual review required".to_string()),
            impact,
            handling: raw
                .handling_instructions
                .unwrap_or_else(|| "Contact the kitchen manager for handling".to_string()),
            confidence: raw.confidence_score.map_or(0, |c| c.clamp(0.0, 100.0) as u8),
        }
    }
}

impl Summarizer for GeminiSummarizer {
    fn analyze(&self, item: &str, surplus_kg: f64) -> Result<SurplusAnalysis, SummarizerError> {
        let prompt = self.build_prompt(item, surplus_kg);
        let text = self.runtime.block_on(self.request(&prompt))?;
        Ok(self.parse_reply(&text, item, surplus_kg))
    }
}

// === Wire types ===

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

/// The model's answer before field validation
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    reasoning: Option<String>,
    ngo_recommendation: Option<String>,
    impact_metrics: Option<RawImpact>,
    handling_instructions: Option<String>,
    confidence_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawImpact {
    co2_saved_kg: Option<f64>,
    meals_provided: Option<f64>,
    cost_saved: Option<f64>,
}
