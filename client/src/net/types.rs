//! Wire schema of the analysis service and the shaped result the UI renders.
//!
//! DESIGN
//! ======
//! `AnalyzeResponse` mirrors the JSON the service sends, optional fields and
//! all. `AnalysisResult` is what the page keeps: every field the results
//! display reads is guaranteed present once the conversion has run.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use indexmap::IndexMap;
use serde::Deserialize;

/// Budget line-item label to rupee amount, in the order the service listed them.
pub type CostEstimate = IndexMap<String, f64>;

/// Raw body of a successful `POST /analyze` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    pub land_type: String,
    /// Classifier confidence for `land_type`, 0..1.
    #[serde(default)]
    pub confidence: Option<f64>,
    pub greenness_index: f64,
    pub weather: WeatherPayload,
    pub suggestions: Vec<String>,
    /// `[label, amount]` pairs. Absent when the service has no estimate.
    #[serde(default)]
    pub costs: Option<Vec<(String, f64)>>,
}

/// Weather block of the raw response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherPayload {
    pub temperature: f64,
    pub humidity: f64,
    pub description: String,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

/// Weather conditions shown on the results card.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Rainfall in millimetres over the last hour.
    pub precipitation: f64,
    pub description: String,
    /// Metres per second, when the service reports it.
    pub wind_speed: Option<f64>,
}

/// Analysis of one uploaded land image.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub land_type: String,
    /// Vegetation density score, normally within 0..1.
    pub greenness_index: f64,
    pub weather: WeatherReport,
    pub suggestions: Vec<String>,
    pub cost_estimate: CostEstimate,
    pub confidence: Option<f64>,
}

impl From<WeatherPayload> for WeatherReport {
    fn from(raw: WeatherPayload) -> Self {
        Self {
            temperature: raw.temperature,
            humidity: raw.humidity,
            precipitation: normalize_precipitation(raw.precipitation),
            description: raw.description,
            wind_speed: raw.wind_speed.filter(|w| w.is_finite()),
        }
    }
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(raw: AnalyzeResponse) -> Self {
        Self {
            land_type: raw.land_type,
            greenness_index: raw.greenness_index,
            weather: raw.weather.into(),
            suggestions: raw.suggestions,
            cost_estimate: cost_estimate_from_pairs(raw.costs.unwrap_or_default()),
            confidence: raw.confidence.filter(|c| c.is_finite()),
        }
    }
}

/// Missing, null, and non-finite rainfall all read as zero.
fn normalize_precipitation(raw: Option<f64>) -> f64 {
    raw.filter(|p| p.is_finite()).unwrap_or(0.0)
}

/// Build the cost mapping from ordered pairs.
///
/// A repeated label keeps its first position and takes the last amount.
pub fn cost_estimate_from_pairs<I>(pairs: I) -> CostEstimate
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut estimate = CostEstimate::new();
    for (label, amount) in pairs {
        estimate.insert(label, amount);
    }
    estimate
}
