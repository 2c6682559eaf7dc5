//! Results cards for a completed analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the page shell only while a result exists. Every displayed
//! string comes from `ResultSummary`, so formatting is covered by unit tests
//! without a DOM.

#[cfg(test)]
#[path = "analysis_results_test.rs"]
mod analysis_results_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::types::AnalysisResult;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::{format_confidence, format_greenness, format_measure, format_rupees};
use crate::util::report::download_report;

/// Display strings for every card.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ResultSummary {
    pub land_type: String,
    pub confidence: Option<String>,
    pub greenness: String,
    /// `(label, value)` rows of the weather card.
    pub weather: Vec<(&'static str, String)>,
    pub suggestions: Vec<String>,
    /// `(label, amount)` rows of the cost card, in service order.
    pub costs: Vec<(String, String)>,
}

impl ResultSummary {
    pub(crate) fn from_result(result: &AnalysisResult) -> Self {
        let weather = &result.weather;
        let mut weather_rows = vec![
            ("Temperature", format_measure(weather.temperature, "°C")),
            ("Humidity", format_measure(weather.humidity, "%")),
            ("Precipitation", format_measure(weather.precipitation, "mm")),
            ("Conditions", weather.description.clone()),
        ];
        if let Some(wind) = weather.wind_speed {
            weather_rows.push(("Wind", format_measure(wind, "m/s")));
        }

        Self {
            land_type: result.land_type.clone(),
            confidence: result.confidence.map(format_confidence),
            greenness: format_greenness(result.greenness_index),
            weather: weather_rows,
            suggestions: result.suggestions.clone(),
            costs: result
                .cost_estimate
                .iter()
                .map(|(label, amount)| (label.clone(), format_rupees(*amount)))
                .collect(),
        }
    }
}

/// Cards for land type, greenness, weather, practices, and costs.
#[component]
pub fn AnalysisResults(result: AnalysisResult) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let summary = ResultSummary::from_result(&result);

    let on_download = move |_| {
        if let Err(err) = download_report(&result) {
            leptos::logging::warn!("report download failed: {err}");
            notify(toasts, ToastKind::Error, format!("Report download failed: {err}"));
        }
    };

    view! {
        <section class="results">
            <div class="results__intro">
                <h3 class="results__title">"Analysis Complete!"</h3>
                <p class="results__subtitle">
                    "Here are your personalized sustainable recommendations"
                </p>
            </div>

            <div class="results__grid">
                <article class="card">
                    <header class="card__header">
                        <h4 class="card__title">"Land Type"</h4>
                        <p class="card__description">"Recognized terrain or soil surface"</p>
                    </header>
                    <p class="card__value card__value--capitalize">{summary.land_type}</p>
                    {summary
                        .confidence
                        .map(|c| view! { <p class="card__note">"Confidence: " {c}</p> })}
                </article>

                <article class="card">
                    <header class="card__header">
                        <h4 class="card__title">"Greenness Index"</h4>
                        <p class="card__description">"Vegetation density from satellite/photo"</p>
                    </header>
                    <p class="card__value">{summary.greenness}</p>
                </article>

                <article class="card card--wide">
                    <header class="card__header">
                        <h4 class="card__title">"Weather Overview"</h4>
                        <p class="card__description">"Based on coordinates & current location"</p>
                    </header>
                    <ul class="card__list">
                        {summary
                            .weather
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <li>
                                        <strong>{label} ":"</strong>
                                        " "
                                        {value}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </article>

                <article class="card card--wide">
                    <header class="card__header">
                        <h4 class="card__title">"Sustainable Practices"</h4>
                        <p class="card__description">"Eco-friendly strategies based on terrain"</p>
                    </header>
                    <ul class="card__list card__list--targets">
                        {summary
                            .suggestions
                            .into_iter()
                            .map(|method| view! { <li>{method}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </article>

                <article class="card card--wide">
                    <header class="card__header">
                        <h4 class="card__title">"Estimated Costs"</h4>
                        <p class="card__description">"Approximate breakdown of setup cost (in ₹)"</p>
                    </header>
                    <ul class="card__list">
                        {summary
                            .costs
                            .into_iter()
                            .map(|(item, cost)| {
                                view! {
                                    <li>
                                        <strong>{item} ":"</strong>
                                        " "
                                        {cost}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </article>
            </div>

            <div class="results__actions">
                <button class="btn btn--ghost" on:click=on_download>
                    "Download report"
                </button>
            </div>
        </section>
    }
}
