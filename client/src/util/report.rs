//! CSV report of an analysis, downloadable from the results display.
//!
//! Layout: one row each for land type, greenness, and weather; a separator
//! row; a `Suggestions,Estimated Cost` header; then suggestions and cost
//! entries paired by position.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use thiserror::Error;

use super::format::{format_fixed, format_measure, format_rupees};
use crate::net::types::{AnalysisResult, WeatherReport};

pub const REPORT_FILE_NAME: &str = "report.csv";

/// How long the report's object URL stays valid after the download starts.
pub const REVOKE_DELAY_MS: u32 = 1_000;

#[cfg(feature = "hydrate")]
const REPORT_MIME: &str = "text/csv;charset=utf-8";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv flush failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("report is not valid UTF-8")]
    Encoding,
    #[error("download failed: {0}")]
    Download(String),
}

/// Render `result` as CSV text.
///
/// # Errors
///
/// Returns an error if the CSV writer fails, which only happens on I/O errors
/// of the in-memory buffer.
pub fn report_csv(result: &AnalysisResult) -> Result<String, ReportError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    let greenness = format_fixed(result.greenness_index, 2);
    let weather = weather_summary(&result.weather);

    writer.write_record(["Land Type", result.land_type.as_str()])?;
    writer.write_record(["Greenness Index", greenness.as_str()])?;
    writer.write_record(["Weather", weather.as_str()])?;
    writer.write_record(["", ""])?;
    writer.write_record(["Suggestions", "Estimated Cost"])?;

    let rows = result.suggestions.len().max(result.cost_estimate.len());
    for i in 0..rows {
        let suggestion = result.suggestions.get(i).map_or("", String::as_str);
        let cost = result
            .cost_estimate
            .get_index(i)
            .map(|(label, amount)| format!("{label}: {}", format_rupees(*amount)))
            .unwrap_or_default();
        writer.write_record([suggestion, cost.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| ReportError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|_| ReportError::Encoding)
}

fn weather_summary(weather: &WeatherReport) -> String {
    format!(
        "{}; {}; {}; {}",
        weather.description,
        format_measure(weather.temperature, "°C"),
        format_measure(weather.humidity, "%"),
        format_measure(weather.precipitation, "mm"),
    )
}

/// Save the report as `report.csv` through a temporary object URL.
///
/// # Errors
///
/// Returns an error if the CSV cannot be produced or the browser refuses to
/// create the blob or link. Outside the browser this always fails.
pub fn download_report(result: &AnalysisResult) -> Result<(), ReportError> {
    let text = report_csv(result)?;
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(REPORT_MIME);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(download_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(download_error)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ReportError::Download("no document".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(download_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ReportError::Download("not an anchor element".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(REPORT_FILE_NAME);

        // Some browsers ignore clicks on detached anchors.
        let body = document.body().ok_or_else(|| ReportError::Download("no body".to_owned()))?;
        body.append_child(&anchor).map_err(download_error)?;
        anchor.click();
        anchor.remove();

        // The download reads the blob after this returns.
        gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ReportError::Download("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn download_error(value: wasm_bindgen::JsValue) -> ReportError {
    ReportError::Download(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
