use super::*;
use crate::net::types::{WeatherReport, cost_estimate_from_pairs};
use crate::state::upload::{RemoveStep, UploadState};

fn photo(name: &str) -> SelectedImage {
    SelectedImage::accept(name, "image/jpeg", 2048, ()).unwrap()
}

fn farmland() -> AnalysisResult {
    AnalysisResult {
        land_type: "farmland".to_owned(),
        greenness_index: 0.42,
        weather: WeatherReport {
            temperature: 25.0,
            humidity: 60.0,
            precipitation: 0.0,
            description: "clear".to_owned(),
            wind_speed: None,
        },
        suggestions: vec!["drip irrigation".to_owned()],
        cost_estimate: cost_estimate_from_pairs(vec![("seeds".to_owned(), 500.0)]),
        confidence: None,
    }
}

/// The widget's selection path: only accepted files reach the page.
fn offer(page: &mut PageState, name: &str, mime_type: &str) {
    if let Some(image) = SelectedImage::accept(name, mime_type, 2048, ()) {
        page.select_image(Some(image));
    }
}

// =============================================================
// Selection
// =============================================================

#[test]
fn non_image_file_leaves_selection_empty() {
    let mut page = PageState::default();
    offer(&mut page, "notes.txt", "text/plain");
    assert!(page.selected_image.is_none());
    assert_eq!(page.phase(false), FlowPhase::Idle);
}

#[test]
fn non_image_file_keeps_existing_selection() {
    let mut page = PageState::default();
    page.select_image(Some(photo("plot.jpg")));
    page.complete_analysis(Some(farmland()));

    offer(&mut page, "scan.pdf", "application/pdf");

    assert_eq!(page.selected_image.as_ref().map(|i| i.name.as_str()), Some("plot.jpg"));
    assert!(page.analysis_result.is_some());
}

#[test]
fn accept_rejects_non_image_types() {
    assert!(SelectedImage::accept("notes.txt", "text/plain", 12, ()).is_none());
    assert!(SelectedImage::accept("clip.mp4", "video/mp4", 12, ()).is_none());
    assert!(SelectedImage::accept("unknown", "", 12, ()).is_none());
}

#[test]
fn accept_keeps_metadata_without_preview() {
    let image = SelectedImage::accept("plot.webp", "image/webp", 4096, ()).unwrap();
    assert_eq!(image.name, "plot.webp");
    assert_eq!(image.mime_type, "image/webp");
    assert_eq!(image.size, 4096);
    assert!(image.preview_url.is_none());
}

#[test]
fn image_file_populates_selection_and_clears_prior_result() {
    let mut page = PageState::default();
    page.select_image(Some(photo("old.jpg")));
    page.complete_analysis(Some(farmland()));
    assert_eq!(page.phase(false), FlowPhase::Displayed);

    offer(&mut page, "new.jpg", "image/jpeg");

    assert_eq!(page.selected_image.as_ref().map(|i| i.name.as_str()), Some("new.jpg"));
    assert!(page.analysis_result.is_none());
    assert_eq!(page.phase(false), FlowPhase::FileSelected);
}

#[test]
fn select_image_returns_replaced_image() {
    let mut page = PageState::default();
    assert!(page.select_image(Some(photo("a.png"))).is_none());
    let replaced = page.select_image(Some(photo("b.png")));
    assert_eq!(replaced.map(|i| i.name), Some("a.png".to_owned()));
}

#[test]
fn removing_image_resets_selection_and_result() {
    let mut page = PageState::default();
    page.select_image(Some(photo("plot.jpg")));
    page.complete_analysis(Some(farmland()));

    let mut input_value = "C:\\fakepath\\plot.jpg".to_owned();

    for step in UploadState::default().remove() {
        match step {
            RemoveStep::ClearSelection => {
                page.select_image(None);
            }
            RemoveStep::ClearResult => page.complete_analysis(None),
            RemoveStep::ResetInput => input_value.clear(),
        }
    }

    assert!(page.selected_image.is_none());
    assert!(page.analysis_result.is_none());
    assert!(input_value.is_empty());
    assert_eq!(page.phase(false), FlowPhase::Idle);
}

// =============================================================
// Phases
// =============================================================

#[test]
fn loading_with_image_is_analyzing() {
    let mut page = PageState::default();
    page.select_image(Some(photo("plot.jpg")));
    assert_eq!(page.phase(true), FlowPhase::Analyzing);
}

#[test]
fn loading_without_image_is_idle() {
    assert_eq!(PageState::default().phase(true), FlowPhase::Idle);
}

#[test]
fn empty_completion_with_image_is_failed() {
    let mut page = PageState::default();
    page.select_image(Some(photo("plot.jpg")));
    page.complete_analysis(None);
    assert!(page.analysis_result.is_none());
    assert_eq!(page.phase(false), FlowPhase::Failed);
}

#[test]
fn new_selection_after_failure_returns_to_file_selected() {
    let mut page = PageState::default();
    page.select_image(Some(photo("plot.jpg")));
    page.complete_analysis(None);
    page.select_image(Some(photo("retry.jpg")));
    assert_eq!(page.phase(false), FlowPhase::FileSelected);
}

#[test]
fn flow_phase_default_is_idle() {
    assert_eq!(FlowPhase::default(), FlowPhase::Idle);
}

#[test]
fn flow_phase_labels_and_modifiers() {
    assert_eq!(FlowPhase::Idle.label(), "Waiting for an image");
    assert_eq!(FlowPhase::Analyzing.label(), "Analyzing");
    assert_eq!(FlowPhase::Failed.css_modifier(), "phase--failed");
    assert_eq!(FlowPhase::Displayed.css_modifier(), "phase--displayed");
}
