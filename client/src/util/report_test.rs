use super::*;
use crate::net::types::cost_estimate_from_pairs;

fn barren_plot() -> AnalysisResult {
    AnalysisResult {
        land_type: "sandbar".to_owned(),
        greenness_index: 0.031,
        weather: WeatherReport {
            temperature: 31.5,
            humidity: 40.0,
            precipitation: 0.0,
            description: "haze".to_owned(),
            wind_speed: None,
        },
        suggestions: vec![
            "Drought-resistant plants".to_owned(),
            "Rainwater harvesting".to_owned(),
            "Solar panels".to_owned(),
        ],
        cost_estimate: cost_estimate_from_pairs(vec![
            ("Rainwater Tank".to_owned(), 2500.0),
            ("Solar Panels per acre".to_owned(), 500_000.0),
        ]),
        confidence: Some(0.61),
    }
}

#[test]
fn report_header_rows() {
    let csv_text = report_csv(&barren_plot()).unwrap();
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines[0], "Land Type,sandbar");
    assert_eq!(lines[1], "Greenness Index,0.03");
    assert_eq!(lines[2], "Weather,haze; 31.5 °C; 40 %; 0 mm");
    assert_eq!(lines[3], ",");
    assert_eq!(lines[4], "Suggestions,Estimated Cost");
}

#[test]
fn report_pairs_suggestions_with_costs_by_position() {
    let csv_text = report_csv(&barren_plot()).unwrap();
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines[5], "Drought-resistant plants,\"Rainwater Tank: ₹2,500\"");
    assert_eq!(lines[6], "Rainwater harvesting,\"Solar Panels per acre: ₹5,00,000\"");
    assert_eq!(lines[7], "Solar panels,");
    assert_eq!(lines.len(), 8);
}

#[test]
fn report_keeps_costs_beyond_suggestions() {
    let mut result = barren_plot();
    result.suggestions.truncate(1);
    let csv_text = report_csv(&result).unwrap();
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[6].starts_with(",\"Solar Panels per acre"));
}

#[test]
fn report_quotes_fields_with_commas() {
    let mut result = barren_plot();
    result.land_type = "lakeside, marsh".to_owned();
    let csv_text = report_csv(&result).unwrap();
    assert_eq!(csv_text.lines().next(), Some("Land Type,\"lakeside, marsh\""));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn download_outside_browser_fails() {
    let err = download_report(&barren_plot()).unwrap_err();
    assert!(matches!(err, ReportError::Download(_)));
}

#[test]
fn report_greenness_tie_rounds_up() {
    let mut result = barren_plot();
    result.greenness_index = 0.625;
    let csv_text = report_csv(&result).unwrap();
    assert_eq!(csv_text.lines().nth(1), Some("Greenness Index,0.63"));
}

#[test]
fn download_url_outlives_the_click() {
    assert_eq!(REVOKE_DELAY_MS, 1_000);
}
