// Tests for report generation functionality

use archnet_core::report::{
    ReportFormat, generate_json_report, generate_markdown_report, generate_report,
    generate_text_report, save_report,
};
use archnet_core::{
    Entity, FilterState, GraphData, NetworkAnalysis, Relationship, analyze, select_node,
};
use tempfile::TempDir;

fn sample_analysis(filter: &FilterState) -> NetworkAnalysis {
    let graph = GraphData::new(
        vec![
            Entity::new("A").with_name("Alice").with_connections(10).with_flights(3),
            Entity::new("B").with_name("Bob").with_connections(3),
            Entity::new("C").with_name("Carol").with_connections(7),
        ],
        vec![Relationship::new("A", "B", 2), Relationship::new("A", "C", 5)],
    );
    analyze(&graph, filter)
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str_text() {
    assert!(matches!(ReportFormat::from_str("text"), Some(ReportFormat::Text)));
}

#[test]
fn test_report_format_from_str_json() {
    assert!(matches!(ReportFormat::from_str("json"), Some(ReportFormat::Json)));
}

#[test]
fn test_report_format_from_str_markdown_aliases() {
    assert!(matches!(ReportFormat::from_str("markdown"), Some(ReportFormat::Markdown)));
    assert!(matches!(ReportFormat::from_str("md"), Some(ReportFormat::Markdown)));
}

#[test]
fn test_report_format_from_str_case_insensitive() {
    assert!(matches!(ReportFormat::from_str("TEXT"), Some(ReportFormat::Text)));
    assert!(matches!(ReportFormat::from_str("Json"), Some(ReportFormat::Json)));
}

#[test]
fn test_report_format_from_str_invalid() {
    assert!(ReportFormat::from_str("csv").is_none());
    assert!(ReportFormat::from_str("pdf").is_none());
}

// ============================================================================
// Text Report Tests
// ============================================================================

#[test]
fn test_text_report_contains_statistics() {
    let filter = FilterState::new().with_min_connections(5);
    let analysis = sample_analysis(&filter);
    let report = generate_text_report(&analysis, &filter, None);

    assert!(report.contains("NETWORK STATISTICS"));
    assert!(report.contains("Entities:     2"));
    assert!(report.contains("Connections:  1"));
    assert!(report.contains("Density:      100.0%"));
    assert!(report.contains("connections >= 5"));
    assert!(report.contains("Alice"));
    assert!(report.contains("Carol"));
    assert!(!report.contains("Bob"));
    assert!(!report.contains("SELECTION"));
}

#[test]
fn test_text_report_empty_subgraph() {
    let filter = FilterState::new().with_min_connections(100);
    let analysis = sample_analysis(&filter);
    let report = generate_text_report(&analysis, &filter, None);

    assert!(report.contains("Entities:     0"));
    assert!(report.contains("no entities match"));
}

#[test]
fn test_text_report_with_selection() {
    let filter = FilterState::default();
    let analysis = sample_analysis(&filter);
    let selection = select_node("A", &analysis.subgraph.edges);
    let report = generate_text_report(&analysis, &filter, Some(&selection));

    assert!(report.contains("SELECTION"));
    assert!(report.contains("Selected:     Alice"));
    assert!(report.contains("Neighbors:    2"));
    assert!(report.contains("• Bob"));
}

// ============================================================================
// JSON Report Tests
// ============================================================================

#[test]
fn test_json_report_structure() {
    let filter = FilterState::new().with_categories(["pol"]);
    let analysis = sample_analysis(&filter);
    let json = generate_json_report(&analysis, &filter, None).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let report = &value["report"];
    assert_eq!(report["metadata"]["generator"], "archnet");
    assert_eq!(report["statistics"]["node_count"], 0);
    assert_eq!(report["filter"]["categories"][0], "pol");
    assert!(report["selection"].is_null());
}

#[test]
fn test_json_report_includes_selection() {
    let filter = FilterState::default();
    let analysis = sample_analysis(&filter);
    let selection = select_node("C", &analysis.subgraph.edges);
    let json = generate_json_report(&analysis, &filter, Some(&selection)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["report"]["selection"]["selected_id"], "C");
    assert_eq!(value["report"]["selection"]["neighbor_ids"][0], "A");
    assert_eq!(value["report"]["subgraph"]["nodes"].as_array().unwrap().len(), 3);
}

// ============================================================================
// Markdown Report Tests
// ============================================================================

#[test]
fn test_markdown_report_tables() {
    let filter = FilterState::default();
    let analysis = sample_analysis(&filter);
    let report = generate_markdown_report(&analysis, &filter, None);

    assert!(report.starts_with("# Network Statistics"));
    assert!(report.contains("| Entities | 3 |"));
    assert!(report.contains("| 1 | Alice | 10 | 3 |"));
}

#[test]
fn test_generate_report_dispatch() {
    let filter = FilterState::default();
    let analysis = sample_analysis(&filter);

    let text = generate_report(&analysis, &filter, None, ReportFormat::Text).unwrap();
    let markdown = generate_report(&analysis, &filter, None, ReportFormat::Markdown).unwrap();
    let json = generate_report(&analysis, &filter, None, ReportFormat::Json).unwrap();

    assert!(text.contains("NETWORK STATISTICS"));
    assert!(markdown.contains("## Top Connected"));
    assert!(json.trim_start().starts_with('{'));
}

// ============================================================================
// Save Report Tests
// ============================================================================

#[test]
fn test_save_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.md");

    save_report("# hello", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hello");
}
