// Report generation from a network analysis

use crate::analysis::NetworkAnalysis;
use crate::filter::FilterState;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// Render `analysis` in the requested format.
pub fn generate_report(
    analysis: &NetworkAnalysis,
    filter: &FilterState,
    selection: Option<&Selection>,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(analysis, filter, selection)),
        ReportFormat::Json => generate_json_report(analysis, filter, selection),
        ReportFormat::Markdown => Ok(generate_markdown_report(analysis, filter, selection)),
    }
}

pub fn generate_text_report(
    analysis: &NetworkAnalysis,
    filter: &FilterState,
    selection: Option<&Selection>,
) -> String {
    let stats = &analysis.statistics;
    let mut report = String::new();

    report.push_str(RULE);
    report.push('\n');
    report.push_str("                          NETWORK STATISTICS\n");
    report.push_str(RULE);
    report.push_str("\n\n");

    report.push_str(&format!("Filters:      {}\n", filter.describe()));
    report.push_str(&format!("Entities:     {}\n", stats.node_count));
    report.push_str(&format!("Connections:  {}\n", stats.edge_count));
    report.push_str(&format!("Density:      {}\n", format_percent(stats.density_percent)));
    report.push_str(&format!("Clustering:   {}\n", format_percent(stats.clustering_percent)));
    report.push('\n');

    report.push_str(RULE);
    report.push('\n');
    report.push_str("TOP CONNECTED\n");
    report.push_str(RULE);
    report.push_str("\n\n");

    if stats.top_connected.is_empty() {
        report.push_str("  (no entities match the current filters)\n");
    } else {
        for (idx, entity) in stats.top_connected.iter().enumerate() {
            report.push_str(&format!(
                "  {:>2}. {:<40} {:>6} connections  {:>5} flights\n",
                idx + 1,
                truncate(&display_name(&entity.name, &entity.id), 40),
                entity.connection_count,
                entity.flight_count
            ));
        }
    }
    report.push('\n');

    if let Some(selection) = selection
        && let Some(ref id) = selection.selected_id
    {
        report.push_str(RULE);
        report.push('\n');
        report.push_str("SELECTION\n");
        report.push_str(RULE);
        report.push_str("\n\n");

        let name = analysis
            .subgraph
            .node(id)
            .map(|node| display_name(&node.name, &node.id))
            .unwrap_or_else(|| id.clone());
        report.push_str(&format!("Selected:     {}\n", name));
        report.push_str(&format!("Neighbors:    {}\n", selection.neighbor_ids.len()));
        for neighbor in &selection.neighbor_ids {
            let label = analysis
                .subgraph
                .node(neighbor)
                .map(|node| display_name(&node.name, &node.id))
                .unwrap_or_else(|| neighbor.clone());
            report.push_str(&format!("  • {}\n", label));
        }
        report.push('\n');
    }

    report.push_str(&format!(
        "Generated by archnet at {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    report
}

pub fn generate_json_report(
    analysis: &NetworkAnalysis,
    filter: &FilterState,
    selection: Option<&Selection>,
) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "archnet",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "filter": filter,
            "statistics": analysis.statistics,
            "subgraph": analysis.subgraph,
            "selection": selection.filter(|s| !s.is_empty()),
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_markdown_report(
    analysis: &NetworkAnalysis,
    filter: &FilterState,
    selection: Option<&Selection>,
) -> String {
    let stats = &analysis.statistics;
    let mut report = String::new();

    report.push_str("# Network Statistics\n\n");
    report.push_str(&format!("**Filters:** {}\n\n", filter.describe()));
    report.push_str("| Metric | Value |\n|---|---|\n");
    report.push_str(&format!("| Entities | {} |\n", stats.node_count));
    report.push_str(&format!("| Connections | {} |\n", stats.edge_count));
    report.push_str(&format!("| Density | {} |\n", format_percent(stats.density_percent)));
    report.push_str(&format!(
        "| Clustering | {} |\n\n",
        format_percent(stats.clustering_percent)
    ));

    report.push_str("## Top Connected\n\n");
    if stats.top_connected.is_empty() {
        report.push_str("_No entities match the current filters._\n\n");
    } else {
        report.push_str("| # | Entity | Connections | Flights |\n|---|---|---|---|\n");
        for (idx, entity) in stats.top_connected.iter().enumerate() {
            report.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                idx + 1,
                escape_markdown(&display_name(&entity.name, &entity.id)),
                entity.connection_count,
                entity.flight_count
            ));
        }
        report.push('\n');
    }

    if let Some(selection) = selection
        && let Some(ref id) = selection.selected_id
    {
        report.push_str(&format!("## Selection: {}\n\n", escape_markdown(id)));
        if selection.neighbor_ids.is_empty() {
            report.push_str("_No visible neighbors._\n\n");
        } else {
            for neighbor in &selection.neighbor_ids {
                report.push_str(&format!("- {}\n", escape_markdown(neighbor)));
            }
            report.push('\n');
        }
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn display_name(name: &str, id: &str) -> String {
    if name.trim().is_empty() {
        id.to_string()
    } else {
        name.to_string()
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}
