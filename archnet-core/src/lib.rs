pub mod analysis;
pub mod config;
pub mod filter;
pub mod project;
pub mod report;
pub mod selection;
pub mod stats;

use colored::Colorize;

pub use analysis::{CategoryFacet, NetworkAnalysis, analyze, analyze_with_limit, category_facets};
pub use archnet_loader::{Entity, GraphData, Relationship};
pub use filter::{FilterState, filter_nodes, is_visible};
pub use project::{VisibleSubgraph, project_edges, visible_ids};
pub use selection::{Selection, SelectionState, SelectionTracker, clear_selection, select_node};
pub use stats::{RankedEntity, StatisticsSnapshot, TOP_CONNECTED_LIMIT, compute_statistics};

pub fn print_banner() {
    println!(
        "{}",
        r#"
   __ _ _ __ ___| |__  _ __   ___| |_
  / _` | '__/ __| '_ \| '_ \ / _ \ __|
 | (_| | | | (__| | | | | | |  __/ |_
  \__,_|_|  \___|_| |_|_| |_|\___|\__|
"#
        .bright_cyan()
    );
    println!(
        "  {} v{}\n",
        "network analytics for archive entity graphs".bright_white(),
        env!("CARGO_PKG_VERSION")
    );
}
