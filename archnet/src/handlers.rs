use anyhow::{Context, Result, anyhow};
use archnet_core::config::{Config, config_path};
use archnet_core::report::{ReportFormat, generate_report, save_report};
use archnet_core::{
    CategoryFacet, FilterState, GraphData, NetworkAnalysis, Selection, SelectionTracker,
    analyze_with_limit, category_facets,
};
use archnet_loader::{GraphLoader, GraphSource};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

// Helper functions shared by the network handlers

/// Pick the graph source from the `--source` argument or the config.
pub fn resolve_source(source: Option<&String>, config: &Config) -> Result<GraphSource, String> {
    source
        .or(config.graph_source.as_ref())
        .map(|s| GraphSource::parse(s))
        .ok_or_else(|| {
            "Either --source or graph_source in the config must be provided".to_string()
        })
}

/// Build the filter state from the shared filter arguments.
pub fn filter_from_matches(args: &ArgMatches) -> FilterState {
    let categories: Vec<String> = args
        .get_many::<String>("category")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    FilterState::new()
        .with_search(args.get_one::<String>("search").cloned().unwrap_or_default())
        .with_categories(categories)
        .with_notable_list(args.get_one::<bool>("notable").copied())
        .with_high_net_worth(args.get_one::<bool>("high-net-worth").copied())
        .with_min_connections(args.get_one::<u64>("min-connections").copied().unwrap_or(0))
        .with_min_flights(args.get_one::<u64>("min-flights").copied().unwrap_or(0))
}

pub fn load_config(config_dir: &str) -> Result<Config> {
    let path = config_path(config_dir);
    let config = Config::load(&path)?;
    debug!("Using config {:?}", config);
    Ok(config)
}

/// Fetch or read the raw graph once, with a spinner unless `quiet`.
pub async fn load_graph(source: &GraphSource, config: &Config, quiet: bool) -> Result<GraphData> {
    let spinner = if quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Loading graph from {}", source.describe()));
        Some(pb)
    };

    let loader = GraphLoader::with_timeout(config.timeout_secs)?;
    let result = loader.load(source).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result.with_context(|| format!("Failed to load graph from {}", source.describe()))
}

/// Neighbor listing for the `neighbors` command.
pub fn render_neighbors(analysis: &NetworkAnalysis, selection: &Selection) -> String {
    let Some(ref id) = selection.selected_id else {
        return String::new();
    };

    let mut out = String::new();
    let name = analysis
        .subgraph
        .node(id)
        .map(|node| node.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(id);
    out.push_str(&format!(
        "{} ({} visible neighbors)\n",
        name.bright_white().bold(),
        selection.neighbor_ids.len()
    ));

    for neighbor in &selection.neighbor_ids {
        let weight: u64 = analysis
            .subgraph
            .edges
            .iter()
            .filter(|edge| edge.touches(id) && edge.touches(neighbor))
            .map(|edge| edge.weight)
            .sum();
        let label = analysis
            .subgraph
            .node(neighbor)
            .map(|node| node.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(neighbor);
        out.push_str(&format!(
            "  {} {}  {}\n",
            "→".blue(),
            label,
            format!("weight {}", weight).bright_black()
        ));
    }

    out
}

/// Facet listing for the `categories` command.
pub fn render_facets(facets: &[CategoryFacet]) -> String {
    if facets.is_empty() {
        return "  (no categories)\n".to_string();
    }

    let mut out = String::new();
    for facet in facets {
        out.push_str(&format!(
            "  {:>6}  {}\n",
            facet.count.to_string().cyan(),
            facet.category
        ));
    }
    out
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

fn print_prompt(msg: &str) -> Result<String> {
    print!("{} ", msg.bright_cyan().bold());
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().to_lowercase())
}

fn emit(content: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            save_report(content, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{}", content),
    }
    Ok(())
}

pub fn handle_init(args: &ArgMatches, config_dir: &str) -> Result<()> {
    print_divider();
    println!("{}", "  ARCHNET INITIALIZATION".bright_white().bold());
    print_divider();
    println!();

    let dir = args
        .get_one::<String>("PATH")
        .map(String::as_str)
        .unwrap_or(config_dir);
    let force = args.get_flag("force");
    let path = config_path(dir);

    if Config::exists(&path) && !force {
        println!("{}", "⚠ WARNING".yellow().bold());
        println!("Config already exists:");
        println!(
            "  {} {}",
            "•".yellow(),
            path.display().to_string().bright_white()
        );
        println!();

        let response = print_prompt("Do you want to overwrite it? [y/N]:")?;
        println!();

        if response != "y" && response != "yes" {
            println!("{} Initialization cancelled.", "✗".red().bold());
            return Ok(());
        }
    }

    let config = Config {
        graph_source: args.get_one::<String>("source").cloned(),
        ..Config::default()
    };
    write_config(&config, &path)?;

    println!();
    print_divider();
    println!("{}", "  INITIALIZATION COMPLETE".green().bold());
    print_divider();
    println!(
        "{} Config: {}",
        "✓".green().bold(),
        path.display().to_string().bright_white()
    );
    match config.graph_source {
        Some(ref source) => println!("{} Graph source: {}", "✓".green().bold(), source),
        None => println!(
            "{} No graph source recorded; pass --source to each command",
            "ℹ".blue()
        ),
    }
    println!();

    Ok(())
}

fn write_config(config: &Config, path: &Path) -> Result<()> {
    println!("{} Writing config...", "→".blue());
    config.save(path)?;
    Ok(())
}

pub async fn handle_stats(args: &ArgMatches, config_dir: &str, quiet: bool) -> Result<()> {
    let config = load_config(config_dir)?;
    let source = resolve_source(args.get_one::<String>("source"), &config).map_err(|e| anyhow!(e))?;
    let graph = load_graph(&source, &config, quiet).await?;

    let filter = filter_from_matches(args);
    let top_n = args.get_one::<usize>("top").copied().unwrap_or(config.top_n);
    let analysis = analyze_with_limit(&graph, &filter, top_n);

    let mut tracker = SelectionTracker::new();
    if let Some(id) = args.get_one::<String>("select")
        && !tracker.select(id, &analysis.subgraph)
    {
        warn!("Entity {} is not visible under the current filters", id);
    }
    let selection = Some(tracker.selection()).filter(|s| !s.is_empty());

    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);
    let report = generate_report(&analysis, &filter, selection, format)?;

    emit(&report, args.get_one::<PathBuf>("output"))
}

pub async fn handle_neighbors(args: &ArgMatches, config_dir: &str, quiet: bool) -> Result<()> {
    let config = load_config(config_dir)?;
    let source = resolve_source(args.get_one::<String>("source"), &config).map_err(|e| anyhow!(e))?;
    let graph = load_graph(&source, &config, quiet).await?;

    let id = args
        .get_one::<String>("ID")
        .ok_or_else(|| anyhow!("An entity id is required"))?;
    let filter = filter_from_matches(args);
    let analysis = analyze_with_limit(&graph, &filter, config.top_n);

    let mut tracker = SelectionTracker::new();
    if !tracker.select(id, &analysis.subgraph) {
        return Err(anyhow!(
            "Entity '{}' is not in the visible network ({} of {} entities shown)",
            id,
            analysis.statistics.node_count,
            graph.node_count()
        ));
    }

    print!("{}", render_neighbors(&analysis, tracker.selection()));
    Ok(())
}

pub async fn handle_categories(args: &ArgMatches, config_dir: &str, quiet: bool) -> Result<()> {
    let config = load_config(config_dir)?;
    let source = resolve_source(args.get_one::<String>("source"), &config).map_err(|e| anyhow!(e))?;
    let graph = load_graph(&source, &config, quiet).await?;

    let facets = category_facets(&graph.nodes);
    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&facets)?);
    } else {
        println!(
            "{} {} categories across {} entities\n",
            "✓".green().bold(),
            facets.len(),
            graph.node_count()
        );
        print!("{}", render_facets(&facets));
    }
    Ok(())
}
