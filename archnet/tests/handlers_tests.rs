use archnet::commands::command_argument_builder;
use archnet::handlers::*;
use archnet_core::config::Config;
use archnet_core::{
    CategoryFacet, Entity, FilterState, GraphData, Relationship, analyze, select_node,
};
use archnet_loader::GraphSource;
use std::path::PathBuf;

fn sub_matches(argv: &[&str]) -> clap::ArgMatches {
    let matches = command_argument_builder()
        .try_get_matches_from(argv.iter().copied())
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    sub.clone()
}

#[test]
fn test_filter_from_matches_defaults() {
    let args = sub_matches(&["archnet", "stats", "-s", "graph.json"]);
    assert_eq!(filter_from_matches(&args), FilterState::default());
}

#[test]
fn test_filter_from_matches_all_arguments() {
    let args = sub_matches(&[
        "archnet",
        "stats",
        "--search",
        "smith",
        "-c",
        "pol",
        "-c",
        "biz",
        "--notable",
        "true",
        "--high-net-worth",
        "false",
        "--min-connections",
        "5",
        "--min-flights",
        "2",
    ]);

    let expected = FilterState::new()
        .with_search("smith")
        .with_categories(["pol", "biz"])
        .with_notable_list(Some(true))
        .with_high_net_worth(Some(false))
        .with_min_connections(5)
        .with_min_flights(2);
    assert_eq!(filter_from_matches(&args), expected);
}

#[test]
fn test_neighbors_requires_id() {
    let result = command_argument_builder().try_get_matches_from(["archnet", "neighbors"]);
    assert!(result.is_err());
}

#[test]
fn test_stats_rejects_unknown_format() {
    let result =
        command_argument_builder().try_get_matches_from(["archnet", "stats", "-f", "csv"]);
    assert!(result.is_err());
}

#[test]
fn test_resolve_source_prefers_argument() {
    let config = Config {
        graph_source: Some("fallback.json".to_string()),
        ..Config::default()
    };
    let arg = "https://archive.example.org/api/network".to_string();

    let source = resolve_source(Some(&arg), &config).unwrap();
    assert!(matches!(source, GraphSource::Url(_)));
}

#[test]
fn test_resolve_source_falls_back_to_config() {
    let config = Config {
        graph_source: Some("fallback.json".to_string()),
        ..Config::default()
    };

    let source = resolve_source(None, &config).unwrap();
    assert_eq!(source, GraphSource::File(PathBuf::from("fallback.json")));
}

#[test]
fn test_resolve_source_missing() {
    let result = resolve_source(None, &Config::default());
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Either --source"));
}

#[test]
fn test_load_config_from_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::TempDir::new()?;
    let config = Config {
        top_n: 3,
        ..Config::default()
    };
    config.save(&dir.path().join("config.json"))?;

    let loaded = load_config(dir.path().to_str().unwrap())?;
    assert_eq!(loaded.top_n, 3);
    Ok(())
}

#[test]
fn test_render_neighbors_lists_names_and_weights() {
    colored::control::set_override(false);

    let graph = GraphData::new(
        vec![
            Entity::new("A").with_name("Alice"),
            Entity::new("B").with_name("Bob"),
            Entity::new("C"),
        ],
        vec![Relationship::new("A", "B", 2), Relationship::new("C", "A", 5)],
    );
    let analysis = analyze(&graph, &FilterState::default());
    let selection = select_node("A", &analysis.subgraph.edges);

    let output = render_neighbors(&analysis, &selection);
    assert!(output.contains("Alice (2 visible neighbors)"));
    assert!(output.contains("Bob  weight 2"));
    assert!(output.contains("C  weight 5"));
}

#[test]
fn test_render_facets() {
    colored::control::set_override(false);

    let facets = vec![
        CategoryFacet {
            category: "pol".to_string(),
            count: 12,
        },
        CategoryFacet {
            category: "biz".to_string(),
            count: 3,
        },
    ];
    let output = render_facets(&facets);
    assert!(output.contains("pol"));
    assert!(output.contains("12"));
    assert!(output.lines().count() == 2);
    assert_eq!(render_facets(&[]), "  (no categories)\n");
}
