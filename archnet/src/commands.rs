use archnet_core::config::DEFAULT_CONFIG_DIR;
use clap::{Arg, arg, command};
use std::path::PathBuf;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

fn source_arg() -> Arg {
    arg!(-s --"source" <SOURCE>)
        .required(false)
        .help("Graph endpoint URL or JSON file (default: graph_source from the config)")
}

fn filter_args() -> Vec<Arg> {
    vec![
        arg!(--"search" <TEXT>)
            .required(false)
            .help("Case-insensitive match against entity names and name variants"),
        arg!(-c --"category" <CATEGORY>)
            .required(false)
            .help("Only entities tagged with this category (repeatable, any match)")
            .action(clap::ArgAction::Append),
        arg!(--"notable" <BOOL>)
            .required(false)
            .help("Require the notable-list flag to equal this value")
            .value_parser(clap::value_parser!(bool)),
        arg!(--"high-net-worth" <BOOL>)
            .required(false)
            .help("Require the high-net-worth flag to equal this value")
            .value_parser(clap::value_parser!(bool)),
        arg!(--"min-connections" <NUM>)
            .required(false)
            .help("Minimum precomputed connection count")
            .value_parser(clap::value_parser!(u64))
            .default_value("0"),
        arg!(--"min-flights" <NUM>)
            .required(false)
            .help("Minimum precomputed flight count")
            .value_parser(clap::value_parser!(u64))
            .default_value("0"),
    ]
}

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("archnet")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("archnet")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Emit debug logging to stderr").required(false))
        .arg(
            arg!(--"config" <DIR>)
                .required(false)
                .help("Directory holding config.json")
                .default_value(DEFAULT_CONFIG_DIR),
        )
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Writes a default archnet config file")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Directory to store the config in (default: --config)"),
                )
                .arg(source_arg().help("Default graph endpoint URL or JSON file to record"))
                .arg(
                    arg!(-f --"force")
                        .help("Overwrite an existing config without asking")
                        .required(false),
                ),
        )
        .subcommand(
            command!("stats")
                .about("Filter the network and print its statistics")
                .arg(source_arg())
                .args(filter_args())
                .arg(
                    arg!(--"top" <NUM>)
                        .required(false)
                        .help("Length of the top-connected ranking (default: top_n from the config)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"select" <ID>)
                        .required(false)
                        .help("Include the neighbors of this entity in the report"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, markdown")
                        .value_parser(["text", "json", "markdown", "md"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            command!("neighbors")
                .about("List the visible entities directly connected to an entity")
                .arg(arg!(<ID>).required(true).help("Entity identifier"))
                .arg(source_arg())
                .args(filter_args()),
        )
        .subcommand(
            command!("categories")
                .about("List the category tags present in the network")
                .arg(source_arg())
                .arg(
                    arg!(--"json")
                        .required(false)
                        .help("Print the facets as JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
