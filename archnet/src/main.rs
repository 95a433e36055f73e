use archnet::commands::command_argument_builder;
use archnet::handlers::{handle_categories, handle_init, handle_neighbors, handle_stats};
use archnet_core::config::DEFAULT_CONFIG_DIR;
use archnet_core::print_banner;
use colored::Colorize;
use tracing::Level;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_logging(chosen_command.get_flag("verbose"));

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let config_dir = chosen_command
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_DIR);

    let result = match chosen_command.subcommand() {
        Some(("init", primary_command)) => handle_init(primary_command, config_dir),
        Some(("stats", primary_command)) => handle_stats(primary_command, config_dir, quiet).await,
        Some(("neighbors", primary_command)) => {
            handle_neighbors(primary_command, config_dir, quiet).await
        }
        Some(("categories", primary_command)) => {
            handle_categories(primary_command, config_dir, quiet).await
        }
        // No subcommand provided, just show the banner
        None => return,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
