// System Intel - Main Entry Point
// `search` builds the detail-page link, `view` loads and renders a system page

use clap::{Parser, Subcommand};
use system_intel::config::DEFAULT_CONFIG_PATH;
use system_intel::search::SearchRedirector;
use system_intel::verbosity::init_logging;
use system_intel::{
    OutputFormat, PageController, PageDocument, PageState, SystemIntelClient, SystemIntelConfig,
    SYSTEM_NAME_PARAM,
};

#[derive(Parser)]
#[command(name = "system_intel", version, about = "Look up a game-world system and render its intel page")]
struct Cli {
    /// Configuration file (created with defaults when missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Verbosity (-v basic, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append every API call to the configured log file
    #[arg(long)]
    api_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the system page link for a search input
    Search {
        /// Text typed into the search box
        text: String,
    },
    /// Load the system page and print the result
    View {
        /// System to show; shorthand for --query system_name=<NAME>
        system_name: Option<String>,

        /// Page query string or URL, e.g. "?system_name=Jita"
        #[arg(long, conflicts_with = "system_name")]
        query: Option<String>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Request deadline in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// API host override
        #[arg(long)]
        api_base: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search { text } => {
            let mut history: Vec<String> = Vec::new();
            if SearchRedirector::default().submit(&text, &mut history) {
                if let Some(target) = history.last() {
                    println!("{}", target);
                }
            }
            Ok(())
        }
        Commands::View { system_name, query, format, timeout_ms, api_base } => {
            let mut config = SystemIntelConfig::load_or_create(&cli.config)?;
            if let Some(base) = api_base {
                config.api.base_url = base;
            }
            if let Some(ms) = timeout_ms {
                config.api.timeout_ms = ms;
            }
            if cli.api_log {
                config.logging.api_logging = true;
            }
            config.validate()?;
            config.print_summary();

            let mut client = SystemIntelClient::new(&config.api.base_url)?
                .with_timeout(config.timeout());
            client.set_api_logging(config.logging.api_logging, &config.logging.api_log_path);

            let query = query
                .or_else(|| system_name.map(|name| format!("{}={}", SYSTEM_NAME_PARAM, urlencoding::encode(&name))))
                .unwrap_or_default();

            let document = PageDocument::with_activity_segments(config.display.activity_segments);
            let mut page = PageController::new(client, document);
            let state = page.load(&query).await.clone();

            match format.unwrap_or(config.display.format) {
                OutputFormat::Text => print!("{}", page.document().to_text_report()),
                OutputFormat::Html => print!("{}", page.document().to_html()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page.updates())?),
            }

            if let PageState::Error { .. } = state {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
