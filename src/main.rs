use anyhow::Result;
use clap::{Parser, Subcommand};
use gh_harvest::commands::validators;
use gh_harvest::commands::*;
use gh_harvest::config::{Config, ConfigBuilder, resolve_credentials};
use gh_harvest::constants;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gh-harvest")]
#[command(about = "Read GitHub repositories, commits and comparisons")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    /// GitHub token
    #[arg(long, global = true)]
    token: Option<String>,

    /// File with one GitHub token per line; a random one is used per request
    #[arg(long, global = true)]
    tokens_file: Option<String>,

    /// Maximum number of pages to fetch for a listing
    #[arg(long, global = true)]
    max_pages: Option<usize>,

    /// GitHub API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Output in JSON format for machine consumption
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all repositories of a user
    Repos {
        /// GitHub username
        username: String,
    },

    /// Show a single commit
    Commit {
        /// Commit API URL, or a commit SHA when --repo is given
        target: String,

        /// Repository (owner/repo or a GitHub URL)
        #[arg(short, long)]
        repo: Option<String>,

        /// Print only the combined patch of all changed files
        #[arg(long)]
        diff: bool,
    },

    /// Compare two refs
    Compare {
        /// Compare API URL, or base...head when --repo is given
        target: String,

        /// Repository (owner/repo or a GitHub URL)
        #[arg(short, long)]
        repo: Option<String>,

        /// Print only the combined patch of all changed files
        #[arg(long)]
        diff: bool,
    },
}

fn init_tracing() {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(constants::logging::DEFAULT_FILTER),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Validate arguments before touching credentials or the network
    validators::validate_token_args(&cli.token, &cli.tokens_file)?;
    let command: Box<dyn Command + Send + Sync> = match cli.command {
        Commands::Repos { username } => {
            validators::validate_username(&username)?;
            Box::new(ReposCommand {
                username: username.trim().to_string(),
            })
        }
        Commands::Commit { target, repo, diff } => {
            validators::validate_resource_target(&target, &repo)?;
            validators::validate_output_flags(diff, cli.json)?;
            Box::new(CommitCommand { target, repo, diff })
        }
        Commands::Compare { target, repo, diff } => {
            validators::validate_resource_target(&target, &repo)?;
            validators::validate_output_flags(diff, cli.json)?;
            Box::new(CompareCommand { target, repo, diff })
        }
    };

    let config = ConfigBuilder::new(Config::load_config(&cli.config)?)
        .with_tokens_file(cli.tokens_file)
        .with_max_pages(cli.max_pages)
        .with_api_base(cli.api_base)
        .build()?;

    let credentials = resolve_credentials(cli.token, &config)?;
    let context = CommandContext {
        client: config.client(credentials)?,
        json: cli.json,
    };

    command.execute(&context).await
}
