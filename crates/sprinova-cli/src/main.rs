mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprinova",
    about = "Sprinova Digital site toolkit — serve the agency site and run its AI content tools",
    version,
    propagate_version = true
)]
struct Cli {
    /// Site root containing sprinova.yaml (default: auto-detect upward from cwd)
    #[arg(long, global = true, env = "SPRINOVA_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold sprinova.yaml in the site root
    Init,

    /// Serve the site and JSON API
    Serve {
        /// Port to listen on (0 = OS-assigned; default: from config)
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Generate an initial content draft from the terminal
    Draft {
        /// Client industry, e.g. "E-commerce"
        #[arg(long)]
        industry: String,
        /// Target audience, e.g. "Small business owners"
        #[arg(long = "audience")]
        target_audience: String,
        /// The message the content should carry
        #[arg(long = "message")]
        desired_message: String,
        /// blog_post, social_media_update, or email_campaign
        #[arg(long = "kind", default_value = "blog_post")]
        content_type: String,
    },

    /// Summarize an analytics report
    Summarize {
        /// Path to a JSON report (defaults to the bundled sample)
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value = "B2B SaaS")]
        industry: String,
        #[arg(long = "audience", default_value = "Marketing Managers")]
        target_audience: String,
    },

    /// Validate the site configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let root = root::resolve_root(cli.root.as_deref());

    match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
        Commands::Draft {
            industry,
            target_audience,
            desired_message,
            content_type,
        } => cmd::generate::run_draft(
            &root,
            industry,
            target_audience,
            desired_message,
            &content_type,
            cli.json,
        ),
        Commands::Summarize {
            file,
            industry,
            target_audience,
        } => cmd::generate::run_summarize(&root, file, industry, target_audience, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    }
}
