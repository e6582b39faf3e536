use clap::{Args, Parser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Output as JSON
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Suppress decorative output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Debug output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "wiki-random",
    version,
    about = "Fetch a random Wikipedia page summary",
    long_about = "wiki-random - Fetch a random article summary from a Wikipedia language edition.",
    after_help = "EXAMPLES:\n  wiki-random\n  wiki-random --language de\n  wiki-random -l fr --json\n  wiki-random --quiet"
)]
pub struct Cli {
    /// Wikipedia language edition to draw from
    #[arg(short = 'l', long, default_value = "en")]
    pub language: String,

    #[command(flatten)]
    pub global: GlobalArgs,
}
