//! speak - synthesize text into an audio file with a fixed voice persona.

use clap::Parser;

mod commands;

/// Synthesize text into an audio file using the King Sejong voice persona.
///
/// Text is read from stdin unless -t is given. The voice configuration
/// (ko-KR-BongJinNeural, pitch -12Hz, rate +15%, volume +5%) is fixed and
/// identical on every run.
#[derive(Parser)]
#[command(name = "speak")]
#[command(about = "Fixed-persona neural text-to-speech")]
#[command(version)]
pub struct Cli {
    /// Output audio file path
    #[arg(required_unless_present = "list_voices")]
    pub output: Option<String>,

    /// Text to synthesize (reads stdin when omitted)
    #[arg(short = 't', long)]
    pub text: Option<String>,

    /// List the service's available voices and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Output voice list as JSON (for piping)
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    if cli.list_voices {
        return commands::list_voices(&cli).await;
    }
    commands::synthesize(&cli).await
}
