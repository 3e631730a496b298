use anyhow::{Context, Result};
use clap::Parser;
use secrecy::ExposeSecret;
use tracing::{info, warn};

use minutes::{FeishuPlatform, RecordingSharer, Settings};

/// Share a finished meeting's recording with the configured collaborators
#[derive(Debug, Parser)]
#[command(name = "share-minutes", version = minutes::VERSION_STRING)]
struct Cli {
    /// ID of the meeting that just ended
    meeting_id: String,

    /// One-time authorization code for the user token exchange
    #[arg(long, env = "CODE")]
    code: Option<String>,

    /// Settings file layered under the FEISHU_* environment variables
    #[arg(long)]
    config: Option<String>,

    /// Print the refresh token held after the run, for FEISHU_REFRESH_TOKEN on the next one
    #[arg(long)]
    print_refresh_token: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let platform = FeishuPlatform::new(&settings.base_url).context("Failed to create Feishu client")?;

    let mut sharer = RecordingSharer::from_settings(platform, &settings, cli.code);
    let report = sharer.run(&cli.meeting_id).await;

    if report.is_success() {
        info!(
            meeting_id = %report.meeting_id,
            url = %sharer.minutes_url(),
            collaborators = report.collaborators.outcomes.len(),
            "Recording shared"
        );
    } else {
        warn!(
            meeting_id = %report.meeting_id,
            app_token = ?report.app_token,
            user_token = ?report.user_token,
            recording = ?report.recording(),
            lookup_attempts = report.locate.attempts,
            collaborators_aborted_at = ?report.collaborators.aborted_at,
            public_link = ?report.public_link,
            "Recording sharing finished with failures"
        );
    }

    if cli.print_refresh_token {
        match &report.refresh_token {
            Some(token) => println!("{}", token.expose_secret()),
            None => warn!("No refresh token to print"),
        }
    }

    Ok(())
}
