//! Entry point for the portfolio desktop app.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use folio_logging::{FolioSubscriberBuilder, LogConfig};
use folio_site::components::App;
use folio_site::state::{self, Site};
use folio_site::{ModeOverride, Overrides, Portfolio, SiteResult, SiteSettings};

const SHARED_CSS: &str = folio_ui::SHARED_CSS;
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio with a staged shard intro")]
struct Args {
    /// Portfolio content JSON (uses the bundled sample if not provided)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Settings JSON with intro, window and theme options
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Intro mode, overriding the settings file
    #[arg(short, long, value_enum)]
    mode: Option<ModeOverride>,

    /// Scripted intro duration in milliseconds
    #[arg(long)]
    intro_delay_ms: Option<u64>,

    /// Fixed seed for the shard grid
    #[arg(long)]
    seed: Option<u64>,

    /// Go straight to the main content
    #[arg(long)]
    skip_intro: bool,

    /// Default log filter (RUST_LOG still wins)
    #[arg(long)]
    log_level: Option<String>,

    /// Also write JSONL logs into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            intro_delay: self.intro_delay_ms.map(Duration::from_millis),
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = match &args.log_dir {
        Some(dir) => LogConfig::desktop(dir.clone()),
        None => LogConfig::development(),
    };
    let mut logging = FolioSubscriberBuilder::new().with_config(log_config);
    if let Some(level) = &args.log_level {
        logging = logging.with_level(level.clone());
    }
    let _log_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    let site = match load_site(&args) {
        Ok(site) => site,
        Err(e) => {
            tracing::error!("Failed to start: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        name = %site.portfolio.profile.name,
        mode = ?site.settings.intro.mode,
        skip_intro = site.skip_intro,
        "Starting portfolio"
    );

    let window = &site.settings.window;
    let wb = WindowBuilder::new()
        .with_title(site.window_title())
        .with_inner_size(LogicalSize::new(window.width, window.height))
        .with_maximized(window.maximized);

    state::install(site);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(App);

    ExitCode::SUCCESS
}

/// Resolve content and settings, applying command-line overrides.
fn load_site(args: &Args) -> SiteResult<Site> {
    let mut settings = SiteSettings::load(args.settings.as_deref())?;
    settings.apply(&args.overrides())?;
    let portfolio = Portfolio::load(args.content.as_deref())?;

    Ok(Site {
        portfolio,
        settings,
        skip_intro: args.skip_intro,
    })
}
