use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuizConfig, QuizLoopService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
    InvalidFeedbackMs { raw: String },
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
            ArgsError::InvalidFeedbackMs { raw } => {
                write!(f, "invalid --feedback-ms value: {raw}")
            }
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Debug, Default)]
struct Args {
    base_url: Option<String>,
    feedback_delay: Option<Duration>,
    log_level: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--base-url <url>] [--feedback-ms <ms>] [--log-level <lvl>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url https://opentdb.com");
    eprintln!("  --feedback-ms 1500");
    eprintln!("  --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TRIVIA_BASE_URL, QUIZ_HTTP_TIMEOUT_SECS, QUIZ_FEEDBACK_DELAY_MS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    parsed.base_url = Some(value);
                }
                "--feedback-ms" => {
                    let value = require_value(args, "--feedback-ms")?;
                    let millis: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidFeedbackMs { raw: value.clone() })?;
                    parsed.feedback_delay = Some(Duration::from_millis(millis));
                }
                "--log-level" => {
                    parsed.log_level = Some(require_value(args, "--log-level")?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn apply(&self, config: &mut QuizConfig) {
        if let Some(base_url) = &self.base_url {
            config.trivia.base_url.clone_from(base_url);
        }
        if let Some(delay) = self.feedback_delay {
            config.feedback_delay = delay;
        }
    }
}

fn init_logging(level: Option<&str>) -> Result<(), ArgsError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(scoped_directives(level))
            .map_err(|_| ArgsError::InvalidLogLevel { raw: level.to_string() })?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(scoped_directives(DEFAULT_LOG_LEVEL))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

fn scoped_directives(level: &str) -> String {
    format!("app={level},ui={level},services={level},quiz_core={level}")
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(&mut std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_logging(parsed.log_level.as_deref()).inspect_err(|_| print_usage())?;

    let mut config = QuizConfig::from_env();
    parsed.apply(&mut config);
    info!(
        base_url = %config.trivia.base_url,
        timeout_secs = config.trivia.timeout.as_secs(),
        feedback_ms = u64::try_from(config.feedback_delay.as_millis()).unwrap_or(u64::MAX),
        "starting quiz client"
    );

    let services = AppServices::from_config(&config)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop: services.quiz_loop(),
    });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
