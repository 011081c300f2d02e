use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use directories::ProjectDirs;
use services::{AppServices, Clock, CourseService, IdentityService};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DB_ENV: &str = "SYLLABUS_DB_URL";
const DB_FILE: &str = "syllabus.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn course_service(&self) -> Arc<CourseService> {
        self.services.course_service()
    }

    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    seed_sample_data: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--no-sample-data]");
    eprintln!("  cargo run -p app -- report [--db <sqlite_url>] [--no-sample-data]");
    eprintln!("  cargo run -p app -- logout [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://<data dir>/{DB_FILE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Report,
    Logout,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "report" => Some(Self::Report),
            "logout" => Some(Self::Logout),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env_db_url.map_or_else(default_db_url, normalize_sqlite_url);
        let mut seed_sample_data = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--no-sample-data" => seed_sample_data = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            seed_sample_data,
        })
    }
}

/// `sqlite://` URL inside the platform data directory, or the working
/// directory when the platform has none.
fn default_db_url() -> String {
    let dir = ProjectDirs::from("edu", "syllabus", "syllabus-tracker")
        .map_or_else(|| PathBuf::from("."), |dirs| dirs.data_dir().to_path_buf());
    normalize_sqlite_url(dir.join(DB_FILE).display().to_string())
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, std::env::var(DB_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::info!(command = ?cmd, db = %parsed.db_url, "starting syllabus tracker");

    prepare_sqlite_file(&parsed.db_url)?;
    let services =
        AppServices::new_sqlite(&parsed.db_url, Clock::system(), parsed.seed_sample_data).await?;

    match cmd {
        Command::Ui => {
            services.identity().restore().await?;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some dev setups default the desktop window to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Syllabus Tracker")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Report => {
            services.identity().restore().await?;
            report(&services).await
        }
        Command::Logout => {
            let identity = services.identity();
            // An unreadable record is still removed.
            if let Err(err) = identity.restore().await {
                tracing::warn!(error = %err, "discarding unreadable stored identity");
            }
            match identity.logout().await {
                Some(user) => println!("logged out {} ({})", user.name, user.email),
                None => println!("no user is logged in"),
            }
            Ok(())
        }
    }
}

async fn report(services: &AppServices) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(user) = services.identity().current_user() {
        println!("Signed in as {} ({})", user.name, user.role.label());
    }

    let overview = services.course_service().overview().await?;
    if overview.is_empty() {
        println!("No courses.");
        return Ok(());
    }

    for entry in &overview {
        let progress = &entry.progress;
        println!(
            "{} {} [{}]: {}/{} topics ({:.0}%), week {} of {}, {}",
            entry.course.code(),
            entry.course.name(),
            entry.course.semester(),
            progress.completed_topics,
            progress.total_topics,
            progress.completion_percentage.round(),
            progress.current_week,
            entry.course.total_weeks(),
            entry.status().overview_label(),
        );
        if let Some(alert) = entry.alert() {
            println!(
                "  {} Detected: {}",
                alert.severity.title(),
                alert.behind_label()
            );
            for action in alert.severity.recommendations() {
                println!("    - {action}");
            }
        }
    }
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
