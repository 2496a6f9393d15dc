//! # Cafe Console Library
//!
//! The operator console for Rukaab Cafe: startup, prompts and screens.
//!
//! ## Module Organization
//! ```text
//! cafe_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── state/
//! │   ├── mod.rs      ◄─── AppContext (catalog, pricing, receipt header)
//! │   └── config.rs   ◄─── cafe.toml + CAFE_* overrides
//! ├── session.rs      ◄─── Main menu loop
//! ├── commands/       ◄─── One screen per main-menu option
//! ├── input.rs        ◄─── Console prompts and re-prompting
//! ├── presenter.rs    ◄─── Styled / plain output
//! ├── receipt.rs      ◄─── Receipt text
//! └── error.rs        ◄─── AppError
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod presenter;
pub mod receipt;
pub mod session;
pub mod state;

use std::io;
use std::path::PathBuf;

use cafe_store::{FeedbackLog, FileOrderLog, OrderStore};
use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use cli::Cli;
pub use error::{AppError, AppResult};
pub use input::Console;
pub use presenter::{presenter_for, PlainPresenter, Presenter, StyledPresenter};
pub use session::Session;
pub use state::{AppConfig, AppContext};

/// Runs the console until Exit or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging (stderr, RUST_LOG)                               │
/// │  2. Load AppConfig (defaults → cafe.toml → CAFE_* → validate)           │
/// │  3. Resolve and create the data directory                               │
/// │  4. Build AppContext, OrderStore, FeedbackLog                           │
/// │  5. Run the session on stdin/stdout                                     │
/// │                                                                         │
/// │  Any failure in 2-4 ends the process with exit code 1.                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> AppResult<()> {
    init_tracing();

    info!("Starting cafe console");

    let config = AppConfig::load(cli.config)?;
    let data_dir = resolve_data_dir(cli.data_dir)?;
    info!(?data_dir, "Data directory ready");

    let plain = cli.plain || !config.display.color;
    let app = AppContext::from_config(config)?;

    let log = FileOrderLog::new(data_dir.join(&app.config.orders.log_file), app.currency.clone());
    let store = OrderStore::new(log, app.config.first_order_id());
    let feedback = FeedbackLog::new(data_dir.join(&app.config.orders.feedback_file));

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), presenter_for(plain));

    Session::new(app, store, feedback, console).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: `warn`, so the operator screen stays clean
/// - `RUST_LOG=cafe=info` - order lifecycle events
/// - `RUST_LOG=cafe=debug` - every prompt answer and line item
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. run() twice in one process) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Determines the data directory and creates it if missing.
///
/// ## Platform-Specific Paths
/// - **Linux**: `~/.local/share/cafe`
/// - **macOS**: `~/Library/Application Support/com.rukaab.cafe`
/// - **Windows**: `%APPDATA%\rukaab\cafe\data`
///
/// `--data-dir` / `CAFE_DATA_DIR` overrides the platform path.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> AppResult<PathBuf> {
    let dir = match override_dir {
        Some(dir) => dir,
        None => ProjectDirs::from("com", "rukaab", "cafe")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| AppError::DataDir("could not determine a home directory".to_string()))?,
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| AppError::DataDir(format!("{}: {e}", dir.display())))?;

    Ok(dir)
}
