//! # Command-Line Flags
//!
//! ```text
//! cafe [--config PATH] [--data-dir DIR] [--plain]
//! ```
//!
//! Each flag can also be set through its `CAFE_*` environment variable.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "cafe",
    version,
    about = "Rukaab Cafe order-taking and billing console"
)]
pub struct Cli {
    /// Path to cafe.toml (default: platform config directory)
    #[arg(long, env = "CAFE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for orders.txt and feedback.txt (default: platform data directory)
    #[arg(long, env = "CAFE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colors and screen clearing
    #[arg(long, env = "CAFE_PLAIN")]
    pub plain: bool,
}
