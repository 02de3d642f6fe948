use clap::Parser;
use std::path::PathBuf;
use unidb::config::StoreKind;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.2.0" for releases, "0.2.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "unidb", bin_name = "unidb", version = get_version())]
#[command(about = "Interactive in-memory student and faculty database", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to $UNIDB_HOME, then the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Record store backing the registry: linear or indexed
    #[arg(long, value_name = "STORE")]
    pub store: Option<StoreKind>,

    /// Load the sample roster before showing the menu
    #[arg(long)]
    pub sample: bool,

    /// Skip delete and clear confirmations
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen on start
    #[arg(long)]
    pub no_clear: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the effective configuration and exit
    #[arg(long, conflicts_with = "write_config")]
    pub show_config: bool,

    /// Save the effective configuration to the config directory and exit
    #[arg(long)]
    pub write_config: bool,
}
