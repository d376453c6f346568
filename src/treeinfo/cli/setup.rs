use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("TREEINFO_GIT_HASH");
    const IS_RELEASE: &str = env!("TREEINFO_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "treeinfo", bin_name = "treeinfo", version = get_version())]
#[command(about = "Annotate paths in a directory tree with .info files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root of the annotated tree (defaults to the current directory)
    #[arg(short = 'C', long = "root", global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Name of the info files (overrides config)
    #[arg(long, global = true, value_name = "NAME")]
    pub info_file: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the annotation in effect for every annotated path
    Gather {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Report problems in info files
    Validate {
        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Remove invalid, duplicate and overridden annotations
    Clean {
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Move annotations into the info file closest to their path
    Distribute {
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Annotate a path
    Add {
        /// Path to annotate, relative to the root
        path: String,

        /// Annotation text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Change the annotation in effect for a path
    Update {
        path: String,

        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Remove the annotation in effect for a path
    #[command(alias = "rm")]
    Remove { path: String },

    /// Show the annotation in effect for a path
    Show { path: String },
}
