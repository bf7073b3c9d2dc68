//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use crate::flows::index::{run_index, IndexOptions, WriteMode, DEFAULT_TARGET};

/// readme-indexer - regenerate a README index from front matter.
#[derive(Parser, Debug)]
#[command(name = "readme-indexer")]
#[command(
    author,
    version,
    about,
    long_about = r#"readme-indexer walks a project tree, reads the front matter of every
README.md it finds, and rewrites the index table kept between two marker
comments in the root README:

    <!-- AUTO-GENERATED-INDEX-START -->
    <!-- AUTO-GENERATED-INDEX-END -->

Front matter is a block at the very top of a file:

    ---
    title: Parser
    description: Tokenizer and grammar
    authors: Alice
    ---

Content outside the markers is left untouched. When the markers are missing
they are appended to the end of the file.

Examples:
    readme-indexer
    readme-indexer --root docs --output docs/README.md
    readme-indexer --check
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to scan (defaults to the current directory).\n\n\
Paths in the generated table are relative to this root."
    )]
    pub root: PathBuf,

    /// README file to update (relative to ROOT unless absolute).
    #[arg(
        long,
        short,
        default_value = DEFAULT_TARGET,
        value_name = "FILE",
        long_help = "README file whose marker region is regenerated.\n\n\
Relative paths are resolved against ROOT."
    )]
    pub output: PathBuf,

    /// Print the updated README to stdout instead of writing it.
    #[arg(
        long,
        conflicts_with = "check",
        long_help = "Print the updated README to stdout instead of writing it.\n\n\
Only errors are logged during a dry run, so the output can be redirected to a\n\
file. Set RUST_LOG to see more diagnostics."
    )]
    pub dry_run: bool,

    /// Exit with status 1 if the README index is out of date.
    #[arg(
        long,
        long_help = "Do not write anything. Exit with status 1 when regenerating the index\n\
would change the README. Intended for CI."
    )]
    pub check: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (-v for progress, -vv for per-file diagnostics).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn write_mode(&self) -> WriteMode {
        if self.dry_run {
            WriteMode::DryRun
        } else if self.check {
            WriteMode::Check
        } else {
            WriteMode::Write
        }
    }

    /// Log filter derived from the flags.
    ///
    /// Dry runs print the README on stdout, so diagnostics drop to errors only.
    fn log_filter(&self) -> &'static str {
        if self.quiet || self.dry_run {
            return "readme_indexer=error";
        }
        match self.verbose {
            0 => "readme_indexer=warn",
            1 => "readme_indexer=info",
            _ => "readme_indexer=debug",
        }
    }

    fn index_options(&self) -> IndexOptions {
        IndexOptions::new(&self.root)
            .with_target(self.root.join(&self.output))
            .with_mode(self.write_mode())
    }
}

/// Initialize tracing based on CLI flags.
///
/// Diagnostics go to stdout; `RUST_LOG` overrides the flag-derived filter.
pub fn init_tracing(cli: &Cli) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    let options = cli.index_options();

    let spliced = run_index(&options)
        .with_context(|| format!("Error updating {}", options.target.display()))?;

    if options.mode == WriteMode::DryRun {
        print!("{}", spliced.content);
    }

    Ok(())
}

/// Report a fatal error through the diagnostic log
pub fn report(err: &anyhow::Error) {
    error!("{err:#}");
}
