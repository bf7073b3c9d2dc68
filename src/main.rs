//! readme-indexer - Keep a project README's index of sub-READMEs up to date
//!
//! readme-indexer:
//! - Finds every README.md under the root (skipping VCS metadata)
//! - Reads the `---` front matter block at the top of each one
//! - Renders title/description/authors into a Markdown table
//! - Splices the table between marker comments in the root README

use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod frontmatter;

fn main() {
    let cli = cli::Cli::parse();
    cli::init_tracing(&cli);

    if let Err(err) = cli::run(cli) {
        cli::report(&err);
        std::process::exit(1);
    }
}
