//! # bpfembed — eBPF byte-code embedding tool
//!
//! Compiles an eBPF C source (via an external clang/llc pipeline) or a
//! hand-written assembly file (via a legacy external assembler) into a raw
//! byte-code blob, emitted as a standalone binary and as a C header
//! embedding the blob as a byte-string literal.

use clap::{CommandFactory, Parser};

use bpfembed_cli::cli::Cli;
use bpfembed_cli::run;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let Some(config) = cli.into_config() else {
        // No input mode selected: usage and exit 1, nothing touched on disk.
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    run::execute(&config)
}
