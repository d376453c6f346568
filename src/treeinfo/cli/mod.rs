//! # CLI Layer
//!
//! This module is **one possible UI client** for treeinfo. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and format output
//! - `print` module: rendering of `CmdResult` data

mod print;
mod setup;

use clap::Parser;
use print::{line_width, print_messages, render_gathered, render_validation};
use setup::{Cli, Commands};
use std::path::PathBuf;
use tracing::debug;
use treeinfo::api::{CmdResult, InfoApi};
use treeinfo::config::TreeinfoConfig;
use treeinfo::error::Result;
use treeinfo::store::fs::FsStore;

struct AppContext {
    api: InfoApi<FsStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Gather { json } => handle_gather(&ctx, json),
        Commands::Validate { json } => handle_validate(&ctx, json),
        Commands::Clean { dry_run } => handle_clean(&ctx, dry_run),
        Commands::Distribute { dry_run } => handle_distribute(&ctx, dry_run),
        Commands::Add { path, text } => print_result(&ctx.api.add(&path, &text)?),
        Commands::Update { path, text } => print_result(&ctx.api.update(&path, &text)?),
        Commands::Remove { path } => print_result(&ctx.api.remove(&path)?),
        Commands::Show { path } => handle_show(&ctx, &path),
    }
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "treeinfo=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let global_dir = TreeinfoConfig::global_dir();
    let config =
        TreeinfoConfig::load(&root, global_dir.as_deref())?.with_info_file(cli.info_file.clone());
    debug!(root = %root.display(), info_file = %config.info_file, "starting");

    let store = FsStore::new(root)
        .with_info_file_name(&config.info_file)
        .with_skip_dirs(config.skip_dirs);

    Ok(AppContext {
        api: InfoApi::new(store),
    })
}

fn print_result(result: &CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_gather(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.gather()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.gathered)?);
        return Ok(());
    }
    print!("{}", render_gathered(&result.gathered, line_width()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_validate(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.validate()?;
    let Some(validation) = &result.validation else {
        return print_result(&result);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(validation)?);
    } else {
        print!("{}", render_validation(validation));
        print_messages(&result.messages);
    }

    if !validation.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_clean(ctx: &AppContext, dry_run: bool) -> Result<()> {
    let result = ctx.api.clean(dry_run)?;
    print_messages(&result.messages);
    for path in &result.deleted_files {
        println!("Deleted {}", path);
    }
    Ok(())
}

fn handle_distribute(ctx: &AppContext, dry_run: bool) -> Result<()> {
    let result = ctx.api.distribute(dry_run)?;
    print_messages(&result.messages);
    for path in &result.deleted_files {
        println!("Deleted {}", path);
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, path: &str) -> Result<()> {
    let result = ctx.api.show(path)?;
    for annotation in result.gathered.values() {
        println!("{}", annotation.text);
        debug!(
            source = %annotation.source_file,
            line = annotation.line_number,
            "annotation source"
        );
    }
    print_messages(&result.messages);
    Ok(())
}
