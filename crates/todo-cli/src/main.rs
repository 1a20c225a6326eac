use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use todo_core::{collect_memories, collect_sections, parse_day, today};
use todo_store::{Config, DayStore, Overrides};

#[derive(Parser)]
#[command(name = "todo", about = "a self-contained cli for managing TODO's")]
struct Cli {
    /// Directory holding the day documents
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Days to look back for memories, today included
    #[arg(long, global = true)]
    lookback: Option<u32>,

    /// Act as if today were this day (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = day_arg)]
    date: Option<NaiveDate>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open today's document, creating it with memories first (default)
    Open {
        /// Create the document but don't launch the editor
        #[arg(long)]
        no_edit: bool,
    },

    /// Print the memories block without writing anything
    Memories {
        /// Print live notes per day as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the day's document
    Path,
}

fn day_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_day(s).ok_or_else(|| format!("expected YYYY-MM-DD, got {s:?}"))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let overrides = Overrides {
        root: cli.root.clone(),
        lookback_days: cli.lookback,
    };
    let config = Config::load(&overrides).context("failed to load configuration")?;
    tracing::debug!(
        "root={}, lookback={}, editor={:?}",
        config.root.display(),
        config.lookback_days,
        config.editor
    );
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let day = cli.date.unwrap_or_else(today);

    match &cli.command {
        None => cmd_open(&config, day, false),
        Some(Commands::Open { no_edit }) => cmd_open(&config, day, *no_edit),
        Some(Commands::Memories { json }) => cmd_memories(&config, day, *json),
        Some(Commands::Path) => cmd_path(&config, day),
    }
}

fn cmd_open(config: &Config, day: NaiveDate, no_edit: bool) -> Result<()> {
    let store = DayStore::new(&config.root);
    store
        .ensure_root()
        .context("failed to create todo directory")?;

    let doc = store
        .open_or_create(day, config.lookback_days)
        .with_context(|| format!("failed to prepare document for {day}"))?;

    if no_edit {
        println!("{}", doc.path.display());
        return Ok(());
    }
    launch_editor(config, &doc.path)
}

fn launch_editor(config: &Config, path: &Path) -> Result<()> {
    let argv = config.editor_argv();
    let (program, args) = argv
        .split_first()
        .context("editor command is empty")?;

    tracing::info!("launching {} on {}", config.editor, path.display());
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor {program:?}"))?;

    if !status.success() {
        bail!("editor {program:?} exited with {status}");
    }
    Ok(())
}

fn cmd_memories(config: &Config, day: NaiveDate, json: bool) -> Result<()> {
    let store = DayStore::new(&config.root);

    if json {
        let sections = collect_sections(day, config.lookback_days, &store)
            .context("failed to collect memories")?;
        let out = serde_json::to_string_pretty(&sections).context("failed to serialize")?;
        println!("{out}");
    } else {
        let memories = collect_memories(day, config.lookback_days, &store)
            .context("failed to collect memories")?;
        print!("{memories}");
        if !memories.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn cmd_path(config: &Config, day: NaiveDate) -> Result<()> {
    let store = DayStore::new(&config.root);
    println!("{}", store.path_for(day).display());
    Ok(())
}
