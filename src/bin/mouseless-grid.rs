//! mouseless-grid - terminal front-end for the grid editor
//!
//! Loads the stored layouts (or the defaults), applies the requested edit,
//! saves, and prints both levels, the primary grid and the subgrid.
//!
//! ```bash
//! mouseless-grid show
//! mouseless-grid set level2 --letters "QWERT ASDFG ZXCVB" --columns 5 --rows 3
//! mouseless-grid reset
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use mouseless_grid::logging::LogLevel;
use mouseless_grid::{
    EditorConfig, GridEditor, GridRenderer, LayoutSlot, LevelStore, Logger, RendererSettings,
    Result, load_or_default, save_logged,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// Outer layout; its letter is the first of every pair
    Level1,
    /// Inner layout nested inside every Level 1 cell
    Level2,
    /// Standalone subgrid
    Subgrid,
}

impl From<LayoutArg> for LayoutSlot {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Level1 => LayoutSlot::Level1,
            LayoutArg::Level2 => LayoutSlot::Level2,
            LayoutArg::Subgrid => LayoutSlot::Subgrid,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the layouts and the grids generated from them
    Show,
    /// Change one layout, save it, and print the result
    Set {
        #[arg(value_enum)]
        layout: LayoutArg,

        /// Letter blocks separated by whitespace
        #[arg(long)]
        letters: Option<String>,

        /// Column count (values below 1 are raised to 1)
        #[arg(long)]
        columns: Option<usize>,

        /// Row count (values below 1 are raised to 1)
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Restore the default layouts
    Reset,
    /// Print the stored layouts as JSON
    Export,
}

#[derive(Parser)]
#[command(name = "mouseless-grid")]
#[command(about = "Edit and preview Mouseless letter grid layouts", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the layouts are stored in
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// JSON-lines log file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let logger = config.build_logger()?;
    let store = config.file_store();
    let mut stdout = io::stdout().lock();
    execute(
        cli.command.unwrap_or(Command::Show),
        &config,
        &store,
        &logger,
        &mut stdout,
    )
}

/// Apply one command against `store` and write its output to `out`.
fn execute(
    command: Command,
    config: &EditorConfig,
    store: &dyn LevelStore,
    logger: &Logger,
    out: &mut impl Write,
) -> Result<()> {
    let key = config.storage_key.as_str();
    let levels = load_or_default(store, key, Some(logger));
    let mut editor = GridEditor::with_logger(levels, logger.clone());

    let save = match command {
        Command::Show => false,
        Command::Export => {
            let json = serde_json::to_string_pretty(editor.levels()).map_err(io::Error::from)?;
            writeln!(out, "{json}")?;
            return Ok(());
        }
        // Always written: the stored entry may be unreadable even when the
        // loaded levels already equal the defaults.
        Command::Reset => {
            editor.reset();
            true
        }
        Command::Set {
            layout,
            letters,
            columns,
            rows,
        } => {
            let slot = LayoutSlot::from(layout);
            let mut changed = false;
            if let Some(letters) = letters {
                changed |= editor.set_letters(slot, letters);
            }
            if let Some(columns) = columns {
                changed |= editor.set_columns(slot, columns);
            }
            if let Some(rows) = rows {
                changed |= editor.set_rows(slot, rows);
            }
            changed
        }
    };

    if save {
        save_logged(store, key, editor.levels(), Some(logger));
    }

    let renderer = GridRenderer::new(RendererSettings {
        color: config.color,
        ..RendererSettings::default()
    });
    renderer.render_editor(out, &editor)?;

    let _ = logger.log_event(editor.metrics_snapshot().to_log_event("mouseless::metrics"));
    if editor.has_errors() {
        let _ = logger.log(LogLevel::Info, "mouseless::cli", "exited_with_invalid_layouts");
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<EditorConfig> {
    let mut config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    if let Some(store) = &cli.store {
        config.store_dir = store.clone();
    }
    if let Some(log) = &cli.log {
        config.log_path = Some(log.clone());
    }
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}
