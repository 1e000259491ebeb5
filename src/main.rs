//! vendorgrid - Entry Point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use vendorgrid::config::{
    apply_cli_overrides, apply_env_overrides, default_layout_path, load_config_with_precedence,
    merge_config, parse_sort_column,
};
use vendorgrid::export::XlsxSink;
use vendorgrid::integration::{execute, TableCommand};
use vendorgrid::model::{default_columns, ColumnId, RowId};
use vendorgrid::source::JsonFileSource;
use vendorgrid::state::{LayoutManager, TableOptions};

/// vendorgrid - sortable, paginated purchase-order table with a persisted layout
#[derive(Parser, Debug)]
#[command(name = "vendorgrid")]
#[command(version)]
#[command(about = "Sort, page, select and export purchase-order rows with a persisted column layout")]
pub struct Args {
    /// JSON array of rows (built-in sample rows if not provided)
    #[arg(long, global = true)]
    pub rows: Option<PathBuf>,

    /// Layout JSON file (default: <data dir>/vendorgrid/layout.json)
    #[arg(long, global = true)]
    pub layout: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Page to show (1-based; clamped to the last page)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Rows per page
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Sort column id (vendor, status, amount, createdDate, initiatedBy)
    #[arg(short, long, global = true, value_parser = parse_sort_column)]
    pub sort: Option<ColumnId>,

    /// Sort descending
    #[arg(long, global = true)]
    pub desc: bool,

    /// Viewport width in pixels, for responsive column visibility
    #[arg(long, global = true)]
    pub viewport: Option<u32>,

    /// What to do; `show` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Table operations; each run performs one and prints the result.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current page (default)
    Show,
    /// Toggle selection of the given row ids
    Select {
        /// Row ids to toggle
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Select every row on the page, or deselect them if all are selected
    SelectPage,
    /// Deselect all rows on every page
    ClearSelection,
    /// Move a column; indices count reorderable columns from 0
    Move {
        /// Current position among reorderable columns
        from: usize,
        /// Target position among reorderable columns
        to: usize,
    },
    /// Resize a column by a pixel delta
    Resize {
        /// Column id to resize
        column: ColumnId,
        /// Pixels to add; negative shrinks (floored at the minimum width)
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    /// Export the current page (or the selection) to an .xlsx workbook
    Export {
        /// Export all selected rows instead of the current page
        #[arg(long)]
        selected: bool,
        /// Output directory (overrides export_dir from the config file)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file)?;
        let with_env = apply_env_overrides(merged)?;
        apply_cli_overrides(
            with_env,
            args.page_size.map(|n| n as usize),
            args.sort,
            args.desc,
            args.viewport,
        )?
    };

    vendorgrid::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let layout_path = args.layout.clone().unwrap_or_else(default_layout_path);
    let source = JsonFileSource::new(args.rows.clone(), layout_path);
    let options = TableOptions {
        page_size: config.page_size,
        min_column_width: config.min_column_width,
        sort: config.sort,
        columns: default_columns(),
    };

    let mut manager = LayoutManager::mount(source, options)?;
    manager.load_layout();
    if let Some(page) = args.page {
        manager.go_to_page(page as usize);
    }

    let mut export_dir = config.export_dir.clone();
    let command = match args.command.unwrap_or(Command::Show) {
        Command::Show => TableCommand::Show,
        Command::Select { ids } => TableCommand::Select(
            ids.into_iter()
                .map(RowId::new)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Command::SelectPage => TableCommand::SelectPage,
        Command::ClearSelection => TableCommand::ClearSelection,
        Command::Move { from, to } => TableCommand::Move { from, to },
        Command::Resize { column, delta } => TableCommand::Resize { column, delta },
        Command::Export { selected, out } => {
            if let Some(out) = out {
                export_dir = out;
            }
            TableCommand::Export { selected }
        }
    };

    let output = execute(
        &mut manager,
        command,
        config.viewport_width,
        &export_dir,
        &mut XlsxSink::new(),
    )?;
    print!("{output}");

    Ok(())
}
