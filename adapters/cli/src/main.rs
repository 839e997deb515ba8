#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for listing, exporting and checking tank arenas.

mod layout_transfer;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tank_arena_core::{CellCoord, Glyph, MapData, MapId, TileKind};
use tank_arena_system_levels::Catalog;
use tank_arena_system_parsing::parse;
use tank_arena_system_validation::validate_map;
use tracing::{debug, info, Level};

/// Theme assigned to layouts loaded from plain text files.
const CUSTOM_THEME: &str = "custom";

#[derive(Debug, Parser)]
#[command(name = "tank-arena", version, about = "Inspect and export tank arena maps")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List every catalog map.
    List,
    /// Print the layout of a catalog map.
    Show {
        /// Map id or name.
        map: String,
        /// Print decoded numeric tile ids instead of glyphs.
        #[arg(long)]
        tiles: bool,
    },
    /// Export catalog maps.
    Export {
        /// Output format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Restrict the export to a single map id.
        #[arg(long)]
        id: Option<u32>,
    },
    /// Parse a layout file or transfer string and summarise it.
    Inspect {
        /// File holding one layout row per line, or a transfer string.
        path: PathBuf,
    },
    /// Check a layout file or transfer string against the arena rules.
    Validate {
        /// File holding one layout row per line, or a transfer string.
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    /// Pretty-printed JSON array of map records.
    Json,
    /// One `arena:v1` transfer string per line.
    Transfer,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        CliCommand::List => list(&Catalog::build()?),
        CliCommand::Show { map, tiles } => show(&Catalog::build()?, &map, tiles),
        CliCommand::Export { format, id } => export(&Catalog::build()?, format, id),
        CliCommand::Inspect { path } => inspect(&path),
        CliCommand::Validate { path } => check(&path),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn list(catalog: &Catalog) -> Result<()> {
    for map in catalog.maps() {
        println!(
            "{:>2}  {:<16} {:<10} checkpoints={}",
            map.id().get(),
            map.name(),
            map.theme(),
            map.count(Glyph::Checkpoint)
        );
    }
    Ok(())
}

fn show(catalog: &Catalog, selector: &str, tiles: bool) -> Result<()> {
    let map = select(catalog, selector)
        .with_context(|| format!("no catalog map matches '{selector}'"))?;
    info!(id = map.id().get(), name = map.name(), "showing map");

    if tiles {
        let parsed = parse(map.layout());
        for row in parsed.tiles.iter_rows() {
            let line: String = row.iter().map(|tile| char::from(b'0' + tile.id())).collect();
            println!("{line}");
        }
    } else {
        for row in map.layout() {
            println!("{row}");
        }
    }
    Ok(())
}

fn export(catalog: &Catalog, format: ExportFormat, id: Option<u32>) -> Result<()> {
    let maps: Vec<&MapData> = match id {
        Some(id) => vec![catalog
            .get(MapId::new(id))
            .with_context(|| format!("no catalog map has id {id}"))?],
        None => catalog.maps().iter().collect(),
    };
    debug!(count = maps.len(), ?format, "exporting maps");

    match format {
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(&maps).context("failed to serialise maps")?;
            println!("{json}");
        }
        ExportFormat::Transfer => {
            for map in maps {
                let encoded = layout_transfer::encode(map)
                    .with_context(|| format!("failed to encode '{}'", map.name()))?;
                println!("{encoded}");
            }
        }
    }
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let map = load(path)?;
    let parsed = parse(map.layout());

    println!("name:          {}", map.name());
    println!(
        "dimensions:    {}x{}",
        parsed.tiles.columns(),
        parsed.tiles.rows()
    );
    match parsed.player_spawn {
        Some(cell) => println!("player spawn:  {}", format_cell(cell)),
        None => println!("player spawn:  none"),
    }
    println!("enemy spawns:  {}", format_cells(&parsed.enemy_spawns));
    println!("checkpoints:   {}", format_cells(&parsed.checkpoints));

    let counts: Vec<String> = [
        ("ground", TileKind::Ground),
        ("wall", TileKind::Wall),
        ("brick", TileKind::Brick),
        ("grass", TileKind::Grass),
        ("water", TileKind::Water),
    ]
    .iter()
    .map(|(label, kind)| format!("{label}={}", parsed.tiles.count(*kind)))
    .collect();
    println!("tiles:         {}", counts.join(" "));
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let map = load(path)?;
    validate_map(&map).with_context(|| format!("{} is not a playable arena", path.display()))?;
    println!("{}: ok", path.display());
    Ok(())
}

fn select<'a>(catalog: &'a Catalog, selector: &str) -> Option<&'a MapData> {
    match selector.parse::<u32>() {
        Ok(id) => catalog.get(MapId::new(id)),
        Err(_) => catalog.find_by_name(selector),
    }
}

/// Reads a map from a transfer string or a plain layout file.
fn load(path: &Path) -> Result<MapData> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    // Stray non-UTF-8 bytes become U+FFFD, which the parser decodes as ground.
    let contents = String::from_utf8_lossy(&bytes);

    let trimmed = contents.trim();
    if trimmed.starts_with(layout_transfer::SNAPSHOT_HEADER) {
        let map = layout_transfer::decode(trimmed)
            .with_context(|| format!("failed to decode transfer string in {}", path.display()))?;
        info!(name = map.name(), "loaded transfer string");
        return Ok(map);
    }

    let mut layout: Vec<String> = contents
        .lines()
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect();
    while layout.last().is_some_and(String::is_empty) {
        let _ = layout.pop();
    }

    let name = path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    );
    info!(name = %name, rows = layout.len(), "loaded layout file");
    Ok(MapData::new(MapId::new(0), name, CUSTOM_THEME, layout))
}

fn format_cell(cell: CellCoord) -> String {
    format!("({},{})", cell.column(), cell.row())
}

fn format_cells(cells: &[CellCoord]) -> String {
    if cells.is_empty() {
        return "none".to_owned();
    }
    cells
        .iter()
        .map(|&cell| format_cell(cell))
        .collect::<Vec<_>>()
        .join(" ")
}
