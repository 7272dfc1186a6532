// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gridroute CLI entrypoint.
//!
//! Compiles one or more levels and prints their routes. Each argument is either a level text
//! file or a `.json` level config naming one. Levels compile in parallel; output keeps the
//! argument order.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gridroute::config::{
    DEFAULT_GRID_SIZE, DEFAULT_HEADER_HEIGHT, DEFAULT_SPRITE_OFFSET, DEFAULT_TILE_SIZE,
};
use gridroute::format::read_level_file;
use gridroute::model::Coordinate;
use gridroute::render::{render_path_network, render_route_overlay};
use gridroute::route::PixelPoint;
use gridroute::{compile_level, CompileOptions, CompiledLevel, LevelConfig, LevelReport, ProjectionConfig};

const MAX_GRID_SIZE: usize = 4096;
const MAX_PIXELS: i64 = 1 << 16;

fn parse_grid_size(raw: &str) -> Result<usize, String> {
    let size = raw.trim().parse::<usize>().map_err(|err| err.to_string())?;
    if (1..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("must be between 1 and {MAX_GRID_SIZE}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Compile tile-grid levels into per-entry routes.
#[derive(Parser, Debug)]
#[command(name = "gridroute")]
#[command(about = "Compile tile-grid levels into per-entry routes")]
struct Args {
    /// Level text files or JSON level configs
    #[arg(required = true)]
    levels: Vec<PathBuf>,

    /// Grid width and height in tiles
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_grid_size)]
    grid_size: usize,

    /// Tile edge length in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_TILE_SIZE,
        value_parser = clap::value_parser!(i32).range(1..=MAX_PIXELS)
    )]
    tile_size: i32,

    /// Horizontal pixel offset added to every waypoint
    #[arg(
        long,
        default_value_t = DEFAULT_SPRITE_OFFSET,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-MAX_PIXELS..=MAX_PIXELS)
    )]
    offset_x: i32,

    /// Vertical pixel offset added to every waypoint
    #[arg(
        long,
        default_value_t = DEFAULT_SPRITE_OFFSET,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-MAX_PIXELS..=MAX_PIXELS)
    )]
    offset_y: i32,

    /// Height of the header bar above the grid
    #[arg(
        long,
        default_value_t = DEFAULT_HEADER_HEIGHT,
        value_parser = clap::value_parser!(i32).range(0..=MAX_PIXELS)
    )]
    header_height: i32,

    /// Cap on route enumeration passes (derived from the grid by default)
    #[arg(long)]
    max_passes: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print each route drawn over the level (text format only)
    #[arg(long)]
    overlay: bool,

    /// Print the path network with junctions and corners (text format only)
    #[arg(long)]
    network: bool,

    /// Log enumeration passes to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn compile_options(&self) -> CompileOptions {
        CompileOptions { grid_size: self.grid_size, max_passes: self.max_passes }
    }

    fn projection(&self) -> ProjectionConfig {
        ProjectionConfig {
            tile_size: self.tile_size,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            header_height: self.header_height,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn is_config_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn compile_path(
    path: &Path,
    options: CompileOptions,
    projection: ProjectionConfig,
) -> anyhow::Result<CompiledLevel> {
    let (layout, options, projection) = if is_config_path(path) {
        let config = LevelConfig::load(path)?;
        let options = config.compile_options(options);
        let projection = config.projection_or(projection);
        (config.layout, options, projection)
    } else {
        (path.to_path_buf(), options, projection)
    };

    let symbols = read_level_file(&layout, options.grid_size)
        .with_context(|| format!("failed to read level {}", layout.display()))?;
    compile_level(&symbols, &options, &projection)
        .with_context(|| format!("failed to compile level {}", layout.display()))
}

fn write_coordinate(out: &mut impl Write, coord: Coordinate) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    out.write_all(b"(")?;
    out.write_all(buf.format(coord.column()).as_bytes())?;
    out.write_all(b", ")?;
    out.write_all(buf.format(coord.row()).as_bytes())?;
    out.write_all(b")")
}

fn write_point(out: &mut impl Write, point: PixelPoint) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    out.write_all(buf.format(point.x).as_bytes())?;
    out.write_all(b",")?;
    out.write_all(buf.format(point.y).as_bytes())
}

#[derive(Debug, Clone, Copy, Default)]
struct TextExtras {
    overlay: bool,
    network: bool,
}

fn write_text_report(
    out: &mut impl Write,
    label: &str,
    level: &CompiledLevel,
    extras: TextExtras,
) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    write!(out, "{label}: ")?;
    out.write_all(buf.format(level.entry_count()).as_bytes())?;
    out.write_all(b" entries, goal ")?;
    write_coordinate(out, level.grid().goal())?;
    out.write_all(b", ")?;
    out.write_all(buf.format(level.adjacency().forks().len()).as_bytes())?;
    out.write_all(b" forks\n")?;

    if extras.network {
        for line in render_path_network(level.grid(), level.adjacency()).lines() {
            writeln!(out, "  |{line}")?;
        }
    }

    for (route, waypoints) in level.routes().iter().zip(level.waypoints()) {
        out.write_all(b"  entry ")?;
        write_coordinate(out, route.entry().coordinate())?;
        out.write_all(b" spawn ")?;
        write_coordinate(out, route.entry().spawn())?;
        out.write_all(b":")?;
        for point in waypoints.points() {
            out.write_all(b" ")?;
            write_point(out, *point)?;
        }
        out.write_all(b"\n")?;

        if extras.overlay {
            for line in render_route_overlay(level.grid(), route).lines() {
                writeln!(out, "    |{line}")?;
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct LevelOutput<'a> {
    level: &'a str,
    #[serde(flatten)]
    report: LevelReport,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = args.compile_options();
    let projection = args.projection();
    let results = args
        .levels
        .par_iter()
        .map(|path| compile_path(path, options, projection))
        .collect::<Vec<_>>();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for (path, result) in args.levels.iter().zip(results) {
        let label = path.display().to_string();
        let level = match result {
            Ok(level) => level,
            Err(err) => {
                eprintln!("gridroute: {err:#}");
                failed = true;
                continue;
            }
        };

        let written = match args.format {
            OutputFormat::Text => {
                let extras = TextExtras { overlay: args.overlay, network: args.network };
                write_text_report(&mut out, &label, &level, extras)
            }
            OutputFormat::Json => {
                let output = LevelOutput { level: &label, report: level.report() };
                serde_json::to_writer_pretty(&mut out, &output)
                    .map_err(io::Error::from)
                    .and_then(|()| out.write_all(b"\n"))
            }
        };
        if let Err(err) = written {
            eprintln!("gridroute: failed to write output: {err}");
            return ExitCode::FAILURE;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{is_config_path, write_text_report, Args, OutputFormat, TextExtras};
    use gridroute::model::SymbolGrid;
    use gridroute::{compile_level, CompileOptions, ProjectionConfig};

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["gridroute", "level1.txt"]).expect("parse args");
        assert_eq!(args.levels.len(), 1);
        assert_eq!(args.compile_options(), CompileOptions::default());
        assert_eq!(args.projection(), ProjectionConfig::default());
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.overlay);
    }

    #[test]
    fn parses_projection_overrides() {
        let args = Args::try_parse_from([
            "gridroute",
            "--tile-size",
            "16",
            "--offset-x",
            "-4",
            "--header-height",
            "0",
            "--grid-size",
            "12",
            "--max-passes",
            "50",
            "--format",
            "json",
            "a.txt",
            "b.json",
        ])
        .expect("parse args");
        assert_eq!(args.levels.len(), 2);
        assert_eq!(args.compile_options(), CompileOptions { grid_size: 12, max_passes: Some(50) });
        let projection = args.projection();
        assert_eq!(projection.tile_size, 16);
        assert_eq!(projection.offset_x, -4);
        assert_eq!(projection.offset_y, 6);
        assert_eq!(projection.header_height, 0);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn requires_at_least_one_level() {
        Args::try_parse_from(["gridroute"]).unwrap_err();
    }

    #[rstest]
    #[case(&["--grid-size", "0"])]
    #[case(&["--grid-size", "1000000000"])]
    #[case(&["--tile-size", "0"])]
    #[case(&["--tile-size", "100000000"])]
    #[case(&["--header-height", "2147483647"])]
    #[case(&["--offset-x", "-100000000"])]
    fn rejects_out_of_range_sizes(#[case] flags: &[&str]) {
        let argv = std::iter::once("gridroute").chain(flags.iter().copied()).chain(["a.txt"]);
        Args::try_parse_from(argv).unwrap_err();
    }

    #[test]
    fn rejects_unknown_format() {
        Args::try_parse_from(["gridroute", "--format", "yaml", "a.txt"]).unwrap_err();
    }

    #[test]
    fn detects_config_paths() {
        assert!(is_config_path("levels/config.json".as_ref()));
        assert!(is_config_path("CONFIG.JSON".as_ref()));
        assert!(!is_config_path("level1.txt".as_ref()));
    }

    #[test]
    fn text_report_lists_entries_and_waypoints() {
        let symbols = SymbolGrid::from_rows(["   ", "XXW", "   "]);
        let level = compile_level(
            &symbols,
            &CompileOptions { grid_size: 3, max_passes: None },
            &ProjectionConfig { tile_size: 10, offset_x: 0, offset_y: 0, header_height: 0 },
        )
        .expect("compile");

        let mut out = Vec::<u8>::new();
        let extras = TextExtras { overlay: true, network: false };
        write_text_report(&mut out, "tiny", &level, extras).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "tiny: 1 entries, goal (2, 1), 0 forks\n  entry (0, 1) spawn (-1, 1): -10,10 0,10 10,10 20,10\n    |\n    |→→W\n"
        );
    }

    #[test]
    fn text_report_can_include_the_path_network() {
        let symbols = SymbolGrid::from_rows([" X ", "XXW", "   "]);
        let level = compile_level(
            &symbols,
            &CompileOptions { grid_size: 3, max_passes: None },
            &ProjectionConfig { tile_size: 10, offset_x: 0, offset_y: 0, header_height: 0 },
        )
        .expect("compile");

        let mut out = Vec::<u8>::new();
        let extras = TextExtras { overlay: false, network: true };
        write_text_report(&mut out, "bend", &level, extras).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("bend: 2 entries, goal (2, 1), 0 forks\n  | │\n  |─┘W\n"), "{text}");
    }
}
