// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One-shot level compilation: symbols in, classified tiles and pixel routes out.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{CompileOptions, ProjectionConfig};
use crate::error::Result;
use crate::model::{Coordinate, SymbolGrid};
use crate::route::{
    classify_tiles, enumerate_routes, project_routes, resolve_adjacency, Adjacency,
    ClassifiedGrid, PixelPoint, Route, WaypointPath,
};

/// Immutable routing data for one loaded level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledLevel {
    grid: ClassifiedGrid,
    adjacency: Adjacency,
    routes: Vec<Route>,
    waypoints: Vec<WaypointPath>,
    passes: usize,
}

impl CompiledLevel {
    pub fn grid(&self) -> &ClassifiedGrid {
        &self.grid
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Tile routes, one per entry point in row-major entry order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Pixel waypoints aligned with [`CompiledLevel::routes`].
    pub fn waypoints(&self) -> &[WaypointPath] {
        &self.waypoints
    }

    pub fn entry_count(&self) -> usize {
        self.routes.len()
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn report(&self) -> LevelReport {
        LevelReport {
            grid_size: self.grid.size(),
            goal: self.grid.goal(),
            entry_count: self.entry_count(),
            forks: self.adjacency.forks().iter().copied().collect(),
            routes: self
                .routes
                .iter()
                .zip(&self.waypoints)
                .map(|(route, waypoints)| RouteReport {
                    entry: route.entry().coordinate(),
                    spawn: route.entry().spawn(),
                    tiles: route.tiles().to_vec(),
                    waypoints: waypoints.points().to_vec(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub grid_size: usize,
    pub goal: Coordinate,
    pub entry_count: usize,
    pub forks: Vec<Coordinate>,
    pub routes: Vec<RouteReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub entry: Coordinate,
    pub spawn: Coordinate,
    pub tiles: Vec<Coordinate>,
    pub waypoints: Vec<PixelPoint>,
}

/// Runs classification, adjacency, enumeration and projection over `symbols`.
///
/// Any error fails the whole level; there is no partially routed result.
pub fn compile_level(
    symbols: &SymbolGrid,
    options: &CompileOptions,
    projection: &ProjectionConfig,
) -> Result<CompiledLevel> {
    let result = compile_level_inner(symbols, options, projection);
    if let Err(err) = &result {
        warn!(grid_size = options.grid_size, error = %err, "level compilation failed");
    }
    result
}

fn compile_level_inner(
    symbols: &SymbolGrid,
    options: &CompileOptions,
    projection: &ProjectionConfig,
) -> Result<CompiledLevel> {
    let grid = classify_tiles(symbols, options.grid_size)?;
    let adjacency = resolve_adjacency(&grid);
    let enumeration = enumerate_routes(&grid, &adjacency, options.max_passes)?;
    let passes = enumeration.passes();
    let routes = enumeration.into_routes();
    debug_assert!(routes.iter().all(|route| route.is_well_formed(&grid)));
    let waypoints = project_routes(&routes, projection)?;

    info!(
        entries = routes.len(),
        paths = grid.paths().len(),
        forks = adjacency.forks().len(),
        passes,
        "level compiled"
    );

    Ok(CompiledLevel { grid, adjacency, routes, waypoints, passes })
}
