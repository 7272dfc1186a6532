// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::enumerate::Route;
use crate::config::ProjectionConfig;
use crate::error::{CompileError, Result};
use crate::model::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl ProjectionConfig {
    /// Top-left sprite anchor of `coord` in screen pixels, or `None` when the result does not
    /// fit in `i32`.
    pub fn project(&self, coord: Coordinate) -> Option<PixelPoint> {
        let x = coord.column().checked_mul(self.tile_size)?.checked_add(self.offset_x)?;
        let y = coord
            .row()
            .checked_mul(self.tile_size)?
            .checked_add(self.offset_y)?
            .checked_add(self.header_height)?;
        Some(PixelPoint::new(x, y))
    }

    /// Inverse of [`ProjectionConfig::project`]. Returns `None` for points that are not
    /// exactly on a projected tile anchor.
    pub fn unproject(&self, point: PixelPoint) -> Option<Coordinate> {
        if self.tile_size <= 0 {
            return None;
        }
        let dx = point.x.checked_sub(self.offset_x)?;
        let dy = point.y.checked_sub(self.offset_y)?.checked_sub(self.header_height)?;
        if dx % self.tile_size != 0 || dy % self.tile_size != 0 {
            return None;
        }
        Some(Coordinate::new(dx / self.tile_size, dy / self.tile_size))
    }
}

/// Pixel waypoints for one route: spawn point first, goal last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaypointPath {
    entry: Coordinate,
    points: Vec<PixelPoint>,
}

impl WaypointPath {
    pub fn entry(&self) -> Coordinate {
        self.entry
    }

    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    pub fn spawn_point(&self) -> Option<PixelPoint> {
        self.points.first().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn project_route(route: &Route, config: &ProjectionConfig) -> Result<WaypointPath> {
    let entry = route.entry();
    let mut points = Vec::<PixelPoint>::with_capacity(route.len() + 1);
    for tile in std::iter::once(entry.spawn()).chain(route.tiles().iter().copied()) {
        let point = config.project(tile).ok_or(CompileError::ProjectionOverflow { tile })?;
        points.push(point);
    }
    Ok(WaypointPath { entry: entry.coordinate(), points })
}

pub fn project_routes(routes: &[Route], config: &ProjectionConfig) -> Result<Vec<WaypointPath>> {
    routes.iter().map(|route| project_route(route, config)).collect()
}
