// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Route compilation stages.
//!
//! Classification, adjacency, enumeration and projection run in that order; each stage only
//! reads the output of the previous ones.

pub mod adjacency;
pub mod classify;
pub mod enumerate;
pub mod project;

pub use adjacency::{resolve_adjacency, Adjacency, AdjacencyInfo};
pub use classify::{classify_tiles, ClassifiedGrid};
pub use enumerate::{default_max_passes, enumerate_routes, Enumeration, Route};
pub use project::{project_route, project_routes, PixelPoint, WaypointPath};
