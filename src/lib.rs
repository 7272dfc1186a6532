// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gridroute: load-time route compiler for tile-grid levels.
//!
//! A level is a square grid of symbols (` ` empty, `S` obstacle, `W` goal, `X` path). Compiling
//! it classifies every tile, finds the branch points of the path network and computes one
//! deterministic route from every boundary entry point to the goal, projected into pixel
//! waypoints for movement code.

pub mod compile;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod render;
pub mod route;

pub use compile::{compile_level, CompiledLevel, LevelReport, RouteReport};
pub use config::{CompileOptions, LevelConfig, ProjectionConfig};
pub use error::CompileError;
