// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Level configuration.
//!
//! A level config is a JSON object naming the level layout file plus optional projection and
//! compile settings. Unknown keys are ignored, so a full game config (waves, towers, mana) can
//! be passed as-is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_TILE_SIZE: i32 = 32;
/// Centers a 20px sprite inside a 32px tile.
pub const DEFAULT_SPRITE_OFFSET: i32 = 6;
pub const DEFAULT_HEADER_HEIGHT: i32 = 40;

/// Tile-to-pixel scaling owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub tile_size: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub header_height: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            offset_x: DEFAULT_SPRITE_OFFSET,
            offset_y: DEFAULT_SPRITE_OFFSET,
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub grid_size: usize,
    /// Caps enumeration passes; `None` derives the cap from the grid.
    pub max_passes: Option<usize>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { grid_size: DEFAULT_GRID_SIZE, max_passes: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelConfig {
    /// Level text file, relative to the config file's directory.
    pub layout: PathBuf,
    #[serde(default)]
    pub grid_size: Option<usize>,
    #[serde(default)]
    pub max_passes: Option<usize>,
    #[serde(default)]
    pub projection: Option<ProjectionConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid level config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LevelConfig {
    pub fn from_json(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(raw)
            .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
    }

    /// Reads a config file and resolves `layout` against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let mut config = Self::from_json(&raw, path)?;
        if config.layout.is_relative() {
            if let Some(dir) = path.parent() {
                config.layout = dir.join(&config.layout);
            }
        }
        Ok(config)
    }

    /// Settings in this file win over `base`.
    pub fn compile_options(&self, base: CompileOptions) -> CompileOptions {
        CompileOptions {
            grid_size: self.grid_size.unwrap_or(base.grid_size),
            max_passes: self.max_passes.or(base.max_passes),
        }
    }

    pub fn projection_or(&self, base: ProjectionConfig) -> ProjectionConfig {
        self.projection.unwrap_or(base)
    }
}
