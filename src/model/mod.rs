// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types shared by ingestion, routing and projection.

pub mod coord;
pub mod tile;

pub use coord::{Coordinate, Direction};
pub use tile::{EntryPoint, SymbolGrid, TileKind};
