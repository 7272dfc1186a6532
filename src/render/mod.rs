// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text diagnostics for compiled levels.
//!
//! Sprite and tile rendering belong to the game; this only draws plain-text overlays for
//! inspecting routes from the command line and in tests.

pub mod network;
pub mod overlay;

pub use network::{path_glyph, render_path_network};
pub use overlay::render_route_overlay;
