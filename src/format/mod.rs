// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Level file ingestion.

pub mod level_text;

pub use level_text::{parse_level_text, read_level_file};
