// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API response types

use serde::{Deserialize, Serialize};

/// Response body for POST /api/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatApiResponse {
    /// Rendered answer text, possibly containing citation anchor markup
    pub response: String,
}
