// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod chat;
pub mod errors;
pub mod http_server;
pub mod rate_limit;

pub use chat::{chat_handler, ChatApiRequest, ChatApiResponse};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState};
pub use rate_limit::ApiRateLimiter;
