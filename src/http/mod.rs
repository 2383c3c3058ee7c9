// ABOUTME: HTTP layer: request values, the transport seam, the request pipeline, and token refresh
// ABOUTME: Everything that talks to the REST backend passes through RequestPipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

/// Authenticated request pipeline
pub mod pipeline;
/// Single-flight token refresh
pub mod refresh;
/// Request and response values
pub mod request;
/// Transport trait and reqwest implementation
pub mod transport;

pub use pipeline::RequestPipeline;
pub use refresh::{RefreshCoordinator, RefreshStatus, RefreshTicket};
pub use request::{ApiRequest, ApiResponse};
pub use transport::{build_http_client, ReqwestTransport, Transport, TransportError};
