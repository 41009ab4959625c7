/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// ApiError enumerates failures of ConfigHub Service API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to construct HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("API token contains invalid characters")]
    InvalidToken,
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {path} returned {status}: {message}")]
    Status {
        method: &'static str,
        path: String,
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}
