/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::pin::Pin;

use ::rpc::cli::{CubCliError, CubCliResult, OutputFormat};

use crate::rpc::ApiClient;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub api_client: ApiClient,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig contains runtime configuration parameters extracted
// from CLI options. This should contain the entirety of any options
// that need to be leveraged by any downstream command handler.
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub page_size: usize,
    pub space: Option<String>,
    pub quiet: bool,
}

impl RuntimeConfig {
    /// Resolve the space slug for a command: an explicit --space on the
    /// subcommand wins over the session default.
    pub fn space_slug<'a>(&'a self, explicit: Option<&'a str>) -> CubCliResult<&'a str> {
        explicit.or(self.space.as_deref()).ok_or_else(|| {
            CubCliError::GenericError(
                "no space selected; pass --space or set CONFIGHUB_SPACE".to_string(),
            )
        })
    }
}
