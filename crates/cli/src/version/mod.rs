/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

use ::rpc::cli::CubCliResult;
pub use args::Opts;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for Opts {
    async fn dispatch(self, ctx: RuntimeContext) -> CubCliResult<()> {
        cmds::show_version(&self, &ctx.api_client, ctx.config.format).await
    }
}
