/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

use ::rpc::cli::CubCliResult;
pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CubCliResult<()> {
        match self {
            Cmd::List(args) => {
                cmds::list(args, &ctx.api_client, &ctx.config, &mut ctx.output_file).await
            }
            Cmd::Show(args) => {
                cmds::show(args, &ctx.api_client, &ctx.config, &mut ctx.output_file).await
            }
            Cmd::Create(args) => cmds::create(args, &ctx.api_client, &ctx.config).await,
            Cmd::Delete(args) => cmds::delete(args, &ctx.api_client, &ctx.config).await,
        }
    }
}
