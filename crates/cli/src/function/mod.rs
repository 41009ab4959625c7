/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod args;
pub mod cmds;


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
            Cmd::Do(args) => {
                cmds::invoke(args, &ctx.api_client, &ctx.config, &mut ctx.output_file).await
            }
        }
    }
}
