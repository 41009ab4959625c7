/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cfg::cli_options::{CliOptions, Commands};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::rpc::ApiClient;

mod async_write;
mod awaiting;
mod cfg;
mod changeset;
mod function;
mod generate_shell_complete;
mod link;
mod rpc;
mod space;
mod trigger;
mod unit;
mod version;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = CliOptions::parse();

    let client = ::rpc::ConfigHubClient::new(&opts.server, opts.token.as_deref())?;
    let ctx = RuntimeContext {
        api_client: ApiClient(client),
        config: RuntimeConfig {
            format: opts.output,
            page_size: opts.page_size,
            space: opts.space,
            quiet: opts.quiet,
        },
        output_file: Box::pin(tokio::io::stdout()),
    };

    match opts.command {
        Commands::Space(cmd) => cmd.dispatch(ctx).await?,
        Commands::Unit(cmd) => cmd.dispatch(ctx).await?,
        Commands::Link(cmd) => cmd.dispatch(ctx).await?,
        Commands::Trigger(cmd) => cmd.dispatch(ctx).await?,
        Commands::Changeset(cmd) => cmd.dispatch(ctx).await?,
        Commands::Function(cmd) => cmd.dispatch(ctx).await?,
        Commands::Version(cmd) => cmd.dispatch(ctx).await?,
        Commands::GenerateShellComplete(cmd) => cmd.dispatch(ctx).await?,
    }

    Ok(())
}
