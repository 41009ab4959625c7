/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::pin::Pin;

use ::rpc::cli::{CubCliError, CubCliResult, OutputFormat};
use ::rpc::types::{CreateLinkRequest, Link};
use prettytable::{Table, row};

use super::args::{CreateArgs, DeleteArgs, ListArgs, ShowArgs};
use crate::awaiting;
use crate::cfg::runtime::RuntimeConfig;
use crate::rpc::ApiClient;
use crate::{async_write, async_write_table_as_csv, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

fn links_table(links: &[Link]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Slug", "From Unit", "To Unit", "Created At"]);
    for link in links {
        table.add_row(row![
            link.slug,
            link.from_unit_id,
            link.to_unit_id,
            link.created_at
        ]);
    }
    table
}

async fn print_links(
    links: &[Link],
    format: OutputFormat,
    output: &mut Output,
) -> CubCliResult<()> {
    match format {
        OutputFormat::Json => async_writeln!(output, "{}", serde_json::to_string_pretty(links)?)?,
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(links)?)?,
        OutputFormat::Csv => {
            let table = links_table(links);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", links_table(links))?,
    }
    Ok(())
}

pub async fn list(
    args: ListArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let links = api_client.0.list_links(space.space_id).await?;
    print_links(&links, config.format, output).await
}

pub async fn show(
    args: ShowArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let link = api_client.0.get_link(space.space_id, &args.slug).await?;
    print_links(std::slice::from_ref(&link), config.format, output).await
}

pub async fn create(
    args: CreateArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let link = api_client
        .0
        .create_link(
            space.space_id,
            &CreateLinkRequest {
                slug: args.slug,
                from_unit_slug: args.from_unit,
                to_unit_slug: args.to_unit,
                to_space_slug: args.to_space,
            },
        )
        .await?;

    if args.wait {
        // Link creation fires triggers on the upstream unit.
        let unit = api_client
            .0
            .get_unit(space.space_id, link.from_unit_id)
            .await?;
        if !config.quiet {
            println!("Waiting for triggers to complete on unit {}...", unit.slug);
        }
        awaiting::await_triggers_removal(unit, api_client).await?;
    }

    println!("Link {} created successfully.", link.slug);
    Ok(())
}

pub async fn delete(
    args: DeleteArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let link = api_client.0.get_link(space.space_id, &args.slug).await?;
    api_client.0.delete_link(space.space_id, link.link_id).await?;
    println!("Link {} deleted successfully.", link.slug);
    Ok(())
}
