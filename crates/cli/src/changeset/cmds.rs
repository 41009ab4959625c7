/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::pin::Pin;

use ::rpc::cli::{CubCliError, CubCliResult, OutputFormat};
use ::rpc::types::{ChangeSet, CreateChangeSetRequest};
use prettytable::{Table, row};

use super::args::{CreateArgs, DeleteArgs, ListArgs, ShowArgs};
use crate::cfg::runtime::RuntimeConfig;
use crate::rpc::ApiClient;
use crate::{async_write, async_write_table_as_csv, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

fn changesets_table(changesets: &[ChangeSet]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Slug", "Display Name", "Description", "Created At"]);
    for changeset in changesets {
        table.add_row(row![
            changeset.slug,
            changeset.display_name,
            changeset.description,
            changeset.created_at
        ]);
    }
    table
}

async fn print_changesets(
    changesets: &[ChangeSet],
    format: OutputFormat,
    output: &mut Output,
) -> CubCliResult<()> {
    match format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(changesets)?)?
        }
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(changesets)?)?,
        OutputFormat::Csv => {
            let table = changesets_table(changesets);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", changesets_table(changesets))?,
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
    let changesets = api_client.0.list_changesets(space.space_id).await?;
    print_changesets(&changesets, config.format, output).await
}

pub async fn show(
    args: ShowArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let changeset = api_client
        .0
        .get_changeset(space.space_id, &args.slug)
        .await?;
    print_changesets(std::slice::from_ref(&changeset), config.format, output).await
}

pub async fn create(
    args: CreateArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let changeset = api_client
        .0
        .create_changeset(
            space.space_id,
            &CreateChangeSetRequest {
                slug: args.slug,
                display_name: args.display_name,
                description: args.description,
            },
        )
        .await?;
    println!("Change set {} created successfully.", changeset.slug);
    Ok(())
}

pub async fn delete(
    args: DeleteArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let changeset = api_client
        .0
        .get_changeset(space.space_id, &args.slug)
        .await?;
    api_client
        .0
        .delete_changeset(space.space_id, changeset.change_set_id)
        .await?;
    println!("Change set {} deleted successfully.", changeset.slug);
    Ok(())
}
