/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::pin::Pin;

use ::rpc::cli::{CubCliError, CubCliResult, OutputFormat};
use ::rpc::types::{CreateSpaceRequest, Space};
use prettytable::{Table, row};

use super::args::{CreateArgs, DeleteArgs, ShowArgs};
use crate::rpc::ApiClient;
use crate::{async_write, async_write_table_as_csv, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

fn spaces_table(spaces: &[Space]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Slug", "Display Name", "Space ID", "Created At"]);
    for space in spaces {
        table.add_row(row![
            space.slug,
            space.display_name,
            space.space_id,
            space.created_at
        ]);
    }
    table
}

async fn print_spaces(
    spaces: &[Space],
    format: OutputFormat,
    output: &mut Output,
) -> CubCliResult<()> {
    match format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(spaces)?)?
        }
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(spaces)?)?,
        OutputFormat::Csv => {
            let table = spaces_table(spaces);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", spaces_table(spaces))?,
    }
    Ok(())
}

pub async fn list(
    api_client: &ApiClient,
    format: OutputFormat,
    output: &mut Output,
) -> CubCliResult<()> {
    let spaces = api_client.0.list_spaces().await?;
    print_spaces(&spaces, format, output).await
}

pub async fn show(
    args: ShowArgs,
    api_client: &ApiClient,
    format: OutputFormat,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.0.get_space(&args.slug).await?;
    print_spaces(std::slice::from_ref(&space), format, output).await
}

pub async fn create(args: CreateArgs, api_client: &ApiClient) -> CubCliResult<()> {
    let space = api_client
        .0
        .create_space(&CreateSpaceRequest {
            slug: args.slug,
            display_name: args.display_name,
        })
        .await?;
    println!("Space {} created successfully.", space.slug);
    Ok(())
}

pub async fn delete(args: DeleteArgs, api_client: &ApiClient) -> CubCliResult<()> {
    let space = api_client.0.get_space(&args.slug).await?;
    api_client.0.delete_space(space.space_id).await?;
    println!("Space {} deleted successfully.", space.slug);
    Ok(())
}
