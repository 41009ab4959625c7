/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fs;
use std::path::Path;
use std::pin::Pin;

use ::rpc::cli::{CubCliError, CubCliResult, OutputFormat};
use ::rpc::types::{
    BulkUnitResult, BulkUpdateUnitsRequest, CreateUnitRequest, Unit, UnitPatch,
};
use prettytable::{Table, row};

use super::args::{
    BulkUpdateArgs, CreateArgs, DeleteArgs, ListArgs, RefreshArgs, ShowArgs, UpdateArgs,
};
use crate::awaiting;
use crate::cfg::runtime::RuntimeConfig;
use crate::rpc::ApiClient;
use crate::{async_write, async_write_table_as_csv, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

fn gates_column(unit: &Unit) -> String {
    match &unit.apply_gates {
        Some(gates) if !gates.is_empty() => {
            let mut names: Vec<&str> = gates.keys().map(String::as_str).collect();
            names.sort_unstable();
            names.join(", ")
        }
        _ => "-".to_string(),
    }
}

fn units_table(units: &[Unit]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Slug",
        "Display Name",
        "Revision",
        "Gates",
        "Updated At"
    ]);
    for unit in units {
        table.add_row(row![
            unit.slug,
            unit.display_name,
            unit.head_revision_num,
            gates_column(unit),
            unit.updated_at
        ]);
    }
    table
}

async fn print_units(
    units: &[Unit],
    format: OutputFormat,
    output: &mut Output,
) -> CubCliResult<()> {
    match format {
        OutputFormat::Json => async_writeln!(output, "{}", serde_json::to_string_pretty(units)?)?,
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(units)?)?,
        OutputFormat::Csv => {
            let table = units_table(units);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", units_table(units))?,
    }
    Ok(())
}

fn read_data_file(path: &Path) -> CubCliResult<String> {
    fs::read_to_string(path).map_err(CubCliError::IOError)
}

pub async fn list(
    args: ListArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let units = api_client
        .list_all_units(
            space.space_id,
            args.where_filter,
            args.select,
            config.page_size,
        )
        .await?;
    print_units(&units, config.format, output).await
}

pub async fn show(
    args: ShowArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let unit = api_client.find_unit(space.space_id, &args.slug).await?;

    if args.extended {
        let extended = api_client
            .0
            .get_extended_unit(space.space_id, unit.unit_id)
            .await?;
        if config.format == OutputFormat::Json {
            async_writeln!(output, "{}", serde_json::to_string_pretty(&extended)?)?;
            return Ok(());
        }
        print_units(std::slice::from_ref(&extended.unit), config.format, output).await?;
        let live_state = match &extended.live_state {
            Some(state) => serde_json::to_string_pretty(state)?,
            None => "(none)".to_string(),
        };
        async_writeln!(output, "Live State:\n{live_state}")?;
        return Ok(());
    }

    print_units(std::slice::from_ref(&unit), config.format, output).await
}

pub async fn create(
    args: CreateArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let data = args.data_file.as_deref().map(read_data_file).transpose()?;
    let unit = api_client
        .0
        .create_unit(
            space.space_id,
            &CreateUnitRequest {
                slug: args.slug,
                display_name: args.display_name,
                data,
            },
        )
        .await?;

    if args.wait {
        if !config.quiet {
            println!("Waiting for triggers to complete on unit {}...", unit.slug);
        }
        let unit = awaiting::await_triggers_removal(unit, api_client).await?;
        println!("Unit {} created successfully.", unit.slug);
        return Ok(());
    }

    println!("Unit {} created successfully.", unit.slug);
    Ok(())
}

pub async fn update(
    args: UpdateArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    if args.display_name.is_none() && args.data_file.is_none() {
        return Err(CubCliError::GenericError(
            "nothing to update; pass --display-name and/or --data-file".to_string(),
        ));
    }

    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let unit = api_client.find_unit(space.space_id, &args.slug).await?;
    let data = args.data_file.as_deref().map(read_data_file).transpose()?;
    let unit = api_client
        .0
        .update_unit(
            space.space_id,
            unit.unit_id,
            &UnitPatch {
                display_name: args.display_name,
                data,
            },
        )
        .await?;

    if args.wait {
        if !config.quiet {
            println!("Waiting for triggers to complete on unit {}...", unit.slug);
        }
        let unit = awaiting::await_triggers_removal(unit, api_client).await?;
        println!("Unit {} updated successfully.", unit.slug);
        return Ok(());
    }

    println!("Unit {} updated successfully.", unit.slug);
    Ok(())
}

pub async fn delete(
    args: DeleteArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let unit = api_client.find_unit(space.space_id, &args.slug).await?;
    api_client.0.delete_unit(space.space_id, unit.unit_id).await?;
    println!("Unit {} deleted successfully.", unit.slug);
    Ok(())
}

pub async fn refresh(
    args: RefreshArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let unit = api_client.find_unit(space.space_id, &args.slug).await?;
    let unit = api_client
        .0
        .refresh_unit(space.space_id, unit.unit_id)
        .await?;

    if args.wait {
        if !config.quiet {
            println!("Waiting for refresh to complete on unit {}...", unit.slug);
        }
        let unit = awaiting::await_completion("refresh", unit, api_client).await?;
        println!("Unit {} refreshed successfully.", unit.slug);
        return Ok(());
    }

    println!("Refresh of unit {} requested.", unit.slug);
    Ok(())
}

fn bulk_results_table(results: &[BulkUnitResult]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Unit", "Success", "Error"]);
    for result in results {
        table.add_row(row![result.unit_slug, result.success, result.error]);
    }
    table
}

pub async fn bulk_update(
    args: BulkUpdateArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    if args.display_name.is_none() && args.data_file.is_none() {
        return Err(CubCliError::GenericError(
            "nothing to update; pass --display-name and/or --data-file".to_string(),
        ));
    }

    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let data = args.data_file.as_deref().map(read_data_file).transpose()?;
    let results = api_client
        .0
        .bulk_update_units(
            space.space_id,
            &BulkUpdateUnitsRequest {
                where_filter: args.where_filter,
                patch: UnitPatch {
                    display_name: args.display_name,
                    data,
                },
            },
        )
        .await?;

    match config.format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(&results)?)?
        }
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(&results)?)?,
        OutputFormat::Csv => {
            let table = bulk_results_table(&results);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", bulk_results_table(&results))?,
    }

    if args.wait {
        // One entity at a time; each wait call tracks exactly one unit.
        for result in results.iter().filter(|result| result.success) {
            if !config.quiet {
                println!(
                    "Waiting for triggers to complete on unit {}...",
                    result.unit_slug
                );
            }
            let unit = api_client
                .0
                .get_unit(space.space_id, result.unit_id)
                .await?;
            awaiting::await_triggers_removal(unit, api_client).await?;
        }
    }

    Ok(())
}
