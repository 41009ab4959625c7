/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::pin::Pin;

use ::rpc::cli::{CubCliError, CubCliResult, OutputFormat};
use ::rpc::types::{FunctionInvocationResult, FunctionSpec, InvokeFunctionRequest};
use prettytable::{Table, row};

use super::args::{DoArgs, ListArgs};
use crate::awaiting;
use crate::cfg::runtime::RuntimeConfig;
use crate::rpc::ApiClient;
use crate::{async_write, async_write_table_as_csv, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

fn functions_table(functions: &[FunctionSpec]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Function", "Mutating", "Required Parameters", "Description"]);
    for function in functions {
        table.add_row(row![
            function.function_name,
            function.mutating,
            function.required_parameters.join(", "),
            function.description
        ]);
    }
    table
}

fn results_table(results: &[FunctionInvocationResult]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Unit", "Success", "Output"]);
    for result in results {
        table.add_row(row![result.unit_slug, result.success, result.output]);
    }
    table
}

pub async fn list(
    args: ListArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let functions = api_client.0.list_functions(space.space_id).await?;
    match config.format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(&functions)?)?
        }
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(&functions)?)?,
        OutputFormat::Csv => {
            let table = functions_table(&functions);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", functions_table(&functions))?,
    }
    Ok(())
}

pub async fn invoke(
    args: DoArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    if args.unit.is_none() && args.where_filter.is_none() {
        return Err(CubCliError::GenericError(
            "pass --unit or --where to select the units to invoke against".to_string(),
        ));
    }

    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let unit_id = match &args.unit {
        Some(slug) => Some(api_client.find_unit(space.space_id, slug).await?.unit_id),
        None => None,
    };

    let results = api_client
        .0
        .invoke_function(
            space.space_id,
            &InvokeFunctionRequest {
                function_name: args.function_name,
                arguments: args.arguments,
                where_filter: args.where_filter,
                unit_id,
            },
        )
        .await?;

    match config.format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(&results)?)?
        }
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(&results)?)?,
        OutputFormat::Csv => {
            let table = results_table(&results);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", results_table(&results))?,
    }

    if args.wait {
        // Sequential per unit; the whole process blocks for the
        // cumulative wait time.
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
