/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::pin::Pin;

use ::rpc::cli::{CubCliError, CubCliResult, OutputFormat};
use ::rpc::types::{CreateTriggerRequest, Trigger};
use prettytable::{Table, row};

use super::args::{CreateArgs, DeleteArgs, ListArgs, ShowArgs};
use crate::cfg::runtime::RuntimeConfig;
use crate::rpc::ApiClient;
use crate::{async_write, async_write_table_as_csv, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

fn triggers_table(triggers: &[Trigger]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Slug", "Event", "Function", "Enabled", "Worker"]);
    for trigger in triggers {
        table.add_row(row![
            trigger.slug,
            trigger.event,
            trigger.function_name,
            trigger.enabled,
            trigger.worker_slug
        ]);
    }
    table
}

async fn print_triggers(
    triggers: &[Trigger],
    format: OutputFormat,
    output: &mut Output,
) -> CubCliResult<()> {
    match format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(triggers)?)?
        }
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(triggers)?)?,
        OutputFormat::Csv => {
            let table = triggers_table(triggers);
            async_write_table_as_csv!(output, table)?
        }
        OutputFormat::Table => async_write!(output, "{}", triggers_table(triggers))?,
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
    let triggers = api_client.0.list_triggers(space.space_id).await?;
    print_triggers(&triggers, config.format, output).await
}

pub async fn show(
    args: ShowArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
    output: &mut Output,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let trigger = api_client.0.get_trigger(space.space_id, &args.slug).await?;
    print_triggers(std::slice::from_ref(&trigger), config.format, output).await
}

pub async fn create(
    args: CreateArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let trigger = api_client
        .0
        .create_trigger(
            space.space_id,
            &CreateTriggerRequest {
                slug: args.slug,
                event: args.event,
                function_name: args.function,
                enabled: !args.disabled,
                worker_slug: args.worker,
            },
        )
        .await?;
    println!("Trigger {} created successfully.", trigger.slug);
    Ok(())
}

pub async fn delete(
    args: DeleteArgs,
    api_client: &ApiClient,
    config: &RuntimeConfig,
) -> CubCliResult<()> {
    let space = api_client.resolve_space(args.space.as_deref(), config).await?;
    let trigger = api_client.0.get_trigger(space.space_id, &args.slug).await?;
    api_client
        .0
        .delete_trigger(space.space_id, trigger.trigger_id)
        .await?;
    println!("Trigger {} deleted successfully.", trigger.slug);
    Ok(())
}
