/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use ::rpc::cli::{CubCliResult, OutputFormat};
use serde::Serialize;

use super::Opts;
use crate::rpc::ApiClient;

#[derive(Serialize)]
struct VersionReport {
    client_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    server: Option<::rpc::types::ServerVersion>,
}

pub async fn show_version(
    opts: &Opts,
    api_client: &ApiClient,
    format: OutputFormat,
) -> CubCliResult<()> {
    let server = if opts.client_only {
        None
    } else {
        Some(api_client.0.version().await?)
    };

    if format == OutputFormat::Json {
        let report = VersionReport {
            client_version: env!("CARGO_PKG_VERSION"),
            server,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    // Same as running `cub --version`
    println!("cub:\n\tversion={}", env!("CARGO_PKG_VERSION"));

    if let Some(v) = server {
        println!();
        println!(
            "server:\n\tversion={}, build_date={}, git_sha={}",
            v.version, v.build_date, v.git_sha,
        );
    }

    Ok(())
}
