/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! CLI-facing error and output types, gated behind the `cli` feature so
//! that server-side users of this crate do not pull in clap and the
//! table-rendering stack.

use clap::ValueEnum;

use crate::errors::ApiError;

pub type CubCliResult<T> = Result<T, CubCliError>;

#[derive(Debug, thiserror::Error)]
pub enum CubCliError {
    #[error(transparent)]
    ApiError(#[from] ApiError),
    #[error("{0}")]
    GenericError(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    /// Triggers on the named unit did not complete within the poll
    /// budget. The mutation itself already succeeded server-side.
    #[error("triggers did not complete in time for unit {0}")]
    TriggersNotCompleted(String),
    #[error("{operation} did not complete in time for {slug}")]
    OperationNotCompleted { operation: String, slug: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
    Csv,
}
