/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "List functions available in a space")]
    List(ListArgs),
    #[clap(about = "Invoke a function against one or more units")]
    Do(DoArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DoArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Function name")]
    pub function_name: String,
    #[clap(help = "Positional arguments passed to the function")]
    pub arguments: Vec<String>,
    #[clap(
        long,
        conflicts_with = "where_filter",
        help = "Invoke against the unit with this slug"
    )]
    pub unit: Option<String>,
    #[clap(
        long = "where",
        help = "Invoke against every unit matching this filter"
    )]
    pub where_filter: Option<String>,
    #[clap(
        long,
        help = "Block until server-side triggers complete on every touched unit"
    )]
    pub wait: bool,
}
