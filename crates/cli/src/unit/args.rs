/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "List units in a space")]
    List(ListArgs),
    #[clap(about = "Show a single unit")]
    Show(ShowArgs),
    #[clap(about = "Create a unit")]
    Create(CreateArgs),
    #[clap(about = "Update a unit")]
    Update(UpdateArgs),
    #[clap(about = "Delete a unit")]
    Delete(DeleteArgs),
    #[clap(about = "Re-read live state for a unit")]
    Refresh(RefreshArgs),
    #[clap(about = "Update all units matching a filter in one API call")]
    BulkUpdate(BulkUpdateArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(long = "where", help = "Server-side filter expression")]
    pub where_filter: Option<String>,
    #[clap(long, help = "Comma-separated list of fields to return")]
    pub select: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Unit slug")]
    pub slug: String,
    #[clap(long, help = "Include last-known live state")]
    pub extended: bool,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Slug for the new unit")]
    pub slug: String,
    #[clap(long, help = "Human-readable display name")]
    pub display_name: Option<String>,
    #[clap(long, help = "File containing the unit's configuration data")]
    pub data_file: Option<PathBuf>,
    #[clap(long, help = "Block until server-side triggers complete")]
    pub wait: bool,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Unit slug")]
    pub slug: String,
    #[clap(long, help = "New display name")]
    pub display_name: Option<String>,
    #[clap(long, help = "File containing replacement configuration data")]
    pub data_file: Option<PathBuf>,
    #[clap(long, help = "Block until server-side triggers complete")]
    pub wait: bool,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Unit slug")]
    pub slug: String,
}

#[derive(Parser, Debug)]
pub struct RefreshArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Unit slug")]
    pub slug: String,
    #[clap(long, help = "Block until the refresh completes")]
    pub wait: bool,
}

#[derive(Parser, Debug)]
pub struct BulkUpdateArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(long = "where", help = "Filter selecting the units to update")]
    pub where_filter: String,
    #[clap(long, help = "New display name applied to every matched unit")]
    pub display_name: Option<String>,
    #[clap(long, help = "File containing replacement configuration data")]
    pub data_file: Option<PathBuf>,
    #[clap(
        long,
        help = "Block until server-side triggers complete on every updated unit"
    )]
    pub wait: bool,
}
