/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "List change sets in a space")]
    List(ListArgs),
    #[clap(about = "Show a single change set")]
    Show(ShowArgs),
    #[clap(about = "Create a change set")]
    Create(CreateArgs),
    #[clap(about = "Delete a change set")]
    Delete(DeleteArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Change set slug")]
    pub slug: String,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Slug for the new change set")]
    pub slug: String,
    #[clap(long, help = "Human-readable display name")]
    pub display_name: Option<String>,
    #[clap(long, help = "Free-form description")]
    pub description: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Change set slug")]
    pub slug: String,
}
