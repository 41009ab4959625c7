/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "List triggers configured in a space")]
    List(ListArgs),
    #[clap(about = "Show a single trigger")]
    Show(ShowArgs),
    #[clap(about = "Create a trigger")]
    Create(CreateArgs),
    #[clap(about = "Delete a trigger")]
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
    #[clap(help = "Trigger slug")]
    pub slug: String,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Slug for the new trigger")]
    pub slug: String,
    #[clap(long, default_value = "Mutation", help = "Event the trigger fires on")]
    pub event: String,
    #[clap(long, help = "Function the trigger invokes")]
    pub function: String,
    #[clap(long, help = "Create the trigger disabled")]
    pub disabled: bool,
    #[clap(long, help = "Worker slug the trigger runs on")]
    pub worker: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Trigger slug")]
    pub slug: String,
}
