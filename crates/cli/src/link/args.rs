/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "List links in a space")]
    List(ListArgs),
    #[clap(about = "Show a single link")]
    Show(ShowArgs),
    #[clap(about = "Create a link between two units")]
    Create(CreateArgs),
    #[clap(about = "Delete a link")]
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
    #[clap(help = "Link slug")]
    pub slug: String,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Slug for the new link")]
    pub slug: String,
    #[clap(long, help = "Slug of the unit the link points from")]
    pub from_unit: String,
    #[clap(long, help = "Slug of the unit the link points to")]
    pub to_unit: String,
    #[clap(long, help = "Space slug of the target unit, when cross-space")]
    pub to_space: Option<String>,
    #[clap(
        long,
        help = "Block until server-side triggers complete on the upstream unit"
    )]
    pub wait: bool,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[clap(long, help = "Space slug (defaults to the session space)")]
    pub space: Option<String>,
    #[clap(help = "Link slug")]
    pub slug: String,
}
