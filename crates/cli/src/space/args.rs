/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "List all spaces visible to the caller")]
    List,
    #[clap(about = "Show a single space")]
    Show(ShowArgs),
    #[clap(about = "Create a space")]
    Create(CreateArgs),
    #[clap(about = "Delete a space")]
    Delete(DeleteArgs),
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[clap(help = "Space slug")]
    pub slug: String,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[clap(help = "Slug for the new space")]
    pub slug: String,
    #[clap(long, help = "Human-readable display name")]
    pub display_name: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[clap(help = "Space slug")]
    pub slug: String,
}
