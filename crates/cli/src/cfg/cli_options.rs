/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use ::rpc::cli::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "cub",
    version,
    about = "ConfigHub command-line client",
    rename_all = "kebab_case"
)]
pub struct CliOptions {
    #[clap(
        long,
        global = true,
        env = "CONFIGHUB_URL",
        default_value = "https://hub.confighub.com",
        help = "ConfigHub API server URL"
    )]
    pub server: String,
    #[clap(
        long,
        global = true,
        env = "CONFIGHUB_TOKEN",
        hide_env_values = true,
        help = "API bearer token"
    )]
    pub token: Option<String>,
    #[clap(
        long,
        global = true,
        env = "CONFIGHUB_SPACE",
        help = "Default space slug for commands that operate within a space"
    )]
    pub space: Option<String>,
    #[clap(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    pub output: OutputFormat,
    #[clap(
        long,
        global = true,
        default_value_t = 100,
        help = "Page size for list operations"
    )]
    pub page_size: usize,
    #[clap(short, long, global = true, help = "Suppress progress messages")]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Debug)]
pub enum Commands {
    #[clap(subcommand, about = "Manage spaces")]
    Space(crate::space::Cmd),
    #[clap(subcommand, about = "Manage configuration units")]
    Unit(crate::unit::Cmd),
    #[clap(subcommand, about = "Manage links between units")]
    Link(crate::link::Cmd),
    #[clap(subcommand, about = "Manage triggers")]
    Trigger(crate::trigger::Cmd),
    #[clap(subcommand, about = "Manage change sets")]
    Changeset(crate::changeset::Cmd),
    #[clap(subcommand, about = "List and invoke functions")]
    Function(crate::function::Cmd),
    #[clap(about = "Show client and server versions")]
    Version(crate::version::Opts),
    #[clap(about = "Generate shell completion scripts")]
    GenerateShellComplete(crate::generate_shell_complete::Cmd),
}
