/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.

use clap::{CommandFactory, Parser};

use super::args::*;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_no_args ensures parses with no arguments.
#[test]
fn parse_no_args() {
    let opts = Opts::try_parse_from(["version"]).expect("should parse with no args");

    assert!(!opts.client_only);
}

// parse_client_only_short ensures parses with -c flag.
#[test]
fn parse_client_only_short() {
    let opts = Opts::try_parse_from(["version", "-c"]).expect("should parse with -c");

    assert!(opts.client_only);
}

// parse_client_only_long ensures parses with --client-only
// flag.
#[test]
fn parse_client_only_long() {
    let opts =
        Opts::try_parse_from(["version", "--client-only"]).expect("should parse with --client-only");

    assert!(opts.client_only);
}
