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
    Cmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_list ensures list parses with no arguments.
#[test]
fn parse_list() {
    let cmd = Cmd::try_parse_from(["space", "list"]).expect("should parse list");

    assert!(matches!(cmd, Cmd::List));
}

// parse_show ensures show parses with a positional slug.
#[test]
fn parse_show() {
    let cmd = Cmd::try_parse_from(["space", "show", "dev"]).expect("should parse show");

    match cmd {
        Cmd::Show(args) => {
            assert_eq!(args.slug, "dev");
        }
        _ => panic!("expected Show variant"),
    }
}

// parse_create ensures create parses with an optional
// display name.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from(["space", "create", "dev", "--display-name", "Development"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.slug, "dev");
            assert_eq!(args.display_name, Some("Development".to_string()));
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_show_missing_slug_fails ensures show fails without
// a slug.
#[test]
fn parse_show_missing_slug_fails() {
    let result = Cmd::try_parse_from(["space", "show"]);
    assert!(result.is_err(), "should fail without a slug");
}

// parse_delete ensures delete parses with a positional slug.
#[test]
fn parse_delete() {
    let cmd = Cmd::try_parse_from(["space", "delete", "dev"]).expect("should parse delete");

    match cmd {
        Cmd::Delete(args) => {
            assert_eq!(args.slug, "dev");
        }
        _ => panic!("expected Delete variant"),
    }
}
