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

// parse_list ensures list parses bare.
#[test]
fn parse_list() {
    let cmd = Cmd::try_parse_from(["link", "list"]).expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert!(args.space.is_none());
        }
        _ => panic!("expected List variant"),
    }
}

// parse_create ensures create parses both endpoints plus
// wait.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from([
        "link",
        "create",
        "app-db",
        "--from-unit",
        "app",
        "--to-unit",
        "db",
        "--wait",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.slug, "app-db");
            assert_eq!(args.from_unit, "app");
            assert_eq!(args.to_unit, "db");
            assert!(args.to_space.is_none());
            assert!(args.wait);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_cross_space ensures create parses with
// --to-space.
#[test]
fn parse_create_cross_space() {
    let cmd = Cmd::try_parse_from([
        "link",
        "create",
        "app-db",
        "--from-unit",
        "app",
        "--to-unit",
        "db",
        "--to-space",
        "shared",
    ])
    .expect("should parse create with --to-space");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.to_space, Some("shared".to_string()));
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_missing_endpoints_fails ensures create fails
// without --from-unit/--to-unit.
#[test]
fn parse_create_missing_endpoints_fails() {
    let result = Cmd::try_parse_from(["link", "create", "app-db"]);
    assert!(result.is_err(), "should fail without endpoints");
}

// parse_delete ensures delete parses with a slug.
#[test]
fn parse_delete() {
    let cmd = Cmd::try_parse_from(["link", "delete", "app-db"]).expect("should parse delete");

    match cmd {
        Cmd::Delete(args) => {
            assert_eq!(args.slug, "app-db");
        }
        _ => panic!("expected Delete variant"),
    }
}
