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

// parse_create ensures create parses with description
// fields.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from([
        "changeset",
        "create",
        "release-42",
        "--description",
        "Q3 release",
    ])
    .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.slug, "release-42");
            assert_eq!(args.description, Some("Q3 release".to_string()));
            assert!(args.display_name.is_none());
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_list ensures list parses with an explicit space.
#[test]
fn parse_list() {
    let cmd = Cmd::try_parse_from(["changeset", "list", "--space", "dev"])
        .expect("should parse list");

    match cmd {
        Cmd::List(args) => {
            assert_eq!(args.space, Some("dev".to_string()));
        }
        _ => panic!("expected List variant"),
    }
}

// parse_show_missing_slug_fails ensures show fails without
// a slug.
#[test]
fn parse_show_missing_slug_fails() {
    let result = Cmd::try_parse_from(["changeset", "show"]);
    assert!(result.is_err(), "should fail without a slug");
}
