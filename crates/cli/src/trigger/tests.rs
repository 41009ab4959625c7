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

// parse_create ensures create parses with defaults: event
// Mutation, enabled.
#[test]
fn parse_create() {
    let cmd = Cmd::try_parse_from(["trigger", "create", "validate", "--function", "cel-validate"])
        .expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.slug, "validate");
            assert_eq!(args.event, "Mutation");
            assert_eq!(args.function, "cel-validate");
            assert!(!args.disabled);
            assert!(args.worker.is_none());
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_disabled ensures create parses with
// --disabled and a worker.
#[test]
fn parse_create_disabled() {
    let cmd = Cmd::try_parse_from([
        "trigger",
        "create",
        "validate",
        "--function",
        "cel-validate",
        "--disabled",
        "--worker",
        "worker-1",
    ])
    .expect("should parse create with --disabled");

    match cmd {
        Cmd::Create(args) => {
            assert!(args.disabled);
            assert_eq!(args.worker, Some("worker-1".to_string()));
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_missing_function_fails ensures create fails
// without --function.
#[test]
fn parse_create_missing_function_fails() {
    let result = Cmd::try_parse_from(["trigger", "create", "validate"]);
    assert!(result.is_err(), "should fail without --function");
}

// parse_show ensures show parses with a slug.
#[test]
fn parse_show() {
    let cmd = Cmd::try_parse_from(["trigger", "show", "validate"]).expect("should parse show");

    match cmd {
        Cmd::Show(args) => {
            assert_eq!(args.slug, "validate");
        }
        _ => panic!("expected Show variant"),
    }
}
