/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// These tests exercise the poll loop against stub fetch closures under
// tokio's paused clock, so the exact sleep sequence is observable as
// instant deltas without any real delay. Covered behaviors:
//
// Immediate success  - settled entities return with no fetch or sleep.
// Eventual success   - the first cleared snapshot ends the wait.
// Budget exhaustion  - 100 gated polls fail, naming the unit's slug.
// Backoff shape      - delays double from 25ms and cap at 250ms.
// Fetch failure      - a fetch error aborts the wait immediately.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use ::rpc::cli::CubCliError;
use ::rpc::types::{AWAITING_TRIGGERS_GATE, Unit, gate_absent};
use chrono::Utc;
use tokio::time::Instant;
use uuid::Uuid;

use super::poll_until;

fn test_unit(gates: Option<&[&str]>) -> Unit {
    Unit {
        unit_id: Uuid::from_u128(1),
        space_id: Uuid::from_u128(2),
        slug: "my-unit".to_string(),
        display_name: "My Unit".to_string(),
        data: None,
        head_revision_num: 1,
        apply_gates: gates.map(|names| {
            names
                .iter()
                .map(|name| (name.to_string(), true))
                .collect::<HashMap<_, _>>()
        }),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn gated() -> Unit {
    test_unit(Some(&[AWAITING_TRIGGERS_GATE]))
}

fn timeout_error() -> CubCliError {
    CubCliError::TriggersNotCompleted("my-unit".to_string())
}

// A settled entity must return before the first sleep, with zero
// fetches: zero-latency success.
#[tokio::test(start_paused = true)]
async fn settled_unit_returns_without_fetch_or_sleep() {
    let fetches = Cell::new(0u32);
    let started = Instant::now();

    let unit = poll_until(
        test_unit(None),
        || {
            fetches.set(fetches.get() + 1);
            async { Ok(test_unit(None)) }
        },
        Unit::triggers_settled,
        timeout_error,
    )
    .await
    .expect("settled unit should succeed immediately");

    assert_eq!(fetches.get(), 0);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(unit.triggers_settled());
}

// A gate map that exists but lacks the triggers key counts as settled.
#[tokio::test(start_paused = true)]
async fn unrelated_gates_do_not_block() {
    let fetches = Cell::new(0u32);

    poll_until(
        test_unit(Some(&["approval/required"])),
        || {
            fetches.set(fetches.get() + 1);
            async { Ok(test_unit(None)) }
        },
        Unit::triggers_settled,
        timeout_error,
    )
    .await
    .expect("unrelated gates should not block");

    assert_eq!(fetches.get(), 0);
}

// Gate presence is what matters, not the value stored under the key.
#[test]
fn gate_presence_not_value_matters() {
    let gates = HashMap::from([(AWAITING_TRIGGERS_GATE.to_string(), false)]);
    assert!(!gate_absent(Some(&gates), AWAITING_TRIGGERS_GATE));
    assert!(gate_absent(None, AWAITING_TRIGGERS_GATE));
    assert!(gate_absent(Some(&HashMap::new()), AWAITING_TRIGGERS_GATE));
}

// Gate present for the first N fetches, cleared on fetch N+1: success
// after exactly N+1 fetches.
#[tokio::test(start_paused = true)]
async fn returns_once_the_gate_clears() {
    const GATED_FETCHES: u32 = 5;
    let fetches = Cell::new(0u32);

    let unit = poll_until(
        gated(),
        || {
            let n = fetches.get() + 1;
            fetches.set(n);
            async move {
                if n <= GATED_FETCHES {
                    Ok(gated())
                } else {
                    Ok(test_unit(None))
                }
            }
        },
        Unit::triggers_settled,
        timeout_error,
    )
    .await
    .expect("should succeed once the gate clears");

    assert_eq!(fetches.get(), GATED_FETCHES + 1);
    assert!(unit.triggers_settled());
}

// The two-fetch scenario: initial snapshot gated, first fetch still
// gated, second fetch cleared.
#[tokio::test(start_paused = true)]
async fn two_fetch_scenario() {
    let fetches = Cell::new(0u32);
    let started = Instant::now();

    poll_until(
        gated(),
        || {
            let n = fetches.get() + 1;
            fetches.set(n);
            async move {
                if n == 1 {
                    Ok(gated())
                } else {
                    Ok(test_unit(Some(&[])))
                }
            }
        },
        Unit::triggers_settled,
        timeout_error,
    )
    .await
    .expect("should succeed on the second fetch");

    assert_eq!(fetches.get(), 2);
    // 25ms before the first fetch, 50ms before the second.
    assert_eq!(started.elapsed(), Duration::from_millis(75));
}

// A gate that never clears exhausts the 100-attempt budget and fails
// with an error naming the unit's slug.
#[tokio::test(start_paused = true)]
async fn budget_exhaustion_names_the_unit() {
    let fetches = Cell::new(0u32);
    let started = Instant::now();

    let err = poll_until(
        gated(),
        || {
            fetches.set(fetches.get() + 1);
            async { Ok(gated()) }
        },
        Unit::triggers_settled,
        timeout_error,
    )
    .await
    .expect_err("a gate that never clears must exhaust the budget");

    assert_eq!(fetches.get(), 100);
    assert!(matches!(err, CubCliError::TriggersNotCompleted(_)));
    assert!(err.to_string().contains("my-unit"));
    // 25 + 50 + 100 + 200, then 96 sleeps at the 250ms ceiling.
    assert_eq!(started.elapsed(), Duration::from_millis(24_375));
}

// Recorded inter-fetch gaps follow the doubling-with-ceiling shape:
// 25, 50, 100, 200, 250, 250, ...
#[tokio::test(start_paused = true)]
async fn backoff_doubles_and_caps_at_250ms() {
    const FETCHES: u32 = 7;
    let fetches = Cell::new(0u32);
    let instants = RefCell::new(vec![Instant::now()]);

    poll_until(
        gated(),
        || {
            let n = fetches.get() + 1;
            fetches.set(n);
            instants.borrow_mut().push(Instant::now());
            async move {
                if n < FETCHES {
                    Ok(gated())
                } else {
                    Ok(test_unit(None))
                }
            }
        },
        Unit::triggers_settled,
        timeout_error,
    )
    .await
    .expect("should succeed on the final fetch");

    let instants = instants.borrow();
    let gaps: Vec<u64> = instants
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).as_millis() as u64)
        .collect();
    assert_eq!(gaps, vec![25, 50, 100, 200, 250, 250, 250]);
}

// A failing fetch aborts the wait at once; the gate condition is
// retried but fetch errors never are.
#[tokio::test(start_paused = true)]
async fn fetch_errors_abort_immediately() {
    let fetches = Cell::new(0u32);
    let started = Instant::now();

    let err = poll_until(
        gated(),
        || {
            let n = fetches.get() + 1;
            fetches.set(n);
            async move {
                if n < 3 {
                    Ok(gated())
                } else {
                    Err(CubCliError::GenericError("connection reset".to_string()))
                }
            }
        },
        Unit::triggers_settled,
        timeout_error,
    )
    .await
    .expect_err("the third fetch fails and must propagate");

    assert_eq!(fetches.get(), 3);
    assert!(matches!(err, CubCliError::GenericError(_)));
    // Slept 25 + 50 + 100 before the three fetches; nothing after.
    assert_eq!(started.elapsed(), Duration::from_millis(175));
}

// await_completion gates on an operation-specific key.
#[tokio::test(start_paused = true)]
async fn operation_gates_are_namespaced() {
    let gate = "awaiting/refresh";
    let fetches = Cell::new(0u32);

    let err = poll_until(
        test_unit(Some(&[gate])),
        || {
            let n = fetches.get() + 1;
            fetches.set(n);
            async move { Ok(test_unit(Some(&["awaiting/refresh"]))) }
        },
        |unit: &Unit| gate_absent(unit.apply_gates.as_ref(), gate),
        || CubCliError::OperationNotCompleted {
            operation: "refresh".to_string(),
            slug: "my-unit".to_string(),
        },
    )
    .await
    .expect_err("refresh gate never clears");

    assert_eq!(fetches.get(), 100);
    let message = err.to_string();
    assert!(message.contains("refresh"));
    assert!(message.contains("my-unit"));
}
