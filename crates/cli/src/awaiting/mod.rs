/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Polling support for server-side asynchronous trigger processing.
//!
//! Mutating operations (unit update, function invocation, link
//! creation) return entities whose ApplyGates map may still carry the
//! `awaiting/triggers` key while the server runs its validation and
//! mutation functions. Commands given `--wait` block here until the
//! gate clears or the poll budget runs out.

#[cfg(test)]
mod tests;

use std::future::Future;
use std::time::Duration;

use ::rpc::cli::{CubCliError, CubCliResult};
use ::rpc::types::{Unit, gate_absent};

use crate::rpc::ApiClient;

const MAX_ATTEMPTS: u32 = 100;
const INITIAL_DELAY: Duration = Duration::from_millis(25);
const MAX_DELAY: Duration = Duration::from_millis(250);

/// Re-fetch an entity until `done` holds or the attempt budget is
/// exhausted, doubling the delay between polls up to a hard ceiling.
///
/// The predicate is checked before the first sleep, so an
/// already-settled entity returns without any delay or fetch. Fetch
/// errors are fatal and propagate immediately; only the gate condition
/// itself is retried. There is no cancellation input: the wait ends on
/// success, on a fetch error, or when the budget runs out.
pub(crate) async fn poll_until<T, F, Fut, P, E>(
    mut current: T,
    mut fetch: F,
    done: P,
    budget_exhausted: E,
) -> CubCliResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CubCliResult<T>>,
    P: Fn(&T) -> bool,
    E: FnOnce() -> CubCliError,
{
    let mut delay = INITIAL_DELAY;
    let mut attempts = 0;
    while attempts < MAX_ATTEMPTS {
        if done(&current) {
            return Ok(current);
        }
        tokio::time::sleep(delay).await;
        delay = std::cmp::min(delay * 2, MAX_DELAY);
        attempts += 1;
        current = fetch().await?;
    }
    Err(budget_exhausted())
}

/// Block until server-side trigger processing for `unit` settles,
/// returning the final snapshot. The input snapshot is only ever
/// replaced by freshly fetched copies; server state is not mutated.
pub async fn await_triggers_removal(unit: Unit, api_client: &ApiClient) -> CubCliResult<Unit> {
    let space_id = unit.space_id;
    let unit_id = unit.unit_id;
    let slug = unit.slug.clone();
    tracing::debug!(%slug, "waiting for triggers to settle");
    poll_until(
        unit,
        || async move { Ok(api_client.0.get_unit(space_id, unit_id).await?) },
        Unit::triggers_settled,
        move || CubCliError::TriggersNotCompleted(slug),
    )
    .await
}

/// Block until a named asynchronous operation (refresh, for now) on
/// `unit` completes. Operations gate on the key `awaiting/<operation>`.
pub async fn await_completion(
    operation: &str,
    unit: Unit,
    api_client: &ApiClient,
) -> CubCliResult<Unit> {
    let gate = format!("awaiting/{operation}");
    let space_id = unit.space_id;
    let unit_id = unit.unit_id;
    let slug = unit.slug.clone();
    let operation = operation.to_string();
    tracing::debug!(%slug, %operation, "waiting for operation to complete");
    poll_until(
        unit,
        || async move { Ok(api_client.0.get_unit(space_id, unit_id).await?) },
        move |unit: &Unit| gate_absent(unit.apply_gates.as_ref(), &gate),
        move || CubCliError::OperationNotCompleted { operation, slug },
    )
    .await
}
