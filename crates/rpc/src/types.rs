/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gate key set on an entity's ApplyGates while server-side triggers
/// are still processing a mutation.
pub const AWAITING_TRIGGERS_GATE: &str = "awaiting/triggers";

/// A configuration unit. The ApplyGates map is None, or lacks the
/// `awaiting/triggers` key, exactly when no server-side trigger is
/// pending for the unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Unit {
    #[serde(rename = "UnitID")]
    pub unit_id: Uuid,
    #[serde(rename = "SpaceID")]
    pub space_id: Uuid,
    pub slug: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default)]
    pub head_revision_num: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_gates: Option<HashMap<String, bool>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A unit together with its last-known live state, as returned by the
/// extended-unit endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtendedUnit {
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_state: Option<serde_json::Value>,
}

/// A space: the tenancy boundary owning units, links, triggers and
/// change sets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Space {
    #[serde(rename = "SpaceID")]
    pub space_id: Uuid,
    pub slug: String,
    #[serde(default)]
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A directed relationship between two units, possibly across spaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    #[serde(rename = "LinkID")]
    pub link_id: Uuid,
    #[serde(rename = "SpaceID")]
    pub space_id: Uuid,
    pub slug: String,
    #[serde(rename = "FromUnitID")]
    pub from_unit_id: Uuid,
    #[serde(rename = "ToUnitID")]
    pub to_unit_id: Uuid,
    #[serde(rename = "ToSpaceID")]
    pub to_space_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trigger {
    #[serde(rename = "TriggerID")]
    pub trigger_id: Uuid,
    #[serde(rename = "SpaceID")]
    pub space_id: Uuid,
    pub slug: String,
    pub event: String,
    pub function_name: String,
    pub enabled: bool,
    #[serde(default)]
    pub worker_slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeSet {
    #[serde(rename = "ChangeSetID")]
    pub change_set_id: Uuid,
    #[serde(rename = "SpaceID")]
    pub space_id: Uuid,
    pub slug: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A function available for invocation against units in a space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionSpec {
    pub function_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mutating: bool,
    #[serde(default)]
    pub required_parameters: Vec<String>,
}

/// Per-unit outcome of a function invocation fan-out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionInvocationResult {
    #[serde(rename = "UnitID")]
    pub unit_id: Uuid,
    pub unit_slug: String,
    pub success: bool,
    #[serde(default)]
    pub output: String,
}

/// Per-unit outcome of a bulk update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BulkUnitResult {
    #[serde(rename = "UnitID")]
    pub unit_id: Uuid,
    pub unit_slug: String,
    pub success: bool,
    #[serde(default)]
    pub error: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerVersion {
    pub version: String,
    #[serde(default)]
    pub build_date: String,
    #[serde(default)]
    pub git_sha: String,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSpaceRequest {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUnitRequest {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Typed patch body shared by single and bulk unit updates. Fields
/// left as None are not touched server-side.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BulkUpdateUnitsRequest {
    #[serde(rename = "Where")]
    pub where_filter: String,
    pub patch: UnitPatch,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLinkRequest {
    pub slug: String,
    pub from_unit_slug: String,
    pub to_unit_slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_space_slug: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTriggerRequest {
    pub slug: String,
    pub event: String,
    pub function_name: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_slug: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChangeSetRequest {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvokeFunctionRequest {
    pub function_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
    #[serde(rename = "Where", skip_serializing_if = "Option::is_none")]
    pub where_filter: Option<String>,
    #[serde(rename = "UnitID", skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<Uuid>,
}

/// Client-side pagination and field-selection parameters for list calls.
#[derive(Clone, Debug, Default)]
pub struct ListParams {
    pub where_filter: Option<String>,
    pub select: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

impl Unit {
    /// True when no trigger-processing gate is outstanding: the gate map
    /// is absent entirely or does not contain `awaiting/triggers`.
    pub fn triggers_settled(&self) -> bool {
        gate_absent(self.apply_gates.as_ref(), AWAITING_TRIGGERS_GATE)
    }
}

/// Presence of the key is what matters, regardless of its value.
pub fn gate_absent(gates: Option<&HashMap<String, bool>>, gate: &str) -> bool {
    match gates {
        None => true,
        Some(gates) => !gates.contains_key(gate),
    }
}
