/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::types::*;

/// Typed client for the ConfigHub Service API. One method per REST
/// operation; all methods take entity identifiers scoped by space.
pub struct ConfigHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl ConfigHubClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Build)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        method: &'static str,
        path: &str,
    ) -> Result<T, ApiError> {
        tracing::debug!(method, path, "calling ConfigHub API");
        let response = request.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(method, path, %status, "API call failed");
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status,
                message,
            });
        }
        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: String) -> Result<T, ApiError> {
        self.execute(self.http.get(self.url(&path)), "GET", &path)
            .await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: String,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.http.post(self.url(&path)).json(body), "POST", &path)
            .await
    }

    async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: String,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.http.patch(self.url(&path)).json(body), "PATCH", &path)
            .await
    }

    async fn delete(&self, path: String) -> Result<(), ApiError> {
        tracing::debug!(path, "calling ConfigHub API");
        let response = self
            .http
            .delete(self.url(&path))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                method: "DELETE",
                path,
                status,
                message,
            });
        }
        Ok(())
    }

    pub async fn version(&self) -> Result<ServerVersion, ApiError> {
        self.get("version".to_string()).await
    }

    ////////////////////////////////////////////////////////////////////
    // Spaces

    pub async fn list_spaces(&self) -> Result<Vec<Space>, ApiError> {
        self.get("space".to_string()).await
    }

    pub async fn get_space(&self, slug: &str) -> Result<Space, ApiError> {
        self.get(format!("space/{}", urlencoding::encode(slug)))
            .await
    }

    pub async fn create_space(&self, request: &CreateSpaceRequest) -> Result<Space, ApiError> {
        self.post("space".to_string(), request).await
    }

    pub async fn delete_space(&self, space_id: Uuid) -> Result<(), ApiError> {
        self.delete(format!("space/{space_id}")).await
    }

    ////////////////////////////////////////////////////////////////////
    // Units

    pub async fn list_units(
        &self,
        space_id: Uuid,
        params: &ListParams,
    ) -> Result<Vec<Unit>, ApiError> {
        let path = format!("space/{space_id}/unit");
        let mut query: Vec<(&str, String)> = vec![
            ("Limit", params.limit.to_string()),
            ("Offset", params.offset.to_string()),
        ];
        if let Some(where_filter) = &params.where_filter {
            query.push(("Where", where_filter.clone()));
        }
        if let Some(select) = &params.select {
            query.push(("Select", select.clone()));
        }
        self.execute(self.http.get(self.url(&path)).query(&query), "GET", &path)
            .await
    }

    pub async fn get_unit(&self, space_id: Uuid, unit_id: Uuid) -> Result<Unit, ApiError> {
        self.get(format!("space/{space_id}/unit/{unit_id}")).await
    }

    pub async fn get_unit_by_slug(&self, space_id: Uuid, slug: &str) -> Result<Unit, ApiError> {
        self.get(format!(
            "space/{space_id}/unit/slug/{}",
            urlencoding::encode(slug)
        ))
        .await
    }

    pub async fn get_extended_unit(
        &self,
        space_id: Uuid,
        unit_id: Uuid,
    ) -> Result<ExtendedUnit, ApiError> {
        self.get(format!("space/{space_id}/unit/{unit_id}/extended"))
            .await
    }

    pub async fn create_unit(
        &self,
        space_id: Uuid,
        request: &CreateUnitRequest,
    ) -> Result<Unit, ApiError> {
        self.post(format!("space/{space_id}/unit"), request).await
    }

    pub async fn update_unit(
        &self,
        space_id: Uuid,
        unit_id: Uuid,
        patch: &UnitPatch,
    ) -> Result<Unit, ApiError> {
        self.patch(format!("space/{space_id}/unit/{unit_id}"), patch)
            .await
    }

    pub async fn delete_unit(&self, space_id: Uuid, unit_id: Uuid) -> Result<(), ApiError> {
        self.delete(format!("space/{space_id}/unit/{unit_id}")).await
    }

    /// Ask the server to re-read live state for a unit. Completion is
    /// asynchronous; the returned snapshot may still carry gates.
    pub async fn refresh_unit(&self, space_id: Uuid, unit_id: Uuid) -> Result<Unit, ApiError> {
        self.post(format!("space/{space_id}/unit/{unit_id}/refresh"), &())
            .await
    }

    pub async fn bulk_update_units(
        &self,
        space_id: Uuid,
        request: &BulkUpdateUnitsRequest,
    ) -> Result<Vec<BulkUnitResult>, ApiError> {
        self.patch(format!("space/{space_id}/unit"), request).await
    }

    ////////////////////////////////////////////////////////////////////
    // Links

    pub async fn list_links(&self, space_id: Uuid) -> Result<Vec<Link>, ApiError> {
        self.get(format!("space/{space_id}/link")).await
    }

    pub async fn get_link(&self, space_id: Uuid, slug: &str) -> Result<Link, ApiError> {
        self.get(format!(
            "space/{space_id}/link/{}",
            urlencoding::encode(slug)
        ))
        .await
    }

    pub async fn create_link(
        &self,
        space_id: Uuid,
        request: &CreateLinkRequest,
    ) -> Result<Link, ApiError> {
        self.post(format!("space/{space_id}/link"), request).await
    }

    pub async fn delete_link(&self, space_id: Uuid, link_id: Uuid) -> Result<(), ApiError> {
        self.delete(format!("space/{space_id}/link/{link_id}")).await
    }

    ////////////////////////////////////////////////////////////////////
    // Triggers

    pub async fn list_triggers(&self, space_id: Uuid) -> Result<Vec<Trigger>, ApiError> {
        self.get(format!("space/{space_id}/trigger")).await
    }

    pub async fn get_trigger(&self, space_id: Uuid, slug: &str) -> Result<Trigger, ApiError> {
        self.get(format!(
            "space/{space_id}/trigger/{}",
            urlencoding::encode(slug)
        ))
        .await
    }

    pub async fn create_trigger(
        &self,
        space_id: Uuid,
        request: &CreateTriggerRequest,
    ) -> Result<Trigger, ApiError> {
        self.post(format!("space/{space_id}/trigger"), request).await
    }

    pub async fn delete_trigger(&self, space_id: Uuid, trigger_id: Uuid) -> Result<(), ApiError> {
        self.delete(format!("space/{space_id}/trigger/{trigger_id}"))
            .await
    }

    ////////////////////////////////////////////////////////////////////
    // Change sets

    pub async fn list_changesets(&self, space_id: Uuid) -> Result<Vec<ChangeSet>, ApiError> {
        self.get(format!("space/{space_id}/changeset")).await
    }

    pub async fn get_changeset(&self, space_id: Uuid, slug: &str) -> Result<ChangeSet, ApiError> {
        self.get(format!(
            "space/{space_id}/changeset/{}",
            urlencoding::encode(slug)
        ))
        .await
    }

    pub async fn create_changeset(
        &self,
        space_id: Uuid,
        request: &CreateChangeSetRequest,
    ) -> Result<ChangeSet, ApiError> {
        self.post(format!("space/{space_id}/changeset"), request)
            .await
    }

    pub async fn delete_changeset(
        &self,
        space_id: Uuid,
        change_set_id: Uuid,
    ) -> Result<(), ApiError> {
        self.delete(format!("space/{space_id}/changeset/{change_set_id}"))
            .await
    }

    ////////////////////////////////////////////////////////////////////
    // Functions

    pub async fn list_functions(&self, space_id: Uuid) -> Result<Vec<FunctionSpec>, ApiError> {
        self.get(format!("space/{space_id}/function")).await
    }

    pub async fn invoke_function(
        &self,
        space_id: Uuid,
        request: &InvokeFunctionRequest,
    ) -> Result<Vec<FunctionInvocationResult>, ApiError> {
        self.post(format!("space/{space_id}/function/invoke"), request)
            .await
    }
}
