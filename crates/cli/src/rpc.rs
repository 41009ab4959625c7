/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use ::rpc::cli::CubCliResult;
use ::rpc::types::{ListParams, Space, Unit};
use uuid::Uuid;

use crate::cfg::runtime::RuntimeConfig;

/// Thin wrapper over the generated-style ConfigHub client, carrying the
/// handful of convenience operations the command handlers share.
pub struct ApiClient(pub ::rpc::ConfigHubClient);

impl ApiClient {
    /// Look up the space a command operates in, honoring an explicit
    /// --space over the session default.
    pub async fn resolve_space(
        &self,
        explicit: Option<&str>,
        config: &RuntimeConfig,
    ) -> CubCliResult<Space> {
        let slug = config.space_slug(explicit)?;
        Ok(self.0.get_space(slug).await?)
    }

    pub async fn find_unit(&self, space_id: Uuid, slug: &str) -> CubCliResult<Unit> {
        Ok(self.0.get_unit_by_slug(space_id, slug).await?)
    }

    /// Fetch every page of a unit listing. A short page terminates the
    /// iteration.
    pub async fn list_all_units(
        &self,
        space_id: Uuid,
        where_filter: Option<String>,
        select: Option<String>,
        page_size: usize,
    ) -> CubCliResult<Vec<Unit>> {
        let page_size = page_size.max(1);
        let mut units = Vec::new();
        let mut offset = 0;
        loop {
            let page = self
                .0
                .list_units(
                    space_id,
                    &ListParams {
                        where_filter: where_filter.clone(),
                        select: select.clone(),
                        limit: page_size,
                        offset,
                    },
                )
                .await?;
            let page_len = page.len();
            units.extend(page);
            if page_len < page_size {
                break;
            }
            offset += page_len;
        }
        Ok(units)
    }
}
