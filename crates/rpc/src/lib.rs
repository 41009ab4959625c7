/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 ConfigHub, Inc. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub mod client;
pub mod errors;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::ConfigHubClient;
pub use errors::ApiError;
