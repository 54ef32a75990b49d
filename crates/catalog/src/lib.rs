// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod connector;
pub mod error;
pub mod handle;

pub use connector::{ConnectorDef, ConnectorKind, ConnectorRegistry, MemoryConnectorRegistry, TableSet};
pub use error::CatalogError;
pub use handle::{SubfieldFilters, TableHandle};

pub type Result<T> = std::result::Result<T, CatalogError>;
