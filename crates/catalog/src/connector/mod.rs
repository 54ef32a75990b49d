// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	sync::Arc,
};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::handle::TableHandle;

mod memory;

pub use memory::MemoryConnectorRegistry;

/// Resolves `(connector, table)` pairs into validated table handles.
pub trait ConnectorRegistry: Send + Sync {
	/// Returns a filter-free handle for `table` on `connector`, or
	/// `UnknownConnector` / `UnknownTable`.
	fn resolve(&self, connector: &str, table: &str) -> crate::Result<TableHandle>;
}

impl<R: ConnectorRegistry + ?Sized> ConnectorRegistry for Arc<R> {
	fn resolve(&self, connector: &str, table: &str) -> crate::Result<TableHandle> {
		(**self).resolve(connector, table)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorKind {
	Hive,
	Memory,
	Other(String),
}

impl Display for ConnectorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ConnectorKind::Hive => f.write_str("hive"),
			ConnectorKind::Memory => f.write_str("memory"),
			ConnectorKind::Other(name) => f.write_str(name),
		}
	}
}

/// Tables a connector is willing to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableSet {
	/// Any table name; existence is checked by the storage layer at read time.
	Any,
	/// Only the listed tables.
	Only(IndexSet<String>),
}

impl TableSet {
	pub fn contains(&self, table: &str) -> bool {
		match self {
			TableSet::Any => true,
			TableSet::Only(tables) => tables.contains(table),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorDef {
	pub id: String,
	pub kind: ConnectorKind,
	pub tables: TableSet,
}

impl ConnectorDef {
	/// A connector that accepts any table name.
	pub fn open(id: impl Into<String>, kind: ConnectorKind) -> Self {
		Self {
			id: id.into(),
			kind,
			tables: TableSet::Any,
		}
	}

	/// A connector that resolves only `tables`.
	pub fn with_tables<I, T>(id: impl Into<String>, kind: ConnectorKind, tables: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		Self {
			id: id.into(),
			kind,
			tables: TableSet::Only(tables.into_iter().map(Into::into).collect()),
		}
	}

	pub fn hive(id: impl Into<String>) -> Self {
		Self::open(id, ConnectorKind::Hive)
	}
}
