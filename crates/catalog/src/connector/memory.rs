// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;
use tracing::instrument;

use super::{ConnectorDef, ConnectorRegistry, TableSet};
use crate::{CatalogError, handle::TableHandle};

/// In-process connector registry.
#[derive(Debug, Default)]
pub struct MemoryConnectorRegistry {
	connectors: RwLock<IndexMap<String, ConnectorDef>>,
}

impl MemoryConnectorRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	#[instrument(name = "catalog::connector::register", level = "debug", skip(self, def), fields(connector = %def.id))]
	pub fn register(&self, def: ConnectorDef) -> crate::Result<()> {
		let mut connectors = self.connectors.write();
		if connectors.contains_key(&def.id) {
			return Err(CatalogError::DuplicateConnector {
				connector: def.id,
			});
		}
		connectors.insert(def.id.clone(), def);
		Ok(())
	}

	/// Adds `table` to the connector's table set.
	///
	/// An open connector is narrowed to exactly this table.
	#[instrument(name = "catalog::connector::register_table", level = "debug", skip(self))]
	pub fn register_table(&self, connector: &str, table: &str) -> crate::Result<()> {
		let mut connectors = self.connectors.write();
		let Some(def) = connectors.get_mut(connector) else {
			return Err(CatalogError::UnknownConnector {
				connector: connector.to_string(),
			});
		};

		match &mut def.tables {
			TableSet::Only(tables) => {
				tables.insert(table.to_string());
			}
			tables @ TableSet::Any => {
				*tables = TableSet::Only(IndexSet::from([table.to_string()]));
			}
		}
		Ok(())
	}

	pub fn get(&self, connector: &str) -> Option<ConnectorDef> {
		self.connectors.read().get(connector).cloned()
	}

	/// Registered connector ids in registration order.
	pub fn connectors(&self) -> Vec<String> {
		self.connectors.read().keys().cloned().collect()
	}
}

impl ConnectorRegistry for MemoryConnectorRegistry {
	#[instrument(name = "catalog::connector::resolve", level = "trace", skip(self))]
	fn resolve(&self, connector: &str, table: &str) -> crate::Result<TableHandle> {
		let connectors = self.connectors.read();
		let def = connectors.get(connector).ok_or_else(|| CatalogError::UnknownConnector {
			connector: connector.to_string(),
		})?;

		if !def.tables.contains(table) {
			return Err(CatalogError::UnknownTable {
				connector: connector.to_string(),
				table: table.to_string(),
			});
		}

		Ok(TableHandle::new(connector, table))
	}
}
