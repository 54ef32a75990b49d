// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Plan-construction sessions.
//!
//! A session owns one id allocator and collects the nodes built through it.
//! Finishing the session yields the [`Plan`]; the allocator is dropped with it.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use scanplan_catalog::{ConnectorRegistry, MemoryConnectorRegistry};
use scanplan_type::Schema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
	builder::{ScanBuilderConfig, ScanPlanBuilder},
	error::PlanError,
	id::{PlanNodeId, PlanNodeIdAllocator},
	node::{PlanNode, ScanNode},
};

pub struct SessionBuilder {
	first_node_id: u64,
	filter_pushdown: bool,
	registry: Option<Arc<dyn ConnectorRegistry>>,
}

impl Default for SessionBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl SessionBuilder {
	pub fn new() -> Self {
		Self {
			first_node_id: 0,
			filter_pushdown: true,
			registry: None,
		}
	}

	/// Set the id handed to the first node. Defaults to 0.
	pub fn first_node_id(mut self, id: u64) -> Self {
		self.first_node_id = id;
		self
	}

	/// Set the filter-pushdown flag stamped on table handles. Defaults to true.
	pub fn filter_pushdown(mut self, enabled: bool) -> Self {
		self.filter_pushdown = enabled;
		self
	}

	/// Set the registry used to resolve connectors and tables.
	/// Without one, the session starts with an empty registry.
	pub fn registry(mut self, registry: Arc<dyn ConnectorRegistry>) -> Self {
		self.registry = Some(registry);
		self
	}

	pub fn build(self) -> PlanSession {
		let registry = self.registry.unwrap_or_else(|| Arc::new(MemoryConnectorRegistry::new()));
		PlanSession {
			ids: Arc::new(PlanNodeIdAllocator::with_start(self.first_node_id)),
			registry,
			config: ScanBuilderConfig {
				filter_pushdown: self.filter_pushdown,
			},
			nodes: Mutex::new(IndexMap::new()),
		}
	}
}

pub struct PlanSession {
	ids: Arc<PlanNodeIdAllocator>,
	registry: Arc<dyn ConnectorRegistry>,
	config: ScanBuilderConfig,
	nodes: Mutex<IndexMap<PlanNodeId, PlanNode>>,
}

impl PlanSession {
	pub fn builder() -> SessionBuilder {
		SessionBuilder::new()
	}

	/// A builder drawing ids from this session's allocator.
	///
	/// Nodes it builds are not recorded; pass them to [`PlanSession::add`].
	pub fn scan_builder(&self) -> ScanPlanBuilder {
		ScanPlanBuilder::new(Arc::clone(&self.ids), Arc::clone(&self.registry)).with_config(self.config.clone())
	}

	pub fn allocator(&self) -> &PlanNodeIdAllocator {
		&self.ids
	}

	/// Builds a table scan and records it in the session.
	pub fn table_scan(&self, table_name: &str, output_schema: Schema, connector_id: &str) -> crate::Result<ScanNode> {
		let node = self.scan_builder().table_scan(table_name, output_schema, connector_id)?;
		self.add(node.clone())?;
		Ok(node)
	}

	/// Records a node built by one of this session's scan builders.
	///
	/// Ids the session allocator has not handed out yet are rejected, so a
	/// later [`PlanSession::table_scan`] can never collide with a recorded node.
	pub fn add(&self, node: impl Into<PlanNode>) -> crate::Result<PlanNodeId> {
		let node = node.into();
		let id = node.id();

		if !self.ids.has_issued(id) {
			return Err(PlanError::ForeignNodeId {
				id,
			});
		}

		let mut nodes = self.nodes.lock();
		if nodes.contains_key(&id) {
			return Err(PlanError::DuplicateNodeId {
				id,
			});
		}
		nodes.insert(id, node);
		Ok(id)
	}

	pub fn node(&self, id: PlanNodeId) -> Option<PlanNode> {
		self.nodes.lock().get(&id).cloned()
	}

	pub fn len(&self) -> usize {
		self.nodes.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.lock().is_empty()
	}

	#[instrument(name = "plan::session::finish", level = "debug", skip(self))]
	pub fn finish(self) -> Plan {
		let nodes = self.nodes.into_inner();
		debug!(nodes = nodes.len(), "plan session finished");
		Plan {
			nodes,
		}
	}
}

/// Nodes produced by one session, keyed by id in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
	nodes: IndexMap<PlanNodeId, PlanNode>,
}

impl Plan {
	pub fn get(&self, id: PlanNodeId) -> Option<&PlanNode> {
		self.nodes.get(&id)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn ids(&self) -> impl Iterator<Item = PlanNodeId> + '_ {
		self.nodes.keys().copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = &PlanNode> {
		self.nodes.values()
	}
}
