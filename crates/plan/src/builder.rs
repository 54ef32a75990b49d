// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use scanplan_catalog::ConnectorRegistry;
use scanplan_type::Schema;
use tracing::{debug, instrument};

use crate::{
	error::PlanError,
	id::PlanNodeIdAllocator,
	node::{Assignments, ScanNode},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanBuilderConfig {
	/// Stamped on every table handle; lets the connector push filters down
	/// once a later stage attaches them.
	pub filter_pushdown: bool,
}

impl Default for ScanBuilderConfig {
	fn default() -> Self {
		Self {
			filter_pushdown: true,
		}
	}
}

/// Builds table-scan nodes whose ids come from a shared allocator.
///
/// Cloning is cheap; clones share the allocator and registry, so ids stay
/// unique across every clone and thread.
#[derive(Clone)]
pub struct ScanPlanBuilder {
	ids: Arc<PlanNodeIdAllocator>,
	registry: Arc<dyn ConnectorRegistry>,
	config: ScanBuilderConfig,
}

impl ScanPlanBuilder {
	pub fn new(ids: Arc<PlanNodeIdAllocator>, registry: Arc<dyn ConnectorRegistry>) -> Self {
		Self {
			ids,
			registry,
			config: ScanBuilderConfig::default(),
		}
	}

	pub fn with_config(mut self, config: ScanBuilderConfig) -> Self {
		self.config = config;
		self
	}

	pub fn config(&self) -> &ScanBuilderConfig {
		&self.config
	}

	/// Builds a scan of `table_name` on `connector_id` producing `output_schema`.
	///
	/// Every output column is assigned to the stored column of the same name and
	/// type. The table handle carries no filters. An id is drawn from the
	/// allocator only once everything else has succeeded.
	#[instrument(
		name = "plan::scan::table_scan",
		level = "debug",
		skip(self, output_schema),
		fields(columns = output_schema.len())
	)]
	pub fn table_scan(&self, table_name: &str, output_schema: Schema, connector_id: &str) -> crate::Result<ScanNode> {
		if table_name.is_empty() {
			return Err(PlanError::EmptyTableName);
		}

		output_schema.validate().map_err(|source| PlanError::InvalidSchema {
			table: table_name.to_string(),
			source,
		})?;

		let assignments = Assignments::regular(&output_schema);

		let table = self
			.registry
			.resolve(connector_id, table_name)?
			.with_filter_pushdown(self.config.filter_pushdown);

		let id = self.ids.next()?;
		debug!(%id, table = %table, "built table scan");

		Ok(ScanNode::new(id, output_schema, table, assignments))
	}
}

impl Debug for ScanPlanBuilder {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScanPlanBuilder").field("ids", &self.ids).field("config", &self.config).finish_non_exhaustive()
	}
}
