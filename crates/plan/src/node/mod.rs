// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use scanplan_type::Schema;
use serde::{Deserialize, Serialize};

use crate::id::PlanNodeId;

mod column;
mod scan;

pub use column::{Assignments, ColumnCategory, ColumnHandle};
pub use scan::ScanNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanNode {
	TableScan(ScanNode),
}

impl PlanNode {
	pub fn id(&self) -> PlanNodeId {
		match self {
			PlanNode::TableScan(node) => node.id(),
		}
	}

	pub fn output_schema(&self) -> &Schema {
		match self {
			PlanNode::TableScan(node) => node.output_schema(),
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			PlanNode::TableScan(_) => "TableScan",
		}
	}
}

impl From<ScanNode> for PlanNode {
	fn from(node: ScanNode) -> Self {
		PlanNode::TableScan(node)
	}
}
