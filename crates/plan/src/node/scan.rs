// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use scanplan_catalog::TableHandle;
use scanplan_type::Schema;
use serde::{Deserialize, Serialize};

use super::column::Assignments;
use crate::{error::PlanError, id::PlanNodeId};

/// A table scan: reads `assignments` from `table` and produces rows shaped by
/// `output_schema`.
///
/// Deserialized nodes are checked the same way built ones are: a valid output
/// schema and exactly one assignment per output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScanNodeParts")]
pub struct ScanNode {
	id: PlanNodeId,
	output_schema: Schema,
	table: TableHandle,
	assignments: Assignments,
}

impl ScanNode {
	pub(crate) fn new(id: PlanNodeId, output_schema: Schema, table: TableHandle, assignments: Assignments) -> Self {
		Self {
			id,
			output_schema,
			table,
			assignments,
		}
	}

	pub fn id(&self) -> PlanNodeId {
		self.id
	}

	pub fn output_schema(&self) -> &Schema {
		&self.output_schema
	}

	pub fn table(&self) -> &TableHandle {
		&self.table
	}

	pub fn assignments(&self) -> &Assignments {
		&self.assignments
	}
}

#[derive(Deserialize)]
struct ScanNodeParts {
	id: PlanNodeId,
	output_schema: Schema,
	table: TableHandle,
	assignments: Assignments,
}

impl TryFrom<ScanNodeParts> for ScanNode {
	type Error = PlanError;

	fn try_from(parts: ScanNodeParts) -> Result<Self, Self::Error> {
		let ScanNodeParts {
			id,
			output_schema,
			table,
			assignments,
		} = parts;

		output_schema.validate().map_err(|source| PlanError::InvalidSchema {
			table: table.table().to_string(),
			source,
		})?;

		for column in &output_schema {
			match assignments.get(&column.name) {
				Some(handle) if handle.requested_type() == column.ty => {}
				_ => {
					return Err(PlanError::AssignmentMismatch {
						column: column.name.clone(),
					});
				}
			}
		}

		if let Some((extra, _)) = assignments.iter().find(|(name, _)| output_schema.find(name).is_none()) {
			return Err(PlanError::AssignmentMismatch {
				column: extra.to_string(),
			});
		}

		Ok(Self::new(id, output_schema, table, assignments))
	}
}

impl Display for ScanNode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "TableScan {} [id={}]", self.table, self.id)
	}
}
