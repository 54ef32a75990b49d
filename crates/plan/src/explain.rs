// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::{
	node::{PlanNode, ScanNode},
	session::Plan,
};

pub fn explain_scan(node: &ScanNode) -> String {
	let mut output = String::new();
	render_scan(node, "", true, &mut output);
	output
}

pub fn explain_plan(plan: &Plan) -> String {
	let mut output = String::new();
	let count = plan.len();
	for (i, node) in plan.iter().enumerate() {
		render_node(node, "", i + 1 == count, &mut output);
	}
	output
}

/// Write the current operator line
fn write_node_header(output: &mut String, prefix: &str, is_last: bool, label: &str) {
	let branch = if is_last {
		"└──"
	} else {
		"├──"
	};
	let _ = writeln!(output, "{}{} {}", prefix, branch, label);
}

/// Compute prefix for child nodes
fn with_child_prefix<F: FnOnce(&str)>(prefix: &str, is_last: bool, f: F) {
	let child_prefix = format!(
		"{}{}",
		prefix,
		if is_last {
			"    "
		} else {
			"│   "
		}
	);
	f(&child_prefix);
}

fn render_node(node: &PlanNode, prefix: &str, is_last: bool, output: &mut String) {
	match node {
		PlanNode::TableScan(scan) => render_scan(scan, prefix, is_last, output),
	}
}

fn render_scan(node: &ScanNode, prefix: &str, is_last: bool, output: &mut String) {
	write_node_header(output, prefix, is_last, &node.to_string());

	with_child_prefix(prefix, is_last, |child_prefix| {
		let schema = node.output_schema();
		let columns = if schema.is_empty() {
			"(none)".to_string()
		} else {
			schema.to_string()
		};
		write_node_header(output, child_prefix, false, &format!("output: {}", columns));

		let assignments = node.assignments();
		if assignments.is_empty() {
			write_node_header(output, child_prefix, false, "assignments: (none)");
		} else {
			write_node_header(output, child_prefix, false, "assignments");
			with_child_prefix(child_prefix, false, |assignment_prefix| {
				let count = assignments.len();
				for (i, (name, handle)) in assignments.iter().enumerate() {
					let ty = if handle.requested_type() == handle.source_type() {
						handle.requested_type().to_string()
					} else {
						format!("{} as {}", handle.source_type(), handle.requested_type())
					};
					let label = format!("{} <- {} ({}, {})", name, handle.source(), handle.category(), ty);
					write_node_header(output, assignment_prefix, i + 1 == count, &label);
				}
			});
		}

		let table = node.table();
		let pushdown = if table.filter_pushdown_enabled() {
			"pushdown enabled"
		} else {
			"pushdown disabled"
		};
		if table.has_no_filter() {
			write_node_header(output, child_prefix, true, &format!("filter: none ({})", pushdown));
		} else {
			let mut filters: Vec<String> =
				table.subfield_filters().iter().map(|(path, filter)| format!("{} {}", path, filter)).collect();
			if let Some(remaining) = table.remaining_filter() {
				filters.push(remaining.to_string());
			}
			write_node_header(
				output,
				child_prefix,
				true,
				&format!("filter: {} ({})", filters.join(" AND "), pushdown),
			);
		}
	});
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use scanplan_catalog::{ConnectorDef, MemoryConnectorRegistry};
	use scanplan_type::{Schema, Type};

	use super::*;
	use crate::session::PlanSession;

	fn session() -> PlanSession {
		let registry = MemoryConnectorRegistry::new();
		registry.register(ConnectorDef::hive("hive")).unwrap();
		PlanSession::builder().registry(Arc::new(registry)).build()
	}

	#[test]
	fn test_explain_scan() {
		let node = session()
			.table_scan(
				"orders",
				Schema::empty().with_column("id", Type::Int8).with_column("amount", Type::Float8),
				"hive",
			)
			.unwrap();

		assert_eq!(
			explain_scan(&node),
			"\
└── TableScan hive.orders [id=0]
    ├── output: id Int8, amount Float8
    ├── assignments
    │   ├── id <- id (regular, Int8)
    │   └── amount <- amount (regular, Float8)
    └── filter: none (pushdown enabled)
"
		);
	}

	#[test]
	fn test_explain_empty_scan() {
		let node = session().table_scan("orders", Schema::empty(), "hive").unwrap();
		assert_eq!(
			explain_scan(&node),
			"\
└── TableScan hive.orders [id=0]
    ├── output: (none)
    ├── assignments: (none)
    └── filter: none (pushdown enabled)
"
		);
	}

	#[test]
	fn test_explain_plan() {
		let session = session();
		session.table_scan("a", Schema::empty().with_column("x", Type::Utf8), "hive").unwrap();
		session.table_scan("b", Schema::empty().with_column("y", Type::Date), "hive").unwrap();

		assert_eq!(
			explain_plan(&session.finish()),
			"\
├── TableScan hive.a [id=0]
│   ├── output: x Utf8
│   ├── assignments
│   │   └── x <- x (regular, Utf8)
│   └── filter: none (pushdown enabled)
└── TableScan hive.b [id=1]
    ├── output: y Date
    ├── assignments
    │   └── y <- y (regular, Date)
    └── filter: none (pushdown enabled)
"
		);
	}
}
