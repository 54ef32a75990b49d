// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Golden explain scripts.
//!
//! Each script lists commands, then a `----` line, then the expected output:
//!
//! ```text
//! connector hive
//! connector tpch lineitem orders
//! pushdown off
//! scan orders hive id:int8 amount:float8
//! ----
//! <explain output or `error: ...` per scan>
//! ```

use std::{fmt::Write, sync::Arc};

use scanplan_catalog::{ConnectorDef, ConnectorKind, MemoryConnectorRegistry};
use scanplan_plan::{PlanSession, explain_plan, explain_scan};
use scanplan_type::{Schema, Type};
use test_each_file::test_each_file;

test_each_file! { in "crates/plan/tests/scripts" as explain => run_script }

fn run_script(content: &str) {
	let (commands, expected) = content.split_once("\n----\n").expect("script has no ---- separator");

	let registry = Arc::new(MemoryConnectorRegistry::new());
	let mut pushdown = true;
	let mut session: Option<PlanSession> = None;
	let mut output = String::new();

	for line in commands.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')) {
		let mut words = line.split_whitespace();
		match words.next().unwrap() {
			"connector" => {
				let id = words.next().expect("connector id");
				let tables: Vec<&str> = words.collect();
				let def = if tables.is_empty() {
					ConnectorDef::hive(id)
				} else {
					ConnectorDef::with_tables(id, ConnectorKind::Memory, tables)
				};
				registry.register(def).unwrap();
			}
			"pushdown" => {
				pushdown = words.next() == Some("on");
			}
			"scan" => {
				let table = words.next().expect("table name");
				let table = if table == "''" {
					""
				} else {
					table
				};
				let connector = words.next().expect("connector id");
				let schema: Schema = words
					.map(|column| {
						let (name, ty) = column.split_once(':').expect("column as name:type");
						(name, ty.parse::<Type>().unwrap())
					})
					.collect();

				let session = session.get_or_insert_with(|| {
					PlanSession::builder().filter_pushdown(pushdown).registry(registry.clone()).build()
				});
				match session.table_scan(table, schema, connector) {
					Ok(node) => output.push_str(&explain_scan(&node)),
					Err(err) => writeln!(output, "error: {}", err).unwrap(),
				}
			}
			"plan" => {
				let session = session.take().expect("plan without scans");
				output.push_str(&explain_plan(&session.finish()));
			}
			other => panic!("unknown command '{}'", other),
		}
	}

	assert_eq!(output.trim_end(), expected.trim_end(), "\n{}", output);
}
