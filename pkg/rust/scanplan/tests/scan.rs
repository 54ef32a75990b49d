// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use scanplan::{
	CatalogError, ColumnCategory, ConnectorDef, ConnectorKind, Error, MemoryConnectorRegistry, PlanError, PlanSession,
	Schema, SchemaError, Type,
};

fn session() -> PlanSession {
	let registry = MemoryConnectorRegistry::new();
	registry.register(ConnectorDef::hive("hive")).unwrap();
	registry.register(ConnectorDef::with_tables("tpch", ConnectorKind::Memory, ["lineitem", "orders"])).unwrap();
	PlanSession::builder().registry(Arc::new(registry)).build()
}

fn schema(columns: &[(&str, &str)]) -> Schema {
	columns.iter().map(|(name, ty)| (*name, ty.parse::<Type>().unwrap())).collect()
}

#[test]
fn orders_scan() {
	let session = session();
	let node = session.table_scan("orders", schema(&[("id", "int64"), ("amount", "double")]), "hive").unwrap();

	assert_eq!(node.table().connector(), "hive");
	assert_eq!(node.table().table(), "orders");
	assert!(node.table().has_no_filter());
	assert!(!node.id().to_string().is_empty());

	let id = node.assignments().get("id").unwrap();
	assert_eq!((id.category(), id.requested_type()), (ColumnCategory::Regular, Type::Int8));
	let amount = node.assignments().get("amount").unwrap();
	assert_eq!((amount.category(), amount.requested_type()), (ColumnCategory::Regular, Type::Float8));
}

#[test]
fn assignments_cover_schema() {
	let session = session();
	let schemas = [
		schema(&[]),
		schema(&[("a", "int")]),
		schema(&[("l_orderkey", "int8"), ("l_partkey", "int8"), ("l_comment", "text"), ("l_shipdate", "date")]),
	];

	for s in schemas {
		let node = session.table_scan("lineitem", s.clone(), "tpch").unwrap();
		assert_eq!(node.output_schema(), &s);
		assert_eq!(node.assignments().len(), s.len());
		for column in &s {
			let handle = node.assignments().get(&column.name).unwrap();
			assert_eq!(handle.source(), column.name);
			assert_eq!(handle.source_type(), column.ty);
			assert_eq!(handle.requested_type(), column.ty);
		}
	}
}

#[test]
fn repeated_scan_gets_fresh_id() {
	let session = session();
	let s = schema(&[("id", "int64")]);
	let first = session.table_scan("orders", s.clone(), "hive").unwrap();
	let second = session.table_scan("orders", s, "hive").unwrap();

	assert_ne!(first.id(), second.id());
	assert_eq!(first.output_schema(), second.output_schema());
	assert_eq!(first.assignments(), second.assignments());

	let plan = session.finish();
	assert_eq!(plan.len(), 2);
}

#[test]
fn duplicate_column_is_invalid_schema() {
	let err = session().table_scan("t", schema(&[("a", "int"), ("a", "int")]), "hive").unwrap_err();
	assert!(matches!(
		err,
		PlanError::InvalidSchema {
			source: SchemaError::DuplicateColumn { ref name, .. },
			..
		} if name == "a"
	));
	assert_eq!(Error::from(err).code(), "PLAN_001");
}

#[test]
fn unknown_connector() {
	let session = session();
	let err = session.table_scan("t", schema(&[("a", "int")]), "nonexistent_connector").unwrap_err();
	assert_eq!(
		err,
		PlanError::Catalog(CatalogError::UnknownConnector {
			connector: "nonexistent_connector".to_string(),
		})
	);
	assert!(session.is_empty());
	assert_eq!(Error::from(err).code(), "CATALOG_001");
}

#[test]
fn unknown_table_on_closed_connector() {
	let err = session().table_scan("customer", schema(&[("c_custkey", "int8")]), "tpch").unwrap_err();
	assert_eq!(Error::from(err).code(), "CATALOG_002");
}

#[test]
fn scan_node_serializes() {
	let node = session().table_scan("orders", schema(&[("id", "int64")]), "hive").unwrap();
	let json = serde_json::to_value(&node).unwrap();

	assert_eq!(json["id"], 0);
	assert_eq!(json["table"]["connector"], "hive");
	assert_eq!(json["table"]["table"], "orders");
	assert_eq!(json["assignments"]["id"]["category"], "Regular");
	assert_eq!(json["assignments"]["id"]["requested_type"], "Int8");
}
