// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, sync::Arc, thread};

use scanplan::{ConnectorDef, MemoryConnectorRegistry, PlanNodeId, PlanNodeIdAllocator, PlanSession, Schema, Type};

const THREADS: usize = 8;
const PER_THREAD: usize = 125;

#[test]
fn allocator_ids_are_distinct_across_threads() {
	let ids = Arc::new(PlanNodeIdAllocator::new());

	let handles: Vec<_> = (0..THREADS)
		.map(|_| {
			let ids = Arc::clone(&ids);
			thread::spawn(move || (0..PER_THREAD).map(|_| ids.next().unwrap()).collect::<Vec<_>>())
		})
		.collect();

	let all: Vec<PlanNodeId> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
	let distinct: HashSet<_> = all.iter().collect();

	assert_eq!(all.len(), 1000);
	assert_eq!(distinct.len(), 1000);
}

#[test]
fn concurrent_scans_share_one_session() {
	let registry = MemoryConnectorRegistry::new();
	registry.register(ConnectorDef::hive("hive")).unwrap();
	let session = Arc::new(PlanSession::builder().registry(Arc::new(registry)).build());

	let handles: Vec<_> = (0..THREADS)
		.map(|t| {
			let session = Arc::clone(&session);
			thread::spawn(move || {
				let builder = session.scan_builder();
				for i in 0..PER_THREAD {
					let schema = Schema::empty().with_column(format!("c{}", i), Type::Int4);
					let node = builder.table_scan(&format!("t{}", t), schema, "hive").unwrap();
					session.add(node).unwrap();
				}
			})
		})
		.collect();

	for handle in handles {
		handle.join().unwrap();
	}

	let session = Arc::into_inner(session).unwrap();
	let plan = session.finish();
	assert_eq!(plan.len(), THREADS * PER_THREAD);

	let mut ids: Vec<u64> = plan.ids().map(|id| id.0).collect();
	ids.sort();
	assert_eq!(ids, (0..1000).collect::<Vec<u64>>());
}
