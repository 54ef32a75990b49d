// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	sync::atomic::{AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Identity of a node within one plan.
///
/// Rendered as the decimal value of the allocator counter (`"0"`, `"1"`, ...).
/// Ordering follows issuance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanNodeId(pub u64);

impl Display for PlanNodeId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<PlanNodeId> for String {
	fn from(id: PlanNodeId) -> Self {
		id.to_string()
	}
}

/// Session-scoped source of plan node ids.
///
/// `next` is a single atomic read-modify-write, so concurrent callers sharing
/// one allocator never observe the same value. The counter never wraps: once
/// it reaches `u64::MAX` every call fails with `AllocatorExhausted`.
#[derive(Debug)]
pub struct PlanNodeIdAllocator {
	start: u64,
	next: AtomicU64,
}

impl PlanNodeIdAllocator {
	pub fn new() -> Self {
		Self::with_start(0)
	}

	pub fn with_start(start: u64) -> Self {
		Self {
			start,
			next: AtomicU64::new(start),
		}
	}

	pub fn next(&self) -> crate::Result<PlanNodeId> {
		self.next
			.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| current.checked_add(1))
			.map(PlanNodeId)
			.map_err(|_| PlanError::AllocatorExhausted)
	}

	/// The first id this allocator hands out.
	pub fn start(&self) -> PlanNodeId {
		PlanNodeId(self.start)
	}

	/// Whether `id` has already been handed out by this allocator.
	pub fn has_issued(&self, id: PlanNodeId) -> bool {
		id.0 >= self.start && id.0 < self.next.load(Ordering::Acquire)
	}

	/// The id the next successful `next` call will return.
	pub fn peek(&self) -> PlanNodeId {
		PlanNodeId(self.next.load(Ordering::Acquire))
	}

	pub fn issued(&self) -> u64 {
		self.next.load(Ordering::Acquire) - self.start
	}
}

impl Default for PlanNodeIdAllocator {
	fn default() -> Self {
		Self::new()
	}
}
