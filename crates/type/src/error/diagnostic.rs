// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter, Write};

use serde::{Deserialize, Serialize};

/// Structured description of a failure, shared by every crate in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Renders the diagnostic and its cause chain as multi-line text.
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output, 0);
		output
	}

	fn render_into(&self, output: &mut String, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = writeln!(output, "{}Error {}", indent, self.code);
		let _ = writeln!(output, "{}  {}", indent, self.message);
		if let Some(label) = &self.label {
			let _ = writeln!(output, "{}  LABEL: {}", indent, label);
		}
		if let Some(help) = &self.help {
			let _ = writeln!(output, "{}  HELP: {}", indent, help);
		}
		for note in &self.notes {
			let _ = writeln!(output, "{}  NOTE: {}", indent, note);
		}
		if let Some(cause) = &self.cause {
			let _ = writeln!(output, "{}  CAUSED BY:", indent);
			cause.render_into(output, depth + 2);
		}
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)
	}
}
