// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod schema;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use schema::{Schema, SchemaColumn, SchemaError};
pub use value::r#type::{Type, UnknownType};

pub type Result<T> = std::result::Result<T, Error>;
