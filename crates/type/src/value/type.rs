// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Column type descriptors understood by scan planning.
///
/// The planner never inspects these beyond equality; they are carried from the
/// requested schema into column handles unchanged.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A UTF-8 encoded text.
	Utf8,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// A 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A date value (year, month, day)
	Date,
	/// A date and time value with nanosecond precision in UTC
	DateTime,
	/// A time value (hour, minute, second, nanosecond)
	Time,
	/// An interval representing a duration
	Interval,
	/// A UUID version 4 (random)
	Uuid4,
	/// A UUID version 7 (timestamp-based)
	Uuid7,
	/// A binary large object (BLOB)
	Blob,
}

impl Type {
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::DateTime | Type::Time | Type::Interval)
	}

	pub fn is_uuid(&self) -> bool {
		matches!(self, Type::Uuid4 | Type::Uuid7)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Uint16 => f.write_str("Uint16"),
			Type::Date => f.write_str("Date"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Time => f.write_str("Time"),
			Type::Interval => f.write_str("Interval"),
			Type::Uuid4 => f.write_str("Uuid4"),
			Type::Uuid7 => f.write_str("Uuid7"),
			Type::Blob => f.write_str("Blob"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type '{0}'")]
pub struct UnknownType(pub String);

impl FromStr for Type {
	type Err = UnknownType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"BOOL" | "BOOLEAN" => Ok(Type::Boolean),
			"FLOAT4" | "FLOAT" | "REAL" => Ok(Type::Float4),
			"FLOAT8" | "DOUBLE" => Ok(Type::Float8),
			"INT1" | "TINYINT" => Ok(Type::Int1),
			"INT2" | "SMALLINT" => Ok(Type::Int2),
			"INT4" | "INT" | "INTEGER" | "INT32" => Ok(Type::Int4),
			"INT8" | "BIGINT" | "INT64" => Ok(Type::Int8),
			"INT16" | "HUGEINT" | "INT128" => Ok(Type::Int16),
			"UTF8" | "TEXT" | "VARCHAR" | "STRING" => Ok(Type::Utf8),
			"UINT1" => Ok(Type::Uint1),
			"UINT2" => Ok(Type::Uint2),
			"UINT4" => Ok(Type::Uint4),
			"UINT8" => Ok(Type::Uint8),
			"UINT16" => Ok(Type::Uint16),
			"DATE" => Ok(Type::Date),
			"DATETIME" | "TIMESTAMP" => Ok(Type::DateTime),
			"TIME" => Ok(Type::Time),
			"INTERVAL" => Ok(Type::Interval),
			"UUID4" => Ok(Type::Uuid4),
			"UUID7" => Ok(Type::Uuid7),
			"BLOB" | "VARBINARY" => Ok(Type::Blob),
			_ => Err(UnknownType(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_canonical_names() {
		assert_eq!("int8".parse::<Type>().unwrap(), Type::Int8);
		assert_eq!("Float8".parse::<Type>().unwrap(), Type::Float8);
		assert_eq!("UTF8".parse::<Type>().unwrap(), Type::Utf8);
		assert_eq!("uuid7".parse::<Type>().unwrap(), Type::Uuid7);
	}

	#[test]
	fn test_parse_sql_aliases() {
		assert_eq!("int".parse::<Type>().unwrap(), Type::Int4);
		assert_eq!("int64".parse::<Type>().unwrap(), Type::Int8);
		assert_eq!("bigint".parse::<Type>().unwrap(), Type::Int8);
		assert_eq!("double".parse::<Type>().unwrap(), Type::Float8);
		assert_eq!("varchar".parse::<Type>().unwrap(), Type::Utf8);
		assert_eq!("timestamp".parse::<Type>().unwrap(), Type::DateTime);
	}

	#[test]
	fn test_parse_unknown() {
		assert_eq!("decimal".parse::<Type>(), Err(UnknownType("decimal".to_string())));
	}

	#[test]
	fn test_display_parses_back() {
		for ty in [Type::Boolean, Type::Int16, Type::Uint4, Type::DateTime, Type::Blob] {
			assert_eq!(ty.to_string().parse::<Type>().unwrap(), ty);
		}
	}

	#[test]
	fn test_categories() {
		assert!(Type::Int2.is_signed_integer());
		assert!(Type::Uint8.is_unsigned_integer());
		assert!(Type::Float4.is_number());
		assert!(!Type::Utf8.is_number());
		assert!(Type::Interval.is_temporal());
		assert!(Type::Uuid4.is_uuid());
	}
}
