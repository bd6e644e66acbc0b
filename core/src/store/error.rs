/*
 * error.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of mapiex-rs, Rust bindings for the MAPIEx library.
 *
 * mapiex-rs is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * mapiex-rs is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with mapiex-rs.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Binding errors.

use crate::native::DateParts;

/// Errors from wrapper operations and from loading the native library.
#[derive(Debug, thiserror::Error)]
pub enum MapiError {
    /// The wrapper holds no handle. Raised before any native call.
    #[error("no open {0} handle")]
    NullHandle(&'static str),
    /// The native operation reported failure (false or null).
    #[error("{0} failed")]
    Native(&'static str),
    /// The native library has no call for this field.
    #[error("{0} is not supported by the native library")]
    Unsupported(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("native date {0:?} is not a valid date")]
    InvalidDate(DateParts),
    /// An integer tag outside the known range.
    #[error("{op} returned unexpected value {value}")]
    UnexpectedValue { op: &'static str, value: i32 },
    #[error("cannot load {path}: {reason}")]
    Library { path: String, reason: String },
    #[error("configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MapiError>;

/// Map a native success flag to `Ok(())`.
pub(crate) fn check(ok: bool, op: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(MapiError::Native(op))
    }
}
