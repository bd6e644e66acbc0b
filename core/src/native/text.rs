/*
 * text.rs
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

//! Native text: TCHAR units, NUL-terminated arguments, and fixed-capacity output buffers.
//!
//! The native library writes text into a caller-supplied buffer of stated length and
//! truncates silently when the value does not fit. That contract is kept as is: a
//! [`TextBuffer`] of capacity N yields at most N characters, never an error.

use crate::store::MapiError;

/// One native character unit. Fixed at compile time to match how MAPIEx was built.
#[cfg(not(feature = "unicode"))]
pub type TChar = u8;
/// One native character unit. Fixed at compile time to match how MAPIEx was built.
#[cfg(feature = "unicode")]
pub type TChar = u16;

/// Default capacity of text buffers, matching the native samples.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Encode for the native side. `None` if `s` has a character the code page cannot hold.
///
/// Single-byte builds of MAPIEx take ANSI text, which is Windows-1252 on the Western
/// European locales it targets: one byte per character.
#[cfg(not(feature = "unicode"))]
pub fn encode_units(s: &str) -> Option<Vec<TChar>> {
    let (bytes, _, unmappable) = encoding_rs::WINDOWS_1252.encode(s);
    (!unmappable).then(|| bytes.into_owned())
}

#[cfg(feature = "unicode")]
pub fn encode_units(s: &str) -> Option<Vec<TChar>> {
    Some(s.encode_utf16().collect())
}

/// Like [`encode_units`], but replaces characters the code page cannot hold.
#[cfg(not(feature = "unicode"))]
fn encode_lossy(s: &str) -> Vec<TChar> {
    s.chars()
        .flat_map(|c| {
            let mut tmp = [0u8; 4];
            encode_units(c.encode_utf8(&mut tmp)).unwrap_or_else(|| vec![b'?'])
        })
        .collect()
}

#[cfg(feature = "unicode")]
fn encode_lossy(s: &str) -> Vec<TChar> {
    s.encode_utf16().collect()
}

/// Decode units up to (not including) the first NUL, or all of them if there is none.
#[cfg(not(feature = "unicode"))]
pub fn decode_units(units: &[TChar]) -> String {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    encoding_rs::WINDOWS_1252
        .decode_without_bom_handling(&units[..end])
        .0
        .into_owned()
}

/// Decode units up to (not including) the first NUL, or all of them if there is none.
#[cfg(feature = "unicode")]
pub fn decode_units(units: &[TChar]) -> String {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..end])
}

/// Copy `value` into `dest` the way the native library fills output buffers: at most
/// `dest.len()` units including the terminator, truncating silently.
///
/// Fake native layers use this so they honour the same contract as the DLL.
pub fn copy_native_text(dest: &mut [TChar], value: &str) {
    if dest.is_empty() {
        return;
    }
    let src = encode_lossy(value);
    let n = (src.len() + 1).min(dest.len());
    let copied = n.min(src.len());
    dest[..copied].copy_from_slice(&src[..copied]);
    if copied < dest.len() {
        dest[copied] = 0;
    }
    if n == dest.len() {
        dest[dest.len() - 1] = 0;
    }
}

/// NUL-terminated string argument for the native library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArg(Vec<TChar>);

impl TextArg {
    /// Encode `s`. Fails if it contains a NUL, which the native side would cut at.
    pub fn new(s: &str) -> Result<Self, MapiError> {
        if s.contains('\0') {
            return Err(MapiError::InvalidArgument(format!(
                "string contains NUL: {:?}",
                s
            )));
        }
        let mut units = encode_units(s).ok_or_else(|| {
            MapiError::InvalidArgument(format!(
                "not representable in the native code page: {:?}",
                s
            ))
        })?;
        units.push(0);
        Ok(Self(units))
    }

    pub fn empty() -> Self {
        Self(vec![0])
    }

    pub fn as_ptr(&self) -> *const TChar {
        self.0.as_ptr()
    }

    /// Units including the terminator.
    pub fn units(&self) -> &[TChar] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.len() <= 1
    }

    pub fn to_string_lossy(&self) -> String {
        decode_units(&self.0)
    }
}

/// Fixed-capacity output buffer. Holds up to `capacity` characters plus a terminator.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    units: Vec<TChar>,
}

impl TextBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: vec![0; capacity + 1],
        }
    }

    /// Characters this buffer can return.
    pub fn capacity(&self) -> usize {
        self.units.len() - 1
    }

    /// The whole buffer, terminator slot included, for the native side to write into.
    /// Clears any previous contents first.
    pub fn as_native_mut(&mut self) -> &mut [TChar] {
        self.clear();
        &mut self.units
    }

    pub fn clear(&mut self) {
        self.units.iter_mut().for_each(|u| *u = 0);
    }

    pub fn to_string_lossy(&self) -> String {
        decode_units(&self.units)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE)
    }
}
