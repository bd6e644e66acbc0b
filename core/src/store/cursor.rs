/*
 * cursor.rs
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

//! Iteration over native cursors.

use std::rc::Rc;

use crate::native::{Binding, HandleKind, OwnedHandle, RawHandle};
use crate::store::error::Result;

/// Pull one item from a native cursor. `advance` fills the out-handle and reports whether
/// the cursor yielded anything; the yielded handle is owned by the caller from here on.
pub(crate) fn next_owned<K, N, F>(binding: &Rc<Binding<N>>, advance: F) -> Option<OwnedHandle<K, N>>
where
    K: HandleKind<N>,
    F: FnOnce(&mut RawHandle) -> bool,
{
    let mut out = RawHandle::NULL;
    if !advance(&mut out) {
        return None;
    }
    OwnedHandle::adopt(binding, out)
}

/// Iterator over a native cursor. Stops after exhaustion or the first error.
///
/// Each item is an owned wrapper; dropping it before pulling the next keeps at most one
/// native object open at a time.
pub struct Cursor<'a, T> {
    next: Box<dyn FnMut() -> Result<Option<T>> + 'a>,
    done: bool,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new<F>(next: F) -> Self
    where
        F: FnMut() -> Result<Option<T>> + 'a,
    {
        Self {
            next: Box::new(next),
            done: false,
        }
    }
}

impl<T> Iterator for Cursor<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match (self.next)() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
