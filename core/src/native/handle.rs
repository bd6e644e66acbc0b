/*
 * handle.rs
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

//! Opaque native handles and the single-owner handle type.

use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::native::{AddressOps, Binding, ObjectOps, SessionOps};
use crate::store::MapiError;

/// Pointer-sized opaque value returned by the native library. Null means "no object".
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(*mut c_void);

impl RawHandle {
    pub const NULL: RawHandle = RawHandle(std::ptr::null_mut());

    pub fn from_ptr(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    /// Build a handle from an address. Only meaningful to code that also interprets it
    /// (fake native layers in tests).
    pub fn from_addr(addr: usize) -> Self {
        Self(addr as *mut c_void)
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0
    }

    pub fn addr(self) -> usize {
        self.0 as usize
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Default for RawHandle {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawHandle({:#x})", self.addr())
    }
}

/// What a handle refers to, and how the native library closes it.
pub trait HandleKind<N: ?Sized> {
    /// Used in errors and log lines.
    const NAME: &'static str;

    /// Release the native object. Fire-and-forget: the native close has no failure signal.
    fn close(native: &N, raw: RawHandle);
}

/// Logged-in session (closed by logout).
pub enum SessionKind {}
/// Folder (closed by ObjectClose).
pub enum FolderKind {}
/// Message (closed by ObjectClose).
pub enum MessageKind {}
/// Contact (closed by ObjectClose).
pub enum ContactKind {}
/// Appointment (closed by ObjectClose).
pub enum AppointmentKind {}
/// Transient contact address sub-object (closed by AddressClose).
pub enum AddressKind {}

impl<N: SessionOps + ?Sized> HandleKind<N> for SessionKind {
    const NAME: &'static str = "session";
    fn close(native: &N, raw: RawHandle) {
        native.logout(raw);
    }
}

macro_rules! object_kind {
    ($kind:ty, $name:literal) => {
        impl<N: ObjectOps + ?Sized> HandleKind<N> for $kind {
            const NAME: &'static str = $name;
            fn close(native: &N, raw: RawHandle) {
                native.object_close(raw);
            }
        }
    };
}

object_kind!(FolderKind, "folder");
object_kind!(MessageKind, "message");
object_kind!(ContactKind, "contact");
object_kind!(AppointmentKind, "appointment");

impl<N: AddressOps + ?Sized> HandleKind<N> for AddressKind {
    const NAME: &'static str = "address";
    fn close(native: &N, raw: RawHandle) {
        native.address_close(raw);
    }
}

/// The one owner of a native handle.
///
/// Closing happens at most once: [`OwnedHandle::close`] consumes the owner, and `Drop` closes
/// whatever is still held. An owner built from a null handle is empty and never calls the
/// native library. Not `Clone`, and not `Send`/`Sync` (the raw pointer and the `Rc` see to
/// that), so a handle cannot be released from two threads.
pub struct OwnedHandle<K: HandleKind<N>, N> {
    raw: Option<RawHandle>,
    binding: Rc<Binding<N>>,
    _kind: PhantomData<K>,
}

impl<K: HandleKind<N>, N> OwnedHandle<K, N> {
    /// Take ownership of a handle the native library just produced. `None` for null.
    pub fn adopt(binding: &Rc<Binding<N>>, raw: RawHandle) -> Option<Self> {
        if raw.is_null() {
            return None;
        }
        tracing::debug!(kind = K::NAME, handle = ?raw, "adopted native handle");
        Some(Self {
            raw: Some(raw),
            binding: Rc::clone(binding),
            _kind: PhantomData,
        })
    }

    /// Take ownership of `raw`, which may be null (yielding an empty owner).
    ///
    /// # Safety
    /// `raw` must be a live handle of kind `K` that nothing else will close.
    pub unsafe fn from_raw(binding: &Rc<Binding<N>>, raw: RawHandle) -> Self {
        Self {
            raw: (!raw.is_null()).then_some(raw),
            binding: Rc::clone(binding),
            _kind: PhantomData,
        }
    }

    /// The handle, read-only, for passing to sibling operations. Null once released.
    pub fn raw(&self) -> RawHandle {
        self.raw.unwrap_or(RawHandle::NULL)
    }

    /// The handle, or a precondition error if there is none.
    pub fn get(&self) -> Result<RawHandle, MapiError> {
        self.raw.ok_or(MapiError::NullHandle(K::NAME))
    }

    pub fn is_open(&self) -> bool {
        self.raw.is_some()
    }

    pub fn binding(&self) -> &Rc<Binding<N>> {
        &self.binding
    }

    pub fn native(&self) -> &N {
        self.binding.native()
    }

    /// Close now. The owner is consumed, so the handle cannot be used afterwards.
    pub fn close(mut self) {
        self.release();
    }

    /// Give up ownership without closing. The caller becomes responsible for the handle.
    pub fn into_raw(mut self) -> RawHandle {
        self.raw.take().unwrap_or(RawHandle::NULL)
    }

    fn release(&mut self) {
        if let Some(raw) = self.raw.take() {
            tracing::debug!(kind = K::NAME, handle = ?raw, "closing native handle");
            K::close(self.binding.native(), raw);
        }
    }
}

impl<K: HandleKind<N>, N> Drop for OwnedHandle<K, N> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<K: HandleKind<N>, N> fmt::Debug for OwnedHandle<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedHandle")
            .field("kind", &K::NAME)
            .field("raw", &self.raw())
            .finish()
    }
}
