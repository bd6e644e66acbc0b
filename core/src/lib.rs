/*
 * lib.rs
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

//! Safe bindings for the MAPIEx native library (Extended MAPI behind a C ABI).
//!
//! The native library hands out opaque handles for sessions, folders, messages, contacts,
//! appointments and contact addresses. This crate owns those handles: each one is closed
//! exactly once, either explicitly (`close`) or when its wrapper is dropped, and never used
//! after that. All foreign calls go through the capability traits in [`native`]; the `ffi`
//! crate implements them over the real DLL and tests implement them with fakes.

pub mod config;
pub mod native;
pub mod store;

pub use config::Config;
pub use native::{ContactText, DateParts, NativeMapi, RawHandle};
pub use store::{
    init, term, AddressType, Appointment, Contact, ContactAddress, DefaultFolder, EditorFormat,
    Folder, FolderView, Importance, MapiError, MapiFolder, MapiObject, Message, NameType,
    PhoneType, Recipient, RecipientType, Result, Sensitivity, Session, SortField,
};
