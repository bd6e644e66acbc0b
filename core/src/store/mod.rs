/*
 * mod.rs
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

//! Safe wrappers over the native objects: sessions, folders, messages, contacts, appointments.

mod appointment;
mod contact;
mod cursor;
mod error;
mod folder;
mod kinds;
mod message;
mod object;
mod session;

pub use appointment::Appointment;
pub use contact::{Contact, ContactAddress};
pub use cursor::Cursor;
pub use error::{MapiError, Result};
pub use folder::{Folder, FolderView, MapiFolder};
pub use kinds::{
    AddressType, DefaultFolder, EditorFormat, Importance, NameType, PhoneType, RecipientType,
    Sensitivity, SortField,
};
pub use message::{Message, Recipient, DEFAULT_ADDRESS_TYPE};
pub use object::MapiObject;
pub use session::{init, term, Session};
