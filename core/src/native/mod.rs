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

//! The native boundary.
//!
//! Each trait below is one group of MAPIEx exports. Wrappers depend only on the groups they
//! use; the `ffi` crate implements all of them over the loaded DLL, and tests implement them
//! over a recording fake. Methods mirror the exports one to one apart from the selector enums
//! in [`fields`], which fold families like `MessageGetTo`/`MessageGetCC` into one method.
//!
//! Conventions: handles are passed by value and may be null only where noted; text goes in
//! as [`TextArg`] and comes out through a `&mut [TChar]` whose length is the capacity handed
//! to the library; `bool` is the native success flag; "void" exports return `true`.

pub mod datetime;
pub mod fields;
pub mod handle;
pub mod text;

use std::rc::Rc;

pub use datetime::DateParts;
pub use fields::{
    AddressField, AppointmentText, AppointmentTime, BodyFormat, ContactDate, ContactText,
    ItemKind, MessageText, MessageTime,
};
pub use handle::{
    AddressKind, AppointmentKind, ContactKind, FolderKind, HandleKind, MessageKind, OwnedHandle,
    RawHandle, SessionKind,
};
pub use text::{TChar, TextArg, TextBuffer};

use crate::store::{
    AddressType, DefaultFolder, Importance, NameType, PhoneType, RecipientType, SortField,
};
use crate::Config;

/// Library lifetime, login, and the session-level folder cursor.
pub trait SessionOps {
    fn init(&self, multithreaded_notifications: bool, as_service: bool) -> bool;
    fn term(&self);
    /// Null on failure. An empty profile selects the default one.
    fn login(&self, profile: &TextArg, as_service: bool) -> RawHandle;
    fn logout(&self, session: RawHandle);
    fn open_message_store(&self, session: RawHandle, store: &TextArg) -> bool;
    /// The folder the session is positioned on. Owned by the session.
    fn current_folder(&self, session: RawHandle) -> RawHandle;
    fn set_current_folder(&self, session: RawHandle, folder: RawHandle);
    fn profile_name(&self, session: RawHandle, out: &mut [TChar]) -> bool;
    fn profile_email(&self, session: RawHandle, out: &mut [TChar]) -> bool;
    /// With `internal` the session keeps the folder and the returned handle must not be closed.
    fn open_folder(&self, session: RawHandle, name: &TextArg, internal: bool) -> RawHandle;
    fn open_default_folder(
        &self,
        session: RawHandle,
        which: DefaultFolder,
        internal: bool,
    ) -> RawHandle;
    fn session_get_hierarchy(&self, session: RawHandle) -> bool;
    fn session_get_contents(&self, session: RawHandle) -> bool;
    fn session_row_count(&self, session: RawHandle) -> i32;
    fn session_sort_contents(&self, session: RawHandle, ascending: bool, field: SortField) -> bool;
    fn session_set_unread_only(&self, session: RawHandle, unread_only: bool) -> bool;
    fn session_next_item(&self, session: RawHandle, kind: ItemKind, out: &mut RawHandle) -> bool;
    fn session_next_sub_folder(
        &self,
        session: RawHandle,
        out: &mut RawHandle,
        name: &mut [TChar],
    ) -> bool;
}

/// Calls shared by every object (folders, messages, contacts, appointments).
pub trait ObjectOps {
    fn object_close(&self, object: RawHandle);
    fn object_save(&self, object: RawHandle, close: bool) -> bool;
    fn object_message_flags(&self, object: RawHandle) -> i32;
    fn object_set_message_flags(&self, object: RawHandle, flags: i32) -> bool;
    fn object_entry_id(&self, object: RawHandle, out: &mut [TChar]) -> bool;
    fn object_message_class(&self, object: RawHandle, out: &mut [TChar]) -> bool;
    fn object_editor_format(&self, object: RawHandle) -> i32;
    fn object_set_editor_format(&self, object: RawHandle, format: i32) -> bool;
    fn object_property_string(
        &self,
        object: RawHandle,
        tag: u32,
        out: &mut [TChar],
        stream: bool,
    ) -> bool;
    fn object_set_property_string(
        &self,
        object: RawHandle,
        tag: u32,
        value: &TextArg,
        stream: bool,
    ) -> bool;
    fn object_named_property(&self, object: RawHandle, name: &TextArg, out: &mut [TChar]) -> bool;
    fn object_set_named_property(
        &self,
        object: RawHandle,
        name: &TextArg,
        value: &TextArg,
        create: bool,
    ) -> bool;
    /// The library returns a pointer into its own body cache; implementations copy it out.
    fn object_body(
        &self,
        object: RawHandle,
        format: BodyFormat,
        auto_detect: bool,
    ) -> Option<String>;
    fn object_set_body(&self, object: RawHandle, format: BodyFormat, value: &TextArg) -> bool;
    fn object_free_body(&self);
}

pub trait FolderOps {
    fn folder_get_hierarchy(&self, folder: RawHandle) -> bool;
    fn folder_open_sub_folder(&self, folder: RawHandle, name: &TextArg) -> RawHandle;
    fn folder_create_sub_folder(&self, folder: RawHandle, name: &TextArg) -> RawHandle;
    fn folder_delete_sub_folder_by_name(&self, folder: RawHandle, name: &TextArg) -> bool;
    fn folder_delete_sub_folder(&self, folder: RawHandle, sub_folder: RawHandle) -> bool;
    fn folder_get_contents(&self, folder: RawHandle) -> bool;
    fn folder_row_count(&self, folder: RawHandle) -> i32;
    fn folder_sort_contents(&self, folder: RawHandle, ascending: bool, field: SortField) -> bool;
    fn folder_set_unread_only(&self, folder: RawHandle, unread_only: bool) -> bool;
    fn folder_next_item(&self, folder: RawHandle, kind: ItemKind, out: &mut RawHandle) -> bool;
    fn folder_next_sub_folder(
        &self,
        folder: RawHandle,
        out: &mut RawHandle,
        name: &mut [TChar],
    ) -> bool;
    fn folder_delete_item(&self, folder: RawHandle, kind: ItemKind, item: RawHandle) -> bool;
    fn folder_copy_message(&self, folder: RawHandle, message: RawHandle, dest: RawHandle) -> bool;
    fn folder_move_message(&self, folder: RawHandle, message: RawHandle, dest: RawHandle) -> bool;
}

pub trait MessageOps {
    /// `folder` may be null (the session's current folder).
    fn message_create(
        &self,
        session: RawHandle,
        out: &mut RawHandle,
        importance: Importance,
        save_to_sent: bool,
        folder: RawHandle,
    ) -> bool;
    fn message_show_form(&self, session: RawHandle, message: RawHandle) -> i32;
    fn message_send(&self, message: RawHandle) -> bool;
    fn message_is_unread(&self, message: RawHandle) -> bool;
    fn message_mark_as_read(&self, message: RawHandle, read: bool) -> bool;
    fn message_text(&self, message: RawHandle, field: MessageText, out: &mut [TChar]) -> bool;
    fn message_time(&self, message: RawHandle, field: MessageTime, out: &mut DateParts) -> bool;
    /// An empty `format` lets the library pick its default.
    fn message_time_string(
        &self,
        message: RawHandle,
        field: MessageTime,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool;
    fn message_sensitivity(&self, message: RawHandle) -> i32;
    fn message_priority(&self, message: RawHandle) -> i32;
    fn message_importance(&self, message: RawHandle) -> i32;
    fn message_get_recipients(&self, message: RawHandle) -> bool;
    fn message_next_recipient(
        &self,
        message: RawHandle,
        name: &mut [TChar],
        email: &mut [TChar],
        kind: &mut i32,
    ) -> bool;
    fn message_attachment_count(&self, message: RawHandle) -> i32;
    fn message_attachment_name(&self, message: RawHandle, out: &mut [TChar], index: i32) -> bool;
    fn message_save_attachment(&self, message: RawHandle, folder: &TextArg, index: i32) -> bool;
    fn message_delete_attachment(&self, message: RawHandle, index: i32) -> bool;
    fn message_set_status(&self, message: RawHandle, status: i32) -> bool;
    fn message_add_recipient(
        &self,
        message: RawHandle,
        email: &TextArg,
        kind: RecipientType,
        addr_type: &TextArg,
    ) -> bool;
    fn message_set_subject(&self, message: RawHandle, subject: &TextArg);
    fn message_set_sender(&self, message: RawHandle, name: &TextArg, email: &TextArg);
    fn message_set_time(
        &self,
        message: RawHandle,
        field: MessageTime,
        value: DateParts,
        local: bool,
    ) -> bool;
    fn message_add_attachment(
        &self,
        message: RawHandle,
        path: &TextArg,
        name: &TextArg,
        cid: &TextArg,
    ) -> bool;
    fn message_set_read_receipt(&self, message: RawHandle, set: bool, receiver: &TextArg) -> bool;
    fn message_set_delivery_receipt(&self, message: RawHandle, set: bool) -> bool;
    fn message_mark_as_private(&self, message: RawHandle) -> bool;
    fn message_set_sensitivity(&self, message: RawHandle, sensitivity: i32) -> bool;
}

pub trait ContactOps {
    /// `folder` may be null (the session's current folder).
    fn contact_create(&self, session: RawHandle, out: &mut RawHandle, folder: RawHandle) -> bool;
    fn contact_name(&self, contact: RawHandle, kind: NameType, out: &mut [TChar]) -> bool;
    fn contact_set_name(&self, contact: RawHandle, kind: NameType, value: &TextArg) -> bool;
    /// `index` is 1-based.
    fn contact_email(&self, contact: RawHandle, index: i32, out: &mut [TChar]) -> bool;
    fn contact_set_email(&self, contact: RawHandle, index: i32, value: &TextArg) -> bool;
    fn contact_email_display_as(&self, contact: RawHandle, index: i32, out: &mut [TChar]) -> bool;
    fn contact_set_email_display_as(&self, contact: RawHandle, index: i32, value: &TextArg) -> bool;
    fn contact_phone_number(&self, contact: RawHandle, kind: PhoneType, out: &mut [TChar]) -> bool;
    fn contact_set_phone_number(
        &self,
        contact: RawHandle,
        kind: PhoneType,
        value: &TextArg,
    ) -> bool;
    /// Only called for fields where [`ContactText::readable`] holds.
    fn contact_text(&self, contact: RawHandle, field: ContactText, out: &mut [TChar]) -> bool;
    /// Only called for fields where [`ContactText::writable`] holds.
    fn contact_set_text(&self, contact: RawHandle, field: ContactText, value: &TextArg) -> bool;
    /// Yields a transient address sub-object, closed with [`AddressOps::address_close`].
    fn contact_address(&self, contact: RawHandle, out: &mut RawHandle, kind: AddressType) -> bool;
    fn contact_set_address(
        &self,
        contact: RawHandle,
        address: RawHandle,
        kind: AddressType,
    ) -> bool;
    fn contact_set_postal_address(&self, contact: RawHandle, kind: AddressType) -> bool;
    fn contact_update_display_address(&self, contact: RawHandle, kind: AddressType) -> bool;
    fn contact_notes_size(&self, contact: RawHandle, rtf: bool) -> i32;
    fn contact_notes(&self, contact: RawHandle, out: &mut [TChar], rtf: bool) -> bool;
    fn contact_set_notes(&self, contact: RawHandle, value: &TextArg, rtf: bool) -> bool;
    fn contact_sensitivity(&self, contact: RawHandle) -> i32;
    fn contact_set_sensitivity(&self, contact: RawHandle, sensitivity: i32) -> bool;
    fn contact_update_display_name(&self, contact: RawHandle) -> bool;
    /// Fills year, month and day only.
    fn contact_date(&self, contact: RawHandle, field: ContactDate, out: &mut DateParts) -> bool;
    fn contact_date_string(
        &self,
        contact: RawHandle,
        field: ContactDate,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool;
    fn contact_set_date(&self, contact: RawHandle, field: ContactDate, value: DateParts) -> bool;
    fn contact_set_picture(&self, contact: RawHandle, path: &TextArg) -> bool;
}

/// Contact address sub-objects. The field calls have no failure signal of their own.
pub trait AddressOps {
    fn address_close(&self, address: RawHandle);
    fn address_field(&self, address: RawHandle, field: AddressField, out: &mut [TChar]) -> bool;
    fn address_set_field(&self, address: RawHandle, field: AddressField, value: &TextArg);
}

pub trait AppointmentOps {
    fn appointment_text(
        &self,
        appointment: RawHandle,
        field: AppointmentText,
        out: &mut [TChar],
    ) -> bool;
    fn appointment_set_text(
        &self,
        appointment: RawHandle,
        field: AppointmentText,
        value: &TextArg,
    ) -> bool;
    fn appointment_time(
        &self,
        appointment: RawHandle,
        field: AppointmentTime,
        out: &mut DateParts,
    ) -> bool;
    fn appointment_time_string(
        &self,
        appointment: RawHandle,
        field: AppointmentTime,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool;
    fn appointment_set_time(
        &self,
        appointment: RawHandle,
        field: AppointmentTime,
        value: DateParts,
    ) -> bool;
}

/// Every export group.
pub trait NativeMapi:
    SessionOps + ObjectOps + FolderOps + MessageOps + ContactOps + AddressOps + AppointmentOps
{
}

impl<T> NativeMapi for T where
    T: SessionOps + ObjectOps + FolderOps + MessageOps + ContactOps + AddressOps + AppointmentOps
{
}

/// A native implementation plus the settings wrappers consult. Shared by every wrapper
/// created from one session.
#[derive(Debug)]
pub struct Binding<N> {
    native: N,
    config: Config,
}

impl<N> Binding<N> {
    pub fn new(native: N, config: Config) -> Rc<Self> {
        Rc::new(Self { native, config })
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scratch buffer of the configured capacity.
    pub fn text_buffer(&self) -> TextBuffer {
        TextBuffer::with_capacity(self.config.buffer_size)
    }
}
