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

//! Runtime binding of the MAPIEx DLL.
//!
//! [`MapiLibrary`] resolves every export once at load time and implements the
//! `mapiex_core` capability traits by forwarding to them. A process normally loads the
//! library once through [`library`]; [`load`] is there for callers that manage their own.

mod symbols;

use std::ffi::c_void;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libc::c_int;
use libloading::Library;
use mapiex_core::native::text::decode_units;
use mapiex_core::native::{
    AddressField, AddressOps, AppointmentOps, AppointmentText, AppointmentTime, BodyFormat,
    ContactDate, ContactOps, ContactText, DateParts, FolderOps, ItemKind, MessageOps,
    MessageText, MessageTime, ObjectOps, RawHandle, SessionOps, TChar, TextArg,
};
use mapiex_core::{
    AddressType, Config, DefaultFolder, Importance, MapiError, NameType, PhoneType,
    RecipientType, Result, SortField,
};
use once_cell::sync::OnceCell;
use symbols::{Handle, InText, Int, Symbols, TextGetter, TextSetter, ENTRY_ID_NAMES};

/// A session over the loaded DLL.
pub type Session = mapiex_core::Session<MapiLibrary>;

static LIBRARY: OnceCell<MapiLibrary> = OnceCell::new();

/// The process-wide library, loaded on first use from `config.library_path`.
/// Later calls return the same library whatever `config` says.
pub fn library(config: &Config) -> Result<&'static MapiLibrary> {
    LIBRARY.get_or_try_init(|| load(config))
}

/// Load the library and call `MAPIInit` with the configured flags.
pub fn init(config: &Config) -> Result<MapiLibrary> {
    let lib = library(config)?.clone();
    mapiex_core::init(&lib, config)?;
    Ok(lib)
}

/// Call `MAPITerm` if the library was ever loaded.
pub fn term() {
    if let Some(lib) = LIBRARY.get() {
        mapiex_core::term(lib);
    }
}

/// A logged-out session over the process-wide library.
pub fn open_session(config: &Config) -> Result<Session> {
    let lib = library(config)?.clone();
    Ok(Session::new(lib, config.clone()))
}

/// Load `config.library_path` and resolve its exports. Does not call `MAPIInit`.
pub fn load(config: &Config) -> Result<MapiLibrary> {
    MapiLibrary::open(&config.library_path)
}

struct Inner {
    syms: Symbols,
    entry_id: Option<TextGetter>,
    path: PathBuf,
    // Keeps the code behind `syms` mapped; dropped last.
    _lib: Library,
}

/// The loaded DLL. Cheap to clone; every clone shares one mapping.
#[derive(Clone)]
pub struct MapiLibrary {
    inner: Arc<Inner>,
}

impl fmt::Debug for MapiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapiLibrary")
            .field("path", &self.inner.path)
            .field("entry_id", &self.inner.entry_id.is_some())
            .finish()
    }
}

fn library_error(path: &Path, reason: impl fmt::Display) -> MapiError {
    MapiError::Library {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

impl MapiLibrary {
    pub fn open(path: &Path) -> Result<Self> {
        // SAFETY: loading runs the DLL's initialisers; MAPIEx has none with preconditions.
        let lib = unsafe { Library::new(path) }.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "cannot load MAPIEx");
            library_error(path, e)
        })?;
        // SAFETY: the signatures in `Symbols` are those of NetMAPI.h.
        let syms = unsafe { Symbols::resolve(&lib) }.map_err(|(name, e)| {
            tracing::warn!(path = %path.display(), export = name, error = %e, "missing export");
            library_error(path, format!("missing export {}: {}", name, e))
        })?;
        let entry_id = ENTRY_ID_NAMES.iter().find_map(|name| {
            // SAFETY: same signature under either name.
            unsafe { lib.get::<TextGetter>(name.as_bytes()) }.ok().map(|s| *s)
        });
        if entry_id.is_none() {
            tracing::debug!(path = %path.display(), "no entry-id export");
        }
        tracing::debug!(path = %path.display(), "loaded MAPIEx");
        Ok(Self {
            inner: Arc::new(Inner {
                syms,
                entry_id,
                path: path.to_path_buf(),
                _lib: lib,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    fn syms(&self) -> &Symbols {
        &self.inner.syms
    }
}

fn flag(b: bool) -> c_int {
    c_int::from(b)
}

/// Capacity handed to the library: the buffer length, clamped to `int`.
fn cap(out: &[TChar]) -> c_int {
    c_int::try_from(out.len()).unwrap_or(c_int::MAX)
}

fn h(raw: RawHandle) -> Handle {
    raw.as_ptr()
}

fn text(arg: &TextArg) -> InText {
    arg.as_ptr()
}

/// Run a getter that writes a handle through `T*&`, storing it into `out`.
fn with_out_handle(out: &mut RawHandle, f: impl FnOnce(*mut Handle) -> c_int) -> bool {
    let mut ptr: *mut c_void = std::ptr::null_mut();
    let ok = f(&mut ptr) != 0;
    *out = RawHandle::from_ptr(ptr);
    ok
}

/// Copy a NUL-terminated string owned by the library.
///
/// # Safety
/// `ptr` must be null or point at a NUL-terminated run of units.
unsafe fn copy_library_text(ptr: InText) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    Some(decode_units(std::slice::from_raw_parts(ptr, len)))
}

type TimeGetter = unsafe extern "C" fn(Handle, Int, Int, Int, Int, Int, Int) -> c_int;
type TimeStringGetter = unsafe extern "C" fn(Handle, *mut TChar, c_int, InText) -> c_int;

fn read_time(f: TimeGetter, object: RawHandle, out: &mut DateParts) -> bool {
    let DateParts {
        year,
        month,
        day,
        hour,
        minute,
        second,
    } = out;
    // SAFETY: six distinct live ints.
    unsafe { f(h(object), year, month, day, hour, minute, second) != 0 }
}

fn read_time_string(
    f: TimeStringGetter,
    object: RawHandle,
    out: &mut [TChar],
    format: &TextArg,
) -> bool {
    // SAFETY: `out` is writable for `cap(out)` units.
    unsafe { f(h(object), out.as_mut_ptr(), cap(out), text(format)) != 0 }
}

impl SessionOps for MapiLibrary {
    fn init(&self, multithreaded_notifications: bool, as_service: bool) -> bool {
        unsafe { (self.syms().init)(flag(multithreaded_notifications), flag(as_service)) != 0 }
    }

    fn term(&self) {
        unsafe { (self.syms().term)() }
    }

    fn login(&self, profile: &TextArg, as_service: bool) -> RawHandle {
        // The library treats a null profile as "default"; an empty string means the same.
        let profile = if profile.is_empty() { std::ptr::null() } else { text(profile) };
        RawHandle::from_ptr(unsafe { (self.syms().login)(profile, flag(as_service)) })
    }

    fn logout(&self, session: RawHandle) {
        unsafe { (self.syms().logout)(h(session)) }
    }

    fn open_message_store(&self, session: RawHandle, store: &TextArg) -> bool {
        let store = if store.is_empty() { std::ptr::null() } else { text(store) };
        unsafe { (self.syms().open_message_store)(h(session), store) != 0 }
    }

    fn current_folder(&self, session: RawHandle) -> RawHandle {
        RawHandle::from_ptr(unsafe { (self.syms().get_folder)(h(session)) })
    }

    fn set_current_folder(&self, session: RawHandle, folder: RawHandle) {
        unsafe { (self.syms().set_folder)(h(session), h(folder)) }
    }

    fn profile_name(&self, session: RawHandle, out: &mut [TChar]) -> bool {
        unsafe { (self.syms().get_profile_name)(h(session), out.as_mut_ptr(), cap(out)) != 0 }
    }

    fn profile_email(&self, session: RawHandle, out: &mut [TChar]) -> bool {
        unsafe { (self.syms().get_profile_email)(h(session), out.as_mut_ptr(), cap(out)) != 0 }
    }

    fn open_folder(&self, session: RawHandle, name: &TextArg, internal: bool) -> RawHandle {
        RawHandle::from_ptr(unsafe { (self.syms().open_folder)(h(session), text(name), internal) })
    }

    fn open_default_folder(
        &self,
        session: RawHandle,
        which: DefaultFolder,
        internal: bool,
    ) -> RawHandle {
        let s = self.syms();
        let f = match which {
            DefaultFolder::Root => s.open_root_folder,
            DefaultFolder::Inbox => s.open_inbox,
            DefaultFolder::Outbox => s.open_outbox,
            DefaultFolder::SentItems => s.open_sent_items,
            DefaultFolder::DeletedItems => s.open_deleted_items,
            DefaultFolder::Contacts => s.open_contacts,
            DefaultFolder::Drafts => s.open_drafts,
            DefaultFolder::Calendar => s.open_calendar,
            DefaultFolder::Junk => s.open_junk_folder,
        };
        RawHandle::from_ptr(unsafe { f(h(session), internal) })
    }

    fn session_get_hierarchy(&self, session: RawHandle) -> bool {
        unsafe { (self.syms().get_hierarchy)(h(session)) != 0 }
    }

    fn session_get_contents(&self, session: RawHandle) -> bool {
        unsafe { (self.syms().get_contents)(h(session)) != 0 }
    }

    fn session_row_count(&self, session: RawHandle) -> i32 {
        unsafe { (self.syms().get_row_count)(h(session)) }
    }

    fn session_sort_contents(&self, session: RawHandle, ascending: bool, field: SortField) -> bool {
        unsafe { (self.syms().sort_contents)(h(session), flag(ascending), field.as_raw()) != 0 }
    }

    fn session_set_unread_only(&self, session: RawHandle, unread_only: bool) -> bool {
        unsafe { (self.syms().set_unread_only)(h(session), flag(unread_only)) != 0 }
    }

    fn session_next_item(&self, session: RawHandle, kind: ItemKind, out: &mut RawHandle) -> bool {
        let s = self.syms();
        let f = match kind {
            ItemKind::Message => s.get_next_message,
            ItemKind::Contact => s.get_next_contact,
            ItemKind::Appointment => s.get_next_appointment,
        };
        with_out_handle(out, |p| unsafe { f(h(session), p) })
    }

    fn session_next_sub_folder(
        &self,
        session: RawHandle,
        out: &mut RawHandle,
        name: &mut [TChar],
    ) -> bool {
        let f = self.syms().get_next_sub_folder;
        with_out_handle(out, |p| unsafe { f(h(session), p, name.as_mut_ptr(), cap(name)) })
    }
}

impl ObjectOps for MapiLibrary {
    fn object_close(&self, object: RawHandle) {
        unsafe { (self.syms().object_close)(h(object)) }
    }

    fn object_save(&self, object: RawHandle, close: bool) -> bool {
        unsafe { (self.syms().object_save)(h(object), flag(close)) != 0 }
    }

    fn object_message_flags(&self, object: RawHandle) -> i32 {
        unsafe { (self.syms().object_get_message_flags)(h(object)) }
    }

    fn object_set_message_flags(&self, object: RawHandle, flags: i32) -> bool {
        unsafe { (self.syms().object_set_message_flags)(h(object), flags) != 0 }
    }

    fn object_entry_id(&self, object: RawHandle, out: &mut [TChar]) -> bool {
        match self.inner.entry_id {
            Some(f) => unsafe { f(h(object), out.as_mut_ptr(), cap(out)) != 0 },
            None => false,
        }
    }

    fn object_message_class(&self, object: RawHandle, out: &mut [TChar]) -> bool {
        unsafe {
            (self.syms().object_get_message_class)(h(object), out.as_mut_ptr(), cap(out)) != 0
        }
    }

    fn object_editor_format(&self, object: RawHandle) -> i32 {
        unsafe { (self.syms().object_get_editor_format)(h(object)) }
    }

    fn object_set_editor_format(&self, object: RawHandle, format: i32) -> bool {
        unsafe { (self.syms().object_set_editor_format)(h(object), format) != 0 }
    }

    fn object_property_string(
        &self,
        object: RawHandle,
        tag: u32,
        out: &mut [TChar],
        stream: bool,
    ) -> bool {
        unsafe {
            (self.syms().object_get_property_string)(
                h(object),
                tag,
                out.as_mut_ptr(),
                cap(out),
                flag(stream),
            ) != 0
        }
    }

    fn object_set_property_string(
        &self,
        object: RawHandle,
        tag: u32,
        value: &TextArg,
        stream: bool,
    ) -> bool {
        unsafe {
            (self.syms().object_set_property_string)(h(object), tag, text(value), flag(stream)) != 0
        }
    }

    fn object_named_property(&self, object: RawHandle, name: &TextArg, out: &mut [TChar]) -> bool {
        unsafe {
            (self.syms().object_get_named_property)(
                h(object),
                text(name),
                out.as_mut_ptr(),
                cap(out),
            ) != 0
        }
    }

    fn object_set_named_property(
        &self,
        object: RawHandle,
        name: &TextArg,
        value: &TextArg,
        create: bool,
    ) -> bool {
        unsafe {
            (self.syms().object_set_named_property)(
                h(object),
                text(name),
                text(value),
                flag(create),
            ) != 0
        }
    }

    fn object_body(
        &self,
        object: RawHandle,
        format: BodyFormat,
        auto_detect: bool,
    ) -> Option<String> {
        let s = self.syms();
        let mut ptr: InText = std::ptr::null();
        let ok = unsafe {
            match format {
                BodyFormat::Text => (s.object_get_body)(h(object), &mut ptr, flag(auto_detect)),
                BodyFormat::Html => (s.object_get_html)(h(object), &mut ptr),
                BodyFormat::Rtf => (s.object_get_rtf)(h(object), &mut ptr),
            }
        };
        if ok == 0 {
            return None;
        }
        // SAFETY: on success the library points `ptr` at its NUL-terminated body cache,
        // valid until the next body call or ObjectFreeBody.
        unsafe { copy_library_text(ptr) }
    }

    fn object_set_body(&self, object: RawHandle, format: BodyFormat, value: &TextArg) -> bool {
        let s = self.syms();
        let f = match format {
            BodyFormat::Text => s.object_set_body,
            BodyFormat::Html => s.object_set_html,
            BodyFormat::Rtf => s.object_set_rtf,
        };
        unsafe { f(h(object), text(value)) != 0 }
    }

    fn object_free_body(&self) {
        unsafe { (self.syms().object_free_body)() }
    }
}

impl FolderOps for MapiLibrary {
    fn folder_get_hierarchy(&self, folder: RawHandle) -> bool {
        unsafe { (self.syms().folder_get_hierarchy)(h(folder)) != 0 }
    }

    fn folder_open_sub_folder(&self, folder: RawHandle, name: &TextArg) -> RawHandle {
        RawHandle::from_ptr(unsafe { (self.syms().folder_open_sub_folder)(h(folder), text(name)) })
    }

    fn folder_create_sub_folder(&self, folder: RawHandle, name: &TextArg) -> RawHandle {
        let raw = unsafe { (self.syms().folder_create_sub_folder)(h(folder), text(name)) };
        RawHandle::from_ptr(raw)
    }

    fn folder_delete_sub_folder_by_name(&self, folder: RawHandle, name: &TextArg) -> bool {
        unsafe { (self.syms().folder_delete_sub_folder_by_name)(h(folder), text(name)) != 0 }
    }

    fn folder_delete_sub_folder(&self, folder: RawHandle, sub_folder: RawHandle) -> bool {
        unsafe { (self.syms().folder_delete_sub_folder)(h(folder), h(sub_folder)) != 0 }
    }

    fn folder_get_contents(&self, folder: RawHandle) -> bool {
        unsafe { (self.syms().folder_get_contents)(h(folder)) != 0 }
    }

    fn folder_row_count(&self, folder: RawHandle) -> i32 {
        unsafe { (self.syms().folder_get_row_count)(h(folder)) }
    }

    fn folder_sort_contents(&self, folder: RawHandle, ascending: bool, field: SortField) -> bool {
        unsafe {
            (self.syms().folder_sort_contents)(h(folder), flag(ascending), field.as_raw()) != 0
        }
    }

    fn folder_set_unread_only(&self, folder: RawHandle, unread_only: bool) -> bool {
        unsafe { (self.syms().folder_set_unread_only)(h(folder), flag(unread_only)) != 0 }
    }

    fn folder_next_item(&self, folder: RawHandle, kind: ItemKind, out: &mut RawHandle) -> bool {
        let s = self.syms();
        let f = match kind {
            ItemKind::Message => s.folder_get_next_message,
            ItemKind::Contact => s.folder_get_next_contact,
            ItemKind::Appointment => s.folder_get_next_appointment,
        };
        with_out_handle(out, |p| unsafe { f(h(folder), p) })
    }

    fn folder_next_sub_folder(
        &self,
        folder: RawHandle,
        out: &mut RawHandle,
        name: &mut [TChar],
    ) -> bool {
        let f = self.syms().folder_get_next_sub_folder;
        with_out_handle(out, |p| unsafe { f(h(folder), p, name.as_mut_ptr(), cap(name)) })
    }

    fn folder_delete_item(&self, folder: RawHandle, kind: ItemKind, item: RawHandle) -> bool {
        let s = self.syms();
        let f = match kind {
            ItemKind::Message => s.folder_delete_message,
            ItemKind::Contact => s.folder_delete_contact,
            ItemKind::Appointment => s.folder_delete_appointment,
        };
        unsafe { f(h(folder), h(item)) != 0 }
    }

    fn folder_copy_message(&self, folder: RawHandle, message: RawHandle, dest: RawHandle) -> bool {
        unsafe { (self.syms().folder_copy_message)(h(folder), h(message), h(dest)) != 0 }
    }

    fn folder_move_message(&self, folder: RawHandle, message: RawHandle, dest: RawHandle) -> bool {
        unsafe { (self.syms().folder_move_message)(h(folder), h(message), h(dest)) != 0 }
    }
}

impl MessageOps for MapiLibrary {
    fn message_create(
        &self,
        session: RawHandle,
        out: &mut RawHandle,
        importance: Importance,
        save_to_sent: bool,
        folder: RawHandle,
    ) -> bool {
        let f = self.syms().message_create;
        with_out_handle(out, |p| unsafe {
            f(h(session), p, importance.as_raw(), flag(save_to_sent), h(folder))
        })
    }

    fn message_show_form(&self, session: RawHandle, message: RawHandle) -> i32 {
        unsafe { (self.syms().message_show_form)(h(session), h(message)) }
    }

    fn message_send(&self, message: RawHandle) -> bool {
        unsafe { (self.syms().message_send)(h(message)) != 0 }
    }

    fn message_is_unread(&self, message: RawHandle) -> bool {
        unsafe { (self.syms().message_is_unread)(h(message)) != 0 }
    }

    fn message_mark_as_read(&self, message: RawHandle, read: bool) -> bool {
        unsafe { (self.syms().message_mark_as_read)(h(message), flag(read)) != 0 }
    }

    fn message_text(&self, message: RawHandle, field: MessageText, out: &mut [TChar]) -> bool {
        let s = self.syms();
        let (m, p, n) = (h(message), out.as_mut_ptr(), cap(out));
        unsafe {
            match field {
                MessageText::Header => (s.message_get_header)(m, p, n) != 0,
                MessageText::SenderName => {
                    (s.message_get_sender_name)(m, p, n);
                    true
                }
                MessageText::SenderEmail => {
                    (s.message_get_sender_email)(m, p, n);
                    true
                }
                MessageText::Subject => {
                    (s.message_get_subject)(m, p, n);
                    true
                }
                MessageText::To => (s.message_get_to)(m, p, n) != 0,
                MessageText::Cc => (s.message_get_cc)(m, p, n) != 0,
                MessageText::Bcc => (s.message_get_bcc)(m, p, n) != 0,
                MessageText::ReplyTo => (s.message_get_reply_to)(m, p, n) != 0,
            }
        }
    }

    fn message_time(&self, message: RawHandle, field: MessageTime, out: &mut DateParts) -> bool {
        let s = self.syms();
        let f = match field {
            MessageTime::Received => s.message_get_received_time,
            MessageTime::Submit => s.message_get_submit_time,
        };
        read_time(f, message, out)
    }

    fn message_time_string(
        &self,
        message: RawHandle,
        field: MessageTime,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool {
        let s = self.syms();
        let f = match field {
            MessageTime::Received => s.message_get_received_time_string,
            MessageTime::Submit => s.message_get_submit_time_string,
        };
        read_time_string(f, message, out, format)
    }

    fn message_sensitivity(&self, message: RawHandle) -> i32 {
        unsafe { (self.syms().message_get_sensitivity)(h(message)) }
    }

    fn message_priority(&self, message: RawHandle) -> i32 {
        unsafe { (self.syms().message_get_priority)(h(message)) }
    }

    fn message_importance(&self, message: RawHandle) -> i32 {
        unsafe { (self.syms().message_get_importance)(h(message)) }
    }

    fn message_get_recipients(&self, message: RawHandle) -> bool {
        unsafe { (self.syms().message_get_recipients)(h(message)) != 0 }
    }

    fn message_next_recipient(
        &self,
        message: RawHandle,
        name: &mut [TChar],
        email: &mut [TChar],
        kind: &mut i32,
    ) -> bool {
        unsafe {
            (self.syms().message_get_next_recipient)(
                h(message),
                name.as_mut_ptr(),
                cap(name),
                email.as_mut_ptr(),
                cap(email),
                kind,
            ) != 0
        }
    }

    fn message_attachment_count(&self, message: RawHandle) -> i32 {
        unsafe { (self.syms().message_get_attachment_count)(h(message)) }
    }

    fn message_attachment_name(&self, message: RawHandle, out: &mut [TChar], index: i32) -> bool {
        unsafe {
            (self.syms().message_get_attachment_name)(
                h(message),
                out.as_mut_ptr(),
                cap(out),
                index,
            ) != 0
        }
    }

    fn message_save_attachment(&self, message: RawHandle, folder: &TextArg, index: i32) -> bool {
        unsafe { (self.syms().message_save_attachment)(h(message), text(folder), index) != 0 }
    }

    fn message_delete_attachment(&self, message: RawHandle, index: i32) -> bool {
        unsafe { (self.syms().message_delete_attachment)(h(message), index) != 0 }
    }

    fn message_set_status(&self, message: RawHandle, status: i32) -> bool {
        unsafe { (self.syms().message_set_message_status)(h(message), status) != 0 }
    }

    fn message_add_recipient(
        &self,
        message: RawHandle,
        email: &TextArg,
        kind: RecipientType,
        addr_type: &TextArg,
    ) -> bool {
        unsafe {
            (self.syms().message_add_recipient)(
                h(message),
                text(email),
                kind.as_raw(),
                text(addr_type),
            ) != 0
        }
    }

    fn message_set_subject(&self, message: RawHandle, subject: &TextArg) {
        unsafe { (self.syms().message_set_subject)(h(message), text(subject)) }
    }

    fn message_set_sender(&self, message: RawHandle, name: &TextArg, email: &TextArg) {
        unsafe { (self.syms().message_set_sender)(h(message), text(name), text(email)) }
    }

    fn message_set_time(
        &self,
        message: RawHandle,
        field: MessageTime,
        value: DateParts,
        local: bool,
    ) -> bool {
        let s = self.syms();
        let f = match field {
            MessageTime::Received => s.message_set_received_time,
            MessageTime::Submit => s.message_set_submit_time,
        };
        let DateParts { year, month, day, hour, minute, second } = value;
        unsafe { f(h(message), year, month, day, hour, minute, second, flag(local)) != 0 }
    }

    fn message_add_attachment(
        &self,
        message: RawHandle,
        path: &TextArg,
        name: &TextArg,
        cid: &TextArg,
    ) -> bool {
        // Empty name and CID are passed as null: the library then uses the file name and no CID.
        let name = if name.is_empty() { std::ptr::null() } else { text(name) };
        let cid = if cid.is_empty() { std::ptr::null() } else { text(cid) };
        unsafe { (self.syms().message_add_attachment)(h(message), text(path), name, cid) != 0 }
    }

    fn message_set_read_receipt(&self, message: RawHandle, set: bool, receiver: &TextArg) -> bool {
        let receiver = if receiver.is_empty() { std::ptr::null() } else { text(receiver) };
        unsafe { (self.syms().message_set_read_receipt)(h(message), flag(set), receiver) != 0 }
    }

    fn message_set_delivery_receipt(&self, message: RawHandle, set: bool) -> bool {
        unsafe { (self.syms().message_set_delivery_receipt)(h(message), flag(set)) != 0 }
    }

    fn message_mark_as_private(&self, message: RawHandle) -> bool {
        unsafe { (self.syms().message_mark_as_private)(h(message)) != 0 }
    }

    fn message_set_sensitivity(&self, message: RawHandle, sensitivity: i32) -> bool {
        unsafe { (self.syms().message_set_sensitivity)(h(message), sensitivity) != 0 }
    }
}

impl MapiLibrary {
    fn contact_text_getter(&self, field: ContactText) -> Option<TextGetter> {
        let s = self.syms();
        Some(match field {
            ContactText::HomePage => s.contact_get_home_page,
            ContactText::PostalAddress => s.contact_get_postal_address,
            ContactText::ImAddress => s.contact_get_im_address,
            ContactText::Title => s.contact_get_title,
            ContactText::Company => s.contact_get_company,
            ContactText::Profession => s.contact_get_profession,
            ContactText::DisplayNamePrefix => s.contact_get_display_name_prefix,
            ContactText::Generation => s.contact_get_generation,
            ContactText::Department => s.contact_get_department,
            ContactText::Office => s.contact_get_office,
            ContactText::ManagerName => s.contact_get_manager_name,
            ContactText::AssistantName => s.contact_get_assistant_name,
            ContactText::NickName => s.contact_get_nick_name,
            ContactText::SpouseName => s.contact_get_spouse_name,
            ContactText::Categories => s.contact_get_categories,
            ContactText::FileAs => return None,
        })
    }

    fn contact_text_setter(&self, field: ContactText) -> Option<TextSetter> {
        let s = self.syms();
        Some(match field {
            ContactText::HomePage => s.contact_set_home_page,
            ContactText::ImAddress => s.contact_set_im_address,
            ContactText::FileAs => s.contact_set_file_as,
            ContactText::Title => s.contact_set_title,
            ContactText::Company => s.contact_set_company,
            ContactText::Profession => s.contact_set_profession,
            ContactText::DisplayNamePrefix => s.contact_set_display_name_prefix,
            ContactText::Generation => s.contact_set_generation,
            ContactText::Department => s.contact_set_department,
            ContactText::Office => s.contact_set_office,
            ContactText::ManagerName => s.contact_set_manager_name,
            ContactText::AssistantName => s.contact_set_assistant_name,
            ContactText::NickName => s.contact_set_nick_name,
            ContactText::SpouseName => s.contact_set_spouse_name,
            ContactText::Categories => s.contact_set_categories,
            ContactText::PostalAddress => return None,
        })
    }
}

impl ContactOps for MapiLibrary {
    fn contact_create(&self, session: RawHandle, out: &mut RawHandle, folder: RawHandle) -> bool {
        let f = self.syms().contact_create;
        with_out_handle(out, |p| unsafe { f(h(session), p, h(folder)) })
    }

    fn contact_name(&self, contact: RawHandle, kind: NameType, out: &mut [TChar]) -> bool {
        unsafe {
            (self.syms().contact_get_name)(
                h(contact),
                out.as_mut_ptr(),
                cap(out),
                kind.as_raw(),
            ) != 0
        }
    }

    fn contact_set_name(&self, contact: RawHandle, kind: NameType, value: &TextArg) -> bool {
        unsafe { (self.syms().contact_set_name)(h(contact), text(value), kind.as_raw()) != 0 }
    }

    fn contact_email(&self, contact: RawHandle, index: i32, out: &mut [TChar]) -> bool {
        unsafe {
            (self.syms().contact_get_email)(h(contact), out.as_mut_ptr(), cap(out), index) != 0
        }
    }

    fn contact_set_email(&self, contact: RawHandle, index: i32, value: &TextArg) -> bool {
        unsafe { (self.syms().contact_set_email)(h(contact), text(value), index) != 0 }
    }

    fn contact_email_display_as(&self, contact: RawHandle, index: i32, out: &mut [TChar]) -> bool {
        unsafe {
            (self.syms().contact_get_email_display_as)(
                h(contact),
                out.as_mut_ptr(),
                cap(out),
                index,
            ) != 0
        }
    }

    fn contact_set_email_display_as(
        &self,
        contact: RawHandle,
        index: i32,
        value: &TextArg,
    ) -> bool {
        unsafe { (self.syms().contact_set_email_display_as)(h(contact), text(value), index) != 0 }
    }

    fn contact_phone_number(&self, contact: RawHandle, kind: PhoneType, out: &mut [TChar]) -> bool {
        unsafe {
            (self.syms().contact_get_phone_number)(
                h(contact),
                out.as_mut_ptr(),
                cap(out),
                kind.as_raw(),
            ) != 0
        }
    }

    fn contact_set_phone_number(
        &self,
        contact: RawHandle,
        kind: PhoneType,
        value: &TextArg,
    ) -> bool {
        unsafe {
            (self.syms().contact_set_phone_number)(h(contact), text(value), kind.as_raw()) != 0
        }
    }

    fn contact_text(&self, contact: RawHandle, field: ContactText, out: &mut [TChar]) -> bool {
        match self.contact_text_getter(field) {
            Some(f) => unsafe { f(h(contact), out.as_mut_ptr(), cap(out)) != 0 },
            None => false,
        }
    }

    fn contact_set_text(&self, contact: RawHandle, field: ContactText, value: &TextArg) -> bool {
        match self.contact_text_setter(field) {
            Some(f) => unsafe { f(h(contact), text(value)) != 0 },
            None => false,
        }
    }

    fn contact_address(&self, contact: RawHandle, out: &mut RawHandle, kind: AddressType) -> bool {
        let f = self.syms().contact_get_address;
        with_out_handle(out, |p| unsafe { f(h(contact), p, kind.as_raw()) })
    }

    fn contact_set_address(
        &self,
        contact: RawHandle,
        address: RawHandle,
        kind: AddressType,
    ) -> bool {
        unsafe { (self.syms().contact_set_address)(h(contact), h(address), kind.as_raw()) != 0 }
    }

    fn contact_set_postal_address(&self, contact: RawHandle, kind: AddressType) -> bool {
        unsafe { (self.syms().contact_set_postal_address)(h(contact), kind.as_raw()) != 0 }
    }

    fn contact_update_display_address(&self, contact: RawHandle, kind: AddressType) -> bool {
        unsafe { (self.syms().contact_update_display_address)(h(contact), kind.as_raw()) != 0 }
    }

    fn contact_notes_size(&self, contact: RawHandle, rtf: bool) -> i32 {
        unsafe { (self.syms().contact_get_notes_size)(h(contact), flag(rtf)) }
    }

    fn contact_notes(&self, contact: RawHandle, out: &mut [TChar], rtf: bool) -> bool {
        unsafe {
            (self.syms().contact_get_notes)(h(contact), out.as_mut_ptr(), cap(out), flag(rtf)) != 0
        }
    }

    fn contact_set_notes(&self, contact: RawHandle, value: &TextArg, rtf: bool) -> bool {
        unsafe { (self.syms().contact_set_notes)(h(contact), text(value), flag(rtf)) != 0 }
    }

    fn contact_sensitivity(&self, contact: RawHandle) -> i32 {
        unsafe { (self.syms().contact_get_sensitivity)(h(contact)) }
    }

    fn contact_set_sensitivity(&self, contact: RawHandle, sensitivity: i32) -> bool {
        unsafe { (self.syms().contact_set_sensitivity)(h(contact), sensitivity) != 0 }
    }

    fn contact_update_display_name(&self, contact: RawHandle) -> bool {
        unsafe { (self.syms().contact_update_display_name)(h(contact)) != 0 }
    }

    fn contact_date(&self, contact: RawHandle, field: ContactDate, out: &mut DateParts) -> bool {
        let s = self.syms();
        let f = match field {
            ContactDate::Birthday => s.contact_get_birthday,
            ContactDate::Anniversary => s.contact_get_anniversary,
        };
        let DateParts { year, month, day, .. } = out;
        unsafe { f(h(contact), year, month, day) != 0 }
    }

    fn contact_date_string(
        &self,
        contact: RawHandle,
        field: ContactDate,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool {
        let s = self.syms();
        let f = match field {
            ContactDate::Birthday => s.contact_get_birthday_string,
            ContactDate::Anniversary => s.contact_get_anniversary_string,
        };
        read_time_string(f, contact, out, format)
    }

    fn contact_set_date(&self, contact: RawHandle, field: ContactDate, value: DateParts) -> bool {
        let s = self.syms();
        let f = match field {
            ContactDate::Birthday => s.contact_set_birthday,
            ContactDate::Anniversary => s.contact_set_anniversary,
        };
        unsafe { f(h(contact), value.year, value.month, value.day) != 0 }
    }

    fn contact_set_picture(&self, contact: RawHandle, path: &TextArg) -> bool {
        unsafe { (self.syms().contact_set_picture)(h(contact), text(path)) != 0 }
    }
}

impl AddressOps for MapiLibrary {
    fn address_close(&self, address: RawHandle) {
        unsafe { (self.syms().address_close)(h(address)) }
    }

    fn address_field(&self, address: RawHandle, field: AddressField, out: &mut [TChar]) -> bool {
        let s = self.syms();
        let f = match field {
            AddressField::Street => s.address_get_street,
            AddressField::City => s.address_get_city,
            AddressField::StateOrProvince => s.address_get_state_or_province,
            AddressField::PostalCode => s.address_get_postal_code,
            AddressField::Country => s.address_get_country,
        };
        unsafe { f(h(address), out.as_mut_ptr(), cap(out)) };
        true
    }

    fn address_set_field(&self, address: RawHandle, field: AddressField, value: &TextArg) {
        let s = self.syms();
        let f = match field {
            AddressField::Street => s.address_set_street,
            AddressField::City => s.address_set_city,
            AddressField::StateOrProvince => s.address_set_state_or_province,
            AddressField::PostalCode => s.address_set_postal_code,
            AddressField::Country => s.address_set_country,
        };
        unsafe { f(h(address), text(value)) }
    }
}

impl AppointmentOps for MapiLibrary {
    fn appointment_text(
        &self,
        appointment: RawHandle,
        field: AppointmentText,
        out: &mut [TChar],
    ) -> bool {
        let s = self.syms();
        let f = match field {
            AppointmentText::Subject => s.appointment_get_subject,
            AppointmentText::Location => s.appointment_get_location,
        };
        unsafe { f(h(appointment), out.as_mut_ptr(), cap(out)) != 0 }
    }

    fn appointment_set_text(
        &self,
        appointment: RawHandle,
        field: AppointmentText,
        value: &TextArg,
    ) -> bool {
        let s = self.syms();
        let f = match field {
            AppointmentText::Subject => s.appointment_set_subject,
            AppointmentText::Location => s.appointment_set_location,
        };
        unsafe { f(h(appointment), text(value)) != 0 }
    }

    fn appointment_time(
        &self,
        appointment: RawHandle,
        field: AppointmentTime,
        out: &mut DateParts,
    ) -> bool {
        let s = self.syms();
        let f = match field {
            AppointmentTime::Start => s.appointment_get_start_time,
            AppointmentTime::End => s.appointment_get_end_time,
        };
        read_time(f, appointment, out)
    }

    fn appointment_time_string(
        &self,
        appointment: RawHandle,
        field: AppointmentTime,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool {
        let s = self.syms();
        let f = match field {
            AppointmentTime::Start => s.appointment_get_start_time_string,
            AppointmentTime::End => s.appointment_get_end_time_string,
        };
        read_time_string(f, appointment, out, format)
    }

    fn appointment_set_time(
        &self,
        appointment: RawHandle,
        field: AppointmentTime,
        value: DateParts,
    ) -> bool {
        let s = self.syms();
        let f = match field {
            AppointmentTime::Start => s.appointment_set_start_time,
            AppointmentTime::End => s.appointment_set_end_time,
        };
        let DateParts { year, month, day, hour, minute, second } = value;
        unsafe { f(h(appointment), year, month, day, hour, minute, second) != 0 }
    }
}
