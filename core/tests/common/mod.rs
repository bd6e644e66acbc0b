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

//! Recording stand-in for the native library, shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use mapiex_core::native::text::copy_native_text;
use mapiex_core::native::{
    AddressField, AddressOps, AppointmentOps, AppointmentText, AppointmentTime, BodyFormat,
    ContactDate, ContactOps, ContactText, DateParts, FolderOps, ItemKind, MessageOps, MessageText,
    MessageTime, ObjectOps, RawHandle, SessionOps, TChar, TextArg,
};
use mapiex_core::{
    AddressType, Config, DefaultFolder, Importance, NameType, PhoneType, RecipientType, Session,
    SortField,
};

/// Everything the fake has been asked to do, plus canned answers.
#[derive(Debug, Default)]
pub struct FakeState {
    /// Export names in call order.
    pub calls: Vec<&'static str>,
    /// Handles passed to ObjectClose.
    pub closed: Vec<RawHandle>,
    /// Handles passed to AddressClose.
    pub address_closed: Vec<RawHandle>,
    pub logins: usize,
    pub logouts: Vec<RawHandle>,
    /// Handles the session keeps for itself (opened with the internal flag).
    pub internal: HashSet<RawHandle>,
    pub current_folder: RawHandle,
    next_handle: usize,

    pub login_fails: bool,
    pub sub_folder_missing: bool,
    pub address_field_fails: Option<AddressField>,
    pub address: HashMap<AddressField, String>,
    pub address_writes: Vec<(AddressField, String)>,
    pub address_committed: Option<(RawHandle, AddressType)>,
    /// Items waiting in the contents cursor.
    pub items: VecDeque<ItemKind>,
    /// Names waiting in the hierarchy cursor.
    pub sub_folders: VecDeque<String>,
    pub recipients: VecDeque<(String, String, i32)>,
    /// Text answers keyed by field, e.g. "Subject" or "profile_name".
    pub texts: HashMap<String, String>,
    pub times: HashMap<String, DateParts>,
    pub created_in: Option<RawHandle>,
    pub set_times: Vec<(String, DateParts)>,
    pub copies: Vec<(RawHandle, RawHandle, RawHandle)>,
    pub deleted: Vec<(ItemKind, RawHandle)>,
    pub int_values: HashMap<&'static str, i32>,
}

impl FakeState {
    fn alloc(&mut self) -> RawHandle {
        self.next_handle += 1;
        RawHandle::from_addr(0x1000 + self.next_handle * 0x10)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeMapi {
    pub state: Rc<RefCell<FakeState>>,
}

impl FakeMapi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn closed(&self) -> Vec<RawHandle> {
        self.state.borrow().closed.clone()
    }

    pub fn set_text(&self, key: &str, value: &str) {
        self.state
            .borrow_mut()
            .texts
            .insert(key.to_string(), value.to_string());
    }

    fn record(&self, op: &'static str) {
        self.state.borrow_mut().calls.push(op);
    }

    fn alloc(&self) -> RawHandle {
        self.state.borrow_mut().alloc()
    }

    fn answer(&self, op: &'static str, key: &str, out: &mut [TChar]) -> bool {
        self.record(op);
        match self.state.borrow().texts.get(key) {
            Some(v) => {
                copy_native_text(out, v);
                true
            }
            None => false,
        }
    }

    fn time(&self, op: &'static str, key: &str, out: &mut DateParts) -> bool {
        self.record(op);
        match self.state.borrow().times.get(key) {
            Some(t) => {
                *out = *t;
                true
            }
            None => false,
        }
    }

    fn int(&self, op: &'static str) -> i32 {
        self.record(op);
        self.state.borrow().int_values.get(op).copied().unwrap_or(0)
    }

    fn next_item(&self, op: &'static str, kind: ItemKind, out: &mut RawHandle) -> bool {
        self.record(op);
        let mut st = self.state.borrow_mut();
        if st.items.front() == Some(&kind) {
            st.items.pop_front();
            *out = st.alloc();
            true
        } else {
            false
        }
    }

    fn next_sub_folder(&self, op: &'static str, out: &mut RawHandle, name: &mut [TChar]) -> bool {
        self.record(op);
        let mut st = self.state.borrow_mut();
        match st.sub_folders.pop_front() {
            Some(n) => {
                copy_native_text(name, &n);
                *out = st.alloc();
                true
            }
            None => false,
        }
    }
}

/// A session over a fresh fake, logged in.
pub fn logged_in(config: Config) -> (FakeMapi, Session<FakeMapi>) {
    let fake = FakeMapi::new();
    let mut session = Session::new(fake.clone(), config);
    session.login(None).expect("login");
    (fake, session)
}

impl SessionOps for FakeMapi {
    fn init(&self, _multithreaded_notifications: bool, _as_service: bool) -> bool {
        self.record("MAPIInit");
        true
    }

    fn term(&self) {
        self.record("MAPITerm");
    }

    fn login(&self, _profile: &TextArg, _as_service: bool) -> RawHandle {
        self.record("MAPILogin");
        let mut st = self.state.borrow_mut();
        if st.login_fails {
            return RawHandle::NULL;
        }
        st.logins += 1;
        st.alloc()
    }

    fn logout(&self, session: RawHandle) {
        self.record("MAPILogout");
        self.state.borrow_mut().logouts.push(session);
    }

    fn open_message_store(&self, _session: RawHandle, _store: &TextArg) -> bool {
        self.record("MAPIOpenMessageStore");
        true
    }

    fn current_folder(&self, _session: RawHandle) -> RawHandle {
        self.record("MAPIGetFolder");
        self.state.borrow().current_folder
    }

    fn set_current_folder(&self, _session: RawHandle, folder: RawHandle) {
        self.record("MAPISetFolder");
        self.state.borrow_mut().current_folder = folder;
    }

    fn profile_name(&self, _session: RawHandle, out: &mut [TChar]) -> bool {
        self.answer("MAPIGetProfileName", "profile_name", out)
    }

    fn profile_email(&self, _session: RawHandle, out: &mut [TChar]) -> bool {
        self.answer("MAPIGetProfileEmail", "profile_email", out)
    }

    fn open_folder(&self, _session: RawHandle, _name: &TextArg, internal: bool) -> RawHandle {
        self.record("MAPIOpenFolder");
        let mut st = self.state.borrow_mut();
        let h = st.alloc();
        if internal {
            st.internal.insert(h);
            st.current_folder = h;
        }
        h
    }

    fn open_default_folder(
        &self,
        _session: RawHandle,
        _which: DefaultFolder,
        internal: bool,
    ) -> RawHandle {
        self.record("MAPIOpenDefaultFolder");
        let mut st = self.state.borrow_mut();
        let h = st.alloc();
        if internal {
            st.internal.insert(h);
            st.current_folder = h;
        }
        h
    }

    fn session_get_hierarchy(&self, _session: RawHandle) -> bool {
        self.record("MAPIGetHierarchy");
        true
    }

    fn session_get_contents(&self, _session: RawHandle) -> bool {
        self.record("MAPIGetContents");
        true
    }

    fn session_row_count(&self, _session: RawHandle) -> i32 {
        self.record("MAPIGetRowCount");
        self.state.borrow().items.len() as i32
    }

    fn session_sort_contents(
        &self,
        _session: RawHandle,
        _ascending: bool,
        _field: SortField,
    ) -> bool {
        self.record("MAPISortContents");
        true
    }

    fn session_set_unread_only(&self, _session: RawHandle, _unread_only: bool) -> bool {
        self.record("MAPISetUnreadOnly");
        true
    }

    fn session_next_item(&self, _session: RawHandle, kind: ItemKind, out: &mut RawHandle) -> bool {
        self.next_item("MAPIGetNextItem", kind, out)
    }

    fn session_next_sub_folder(
        &self,
        _session: RawHandle,
        out: &mut RawHandle,
        name: &mut [TChar],
    ) -> bool {
        self.next_sub_folder("MAPIGetNextSubFolder", out, name)
    }
}

impl ObjectOps for FakeMapi {
    fn object_close(&self, object: RawHandle) {
        self.record("ObjectClose");
        self.state.borrow_mut().closed.push(object);
    }

    fn object_save(&self, _object: RawHandle, _close: bool) -> bool {
        self.record("ObjectSave");
        true
    }

    fn object_message_flags(&self, _object: RawHandle) -> i32 {
        self.int("ObjectGetMessageFlags")
    }

    fn object_set_message_flags(&self, _object: RawHandle, flags: i32) -> bool {
        self.record("ObjectSetMessageFlags");
        self.state
            .borrow_mut()
            .int_values
            .insert("ObjectGetMessageFlags", flags);
        true
    }

    fn object_entry_id(&self, _object: RawHandle, out: &mut [TChar]) -> bool {
        self.answer("ObjectGetEntryID", "entry_id", out)
    }

    fn object_message_class(&self, _object: RawHandle, out: &mut [TChar]) -> bool {
        self.answer("ObjectGetMessageClass", "message_class", out)
    }

    fn object_editor_format(&self, _object: RawHandle) -> i32 {
        self.int("ObjectGetMessageEditorFormat")
    }

    fn object_set_editor_format(&self, _object: RawHandle, format: i32) -> bool {
        self.record("ObjectSetMessageEditorFormat");
        self.state
            .borrow_mut()
            .int_values
            .insert("ObjectGetMessageEditorFormat", format);
        true
    }

    fn object_property_string(
        &self,
        _object: RawHandle,
        tag: u32,
        out: &mut [TChar],
        _stream: bool,
    ) -> bool {
        self.answer("ObjectGetPropertyString", &format!("{:#010x}", tag), out)
    }

    fn object_set_property_string(
        &self,
        _object: RawHandle,
        tag: u32,
        value: &TextArg,
        _stream: bool,
    ) -> bool {
        self.record("ObjectSetPropertyString");
        self.set_text(&format!("{:#010x}", tag), &value.to_string_lossy());
        true
    }

    fn object_named_property(&self, _object: RawHandle, name: &TextArg, out: &mut [TChar]) -> bool {
        self.answer("ObjectGetNamedProperty", &name.to_string_lossy(), out)
    }

    fn object_set_named_property(
        &self,
        _object: RawHandle,
        name: &TextArg,
        value: &TextArg,
        create: bool,
    ) -> bool {
        self.record("ObjectSetNamedProperty");
        let key = name.to_string_lossy();
        if !create && !self.state.borrow().texts.contains_key(&key) {
            return false;
        }
        self.set_text(&key, &value.to_string_lossy());
        true
    }

    fn object_body(
        &self,
        _object: RawHandle,
        format: BodyFormat,
        _auto_detect: bool,
    ) -> Option<String> {
        self.record("ObjectGetBody");
        self.state.borrow().texts.get(&format!("{:?}", format)).cloned()
    }

    fn object_set_body(&self, _object: RawHandle, format: BodyFormat, value: &TextArg) -> bool {
        self.record("ObjectSetBody");
        self.set_text(&format!("{:?}", format), &value.to_string_lossy());
        true
    }

    fn object_free_body(&self) {
        self.record("ObjectFreeBody");
    }
}

impl FolderOps for FakeMapi {
    fn folder_get_hierarchy(&self, _folder: RawHandle) -> bool {
        self.record("FolderGetHierarchy");
        true
    }

    fn folder_open_sub_folder(&self, _folder: RawHandle, _name: &TextArg) -> RawHandle {
        self.record("FolderOpenSubFolder");
        if self.state.borrow().sub_folder_missing {
            return RawHandle::NULL;
        }
        self.alloc()
    }

    fn folder_create_sub_folder(&self, _folder: RawHandle, _name: &TextArg) -> RawHandle {
        self.record("FolderCreateSubFolder");
        self.alloc()
    }

    fn folder_delete_sub_folder_by_name(&self, _folder: RawHandle, _name: &TextArg) -> bool {
        self.record("FolderDeleteSubFolderByName");
        true
    }

    fn folder_delete_sub_folder(&self, _folder: RawHandle, _sub_folder: RawHandle) -> bool {
        self.record("FolderDeleteSubFolder");
        true
    }

    fn folder_get_contents(&self, _folder: RawHandle) -> bool {
        self.record("FolderGetContents");
        true
    }

    fn folder_row_count(&self, _folder: RawHandle) -> i32 {
        self.record("FolderGetRowCount");
        self.state.borrow().items.len() as i32
    }

    fn folder_sort_contents(
        &self,
        _folder: RawHandle,
        _ascending: bool,
        _field: SortField,
    ) -> bool {
        self.record("FolderSortContents");
        true
    }

    fn folder_set_unread_only(&self, _folder: RawHandle, _unread_only: bool) -> bool {
        self.record("FolderSetUnreadOnly");
        true
    }

    fn folder_next_item(&self, _folder: RawHandle, kind: ItemKind, out: &mut RawHandle) -> bool {
        self.next_item("FolderGetNextItem", kind, out)
    }

    fn folder_next_sub_folder(
        &self,
        _folder: RawHandle,
        out: &mut RawHandle,
        name: &mut [TChar],
    ) -> bool {
        self.next_sub_folder("FolderGetNextSubFolder", out, name)
    }

    fn folder_delete_item(&self, _folder: RawHandle, kind: ItemKind, item: RawHandle) -> bool {
        self.record("FolderDeleteItem");
        self.state.borrow_mut().deleted.push((kind, item));
        true
    }

    fn folder_copy_message(&self, folder: RawHandle, message: RawHandle, dest: RawHandle) -> bool {
        self.record("FolderCopyMessage");
        self.state.borrow_mut().copies.push((folder, message, dest));
        true
    }

    fn folder_move_message(&self, folder: RawHandle, message: RawHandle, dest: RawHandle) -> bool {
        self.record("FolderMoveMessage");
        self.state.borrow_mut().copies.push((folder, message, dest));
        true
    }
}

impl MessageOps for FakeMapi {
    fn message_create(
        &self,
        _session: RawHandle,
        out: &mut RawHandle,
        _importance: Importance,
        _save_to_sent: bool,
        folder: RawHandle,
    ) -> bool {
        self.record("MessageCreate");
        let mut st = self.state.borrow_mut();
        st.created_in = Some(folder);
        *out = st.alloc();
        true
    }

    fn message_show_form(&self, _session: RawHandle, _message: RawHandle) -> i32 {
        self.int("MessageShowForm")
    }

    fn message_send(&self, _message: RawHandle) -> bool {
        self.record("MessageSend");
        true
    }

    fn message_is_unread(&self, _message: RawHandle) -> bool {
        self.int("MessageIsUnread") != 0
    }

    fn message_mark_as_read(&self, _message: RawHandle, read: bool) -> bool {
        self.record("MessageMarkAsRead");
        self.state
            .borrow_mut()
            .int_values
            .insert("MessageIsUnread", i32::from(!read));
        true
    }

    fn message_text(&self, _message: RawHandle, field: MessageText, out: &mut [TChar]) -> bool {
        self.answer("MessageGetText", &format!("{:?}", field), out)
    }

    fn message_time(&self, _message: RawHandle, field: MessageTime, out: &mut DateParts) -> bool {
        self.time("MessageGetTime", &format!("{:?}", field), out)
    }

    fn message_time_string(
        &self,
        _message: RawHandle,
        field: MessageTime,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool {
        self.answer(
            "MessageGetTimeString",
            &format!("{:?}:{}", field, format.to_string_lossy()),
            out,
        )
    }

    fn message_sensitivity(&self, _message: RawHandle) -> i32 {
        self.int("MessageGetSensitivity")
    }

    fn message_priority(&self, _message: RawHandle) -> i32 {
        self.int("MessageGetPriority")
    }

    fn message_importance(&self, _message: RawHandle) -> i32 {
        self.int("MessageGetImportance")
    }

    fn message_get_recipients(&self, _message: RawHandle) -> bool {
        self.record("MessageGetRecipients");
        true
    }

    fn message_next_recipient(
        &self,
        _message: RawHandle,
        name: &mut [TChar],
        email: &mut [TChar],
        kind: &mut i32,
    ) -> bool {
        self.record("MessageGetNextRecipient");
        match self.state.borrow_mut().recipients.pop_front() {
            Some((n, e, k)) => {
                copy_native_text(name, &n);
                copy_native_text(email, &e);
                *kind = k;
                true
            }
            None => false,
        }
    }

    fn message_attachment_count(&self, _message: RawHandle) -> i32 {
        self.int("MessageGetAttachmentCount")
    }

    fn message_attachment_name(&self, _message: RawHandle, out: &mut [TChar], index: i32) -> bool {
        self.answer("MessageGetAttachmentName", &format!("attachment{}", index), out)
    }

    fn message_save_attachment(&self, _message: RawHandle, _folder: &TextArg, _index: i32) -> bool {
        self.record("MessageSaveAttachment");
        true
    }

    fn message_delete_attachment(&self, _message: RawHandle, _index: i32) -> bool {
        self.record("MessageDeleteAttachment");
        true
    }

    fn message_set_status(&self, _message: RawHandle, _status: i32) -> bool {
        self.record("MessageSetMessageStatus");
        true
    }

    fn message_add_recipient(
        &self,
        _message: RawHandle,
        email: &TextArg,
        kind: RecipientType,
        addr_type: &TextArg,
    ) -> bool {
        self.record("MessageAddRecipient");
        self.state.borrow_mut().recipients.push_back((
            addr_type.to_string_lossy(),
            email.to_string_lossy(),
            kind.as_raw(),
        ));
        true
    }

    fn message_set_subject(&self, _message: RawHandle, subject: &TextArg) {
        self.record("MessageSetSubject");
        self.set_text("Subject", &subject.to_string_lossy());
    }

    fn message_set_sender(&self, _message: RawHandle, name: &TextArg, email: &TextArg) {
        self.record("MessageSetSender");
        self.set_text("SenderName", &name.to_string_lossy());
        self.set_text("SenderEmail", &email.to_string_lossy());
    }

    fn message_set_time(
        &self,
        _message: RawHandle,
        field: MessageTime,
        value: DateParts,
        _local: bool,
    ) -> bool {
        self.record("MessageSetTime");
        self.state
            .borrow_mut()
            .set_times
            .push((format!("{:?}", field), value));
        true
    }

    fn message_add_attachment(
        &self,
        _message: RawHandle,
        _path: &TextArg,
        _name: &TextArg,
        _cid: &TextArg,
    ) -> bool {
        self.record("MessageAddAttachment");
        true
    }

    fn message_set_read_receipt(
        &self,
        _message: RawHandle,
        _set: bool,
        _receiver: &TextArg,
    ) -> bool {
        self.record("MessageSetReadReceipt");
        true
    }

    fn message_set_delivery_receipt(&self, _message: RawHandle, _set: bool) -> bool {
        self.record("MessageSetDeliveryReceipt");
        true
    }

    fn message_mark_as_private(&self, _message: RawHandle) -> bool {
        self.record("MessageMarkAsPrivate");
        true
    }

    fn message_set_sensitivity(&self, _message: RawHandle, sensitivity: i32) -> bool {
        self.record("MessageSetSensitivity");
        self.state
            .borrow_mut()
            .int_values
            .insert("MessageGetSensitivity", sensitivity);
        true
    }
}

impl ContactOps for FakeMapi {
    fn contact_create(&self, _session: RawHandle, out: &mut RawHandle, folder: RawHandle) -> bool {
        self.record("ContactCreate");
        let mut st = self.state.borrow_mut();
        st.created_in = Some(folder);
        *out = st.alloc();
        true
    }

    fn contact_name(&self, _contact: RawHandle, kind: NameType, out: &mut [TChar]) -> bool {
        self.answer("ContactGetName", &format!("{:?}", kind), out)
    }

    fn contact_set_name(&self, _contact: RawHandle, kind: NameType, value: &TextArg) -> bool {
        self.record("ContactSetName");
        self.set_text(&format!("{:?}", kind), &value.to_string_lossy());
        true
    }

    fn contact_email(&self, _contact: RawHandle, index: i32, out: &mut [TChar]) -> bool {
        self.answer("ContactGetEmail", &format!("email{}", index), out)
    }

    fn contact_set_email(&self, _contact: RawHandle, index: i32, value: &TextArg) -> bool {
        self.record("ContactSetEmail");
        self.set_text(&format!("email{}", index), &value.to_string_lossy());
        true
    }

    fn contact_email_display_as(&self, _contact: RawHandle, index: i32, out: &mut [TChar]) -> bool {
        self.answer("ContactGetEmailDisplayAs", &format!("display{}", index), out)
    }

    fn contact_set_email_display_as(
        &self,
        _contact: RawHandle,
        index: i32,
        value: &TextArg,
    ) -> bool {
        self.record("ContactSetEmailDisplayAs");
        self.set_text(&format!("display{}", index), &value.to_string_lossy());
        true
    }

    fn contact_phone_number(
        &self,
        _contact: RawHandle,
        kind: PhoneType,
        out: &mut [TChar],
    ) -> bool {
        self.answer("ContactGetPhoneNumber", &format!("{:?}", kind), out)
    }

    fn contact_set_phone_number(
        &self,
        _contact: RawHandle,
        kind: PhoneType,
        value: &TextArg,
    ) -> bool {
        self.record("ContactSetPhoneNumber");
        self.set_text(&format!("{:?}", kind), &value.to_string_lossy());
        true
    }

    fn contact_text(&self, _contact: RawHandle, field: ContactText, out: &mut [TChar]) -> bool {
        self.answer("ContactGetText", &format!("{:?}", field), out)
    }

    fn contact_set_text(&self, _contact: RawHandle, field: ContactText, value: &TextArg) -> bool {
        self.record("ContactSetText");
        self.set_text(&format!("{:?}", field), &value.to_string_lossy());
        true
    }

    fn contact_address(
        &self,
        _contact: RawHandle,
        out: &mut RawHandle,
        _kind: AddressType,
    ) -> bool {
        self.record("ContactGetAddress");
        *out = self.alloc();
        true
    }

    fn contact_set_address(
        &self,
        _contact: RawHandle,
        address: RawHandle,
        kind: AddressType,
    ) -> bool {
        self.record("ContactSetAddress");
        self.state.borrow_mut().address_committed = Some((address, kind));
        true
    }

    fn contact_set_postal_address(&self, _contact: RawHandle, _kind: AddressType) -> bool {
        self.record("ContactSetPostalAddress");
        true
    }

    fn contact_update_display_address(&self, _contact: RawHandle, _kind: AddressType) -> bool {
        self.record("ContactUpdateDisplayAddress");
        true
    }

    fn contact_notes_size(&self, _contact: RawHandle, _rtf: bool) -> i32 {
        self.record("ContactGetNotesSize");
        self.state
            .borrow()
            .texts
            .get("notes")
            .map_or(0, |n| n.len() as i32)
    }

    fn contact_notes(&self, _contact: RawHandle, out: &mut [TChar], _rtf: bool) -> bool {
        self.answer("ContactGetNotes", "notes", out)
    }

    fn contact_set_notes(&self, _contact: RawHandle, value: &TextArg, _rtf: bool) -> bool {
        self.record("ContactSetNotes");
        self.set_text("notes", &value.to_string_lossy());
        true
    }

    fn contact_sensitivity(&self, _contact: RawHandle) -> i32 {
        self.int("ContactGetSensitivity")
    }

    fn contact_set_sensitivity(&self, _contact: RawHandle, sensitivity: i32) -> bool {
        self.record("ContactSetSensitivity");
        self.state
            .borrow_mut()
            .int_values
            .insert("ContactGetSensitivity", sensitivity);
        true
    }

    fn contact_update_display_name(&self, _contact: RawHandle) -> bool {
        self.record("ContactUpdateDisplayName");
        true
    }

    fn contact_date(&self, _contact: RawHandle, field: ContactDate, out: &mut DateParts) -> bool {
        self.time("ContactGetDate", &format!("{:?}", field), out)
    }

    fn contact_date_string(
        &self,
        _contact: RawHandle,
        field: ContactDate,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool {
        self.answer(
            "ContactGetDateString",
            &format!("{:?}:{}", field, format.to_string_lossy()),
            out,
        )
    }

    fn contact_set_date(&self, _contact: RawHandle, field: ContactDate, value: DateParts) -> bool {
        self.record("ContactSetDate");
        self.state
            .borrow_mut()
            .times
            .insert(format!("{:?}", field), value);
        true
    }

    fn contact_set_picture(&self, _contact: RawHandle, _path: &TextArg) -> bool {
        self.record("ContactSetPicture");
        true
    }
}

impl AddressOps for FakeMapi {
    fn address_close(&self, address: RawHandle) {
        self.record("AddressClose");
        self.state.borrow_mut().address_closed.push(address);
    }

    fn address_field(&self, _address: RawHandle, field: AddressField, out: &mut [TChar]) -> bool {
        self.record("AddressGetField");
        let st = self.state.borrow();
        if st.address_field_fails == Some(field) {
            return false;
        }
        copy_native_text(out, st.address.get(&field).map_or("", String::as_str));
        true
    }

    fn address_set_field(&self, _address: RawHandle, field: AddressField, value: &TextArg) {
        self.record("AddressSetField");
        self.state
            .borrow_mut()
            .address_writes
            .push((field, value.to_string_lossy()));
    }
}

impl AppointmentOps for FakeMapi {
    fn appointment_text(
        &self,
        _appointment: RawHandle,
        field: AppointmentText,
        out: &mut [TChar],
    ) -> bool {
        self.answer("AppointmentGetText", &format!("{:?}", field), out)
    }

    fn appointment_set_text(
        &self,
        _appointment: RawHandle,
        field: AppointmentText,
        value: &TextArg,
    ) -> bool {
        self.record("AppointmentSetText");
        self.set_text(&format!("{:?}", field), &value.to_string_lossy());
        true
    }

    fn appointment_time(
        &self,
        _appointment: RawHandle,
        field: AppointmentTime,
        out: &mut DateParts,
    ) -> bool {
        self.time("AppointmentGetTime", &format!("{:?}", field), out)
    }

    fn appointment_time_string(
        &self,
        _appointment: RawHandle,
        field: AppointmentTime,
        out: &mut [TChar],
        format: &TextArg,
    ) -> bool {
        self.answer(
            "AppointmentGetTimeString",
            &format!("{:?}:{}", field, format.to_string_lossy()),
            out,
        )
    }

    fn appointment_set_time(
        &self,
        _appointment: RawHandle,
        field: AppointmentTime,
        value: DateParts,
    ) -> bool {
        self.record("AppointmentSetTime");
        self.state
            .borrow_mut()
            .times
            .insert(format!("{:?}", field), value);
        true
    }
}
