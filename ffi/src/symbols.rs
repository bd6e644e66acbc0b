/*
 * symbols.rs
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

//! Function pointer table for the MAPIEx exports.

use libc::c_int;
use libloading::Library;
use mapiex_core::native::TChar;

pub(crate) type Handle = *mut libc::c_void;
pub(crate) type Bool = c_int;
pub(crate) type OutText = *mut TChar;
pub(crate) type InText = *const TChar;
pub(crate) type Int = *mut c_int;

pub(crate) type TextGetter = unsafe extern "C" fn(Handle, OutText, c_int) -> Bool;
pub(crate) type TextSetter = unsafe extern "C" fn(Handle, InText) -> Bool;

macro_rules! symbols {
    ($( $field:ident = $name:literal : fn($($arg:ty),*) $(-> $ret:ty)?; )+) => {
        pub(crate) struct Symbols {
            $( pub(crate) $field: unsafe extern "C" fn($($arg),*) $(-> $ret)?, )+
        }

        impl Symbols {
            /// Resolve every export. Fails with the name of the first missing one.
            ///
            /// # Safety
            /// `library` must be a MAPIEx build whose exports have the signatures above.
            pub(crate) unsafe fn resolve(
                library: &Library,
            ) -> Result<Self, (&'static str, libloading::Error)> {
                Ok(Self {
                    $( $field: *library
                        .get::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>(
                            concat!($name, "\0").as_bytes(),
                        )
                        .map_err(|e| ($name, e))?, )+
                })
            }
        }
    };
}

symbols! {
    init = "MAPIInit": fn(Bool, Bool) -> Bool;
    term = "MAPITerm": fn();
    login = "MAPILogin": fn(InText, Bool) -> Handle;
    logout = "MAPILogout": fn(Handle);
    open_message_store = "MAPIOpenMessageStore": fn(Handle, InText) -> Bool;
    get_folder = "MAPIGetFolder": fn(Handle) -> Handle;
    set_folder = "MAPISetFolder": fn(Handle, Handle);
    get_profile_name = "MAPIGetProfileName": fn(Handle, OutText, c_int) -> Bool;
    get_profile_email = "MAPIGetProfileEmail": fn(Handle, OutText, c_int) -> Bool;

    open_folder = "MAPIOpenFolder": fn(Handle, InText, bool) -> Handle;
    open_root_folder = "MAPIOpenRootFolder": fn(Handle, bool) -> Handle;
    open_inbox = "MAPIOpenInbox": fn(Handle, bool) -> Handle;
    open_outbox = "MAPIOpenOutbox": fn(Handle, bool) -> Handle;
    open_sent_items = "MAPIOpenSentItems": fn(Handle, bool) -> Handle;
    open_deleted_items = "MAPIOpenDeletedItems": fn(Handle, bool) -> Handle;
    open_contacts = "MAPIOpenContacts": fn(Handle, bool) -> Handle;
    open_drafts = "MAPIOpenDrafts": fn(Handle, bool) -> Handle;
    open_calendar = "MAPIOpenCalendar": fn(Handle, bool) -> Handle;
    open_junk_folder = "MAPIOpenJunkFolder": fn(Handle, bool) -> Handle;
    get_hierarchy = "MAPIGetHierarchy": fn(Handle) -> Bool;

    get_contents = "MAPIGetContents": fn(Handle) -> Bool;
    get_row_count = "MAPIGetRowCount": fn(Handle) -> c_int;
    sort_contents = "MAPISortContents": fn(Handle, Bool, c_int) -> Bool;
    set_unread_only = "MAPISetUnreadOnly": fn(Handle, Bool) -> Bool;
    get_next_message = "MAPIGetNextMessage": fn(Handle, *mut Handle) -> Bool;
    get_next_contact = "MAPIGetNextContact": fn(Handle, *mut Handle) -> Bool;
    get_next_appointment = "MAPIGetNextAppointment": fn(Handle, *mut Handle) -> Bool;
    get_next_sub_folder = "MAPIGetNextSubFolder": fn(Handle, *mut Handle, OutText, c_int) -> Bool;

    object_close = "ObjectClose": fn(Handle);
    object_save = "ObjectSave": fn(Handle, Bool) -> Bool;
    object_get_message_flags = "ObjectGetMessageFlags": fn(Handle) -> c_int;
    object_get_message_class = "ObjectGetMessageClass": fn(Handle, OutText, c_int) -> Bool;
    object_get_editor_format = "ObjectGetMessageEditorFormat": fn(Handle) -> c_int;
    object_get_property_string = "ObjectGetPropertyString":
        fn(Handle, u32, OutText, c_int, Bool) -> Bool;
    object_get_named_property = "ObjectGetNamedProperty":
        fn(Handle, InText, OutText, c_int) -> Bool;
    object_get_body = "ObjectGetBody": fn(Handle, *mut InText, Bool) -> Bool;
    object_get_html = "ObjectGetHTML": fn(Handle, *mut InText) -> Bool;
    object_get_rtf = "ObjectGetRTF": fn(Handle, *mut InText) -> Bool;
    object_free_body = "ObjectFreeBody": fn();
    object_set_message_flags = "ObjectSetMessageFlags": fn(Handle, c_int) -> Bool;
    object_set_editor_format = "ObjectSetMessageEditorFormat": fn(Handle, c_int) -> Bool;
    object_set_property_string = "ObjectSetPropertyString": fn(Handle, u32, InText, Bool) -> Bool;
    object_set_named_property = "ObjectSetNamedProperty": fn(Handle, InText, InText, Bool) -> Bool;
    object_set_body = "ObjectSetBody": fn(Handle, InText) -> Bool;
    object_set_html = "ObjectSetHTML": fn(Handle, InText) -> Bool;
    object_set_rtf = "ObjectSetRTF": fn(Handle, InText) -> Bool;

    folder_get_hierarchy = "FolderGetHierarchy": fn(Handle) -> Bool;
    folder_open_sub_folder = "FolderOpenSubFolder": fn(Handle, InText) -> Handle;
    folder_create_sub_folder = "FolderCreateSubFolder": fn(Handle, InText) -> Handle;
    folder_delete_sub_folder_by_name = "FolderDeleteSubFolderByName": fn(Handle, InText) -> Bool;
    folder_delete_sub_folder = "FolderDeleteSubFolder": fn(Handle, Handle) -> Bool;
    folder_get_contents = "FolderGetContents": fn(Handle) -> Bool;
    folder_get_row_count = "FolderGetRowCount": fn(Handle) -> c_int;
    folder_sort_contents = "FolderSortContents": fn(Handle, Bool, c_int) -> Bool;
    folder_set_unread_only = "FolderSetUnreadOnly": fn(Handle, Bool) -> Bool;
    folder_get_next_message = "FolderGetNextMessage": fn(Handle, *mut Handle) -> Bool;
    folder_get_next_contact = "FolderGetNextContact": fn(Handle, *mut Handle) -> Bool;
    folder_get_next_appointment = "FolderGetNextAppointment": fn(Handle, *mut Handle) -> Bool;
    folder_get_next_sub_folder = "FolderGetNextSubFolder":
        fn(Handle, *mut Handle, OutText, c_int) -> Bool;
    folder_delete_message = "FolderDeleteMessage": fn(Handle, Handle) -> Bool;
    folder_copy_message = "FolderCopyMessage": fn(Handle, Handle, Handle) -> Bool;
    folder_move_message = "FolderMoveMessage": fn(Handle, Handle, Handle) -> Bool;
    folder_delete_contact = "FolderDeleteContact": fn(Handle, Handle) -> Bool;
    folder_delete_appointment = "FolderDeleteAppointment": fn(Handle, Handle) -> Bool;

    message_create = "MessageCreate": fn(Handle, *mut Handle, c_int, Bool, Handle) -> Bool;
    message_show_form = "MessageShowForm": fn(Handle, Handle) -> c_int;
    message_send = "MessageSend": fn(Handle) -> Bool;
    message_is_unread = "MessageIsUnread": fn(Handle) -> Bool;
    message_mark_as_read = "MessageMarkAsRead": fn(Handle, Bool) -> Bool;
    message_get_header = "MessageGetHeader": fn(Handle, OutText, c_int) -> Bool;
    message_get_sender_name = "MessageGetSenderName": fn(Handle, OutText, c_int);
    message_get_sender_email = "MessageGetSenderEmail": fn(Handle, OutText, c_int);
    message_get_subject = "MessageGetSubject": fn(Handle, OutText, c_int);
    message_get_received_time = "MessageGetReceivedTime":
        fn(Handle, Int, Int, Int, Int, Int, Int) -> Bool;
    message_get_received_time_string = "MessageGetReceivedTimeString":
        fn(Handle, OutText, c_int, InText) -> Bool;
    message_get_submit_time = "MessageGetSubmitTime":
        fn(Handle, Int, Int, Int, Int, Int, Int) -> Bool;
    message_get_submit_time_string = "MessageGetSubmitTimeString":
        fn(Handle, OutText, c_int, InText) -> Bool;
    message_get_to = "MessageGetTo": fn(Handle, OutText, c_int) -> Bool;
    message_get_cc = "MessageGetCC": fn(Handle, OutText, c_int) -> Bool;
    message_get_bcc = "MessageGetBCC": fn(Handle, OutText, c_int) -> Bool;
    message_get_sensitivity = "MessageGetSensitivity": fn(Handle) -> c_int;
    message_get_priority = "MessageGetPriority": fn(Handle) -> c_int;
    message_get_importance = "MessageGetImportance": fn(Handle) -> c_int;
    message_get_recipients = "MessageGetRecipients": fn(Handle) -> Bool;
    message_get_next_recipient = "MessageGetNextRecipient":
        fn(Handle, OutText, c_int, OutText, c_int, Int) -> Bool;
    message_get_reply_to = "MessageGetReplyTo": fn(Handle, OutText, c_int) -> Bool;
    message_get_attachment_count = "MessageGetAttachmentCount": fn(Handle) -> c_int;
    message_get_attachment_name = "MessageGetAttachmentName":
        fn(Handle, OutText, c_int, c_int) -> Bool;
    message_save_attachment = "MessageSaveAttachment": fn(Handle, InText, c_int) -> Bool;
    message_delete_attachment = "MessageDeleteAttachment": fn(Handle, c_int) -> Bool;
    message_set_message_status = "MessageSetMessageStatus": fn(Handle, c_int) -> Bool;
    message_add_recipient = "MessageAddRecipient": fn(Handle, InText, c_int, InText) -> Bool;
    message_set_subject = "MessageSetSubject": fn(Handle, InText);
    message_set_sender = "MessageSetSender": fn(Handle, InText, InText);
    message_set_received_time = "MessageSetReceivedTime":
        fn(Handle, c_int, c_int, c_int, c_int, c_int, c_int, Bool) -> Bool;
    message_set_submit_time = "MessageSetSubmitTime":
        fn(Handle, c_int, c_int, c_int, c_int, c_int, c_int, Bool) -> Bool;
    message_add_attachment = "MessageAddAttachment": fn(Handle, InText, InText, InText) -> Bool;
    message_set_read_receipt = "MessageSetReadReceipt": fn(Handle, Bool, InText) -> Bool;
    message_set_delivery_receipt = "MessageSetDeliveryReceipt": fn(Handle, Bool) -> Bool;
    message_mark_as_private = "MessageMarkAsPrivate": fn(Handle) -> Bool;
    message_set_sensitivity = "MessageSetSensitivity": fn(Handle, c_int) -> Bool;

    contact_create = "ContactCreate": fn(Handle, *mut Handle, Handle) -> Bool;
    contact_get_name = "ContactGetName": fn(Handle, OutText, c_int, c_int) -> Bool;
    contact_get_email = "ContactGetEmail": fn(Handle, OutText, c_int, c_int) -> Bool;
    contact_get_email_display_as = "ContactGetEmailDisplayAs":
        fn(Handle, OutText, c_int, c_int) -> Bool;
    contact_get_home_page = "ContactGetHomePage": fn(Handle, OutText, c_int) -> Bool;
    contact_get_phone_number = "ContactGetPhoneNumber": fn(Handle, OutText, c_int, c_int) -> Bool;
    contact_get_address = "ContactGetAddress": fn(Handle, *mut Handle, c_int) -> Bool;
    contact_get_postal_address = "ContactGetPostalAddress": fn(Handle, OutText, c_int) -> Bool;
    contact_get_notes_size = "ContactGetNotesSize": fn(Handle, Bool) -> c_int;
    contact_get_notes = "ContactGetNotes": fn(Handle, OutText, c_int, Bool) -> Bool;
    contact_get_sensitivity = "ContactGetSensitivity": fn(Handle) -> c_int;
    contact_get_im_address = "ContactGetIMAddress": fn(Handle, OutText, c_int) -> Bool;
    contact_get_title = "ContactGetTitle": fn(Handle, OutText, c_int) -> Bool;
    contact_get_company = "ContactGetCompany": fn(Handle, OutText, c_int) -> Bool;
    contact_get_profession = "ContactGetProfession": fn(Handle, OutText, c_int) -> Bool;
    contact_get_display_name_prefix = "ContactGetDisplayNamePrefix":
        fn(Handle, OutText, c_int) -> Bool;
    contact_get_generation = "ContactGetGeneration": fn(Handle, OutText, c_int) -> Bool;
    contact_get_department = "ContactGetDepartment": fn(Handle, OutText, c_int) -> Bool;
    contact_get_office = "ContactGetOffice": fn(Handle, OutText, c_int) -> Bool;
    contact_get_manager_name = "ContactGetManagerName": fn(Handle, OutText, c_int) -> Bool;
    contact_get_assistant_name = "ContactGetAssistantName": fn(Handle, OutText, c_int) -> Bool;
    contact_get_nick_name = "ContactGetNickName": fn(Handle, OutText, c_int) -> Bool;
    contact_get_spouse_name = "ContactGetSpouseName": fn(Handle, OutText, c_int) -> Bool;
    contact_get_birthday = "ContactGetBirthday": fn(Handle, Int, Int, Int) -> Bool;
    contact_get_birthday_string = "ContactGetBirthdayString":
        fn(Handle, OutText, c_int, InText) -> Bool;
    contact_get_anniversary = "ContactGetAnniversary": fn(Handle, Int, Int, Int) -> Bool;
    contact_get_anniversary_string = "ContactGetAnniversaryString":
        fn(Handle, OutText, c_int, InText) -> Bool;
    contact_get_categories = "ContactGetCategories": fn(Handle, OutText, c_int) -> Bool;
    contact_set_name = "ContactSetName": fn(Handle, InText, c_int) -> Bool;
    contact_set_email = "ContactSetEmail": fn(Handle, InText, c_int) -> Bool;
    contact_set_email_display_as = "ContactSetEmailDisplayAs": fn(Handle, InText, c_int) -> Bool;
    contact_set_home_page = "ContactSetHomePage": fn(Handle, InText) -> Bool;
    contact_set_phone_number = "ContactSetPhoneNumber": fn(Handle, InText, c_int) -> Bool;
    contact_set_address = "ContactSetAddress": fn(Handle, Handle, c_int) -> Bool;
    contact_set_postal_address = "ContactSetPostalAddress": fn(Handle, c_int) -> Bool;
    contact_update_display_address = "ContactUpdateDisplayAddress": fn(Handle, c_int) -> Bool;
    contact_set_notes = "ContactSetNotes": fn(Handle, InText, Bool) -> Bool;
    contact_set_sensitivity = "ContactSetSensitivity": fn(Handle, c_int) -> Bool;
    contact_set_im_address = "ContactSetIMAddress": fn(Handle, InText) -> Bool;
    contact_set_file_as = "ContactSetFileAs": fn(Handle, InText) -> Bool;
    contact_set_title = "ContactSetTitle": fn(Handle, InText) -> Bool;
    contact_set_company = "ContactSetCompany": fn(Handle, InText) -> Bool;
    contact_set_profession = "ContactSetProfession": fn(Handle, InText) -> Bool;
    contact_set_display_name_prefix = "ContactSetDisplayNamePrefix": fn(Handle, InText) -> Bool;
    contact_set_generation = "ContactSetGeneration": fn(Handle, InText) -> Bool;
    contact_update_display_name = "ContactUpdateDisplayName": fn(Handle) -> Bool;
    contact_set_department = "ContactSetDepartment": fn(Handle, InText) -> Bool;
    contact_set_office = "ContactSetOffice": fn(Handle, InText) -> Bool;
    contact_set_manager_name = "ContactSetManagerName": fn(Handle, InText) -> Bool;
    contact_set_assistant_name = "ContactSetAssistantName": fn(Handle, InText) -> Bool;
    contact_set_nick_name = "ContactSetNickName": fn(Handle, InText) -> Bool;
    contact_set_spouse_name = "ContactSetSpouseName": fn(Handle, InText) -> Bool;
    contact_set_birthday = "ContactSetBirthday": fn(Handle, c_int, c_int, c_int) -> Bool;
    contact_set_anniversary = "ContactSetAnniversary": fn(Handle, c_int, c_int, c_int) -> Bool;
    contact_set_categories = "ContactSetCategories": fn(Handle, InText) -> Bool;
    contact_set_picture = "ContactSetPicture": fn(Handle, InText) -> Bool;

    address_close = "AddressClose": fn(Handle);
    address_get_street = "AddressGetStreet": fn(Handle, OutText, c_int);
    address_get_city = "AddressGetCity": fn(Handle, OutText, c_int);
    address_get_state_or_province = "AddressGetStateOrProvince": fn(Handle, OutText, c_int);
    address_get_postal_code = "AddressGetPostalCode": fn(Handle, OutText, c_int);
    address_get_country = "AddressGetCountry": fn(Handle, OutText, c_int);
    address_set_street = "AddressSetStreet": fn(Handle, InText);
    address_set_city = "AddressSetCity": fn(Handle, InText);
    address_set_state_or_province = "AddressSetStateOrProvince": fn(Handle, InText);
    address_set_postal_code = "AddressSetPostalCode": fn(Handle, InText);
    address_set_country = "AddressSetCountry": fn(Handle, InText);

    appointment_get_subject = "AppointmentGetSubject": fn(Handle, OutText, c_int) -> Bool;
    appointment_get_location = "AppointmentGetLocation": fn(Handle, OutText, c_int) -> Bool;
    appointment_get_start_time = "AppointmentGetStartTime":
        fn(Handle, Int, Int, Int, Int, Int, Int) -> Bool;
    appointment_get_start_time_string = "AppointmentGetStartTimeString":
        fn(Handle, OutText, c_int, InText) -> Bool;
    appointment_get_end_time = "AppointmentGetEndTime":
        fn(Handle, Int, Int, Int, Int, Int, Int) -> Bool;
    appointment_get_end_time_string = "AppointmentGetEndTimeString":
        fn(Handle, OutText, c_int, InText) -> Bool;
    appointment_set_subject = "AppointmentSetSubject": fn(Handle, InText) -> Bool;
    appointment_set_location = "AppointmentSetLocation": fn(Handle, InText) -> Bool;
    appointment_set_start_time = "AppointmentSetStartTime":
        fn(Handle, c_int, c_int, c_int, c_int, c_int, c_int) -> Bool;
    appointment_set_end_time = "AppointmentSetEndTime":
        fn(Handle, c_int, c_int, c_int, c_int, c_int, c_int) -> Bool;
}

/// The entry-id getter is exported as `ObjectGetStringEntryID` by some builds.
pub(crate) const ENTRY_ID_NAMES: [&str; 2] = ["ObjectGetEntryID\0", "ObjectGetStringEntryID\0"];
