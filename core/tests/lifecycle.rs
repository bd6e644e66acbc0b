/*
 * lifecycle.rs
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

//! Handle ownership through the public wrappers, against the recording fake.

mod common;

use common::{logged_in, FakeMapi};
use mapiex_core::native::{AddressField, ItemKind};
use mapiex_core::{
    AddressType, Config, Contact, DefaultFolder, Folder, MapiError, MapiFolder, MapiObject,
    Message, RawHandle, Session,
};

#[test]
fn explicit_close_then_drop_closes_once() {
    let (fake, session) = logged_in(Config::default());
    let inbox = session.open_default(DefaultFolder::Inbox).unwrap();
    fake.state.borrow_mut().items.push_back(ItemKind::Message);
    let message = inbox.next_message().unwrap().unwrap();
    let raw = message.raw();
    message.close();
    assert_eq!(fake.closed(), vec![raw]);
    drop(inbox);
    assert_eq!(fake.closed().iter().filter(|&&h| h == raw).count(), 1);
}

#[test]
fn null_wrapper_makes_no_foreign_calls() {
    let (fake, session) = logged_in(Config::default());
    let before = fake.calls().len();
    let message = unsafe { Message::from_raw(session.binding(), RawHandle::NULL) };
    assert!(matches!(message.subject(), Err(MapiError::NullHandle("message"))));
    assert!(matches!(message.send(), Err(MapiError::NullHandle(_))));
    drop(message);
    assert_eq!(fake.calls().len(), before);
    assert!(fake.closed().is_empty());
}

#[test]
fn borrowed_folder_never_closes() {
    let (fake, session) = logged_in(Config::default());
    session.select_default(DefaultFolder::Inbox).unwrap();
    for _ in 0..3 {
        let view = session.current_folder().unwrap().expect("current folder");
        view.get_contents().unwrap();
        drop(view);
    }
    assert!(fake.closed().is_empty());
    drop(session);
    assert!(fake.closed().is_empty());
}

#[test]
fn owned_folder_closes_exactly_once() {
    let (fake, session) = logged_in(Config::default());
    let folder = session.open_folder("Inbox/Receipts").unwrap();
    let raw = folder.raw();
    assert!(!fake.state.borrow().internal.contains(&raw));
    drop(folder);
    assert_eq!(fake.closed(), vec![raw]);
}

#[test]
fn missing_sub_folder_builds_no_wrapper() {
    let (fake, session) = logged_in(Config::default());
    let root = session.open_default(DefaultFolder::Root).unwrap();
    fake.state.borrow_mut().sub_folder_missing = true;
    assert!(matches!(
        root.open_sub_folder("Nowhere"),
        Err(MapiError::Native("FolderOpenSubFolder"))
    ));
    assert!(fake.closed().is_empty());
}

#[test]
fn session_folder_selection_keeps_no_wrapper() {
    let (fake, session) = logged_in(Config::default());
    session.select_folder("Projects").unwrap();
    let current = session.current_folder().unwrap().unwrap().raw();
    assert!(fake.state.borrow().internal.contains(&current));

    let other = session.open_default(DefaultFolder::Drafts).unwrap();
    session.set_current_folder(&other).unwrap();
    assert_eq!(session.current_folder().unwrap().unwrap().raw(), other.raw());
    drop(other);
    assert_eq!(fake.closed().len(), 1);
}

fn contact_with_address<'s>(
    fake: &FakeMapi,
    session: &'s Session<FakeMapi>,
) -> Contact<'s, FakeMapi> {
    {
        let mut st = fake.state.borrow_mut();
        st.address.insert(AddressField::Street, "1 Main St".into());
        st.address.insert(AddressField::City, "Springfield".into());
        st.address.insert(AddressField::StateOrProvince, "IL".into());
        st.address.insert(AddressField::PostalCode, "62701".into());
        st.address.insert(AddressField::Country, "USA".into());
    }
    Contact::create(session, None).unwrap()
}

#[test]
fn address_copies_five_fields_and_closes_once() {
    let (fake, session) = logged_in(Config::default());
    let contact = contact_with_address(&fake, &session);
    let address = contact.address(AddressType::Business).unwrap();
    assert_eq!(address.kind, AddressType::Business);
    assert_eq!(address.street, "1 Main St");
    assert_eq!(address.city, "Springfield");
    assert_eq!(address.state_or_province, "IL");
    assert_eq!(address.postal_code, "62701");
    assert_eq!(address.country, "USA");
    let st = fake.state.borrow();
    assert_eq!(st.address_closed.len(), 1);
    assert_eq!(st.calls.iter().filter(|&&c| c == "AddressGetField").count(), 5);
}

#[test]
fn address_read_failure_still_closes_once() {
    let (fake, session) = logged_in(Config::default());
    let contact = contact_with_address(&fake, &session);
    fake.state.borrow_mut().address_field_fails = Some(AddressField::City);
    assert!(matches!(
        contact.address(AddressType::Home),
        Err(MapiError::Native(_))
    ));
    assert_eq!(fake.state.borrow().address_closed.len(), 1);
}

#[test]
fn set_address_writes_fields_then_commits_and_closes() {
    let (fake, session) = logged_in(Config::default());
    let contact = contact_with_address(&fake, &session);
    let mut address = contact.address(AddressType::Home).unwrap();
    address.city = "Shelbyville".into();
    contact.set_address(&address, AddressType::Home).unwrap();

    let st = fake.state.borrow();
    assert_eq!(st.address_writes.len(), 5);
    assert!(st
        .address_writes
        .contains(&(AddressField::City, "Shelbyville".to_string())));
    let (committed, kind) = st.address_committed.unwrap();
    assert_eq!(kind, AddressType::Home);
    assert_eq!(st.address_closed.len(), 2);
    assert_eq!(st.address_closed[1], committed);
}

#[test]
fn text_is_truncated_to_buffer_capacity() {
    let config = Config {
        buffer_size: 4,
        ..Config::default()
    };
    let (fake, session) = logged_in(config);
    fake.set_text("profile_name", "Springfield");
    assert_eq!(session.profile_name().unwrap(), "Spri");
    fake.set_text("profile_name", "Spr");
    assert_eq!(session.profile_name().unwrap(), "Spr");
}

#[test]
fn second_login_is_a_no_op() {
    let (fake, mut session) = logged_in(Config::default());
    session.login(Some("Outlook")).unwrap();
    assert_eq!(fake.state.borrow().logins, 1);
    assert_eq!(
        fake.calls().iter().filter(|&&c| c == "MAPILogin").count(),
        1
    );
}

#[test]
fn logout_is_idempotent_and_drop_logs_out_once() {
    let (fake, mut session) = logged_in(Config::default());
    session.logout();
    session.logout();
    assert!(!session.is_logged_in());
    drop(session);
    assert_eq!(fake.state.borrow().logouts.len(), 1);

    let (fake, session) = logged_in(Config::default());
    drop(session);
    assert_eq!(fake.state.borrow().logouts.len(), 1);
}

#[test]
fn folders_close_before_logout() {
    let (fake, mut session) = logged_in(Config::default());
    {
        let inbox = session.open_default(DefaultFolder::Inbox).unwrap();
        fake.state.borrow_mut().items.push_back(ItemKind::Message);
        let _message = inbox.next_message().unwrap().unwrap();
    }
    session.logout();
    let calls = fake.calls();
    let logout = calls.iter().position(|&c| c == "MAPILogout").unwrap();
    let closes: Vec<usize> = calls
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == "ObjectClose")
        .map(|(i, _)| i)
        .collect();
    assert_eq!(closes.len(), 2);
    assert!(closes.iter().all(|&i| i < logout));
}

#[test]
fn dropping_session_after_its_folders_logs_out_last() {
    let (fake, session) = logged_in(Config::default());
    let drafts = session.open_default(DefaultFolder::Drafts).unwrap();
    drop(drafts);
    drop(session);
    let calls = fake.calls();
    assert_eq!(calls.last(), Some(&"MAPILogout"));
    assert!(calls.contains(&"ObjectClose"));
}

#[test]
fn failed_login_leaves_session_logged_out() {
    let fake = FakeMapi::new();
    fake.state.borrow_mut().login_fails = true;
    let mut session = Session::new(fake.clone(), Config::default());
    assert!(matches!(session.login(None), Err(MapiError::Native("MAPILogin"))));
    drop(session);
    assert!(fake.state.borrow().logouts.is_empty());
}

#[test]
fn operations_before_login_make_no_foreign_calls() {
    let fake = FakeMapi::new();
    let session = Session::new(fake.clone(), Config::default());
    assert!(matches!(
        session.open_default(DefaultFolder::Inbox),
        Err(MapiError::NullHandle("session"))
    ));
    assert!(session.open_message_store(None).is_err());
    assert!(session.current_folder().is_err());
    assert!(fake.calls().is_empty());
}

#[test]
fn enumeration_yields_owned_items_closed_once_each() {
    let (fake, session) = logged_in(Config::default());
    let inbox = session.open_default(DefaultFolder::Inbox).unwrap();
    fake.state
        .borrow_mut()
        .items
        .extend([ItemKind::Message, ItemKind::Message, ItemKind::Message]);
    inbox.get_contents().unwrap();
    assert_eq!(inbox.row_count().unwrap(), 3);

    let mut seen = Vec::new();
    for message in inbox.messages() {
        let message = message.unwrap();
        seen.push(message.raw());
    }
    assert_eq!(seen.len(), 3);
    assert_eq!(fake.closed(), seen);
    assert!(inbox.next_message().unwrap().is_none());
}

#[test]
fn sub_folder_cursor_names_each_folder() {
    let (fake, session) = logged_in(Config::default());
    fake.state
        .borrow_mut()
        .sub_folders
        .extend(["Inbox".to_string(), "Sent Items".to_string()]);
    session.select_default(DefaultFolder::Root).unwrap();
    session.get_hierarchy().unwrap();
    let names: Vec<String> = session
        .sub_folders()
        .map(|r| r.map(|(_, name)| name))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["Inbox", "Sent Items"]);
    assert_eq!(fake.closed().len(), 2);
}

#[test]
fn items_created_in_a_folder_name_that_folder() {
    let (fake, session) = logged_in(Config::default());
    let outbox = session.open_default(DefaultFolder::Outbox).unwrap();
    let message =
        Message::create(&session, mapiex_core::Importance::Low, true, Some(&outbox)).unwrap();
    assert_eq!(fake.state.borrow().created_in, Some(outbox.raw()));
    let contact = Contact::create(&session, None).unwrap();
    assert_eq!(fake.state.borrow().created_in, Some(RawHandle::NULL));
    drop(message);
    drop(contact);
    assert_eq!(fake.closed().len(), 2);
}

#[test]
fn copy_and_move_pass_both_folders() {
    let (fake, session) = logged_in(Config::default());
    let inbox = session.open_default(DefaultFolder::Inbox).unwrap();
    let archive: Folder<'_, FakeMapi> = inbox.create_sub_folder("Archive").unwrap();
    fake.state.borrow_mut().items.push_back(ItemKind::Message);
    let message = inbox.next_message().unwrap().unwrap();
    inbox.copy_message(&message, &archive).unwrap();
    inbox.move_message(&message, &archive).unwrap();
    inbox.delete_message(&message).unwrap();
    let st = fake.state.borrow();
    assert_eq!(st.copies[0], (inbox.raw(), message.raw(), archive.raw()));
    assert_eq!(st.copies.len(), 2);
    assert_eq!(st.deleted, vec![(ItemKind::Message, message.raw())]);
}

#[test]
fn folder_view_supports_object_calls() {
    let (fake, session) = logged_in(Config::default());
    session.select_default(DefaultFolder::Calendar).unwrap();
    fake.set_text("message_class", "IPF.Appointment");
    let view = session.current_folder().unwrap().unwrap();
    assert_eq!(view.message_class().unwrap(), "IPF.Appointment");
}
