/*
 * session.rs
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

//! Logged-in MAPI session.
//!
//! A [`Session`] holds at most one native session handle. Everything else (folders, messages,
//! contacts) is reached through it; the folder the session is positioned on is exposed as a
//! borrowed [`FolderView`].

use std::rc::Rc;

use crate::native::{
    Binding, FolderKind, ItemKind, ObjectOps, OwnedHandle, RawHandle, SessionKind, SessionOps,
    TextArg,
};
use crate::store::appointment::Appointment;
use crate::store::contact::Contact;
use crate::store::cursor::{next_owned, Cursor};
use crate::store::error::{check, MapiError, Result};
use crate::store::folder::{Folder, FolderView};
use crate::store::kinds::{DefaultFolder, SortField};
use crate::store::message::Message;
use crate::store::object::read_text;
use crate::Config;

/// Initialise the native library for this process. Pair with [`term`].
pub fn init<N: SessionOps>(native: &N, config: &Config) -> Result<()> {
    check(
        native.init(config.multithreaded_notifications, config.init_as_service),
        "MAPIInit",
    )
}

pub fn term<N: SessionOps>(native: &N) {
    native.term();
}

pub struct Session<N: SessionOps> {
    binding: Rc<Binding<N>>,
    handle: Option<OwnedHandle<SessionKind, N>>,
}

impl<N: SessionOps> Session<N> {
    pub fn new(native: N, config: Config) -> Self {
        Self::with_binding(Binding::new(native, config))
    }

    pub fn with_binding(binding: Rc<Binding<N>>) -> Self {
        Self {
            binding,
            handle: None,
        }
    }

    pub fn binding(&self) -> &Rc<Binding<N>> {
        &self.binding
    }

    pub fn is_logged_in(&self) -> bool {
        self.handle.is_some()
    }

    /// The session handle, or `NullHandle` when logged out.
    pub fn raw(&self) -> Result<RawHandle> {
        self.handle
            .as_ref()
            .ok_or(MapiError::NullHandle("session"))?
            .get()
    }

    /// Log in to `profile`, or the default profile for `None`. Does nothing if already
    /// logged in.
    pub fn login(&mut self, profile: Option<&str>) -> Result<()> {
        if self.handle.is_some() {
            return Ok(());
        }
        let profile = match profile {
            Some(p) => TextArg::new(p)?,
            None => TextArg::empty(),
        };
        let as_service = self.binding.config().init_as_service;
        let raw = self.binding.native().login(&profile, as_service);
        match OwnedHandle::adopt(&self.binding, raw) {
            Some(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            None => Err(MapiError::Native("MAPILogin")),
        }
    }

    /// Log out if logged in. Safe to call repeatedly. Folders and items reached through the
    /// session borrow it, so they are all closed before this can run.
    pub fn logout(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.close();
        }
    }

    /// Open a message store by display name, or the default store for `None`.
    pub fn open_message_store(&self, name: Option<&str>) -> Result<()> {
        let s = self.raw()?;
        let name = match name {
            Some(n) => TextArg::new(n)?,
            None => TextArg::empty(),
        };
        check(
            self.binding.native().open_message_store(s, &name),
            "MAPIOpenMessageStore",
        )
    }

    pub fn profile_name(&self) -> Result<String> {
        let s = self.raw()?;
        read_text(&self.binding, "MAPIGetProfileName", |out| {
            self.binding.native().profile_name(s, out)
        })
    }

    pub fn profile_email(&self) -> Result<String> {
        let s = self.raw()?;
        read_text(&self.binding, "MAPIGetProfileEmail", |out| {
            self.binding.native().profile_email(s, out)
        })
    }

    /// Position the session on the folder at `name` (a path of display names under the
    /// store root). The session keeps the folder; see [`Session::current_folder`].
    pub fn select_folder(&self, name: &str) -> Result<()> {
        let s = self.raw()?;
        let name = TextArg::new(name)?;
        let raw = self.binding.native().open_folder(s, &name, true);
        if raw.is_null() {
            return Err(MapiError::Native("MAPIOpenFolder"));
        }
        Ok(())
    }

    /// Position the session on a well-known folder.
    pub fn select_default(&self, which: DefaultFolder) -> Result<()> {
        let s = self.raw()?;
        let raw = self.binding.native().open_default_folder(s, which, true);
        if raw.is_null() {
            return Err(MapiError::Native(default_folder_op(which)));
        }
        Ok(())
    }

    /// The folder the session is positioned on, if any. The view borrows the session and
    /// never closes the folder.
    pub fn current_folder(&self) -> Result<Option<FolderView<'_, N>>> {
        let s = self.raw()?;
        Ok(FolderView::new(
            &self.binding,
            self.binding.native().current_folder(s),
        ))
    }

    pub fn get_hierarchy(&self) -> Result<()> {
        let s = self.raw()?;
        check(self.binding.native().session_get_hierarchy(s), "MAPIGetHierarchy")
    }

    pub fn get_contents(&self) -> Result<()> {
        let s = self.raw()?;
        check(self.binding.native().session_get_contents(s), "MAPIGetContents")
    }

    pub fn row_count(&self) -> Result<i32> {
        let s = self.raw()?;
        Ok(self.binding.native().session_row_count(s))
    }

    pub fn sort_contents(&self, ascending: bool, field: SortField) -> Result<()> {
        let s = self.raw()?;
        check(
            self.binding.native().session_sort_contents(s, ascending, field),
            "MAPISortContents",
        )
    }

    pub fn set_unread_only(&self, unread_only: bool) -> Result<()> {
        let s = self.raw()?;
        check(
            self.binding.native().session_set_unread_only(s, unread_only),
            "MAPISetUnreadOnly",
        )
    }
}

impl<N: SessionOps + ObjectOps> Session<N> {
    /// Open the folder at `name` as a folder this program owns.
    pub fn open_folder(&self, name: &str) -> Result<Folder<'_, N>> {
        let s = self.raw()?;
        let name = TextArg::new(name)?;
        let raw = self.binding.native().open_folder(s, &name, false);
        self.adopt_folder(raw, "MAPIOpenFolder")
    }

    /// Open a well-known folder as a folder this program owns.
    pub fn open_default(&self, which: DefaultFolder) -> Result<Folder<'_, N>> {
        let s = self.raw()?;
        let raw = self.binding.native().open_default_folder(s, which, false);
        self.adopt_folder(raw, default_folder_op(which))
    }

    fn adopt_folder(&self, raw: RawHandle, op: &'static str) -> Result<Folder<'_, N>> {
        OwnedHandle::<FolderKind, N>::adopt(&self.binding, raw)
            .map(Folder::from_handle)
            .ok_or(MapiError::Native(op))
    }

    /// Point the session at `folder`. The session does not take ownership.
    pub fn set_current_folder(&self, folder: &Folder<'_, N>) -> Result<()> {
        let s = self.raw()?;
        let f = folder.raw();
        if f.is_null() {
            return Err(MapiError::NullHandle("folder"));
        }
        self.binding.native().set_current_folder(s, f);
        Ok(())
    }

    pub fn next_message(&self) -> Result<Option<Message<'_, N>>> {
        let s = self.raw()?;
        Ok(next_owned(&self.binding, |out| {
            self.binding.native().session_next_item(s, ItemKind::Message, out)
        })
        .map(Message::from_handle))
    }

    pub fn next_contact(&self) -> Result<Option<Contact<'_, N>>> {
        let s = self.raw()?;
        Ok(next_owned(&self.binding, |out| {
            self.binding.native().session_next_item(s, ItemKind::Contact, out)
        })
        .map(Contact::from_handle))
    }

    pub fn next_appointment(&self) -> Result<Option<Appointment<'_, N>>> {
        let s = self.raw()?;
        Ok(next_owned(&self.binding, |out| {
            self.binding
                .native()
                .session_next_item(s, ItemKind::Appointment, out)
        })
        .map(Appointment::from_handle))
    }

    pub fn next_sub_folder(&self) -> Result<Option<(Folder<'_, N>, String)>> {
        let s = self.raw()?;
        let mut name = self.binding.text_buffer();
        let folder = next_owned(&self.binding, |out| {
            self.binding
                .native()
                .session_next_sub_folder(s, out, name.as_native_mut())
        });
        Ok(folder.map(|f| (Folder::from_handle(f), name.to_string_lossy())))
    }

    pub fn messages(&self) -> Cursor<'_, Message<'_, N>> {
        Cursor::new(move || self.next_message())
    }

    pub fn contacts(&self) -> Cursor<'_, Contact<'_, N>> {
        Cursor::new(move || self.next_contact())
    }

    pub fn appointments(&self) -> Cursor<'_, Appointment<'_, N>> {
        Cursor::new(move || self.next_appointment())
    }

    pub fn sub_folders(&self) -> Cursor<'_, (Folder<'_, N>, String)> {
        Cursor::new(move || self.next_sub_folder())
    }
}

impl<N: SessionOps> std::fmt::Debug for Session<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("handle", &self.handle.as_ref().map(|h| h.raw()))
            .finish()
    }
}

fn default_folder_op(which: DefaultFolder) -> &'static str {
    match which {
        DefaultFolder::Root => "MAPIOpenRootFolder",
        DefaultFolder::Inbox => "MAPIOpenInbox",
        DefaultFolder::Outbox => "MAPIOpenOutbox",
        DefaultFolder::SentItems => "MAPIOpenSentItems",
        DefaultFolder::DeletedItems => "MAPIOpenDeletedItems",
        DefaultFolder::Contacts => "MAPIOpenContacts",
        DefaultFolder::Drafts => "MAPIOpenDrafts",
        DefaultFolder::Calendar => "MAPIOpenCalendar",
        DefaultFolder::Junk => "MAPIOpenJunkFolder",
    }
}
