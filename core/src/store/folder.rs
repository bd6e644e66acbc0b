/*
 * folder.rs
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

//! Folders: owned [`Folder`]s that close their handle, and borrowed [`FolderView`]s that never do.
//!
//! Both share the folder operations through [`MapiFolder`]. Sub-folders and items pulled from
//! a folder's cursors come back as owned wrappers.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::native::{
    Binding, FolderKind, FolderOps, ItemKind, ObjectOps, OwnedHandle, RawHandle, TextArg,
};
use crate::store::appointment::Appointment;
use crate::store::contact::Contact;
use crate::store::cursor::{next_owned, Cursor};
use crate::store::error::{check, MapiError, Result};
use crate::store::kinds::SortField;
use crate::store::message::Message;
use crate::store::object::MapiObject;

/// A folder this program owns. Closed exactly once, by [`Folder::close`] or on drop, and
/// always before the session it came from logs out.
#[derive(Debug)]
pub struct Folder<'s, N: ObjectOps> {
    handle: OwnedHandle<FolderKind, N>,
    _session: PhantomData<&'s ()>,
}

impl<N: ObjectOps> Folder<'_, N> {
    pub(crate) fn from_handle(handle: OwnedHandle<FolderKind, N>) -> Self {
        Self {
            handle,
            _session: PhantomData,
        }
    }

    /// Wrap a folder handle obtained elsewhere. A null handle gives a wrapper on which every
    /// operation fails with `NullHandle`.
    ///
    /// # Safety
    /// `raw` must be a live folder handle that nothing else will close, and the session it
    /// belongs to must stay logged in for the chosen lifetime.
    pub unsafe fn from_raw(binding: &Rc<Binding<N>>, raw: RawHandle) -> Self {
        Self::from_handle(OwnedHandle::from_raw(binding, raw))
    }

    /// The handle, for passing to sibling calls. Null once closed.
    pub fn raw(&self) -> RawHandle {
        self.handle.raw()
    }

    pub fn close(self) {
        self.handle.close();
    }
}

impl<N: ObjectOps> MapiObject for Folder<'_, N> {
    type Native = N;

    fn binding(&self) -> &Rc<Binding<N>> {
        self.handle.binding()
    }

    fn handle(&self) -> Result<RawHandle> {
        self.handle.get()
    }
}

impl<'s, N: ObjectOps + FolderOps> MapiFolder<'s> for Folder<'s, N> {
    type Native = N;

    fn folder_binding(&self) -> &Rc<Binding<N>> {
        self.handle.binding()
    }

    fn folder_handle(&self) -> Result<RawHandle> {
        self.handle.get()
    }
}

/// A folder owned by the session (its current folder). Dropping a view never closes anything,
/// and a view cannot outlive the session it came from.
pub struct FolderView<'s, N> {
    raw: RawHandle,
    binding: &'s Rc<Binding<N>>,
}

impl<'s, N> FolderView<'s, N> {
    pub(crate) fn new(binding: &'s Rc<Binding<N>>, raw: RawHandle) -> Option<Self> {
        (!raw.is_null()).then_some(Self { raw, binding })
    }

    pub fn raw(&self) -> RawHandle {
        self.raw
    }
}

impl<N> std::fmt::Debug for FolderView<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderView").field("raw", &self.raw).finish()
    }
}

impl<N: ObjectOps> MapiObject for FolderView<'_, N> {
    type Native = N;

    fn binding(&self) -> &Rc<Binding<N>> {
        self.binding
    }

    fn handle(&self) -> Result<RawHandle> {
        Ok(self.raw)
    }
}

impl<'s, N: ObjectOps + FolderOps> MapiFolder<'s> for FolderView<'s, N> {
    type Native = N;

    fn folder_binding(&self) -> &Rc<Binding<N>> {
        self.binding
    }

    fn folder_handle(&self) -> Result<RawHandle> {
        Ok(self.raw)
    }
}

/// Folder operations. Cursors are native state on the folder: call [`get_hierarchy`] before
/// pulling sub-folders and [`get_contents`] before pulling items. Everything a folder hands
/// out lives no longer than the session `'s`.
///
/// [`get_hierarchy`]: MapiFolder::get_hierarchy
/// [`get_contents`]: MapiFolder::get_contents
pub trait MapiFolder<'s> {
    type Native: ObjectOps + FolderOps;

    fn folder_binding(&self) -> &Rc<Binding<Self::Native>>;

    fn folder_handle(&self) -> Result<RawHandle>;

    fn get_hierarchy(&self) -> Result<()> {
        let h = self.folder_handle()?;
        check(
            self.folder_binding().native().folder_get_hierarchy(h),
            "FolderGetHierarchy",
        )
    }

    /// Open a direct sub-folder by name. Nothing is wrapped if the library finds none.
    fn open_sub_folder(&self, name: &str) -> Result<Folder<'s, Self::Native>> {
        let h = self.folder_handle()?;
        let name = TextArg::new(name)?;
        let binding = self.folder_binding();
        let raw = binding.native().folder_open_sub_folder(h, &name);
        OwnedHandle::adopt(binding, raw)
            .map(Folder::from_handle)
            .ok_or(MapiError::Native("FolderOpenSubFolder"))
    }

    /// Create a sub-folder, or open it if it already exists.
    fn create_sub_folder(&self, name: &str) -> Result<Folder<'s, Self::Native>> {
        let h = self.folder_handle()?;
        let name = TextArg::new(name)?;
        let binding = self.folder_binding();
        let raw = binding.native().folder_create_sub_folder(h, &name);
        OwnedHandle::adopt(binding, raw)
            .map(Folder::from_handle)
            .ok_or(MapiError::Native("FolderCreateSubFolder"))
    }

    fn delete_sub_folder_by_name(&self, name: &str) -> Result<()> {
        let h = self.folder_handle()?;
        let name = TextArg::new(name)?;
        check(
            self.folder_binding()
                .native()
                .folder_delete_sub_folder_by_name(h, &name),
            "FolderDeleteSubFolderByName",
        )
    }

    /// Delete `sub_folder` from the store. The wrapper still has to be dropped afterwards.
    fn delete_sub_folder(&self, sub_folder: &Folder<'_, Self::Native>) -> Result<()> {
        let h = self.folder_handle()?;
        let sub = sub_folder.handle.get()?;
        check(
            self.folder_binding().native().folder_delete_sub_folder(h, sub),
            "FolderDeleteSubFolder",
        )
    }

    fn get_contents(&self) -> Result<()> {
        let h = self.folder_handle()?;
        check(
            self.folder_binding().native().folder_get_contents(h),
            "FolderGetContents",
        )
    }

    fn row_count(&self) -> Result<i32> {
        let h = self.folder_handle()?;
        Ok(self.folder_binding().native().folder_row_count(h))
    }

    fn sort_contents(&self, ascending: bool, field: SortField) -> Result<()> {
        let h = self.folder_handle()?;
        check(
            self.folder_binding()
                .native()
                .folder_sort_contents(h, ascending, field),
            "FolderSortContents",
        )
    }

    fn set_unread_only(&self, unread_only: bool) -> Result<()> {
        let h = self.folder_handle()?;
        check(
            self.folder_binding()
                .native()
                .folder_set_unread_only(h, unread_only),
            "FolderSetUnreadOnly",
        )
    }

    fn next_message(&self) -> Result<Option<Message<'s, Self::Native>>> {
        let h = self.folder_handle()?;
        let binding = self.folder_binding();
        Ok(next_owned(binding, |out| {
            binding.native().folder_next_item(h, ItemKind::Message, out)
        })
        .map(Message::from_handle))
    }

    fn next_contact(&self) -> Result<Option<Contact<'s, Self::Native>>> {
        let h = self.folder_handle()?;
        let binding = self.folder_binding();
        Ok(next_owned(binding, |out| {
            binding.native().folder_next_item(h, ItemKind::Contact, out)
        })
        .map(Contact::from_handle))
    }

    fn next_appointment(&self) -> Result<Option<Appointment<'s, Self::Native>>> {
        let h = self.folder_handle()?;
        let binding = self.folder_binding();
        Ok(next_owned(binding, |out| {
            binding.native().folder_next_item(h, ItemKind::Appointment, out)
        })
        .map(Appointment::from_handle))
    }

    /// Next sub-folder from the hierarchy cursor, with its display name.
    fn next_sub_folder(&self) -> Result<Option<(Folder<'s, Self::Native>, String)>> {
        let h = self.folder_handle()?;
        let binding = self.folder_binding();
        let mut name = binding.text_buffer();
        let folder = next_owned(binding, |out| {
            binding
                .native()
                .folder_next_sub_folder(h, out, name.as_native_mut())
        });
        Ok(folder.map(|f| (Folder::from_handle(f), name.to_string_lossy())))
    }

    fn messages(&self) -> Cursor<'_, Message<'s, Self::Native>> {
        Cursor::new(move || self.next_message())
    }

    fn contacts(&self) -> Cursor<'_, Contact<'s, Self::Native>> {
        Cursor::new(move || self.next_contact())
    }

    fn appointments(&self) -> Cursor<'_, Appointment<'s, Self::Native>> {
        Cursor::new(move || self.next_appointment())
    }

    fn sub_folders(&self) -> Cursor<'_, (Folder<'s, Self::Native>, String)> {
        Cursor::new(move || self.next_sub_folder())
    }

    fn delete_message(&self, message: &Message<'_, Self::Native>) -> Result<()> {
        let h = self.folder_handle()?;
        delete_item(self.folder_binding(), h, ItemKind::Message, message.handle()?)
    }

    fn delete_contact(&self, contact: &Contact<'_, Self::Native>) -> Result<()> {
        let h = self.folder_handle()?;
        delete_item(self.folder_binding(), h, ItemKind::Contact, contact.handle()?)
    }

    fn delete_appointment(&self, appointment: &Appointment<'_, Self::Native>) -> Result<()> {
        let h = self.folder_handle()?;
        delete_item(
            self.folder_binding(),
            h,
            ItemKind::Appointment,
            appointment.handle()?,
        )
    }

    fn copy_message<'d, D: MapiFolder<'d>>(
        &self,
        message: &Message<'_, Self::Native>,
        dest: &D,
    ) -> Result<()> {
        let h = self.folder_handle()?;
        let m = message.handle()?;
        let d = dest.folder_handle()?;
        check(
            self.folder_binding().native().folder_copy_message(h, m, d),
            "FolderCopyMessage",
        )
    }

    fn move_message<'d, D: MapiFolder<'d>>(
        &self,
        message: &Message<'_, Self::Native>,
        dest: &D,
    ) -> Result<()> {
        let h = self.folder_handle()?;
        let m = message.handle()?;
        let d = dest.folder_handle()?;
        check(
            self.folder_binding().native().folder_move_message(h, m, d),
            "FolderMoveMessage",
        )
    }
}

fn delete_item<N: FolderOps>(
    binding: &Binding<N>,
    folder: RawHandle,
    kind: ItemKind,
    item: RawHandle,
) -> Result<()> {
    let op = match kind {
        ItemKind::Message => "FolderDeleteMessage",
        ItemKind::Contact => "FolderDeleteContact",
        ItemKind::Appointment => "FolderDeleteAppointment",
    };
    check(binding.native().folder_delete_item(folder, kind, item), op)
}
