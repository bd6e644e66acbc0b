/*
 * object.rs
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

//! Calls common to every MAPI object: save, flags, properties, bodies.

use std::rc::Rc;

use crate::native::{Binding, BodyFormat, ObjectOps, RawHandle, TChar, TextArg, TextBuffer};
use crate::store::error::{check, MapiError, Result};
use crate::store::kinds::EditorFormat;

/// Read one text value through a scratch buffer of the binding's configured capacity.
pub(crate) fn read_text<N, F>(binding: &Binding<N>, op: &'static str, read: F) -> Result<String>
where
    F: FnOnce(&mut [TChar]) -> bool,
{
    let mut buf = binding.text_buffer();
    read_into(&mut buf, op, read)
}

/// Read one text value into an existing buffer, so several reads can share it.
pub(crate) fn read_into<F>(buf: &mut TextBuffer, op: &'static str, read: F) -> Result<String>
where
    F: FnOnce(&mut [TChar]) -> bool,
{
    check(read(buf.as_native_mut()), op)?;
    Ok(buf.to_string_lossy())
}

/// An object backed by a native handle. Implemented by owned wrappers and by [`FolderView`].
///
/// [`FolderView`]: crate::store::FolderView
pub trait MapiObject {
    type Native: ObjectOps;

    fn binding(&self) -> &Rc<Binding<Self::Native>>;

    /// The handle, or `NullHandle` if this wrapper holds none.
    fn handle(&self) -> Result<RawHandle>;

    fn native(&self) -> &Self::Native {
        self.binding().native()
    }

    /// Save pending changes. `close_item` releases the underlying MAPI item as well; the
    /// wrapper itself stays open until dropped.
    fn save(&self, close_item: bool) -> Result<()> {
        let h = self.handle()?;
        check(self.native().object_save(h, close_item), "ObjectSave")
    }

    fn message_flags(&self) -> Result<i32> {
        let h = self.handle()?;
        Ok(self.native().object_message_flags(h))
    }

    fn set_message_flags(&self, flags: i32) -> Result<()> {
        let h = self.handle()?;
        check(self.native().object_set_message_flags(h, flags), "ObjectSetMessageFlags")
    }

    /// Hex string form of the entry id.
    fn entry_id(&self) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "ObjectGetEntryID", |out| {
            self.native().object_entry_id(h, out)
        })
    }

    fn message_class(&self) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "ObjectGetMessageClass", |out| {
            self.native().object_message_class(h, out)
        })
    }

    fn editor_format(&self) -> Result<EditorFormat> {
        let h = self.handle()?;
        let value = self.native().object_editor_format(h);
        EditorFormat::from_raw(value).ok_or(MapiError::UnexpectedValue {
            op: "ObjectGetMessageEditorFormat",
            value,
        })
    }

    fn set_editor_format(&self, format: EditorFormat) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().object_set_editor_format(h, format.as_raw()),
            "ObjectSetMessageEditorFormat",
        )
    }

    /// Read a string property by tag. `stream` is needed for values too large for a plain get.
    fn property_string(&self, tag: u32, stream: bool) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "ObjectGetPropertyString", |out| {
            self.native().object_property_string(h, tag, out, stream)
        })
    }

    fn set_property_string(&self, tag: u32, value: &str, stream: bool) -> Result<()> {
        let h = self.handle()?;
        let value = TextArg::new(value)?;
        check(
            self.native().object_set_property_string(h, tag, &value, stream),
            "ObjectSetPropertyString",
        )
    }

    fn named_property(&self, name: &str) -> Result<String> {
        let h = self.handle()?;
        let name = TextArg::new(name)?;
        read_text(self.binding(), "ObjectGetNamedProperty", |out| {
            self.native().object_named_property(h, &name, out)
        })
    }

    /// Set a named property, creating it first when `create` is set.
    fn set_named_property(&self, name: &str, value: &str, create: bool) -> Result<()> {
        let h = self.handle()?;
        let name = TextArg::new(name)?;
        let value = TextArg::new(value)?;
        check(
            self.native().object_set_named_property(h, &name, &value, create),
            "ObjectSetNamedProperty",
        )
    }

    /// Plain text body. With `auto_detect` an RTF-only body is converted.
    fn body(&self, auto_detect: bool) -> Result<String> {
        let h = self.handle()?;
        self.native()
            .object_body(h, BodyFormat::Text, auto_detect)
            .ok_or(MapiError::Native("ObjectGetBody"))
    }

    fn html(&self) -> Result<String> {
        let h = self.handle()?;
        self.native()
            .object_body(h, BodyFormat::Html, false)
            .ok_or(MapiError::Native("ObjectGetHTML"))
    }

    fn rtf(&self) -> Result<String> {
        let h = self.handle()?;
        self.native()
            .object_body(h, BodyFormat::Rtf, false)
            .ok_or(MapiError::Native("ObjectGetRTF"))
    }

    fn set_body(&self, body: &str) -> Result<()> {
        set_body_as(self, BodyFormat::Text, body, "ObjectSetBody")
    }

    fn set_html(&self, html: &str) -> Result<()> {
        set_body_as(self, BodyFormat::Html, html, "ObjectSetHTML")
    }

    /// Accepts HTML too; the library wraps it for RTF-capable clients.
    fn set_rtf(&self, rtf: &str) -> Result<()> {
        set_body_as(self, BodyFormat::Rtf, rtf, "ObjectSetRTF")
    }

    /// Drop the library's cached copy of the last body read.
    fn free_body(&self) {
        self.native().object_free_body();
    }
}

fn set_body_as<O>(object: &O, format: BodyFormat, value: &str, op: &'static str) -> Result<()>
where
    O: MapiObject + ?Sized,
{
    let h = object.handle()?;
    let value = TextArg::new(value)?;
    check(object.native().object_set_body(h, format, &value), op)
}
