/*
 * contact.rs
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

//! Contacts and their postal addresses.

use std::path::Path;
use std::marker::PhantomData;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::native::{
    AddressField, AddressKind, AddressOps, Binding, ContactDate, ContactKind, ContactOps,
    ContactText, DateParts, ObjectOps, OwnedHandle, RawHandle, SessionOps, TextArg, TextBuffer,
};
use crate::store::error::{check, MapiError, Result};
use crate::store::folder::Folder;
use crate::store::kinds::{AddressType, NameType, PhoneType, Sensitivity};
use crate::store::message::{opt_arg, path_arg};
use crate::store::object::{read_into, read_text, MapiObject};
use crate::store::session::Session;

/// A contact's postal address, copied out of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAddress {
    pub kind: AddressType,
    pub street: String,
    pub city: String,
    pub state_or_province: String,
    pub postal_code: String,
    pub country: String,
}

impl ContactAddress {
    pub fn new(kind: AddressType) -> Self {
        Self {
            kind,
            street: String::new(),
            city: String::new(),
            state_or_province: String::new(),
            postal_code: String::new(),
            country: String::new(),
        }
    }

    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::City => &self.city,
            AddressField::StateOrProvince => &self.state_or_province,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Country => &self.country,
        }
    }

    fn field_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Street => &mut self.street,
            AddressField::City => &mut self.city,
            AddressField::StateOrProvince => &mut self.state_or_province,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::Country => &mut self.country,
        }
    }
}

/// Lives no longer than the session `'s` it was reached through.
#[derive(Debug)]
pub struct Contact<'s, N: ObjectOps> {
    handle: OwnedHandle<ContactKind, N>,
    _session: PhantomData<&'s ()>,
}

impl<N: ObjectOps> Contact<'_, N> {
    pub(crate) fn from_handle(handle: OwnedHandle<ContactKind, N>) -> Self {
        Self {
            handle,
            _session: PhantomData,
        }
    }

    /// # Safety
    /// `raw` must be a live contact handle that nothing else will close.
    pub unsafe fn from_raw(binding: &Rc<Binding<N>>, raw: RawHandle) -> Self {
        Self::from_handle(OwnedHandle::from_raw(binding, raw))
    }

    pub fn raw(&self) -> RawHandle {
        self.handle.raw()
    }

    pub fn close(self) {
        self.handle.close();
    }
}

impl<N: ObjectOps> MapiObject for Contact<'_, N> {
    type Native = N;

    fn binding(&self) -> &Rc<Binding<N>> {
        self.handle.binding()
    }

    fn handle(&self) -> Result<RawHandle> {
        self.handle.get()
    }
}

impl<'s, N: ObjectOps + ContactOps> Contact<'s, N> {
    /// Create a contact in `folder`, or in the session's current folder for `None`.
    pub fn create(session: &'s Session<N>, folder: Option<&Folder<'_, N>>) -> Result<Self>
    where
        N: SessionOps,
    {
        let s = session.raw()?;
        let f = match folder {
            Some(f) => f.handle()?,
            None => RawHandle::NULL,
        };
        let binding = session.binding();
        let mut out = RawHandle::NULL;
        if !binding.native().contact_create(s, &mut out, f) {
            return Err(MapiError::Native("ContactCreate"));
        }
        OwnedHandle::adopt(binding, out)
            .map(Self::from_handle)
            .ok_or(MapiError::Native("ContactCreate"))
    }

    pub fn name(&self, kind: NameType) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "ContactGetName", |out| {
            self.native().contact_name(h, kind, out)
        })
    }

    pub fn set_name(&self, kind: NameType, name: &str) -> Result<()> {
        let h = self.handle()?;
        let name = TextArg::new(name)?;
        check(self.native().contact_set_name(h, kind, &name), "ContactSetName")
    }

    /// Email address `index` (1 to 3).
    pub fn email(&self, index: i32) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "ContactGetEmail", |out| {
            self.native().contact_email(h, index, out)
        })
    }

    pub fn set_email(&self, index: i32, email: &str) -> Result<()> {
        let h = self.handle()?;
        let email = TextArg::new(email)?;
        check(self.native().contact_set_email(h, index, &email), "ContactSetEmail")
    }

    pub fn email_display_as(&self, index: i32) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "ContactGetEmailDisplayAs", |out| {
            self.native().contact_email_display_as(h, index, out)
        })
    }

    pub fn set_email_display_as(&self, index: i32, display_as: &str) -> Result<()> {
        let h = self.handle()?;
        let display_as = TextArg::new(display_as)?;
        check(
            self.native().contact_set_email_display_as(h, index, &display_as),
            "ContactSetEmailDisplayAs",
        )
    }

    pub fn phone_number(&self, kind: PhoneType) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "ContactGetPhoneNumber", |out| {
            self.native().contact_phone_number(h, kind, out)
        })
    }

    pub fn set_phone_number(&self, kind: PhoneType, number: &str) -> Result<()> {
        let h = self.handle()?;
        let number = TextArg::new(number)?;
        check(
            self.native().contact_set_phone_number(h, kind, &number),
            "ContactSetPhoneNumber",
        )
    }

    /// A plain text field. File-as has no getter in the library.
    pub fn text(&self, field: ContactText) -> Result<String> {
        if !field.readable() {
            return Err(MapiError::Unsupported("reading this contact field"));
        }
        let h = self.handle()?;
        read_text(self.binding(), "ContactGetText", |out| {
            self.native().contact_text(h, field, out)
        })
    }

    /// Set a plain text field. The postal address is set with [`Contact::set_postal_address`].
    pub fn set_text(&self, field: ContactText, value: &str) -> Result<()> {
        if !field.writable() {
            return Err(MapiError::Unsupported("writing this contact field"));
        }
        let h = self.handle()?;
        let value = TextArg::new(value)?;
        check(self.native().contact_set_text(h, field, &value), "ContactSetText")
    }

    /// The display postal address as one string.
    pub fn postal_address(&self) -> Result<String> {
        self.text(ContactText::PostalAddress)
    }

    /// Make the address of `kind` the mailing address.
    pub fn set_postal_address(&self, kind: AddressType) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().contact_set_postal_address(h, kind),
            "ContactSetPostalAddress",
        )
    }

    /// Rebuild the display address from the fields of `kind`. Call after changing them.
    pub fn update_display_address(&self, kind: AddressType) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().contact_update_display_address(h, kind),
            "ContactUpdateDisplayAddress",
        )
    }

    pub fn notes_size(&self, rtf: bool) -> Result<i32> {
        let h = self.handle()?;
        Ok(self.native().contact_notes_size(h, rtf))
    }

    /// Notes as plain text or RTF. The buffer is sized from the library's reported length
    /// so long notes are not cut at the default capacity.
    pub fn notes(&self, rtf: bool) -> Result<String> {
        let h = self.handle()?;
        let size = usize::try_from(self.native().contact_notes_size(h, rtf)).unwrap_or(0);
        let capacity = size.max(self.binding().config().buffer_size);
        let mut buf = TextBuffer::with_capacity(capacity);
        read_into(&mut buf, "ContactGetNotes", |out| {
            self.native().contact_notes(h, out, rtf)
        })
    }

    pub fn set_notes(&self, notes: &str, rtf: bool) -> Result<()> {
        let h = self.handle()?;
        let notes = TextArg::new(notes)?;
        check(self.native().contact_set_notes(h, &notes, rtf), "ContactSetNotes")
    }

    pub fn sensitivity(&self) -> Result<Sensitivity> {
        let h = self.handle()?;
        let value = self.native().contact_sensitivity(h);
        Sensitivity::from_raw(value).ok_or(MapiError::UnexpectedValue {
            op: "ContactGetSensitivity",
            value,
        })
    }

    pub fn set_sensitivity(&self, sensitivity: Sensitivity) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().contact_set_sensitivity(h, sensitivity.as_raw()),
            "ContactSetSensitivity",
        )
    }

    /// Rebuild the display name from the name parts.
    pub fn update_display_name(&self) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().contact_update_display_name(h),
            "ContactUpdateDisplayName",
        )
    }

    fn date(&self, field: ContactDate, op: &'static str) -> Result<NaiveDate> {
        let h = self.handle()?;
        let mut parts = DateParts::default();
        check(self.native().contact_date(h, field, &mut parts), op)?;
        parts.to_date()
    }

    fn date_string(
        &self,
        field: ContactDate,
        format: Option<&str>,
        op: &'static str,
    ) -> Result<String> {
        let h = self.handle()?;
        let format = opt_arg(format)?;
        read_text(self.binding(), op, |out| {
            self.native().contact_date_string(h, field, out, &format)
        })
    }

    fn set_date(&self, field: ContactDate, date: &NaiveDate, op: &'static str) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native()
                .contact_set_date(h, field, DateParts::from_date(date)),
            op,
        )
    }

    pub fn birthday(&self) -> Result<NaiveDate> {
        self.date(ContactDate::Birthday, "ContactGetBirthday")
    }

    /// Birthday formatted by the library; `None` uses its default format.
    pub fn birthday_string(&self, format: Option<&str>) -> Result<String> {
        self.date_string(ContactDate::Birthday, format, "ContactGetBirthdayString")
    }

    pub fn set_birthday(&self, date: &NaiveDate) -> Result<()> {
        self.set_date(ContactDate::Birthday, date, "ContactSetBirthday")
    }

    pub fn anniversary(&self) -> Result<NaiveDate> {
        self.date(ContactDate::Anniversary, "ContactGetAnniversary")
    }

    pub fn anniversary_string(&self, format: Option<&str>) -> Result<String> {
        self.date_string(ContactDate::Anniversary, format, "ContactGetAnniversaryString")
    }

    pub fn set_anniversary(&self, date: &NaiveDate) -> Result<()> {
        self.set_date(ContactDate::Anniversary, date, "ContactSetAnniversary")
    }

    pub fn set_picture(&self, path: &Path) -> Result<()> {
        let h = self.handle()?;
        let path = path_arg(path)?;
        check(self.native().contact_set_picture(h, &path), "ContactSetPicture")
    }
}

impl<N: ObjectOps + ContactOps + AddressOps> Contact<'_, N> {
    fn open_address(&self, kind: AddressType) -> Result<OwnedHandle<AddressKind, N>> {
        let h = self.handle()?;
        let mut out = RawHandle::NULL;
        if !self.native().contact_address(h, &mut out, kind) {
            return Err(MapiError::Native("ContactGetAddress"));
        }
        OwnedHandle::adopt(self.binding(), out).ok_or(MapiError::Native("ContactGetAddress"))
    }

    /// Copy the address of `kind` out of the library. The native address object is released
    /// before this returns, whether or not every field could be read.
    pub fn address(&self, kind: AddressType) -> Result<ContactAddress> {
        let address = self.open_address(kind)?;
        let a = address.get()?;
        let native = address.native();
        let mut buf = self.binding().text_buffer();
        let mut record = ContactAddress::new(kind);
        for field in AddressField::ALL {
            *record.field_mut(field) = read_into(&mut buf, "AddressGetField", |out| {
                native.address_field(a, field, out)
            })?;
        }
        address.close();
        Ok(record)
    }

    /// Write all five fields of `address` as the address of `kind`.
    pub fn set_address(&self, address: &ContactAddress, kind: AddressType) -> Result<()> {
        let values = AddressField::ALL
            .iter()
            .map(|&f| TextArg::new(address.field(f)).map(|v| (f, v)))
            .collect::<Result<Vec<_>>>()?;
        let h = self.handle()?;
        let sub = self.open_address(kind)?;
        let a = sub.get()?;
        for (field, value) in &values {
            sub.native().address_set_field(a, *field, value);
        }
        let ok = self.native().contact_set_address(h, a, kind);
        sub.close();
        check(ok, "ContactSetAddress")
    }
}
