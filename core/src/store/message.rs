/*
 * message.rs
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

//! Messages: reading headers and recipients, composing, sending.

use std::path::Path;
use std::marker::PhantomData;
use std::rc::Rc;

use chrono::NaiveDateTime;

use crate::native::{
    Binding, DateParts, MessageKind, MessageOps, MessageText, MessageTime, ObjectOps, OwnedHandle,
    RawHandle, SessionOps, TextArg,
};
use crate::store::cursor::Cursor;
use crate::store::error::{check, MapiError, Result};
use crate::store::folder::Folder;
use crate::store::kinds::{Importance, RecipientType, Sensitivity};
use crate::store::object::{read_into, read_text, MapiObject};
use crate::store::session::Session;

/// Address type used when none is given.
pub const DEFAULT_ADDRESS_TYPE: &str = "SMTP";

/// One row of a message's recipient table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
    pub kind: RecipientType,
}

/// Lives no longer than the session `'s` it was reached through.
#[derive(Debug)]
pub struct Message<'s, N: ObjectOps> {
    handle: OwnedHandle<MessageKind, N>,
    _session: PhantomData<&'s ()>,
}

impl<N: ObjectOps> Message<'_, N> {
    pub(crate) fn from_handle(handle: OwnedHandle<MessageKind, N>) -> Self {
        Self {
            handle,
            _session: PhantomData,
        }
    }

    /// # Safety
    /// `raw` must be a live message handle that nothing else will close.
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

impl<N: ObjectOps> MapiObject for Message<'_, N> {
    type Native = N;

    fn binding(&self) -> &Rc<Binding<N>> {
        self.handle.binding()
    }

    fn handle(&self) -> Result<RawHandle> {
        self.handle.get()
    }
}

impl<'s, N: ObjectOps + MessageOps> Message<'s, N> {
    /// Create a message in `folder`, or in the session's current folder for `None`.
    /// With `save_to_sent` the message is kept in Sent Items after sending.
    pub fn create(
        session: &'s Session<N>,
        importance: Importance,
        save_to_sent: bool,
        folder: Option<&Folder<'_, N>>,
    ) -> Result<Self>
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
        let ok = binding
            .native()
            .message_create(s, &mut out, importance, save_to_sent, f);
        if !ok {
            return Err(MapiError::Native("MessageCreate"));
        }
        OwnedHandle::adopt(binding, out)
            .map(Self::from_handle)
            .ok_or(MapiError::Native("MessageCreate"))
    }

    /// Show the standard message form. Returns the dialog result (1 on close or send,
    /// 2 on cancel of a new message).
    pub fn show_form(&self, session: &Session<N>) -> Result<i32>
    where
        N: SessionOps,
    {
        let s = session.raw()?;
        let h = self.handle()?;
        match self.native().message_show_form(s, h) {
            0 => Err(MapiError::Native("MessageShowForm")),
            result => Ok(result),
        }
    }

    pub fn send(&self) -> Result<()> {
        let h = self.handle()?;
        check(self.native().message_send(h), "MessageSend")
    }

    pub fn is_unread(&self) -> Result<bool> {
        let h = self.handle()?;
        Ok(self.native().message_is_unread(h))
    }

    pub fn mark_as_read(&self, read: bool) -> Result<()> {
        let h = self.handle()?;
        check(self.native().message_mark_as_read(h, read), "MessageMarkAsRead")
    }

    fn text(&self, field: MessageText, op: &'static str) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), op, |out| {
            self.native().message_text(h, field, out)
        })
    }

    pub fn header(&self) -> Result<String> {
        self.text(MessageText::Header, "MessageGetHeader")
    }

    pub fn sender_name(&self) -> Result<String> {
        self.text(MessageText::SenderName, "MessageGetSenderName")
    }

    pub fn sender_email(&self) -> Result<String> {
        self.text(MessageText::SenderEmail, "MessageGetSenderEmail")
    }

    pub fn subject(&self) -> Result<String> {
        self.text(MessageText::Subject, "MessageGetSubject")
    }

    pub fn to(&self) -> Result<String> {
        self.text(MessageText::To, "MessageGetTo")
    }

    pub fn cc(&self) -> Result<String> {
        self.text(MessageText::Cc, "MessageGetCC")
    }

    pub fn bcc(&self) -> Result<String> {
        self.text(MessageText::Bcc, "MessageGetBCC")
    }

    /// The reply-to address, if one is set.
    pub fn reply_to(&self) -> Result<String> {
        self.text(MessageText::ReplyTo, "MessageGetReplyTo")
    }

    fn time(&self, field: MessageTime, op: &'static str) -> Result<NaiveDateTime> {
        let h = self.handle()?;
        let mut parts = DateParts::default();
        check(self.native().message_time(h, field, &mut parts), op)?;
        parts.to_datetime()
    }

    fn time_string(
        &self,
        field: MessageTime,
        format: Option<&str>,
        op: &'static str,
    ) -> Result<String> {
        let h = self.handle()?;
        let format = opt_arg(format)?;
        read_text(self.binding(), op, |out| {
            self.native().message_time_string(h, field, out, &format)
        })
    }

    pub fn received_time(&self) -> Result<NaiveDateTime> {
        self.time(MessageTime::Received, "MessageGetReceivedTime")
    }

    /// Received time formatted by the library. `None` uses its default
    /// (`MM/dd/yyyy hh:mm:ss tt`).
    pub fn received_time_string(&self, format: Option<&str>) -> Result<String> {
        self.time_string(MessageTime::Received, format, "MessageGetReceivedTimeString")
    }

    pub fn submit_time(&self) -> Result<NaiveDateTime> {
        self.time(MessageTime::Submit, "MessageGetSubmitTime")
    }

    pub fn submit_time_string(&self, format: Option<&str>) -> Result<String> {
        self.time_string(MessageTime::Submit, format, "MessageGetSubmitTimeString")
    }

    pub fn sensitivity(&self) -> Result<Sensitivity> {
        let h = self.handle()?;
        let value = self.native().message_sensitivity(h);
        Sensitivity::from_raw(value).ok_or(MapiError::UnexpectedValue {
            op: "MessageGetSensitivity",
            value,
        })
    }

    /// Raw PR_PRIORITY value (-1 non-urgent, 0 normal, 1 urgent).
    pub fn priority(&self) -> Result<i32> {
        let h = self.handle()?;
        Ok(self.native().message_priority(h))
    }

    pub fn importance(&self) -> Result<Importance> {
        let h = self.handle()?;
        let value = self.native().message_importance(h);
        Importance::from_raw(value).ok_or(MapiError::UnexpectedValue {
            op: "MessageGetImportance",
            value,
        })
    }

    /// Reset the recipient cursor.
    pub fn get_recipients(&self) -> Result<()> {
        let h = self.handle()?;
        check(self.native().message_get_recipients(h), "MessageGetRecipients")
    }

    /// Next row of the recipient cursor, or `None` when exhausted.
    pub fn next_recipient(&self) -> Result<Option<Recipient>> {
        let h = self.handle()?;
        let mut name = self.binding().text_buffer();
        let mut email = self.binding().text_buffer();
        let mut kind = RecipientType::Unknown.as_raw();
        let native = self.native();
        let found = native.message_next_recipient(
            h,
            name.as_native_mut(),
            email.as_native_mut(),
            &mut kind,
        );
        if !found {
            return Ok(None);
        }
        Ok(Some(Recipient {
            name: name.to_string_lossy(),
            email: email.to_string_lossy(),
            kind: RecipientType::from_raw(kind).unwrap_or(RecipientType::Unknown),
        }))
    }

    /// Reset the recipient cursor and iterate it.
    pub fn recipients(&self) -> Result<Cursor<'_, Recipient>> {
        self.get_recipients()?;
        Ok(Cursor::new(move || self.next_recipient()))
    }

    pub fn attachment_count(&self) -> Result<i32> {
        let h = self.handle()?;
        Ok(self.native().message_attachment_count(h))
    }

    pub fn attachment_name(&self, index: i32) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), "MessageGetAttachmentName", |out| {
            self.native().message_attachment_name(h, out, index)
        })
    }

    /// Names of all attachments, sharing one buffer.
    pub fn attachment_names(&self) -> Result<Vec<String>> {
        let h = self.handle()?;
        let count = self.native().message_attachment_count(h);
        let mut buf = self.binding().text_buffer();
        (0..count)
            .map(|i| {
                read_into(&mut buf, "MessageGetAttachmentName", |out| {
                    self.native().message_attachment_name(h, out, i)
                })
            })
            .collect()
    }

    /// Save attachment `index` into directory `folder`. A negative index saves all of them.
    pub fn save_attachment(&self, folder: &Path, index: i32) -> Result<()> {
        let h = self.handle()?;
        let folder = path_arg(folder)?;
        check(
            self.native().message_save_attachment(h, &folder, index),
            "MessageSaveAttachment",
        )
    }

    /// Delete attachment `index`. A negative index deletes all of them.
    pub fn delete_attachment(&self, index: i32) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().message_delete_attachment(h, index),
            "MessageDeleteAttachment",
        )
    }

    /// Attach the file at `path`. `name` defaults to the file name; `cid` sets a content id
    /// for inline images referenced as `cid:` from an HTML body.
    pub fn add_attachment(&self, path: &Path, name: Option<&str>, cid: Option<&str>) -> Result<()> {
        let h = self.handle()?;
        let path = path_arg(path)?;
        let name = opt_arg(name)?;
        let cid = opt_arg(cid)?;
        check(
            self.native().message_add_attachment(h, &path, &name, &cid),
            "MessageAddAttachment",
        )
    }

    pub fn set_status(&self, status: i32) -> Result<()> {
        let h = self.handle()?;
        check(self.native().message_set_status(h, status), "MessageSetMessageStatus")
    }

    /// Add a recipient. `addr_type` defaults to [`DEFAULT_ADDRESS_TYPE`].
    pub fn add_recipient(
        &self,
        email: &str,
        kind: RecipientType,
        addr_type: Option<&str>,
    ) -> Result<()> {
        let h = self.handle()?;
        let email = TextArg::new(email)?;
        let addr_type = TextArg::new(addr_type.unwrap_or(DEFAULT_ADDRESS_TYPE))?;
        check(
            self.native().message_add_recipient(h, &email, kind, &addr_type),
            "MessageAddRecipient",
        )
    }

    pub fn set_subject(&self, subject: &str) -> Result<()> {
        let h = self.handle()?;
        let subject = TextArg::new(subject)?;
        self.native().message_set_subject(h, &subject);
        Ok(())
    }

    pub fn set_sender(&self, name: &str, email: &str) -> Result<()> {
        let h = self.handle()?;
        let name = TextArg::new(name)?;
        let email = TextArg::new(email)?;
        self.native().message_set_sender(h, &name, &email);
        Ok(())
    }

    /// Set the received time. With `local` the value is converted from local time to UTC.
    pub fn set_received_time(&self, time: &NaiveDateTime, local: bool) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().message_set_time(
                h,
                MessageTime::Received,
                DateParts::from_datetime(time),
                local,
            ),
            "MessageSetReceivedTime",
        )
    }

    pub fn set_submit_time(&self, time: &NaiveDateTime, local: bool) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().message_set_time(
                h,
                MessageTime::Submit,
                DateParts::from_datetime(time),
                local,
            ),
            "MessageSetSubmitTime",
        )
    }

    /// Request a read receipt, optionally sent to `receiver` instead of the sender.
    pub fn set_read_receipt(&self, set: bool, receiver: Option<&str>) -> Result<()> {
        let h = self.handle()?;
        let receiver = opt_arg(receiver)?;
        check(
            self.native().message_set_read_receipt(h, set, &receiver),
            "MessageSetReadReceipt",
        )
    }

    pub fn set_delivery_receipt(&self, set: bool) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().message_set_delivery_receipt(h, set),
            "MessageSetDeliveryReceipt",
        )
    }

    pub fn mark_as_private(&self) -> Result<()> {
        let h = self.handle()?;
        check(self.native().message_mark_as_private(h), "MessageMarkAsPrivate")
    }

    pub fn set_sensitivity(&self, sensitivity: Sensitivity) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native().message_set_sensitivity(h, sensitivity.as_raw()),
            "MessageSetSensitivity",
        )
    }
}

pub(crate) fn opt_arg(value: Option<&str>) -> Result<TextArg> {
    value.map_or_else(|| Ok(TextArg::empty()), TextArg::new)
}

pub(crate) fn path_arg(path: &Path) -> Result<TextArg> {
    let s = path
        .to_str()
        .ok_or_else(|| {
            MapiError::InvalidArgument(format!("path is not valid Unicode: {}", path.display()))
        })?;
    TextArg::new(s)
}
