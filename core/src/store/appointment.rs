/*
 * appointment.rs
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

//! Calendar appointments.

use std::marker::PhantomData;
use std::rc::Rc;

use chrono::NaiveDateTime;

use crate::native::{
    AppointmentKind, AppointmentOps, AppointmentText, AppointmentTime, Binding, DateParts,
    ObjectOps, OwnedHandle, RawHandle, TextArg,
};
use crate::store::error::{check, Result};
use crate::store::message::opt_arg;
use crate::store::object::{read_text, MapiObject};

/// Lives no longer than the session `'s` it was reached through.
#[derive(Debug)]
pub struct Appointment<'s, N: ObjectOps> {
    handle: OwnedHandle<AppointmentKind, N>,
    _session: PhantomData<&'s ()>,
}

impl<N: ObjectOps> Appointment<'_, N> {
    pub(crate) fn from_handle(handle: OwnedHandle<AppointmentKind, N>) -> Self {
        Self {
            handle,
            _session: PhantomData,
        }
    }

    /// # Safety
    /// `raw` must be a live appointment handle that nothing else will close.
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

impl<N: ObjectOps> MapiObject for Appointment<'_, N> {
    type Native = N;

    fn binding(&self) -> &Rc<Binding<N>> {
        self.handle.binding()
    }

    fn handle(&self) -> Result<RawHandle> {
        self.handle.get()
    }
}

impl<N: ObjectOps + AppointmentOps> Appointment<'_, N> {
    fn text(&self, field: AppointmentText, op: &'static str) -> Result<String> {
        let h = self.handle()?;
        read_text(self.binding(), op, |out| {
            self.native().appointment_text(h, field, out)
        })
    }

    fn set_text(&self, field: AppointmentText, value: &str, op: &'static str) -> Result<()> {
        let h = self.handle()?;
        let value = TextArg::new(value)?;
        check(self.native().appointment_set_text(h, field, &value), op)
    }

    pub fn subject(&self) -> Result<String> {
        self.text(AppointmentText::Subject, "AppointmentGetSubject")
    }

    pub fn location(&self) -> Result<String> {
        self.text(AppointmentText::Location, "AppointmentGetLocation")
    }

    pub fn set_subject(&self, subject: &str) -> Result<()> {
        self.set_text(AppointmentText::Subject, subject, "AppointmentSetSubject")
    }

    pub fn set_location(&self, location: &str) -> Result<()> {
        self.set_text(AppointmentText::Location, location, "AppointmentSetLocation")
    }

    fn time(&self, field: AppointmentTime, op: &'static str) -> Result<NaiveDateTime> {
        let h = self.handle()?;
        let mut parts = DateParts::default();
        check(self.native().appointment_time(h, field, &mut parts), op)?;
        parts.to_datetime()
    }

    fn time_string(
        &self,
        field: AppointmentTime,
        format: Option<&str>,
        op: &'static str,
    ) -> Result<String> {
        let h = self.handle()?;
        let format = opt_arg(format)?;
        read_text(self.binding(), op, |out| {
            self.native().appointment_time_string(h, field, out, &format)
        })
    }

    fn set_time(
        &self,
        field: AppointmentTime,
        time: &NaiveDateTime,
        op: &'static str,
    ) -> Result<()> {
        let h = self.handle()?;
        check(
            self.native()
                .appointment_set_time(h, field, DateParts::from_datetime(time)),
            op,
        )
    }

    pub fn start_time(&self) -> Result<NaiveDateTime> {
        self.time(AppointmentTime::Start, "AppointmentGetStartTime")
    }

    /// Start time formatted by the library; `None` uses its default format.
    pub fn start_time_string(&self, format: Option<&str>) -> Result<String> {
        self.time_string(AppointmentTime::Start, format, "AppointmentGetStartTimeString")
    }

    pub fn set_start_time(&self, time: &NaiveDateTime) -> Result<()> {
        self.set_time(AppointmentTime::Start, time, "AppointmentSetStartTime")
    }

    pub fn end_time(&self) -> Result<NaiveDateTime> {
        self.time(AppointmentTime::End, "AppointmentGetEndTime")
    }

    pub fn end_time_string(&self, format: Option<&str>) -> Result<String> {
        self.time_string(AppointmentTime::End, format, "AppointmentGetEndTimeString")
    }

    pub fn set_end_time(&self, time: &NaiveDateTime) -> Result<()> {
        self.set_time(AppointmentTime::End, time, "AppointmentSetEndTime")
    }
}
