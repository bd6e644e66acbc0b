/*
 * datetime.rs
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

//! Dates as they cross the native boundary: separate integer components.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::store::MapiError;

/// Year, month, day, hour, minute, second. Date-only fields leave the time at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl DateParts {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self::new(
            dt.year(),
            dt.month() as i32,
            dt.day() as i32,
            dt.hour() as i32,
            dt.minute() as i32,
            dt.second() as i32,
        )
    }

    pub fn from_date(d: &NaiveDate) -> Self {
        Self::new(d.year(), d.month() as i32, d.day() as i32, 0, 0, 0)
    }

    pub fn to_date(&self) -> Result<NaiveDate, MapiError> {
        let month = u32::try_from(self.month).map_err(|_| MapiError::InvalidDate(*self))?;
        let day = u32::try_from(self.day).map_err(|_| MapiError::InvalidDate(*self))?;
        NaiveDate::from_ymd_opt(self.year, month, day).ok_or(MapiError::InvalidDate(*self))
    }

    pub fn to_datetime(&self) -> Result<NaiveDateTime, MapiError> {
        let date = self.to_date()?;
        let h = u32::try_from(self.hour).map_err(|_| MapiError::InvalidDate(*self))?;
        let m = u32::try_from(self.minute).map_err(|_| MapiError::InvalidDate(*self))?;
        let s = u32::try_from(self.second).map_err(|_| MapiError::InvalidDate(*self))?;
        date.and_hms_opt(h, m, s).ok_or(MapiError::InvalidDate(*self))
    }
}
