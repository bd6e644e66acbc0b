/*
 * fields.rs
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

//! Selectors that fold families of near-identical native exports into one trait method each.
//! The `ffi` crate maps every selector back to its own exported symbol.

/// Item kinds yielded by contents cursors and deleted from folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Message,
    Contact,
    Appointment,
}

/// Body representations on any object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyFormat {
    Text,
    Html,
    Rtf,
}

/// Message text fields read into a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageText {
    Header,
    SenderName,
    SenderEmail,
    Subject,
    To,
    Cc,
    Bcc,
    ReplyTo,
}

/// Message timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageTime {
    Received,
    Submit,
}

/// Plain text fields on a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactText {
    ImAddress,
    Profession,
    HomePage,
    PostalAddress,
    Title,
    Company,
    DisplayNamePrefix,
    Generation,
    Department,
    Office,
    ManagerName,
    AssistantName,
    NickName,
    SpouseName,
    Categories,
    FileAs,
}

impl ContactText {
    /// The native library has no getter for file-as.
    pub fn readable(self) -> bool {
        !matches!(self, ContactText::FileAs)
    }

    /// The postal address is composed from an address type, not set as text.
    pub fn writable(self) -> bool {
        !matches!(self, ContactText::PostalAddress)
    }
}

/// Date-only fields on a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactDate {
    Birthday,
    Anniversary,
}

/// Fields of a contact address sub-object, in the order they are copied out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    City,
    StateOrProvince,
    PostalCode,
    Country,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::Street,
        AddressField::City,
        AddressField::StateOrProvince,
        AddressField::PostalCode,
        AddressField::Country,
    ];
}

/// Appointment text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentText {
    Subject,
    Location,
}

/// Appointment timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentTime {
    Start,
    End,
}
