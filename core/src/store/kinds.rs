/*
 * kinds.rs
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

//! Integer tags shared with the native library. Discriminants are the values the library expects.

macro_rules! native_tag {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            pub fn as_raw(self) -> i32 {
                self as i32
            }

            pub fn from_raw(value: i32) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

/// Well-known folders a session can open directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultFolder {
    Root,
    Inbox,
    Outbox,
    SentItems,
    DeletedItems,
    Contacts,
    Drafts,
    Calendar,
    Junk,
}

native_tag!(
    /// Column a contents table is sorted on.
    SortField {
        ReceivedTime = 0,
        Subject = 1,
    }
);

native_tag!(
    Sensitivity {
        None = 0,
        Personal = 1,
        Private = 2,
        CompanyConfidential = 3,
    }
);

native_tag!(
    Importance {
        Low = 0,
        Normal = 1,
        High = 2,
    }
);

native_tag!(
    /// Recipient slot; `Unknown` is what the library reports for unrecognised rows.
    RecipientType {
        Unknown = 0,
        To = 1,
        Cc = 2,
        Bcc = 3,
    }
);

native_tag!(
    EditorFormat {
        DontKnow = 0,
        PlainText = 1,
        Html = 2,
        Rtf = 3,
    }
);

native_tag!(
    NameType {
        DisplayName = 0,
        GivenName = 1,
        MiddleName = 2,
        Surname = 3,
    }
);

native_tag!(
    AddressType {
        Home = 0,
        Business = 1,
        Other = 2,
    }
);

native_tag!(
    PhoneType {
        Primary = 0,
        Business = 1,
        Home = 2,
        Callback = 3,
        Business2 = 4,
        Mobile = 5,
        Radio = 6,
        Car = 7,
        Other = 8,
        Pager = 9,
        PrimaryFax = 10,
        BusinessFax = 11,
        HomeFax = 12,
        Telex = 13,
        Isdn = 14,
        Assistant = 15,
        Home2 = 16,
        TtyTdd = 17,
        CompanyMain = 18,
    }
);
