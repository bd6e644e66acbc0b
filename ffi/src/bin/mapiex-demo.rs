/*
 * mapiex-demo.rs
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

//! Log in to the default profile and print folders, unread inbox mail and contacts.
//!
//! Reads `MAPIEX_LIBRARY`, `MAPIEX_BUFFER_SIZE` and `MAPIEX_SERVICE` like any other
//! caller; `RUST_LOG` controls logging.

use mapiex_core::{Config, DefaultFolder, MapiFolder, NameType};
use mapiex_ffi::Session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    mapiex_ffi::init(&config)?;
    let result = run(&config);
    mapiex_ffi::term();
    result
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let profile = std::env::args().nth(1);
    let mut session = mapiex_ffi::open_session(config)?;
    session.login(profile.as_deref())?;
    session.open_message_store(None)?;
    println!("Profile: {} <{}>", session.profile_name()?, session.profile_email()?);
    list(&session)?;
    session.logout();
    Ok(())
}

/// Folders opened here are closed on return, before the caller logs out.
fn list(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let root = session.open_default(DefaultFolder::Root)?;
    root.get_hierarchy()?;
    println!("Folders:");
    for entry in root.sub_folders() {
        let (_folder, name) = entry?;
        println!("  {}", name);
    }

    let inbox = session.open_default(DefaultFolder::Inbox)?;
    inbox.set_unread_only(true)?;
    inbox.get_contents()?;
    println!("Unread ({}):", inbox.row_count()?);
    for message in inbox.messages() {
        let message = message?;
        println!("  {:<40} {}", message.subject()?, message.sender_name()?);
    }

    let contacts = session.open_default(DefaultFolder::Contacts)?;
    contacts.get_contents()?;
    println!("Contacts:");
    for contact in contacts.contacts() {
        let contact = contact?;
        let name = contact.name(NameType::DisplayName)?;
        println!("  {:<30} {}", name, contact.email(1)?);
    }
    Ok(())
}
