/*
 * config.rs
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

//! Binding configuration: where the native library lives and how text buffers are sized.
//! Values come from defaults, an optional JSON file, then `MAPIEX_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::native::text::DEFAULT_BUFFER_SIZE;
use crate::store::{MapiError, Result};

/// Default library name, resolved by the platform loader.
pub const DEFAULT_LIBRARY: &str = "MAPIEx.dll";

const ENV_LIBRARY: &str = "MAPIEX_LIBRARY";
const ENV_BUFFER_SIZE: &str = "MAPIEX_BUFFER_SIZE";
const ENV_SERVICE: &str = "MAPIEX_SERVICE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub library_path: PathBuf,
    /// Characters a text buffer can return before the library truncates.
    pub buffer_size: usize,
    /// Passed to MAPIInit and MAPILogin.
    pub init_as_service: bool,
    pub multithreaded_notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY),
            buffer_size: DEFAULT_BUFFER_SIZE,
            init_as_service: false,
            multithreaded_notifications: false,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| MapiError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| MapiError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `lookup` (normally the environment).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_LIBRARY).filter(|p| !p.is_empty()) {
            self.library_path = PathBuf::from(path);
        }
        if let Some(size) = lookup(ENV_BUFFER_SIZE) {
            self.buffer_size = size.trim().parse().map_err(|_| {
                MapiError::Config(format!("{} is not a number: {:?}", ENV_BUFFER_SIZE, size))
            })?;
        }
        if let Some(flag) = lookup(ENV_SERVICE) {
            self.init_as_service = parse_flag(&flag)
                .ok_or_else(|| {
                    MapiError::Config(format!("{} must be 0 or 1: {:?}", ENV_SERVICE, flag))
                })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 || self.buffer_size >= i32::MAX as usize {
            return Err(MapiError::Config(format!(
                "buffer size out of range: {}",
                self.buffer_size
            )));
        }
        Ok(())
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
