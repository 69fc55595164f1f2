// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Theme preference and palettes.

use crate::error::AppError;
use crate::storage::{keys, LocalStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}

/// Screen colors as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub panel: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub red: &'static str,
}

pub const DARK: Palette = Palette {
    bg: "#141414",
    panel: "#221F1F",
    text: "#FFFFFF",
    subtext: "#B3B3B3",
    red: "#E50914",
};

pub const LIGHT: Palette = Palette {
    bg: "#FFFFFF",
    panel: "#F3F3F3",
    text: "#000000",
    subtext: "#4A4A4A",
    red: "#E50914",
};

/// Owns the current theme and mirrors changes to storage.
///
/// The preference is written to both the plain and the secure store; the
/// plain store is the one read back at boot.
#[derive(Clone)]
pub struct ThemeController {
    mode: ThemeMode,
    store: LocalStore,
    secure: LocalStore,
}

impl ThemeController {
    /// Stored preference first, then the system scheme, then dark.
    pub fn boot(store: LocalStore, secure: LocalStore, system: Option<ThemeMode>) -> Self {
        let mode = store
            .load::<ThemeMode>(keys::THEME)
            .or(system)
            .unwrap_or(ThemeMode::Dark);
        tracing::debug!(?mode, "Theme restored");
        Self {
            mode,
            store,
            secure,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        self.mode.palette()
    }

    pub async fn set_mode(&mut self, mode: ThemeMode) -> Result<(), AppError> {
        self.mode = mode;
        self.store.save(keys::THEME, &mode).await?;
        self.secure.save(keys::THEME, &mode).await?;
        Ok(())
    }

    pub async fn toggle(&mut self) -> Result<ThemeMode, AppError> {
        let next = self.mode.toggled();
        self.set_mode(next).await?;
        Ok(next)
    }

    /// Footer button caption.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "Switch to Light Mode",
            ThemeMode::Light => "Switch to Dark Mode",
        }
    }
}
