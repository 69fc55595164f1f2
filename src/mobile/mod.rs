// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mobile app shell and its screens, expressed as host-independent state.

pub mod animation;
pub mod home;
pub mod shell;
pub mod theme;
pub mod videos;

pub use shell::{BootState, MobileShell, Screen, Splash};
pub use theme::{Palette, ThemeController, ThemeMode};
pub use videos::{Carousel, Video};
