// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering for the CMS.

pub mod dashboard;
pub mod html;
pub mod pages;

pub use dashboard::render;
pub use pages::render_page;
