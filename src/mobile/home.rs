// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home screen content: features, FAQ accordion and section order.

use crate::mobile::videos::Carousel;
use serde::Serialize;

pub const BRAND: &str = "EOEX";
pub const SUBTITLE: &str = "App Market";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeSection {
    Hero,
    Carousel,
    Features,
    Faq,
    Footer,
}

impl HomeSection {
    pub const ALL: [HomeSection; 5] = [
        HomeSection::Hero,
        HomeSection::Carousel,
        HomeSection::Features,
        HomeSection::Faq,
        HomeSection::Footer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub heading: &'static str,
    pub text: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        heading: "Enjoy on your TV",
        text: "Watch on Smart TVs, consoles, and more.",
    },
    Feature {
        heading: "Download to watch offline",
        text: "Save favorites to watch anywhere.",
    },
    Feature {
        heading: "Watch everywhere",
        text: "Stream across devices, anytime.",
    },
    Feature {
        heading: "Create profiles for kids",
        text: "Family-friendly space with controls.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: [FaqItem; 2] = [
    FaqItem {
        question: "What is EOEX App Market?",
        answer: "Discover, download, and enjoy the best hybrid apps for every device.",
    },
    FaqItem {
        question: "How much does it cost?",
        answer: "Plans start at €7.99 per month.",
    },
];

/// Accordion state: at most one answer is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Faq {
    open: Option<usize>,
}

impl Faq {
    pub fn items(&self) -> &'static [FaqItem] {
        &FAQ_ITEMS
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Open item `index`, or close it if it is already the open one.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= FAQ_ITEMS.len() {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// The visible answer for `index`, if expanded.
    pub fn answer(&self, index: usize) -> Option<&'static str> {
        match self.open {
            Some(i) if i == index => FAQ_ITEMS.get(i).map(|item| item.answer),
            _ => None,
        }
    }
}

/// Everything the home screen shows, top to bottom.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub trending: Carousel,
    pub faq: Faq,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self {
            trending: Carousel::trending(),
            faq: Faq::default(),
        }
    }
}

impl HomeScreen {
    pub fn sections(&self) -> &'static [HomeSection] {
        &HomeSection::ALL
    }

    pub fn features(&self) -> &'static [Feature] {
        &FEATURES
    }
}
