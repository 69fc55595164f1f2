// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Highlight video catalog and YouTube URL templating.

use serde::Serialize;

/// Catalog entries: (video id, title).
const CATALOG: [(&str, &str); 9] = [
    ("9_EJORk3s9w", "Warriors vs Blazers Highlights"),
    ("y7r_QV0daBo", "Lakers vs Suns Full Game"),
    ("1X-L_iLClec", "Lakers vs Suns 2nd Qtr"),
    ("hmlloslv0PM", "Warriors vs Blazers Full Game"),
    ("D6iBe1QOqGo", "Warriors vs Timberwolves"),
    ("L77ZfZ2CQcE", "Sample Highlight"),
    ("xNl4q68Vgzo", "Sample Game"),
    ("Ec5e3sTE-nc", "Sample Recap"),
    ("PKfJUvDNyRo", "Sample Match"),
];

/// Number of catalog entries shown in the home carousel.
pub const TRENDING_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub id: String,
    pub title: String,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn watch_url(&self) -> String {
        watch_url(&self.id)
    }

    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(&self.id)
    }

    pub fn embed_url(&self) -> String {
        embed_url(&self.id)
    }
}

/// The built-in video list, in display order.
pub fn catalog() -> Vec<Video> {
    CATALOG
        .iter()
        .map(|(id, title)| Video::new(*id, *title))
        .collect()
}

pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}

pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id)
}

/// Inline player URL (autoplay, no fullscreen takeover on iOS).
pub fn embed_url(id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&playsinline=1",
        id
    )
}

/// Accept a bare id or a `youtube.com/watch?v=` URL.
pub fn video_id(id_or_url: &str) -> String {
    if !id_or_url.contains("youtube.com") {
        return id_or_url.to_string();
    }
    reqwest::Url::parse(id_or_url)
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())
        })
        .unwrap_or_default()
}

/// Where "open in YouTube" should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// Native app deep link
    App(String),
    /// Browser fallback
    Web(String),
}

pub fn open_target(id_or_url: &str, app_available: bool) -> OpenTarget {
    let id = video_id(id_or_url);
    if app_available {
        OpenTarget::App(format!("youtube://www.youtube.com/watch?v={}", id))
    } else {
        OpenTarget::Web(watch_url(&id))
    }
}

/// One poster in a carousel row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselCard {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
}

/// A titled, horizontally scrolling row of videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub title: String,
    pub cards: Vec<CarouselCard>,
}

impl Carousel {
    pub fn new(title: impl Into<String>, videos: &[Video]) -> Self {
        Self {
            title: title.into(),
            cards: videos
                .iter()
                .map(|v| CarouselCard {
                    id: v.id.clone(),
                    title: v.title.clone(),
                    thumbnail: v.thumbnail_url(),
                })
                .collect(),
        }
    }

    /// The home screen's "Trending Now" row.
    pub fn trending() -> Self {
        let videos: Vec<Video> = catalog().into_iter().take(TRENDING_COUNT).collect();
        Self::new("Trending Now", &videos)
    }
}
