//! The media object graph.

use alloc::{string::String, vec, vec::Vec};

use wirebuf::Ordinal;

/// Image size class. Declaration order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Size {
    Small = 0,
    Large = 1,
}

impl Ordinal for Size {
    const NAME: &'static str = "Size";
    const VARIANTS: &'static [Self] = &[Size::Small, Size::Large];

    #[inline]
    fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Player a media item targets. Declaration order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Java = 0,
    Flash = 1,
}

impl Ordinal for Player {
    const NAME: &'static str = "Player";
    const VARIANTS: &'static [Self] = &[Player::Java, Player::Flash];

    #[inline]
    fn ordinal(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub uri: String,
    pub title: Option<String>,
    pub width: i32,
    pub height: i32,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub uri: String,
    pub title: Option<String>,
    pub width: i32,
    pub height: i32,
    pub format: String,
    pub duration: i64,
    pub size: i64,
    /// `Some(0)` and `None` are different values and encode differently.
    pub bitrate: Option<i32>,
    pub persons: Vec<String>,
    pub player: Player,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContent {
    pub media: Media,
    pub images: Vec<Image>,
}

/// The payload every variant is benchmarked with.
pub fn sample() -> MediaContent {
    MediaContent {
        media: Media {
            uri: "http://javaone.com/keynote.mpg".into(),
            title: Some("Javaone Keynote".into()),
            width: 640,
            height: 480,
            format: "video/mpg4".into(),
            duration: 18_000_000,
            size: 58_982_400,
            bitrate: Some(262_144),
            persons: vec!["Bill Gates".into(), "Steve Jobs".into()],
            player: Player::Java,
            copyright: None,
        },
        images: vec![
            Image {
                uri: "http://javaone.com/keynote_large.jpg".into(),
                title: Some("Javaone Keynote".into()),
                width: 1024,
                height: 768,
                size: Size::Large,
            },
            Image {
                uri: "http://javaone.com/keynote_small.jpg".into(),
                title: Some("Javaone Keynote".into()),
                width: 320,
                height: 240,
                size: Size::Small,
            },
        ],
    }
}
