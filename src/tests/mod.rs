mod serializer;

use alloc::{string::String, vec, vec::Vec};

use crate::{Image, Media, Player, Size};

pub(crate) fn scenario_image() -> Image {
    Image {
        uri: "http://x".into(),
        title: None,
        width: 1,
        height: 1,
        size: Size::Small,
    }
}

pub(crate) fn minimal_media() -> Media {
    Media {
        uri: "u".into(),
        title: None,
        width: 0,
        height: 0,
        format: "mp4".into(),
        duration: 0,
        size: 0,
        bitrate: None,
        persons: Vec::new(),
        player: Player::Java,
        copyright: None,
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}

pub(crate) fn image_with(uri: &str, size: Size) -> Image {
    Image {
        uri: uri.into(),
        title: Some(String::from("t")),
        width: 10,
        height: 20,
        size,
    }
}

pub(crate) fn images() -> Vec<Image> {
    vec![image_with("a", Size::Large), image_with("b", Size::Small)]
}
