//! Icon identifiers referenced by catalog records.
//!
//! Catalog content names icons by string key. Keys resolve to a closed set of
//! identifiers; anything unrecognised becomes [`IconKey::Cube`].

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconKey {
    Globe,
    ShoppingCart,
    DevicePhoneMobile,
    CpuChip,
    Server,
    PaintBrush,
    /// Fallback for unknown keys
    #[default]
    Cube,
}

impl IconKey {
    pub const KNOWN: [IconKey; 6] = [
        IconKey::Globe,
        IconKey::ShoppingCart,
        IconKey::DevicePhoneMobile,
        IconKey::CpuChip,
        IconKey::Server,
        IconKey::PaintBrush,
    ];

    /// Resolve a content key, falling back to [`IconKey::Cube`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "globe" => IconKey::Globe,
            "shopping-cart" => IconKey::ShoppingCart,
            "device-phone-mobile" => IconKey::DevicePhoneMobile,
            "cpu-chip" => IconKey::CpuChip,
            "server" => IconKey::Server,
            "paint-brush" => IconKey::PaintBrush,
            other => {
                tracing::debug!("unknown icon key {other:?}, using fallback");
                IconKey::Cube
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            IconKey::Globe => "globe",
            IconKey::ShoppingCart => "shopping-cart",
            IconKey::DevicePhoneMobile => "device-phone-mobile",
            IconKey::CpuChip => "cpu-chip",
            IconKey::Server => "server",
            IconKey::PaintBrush => "paint-brush",
            IconKey::Cube => "cube",
        }
    }
}

impl From<String> for IconKey {
    fn from(key: String) -> Self {
        IconKey::from_key(&key)
    }
}

impl From<IconKey> for String {
    fn from(icon: IconKey) -> Self {
        icon.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip() {
        for icon in IconKey::KNOWN {
            assert_eq!(IconKey::from_key(icon.key()), icon);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_cube() {
        assert_eq!(IconKey::from_key("rocket"), IconKey::Cube);
        assert_eq!(IconKey::from_key(""), IconKey::Cube);
        assert_eq!(IconKey::from_key("Globe"), IconKey::Cube);
    }

    #[test]
    fn deserializes_from_plain_string() {
        let icon: IconKey = serde_json::from_str("\"cpu-chip\"").expect("icon parses");
        assert_eq!(icon, IconKey::CpuChip);
        let icon: IconKey = serde_json::from_str("\"sparkles\"").expect("icon parses");
        assert_eq!(icon, IconKey::Cube);
    }
}
