//! Slot extraction and normalization

use std::collections::HashMap;

/// Slot name for the room a command refers to
pub const ROOM_SLOT: &str = "room_id";
/// Slot name for a specific light
pub const LAMP_SLOT: &str = "lamp_id";
/// Slot name for the requested brightness
pub const BRIGHTNESS_SLOT: &str = "brightness";

/// Slots relevant for light control, extracted from the NLU slot map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    /// Normalized room identifier
    pub room_id: Option<String>,
    pub lamp_id: Option<String>,
    pub brightness: Option<String>,
}

impl Slots {
    /// Extract known slots from a raw slot map.
    ///
    /// The room name is normalized for use in entity ids; other slots are
    /// taken verbatim and unknown slot names are ignored.
    pub fn from_map(slots: &HashMap<String, String>) -> Self {
        Self {
            room_id: slots.get(ROOM_SLOT).map(|room| normalize_room(room)),
            lamp_id: slots.get(LAMP_SLOT).cloned(),
            brightness: slots.get(BRIGHTNESS_SLOT).cloned(),
        }
    }

    /// Slots targeting a single lamp
    pub fn lamp(lamp_id: impl Into<String>) -> Self {
        Self {
            lamp_id: Some(lamp_id.into()),
            ..Self::default()
        }
    }

    /// Slots targeting a room, normalizing the name
    pub fn room(room: &str) -> Self {
        Self {
            room_id: Some(normalize_room(room)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: impl Into<String>) -> Self {
        self.brightness = Some(brightness.into());
        self
    }
}

/// Normalize a spoken room name into the form used in hub entity ids.
///
/// Lowercases and transliterates German umlauts: `Küche` becomes `kueche`.
pub fn normalize_room(room: &str) -> String {
    room.to_lowercase()
        .replace('ä', "ae")
        .replace('ü', "ue")
        .replace('ö', "oe")
}
