//! Optional serde support.
//!
//! Tristimulus values and sRGB colors serialize as plain three-element
//! sequences, so `[95.047, 100.0, 108.883]` in JSON. The representation
//! carries no tags; readers must know which color space they are handling.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::integrate::Tristimulus;
use crate::srgb::RgbColor;
use crate::Float;

impl Serialize for Tristimulus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tristimulus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <[Float; 3]>::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for RgbColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().serialize(serializer)
    }
}

// --------------------------------------------------------------------------------------------------------------------
