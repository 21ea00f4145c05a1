use serde::{Deserialize, Serialize};

/// Orientation in which a part is laid onto the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// As defined by the part
    Original,
    /// Turned by 90°, width and height swapped
    Rotated,
}

impl Orientation {
    /// Effective (width, height) of a `width` x `height` part in this orientation.
    pub fn apply(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Orientation::Original => (width, height),
            Orientation::Rotated => (height, width),
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Orientation::Rotated
    }

    /// Orientations to evaluate for a part, in evaluation order.
    /// Squares are only tried as-is: turning them yields the same footprint.
    pub fn candidates(width: f64, height: f64, allow_rotation: bool) -> &'static [Orientation] {
        match allow_rotation && width != height {
            true => &[Orientation::Original, Orientation::Rotated],
            false => &[Orientation::Original],
        }
    }
}
