use crate::entities::Part;
use crate::geometry::{Orientation, Rect};
use serde::{Deserialize, Serialize};

/// A part laid onto the sheet.
/// `width` and `height` are the dimensions after rotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedRect {
    /// Index of the part in the list that was passed to the packer
    pub part_index: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

impl PlacedRect {
    pub fn new(part_index: usize, part: &Part, x: f64, y: f64, orientation: Orientation) -> Self {
        let (width, height) = orientation.apply(part.width, part.height);
        PlacedRect {
            part_index,
            label: part.label.clone(),
            x,
            y,
            width,
            height,
            rotated: orientation.is_rotated(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn orientation(&self) -> Orientation {
        match self.rotated {
            true => Orientation::Rotated,
            false => Orientation::Original,
        }
    }
}
