use crate::entities::PlacedRect;
use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// The stock sheet to nest onto
    pub bin: ExtBin,
    /// Parts to be cut, in order
    pub parts: Vec<ExtPart>,
}

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtBin {
    pub width: f64,
    pub height: f64,
}

/// A part with the number of identical copies required.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    pub label: String,
    pub width: f64,
    pub height: f64,
    /// Number of copies to cut, one if not specified
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

/// External representation of a [`NestingResult`](crate::entities::NestingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Name of the heuristic that produced the layout
    pub algorithm: String,
    pub rotation_allowed: bool,
    /// Percentage of the bin covered by parts
    pub efficiency: f64,
    pub used_area: f64,
    pub total_area: f64,
    pub placed: Vec<ExtPlacedRect>,
    /// Parts which did not fit on the bin
    #[serde(default)]
    pub unplaced: Vec<ExtUnplacedPart>,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`PlacedRect`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedRect {
    /// Index of the part in the expanded part list
    pub part_index: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Width on the sheet, after rotation
    pub width: f64,
    /// Height on the sheet, after rotation
    pub height: f64,
    pub rotated: bool,
}

impl From<&PlacedRect> for ExtPlacedRect {
    fn from(pr: &PlacedRect) -> Self {
        ExtPlacedRect {
            part_index: pr.part_index,
            label: pr.label.clone(),
            x: pr.x,
            y: pr.y,
            width: pr.width,
            height: pr.height,
            rotated: pr.rotated,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtUnplacedPart {
    pub part_index: usize,
    pub label: String,
}
