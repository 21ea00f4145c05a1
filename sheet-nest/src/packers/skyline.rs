use crate::entities::{Bin, Part, PlacedRect};
use crate::geometry::Orientation;
use crate::packers::{Packer, PackerKind, placement_order};
use crate::util::assertions;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Maximal horizontal run of the skyline, at height `y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkylineSegment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl SkylineSegment {
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }
}

/// Skyline (bottom-left with minimum waste fit) packer.
///
/// Keeps track of the upper contour of all placed parts as a sequence of segments
/// spanning the full width of the bin. Each part is put on the contour where it
/// ends up lowest, ties are broken by the area of the pockets it covers.
#[derive(Clone, Debug)]
pub struct SkylinePacker {
    pub bin: Bin,
    pub allow_rotation: bool,
}

/// A feasible position for a part on the skyline
#[derive(Clone, Copy, Debug)]
struct Candidate {
    x: f64,
    y: f64,
    waste: f64,
    orientation: Orientation,
}

impl SkylinePacker {
    pub fn new(bin: Bin, allow_rotation: bool) -> Self {
        Self {
            bin,
            allow_rotation,
        }
    }

    fn best_candidate(&self, skyline: &[SkylineSegment], part: &Part) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for &orientation in Orientation::candidates(part.width, part.height, self.allow_rotation) {
            let (w, h) = orientation.apply(part.width, part.height);
            for i in 0..skyline.len() {
                let Some(y) = self.fit(skyline, i, w, h) else {
                    continue;
                };
                let x = skyline[i].x;
                let waste = covered_waste(skyline, i, x, y, w);

                let improves = match &best {
                    None => true,
                    Some(b) => y < b.y || (y == b.y && waste < b.waste),
                };
                if improves {
                    best = Some(Candidate {
                        x,
                        y,
                        waste,
                        orientation,
                    });
                }
            }
        }
        best
    }

    /// Height at which a `w` x `h` rectangle comes to rest when its left edge is aligned
    /// with segment `seg_idx`, if it fits there.
    fn fit(&self, skyline: &[SkylineSegment], seg_idx: usize, w: f64, h: f64) -> Option<f64> {
        let x = skyline[seg_idx].x;
        if x + w > self.bin.width {
            return None;
        }

        //the skyline spans the full bin, so every x in [x, x + w) is covered
        let y = skyline[seg_idx..]
            .iter()
            .take_while(|seg| seg.x < x + w)
            .map(|seg| seg.y)
            .fold(f64::NEG_INFINITY, f64::max);

        match y + h > self.bin.height {
            true => None,
            false => Some(y),
        }
    }
}

impl Packer for SkylinePacker {
    fn kind(&self) -> PackerKind {
        PackerKind::Skyline
    }

    fn pack(&self, parts: &[Part]) -> Vec<PlacedRect> {
        let mut skyline = vec![SkylineSegment {
            x: 0.0,
            y: 0.0,
            width: self.bin.width,
        }];
        let mut placed_rects = Vec::with_capacity(parts.len());

        for part_index in placement_order(parts) {
            let part = &parts[part_index];
            match self.best_candidate(&skyline, part) {
                Some(c) => {
                    let placed = PlacedRect::new(part_index, part, c.x, c.y, c.orientation);
                    trace!(
                        "[SKY] placing part {} ({}) at ({}, {}), rotated: {}, waste: {}",
                        part_index, part.label, c.x, c.y, placed.rotated, c.waste
                    );
                    skyline = raise_skyline(&skyline, &placed);
                    debug_assert!(assertions::skyline_is_valid(&skyline, self.bin.width));
                    placed_rects.push(placed);
                }
                None => {
                    debug!(
                        "[SKY] part {} ({}, {}x{}) does not fit",
                        part_index, part.label, part.width, part.height
                    );
                }
            }
        }

        placed_rects
    }
}

/// Area between the skyline and the bottom of a rectangle resting at height `y`
/// over `[x, x + w)`, starting from segment `seg_idx`.
fn covered_waste(skyline: &[SkylineSegment], seg_idx: usize, x: f64, y: f64, w: f64) -> f64 {
    let x_max = x + w;
    skyline[seg_idx..]
        .iter()
        .take_while(|seg| seg.x < x_max)
        .map(|seg| {
            let overlap_x = f64::max(0.0, f64::min(seg.x_max(), x_max) - f64::max(seg.x, x));
            let depth = f64::max(0.0, y - seg.y);
            overlap_x * depth
        })
        .sum()
}

/// Builds the skyline that results from putting `placed` on top of `skyline`.
fn raise_skyline(skyline: &[SkylineSegment], placed: &PlacedRect) -> Vec<SkylineSegment> {
    let x_min = placed.x;
    let x_max = placed.x + placed.width;

    let mut raised = Vec::with_capacity(skyline.len() + 2);

    //everything left of the part, clipped at its left edge
    for seg in skyline.iter().filter(|seg| seg.x < x_min) {
        raised.push(SkylineSegment {
            width: f64::min(seg.x_max(), x_min) - seg.x,
            ..*seg
        });
    }

    raised.push(SkylineSegment {
        x: x_min,
        y: placed.y + placed.height,
        width: placed.width,
    });

    //everything right of the part, clipped at its right edge
    for seg in skyline.iter().filter(|seg| seg.x_max() > x_max) {
        let x = f64::max(seg.x, x_max);
        raised.push(SkylineSegment {
            x,
            y: seg.y,
            width: seg.x_max() - x,
        });
    }

    merge_segments(raised)
}

/// Merges neighbouring segments at the same height.
fn merge_segments(segments: Vec<SkylineSegment>) -> Vec<SkylineSegment> {
    let mut merged: Vec<SkylineSegment> = Vec::with_capacity(segments.len());
    for seg in segments {
        match merged.last_mut() {
            Some(last) if last.y == seg.y => last.width = seg.x_max() - last.x,
            _ => merged.push(seg),
        }
    }
    merged
}
