use crate::entities::{Bin, Part, PlacedRect};
use crate::geometry::Orientation;
use crate::packers::{Packer, PackerKind, placement_order};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Free region of the bin, not necessarily maximal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreeRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Guillotine packer, best short side fit.
///
/// Every part is put in the top-left corner of the free rectangle that leaves the
/// smallest leftover along one of its sides. The remaining L-shaped space is then cut
/// into at most two new free rectangles by a single straight cut, keeping the largest
/// possible piece intact.
#[derive(Clone, Debug)]
pub struct GuillotinePacker {
    pub bin: Bin,
    pub allow_rotation: bool,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    free_idx: usize,
    short_side_fit: f64,
    orientation: Orientation,
}

impl GuillotinePacker {
    pub fn new(bin: Bin, allow_rotation: bool) -> Self {
        Self {
            bin,
            allow_rotation,
        }
    }

    fn best_candidate(&self, free_rects: &[FreeRectangle], part: &Part) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for &orientation in Orientation::candidates(part.width, part.height, self.allow_rotation) {
            let (w, h) = orientation.apply(part.width, part.height);
            for (free_idx, free) in free_rects.iter().enumerate() {
                if w > free.width || h > free.height {
                    continue;
                }
                let short_side_fit = f64::min(free.width - w, free.height - h);
                if best.is_none_or(|b| short_side_fit < b.short_side_fit) {
                    best = Some(Candidate {
                        free_idx,
                        short_side_fit,
                        orientation,
                    });
                }
            }
        }
        best
    }
}

impl Packer for GuillotinePacker {
    fn kind(&self) -> PackerKind {
        PackerKind::Guillotine
    }

    fn pack(&self, parts: &[Part]) -> Vec<PlacedRect> {
        let mut free_rects = vec![FreeRectangle {
            x: 0.0,
            y: 0.0,
            width: self.bin.width,
            height: self.bin.height,
        }];
        let mut placed_rects = Vec::with_capacity(parts.len());

        for part_index in placement_order(parts) {
            let part = &parts[part_index];
            match self.best_candidate(&free_rects, part) {
                Some(c) => {
                    let free = free_rects[c.free_idx];
                    let placed = PlacedRect::new(part_index, part, free.x, free.y, c.orientation);
                    trace!(
                        "[GLT] placing part {} ({}) at ({}, {}), rotated: {}, short side fit: {}",
                        part_index, part.label, free.x, free.y, placed.rotated, c.short_side_fit
                    );
                    free_rects = free_rects
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != c.free_idx)
                        .map(|(_, fr)| *fr)
                        .chain(split_free_rect(&free, placed.width, placed.height))
                        .collect();
                    placed_rects.push(placed);
                }
                None => {
                    debug!(
                        "[GLT] part {} ({}, {}x{}) does not fit",
                        part_index, part.label, part.width, part.height
                    );
                }
            }
        }

        placed_rects
    }
}

/// Cuts the space left in `free` after a `w` x `h` rectangle is put in its top-left corner.
///
/// The cut runs along whichever axis keeps the larger of the two candidate pieces whole:
/// a full-height strip right of the part (horizontal split) or a full-width strip below it
/// (vertical split). Zero-sized leftovers are dropped.
fn split_free_rect(free: &FreeRectangle, w: f64, h: f64) -> Vec<FreeRectangle> {
    let remain_w = free.width - w;
    let remain_h = free.height - h;

    let right = |height: f64| FreeRectangle {
        x: free.x + w,
        y: free.y,
        width: remain_w,
        height,
    };
    let below = |width: f64| FreeRectangle {
        x: free.x,
        y: free.y + h,
        width,
        height: remain_h,
    };

    match (remain_w > 0.0, remain_h > 0.0) {
        (true, true) => {
            if remain_w * free.height > free.width * remain_h {
                vec![right(free.height), below(w)]
            } else {
                vec![right(h), below(free.width)]
            }
        }
        (true, false) => vec![right(free.height)],
        (false, true) => vec![below(free.width)],
        (false, false) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free(x: f64, y: f64, width: f64, height: f64) -> FreeRectangle {
        FreeRectangle {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn split_keeps_the_full_height_strip() {
        // 60 x 100 to the right is larger than 100 x 20 below
        let split = split_free_rect(&free(0.0, 0.0, 100.0, 100.0), 40.0, 80.0);
        assert_eq!(
            split,
            vec![free(40.0, 0.0, 60.0, 100.0), free(0.0, 80.0, 40.0, 20.0)]
        );
    }

    #[test]
    fn split_keeps_the_full_width_strip() {
        // 100 x 60 below is larger than 20 x 100 to the right
        let split = split_free_rect(&free(10.0, 10.0, 100.0, 100.0), 80.0, 40.0);
        assert_eq!(
            split,
            vec![free(90.0, 10.0, 20.0, 40.0), free(10.0, 50.0, 100.0, 60.0)]
        );
    }

    #[test]
    fn degenerate_splits() {
        let f = free(0.0, 0.0, 100.0, 50.0);
        assert_eq!(split_free_rect(&f, 100.0, 20.0), vec![free(0.0, 20.0, 100.0, 30.0)]);
        assert_eq!(split_free_rect(&f, 30.0, 50.0), vec![free(30.0, 0.0, 70.0, 50.0)]);
        assert!(split_free_rect(&f, 100.0, 50.0).is_empty());
    }

    #[test]
    fn best_short_side_fit_picks_the_snuggest_rectangle() {
        let packer = GuillotinePacker::new(Bin::try_new(1000.0, 1000.0).unwrap(), false);
        let free_rects = vec![free(0.0, 0.0, 100.0, 100.0), free(200.0, 0.0, 52.0, 300.0)];
        let part = Part::try_new("p", 50.0, 50.0).unwrap();
        let c = packer.best_candidate(&free_rects, &part).unwrap();
        assert_eq!(c.free_idx, 1);
        assert_eq!(c.short_side_fit, 2.0);
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        let packer = GuillotinePacker::new(Bin::try_new(1000.0, 1000.0).unwrap(), true);
        let free_rects = vec![free(0.0, 0.0, 60.0, 60.0), free(100.0, 0.0, 60.0, 60.0)];
        let part = Part::try_new("p", 50.0, 40.0).unwrap();
        let c = packer.best_candidate(&free_rects, &part).unwrap();
        assert_eq!(c.free_idx, 0);
        assert_eq!(c.orientation, Orientation::Original);
    }

    #[test]
    fn fills_a_bin_exactly() {
        let bin = Bin::try_new(200.0, 200.0).unwrap();
        let parts = vec![
            Part::try_new("a", 100.0, 100.0).unwrap(),
            Part::try_new("b", 100.0, 100.0).unwrap(),
            Part::try_new("c", 100.0, 100.0).unwrap(),
            Part::try_new("d", 100.0, 100.0).unwrap(),
        ];
        let placed = GuillotinePacker::new(bin, true).pack(&parts);
        assert_eq!(placed.len(), 4);
        assert!(placed.iter().all(|pr| !pr.rotated));
        let area: f64 = placed.iter().map(|pr| pr.area()).sum();
        assert_eq!(area, bin.area());
    }
}
