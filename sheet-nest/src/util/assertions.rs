use crate::entities::{Bin, NestingResult, Part, PlacedRect};
use crate::packers::SkylineSegment;
use crate::util::FPA;
use itertools::Itertools;
use log::error;

/// Margin on placement coordinates, covers rounding in the coordinates built up by the packers
pub const TOLERANCE: f64 = 1e-6;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// The segments cover `[0, bin_width)` left to right without gaps,
/// and no two neighbours share the same height.
pub fn skyline_is_valid(skyline: &[SkylineSegment], bin_width: f64) -> bool {
    let (Some(first), Some(last)) = (skyline.first(), skyline.last()) else {
        error!("empty skyline");
        return false;
    };
    if FPA(first.x) != FPA(0.0) || FPA(last.x_max()) != FPA(bin_width) {
        error!("skyline does not span the bin: {skyline:?}");
        return false;
    }
    if skyline.iter().any(|seg| seg.width <= 0.0) {
        error!("skyline contains an empty segment: {skyline:?}");
        return false;
    }
    for (a, b) in skyline.iter().tuple_windows() {
        if FPA(a.x_max()) != FPA(b.x) {
            error!("gap in skyline between {a:?} and {b:?}");
            return false;
        }
        if a.y == b.y {
            error!("unmerged skyline segments {a:?} and {b:?}");
            return false;
        }
    }
    true
}

/// Every placement lies within the bin, up to [`TOLERANCE`].
pub fn placements_in_bounds(placed_rects: &[PlacedRect], bin: Bin) -> bool {
    let Some(bounds) = bin.rect().resize_by(TOLERANCE, TOLERANCE) else {
        return false;
    };
    placed_rects.iter().all(|pr| {
        let in_bounds = bounds.contains(&pr.rect());
        if !in_bounds {
            error!("{pr:?} exceeds the bin {bin:?}");
        }
        in_bounds
    })
}

/// No two placed rectangles share interior area.
/// Overlaps thinner than [`TOLERANCE`] are attributed to rounding and ignored.
pub fn placements_do_not_overlap(placed_rects: &[PlacedRect]) -> bool {
    for (a, b) in placed_rects.iter().tuple_combinations() {
        let overlapping = a
            .rect()
            .resize_by(-TOLERANCE, -TOLERANCE)
            .is_some_and(|shrunk| shrunk.overlaps(&b.rect()));
        if overlapping {
            error!("overlapping placements: {a:?} and {b:?}");
            return false;
        }
    }
    true
}

/// Every placement matches the dimensions of its part, swapped if rotated,
/// and no part is placed twice.
pub fn placements_match_parts(placed_rects: &[PlacedRect], parts: &[Part]) -> bool {
    if !placed_rects.iter().map(|pr| pr.part_index).all_unique() {
        error!("a part was placed more than once");
        return false;
    }
    placed_rects.iter().all(|pr| {
        let Some(part) = parts.get(pr.part_index) else {
            error!("{pr:?} refers to a non-existing part");
            return false;
        };
        let expected = pr.orientation().apply(part.width, part.height);
        let matches = (pr.width, pr.height) == expected && pr.label == part.label;
        if !matches {
            error!("{pr:?} does not match {part:?}");
        }
        matches
    })
}

/// Checks the internal consistency of a result and whether it is a valid nesting of `parts` in `bin`.
pub fn result_is_valid(result: &NestingResult, parts: &[Part], bin: Bin) -> bool {
    let NestingResult {
        placed_rects,
        efficiency,
        used_area,
        total_area,
        algorithm: _,
        rotation_allowed,
        n_parts,
        unplaced,
    } = result;

    if *n_parts != parts.len() || placed_rects.len() + unplaced.len() != parts.len() {
        error!(
            "part count mismatch: {} offered, {} placed, {} unplaced",
            parts.len(),
            placed_rects.len(),
            unplaced.len()
        );
        return false;
    }
    if unplaced
        .iter()
        .any(|i| placed_rects.iter().any(|pr| pr.part_index == *i))
    {
        error!("a part is listed as both placed and unplaced");
        return false;
    }
    if !rotation_allowed && placed_rects.iter().any(|pr| pr.rotated) {
        error!("rotated placement in a layout without rotation");
        return false;
    }

    let area_sum = placed_rects.iter().map(|pr| pr.area()).sum::<f64>();
    if FPA(*used_area) != FPA(area_sum)
        || FPA(*total_area) != FPA(bin.area())
        || FPA(*efficiency) != FPA(100.0 * area_sum / bin.area())
        || *efficiency < 0.0
        || FPA(*efficiency) > FPA(100.0)
    {
        error!(
            "inconsistent metrics: used area {used_area} (sum {area_sum}), total area {total_area}, efficiency {efficiency}"
        );
        return false;
    }

    placements_in_bounds(placed_rects, bin)
        && placements_do_not_overlap(placed_rects)
        && placements_match_parts(placed_rects, parts)
}
