use crate::entities::{Bin, Part, PlacedRect};
use crate::packers::PackerKind;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Outcome of nesting a list of parts onto a single [`Bin`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestingResult {
    /// Placed parts, in the order they were placed
    pub placed_rects: Vec<PlacedRect>,
    /// Percentage of the bin covered by placed parts, in `[0, 100]`
    pub efficiency: f64,
    /// Sum of the areas of all placed parts
    pub used_area: f64,
    /// Area of the bin
    pub total_area: f64,
    /// Heuristic that produced the layout
    pub algorithm: PackerKind,
    /// Whether the heuristic was allowed to turn parts by 90°
    pub rotation_allowed: bool,
    /// Number of parts that were offered to the packer
    pub n_parts: usize,
    /// Input indices of the parts that did not fit, ascending
    pub unplaced: Vec<usize>,
}

impl NestingResult {
    pub fn new(
        placed_rects: Vec<PlacedRect>,
        bin: Bin,
        n_parts: usize,
        algorithm: PackerKind,
        rotation_allowed: bool,
    ) -> Self {
        //an empty f64 sum is -0.0
        let used_area = placed_rects.iter().fold(0.0, |acc, pr| acc + pr.area());
        let total_area = bin.area();
        let efficiency = 100.0 * used_area / total_area;

        let unplaced = {
            let mut placed = vec![false; n_parts];
            placed_rects
                .iter()
                .for_each(|pr| placed[pr.part_index] = true);
            placed.iter().positions(|p| !p).collect_vec()
        };

        NestingResult {
            placed_rects,
            efficiency,
            used_area,
            total_area,
            algorithm,
            rotation_allowed,
            n_parts,
            unplaced,
        }
    }

    pub fn n_placed(&self) -> usize {
        self.placed_rects.len()
    }

    /// True if every offered part was placed
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// The parts of `parts` (the list that was nested) which did not fit on the bin.
    /// Indices beyond the end of `parts` are skipped.
    pub fn unplaced_parts<'a>(&'a self, parts: &'a [Part]) -> impl Iterator<Item = &'a Part> + 'a {
        self.unplaced.iter().filter_map(move |&i| parts.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;

    #[test]
    fn empty_layout_has_positive_zero_metrics() {
        let bin = Bin::try_new(200.0, 200.0).unwrap();
        let result = NestingResult::new(vec![], bin, 2, PackerKind::Skyline, true);
        assert_eq!(result.efficiency, 0.0);
        assert!(!result.efficiency.is_sign_negative());
        assert!(!result.used_area.is_sign_negative());
        assert_eq!(result.unplaced, vec![0, 1]);
    }

    #[test]
    fn unplaced_parts_tolerate_a_shorter_list() {
        let bin = Bin::try_new(200.0, 200.0).unwrap();
        let parts = vec![
            Part::try_new("a", 10.0, 10.0).unwrap(),
            Part::try_new("b", 300.0, 10.0).unwrap(),
            Part::try_new("c", 300.0, 10.0).unwrap(),
        ];
        let placed = vec![PlacedRect::new(0, &parts[0], 0.0, 0.0, Orientation::Original)];
        let result = NestingResult::new(placed, bin, parts.len(), PackerKind::Guillotine, false);

        let labels = |parts: &[Part]| {
            result
                .unplaced_parts(parts)
                .map(|p| p.label.clone())
                .collect_vec()
        };
        assert_eq!(labels(&parts), vec!["b", "c"]);
        assert_eq!(labels(&parts[..2]), vec!["b"]);
        assert!(labels(&[]).is_empty());
    }
}
