mod guillotine;
mod skyline;

#[doc(inline)]
pub use guillotine::FreeRectangle;
#[doc(inline)]
pub use guillotine::GuillotinePacker;
#[doc(inline)]
pub use skyline::SkylinePacker;
#[doc(inline)]
pub use skyline::SkylineSegment;

use crate::entities::{Bin, Part, PlacedRect};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

/// A greedy placement heuristic for a single bin.
///
/// Implementations keep no state between calls: every call to [`Packer::pack`]
/// starts from an empty bin and the same input always yields the same layout.
pub trait Packer {
    fn kind(&self) -> PackerKind;

    /// Places as many of `parts` as possible, parts that do not fit are left out.
    /// Every returned [`PlacedRect`] refers back to its part via `part_index`.
    fn pack(&self, parts: &[Part]) -> Vec<PlacedRect>;
}

/// The available placement heuristics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackerKind {
    /// Skyline, minimum waste fit
    #[serde(rename = "Skyline MWF")]
    Skyline,
    /// Guillotine, best short side fit
    #[serde(rename = "Guillotine BSSF")]
    Guillotine,
}

impl PackerKind {
    /// All heuristics, in evaluation order
    pub const ALL: [PackerKind; 2] = [PackerKind::Skyline, PackerKind::Guillotine];

    pub fn name(self) -> &'static str {
        match self {
            PackerKind::Skyline => "Skyline MWF",
            PackerKind::Guillotine => "Guillotine BSSF",
        }
    }

    pub fn create(self, bin: Bin, allow_rotation: bool) -> Box<dyn Packer> {
        match self {
            PackerKind::Skyline => Box::new(SkylinePacker::new(bin, allow_rotation)),
            PackerKind::Guillotine => Box::new(GuillotinePacker::new(bin, allow_rotation)),
        }
    }
}

impl Display for PackerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Indices of `parts` in the order the packers consider them: largest area first.
/// The sort is stable, parts of equal area keep their input order.
pub fn placement_order(parts: &[Part]) -> Vec<usize> {
    (0..parts.len())
        .sorted_by_key(|&i| Reverse(OrderedFloat(parts[i].area())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_order_is_stable_area_descending() {
        let parts = vec![
            Part::try_new("a", 10.0, 10.0).unwrap(),
            Part::try_new("b", 20.0, 10.0).unwrap(),
            Part::try_new("c", 5.0, 20.0).unwrap(),
            Part::try_new("d", 10.0, 20.0).unwrap(),
            Part::try_new("e", 1.0, 1.0).unwrap(),
        ];
        assert_eq!(placement_order(&parts), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn packer_names() {
        assert_eq!(PackerKind::Skyline.to_string(), "Skyline MWF");
        assert_eq!(PackerKind::Guillotine.to_string(), "Guillotine BSSF");
        let bin = Bin::try_new(10.0, 10.0).unwrap();
        for kind in PackerKind::ALL {
            assert_eq!(kind.create(bin, true).kind(), kind);
        }
    }
}
