use crate::entities::{Bin, Part};

/// A named set of parts to nest onto a bin.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub name: String,
    pub bin: Bin,
    pub parts: Vec<Part>,
}

impl Instance {
    pub fn total_part_area(&self) -> f64 {
        self.parts.iter().fold(0.0, |acc, p| acc + p.area())
    }
}
