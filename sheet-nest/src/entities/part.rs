use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Rectangular piece to be cut from the sheet.
/// Parts sharing a label are still placed independently of each other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Human readable identification, e.g. the bill of materials line it stems from
    pub label: String,
    pub width: f64,
    pub height: f64,
}

impl Part {
    pub fn try_new(label: impl Into<String>, width: f64, height: f64) -> Result<Self> {
        let part = Part {
            label: label.into(),
            width,
            height,
        };
        part.validate()?;
        Ok(part)
    }

    /// Checks that both dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width.is_finite() && self.width > 0.0,
            "part {:?} has an invalid width: {}",
            self.label,
            self.width
        );
        ensure!(
            self.height.is_finite() && self.height > 0.0,
            "part {:?} has an invalid height: {}",
            self.label,
            self.height
        );
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
