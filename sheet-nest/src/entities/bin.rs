use crate::geometry::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// The stock sheet parts are nested onto, with its origin at (0, 0).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub width: f64,
    pub height: f64,
}

impl Bin {
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        let bin = Bin { width, height };
        bin.validate()?;
        Ok(bin)
    }

    /// Checks that both dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.width, self.height);
        ensure!(
            width.is_finite() && height.is_finite(),
            "bin dimensions must be finite, width: {width}, height: {height}"
        );
        Rect::try_new(0.0, 0.0, width, height)?;
        Ok(())
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
