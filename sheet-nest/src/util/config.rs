use serde::{Deserialize, Serialize};

/// Configuration of the [`Nester`](crate::nesting::Nester)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct NestingConfig {
    /// Which orientations the packers may use
    #[serde(default)]
    pub rotation: RotationPolicy,
}

/// Whether parts may be turned by 90° when they are laid onto the sheet
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Every packer tries both orientations for each part
    #[default]
    Allowed,
    /// Parts are placed as defined
    Forbidden,
    /// Every packer runs twice, once with and once without rotation
    Both,
}

impl RotationPolicy {
    /// The rotation settings to run each packer with, in evaluation order
    pub fn runs(self) -> &'static [bool] {
        match self {
            RotationPolicy::Allowed => &[true],
            RotationPolicy::Forbidden => &[false],
            RotationPolicy::Both => &[true, false],
        }
    }
}
