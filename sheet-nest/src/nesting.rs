use crate::entities::{Bin, NestingResult, Part};
use crate::packers::PackerKind;
use crate::util::NestingConfig;
use crate::util::assertions;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info, warn};

/// Nests `parts` onto a `bin_width` x `bin_height` sheet with the default configuration.
///
/// Both the skyline and the guillotine heuristic pack the full list of parts, the layout
/// with the highest efficiency is returned. On a tie the skyline layout is kept.
/// Parts which fit under neither heuristic are absent from the result's placements
/// and listed in [`NestingResult::unplaced`].
///
/// Fails if the bin or any of the parts has a non-positive or non-finite dimension.
pub fn execute_nesting(parts: &[Part], bin_width: f64, bin_height: f64) -> Result<NestingResult> {
    let bin = Bin::try_new(bin_width, bin_height).context("invalid bin")?;
    Nester::default().nest(parts, bin)
}

/// Runs every [`PackerKind`] over the same parts and keeps the best layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nester {
    pub config: NestingConfig,
}

impl Nester {
    pub fn new(config: NestingConfig) -> Self {
        Self { config }
    }

    pub fn nest(&self, parts: &[Part], bin: Bin) -> Result<NestingResult> {
        bin.validate().context("invalid bin")?;
        for (i, part) in parts.iter().enumerate() {
            part.validate()
                .with_context(|| format!("invalid part at index {i}"))?;
        }

        let runs = self
            .config
            .rotation
            .runs()
            .iter()
            .cartesian_product(PackerKind::ALL);

        let mut best: Option<NestingResult> = None;
        for (&allow_rotation, kind) in runs {
            let placed_rects = kind.create(bin, allow_rotation).pack(parts);
            let result = NestingResult::new(placed_rects, bin, parts.len(), kind, allow_rotation);
            debug!(
                "[NEST] {} (rotation: {}) placed {}/{} parts, efficiency: {:.3}%",
                kind,
                allow_rotation,
                result.n_placed(),
                parts.len(),
                result.efficiency
            );
            debug_assert!(assertions::result_is_valid(&result, parts, bin));

            if best.as_ref().is_none_or(|b| result.efficiency > b.efficiency) {
                best = Some(result);
            }
        }
        let best = best.context("no packers were run")?;

        info!(
            "[NEST] {} selected: {}/{} parts on {}x{}, efficiency: {:.3}%",
            best.algorithm,
            best.n_placed(),
            parts.len(),
            bin.width,
            bin.height,
            best.efficiency
        );
        if !best.all_placed() {
            warn!(
                "[NEST] {} part(s) did not fit: {}",
                best.unplaced.len(),
                best.unplaced_parts(parts).map(|p| &p.label).join(", ")
            );
        }

        Ok(best)
    }
}
