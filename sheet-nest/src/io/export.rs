use crate::entities::{NestingResult, Part};
use crate::io::ext_repr::{ExtPlacedRect, ExtSolution, ExtUnplacedPart};
use anyhow::{Result, ensure};
use std::time::Duration;

/// Exports a result out of the library.
/// `parts` has to be the list that was nested, it is used to name the unplaced parts.
pub fn export(result: &NestingResult, parts: &[Part], run_time: Duration) -> Result<ExtSolution> {
    ensure!(
        parts.len() == result.n_parts,
        "result was nested from {} parts, {} were given",
        result.n_parts,
        parts.len()
    );
    Ok(ExtSolution {
        algorithm: result.algorithm.to_string(),
        rotation_allowed: result.rotation_allowed,
        efficiency: result.efficiency,
        used_area: result.used_area,
        total_area: result.total_area,
        placed: result.placed_rects.iter().map(ExtPlacedRect::from).collect(),
        unplaced: result
            .unplaced
            .iter()
            .zip(result.unplaced_parts(parts))
            .map(|(&part_index, part)| ExtUnplacedPart {
                part_index,
                label: part.label.clone(),
            })
            .collect(),
        run_time_ms: run_time.as_millis() as u64,
    })
}
