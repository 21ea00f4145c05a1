use anyhow::{Context, Result, ensure};
use log::{debug, info, warn};
use serde::Serialize;
use sheet_nest::Nester;
use sheet_nest::entities::{Bin, NestingResult, Part};

/// A stock sheet as it is sold, all dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockSheet {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

impl StockSheet {
    pub fn bin(&self) -> Result<Bin> {
        Bin::try_new(self.width, self.height)
            .with_context(|| format!("invalid stock sheet {:?}", self.name))
    }
}

/// Standard industrial sheet sizes, smallest first
pub const STANDARD_SHEETS: [StockSheet; 3] = [
    StockSheet {
        name: "2000 x 1250",
        width: 2000.0,
        height: 1250.0,
    },
    StockSheet {
        name: "2500 x 1250",
        width: 2500.0,
        height: 1250.0,
    },
    StockSheet {
        name: "3000 x 1250",
        width: 3000.0,
        height: 1250.0,
    },
];

pub fn catalog_sheet(index: usize) -> Result<StockSheet> {
    STANDARD_SHEETS.get(index).copied().with_context(|| {
        format!(
            "no stock sheet at index {index}, the catalog holds {} sheets",
            STANDARD_SHEETS.len()
        )
    })
}

/// Nests `parts` onto every sheet in `sheets` and returns the sheet with the best layout.
///
/// A sheet only qualifies when all parts fit on it. Among the qualifying sheets the one with
/// the highest efficiency is chosen, the first one in `sheets` on a tie.
/// If no sheet fits all parts, the sheet with the highest efficiency overall is returned.
pub fn select_best_sheet(
    parts: &[Part],
    sheets: &[StockSheet],
    nester: &Nester,
) -> Result<(StockSheet, NestingResult)> {
    ensure!(!sheets.is_empty(), "no stock sheets to choose from");

    let mut best_complete: Option<(StockSheet, NestingResult)> = None;
    let mut best_overall: Option<(StockSheet, NestingResult)> = None;

    for sheet in sheets {
        let result = nester.nest(parts, sheet.bin()?)?;
        debug!(
            "[CAT] {}: {}/{} parts, efficiency: {:.3}%",
            sheet.name,
            result.n_placed(),
            result.n_parts,
            result.efficiency
        );

        let improves = |best: &Option<(StockSheet, NestingResult)>| {
            best.as_ref()
                .is_none_or(|(_, b)| result.efficiency > b.efficiency)
        };
        if result.all_placed() && improves(&best_complete) {
            best_complete = Some((*sheet, result.clone()));
        }
        if improves(&best_overall) {
            best_overall = Some((*sheet, result));
        }
    }

    match best_complete {
        Some((sheet, result)) => {
            info!(
                "[CAT] selected sheet {} with an efficiency of {:.3}%",
                sheet.name, result.efficiency
            );
            Ok((sheet, result))
        }
        None => {
            let (sheet, result) = best_overall.context("no sheet was evaluated")?;
            warn!(
                "[CAT] no stock sheet fits all {} parts, falling back to {} ({} unplaced)",
                parts.len(),
                sheet.name,
                result.unplaced.len()
            );
            Ok((sheet, result))
        }
    }
}
