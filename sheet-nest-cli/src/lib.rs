use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use sheet_nest::Nester;
use sheet_nest::entities::{Bin, Instance, NestingResult};

use crate::catalog::{STANDARD_SHEETS, catalog_sheet, select_best_sheet};
use crate::config::{NestCliConfig, SheetChoice};

pub mod catalog;
pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Layout of an instance on the sheet picked by [`NestCliConfig::sheet`]
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub sheet_name: String,
    pub bin: Bin,
    pub result: NestingResult,
}

pub fn nest_instance(instance: &Instance, config: &NestCliConfig) -> Result<SheetLayout> {
    let nester = Nester::new(config.nesting);
    let (sheet_name, bin, result) = match config.sheet {
        SheetChoice::Instance => {
            let result = nester.nest(&instance.parts, instance.bin)?;
            (instance.name.clone(), instance.bin, result)
        }
        SheetChoice::Catalog { index } => {
            let sheet = catalog_sheet(index)?;
            let bin = sheet.bin()?;
            (sheet.name.to_string(), bin, nester.nest(&instance.parts, bin)?)
        }
        SheetChoice::BestFit => {
            let (sheet, result) = select_best_sheet(&instance.parts, &STANDARD_SHEETS, &nester)?;
            (sheet.name.to_string(), sheet.bin()?, result)
        }
    };
    Ok(SheetLayout {
        sheet_name,
        bin,
        result,
    })
}
