use serde::{Deserialize, Serialize};

use sheet_nest::io::svg::SvgDrawOptions;
use sheet_nest::util::NestingConfig;

/// Configuration of the command line driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct NestCliConfig {
    /// Configuration passed on to the [`Nester`](sheet_nest::Nester)
    #[serde(default)]
    pub nesting: NestingConfig,
    /// Which sheet the parts are nested onto
    #[serde(default)]
    pub sheet: SheetChoice,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

/// Source of the sheet dimensions
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SheetChoice {
    /// The bin stated in the instance file
    #[default]
    Instance,
    /// A single sheet of [`STANDARD_SHEETS`](crate::catalog::STANDARD_SHEETS)
    Catalog { index: usize },
    /// Every sheet of the catalog is tried, see [`select_best_sheet`](crate::catalog::select_best_sheet)
    BestFit,
}
