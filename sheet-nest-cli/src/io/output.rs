use serde::{Deserialize, Serialize};

use crate::config::NestCliConfig;
use sheet_nest::io::ext_repr::{ExtInstance, ExtSolution};

/// Everything written to the solution file
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct NestOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    /// Name of the sheet the solution was nested on
    pub sheet: String,
    pub solution: ExtSolution,
    pub config: NestCliConfig,
}
