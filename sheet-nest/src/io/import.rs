use crate::entities::{Bin, Instance, Part};
use crate::io::ext_repr::{ExtInstance, ExtPart};
use anyhow::{Context, Result};
use log::warn;

/// Converts an external instance into an internal one.
/// Every part is repeated `quantity` times, keeping the order of the external part list.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let bin = Bin::try_new(ext_instance.bin.width, ext_instance.bin.height)
        .with_context(|| format!("invalid bin in instance {:?}", ext_instance.name))?;

    let parts = ext_instance
        .parts
        .iter()
        .enumerate()
        .map(|(i, ext_part)| {
            import_part(ext_part)
                .with_context(|| format!("invalid part at index {i} in {:?}", ext_instance.name))
                .map(|part| (part, ext_part.quantity))
        })
        .collect::<Result<Vec<(Part, usize)>>>()?
        .into_iter()
        .flat_map(|(part, qty)| std::iter::repeat_n(part, qty))
        .collect::<Vec<Part>>();

    Ok(Instance {
        name: ext_instance.name.clone(),
        bin,
        parts,
    })
}

pub fn import_part(ext_part: &ExtPart) -> Result<Part> {
    if ext_part.quantity == 0 {
        warn!("part {:?} has a quantity of 0 and will be ignored", ext_part.label);
    }
    Part::try_new(ext_part.label.clone(), ext_part.width, ext_part.height)
}
