//! Command-line style override lists.
//!
//! Trainers accept a flat `KEY VALUE KEY VALUE ...` list after the config
//! file argument, e.g. `SOLVER.MAX_ITER 90000 MODEL.WEIGHTS model.pth`.
//! Values are interpreted with the same restricted scalar syntax as
//! document leaves.

use detcfg_core::{CfgNode, CfgValue};

use crate::error::LoadError;

/// Parses a flat `KEY VALUE` list into dotted keys and typed values.
pub fn parse_override_list(opts: &[String]) -> Result<Vec<(String, CfgValue)>, LoadError> {
    if opts.len() % 2 != 0 {
        return Err(LoadError::OddOverrideList(opts.len()));
    }
    opts.chunks_exact(2)
        .map(|pair| {
            let value = CfgValue::parse_scalar(&pair[1])?;
            Ok((pair[0].clone(), value))
        })
        .collect()
}

/// Applies parsed overrides to a resolved configuration, creating
/// intermediate sections as needed.
pub fn apply_overrides(
    cfg: &mut CfgNode,
    overrides: &[(String, CfgValue)],
) -> Result<(), LoadError> {
    for (key, value) in overrides {
        log::debug!("override {key} = {value}");
        cfg.set(key, value.clone())?;
    }
    Ok(())
}
