/// Register maps and attribute semantic indices
///
/// The translator assigns a hardware register to every active uniform and uniform
/// block. Shader objects copy those assignments into name-keyed tables so the linker
/// can look them up without keeping the translator around.

use rustc_hash::FxHashMap;
use crate::error::Galaxy3dResult;
use crate::variable::{ActiveVariable, Attribute};
use crate::bridge_bail;

/// Variable name -> hardware register index
pub type RegisterMap = FxHashMap<String, u32>;

/// Returned by `semantic_index` when the attribute is not active
pub const SEMANTIC_INDEX_NOT_FOUND: i32 = -1;

/// Build the register table for a list of active variables
///
/// All-or-nothing: every active name must have a register. A missing one means the
/// translator broke its contract, and no partial table is returned.
///
/// # Arguments
///
/// * `variables` - Active variables, as reported by the translator
/// * `kind` - Label for diagnostics ("uniform", "interface block")
/// * `lookup` - Translator register query
pub fn build_register_map<V, F>(variables: &[V], kind: &str, lookup: F) -> Galaxy3dResult<RegisterMap>
where
    V: ActiveVariable,
    F: Fn(&str) -> Option<u32>,
{
    let mut map = RegisterMap::default();

    for variable in variables {
        let name = variable.name();
        match lookup(name) {
            Some(register) => {
                map.insert(name.to_string(), register);
            }
            None => {
                bridge_bail!(InternalConsistency, "galaxy3d::Shader",
                    "Translator reported active {} '{}' without a register", kind, name);
            }
        }
    }

    Ok(map)
}

/// Input register offset of a vertex attribute
///
/// Sums the register footprint of every attribute before the first exact name match.
/// Arrays are not legal attributes, so only the base type footprint counts.
///
/// # Returns
///
/// The offset, or `SEMANTIC_INDEX_NOT_FOUND` for an empty or inactive name
pub fn semantic_index(attributes: &[Attribute], name: &str) -> i32 {
    if name.is_empty() {
        return SEMANTIC_INDEX_NOT_FOUND;
    }

    let mut index = 0u32;
    for attribute in attributes {
        if attribute.variable.name == name {
            return index as i32;
        }
        index += attribute.variable.var_type.register_count();
    }

    SEMANTIC_INDEX_NOT_FOUND
}

#[cfg(test)]
#[path = "register_map_tests.rs"]
mod tests;
