/// Varying packing order
///
/// Before the linker assigns interpolator registers, a fragment shader's varyings are
/// sorted so that large, same-typed items are placed first and structs, which cannot
/// share a register with anything else, go last. The precedence between types is a
/// renderer-defined table (`VaryingPackingOrder`).

use std::cmp::Ordering;
use rustc_hash::FxHashMap;
use crate::variable::{PackedVarying, VariableType};

/// Type precedence table: lower rank packs first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaryingPackingOrder {
    ranks: FxHashMap<VariableType, u32>,
}

impl VaryingPackingOrder {
    /// Build a table from groups of equal precedence, highest precedence first
    ///
    /// Types missing from every group rank after all listed types.
    pub fn from_groups(groups: &[&[VariableType]]) -> Self {
        let mut ranks = FxHashMap::default();
        for (rank, group) in groups.iter().enumerate() {
            for var_type in group.iter() {
                ranks.insert(*var_type, rank as u32);
            }
        }
        Self { ranks }
    }

    /// Precedence rank of a type
    pub fn rank(&self, var_type: VariableType) -> u32 {
        self.ranks.get(&var_type).copied().unwrap_or(u32::MAX)
    }

    /// Packing comparator
    ///
    /// Same type: larger arrays first. Structs always last. Otherwise by rank, with
    /// equal ranks split by declaration order of `VariableType` so the result is a
    /// total order.
    pub fn compare(&self, x: &PackedVarying, y: &PackedVarying) -> Ordering {
        let (x_type, y_type) = (x.var_type(), y.var_type());

        if x_type == y_type {
            return y.array_size().cmp(&x.array_size());
        }

        match (x_type.is_struct(), y_type.is_struct()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => self.rank(x_type)
                .cmp(&self.rank(y_type))
                .then_with(|| x_type.cmp(&y_type)),
        }
    }

    /// Stable sort of `varyings` into packing order
    pub fn sort(&self, varyings: &mut [PackedVarying]) {
        varyings.sort_by(|x, y| self.compare(x, y));
    }
}

impl Default for VaryingPackingOrder {
    /// The renderer's table. Non-square matrices consume the space of the square
    /// matrix of their larger dimension, so they are grouped with it.
    fn default() -> Self {
        use VariableType::*;

        Self::from_groups(&[
            // 1. mat4 and anything padded to a 4x4 footprint
            &[FloatMat4, FloatMat2x4, FloatMat3x4, FloatMat4x2, FloatMat4x3],
            // 2. mat2 (occupies full rows)
            &[FloatMat2],
            // 3. 4-component vectors
            &[FloatVec4, IntVec4, BoolVec4, UnsignedIntVec4],
            // 4. mat3 footprint
            &[FloatMat3, FloatMat2x3, FloatMat3x2],
            // 5. 3-component vectors
            &[FloatVec3, IntVec3, BoolVec3, UnsignedIntVec3],
            // 6. 2-component vectors
            &[FloatVec2, IntVec2, BoolVec2, UnsignedIntVec2],
            // 7. single components and samplers
            &[
                Float, Int, Bool, UnsignedInt,
                Sampler2D, Sampler3D, SamplerCube, Sampler2DArray, SamplerExternalOes,
                Sampler2DShadow, SamplerCubeShadow, Sampler2DArrayShadow,
                IntSampler2D, IntSampler3D, IntSamplerCube, IntSampler2DArray,
                UnsignedIntSampler2D, UnsignedIntSampler3D, UnsignedIntSamplerCube,
                UnsignedIntSampler2DArray,
            ],
        ])
    }
}

#[cfg(test)]
#[path = "varying_packing_tests.rs"]
mod tests;
