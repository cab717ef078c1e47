/// Shading-language variable types and their hardware footprint

/// Base type of a shader variable as reported by the translator
///
/// Matrix names follow the `matCxR` convention: `FloatMat2x3` has 2 columns of 3 rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableType {
    Float,
    FloatVec2,
    FloatVec3,
    FloatVec4,
    Int,
    IntVec2,
    IntVec3,
    IntVec4,
    UnsignedInt,
    UnsignedIntVec2,
    UnsignedIntVec3,
    UnsignedIntVec4,
    Bool,
    BoolVec2,
    BoolVec3,
    BoolVec4,
    FloatMat2,
    FloatMat3,
    FloatMat4,
    FloatMat2x3,
    FloatMat2x4,
    FloatMat3x2,
    FloatMat3x4,
    FloatMat4x2,
    FloatMat4x3,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    Sampler2DArray,
    SamplerExternalOes,
    Sampler2DShadow,
    SamplerCubeShadow,
    Sampler2DArrayShadow,
    IntSampler2D,
    IntSampler3D,
    IntSamplerCube,
    IntSampler2DArray,
    UnsignedIntSampler2D,
    UnsignedIntSampler3D,
    UnsignedIntSamplerCube,
    UnsignedIntSampler2DArray,
    /// Opaque aggregate (user-defined struct)
    Struct,
}

impl VariableType {
    /// Whether this is one of the float matrix types
    pub fn is_matrix(&self) -> bool {
        matches!(
            self,
            VariableType::FloatMat2
                | VariableType::FloatMat3
                | VariableType::FloatMat4
                | VariableType::FloatMat2x3
                | VariableType::FloatMat2x4
                | VariableType::FloatMat3x2
                | VariableType::FloatMat3x4
                | VariableType::FloatMat4x2
                | VariableType::FloatMat4x3
        )
    }

    /// Whether this is the opaque aggregate type
    pub fn is_struct(&self) -> bool {
        matches!(self, VariableType::Struct)
    }

    /// Number of columns (1 for scalars, vectors and opaque types)
    pub fn column_count(&self) -> u32 {
        match self {
            VariableType::FloatMat2 | VariableType::FloatMat2x3 | VariableType::FloatMat2x4 => 2,
            VariableType::FloatMat3 | VariableType::FloatMat3x2 | VariableType::FloatMat3x4 => 3,
            VariableType::FloatMat4 | VariableType::FloatMat4x2 | VariableType::FloatMat4x3 => 4,
            _ => 1,
        }
    }

    /// Number of input registers one element of this type occupies
    ///
    /// Matrices take one register per column, everything else fits in one.
    pub fn register_count(&self) -> u32 {
        if self.is_matrix() {
            self.column_count()
        } else {
            1
        }
    }
}

#[cfg(test)]
#[path = "variable_type_tests.rs"]
mod tests;
