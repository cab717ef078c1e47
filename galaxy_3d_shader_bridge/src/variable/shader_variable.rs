/// Descriptor records for the externally-visible interface of a shader
///
/// These mirror what the translator reports after a successful compile: active
/// uniforms, interface blocks, varyings, vertex attributes and fragment outputs.
/// They are pure data; ordering inside each list is the translator's.

use crate::variable::VariableType;

// ===== COMMON =====

/// Declared precision qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    Low,
    Medium,
    High,
    /// No qualifier (non-float types, or a desktop-style declaration)
    #[default]
    Undefined,
}

/// Fields shared by every reported variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderVariable {
    /// Base type
    pub var_type: VariableType,
    /// Precision qualifier
    pub precision: Precision,
    /// Name as written in the source
    pub name: String,
    /// Array element count, 0 for non-arrays
    pub array_size: u32,
    /// Whether the variable is referenced by the shader body
    pub static_use: bool,
}

impl ShaderVariable {
    /// Create a non-array, statically used variable with undefined precision
    pub fn new(var_type: VariableType, name: impl Into<String>) -> Self {
        Self {
            var_type,
            precision: Precision::Undefined,
            name: name.into(),
            array_size: 0,
            static_use: true,
        }
    }

    /// Builder: set the array size
    pub fn with_array_size(mut self, array_size: u32) -> Self {
        self.array_size = array_size;
        self
    }

    /// Builder: set the precision
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
}

/// Anything the translator reports by name
///
/// Register-map construction is generic over this so uniforms and interface blocks
/// share one code path.
pub trait ActiveVariable {
    /// Name used for register lookup
    fn name(&self) -> &str;
}

// ===== UNIFORM =====

/// Active uniform (struct uniforms carry their members in `fields`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uniform {
    pub variable: ShaderVariable,
    pub fields: Vec<ShaderVariable>,
}

impl Uniform {
    pub fn new(variable: ShaderVariable) -> Self {
        Self { variable, fields: Vec::new() }
    }
}

impl ActiveVariable for Uniform {
    fn name(&self) -> &str {
        &self.variable.name
    }
}

// ===== INTERFACE BLOCK =====

/// Memory layout qualifier of a uniform block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockLayout {
    Standard,
    Packed,
    #[default]
    Shared,
}

/// Member of an interface block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceBlockField {
    pub variable: ShaderVariable,
    pub is_row_major: bool,
}

/// Active uniform block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceBlock {
    /// Block name (used for register lookup)
    pub name: String,
    /// Instance name, empty when the block is declared without one
    pub instance_name: String,
    /// Array element count, 0 for non-arrays
    pub array_size: u32,
    pub layout: BlockLayout,
    pub is_row_major: bool,
    pub fields: Vec<InterfaceBlockField>,
}

impl InterfaceBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance_name: String::new(),
            array_size: 0,
            layout: BlockLayout::default(),
            is_row_major: false,
            fields: Vec::new(),
        }
    }
}

impl ActiveVariable for InterfaceBlock {
    fn name(&self) -> &str {
        &self.name
    }
}

// ===== VARYING =====

/// Interpolation qualifier of a varying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationType {
    #[default]
    Smooth,
    Centroid,
    Flat,
}

/// Active varying (vertex output / fragment input)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Varying {
    pub variable: ShaderVariable,
    pub interpolation: InterpolationType,
    pub is_invariant: bool,
    /// Struct members when `variable.var_type` is `Struct`
    pub fields: Vec<Varying>,
    /// Struct type name when `variable.var_type` is `Struct`
    pub struct_name: String,
}

impl Varying {
    pub fn new(variable: ShaderVariable) -> Self {
        Self {
            variable,
            interpolation: InterpolationType::default(),
            is_invariant: false,
            fields: Vec::new(),
            struct_name: String::new(),
        }
    }
}

impl ActiveVariable for Varying {
    fn name(&self) -> &str {
        &self.variable.name
    }
}

// ===== ATTRIBUTE / OUTPUT =====

/// Vertex attribute or fragment output variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub variable: ShaderVariable,
    /// Explicit `layout(location = N)`, -1 when absent
    pub location: i32,
}

impl Attribute {
    pub fn new(variable: ShaderVariable) -> Self {
        Self { variable, location: -1 }
    }

    /// Builder: set the explicit location
    pub fn with_location(mut self, location: i32) -> Self {
        self.location = location;
        self
    }
}

impl ActiveVariable for Attribute {
    fn name(&self) -> &str {
        &self.variable.name
    }
}

// ===== PACKED VARYING =====

/// A varying plus the interpolator slot the program linker assigns to it
///
/// Shader objects only create these and clear their assignment; the linker fills
/// `register_index`/`column_index` while packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedVarying {
    pub varying: Varying,
    /// First interpolator register, None until assigned
    pub register_index: Option<u32>,
    /// Starting component inside the register
    pub column_index: u32,
}

impl PackedVarying {
    pub fn new(varying: Varying) -> Self {
        Self {
            varying,
            register_index: None,
            column_index: 0,
        }
    }

    pub fn var_type(&self) -> VariableType {
        self.varying.variable.var_type
    }

    pub fn array_size(&self) -> u32 {
        self.varying.variable.array_size
    }

    pub fn name(&self) -> &str {
        &self.varying.variable.name
    }

    /// Whether the linker already placed this varying
    pub fn is_register_assigned(&self) -> bool {
        self.register_index.is_some()
    }

    /// Forget any previous placement
    pub fn reset_register_assignment(&mut self) {
        self.register_index = None;
        self.column_index = 0;
    }
}

#[cfg(test)]
#[path = "shader_variable_tests.rs"]
mod tests;
