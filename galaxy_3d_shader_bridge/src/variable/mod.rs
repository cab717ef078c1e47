//! Shader variable descriptors
//!
//! Types and descriptor records for everything a translated shader exposes.

mod variable_type;
mod shader_variable;

pub use variable_type::VariableType;
pub use shader_variable::{
    Precision, ShaderVariable, ActiveVariable,
    Uniform, InterfaceBlock, InterfaceBlockField, BlockLayout,
    Varying, InterpolationType, Attribute, PackedVarying,
};
