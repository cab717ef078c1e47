//! Compiler module
//!
//! Backend capability data, translator resources, and the lifecycle service that
//! owns the per-stage translators.

mod compiler_config;
mod compiler_lifecycle;

pub use compiler_config::{
    BackendCaps, BuiltInResources, CompilerConfig,
    MAX_VERTEX_ATTRIBS, MAX_TEXTURE_IMAGE_UNITS,
    MIN_PROGRAM_TEXEL_OFFSET, MAX_PROGRAM_TEXEL_OFFSET,
};
pub use compiler_lifecycle::CompilerLifecycle;
