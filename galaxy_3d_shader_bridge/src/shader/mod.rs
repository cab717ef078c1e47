//! Shader module
//!
//! Shader objects and the helpers they use to turn a translator result into the
//! interface a program linker consumes.

mod shader_record;
mod varying_packing;
mod register_map;
mod usage;
mod workaround;
mod text_query;

pub use shader_record::{
    ShaderRecord, ShaderHandle, CompileStatus, DeletionHandler,
    DEFAULT_SHADER_VERSION, UNSUPPORTED_VERSION_MESSAGE,
};
pub use varying_packing::VaryingPackingOrder;
pub use register_map::{RegisterMap, build_register_map, semantic_index, SEMANTIC_INDEX_NOT_FOUND};
pub use usage::{ShaderUsage, USAGE_MARKERS};
pub use workaround::D3dWorkaround;
pub use text_query::{query_length, copy_text};
