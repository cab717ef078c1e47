//! Resource management module
//!
//! Provides handle-based storage for shader objects.

mod shader_manager;

pub use shader_manager::ShaderManager;
