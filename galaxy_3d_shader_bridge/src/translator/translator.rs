/// Translator traits - the compile-and-introspect service consumed by shader objects
///
/// A `TranslatorBackend` wraps the shading-language translation engine (process-wide
/// init/finalize plus per-stage instance creation). Each `Translator` compiles source for
/// one stage and answers introspection queries about its most recent compile.

use bitflags::bitflags;
use crate::error::Galaxy3dResult;
use crate::compiler::BuiltInResources;
use crate::variable::{Uniform, InterfaceBlock, Varying, Attribute};

// ============================================================================
// Common types
// ============================================================================

/// Shader stage handled by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

/// Source language specification the translator validates against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderSpec {
    /// OpenGL ES 2.0 rules (ES 3.00 sources are detected and reported by version)
    Gles2,
}

/// Target language emitted by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// Shader Model 2/3 class HLSL
    Hlsl9,
    /// Shader Model 4+ class HLSL
    Hlsl11,
}

bitflags! {
    /// Options passed to `Translator::compile`
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct CompileOptions: u32 {
        /// Produce translated object code
        const OBJECT_CODE = 1 << 0;
        /// Emit `#line` directives mapping back to the source
        const LINE_DIRECTIVES = 1 << 1;
        /// The first source string is a file path, not code
        const SOURCE_PATH = 1 << 2;
    }
}

// ============================================================================
// Translator traits
// ============================================================================

/// Per-stage translator instance
///
/// Implemented by the translation engine binding. Every query reflects the most
/// recent `compile` call only.
pub trait Translator: Send {
    /// Compile the concatenation of `sources`
    ///
    /// # Returns
    ///
    /// `true` when the source was accepted and object code was produced
    fn compile(&mut self, sources: &[&str], options: CompileOptions) -> bool;

    /// Language version detected in the last compiled source (100, 300, ...)
    fn shader_version(&self) -> u32;

    /// Translated target-language source of the last successful compile
    fn object_code(&self) -> String;

    /// Diagnostics of the last compile
    fn info_log(&self) -> String;

    /// Active uniforms, in translator order
    fn uniforms(&self) -> &[Uniform];

    /// Active uniform blocks, in translator order
    fn interface_blocks(&self) -> &[InterfaceBlock];

    /// Active varyings, in translator order
    fn varyings(&self) -> &[Varying];

    /// Active vertex attributes (vertex translators only)
    fn attributes(&self) -> &[Attribute];

    /// Active fragment outputs (fragment translators only)
    fn output_variables(&self) -> &[Attribute];

    /// Hardware register assigned to an active uniform
    fn uniform_register(&self, name: &str) -> Option<u32>;

    /// Hardware register assigned to an active uniform block
    fn interface_block_register(&self, name: &str) -> Option<u32>;

    /// Target language this instance emits
    fn output_type(&self) -> OutputType;
}

/// Translation engine binding
///
/// Owns process-wide engine state. `CompilerLifecycle` calls `initialize` before creating
/// translators and `finalize` after dropping them.
pub trait TranslatorBackend: Send {
    /// Initialize process-wide engine state
    fn initialize(&mut self) -> Galaxy3dResult<()>;

    /// Create a translator for one stage
    ///
    /// # Arguments
    ///
    /// * `stage` - Stage the translator compiles
    /// * `spec` - Source language rules
    /// * `output` - Target language
    /// * `resources` - Capability limits and extension toggles
    fn create_translator(
        &mut self,
        stage: ShaderStage,
        spec: ShaderSpec,
        output: OutputType,
        resources: &BuiltInResources,
    ) -> Galaxy3dResult<Box<dyn Translator>>;

    /// Release process-wide engine state
    fn finalize(&mut self);
}
