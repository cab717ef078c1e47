/// ShaderRecord - one shader object from source assignment to linkable interface
///
/// A record accumulates source text, compiles it through the stage's translator, and
/// keeps everything the program linker needs from the result: translated source,
/// active variables, register tables, packed varyings and usage flags.
///
/// Every compile discards all derived state first. A failed compile leaves the record
/// in the same state as a freshly created one (plus the info log and the detected
/// language version), ready for new source.

use slotmap::new_key_type;
use crate::error::Galaxy3dResult;
use crate::compiler::CompilerLifecycle;
use crate::shader::{
    ShaderUsage, D3dWorkaround, RegisterMap,
    build_register_map, semantic_index, SEMANTIC_INDEX_NOT_FOUND,
    text_query,
};
use crate::translator::{Translator, ShaderStage, CompileOptions};
use crate::variable::{Uniform, InterfaceBlock, Attribute, PackedVarying};
use crate::{bridge_bail, bridge_err, bridge_debug};

const SOURCE: &str = "galaxy3d::Shader";

/// Language version assumed until a compile reports one
pub const DEFAULT_SHADER_VERSION: u32 = 100;

/// Info log of an ES 3.00 shader compiled for an ES 2.0 context
pub const UNSUPPORTED_VERSION_MESSAGE: &str = "GLSL ES 3.00 is not supported by OpenGL ES 2.0 contexts";

// ===== HANDLE =====

new_key_type! {
    /// Stable handle of a shader object
    ///
    /// Generational: a handle is never reused while its record exists, and a stale
    /// handle never resolves to a newer record.
    pub struct ShaderHandle;
}

// ===== DELETION =====

/// Receives the deferred-deletion trigger of a shader record
///
/// Called exactly once, from `ShaderRecord::release`, when the last reference goes
/// away on a record already flagged for deletion.
pub trait DeletionHandler {
    fn delete_shader(&mut self, handle: ShaderHandle);
}

impl<F: FnMut(ShaderHandle)> DeletionHandler for F {
    fn delete_shader(&mut self, handle: ShaderHandle) {
        self(handle)
    }
}

// ===== COMPILE STATUS =====

/// Outcome of a compile that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    /// Translated; all derived state is populated
    Compiled,
    /// The translator rejected the source; its diagnostics are in the info log
    TranslationFailed,
    /// ES 3.00 source on a context that only supports ES 2.0
    VersionUnsupported,
}

impl CompileStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileStatus::Compiled)
    }
}

// ===== STAGE DISPATCH =====

/// What differs between vertex and fragment shader objects
struct StageBehavior {
    /// Stage-specific variable list (attributes or fragment outputs)
    extract_stage_variables: fn(&dyn Translator) -> Vec<Attribute>,
    /// Whether varyings are put in packing order after a successful compile
    sorts_varyings: bool,
}

fn extract_attributes(translator: &dyn Translator) -> Vec<Attribute> {
    translator.attributes().to_vec()
}

fn extract_output_variables(translator: &dyn Translator) -> Vec<Attribute> {
    translator.output_variables().to_vec()
}

const VERTEX_BEHAVIOR: StageBehavior = StageBehavior {
    extract_stage_variables: extract_attributes,
    sorts_varyings: false,
};

const FRAGMENT_BEHAVIOR: StageBehavior = StageBehavior {
    extract_stage_variables: extract_output_variables,
    sorts_varyings: true,
};

fn stage_behavior(stage: ShaderStage) -> &'static StageBehavior {
    match stage {
        ShaderStage::Vertex => &VERTEX_BEHAVIOR,
        ShaderStage::Fragment => &FRAGMENT_BEHAVIOR,
    }
}

// ===== TRANSLATION RESULT =====

/// Everything a successful translation produces, assembled before being committed
struct Translation {
    translated_source: String,
    info_log: String,
    uniforms: Vec<Uniform>,
    uniform_registers: RegisterMap,
    interface_blocks: Vec<InterfaceBlock>,
    interface_block_registers: RegisterMap,
    varyings: Vec<PackedVarying>,
    stage_variables: Vec<Attribute>,
    usage: ShaderUsage,
}

// ===== SHADER RECORD =====

pub struct ShaderRecord {
    handle: ShaderHandle,
    stage: ShaderStage,
    source: String,

    // Compile-derived state (reset by uncompile)
    translated_source: String,
    info_log: String,
    shader_version: u32,
    uniforms: Vec<Uniform>,
    interface_blocks: Vec<InterfaceBlock>,
    varyings: Vec<PackedVarying>,
    /// Attributes for vertex shaders, output variables for fragment shaders
    stage_variables: Vec<Attribute>,
    uniform_registers: RegisterMap,
    interface_block_registers: RegisterMap,
    usage: ShaderUsage,

    ref_count: u32,
    delete_pending: bool,
}

impl ShaderRecord {
    /// Create an empty, uncompiled shader object
    ///
    /// # Arguments
    ///
    /// * `handle` - Handle assigned by the owning manager
    /// * `stage` - Stage, fixed for the lifetime of the record
    pub fn new(handle: ShaderHandle, stage: ShaderStage) -> Self {
        Self {
            handle,
            stage,
            source: String::new(),
            translated_source: String::new(),
            info_log: String::new(),
            shader_version: DEFAULT_SHADER_VERSION,
            uniforms: Vec::new(),
            interface_blocks: Vec::new(),
            varyings: Vec::new(),
            stage_variables: Vec::new(),
            uniform_registers: RegisterMap::default(),
            interface_block_registers: RegisterMap::default(),
            usage: ShaderUsage::empty(),
            ref_count: 0,
            delete_pending: false,
        }
    }

    pub fn handle(&self) -> ShaderHandle {
        self.handle
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    // ===== SOURCE =====

    /// Replace the source with the concatenation of `strings`
    ///
    /// Does not touch the result of a previous compile.
    pub fn set_source(&mut self, strings: &[&str]) {
        self.source = strings.concat();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    // ===== COMPILE =====

    /// Compile the current source
    ///
    /// # Returns
    ///
    /// The compile outcome. Rejected source and unsupported versions are normal
    /// outcomes reported through `CompileStatus` and the info log.
    ///
    /// # Errors
    ///
    /// - `InitializationFailed` if the stage translator cannot be constructed
    /// - `InternalConsistency` if the translator reports an active variable without
    ///   a register
    ///
    /// In both cases no derived state is kept and the error text becomes the info log.
    pub fn compile(&mut self, compilers: &mut CompilerLifecycle) -> Galaxy3dResult<CompileStatus> {
        self.uncompile();

        let behavior = stage_behavior(self.stage);
        let client_version = compilers.caps().client_version;
        let annotate = compilers.config().annotate_translated_source;
        let source_path = compilers.config().source_path.clone();

        let result = compilers.translator(self.stage).and_then(|translator| {
            self.translate(translator, behavior, client_version, source_path.as_deref())
        });

        let status = match result {
            Ok(status) => status,
            Err(error) => {
                self.info_log = error.to_string();
                return Err(error);
            }
        };

        if status.is_success() {
            if annotate {
                self.translated_source = annotate_translated_source(&self.source, &self.translated_source);
            }
            if behavior.sorts_varyings {
                compilers.packing_order().sort(&mut self.varyings);
            }
        }

        Ok(status)
    }

    /// Reset every compile-derived field to its initial state
    fn uncompile(&mut self) {
        self.translated_source.clear();
        self.info_log.clear();
        self.shader_version = DEFAULT_SHADER_VERSION;
        self.uniforms.clear();
        self.interface_blocks.clear();
        self.varyings.clear();
        self.stage_variables.clear();
        self.uniform_registers.clear();
        self.interface_block_registers.clear();
        self.usage = ShaderUsage::empty();
    }

    fn translate(
        &mut self,
        translator: &mut dyn Translator,
        behavior: &StageBehavior,
        client_version: u32,
        source_path: Option<&str>,
    ) -> Galaxy3dResult<CompileStatus> {
        let compiled = match source_path {
            Some(path) => translator.compile(
                &[path, &self.source],
                CompileOptions::OBJECT_CODE | CompileOptions::SOURCE_PATH | CompileOptions::LINE_DIRECTIVES,
            ),
            None => translator.compile(&[&self.source], CompileOptions::OBJECT_CODE),
        };
        let translator: &dyn Translator = translator;

        self.shader_version = translator.shader_version();

        if self.shader_version == 300 && client_version < 3 {
            self.info_log = UNSUPPORTED_VERSION_MESSAGE.to_string();
            bridge_debug!(SOURCE, "{}", self.info_log);
            return Ok(CompileStatus::VersionUnsupported);
        }

        if !compiled {
            self.info_log = translator.info_log();
            bridge_debug!(SOURCE, "{:?} shader failed to compile:\n{}", self.stage, self.info_log);
            return Ok(CompileStatus::TranslationFailed);
        }

        let translation = Self::collect(translator, behavior)?;
        self.commit(translation);
        Ok(CompileStatus::Compiled)
    }

    fn collect(translator: &dyn Translator, behavior: &StageBehavior) -> Galaxy3dResult<Translation> {
        let translated_source = translator.object_code();
        if translated_source.is_empty() {
            bridge_bail!(InternalConsistency, SOURCE,
                "Translator reported success without object code");
        }

        let uniforms = translator.uniforms().to_vec();
        let uniform_registers = build_register_map(&uniforms, "uniform",
            |name| translator.uniform_register(name))?;

        let interface_blocks = translator.interface_blocks().to_vec();
        let interface_block_registers = build_register_map(&interface_blocks, "interface block",
            |name| translator.interface_block_register(name))?;

        let varyings = translator.varyings()
            .iter()
            .cloned()
            .map(PackedVarying::new)
            .collect();

        Ok(Translation {
            usage: ShaderUsage::scan(&translated_source),
            translated_source,
            info_log: translator.info_log(),
            uniforms,
            uniform_registers,
            interface_blocks,
            interface_block_registers,
            varyings,
            stage_variables: (behavior.extract_stage_variables)(translator),
        })
    }

    fn commit(&mut self, translation: Translation) {
        self.translated_source = translation.translated_source;
        self.info_log = translation.info_log;
        self.uniforms = translation.uniforms;
        self.uniform_registers = translation.uniform_registers;
        self.interface_blocks = translation.interface_blocks;
        self.interface_block_registers = translation.interface_block_registers;
        self.varyings = translation.varyings;
        self.stage_variables = translation.stage_variables;
        self.usage = translation.usage;
    }

    // ===== COMPILE RESULTS =====

    /// Whether the most recent compile succeeded
    pub fn is_compiled(&self) -> bool {
        !self.translated_source.is_empty()
    }

    pub fn translated_source(&self) -> &str {
        &self.translated_source
    }

    pub fn info_log(&self) -> &str {
        &self.info_log
    }

    /// Language version detected by the last compile (100 before any compile)
    pub fn shader_version(&self) -> u32 {
        self.shader_version
    }

    pub fn uniforms(&self) -> &[Uniform] {
        &self.uniforms
    }

    pub fn interface_blocks(&self) -> &[InterfaceBlock] {
        &self.interface_blocks
    }

    /// Varyings, in packing order for fragment shaders
    pub fn varyings(&self) -> &[PackedVarying] {
        &self.varyings
    }

    /// Varyings for the linker to assign registers in place
    pub fn varyings_mut(&mut self) -> &mut [PackedVarying] {
        &mut self.varyings
    }

    /// Forget every linker register assignment (before relinking)
    pub fn reset_varyings_register_assignment(&mut self) {
        for varying in self.varyings.iter_mut() {
            varying.reset_register_assignment();
        }
    }

    /// Active vertex attributes (empty for fragment shaders)
    pub fn attributes(&self) -> &[Attribute] {
        match self.stage {
            ShaderStage::Vertex => &self.stage_variables,
            ShaderStage::Fragment => &[],
        }
    }

    /// Active fragment outputs (empty for vertex shaders)
    pub fn output_variables(&self) -> &[Attribute] {
        match self.stage {
            ShaderStage::Vertex => &[],
            ShaderStage::Fragment => &self.stage_variables,
        }
    }

    /// Register of an active uniform
    ///
    /// # Errors
    ///
    /// `LifecycleMisuse` if the name is not in `uniforms()`
    pub fn uniform_register(&self, name: &str) -> Galaxy3dResult<u32> {
        self.uniform_registers.get(name).copied().ok_or_else(|| {
            bridge_err!(LifecycleMisuse, SOURCE, "No register for uniform '{}' (not active)", name)
        })
    }

    /// Register of an active uniform block
    ///
    /// # Errors
    ///
    /// `LifecycleMisuse` if the name is not in `interface_blocks()`
    pub fn interface_block_register(&self, name: &str) -> Galaxy3dResult<u32> {
        self.interface_block_registers.get(name).copied().ok_or_else(|| {
            bridge_err!(LifecycleMisuse, SOURCE, "No register for interface block '{}' (not active)", name)
        })
    }

    /// Input register offset of a vertex attribute, -1 if not active
    pub fn semantic_index(&self, attribute_name: &str) -> i32 {
        match self.stage {
            ShaderStage::Vertex => semantic_index(&self.stage_variables, attribute_name),
            ShaderStage::Fragment => SEMANTIC_INDEX_NOT_FOUND,
        }
    }

    pub fn usage(&self) -> ShaderUsage {
        self.usage
    }

    /// Whether every flag in `flags` was detected
    pub fn uses(&self, flags: ShaderUsage) -> bool {
        self.usage.contains(flags)
    }

    /// Backend workaround for the current usage flags
    pub fn workaround(&self) -> D3dWorkaround {
        D3dWorkaround::select(self.usage)
    }

    // ===== HOST TEXT QUERIES =====

    pub fn info_log_length(&self) -> usize {
        text_query::query_length(&self.info_log)
    }

    pub fn source_length(&self) -> usize {
        text_query::query_length(&self.source)
    }

    pub fn translated_source_length(&self) -> usize {
        text_query::query_length(&self.translated_source)
    }

    pub fn copy_info_log(&self, buffer: &mut [u8]) -> usize {
        text_query::copy_text(&self.info_log, buffer)
    }

    pub fn copy_source(&self, buffer: &mut [u8]) -> usize {
        text_query::copy_text(&self.source, buffer)
    }

    pub fn copy_translated_source(&self, buffer: &mut [u8]) -> usize {
        text_query::copy_text(&self.translated_source, buffer)
    }

    // ===== REFERENCE COUNTING =====

    pub fn add_ref(&mut self) {
        self.ref_count += 1;
    }

    /// Drop one reference
    ///
    /// Fires `handler` when this brings the count to zero on a record flagged for
    /// deletion.
    ///
    /// # Errors
    ///
    /// `LifecycleMisuse` if the count is already zero
    pub fn release(&mut self, handler: &mut dyn DeletionHandler) -> Galaxy3dResult<()> {
        if self.ref_count == 0 {
            bridge_bail!(LifecycleMisuse, SOURCE,
                "Release of shader {:?} with no outstanding references", self.handle);
        }

        self.ref_count -= 1;

        if self.ref_count == 0 && self.delete_pending {
            handler.delete_shader(self.handle);
        }

        Ok(())
    }

    pub fn ref_count(&self) -> u32 {
        self.ref_count
    }

    /// Mark for deletion; destruction waits for the last `release`
    pub fn flag_for_deletion(&mut self) {
        self.delete_pending = true;
    }

    pub fn is_flagged_for_deletion(&self) -> bool {
        self.delete_pending
    }
}

/// Prefix translated source with the original source as line comments
///
/// Every segment between newlines gets its own `// ` prefix, so a source ending in a
/// newline (or an empty source) yields a trailing bare `// ` line.
fn annotate_translated_source(source: &str, translated_source: &str) -> String {
    let mut annotated = String::with_capacity(source.len() + translated_source.len() + 64);
    annotated.push_str("// GLSL\n//\n");

    let mut segments = source.split('\n').peekable();
    while let Some(segment) = segments.next() {
        annotated.push_str("// ");
        annotated.push_str(segment);
        if segments.peek().is_some() {
            annotated.push('\n');
        }
    }

    annotated.push_str("\n\n");
    annotated.push_str(translated_source);
    annotated
}

#[cfg(test)]
#[path = "shader_record_tests.rs"]
mod tests;
