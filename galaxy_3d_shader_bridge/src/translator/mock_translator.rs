/// Mock translator for unit tests (no translation engine required)
///
/// Compile results are scripted per source text: the backend holds a table of
/// `source -> MockCompileResult`, and any source missing from the table fails with a
/// syntax error. All translators created by one backend share its state so tests can
/// inspect init/finalize/compile calls afterwards.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::compiler::BuiltInResources;
#[cfg(test)]
use crate::error::Galaxy3dResult;
#[cfg(test)]
use crate::translator::{
    Translator, TranslatorBackend, ShaderStage, ShaderSpec, OutputType, CompileOptions,
};
#[cfg(test)]
use crate::variable::{Uniform, InterfaceBlock, Varying, Attribute};
#[cfg(test)]
use crate::bridge_bail;

/// Info log produced for sources that have no script entry
#[cfg(test)]
pub const MOCK_SYNTAX_ERROR: &str = "ERROR: 0:1: '' : syntax error\n";

// ============================================================================
// Scripted result
// ============================================================================

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockCompileResult {
    pub success: bool,
    pub version: u32,
    pub object_code: String,
    pub info_log: String,
    pub uniforms: Vec<Uniform>,
    pub interface_blocks: Vec<InterfaceBlock>,
    pub varyings: Vec<Varying>,
    pub attributes: Vec<Attribute>,
    pub output_variables: Vec<Attribute>,
    pub uniform_registers: HashMap<String, u32>,
    pub block_registers: HashMap<String, u32>,
}

#[cfg(test)]
impl MockCompileResult {
    /// Successful ES 1.00 compile producing `object_code`
    pub fn success(object_code: &str) -> Self {
        Self {
            success: true,
            version: 100,
            object_code: object_code.to_string(),
            info_log: String::new(),
            uniforms: Vec::new(),
            interface_blocks: Vec::new(),
            varyings: Vec::new(),
            attributes: Vec::new(),
            output_variables: Vec::new(),
            uniform_registers: HashMap::new(),
            block_registers: HashMap::new(),
        }
    }

    /// Rejected source with the given diagnostics
    pub fn failure(info_log: &str) -> Self {
        Self {
            success: false,
            object_code: String::new(),
            info_log: info_log.to_string(),
            ..Self::success("")
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_info_log(mut self, info_log: &str) -> Self {
        self.info_log = info_log.to_string();
        self
    }

    /// Add an active uniform and the register the translator assigned to it
    pub fn with_uniform(mut self, uniform: Uniform, register: u32) -> Self {
        self.uniform_registers.insert(uniform.variable.name.clone(), register);
        self.uniforms.push(uniform);
        self
    }

    /// Add an active uniform the translator "forgot" to assign a register to
    pub fn with_unregistered_uniform(mut self, uniform: Uniform) -> Self {
        self.uniforms.push(uniform);
        self
    }

    pub fn with_interface_block(mut self, block: InterfaceBlock, register: u32) -> Self {
        self.block_registers.insert(block.name.clone(), register);
        self.interface_blocks.push(block);
        self
    }

    pub fn with_varying(mut self, varying: Varying) -> Self {
        self.varyings.push(varying);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_output_variable(mut self, output: Attribute) -> Self {
        self.output_variables.push(output);
        self
    }
}

// ============================================================================
// Shared state
// ============================================================================

/// A recorded `Translator::compile` call
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockCompileCall {
    pub stage: ShaderStage,
    pub sources: Vec<String>,
    pub options: CompileOptions,
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockTranslatorState {
    pub scripts: HashMap<String, MockCompileResult>,
    pub compile_calls: Vec<MockCompileCall>,
    pub created: Vec<(ShaderStage, OutputType)>,
    pub last_resources: Option<BuiltInResources>,
    pub initialize_calls: u32,
    pub finalize_calls: u32,
    pub fail_initialize: bool,
    pub fail_create: bool,
}

// ============================================================================
// Mock Translator
// ============================================================================

#[cfg(test)]
pub struct MockTranslator {
    stage: ShaderStage,
    output: OutputType,
    state: Arc<Mutex<MockTranslatorState>>,
    last: MockCompileResult,
}

#[cfg(test)]
impl Translator for MockTranslator {
    fn compile(&mut self, sources: &[&str], options: CompileOptions) -> bool {
        let mut state = self.state.lock().unwrap();
        state.compile_calls.push(MockCompileCall {
            stage: self.stage,
            sources: sources.iter().map(|s| s.to_string()).collect(),
            options,
        });

        let code_strings = if options.contains(CompileOptions::SOURCE_PATH) {
            &sources[1..]
        } else {
            sources
        };
        let source = code_strings.concat();

        self.last = state.scripts.get(&source)
            .cloned()
            .unwrap_or_else(|| MockCompileResult::failure(MOCK_SYNTAX_ERROR));
        self.last.success
    }

    fn shader_version(&self) -> u32 {
        self.last.version
    }

    fn object_code(&self) -> String {
        self.last.object_code.clone()
    }

    fn info_log(&self) -> String {
        self.last.info_log.clone()
    }

    fn uniforms(&self) -> &[Uniform] {
        &self.last.uniforms
    }

    fn interface_blocks(&self) -> &[InterfaceBlock] {
        &self.last.interface_blocks
    }

    fn varyings(&self) -> &[Varying] {
        &self.last.varyings
    }

    fn attributes(&self) -> &[Attribute] {
        &self.last.attributes
    }

    fn output_variables(&self) -> &[Attribute] {
        &self.last.output_variables
    }

    fn uniform_register(&self, name: &str) -> Option<u32> {
        self.last.uniform_registers.get(name).copied()
    }

    fn interface_block_register(&self, name: &str) -> Option<u32> {
        self.last.block_registers.get(name).copied()
    }

    fn output_type(&self) -> OutputType {
        self.output
    }
}

// ============================================================================
// Mock Backend
// ============================================================================

/// Mock translation engine that tracks lifecycle calls
#[cfg(test)]
pub struct MockTranslatorBackend {
    state: Arc<Mutex<MockTranslatorState>>,
}

#[cfg(test)]
impl MockTranslatorBackend {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockTranslatorState::default())),
        }
    }

    /// Script the result for an exact source text
    pub fn with_script(self, source: &str, result: MockCompileResult) -> Self {
        self.state.lock().unwrap().scripts.insert(source.to_string(), result);
        self
    }

    /// Shared state handle (keep a clone before boxing the backend)
    pub fn state(&self) -> Arc<Mutex<MockTranslatorState>> {
        self.state.clone()
    }
}

#[cfg(test)]
impl TranslatorBackend for MockTranslatorBackend {
    fn initialize(&mut self) -> Galaxy3dResult<()> {
        let mut state = self.state.lock().unwrap();
        state.initialize_calls += 1;
        if state.fail_initialize {
            bridge_bail!(InitializationFailed, "galaxy3d::MockTranslator", "Mock engine refused to initialize");
        }
        Ok(())
    }

    fn create_translator(
        &mut self,
        stage: ShaderStage,
        _spec: ShaderSpec,
        output: OutputType,
        resources: &BuiltInResources,
    ) -> Galaxy3dResult<Box<dyn Translator>> {
        {
            let mut state = self.state.lock().unwrap();
            if state.fail_create {
                bridge_bail!(InitializationFailed, "galaxy3d::MockTranslator", "Mock translator creation failed for {:?}", stage);
            }
            state.created.push((stage, output));
            state.last_resources = Some(resources.clone());
        }

        Ok(Box::new(MockTranslator {
            stage,
            output,
            state: self.state.clone(),
            last: MockCompileResult::failure(""),
        }))
    }

    fn finalize(&mut self) {
        self.state.lock().unwrap().finalize_calls += 1;
    }
}
