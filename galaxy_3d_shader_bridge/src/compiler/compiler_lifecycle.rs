/// CompilerLifecycle - owner of the two per-stage translators
///
/// One instance is shared (by `&mut`) by every shader object of a context or share
/// group. Translators are built lazily on the first compile of either stage and torn
/// down explicitly by `release_all`; a later compile builds them again.
///
/// If the engine or a translator fails to initialize, nothing is cached: the next
/// `translator()` call retries the whole construction.

use crate::error::Galaxy3dResult;
use crate::compiler::{BackendCaps, BuiltInResources, CompilerConfig};
use crate::shader::VaryingPackingOrder;
use crate::translator::{Translator, TranslatorBackend, ShaderStage, ShaderSpec, OutputType};
use crate::{bridge_err, bridge_info};

const SOURCE: &str = "galaxy3d::Compiler";

pub struct CompilerLifecycle {
    backend: Box<dyn TranslatorBackend>,
    caps: BackendCaps,
    config: CompilerConfig,
    packing_order: VaryingPackingOrder,
    vertex: Option<Box<dyn Translator>>,
    fragment: Option<Box<dyn Translator>>,
    engine_initialized: bool,
}

impl CompilerLifecycle {
    /// Create a lifecycle with no translators yet
    ///
    /// # Arguments
    ///
    /// * `backend` - Translation engine binding
    /// * `caps` - Capabilities of the device the translated shaders target
    pub fn new(backend: Box<dyn TranslatorBackend>, caps: BackendCaps) -> Self {
        Self {
            backend,
            caps,
            config: CompilerConfig::default(),
            packing_order: VaryingPackingOrder::default(),
            vertex: None,
            fragment: None,
            engine_initialized: false,
        }
    }

    /// Builder: replace the compile configuration
    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder: replace the renderer's varying precedence table
    pub fn with_packing_order(mut self, packing_order: VaryingPackingOrder) -> Self {
        self.packing_order = packing_order;
        self
    }

    pub fn caps(&self) -> &BackendCaps {
        &self.caps
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn packing_order(&self) -> &VaryingPackingOrder {
        &self.packing_order
    }

    /// Whether both translators currently exist
    pub fn is_initialized(&self) -> bool {
        self.vertex.is_some() && self.fragment.is_some()
    }

    /// Target language chosen for a device: SM4+ gets the D3D11 dialect
    pub fn select_output_type(caps: &BackendCaps) -> OutputType {
        if caps.major_shader_model >= 4 {
            OutputType::Hlsl11
        } else {
            OutputType::Hlsl9
        }
    }

    /// Get the translator for a stage, constructing both translators if needed
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if the engine or either translator could not be
    /// created. Nothing is kept from a failed attempt.
    pub fn translator(&mut self, stage: ShaderStage) -> Galaxy3dResult<&mut dyn Translator> {
        self.ensure_translators()?;

        let slot = match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        };

        match slot {
            Some(translator) => Ok(&mut **translator),
            None => Err(bridge_err!(InitializationFailed, SOURCE,
                "No {:?} translator after construction", stage)),
        }
    }

    /// Output type of a live translator, None if translators are not constructed
    pub fn output_type(&self, stage: ShaderStage) -> Option<OutputType> {
        let translator = match stage {
            ShaderStage::Vertex => self.vertex.as_ref(),
            ShaderStage::Fragment => self.fragment.as_ref(),
        };
        translator.map(|t| t.output_type())
    }

    /// Destroy both translators and release the engine
    ///
    /// Must not be called while a compile is in flight. Safe to call repeatedly.
    pub fn release_all(&mut self) {
        let had_translators = self.vertex.is_some() || self.fragment.is_some();
        self.fragment = None;
        self.vertex = None;

        if self.engine_initialized {
            self.backend.finalize();
            self.engine_initialized = false;
        }

        if had_translators {
            bridge_info!(SOURCE, "Shader translators released");
        }
    }

    fn ensure_translators(&mut self) -> Galaxy3dResult<()> {
        if self.is_initialized() {
            return Ok(());
        }

        if !self.engine_initialized {
            self.backend.initialize()
                .map_err(|e| bridge_err!(InitializationFailed, SOURCE,
                    "Translator engine initialization failed: {}", e))?;
            self.engine_initialized = true;
        }

        let output = Self::select_output_type(&self.caps);
        let resources = BuiltInResources::from_caps(&self.caps);

        let fragment = self.backend
            .create_translator(ShaderStage::Fragment, ShaderSpec::Gles2, output, &resources)
            .map_err(|e| bridge_err!(InitializationFailed, SOURCE,
                "Fragment translator creation failed: {}", e))?;
        let vertex = self.backend
            .create_translator(ShaderStage::Vertex, ShaderSpec::Gles2, output, &resources)
            .map_err(|e| bridge_err!(InitializationFailed, SOURCE,
                "Vertex translator creation failed: {}", e))?;

        self.fragment = Some(fragment);
        self.vertex = Some(vertex);

        bridge_info!(SOURCE, "Shader translators constructed ({:?})", output);
        Ok(())
    }
}

impl Drop for CompilerLifecycle {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
#[path = "compiler_lifecycle_tests.rs"]
mod tests;
