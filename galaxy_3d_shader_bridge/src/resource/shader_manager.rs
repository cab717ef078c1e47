/// Shader object manager.
///
/// Owns every shader record of a share group behind stable handles, and carries out
/// the deferred deletion protocol: a shader deleted while attached to a program stays
/// alive until its last reference is released.

use slotmap::SlotMap;
use crate::error::Galaxy3dResult;
use crate::compiler::CompilerLifecycle;
use crate::shader::{ShaderRecord, ShaderHandle, CompileStatus};
use crate::translator::ShaderStage;
use crate::{bridge_bail, bridge_debug};

const SOURCE: &str = "galaxy3d::ShaderManager";

pub struct ShaderManager {
    /// Live shader records, keyed by generational handle
    shaders: SlotMap<ShaderHandle, ShaderRecord>,
}

impl ShaderManager {
    /// Create a new empty shader manager
    pub fn new() -> Self {
        Self {
            shaders: SlotMap::with_key(),
        }
    }

    /// Create an empty shader object of the given stage
    ///
    /// Returns a handle that stays valid until the shader is destroyed.
    pub fn create_shader(&mut self, stage: ShaderStage) -> ShaderHandle {
        let handle = self.shaders.insert_with_key(|handle| ShaderRecord::new(handle, stage));
        bridge_debug!(SOURCE, "Created {:?} shader {:?}", stage, handle);
        handle
    }

    /// Get a shader by handle
    pub fn shader(&self, handle: ShaderHandle) -> Option<&ShaderRecord> {
        self.shaders.get(handle)
    }

    /// Get a mutable shader by handle
    pub fn shader_mut(&mut self, handle: ShaderHandle) -> Option<&mut ShaderRecord> {
        self.shaders.get_mut(handle)
    }

    /// Whether the handle refers to a live shader (deletion-pending shaders included)
    pub fn contains(&self, handle: ShaderHandle) -> bool {
        self.shaders.contains_key(handle)
    }

    /// Get the number of live shaders
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Iterate over all live shader handles
    pub fn shader_handles(&self) -> impl Iterator<Item = ShaderHandle> + '_ {
        self.shaders.keys()
    }

    /// Compile a shader with the share group's translators
    ///
    /// # Errors
    ///
    /// `InvalidResource` for an unknown handle, plus any error of `ShaderRecord::compile`.
    pub fn compile(&mut self, handle: ShaderHandle, compilers: &mut CompilerLifecycle) -> Galaxy3dResult<CompileStatus> {
        self.record_mut(handle)?.compile(compilers)
    }

    /// Delete a shader
    ///
    /// An unreferenced shader is destroyed immediately. A referenced one is flagged and
    /// destroyed by the `release` that drops its last reference.
    ///
    /// # Returns
    ///
    /// Whether the shader was destroyed by this call
    pub fn delete_shader(&mut self, handle: ShaderHandle) -> Galaxy3dResult<bool> {
        let record = self.record_mut(handle)?;
        record.flag_for_deletion();

        if record.ref_count() == 0 {
            self.destroy(handle);
            return Ok(true);
        }

        bridge_debug!(SOURCE, "Shader {:?} flagged for deletion ({} references)",
            handle, record.ref_count());
        Ok(false)
    }

    /// Add a program reference to a shader
    pub fn add_ref(&mut self, handle: ShaderHandle) -> Galaxy3dResult<()> {
        self.record_mut(handle)?.add_ref();
        Ok(())
    }

    /// Drop a program reference
    ///
    /// # Returns
    ///
    /// Whether the shader was destroyed (last reference of a deletion-flagged shader)
    ///
    /// # Errors
    ///
    /// `InvalidResource` for an unknown handle, `LifecycleMisuse` if the shader has no
    /// outstanding references.
    pub fn release(&mut self, handle: ShaderHandle) -> Galaxy3dResult<bool> {
        let mut destroyed = None;
        self.record_mut(handle)?
            .release(&mut |deleted: ShaderHandle| destroyed = Some(deleted))?;

        match destroyed {
            Some(deleted) => {
                self.destroy(deleted);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn record_mut(&mut self, handle: ShaderHandle) -> Galaxy3dResult<&mut ShaderRecord> {
        match self.shaders.get_mut(handle) {
            Some(record) => Ok(record),
            None => bridge_bail!(InvalidResource, SOURCE, "Unknown shader handle {:?}", handle),
        }
    }

    fn destroy(&mut self, handle: ShaderHandle) {
        if self.shaders.remove(handle).is_some() {
            bridge_debug!(SOURCE, "Destroyed shader {:?}", handle);
        }
    }
}

impl Default for ShaderManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "shader_manager_tests.rs"]
mod tests;
