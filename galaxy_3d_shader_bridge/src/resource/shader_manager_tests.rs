/// Tests for ShaderManager
///
/// These tests use MockTranslatorBackend so compiles run without a translation engine.

use super::*;
use crate::error::Galaxy3dError;
use crate::compiler::{BackendCaps, CompilerConfig};
use crate::translator::mock_translator::{MockTranslatorBackend, MockCompileResult};

// ============================================================================
// Helper Functions
// ============================================================================

const VALID_FS: &str = "void main() { gl_FragColor = vec4(0.0); }";

fn create_compilers() -> CompilerLifecycle {
    let backend = MockTranslatorBackend::new()
        .with_script(VALID_FS, MockCompileResult::success("float4 main() : COLOR {}"));
    CompilerLifecycle::new(Box::new(backend), BackendCaps::default())
        .with_config(CompilerConfig { annotate_translated_source: false, source_path: None })
}

// ============================================================================
// Creation and lookup
// ============================================================================

#[test]
fn test_new_manager_is_empty() {
    let manager = ShaderManager::new();
    assert_eq!(manager.shader_count(), 0);
    assert_eq!(manager.shader_handles().count(), 0);
}

#[test]
fn test_create_shader_assigns_own_handle() {
    let mut manager = ShaderManager::new();

    let vertex = manager.create_shader(ShaderStage::Vertex);
    let fragment = manager.create_shader(ShaderStage::Fragment);

    assert_ne!(vertex, fragment);
    assert_eq!(manager.shader_count(), 2);
    assert_eq!(manager.shader(vertex).unwrap().handle(), vertex);
    assert_eq!(manager.shader(vertex).unwrap().stage(), ShaderStage::Vertex);
    assert_eq!(manager.shader(fragment).unwrap().stage(), ShaderStage::Fragment);
}

#[test]
fn test_shader_mut_sets_source() {
    let mut manager = ShaderManager::new();
    let handle = manager.create_shader(ShaderStage::Fragment);

    manager.shader_mut(handle).unwrap().set_source(&[VALID_FS]);

    assert_eq!(manager.shader(handle).unwrap().source(), VALID_FS);
}

#[test]
fn test_compile_through_manager() {
    let mut manager = ShaderManager::new();
    let mut compilers = create_compilers();
    let handle = manager.create_shader(ShaderStage::Fragment);
    manager.shader_mut(handle).unwrap().set_source(&[VALID_FS]);

    let status = manager.compile(handle, &mut compilers).unwrap();

    assert_eq!(status, CompileStatus::Compiled);
    assert!(manager.shader(handle).unwrap().is_compiled());
}

// ============================================================================
// Deletion
// ============================================================================

#[test]
fn test_delete_unreferenced_shader_is_immediate() {
    let mut manager = ShaderManager::new();
    let handle = manager.create_shader(ShaderStage::Vertex);

    assert!(manager.delete_shader(handle).unwrap());

    assert!(!manager.contains(handle));
    assert!(manager.shader(handle).is_none());
    assert_eq!(manager.shader_count(), 0);
}

#[test]
fn test_delete_referenced_shader_is_deferred() {
    let mut manager = ShaderManager::new();
    let handle = manager.create_shader(ShaderStage::Vertex);
    manager.add_ref(handle).unwrap();
    manager.add_ref(handle).unwrap();

    assert!(!manager.delete_shader(handle).unwrap());
    assert!(manager.contains(handle));
    assert!(manager.shader(handle).unwrap().is_flagged_for_deletion());

    assert!(!manager.release(handle).unwrap());
    assert!(manager.contains(handle));

    assert!(manager.release(handle).unwrap());
    assert!(!manager.contains(handle));
}

#[test]
fn test_release_without_delete_keeps_shader() {
    let mut manager = ShaderManager::new();
    let handle = manager.create_shader(ShaderStage::Fragment);
    manager.add_ref(handle).unwrap();

    assert!(!manager.release(handle).unwrap());

    assert!(manager.contains(handle));
    assert_eq!(manager.shader(handle).unwrap().ref_count(), 0);
}

#[test]
fn test_release_at_zero_is_misuse() {
    let mut manager = ShaderManager::new();
    let handle = manager.create_shader(ShaderStage::Fragment);

    assert!(matches!(manager.release(handle), Err(Galaxy3dError::LifecycleMisuse(_))));
    assert!(manager.contains(handle));
}

#[test]
fn test_stale_handle_is_invalid_resource() {
    let mut manager = ShaderManager::new();
    let mut compilers = create_compilers();
    let handle = manager.create_shader(ShaderStage::Vertex);
    manager.delete_shader(handle).unwrap();

    let replacement = manager.create_shader(ShaderStage::Vertex);
    assert_ne!(replacement, handle);

    assert!(matches!(manager.add_ref(handle), Err(Galaxy3dError::InvalidResource(_))));
    assert!(matches!(manager.release(handle), Err(Galaxy3dError::InvalidResource(_))));
    assert!(matches!(manager.delete_shader(handle), Err(Galaxy3dError::InvalidResource(_))));
    assert!(matches!(manager.compile(handle, &mut compilers), Err(Galaxy3dError::InvalidResource(_))));
    assert!(manager.contains(replacement));
}
