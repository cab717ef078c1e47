use super::*;

#[test]
fn test_no_flags_no_workaround() {
    assert_eq!(D3dWorkaround::select(ShaderUsage::empty()), D3dWorkaround::None);
    assert_eq!(D3dWorkaround::default(), D3dWorkaround::None);
}

#[test]
fn test_nested_break_maximizes_optimization() {
    assert_eq!(D3dWorkaround::select(ShaderUsage::NESTED_BREAK), D3dWorkaround::MaxOptimization);
}

#[test]
fn test_discard_rewriting_skips_optimization() {
    assert_eq!(D3dWorkaround::select(ShaderUsage::DISCARD_REWRITING), D3dWorkaround::SkipOptimization);
}

#[test]
fn test_discard_takes_precedence_regardless_of_insertion_order() {
    let mut first = ShaderUsage::empty();
    first.insert(ShaderUsage::DISCARD_REWRITING);
    first.insert(ShaderUsage::NESTED_BREAK);

    let mut second = ShaderUsage::empty();
    second.insert(ShaderUsage::NESTED_BREAK);
    second.insert(ShaderUsage::DISCARD_REWRITING);

    assert_eq!(D3dWorkaround::select(first), D3dWorkaround::SkipOptimization);
    assert_eq!(D3dWorkaround::select(second), D3dWorkaround::SkipOptimization);
}

#[test]
fn test_unrelated_flags_are_ignored() {
    let usage = ShaderUsage::FRAG_COORD | ShaderUsage::MULTIPLE_RENDER_TARGETS | ShaderUsage::NESTED_BREAK;
    assert_eq!(D3dWorkaround::select(usage), D3dWorkaround::MaxOptimization);
    assert_eq!(D3dWorkaround::select(ShaderUsage::FRAG_DEPTH), D3dWorkaround::None);
}
