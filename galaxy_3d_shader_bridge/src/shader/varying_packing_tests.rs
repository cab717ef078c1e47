use super::*;
use crate::variable::{ShaderVariable, Varying};

// ============================================================================
// Helper Functions
// ============================================================================

fn packed(var_type: VariableType, array_size: u32, name: &str) -> PackedVarying {
    PackedVarying::new(Varying::new(
        ShaderVariable::new(var_type, name).with_array_size(array_size),
    ))
}

fn shape(varyings: &[PackedVarying]) -> Vec<(VariableType, u32)> {
    varyings.iter().map(|v| (v.var_type(), v.array_size())).collect()
}

fn names(varyings: &[PackedVarying]) -> Vec<&str> {
    varyings.iter().map(|v| v.name()).collect()
}

// ============================================================================
// Ordering rules
// ============================================================================

#[test]
fn test_same_type_larger_array_first_struct_last() {
    let order = VaryingPackingOrder::from_groups(&[
        &[VariableType::FloatVec4],
        &[VariableType::Float],
    ]);
    let mut varyings = vec![
        packed(VariableType::FloatVec4, 1, "a"),
        packed(VariableType::FloatVec4, 4, "b"),
        packed(VariableType::Struct, 1, "c"),
        packed(VariableType::Float, 1, "d"),
    ];

    order.sort(&mut varyings);

    assert_eq!(shape(&varyings), vec![
        (VariableType::FloatVec4, 4),
        (VariableType::FloatVec4, 1),
        (VariableType::Float, 1),
        (VariableType::Struct, 1),
    ]);
}

#[test]
fn test_struct_sorts_after_everything() {
    let order = VaryingPackingOrder::default();
    let s = packed(VariableType::Struct, 0, "s");
    let f = packed(VariableType::Float, 0, "f");

    assert_eq!(order.compare(&s, &f), Ordering::Greater);
    assert_eq!(order.compare(&f, &s), Ordering::Less);
}

#[test]
fn test_structs_order_by_array_size() {
    let order = VaryingPackingOrder::default();
    let mut varyings = vec![
        packed(VariableType::Struct, 0, "single"),
        packed(VariableType::Struct, 3, "triple"),
    ];

    order.sort(&mut varyings);

    assert_eq!(names(&varyings), vec!["triple", "single"]);
}

#[test]
fn test_default_table_precedence() {
    let order = VaryingPackingOrder::default();
    let mut varyings = vec![
        packed(VariableType::Float, 0, "scalar"),
        packed(VariableType::FloatVec2, 0, "vec2"),
        packed(VariableType::FloatVec3, 0, "vec3"),
        packed(VariableType::FloatMat3, 0, "mat3"),
        packed(VariableType::FloatVec4, 0, "vec4"),
        packed(VariableType::FloatMat2, 0, "mat2"),
        packed(VariableType::FloatMat4, 0, "mat4"),
    ];

    order.sort(&mut varyings);

    assert_eq!(names(&varyings), vec!["mat4", "mat2", "vec4", "mat3", "vec3", "vec2", "scalar"]);
}

#[test]
fn test_non_square_matrices_share_rank() {
    let order = VaryingPackingOrder::default();
    assert_eq!(order.rank(VariableType::FloatMat4x3), order.rank(VariableType::FloatMat4));
    assert_eq!(order.rank(VariableType::FloatMat3x2), order.rank(VariableType::FloatMat3));
    assert!(order.rank(VariableType::FloatMat2) < order.rank(VariableType::FloatVec4));
}

#[test]
fn test_equal_rank_distinct_types_group_deterministically() {
    let order = VaryingPackingOrder::default();
    let mut varyings = vec![
        packed(VariableType::IntVec4, 0, "i0"),
        packed(VariableType::FloatVec4, 0, "f0"),
        packed(VariableType::IntVec4, 2, "i2"),
        packed(VariableType::FloatVec4, 2, "f2"),
    ];

    order.sort(&mut varyings);

    // Same rank: grouped by type, each group by descending array size
    assert_eq!(names(&varyings), vec!["f2", "f0", "i2", "i0"]);
}

#[test]
fn test_unlisted_types_rank_last_before_structs() {
    let order = VaryingPackingOrder::from_groups(&[&[VariableType::FloatVec2]]);
    let mut varyings = vec![
        packed(VariableType::Struct, 0, "s"),
        packed(VariableType::FloatMat4, 0, "unlisted"),
        packed(VariableType::FloatVec2, 0, "listed"),
    ];

    order.sort(&mut varyings);

    assert_eq!(names(&varyings), vec!["listed", "unlisted", "s"]);
}

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_sort_is_stable_for_identical_shapes() {
    let order = VaryingPackingOrder::default();
    let mut varyings = vec![
        packed(VariableType::FloatVec3, 0, "first"),
        packed(VariableType::FloatVec4, 0, "wide"),
        packed(VariableType::FloatVec3, 0, "second"),
        packed(VariableType::FloatVec3, 0, "third"),
    ];

    order.sort(&mut varyings);

    assert_eq!(names(&varyings), vec!["wide", "first", "second", "third"]);
}

#[test]
fn test_sort_is_idempotent() {
    let order = VaryingPackingOrder::default();
    let mut varyings = vec![
        packed(VariableType::Float, 2, "a"),
        packed(VariableType::Struct, 0, "b"),
        packed(VariableType::FloatMat2, 0, "c"),
        packed(VariableType::Float, 5, "d"),
    ];

    order.sort(&mut varyings);
    let once = names(&varyings).join(",");
    order.sort(&mut varyings);

    assert_eq!(names(&varyings).join(","), once);
    assert_eq!(once, "c,d,a,b");
}
