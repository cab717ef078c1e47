use super::*;

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_matrix_classification() {
    assert!(VariableType::FloatMat4.is_matrix());
    assert!(VariableType::FloatMat3x2.is_matrix());
    assert!(!VariableType::FloatVec4.is_matrix());
    assert!(!VariableType::Struct.is_matrix());
}

#[test]
fn test_struct_classification() {
    assert!(VariableType::Struct.is_struct());
    assert!(!VariableType::FloatMat2.is_struct());
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_column_count_is_first_matrix_dimension() {
    // matCxR: columns first
    assert_eq!(VariableType::FloatMat2x4.column_count(), 2);
    assert_eq!(VariableType::FloatMat4x3.column_count(), 4);
    assert_eq!(VariableType::FloatMat3.column_count(), 3);
}

#[test]
fn test_non_matrix_types_have_one_column() {
    assert_eq!(VariableType::BoolVec3.column_count(), 1);
    assert_eq!(VariableType::Float.column_count(), 1);
    assert_eq!(VariableType::Sampler2DArray.column_count(), 1);
}

// ============================================================================
// Register footprint
// ============================================================================

#[test]
fn test_register_count() {
    assert_eq!(VariableType::Float.register_count(), 1);
    assert_eq!(VariableType::FloatVec4.register_count(), 1);
    assert_eq!(VariableType::FloatMat2.register_count(), 2);
    assert_eq!(VariableType::FloatMat3.register_count(), 3);
    assert_eq!(VariableType::FloatMat4.register_count(), 4);
    assert_eq!(VariableType::FloatMat4x2.register_count(), 4);
    assert_eq!(VariableType::FloatMat2x4.register_count(), 2);
    assert_eq!(VariableType::Sampler2D.register_count(), 1);
}
