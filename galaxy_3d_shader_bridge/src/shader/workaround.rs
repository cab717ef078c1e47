/// Backend compiler workaround selection

use crate::shader::ShaderUsage;

/// Directive passed to the backend shader compiler alongside the translated source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum D3dWorkaround {
    #[default]
    None,
    /// Compile with optimization disabled
    SkipOptimization,
    /// Compile with maximum optimization
    MaxOptimization,
}

impl D3dWorkaround {
    /// Select the workaround for a shader's usage flags
    ///
    /// The SM3 compiler miscompiles rewritten conditional discards unless optimization
    /// is skipped, and miscompiles breaks in nested loops unless optimization is
    /// maximized. Maximum optimization can hang the driver in combination with discard,
    /// so the discard case always wins.
    pub fn select(usage: ShaderUsage) -> Self {
        if usage.contains(ShaderUsage::DISCARD_REWRITING) {
            return D3dWorkaround::SkipOptimization;
        }

        if usage.contains(ShaderUsage::NESTED_BREAK) {
            return D3dWorkaround::MaxOptimization;
        }

        D3dWorkaround::None
    }
}

#[cfg(test)]
#[path = "workaround_tests.rs"]
mod tests;
