/// Shader usage flags detected from translated source
///
/// The translator announces features the shader uses by emitting marker identifiers
/// into the translated text (in a comment or a macro name). This module owns the
/// marker table; if the translator renames a marker, the matching flag silently
/// stays false, so the table must track the translator's output.

use bitflags::bitflags;

bitflags! {
    /// Features used by a translated shader
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ShaderUsage: u32 {
        /// Writes more than one render target
        const MULTIPLE_RENDER_TARGETS = 1 << 0;
        /// Writes gl_FragColor
        const FRAG_COLOR = 1 << 1;
        /// Writes gl_FragData[]
        const FRAG_DATA = 1 << 2;
        /// Reads gl_FragCoord
        const FRAG_COORD = 1 << 3;
        /// Reads gl_FrontFacing
        const FRONT_FACING = 1 << 4;
        /// Writes gl_PointSize
        const POINT_SIZE = 1 << 5;
        /// Reads gl_PointCoord
        const POINT_COORD = 1 << 6;
        /// Reads gl_DepthRange
        const DEPTH_RANGE = 1 << 7;
        /// Writes gl_FragDepthEXT
        const FRAG_DEPTH = 1 << 8;
        /// Conditional discard was rewritten by the translator
        const DISCARD_REWRITING = 1 << 9;
        /// Contains a break inside nested loops
        const NESTED_BREAK = 1 << 10;
    }
}

/// Marker text emitted by the translator for each flag
pub const USAGE_MARKERS: [(&str, ShaderUsage); 11] = [
    ("GL_USES_MRT", ShaderUsage::MULTIPLE_RENDER_TARGETS),
    ("GL_USES_FRAG_COLOR", ShaderUsage::FRAG_COLOR),
    ("GL_USES_FRAG_DATA", ShaderUsage::FRAG_DATA),
    ("GL_USES_FRAG_COORD", ShaderUsage::FRAG_COORD),
    ("GL_USES_FRONT_FACING", ShaderUsage::FRONT_FACING),
    ("GL_USES_POINT_SIZE", ShaderUsage::POINT_SIZE),
    ("GL_USES_POINT_COORD", ShaderUsage::POINT_COORD),
    ("GL_USES_DEPTH_RANGE", ShaderUsage::DEPTH_RANGE),
    ("GL_USES_FRAG_DEPTH", ShaderUsage::FRAG_DEPTH),
    ("ANGLE_USES_DISCARD_REWRITING", ShaderUsage::DISCARD_REWRITING),
    ("ANGLE_USES_NESTED_BREAK", ShaderUsage::NESTED_BREAK),
];

impl ShaderUsage {
    /// Scan translated source for every known marker
    pub fn scan(translated_source: &str) -> Self {
        USAGE_MARKERS
            .iter()
            .filter(|(marker, _)| translated_source.contains(marker))
            .fold(ShaderUsage::empty(), |usage, (_, flag)| usage | *flag)
    }
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;
