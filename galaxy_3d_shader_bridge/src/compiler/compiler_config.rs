/// Backend capabilities and translator configuration

/// Number of vertex attributes exposed to ES programs
pub const MAX_VERTEX_ATTRIBS: u32 = 16;

/// Number of fragment texture image units exposed to ES programs
pub const MAX_TEXTURE_IMAGE_UNITS: u32 = 16;

/// Most negative texel offset accepted by `textureOffset` (D3D10 common shader limit)
pub const MIN_PROGRAM_TEXEL_OFFSET: i32 = -8;

/// Most positive texel offset accepted by `textureOffset` (D3D10 common shader limit)
pub const MAX_PROGRAM_TEXEL_OFFSET: i32 = 7;

/// Capability data queried from the rendering backend
///
/// The defaults describe a Shader Model 3 device driving an ES 2.0 context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCaps {
    /// Highest shader model major version the device supports (3, 4, 5...)
    pub major_shader_model: u32,
    /// ES major version of the context compiling shaders (2 or 3)
    pub client_version: u32,
    pub max_vertex_uniform_vectors: u32,
    pub max_fragment_uniform_vectors: u32,
    pub max_varying_vectors: u32,
    pub max_vertex_texture_image_units: u32,
    pub max_combined_texture_image_units: u32,
    pub max_draw_buffers: u32,
    /// OES_standard_derivatives
    pub standard_derivatives: bool,
    /// EXT_draw_buffers
    pub draw_buffers: bool,
}

impl Default for BackendCaps {
    fn default() -> Self {
        Self {
            major_shader_model: 3,
            client_version: 2,
            max_vertex_uniform_vectors: 254,
            max_fragment_uniform_vectors: 221,
            max_varying_vectors: 10,
            max_vertex_texture_image_units: 4,
            max_combined_texture_image_units: 20,
            max_draw_buffers: 1,
            standard_derivatives: true,
            draw_buffers: false,
        }
    }
}

/// Limits and extension toggles handed to the translator at construction
///
/// Extension toggles are `bool` here; the engine binding converts them to whatever
/// its C interface expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltInResources {
    pub max_vertex_attribs: u32,
    pub max_vertex_uniform_vectors: u32,
    pub max_varying_vectors: u32,
    pub max_vertex_texture_image_units: u32,
    pub max_combined_texture_image_units: u32,
    pub max_texture_image_units: u32,
    pub max_fragment_uniform_vectors: u32,
    pub max_draw_buffers: u32,
    pub oes_standard_derivatives: bool,
    pub oes_egl_image_external: bool,
    pub ext_draw_buffers: bool,
    pub ext_shader_texture_lod: bool,
    pub ext_frag_depth: bool,
    pub fragment_precision_high: bool,
    // ES 3.00 limits
    pub max_vertex_output_vectors: u32,
    pub max_fragment_input_vectors: u32,
    pub min_program_texel_offset: i32,
    pub max_program_texel_offset: i32,
}

impl BuiltInResources {
    /// Derive translator resources from backend capabilities
    ///
    /// Shader Model 2+ always has FP24 (highp) in the pixel shader and can write depth,
    /// so those toggles are fixed on. External images stay off until share handles
    /// are wired through.
    pub fn from_caps(caps: &BackendCaps) -> Self {
        Self {
            max_vertex_attribs: MAX_VERTEX_ATTRIBS,
            max_vertex_uniform_vectors: caps.max_vertex_uniform_vectors,
            max_varying_vectors: caps.max_varying_vectors,
            max_vertex_texture_image_units: caps.max_vertex_texture_image_units,
            max_combined_texture_image_units: caps.max_combined_texture_image_units,
            max_texture_image_units: MAX_TEXTURE_IMAGE_UNITS,
            max_fragment_uniform_vectors: caps.max_fragment_uniform_vectors,
            max_draw_buffers: caps.max_draw_buffers,
            oes_standard_derivatives: caps.standard_derivatives,
            oes_egl_image_external: false,
            ext_draw_buffers: caps.draw_buffers,
            ext_shader_texture_lod: true,
            ext_frag_depth: true,
            fragment_precision_high: true,
            max_vertex_output_vectors: caps.max_varying_vectors,
            max_fragment_input_vectors: caps.max_varying_vectors,
            min_program_texel_offset: MIN_PROGRAM_TEXEL_OFFSET,
            max_program_texel_offset: MAX_PROGRAM_TEXEL_OFFSET,
        }
    }
}

/// Per-lifecycle compile behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Prefix translated source with the original source as `//` comments
    pub annotate_translated_source: bool,
    /// Submit this path ahead of the source and request `#line` directives,
    /// so backend compiler errors point at a file on disk
    pub source_path: Option<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            annotate_translated_source: cfg!(debug_assertions),
            source_path: None,
        }
    }
}
