/*!
# Galaxy 3D Shader Bridge

Shader objects for a GLSL ES front end running on a Direct3D back end.

A shader object receives GLSL ES source, compiles it through an external translator
into HLSL, and keeps everything the program linker needs from the result: the
translated source, active uniforms and uniform blocks with their registers, varyings
ready for packing, vertex attributes or fragment outputs, and the feature usage
flags that steer back-end compilation.

## Architecture

- **Translator / TranslatorBackend**: Traits over the translation engine
- **CompilerLifecycle**: Owns the two per-stage translators (lazy build, explicit teardown)
- **ShaderRecord**: One shader object (source, compile, linkage data, references)
- **ShaderManager**: Handle-based storage with deferred deletion
- **VaryingPackingOrder**: Precedence table used to sort fragment varyings

The translation engine is supplied by the host as a `TranslatorBackend`
implementation.
*/

// Internal modules
mod error;
mod bridge;
pub mod log;
pub mod variable;
pub mod translator;
pub mod compiler;
pub mod shader;
pub mod resource;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Galaxy3dError, Galaxy3dResult};

    // Logger entry point
    pub use crate::bridge::Bridge;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: bridge_* macros are NOT re-exported here - they are internal only
    }

    // Variable descriptors
    pub mod variable {
        pub use crate::variable::*;
    }

    // Translator traits
    pub mod translator {
        pub use crate::translator::{
            Translator, TranslatorBackend,
            ShaderStage, ShaderSpec, OutputType, CompileOptions,
        };
    }

    // Translator lifecycle and backend configuration
    pub mod compiler {
        pub use crate::compiler::*;
    }

    // Shader objects
    pub mod shader {
        pub use crate::shader::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}
