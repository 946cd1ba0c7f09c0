//! Shader composition with `#import` support.
//!
//! Wraps `naga_oil::compose::Composer`: shared WGSL modules are
//! registered once at construction, consuming shaders pull them in with
//! `#import vitrine::...`, and composition produces `naga::Module` IR
//! directly so no WGSL re-parse happens at pipeline creation.

use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::error::VitrineError;

/// Shared module definition: source text plus its virtual file path.
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Consuming shader sources, addressed by path relative to
/// `assets/shaders/`.
const SHADERS: &[ModuleDef] = &[
    ModuleDef {
        source: include_str!("../../assets/shaders/scene.wgsl"),
        file_path: "scene.wgsl",
    },
    ModuleDef {
        source: include_str!("../../assets/shaders/screen/crt.wgsl"),
        file_path: "screen/crt.wgsl",
    },
];

/// Shared composable modules, registered in dependency order.
const MODULES: &[ModuleDef] = &[ModuleDef {
    source: include_str!("../../assets/shaders/modules/fullscreen.wgsl"),
    file_path: "modules/fullscreen.wgsl",
}];

/// Composes crate shaders into `wgpu::ShaderModule`s.
pub struct ShaderComposer {
    composer: Composer,
}

impl ShaderComposer {
    /// Create a composer with all shared modules registered.
    ///
    /// # Errors
    ///
    /// Returns `VitrineError::ShaderCompose` if a shared module fails to
    /// register (malformed WGSL shipped with the crate).
    pub fn new() -> Result<Self, VitrineError> {
        let mut composer = Composer::default();

        for module in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: module.source,
                    file_path: module.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    VitrineError::ShaderCompose(format!(
                        "failed to register module '{}': {e:?}",
                        module.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose the shader at `path` (relative to `assets/shaders/`) into a
    /// `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns `VitrineError::ShaderCompose` for unknown paths or
    /// composition failures.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        path: &str,
    ) -> Result<wgpu::ShaderModule, VitrineError> {
        let naga_module = self.compose_naga(path)?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose the shader at `path` into a `naga::Module` without touching
    /// a GPU device. Useful for testing composition headlessly.
    ///
    /// # Errors
    ///
    /// Returns `VitrineError::ShaderCompose` for unknown paths or
    /// composition failures.
    pub fn compose_naga(&mut self, path: &str) -> Result<naga::Module, VitrineError> {
        let shader = SHADERS
            .iter()
            .find(|s| s.file_path == path)
            .ok_or_else(|| {
                VitrineError::ShaderCompose(format!("unknown shader path '{path}'"))
            })?;

        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source: shader.source,
                file_path: shader.file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                VitrineError::ShaderCompose(format!(
                    "failed to compose '{path}': {e}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        for shader in SHADERS {
            let result = composer.compose_naga(shader.file_path);
            assert!(
                result.is_ok(),
                "shader '{}' failed to compose: {}",
                shader.file_path,
                result.err().map(|e| e.to_string()).unwrap_or_default()
            );
        }
    }

    #[test]
    fn unknown_path_is_an_error() {
        let mut composer = ShaderComposer::new().unwrap();
        assert!(composer.compose_naga("no_such.wgsl").is_err());
    }
}
