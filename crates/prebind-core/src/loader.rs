//! Loading a resolved binding into the process.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::descriptor::BindingDescriptor;
use crate::error::{ResolveError, ResolveResult};
use crate::resolver::{ResolveOptions, Resolver};

/// Dynamic-loading primitive.
pub trait ModuleLoader {
    /// Whatever the primitive hands back for a loaded file.
    type Module;

    fn load_module(&self, path: &Path) -> ResolveResult<Self::Module>;
}

/// Loads shared libraries through `libloading`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryLoader;

impl ModuleLoader for LibraryLoader {
    type Module = libloading::Library;

    /// Loading runs the library's initializers. Only pass paths from a
    /// resolver configured with trusted inputs.
    #[allow(unsafe_code)]
    fn load_module(&self, path: &Path) -> ResolveResult<Self::Module> {
        // SAFETY: initializers of the resolved addon run here; the resolver
        // only returns regular files from the package's own directories.
        unsafe { libloading::Library::new(path) }.map_err(|e| ResolveError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Resolves with production semantics and loads the result.
#[derive(Debug, Clone, Default)]
pub struct Loader<L = LibraryLoader> {
    resolver: Resolver,
    loader: L,
}

impl Loader<LibraryLoader> {
    /// Loader for the running system.
    pub fn system() -> Self {
        Self::new(Resolver::system(), LibraryLoader)
    }
}

impl<L: ModuleLoader> Loader<L> {
    pub fn new(resolver: Resolver, loader: L) -> Self {
        Self { resolver, loader }
    }

    /// Resolve the binding under `base_path` and load it.
    ///
    /// Local build outputs take priority over prebuilds. A miss fails with
    /// `NotFound`.
    pub fn load(
        &self,
        base_path: impl AsRef<Path>,
        descriptor: &BindingDescriptor,
    ) -> ResolveResult<L::Module> {
        let path = self.resolve_for_load(base_path, descriptor)?;
        info!(binding = %descriptor.name, path = %path.display(), "Loading native binding");
        self.loader.load_module(&path)
    }

    fn resolve_for_load(
        &self,
        base_path: impl AsRef<Path>,
        descriptor: &BindingDescriptor,
    ) -> ResolveResult<PathBuf> {
        let options = ResolveOptions::production();
        debug_assert!(options.throw_on_missing);

        self.resolver
            .resolve(base_path, descriptor, &options)?
            .ok_or_else(|| {
                ResolveError::InternalInvariantViolation(format!(
                    "resolver returned no path for {} despite throw_on_missing",
                    descriptor.name
                ))
            })
    }
}
