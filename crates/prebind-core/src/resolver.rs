//! Candidate-path resolution.
//!
//! Resolution order for a Node-API binding:
//! 1. `<base>/build/Debug/<name>.node` (production mode only)
//! 2. `<base>/build/Release/<name>.node` (production mode only)
//! 3. `<base>/prebuilds/<formatted>` for each declared Node-API version, in
//!    declared order
//!
//! The first candidate that is an existing regular file wins. Later
//! candidates are not probed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::descriptor::BindingDescriptor;
use crate::error::{ResolveError, ResolveResult};
use crate::host::{HostDetector, SystemHostDetector};
use crate::identity::{
    DEFAULT_RUNTIME, DESKTOP_RUNTIME, EnvironmentIdentity, EnvironmentOverride,
    GAME_ENGINE_RUNTIME, MUSL, host_arch, host_platform,
};
use crate::naming::{DefaultPrebuildNamer, PrebuildNamer, PrebuildTags};
use crate::probe::{FileProbe, OsFileProbe};

/// Directory holding local `node-gyp` style build output.
pub const BUILD_DIR: &str = "build";

/// Directory holding published prebuilds.
pub const PREBUILDS_DIR: &str = "prebuilds";

/// How a single resolve call behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Checking availability for a target rather than loading in-process.
    ///
    /// Applies `overrides` and skips local build outputs.
    pub verify: bool,
    /// Fail with `NotFound` instead of returning `None` on a miss.
    pub throw_on_missing: bool,
    /// Only consulted when `verify` is set.
    pub overrides: EnvironmentOverride,
}

impl ResolveOptions {
    /// In-process loading: local builds first, no overrides, fail on a miss.
    pub fn production() -> Self {
        Self {
            verify: false,
            throw_on_missing: true,
            overrides: EnvironmentOverride::none(),
        }
    }

    /// Packaging check against a possibly foreign target; a miss is `None`.
    pub fn verify(overrides: EnvironmentOverride) -> Self {
        Self {
            verify: true,
            throw_on_missing: false,
            overrides,
        }
    }

    #[must_use]
    pub const fn throw_on_missing(mut self, throw_on_missing: bool) -> Self {
        self.throw_on_missing = throw_on_missing;
        self
    }

    /// Override in effect for this call, if any.
    fn active_overrides(&self) -> Option<&EnvironmentOverride> {
        self.verify.then_some(&self.overrides)
    }
}

/// Resolves the on-disk path of a native binding.
///
/// Holds no mutable state: identity and candidates are recomputed on every
/// call, so one resolver can serve any number of threads.
#[derive(Clone)]
pub struct Resolver {
    host: Arc<dyn HostDetector>,
    namer: Arc<dyn PrebuildNamer>,
    probe: Arc<dyn FileProbe>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::system()
    }
}

impl Resolver {
    pub fn new(
        host: Arc<dyn HostDetector>,
        namer: Arc<dyn PrebuildNamer>,
        probe: Arc<dyn FileProbe>,
    ) -> Self {
        Self { host, namer, probe }
    }

    /// Resolver wired to the running system and the default naming scheme.
    pub fn system() -> Self {
        Self::new(
            Arc::new(SystemHostDetector::new()),
            Arc::new(DefaultPrebuildNamer),
            Arc::new(OsFileProbe),
        )
    }

    /// Find the binding for `descriptor` under `base_path`.
    ///
    /// Returns `Ok(None)` on a miss unless `options.throw_on_missing` is set,
    /// in which case the `NotFound` error lists every probed candidate.
    pub fn resolve(
        &self,
        base_path: impl AsRef<Path>,
        descriptor: &BindingDescriptor,
        options: &ResolveOptions,
    ) -> ResolveResult<Option<PathBuf>> {
        let candidates = self.candidates(base_path, descriptor, options)?;

        if let Some(found) = candidates.iter().find(|c| self.probe_candidate(c)) {
            debug!(binding = %descriptor.name, path = %found.display(), "Resolved native binding");
            return Ok(Some(found.clone()));
        }

        if options.throw_on_missing {
            return Err(ResolveError::NotFound {
                name: descriptor.name.clone(),
                candidates,
            });
        }

        debug!(binding = %descriptor.name, tried = candidates.len(), "No native binding found");
        Ok(None)
    }

    /// Ordered candidate list, without touching the filesystem.
    pub fn candidates(
        &self,
        base_path: impl AsRef<Path>,
        descriptor: &BindingDescriptor,
        options: &ResolveOptions,
    ) -> ResolveResult<Vec<PathBuf>> {
        let base_path = base_path.as_ref();
        if base_path.as_os_str().is_empty() {
            return Err(ResolveError::invalid_argument("base path cannot be empty"));
        }

        let identity = self.identity(descriptor, options)?;
        let versions = descriptor.napi_versions.as_deref().unwrap_or_default();

        let mut candidates = Vec::with_capacity(versions.len() + 2);

        if !options.verify {
            let file_name = format!("{}.node", descriptor.name);
            for profile in ["Debug", "Release"] {
                candidates.push(base_path.join(BUILD_DIR).join(profile).join(&file_name));
            }
        }

        let prebuilds = base_path.join(PREBUILDS_DIR);
        for &napi_version in versions {
            let name = self.namer.format(&PrebuildTags {
                name: &descriptor.name,
                platform: &identity.platform,
                arch: &identity.arch,
                libc: identity.libc.as_deref(),
                napi_version,
                runtime: &identity.runtime,
            });
            candidates.push(prebuilds.join(name));
        }

        trace!(binding = %descriptor.name, ?candidates, "Built candidate list");
        Ok(candidates)
    }

    /// Identity the candidates are formatted for, without touching the
    /// filesystem.
    pub fn identity(
        &self,
        descriptor: &BindingDescriptor,
        options: &ResolveOptions,
    ) -> ResolveResult<EnvironmentIdentity> {
        descriptor.validate()?;
        if !descriptor.is_napi() {
            return Err(ResolveError::UnsupportedMode);
        }

        let overrides = options.active_overrides();

        let arch = overrides
            .and_then(EnvironmentOverride::arch)
            .unwrap_or(host_arch())
            .to_string();
        let platform = overrides
            .and_then(EnvironmentOverride::platform)
            .unwrap_or(host_platform())
            .to_string();
        let runtime = self.runtime(descriptor, overrides);
        let libc = self
            .host
            .is_musl_platform(&platform)
            .then(|| MUSL.to_string());

        Ok(EnvironmentIdentity {
            arch,
            platform,
            libc,
            runtime,
        })
    }

    fn runtime(
        &self,
        descriptor: &BindingDescriptor,
        overrides: Option<&EnvironmentOverride>,
    ) -> String {
        // Node-API binaries are shared by every runtime
        if descriptor.is_napi() {
            return DEFAULT_RUNTIME.to_string();
        }

        if let Some(runtime) = overrides.and_then(EnvironmentOverride::runtime) {
            runtime.to_string()
        } else if self.host.is_desktop_host() {
            DESKTOP_RUNTIME.to_string()
        } else if self.host.is_game_engine_host() {
            GAME_ENGINE_RUNTIME.to_string()
        } else {
            DEFAULT_RUNTIME.to_string()
        }
    }

    fn probe_candidate(&self, candidate: &Path) -> bool {
        let hit = self.probe.is_file(candidate);
        trace!(path = %candidate.display(), hit, "Probed candidate");
        hit
    }
}
