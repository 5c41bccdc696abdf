//! Environment identity and host-native platform values.
//!
//! Values use the vocabulary that prebuild file names are written in
//! (`x64`, `arm64`, `darwin`, `win32`, ...), not Rust's target names.

use std::env::consts;
use std::fmt;

/// Runtime flavor used when nothing upgrades it.
pub const DEFAULT_RUNTIME: &str = "node";

/// Runtime flavor reported inside an embedding desktop host.
pub const DESKTOP_RUNTIME: &str = "electron";

/// Runtime flavor reported inside an embedding game-engine style host.
pub const GAME_ENGINE_RUNTIME: &str = "node-webkit";

/// libc variant name for musl-based systems.
pub const MUSL: &str = "musl";

/// Explicit replacements for detected values, applied only in verify mode.
///
/// Callers build this from whatever configuration they own. The resolver
/// never reads the process environment itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentOverride {
    pub arch: Option<String>,
    pub platform: Option<String>,
    pub runtime: Option<String>,
}

impl EnvironmentOverride {
    /// Override with every field unset.
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    #[must_use]
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = Some(runtime.into());
        self
    }

    pub(crate) fn arch(&self) -> Option<&str> {
        non_empty(self.arch.as_deref())
    }

    pub(crate) fn platform(&self) -> Option<&str> {
        non_empty(self.platform.as_deref())
    }

    pub(crate) fn runtime(&self) -> Option<&str> {
        non_empty(self.runtime.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The tuple a prebuild is selected by. Computed fresh for every resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentIdentity {
    pub arch: String,
    pub platform: String,
    pub libc: Option<String>,
    pub runtime: String,
}

impl fmt::Display for EnvironmentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "arch = {}", self.arch)?;
        writeln!(f, "platform = {}", self.platform)?;
        writeln!(f, "libc = {}", self.libc.as_deref().unwrap_or("none"))?;
        write!(f, "runtime = {}", self.runtime)
    }
}

/// Architecture of the running binary, in prebuild naming vocabulary.
pub fn host_arch() -> &'static str {
    node_arch(consts::ARCH)
}

/// Operating system of the running binary, in prebuild naming vocabulary.
pub fn host_platform() -> &'static str {
    node_platform(consts::OS)
}

/// Map a Rust `target_arch` name to its prebuild name.
///
/// Unknown names pass through unchanged.
pub fn node_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        "powerpc" => "ppc",
        "powerpc64" => "ppc64",
        "mips64" => "mips64el",
        "loongarch64" => "loong64",
        other => other,
    }
}

/// Map a Rust `target_os` name to its prebuild name.
///
/// Unknown names pass through unchanged.
pub fn node_platform(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        "solaris" | "illumos" => "sunos",
        other => other,
    }
}
