//! Host detection port.
//!
//! The resolver asks a `HostDetector` which embedding host it runs in and
//! whether a platform is musl based, instead of sniffing globals itself.
//!
//! # Design Notes
//!
//! - Core owns the trait and both implementations
//! - `SystemHostDetector` does the active probing (process env, executable name, marker file)
//! - `StaticHostDetector` answers from fixed values for embedders and tests

use std::env;
use std::path::{Path, PathBuf};

/// Marker file present on Alpine Linux.
pub const ALPINE_RELEASE_FILE: &str = "/etc/alpine-release";

/// Set by Electron when a child process runs as plain Node.
pub const ELECTRON_RUN_AS_NODE_ENV: &str = "ELECTRON_RUN_AS_NODE";

/// Port for querying the hosting process and platform.
pub trait HostDetector: Send + Sync {
    /// Running inside an embedding desktop application host (Electron).
    fn is_desktop_host(&self) -> bool;

    /// Running inside an embedding game-engine style host (NW.js).
    fn is_game_engine_host(&self) -> bool;

    /// Whether `platform` names a musl-based environment.
    fn is_musl_platform(&self, platform: &str) -> bool;
}

/// Detector that inspects the current process and filesystem.
#[derive(Debug, Clone)]
pub struct SystemHostDetector {
    alpine_marker: PathBuf,
}

impl SystemHostDetector {
    pub fn new() -> Self {
        Self {
            alpine_marker: PathBuf::from(ALPINE_RELEASE_FILE),
        }
    }

    /// Use a different file as the Alpine marker.
    #[must_use]
    pub fn with_alpine_marker(mut self, marker: impl Into<PathBuf>) -> Self {
        self.alpine_marker = marker.into();
        self
    }
}

impl Default for SystemHostDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDetector for SystemHostDetector {
    fn is_desktop_host(&self) -> bool {
        is_desktop(
            env::var_os(ELECTRON_RUN_AS_NODE_ENV).is_some(),
            executable_stem().as_deref(),
        )
    }

    fn is_game_engine_host(&self) -> bool {
        is_game_engine(executable_stem().as_deref())
    }

    fn is_musl_platform(&self, platform: &str) -> bool {
        platform == "linux" && self.alpine_marker.is_file()
    }
}

fn is_desktop(run_as_node: bool, stem: Option<&str>) -> bool {
    run_as_node || stem.is_some_and(|stem| stem.contains("electron"))
}

fn is_game_engine(stem: Option<&str>) -> bool {
    stem.is_some_and(|stem| stem == "nw" || stem.starts_with("nwjs"))
}

fn executable_stem() -> Option<String> {
    let exe = env::current_exe().ok()?;
    stem_of(&exe)
}

fn stem_of(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
}

/// Detector with fixed answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticHostDetector {
    pub desktop: bool,
    pub game_engine: bool,
    pub musl: bool,
}

impl HostDetector for StaticHostDetector {
    fn is_desktop_host(&self) -> bool {
        self.desktop
    }

    fn is_game_engine_host(&self) -> bool {
        self.game_engine
    }

    fn is_musl_platform(&self, platform: &str) -> bool {
        self.musl && platform == "linux"
    }
}
