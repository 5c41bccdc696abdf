//! Prebuild file naming.
//!
//! A prebuild's relative path under `prebuilds/` encodes the identity it was
//! built for. The default scheme is
//! `<name>-<platform>-<arch>[-<libc>]/<runtime>-napi-v<version>.node`.

/// Tags that select one prebuild file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrebuildTags<'a> {
    pub name: &'a str,
    pub platform: &'a str,
    pub arch: &'a str,
    pub libc: Option<&'a str>,
    pub napi_version: u32,
    pub runtime: &'a str,
}

/// Port that turns a tag combination into a path relative to `prebuilds/`.
///
/// Implementations must be pure: the same tags always give the same name.
pub trait PrebuildNamer: Send + Sync {
    fn format(&self, tags: &PrebuildTags<'_>) -> String;
}

/// The naming scheme prebuilt packages are published with.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPrebuildNamer;

impl PrebuildNamer for DefaultPrebuildNamer {
    fn format(&self, tags: &PrebuildTags<'_>) -> String {
        // libc only distinguishes linux builds
        let libc = tags.libc.filter(|_| tags.platform == "linux");

        let dir = [Some(tags.name), Some(tags.platform), Some(tags.arch), libc]
            .into_iter()
            .flatten()
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join("-");

        format!("{dir}/{}-napi-v{}.node", tags.runtime, tags.napi_version)
    }
}
