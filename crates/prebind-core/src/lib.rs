#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod descriptor;
pub mod error;
pub mod host;
pub mod identity;
pub mod loader;
pub mod naming;
pub mod probe;
pub mod resolver;

// Re-export commonly used types for convenience
pub use descriptor::BindingDescriptor;
pub use error::{ResolveError, ResolveResult};
pub use host::{HostDetector, StaticHostDetector, SystemHostDetector};
pub use identity::{
    DEFAULT_RUNTIME, EnvironmentIdentity, EnvironmentOverride, host_arch, host_platform,
};
pub use loader::{LibraryLoader, Loader, ModuleLoader};
pub use naming::{DefaultPrebuildNamer, PrebuildNamer, PrebuildTags};
pub use probe::{FileProbe, OsFileProbe};
pub use resolver::{ResolveOptions, Resolver};
