//! End-to-end resolution against real directory layouts.
//!
//! These tests use the OS file probe on temporary package directories and a
//! static host detector so results do not depend on the machine's libc.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use prebind_core::{
    BindingDescriptor, DefaultPrebuildNamer, EnvironmentOverride, LibraryLoader, Loader,
    OsFileProbe, PrebuildNamer, PrebuildTags, ResolveError, ResolveOptions, Resolver,
    StaticHostDetector, host_arch, host_platform,
};
use tempfile::TempDir;

fn resolver() -> Resolver {
    Resolver::new(
        Arc::new(StaticHostDetector::default()),
        Arc::new(DefaultPrebuildNamer),
        Arc::new(OsFileProbe),
    )
}

fn host_prebuild(name: &str, napi_version: u32) -> String {
    DefaultPrebuildNamer.format(&PrebuildTags {
        name,
        platform: host_platform(),
        arch: host_arch(),
        libc: None,
        napi_version,
        runtime: "node",
    })
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"binary").unwrap();
}

#[test]
fn missing_everything_lists_three_candidates() {
    let pkg = TempDir::new().unwrap();
    let base = pkg.path();

    let err = resolver()
        .resolve(
            base,
            &BindingDescriptor::napi("foo", [3]),
            &ResolveOptions::production(),
        )
        .unwrap_err();

    let expected = vec![
        base.join("build").join("Debug").join("foo.node"),
        base.join("build").join("Release").join("foo.node"),
        base.join("prebuilds").join(host_prebuild("foo", 3)),
    ];

    let message = err.to_string();
    for candidate in &expected {
        let line = format!(" - {}", candidate.display());
        assert_eq!(
            message.lines().filter(|l| *l == line).count(),
            1,
            "{} should be listed exactly once in:\n{message}",
            candidate.display()
        );
    }

    match err {
        ResolveError::NotFound { candidates, .. } => assert_eq!(candidates, expected),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
#[test]
fn linux_x64_prebuild_name() {
    assert_eq!(host_prebuild("foo", 3), "foo-linux-x64/node-napi-v3.node");
}

#[test]
fn present_prebuild_is_returned() {
    let pkg = TempDir::new().unwrap();
    let prebuild = pkg.path().join("prebuilds").join(host_prebuild("foo", 3));
    touch(&prebuild);

    let found = resolver()
        .resolve(
            pkg.path(),
            &BindingDescriptor::napi("foo", [3]),
            &ResolveOptions::production(),
        )
        .unwrap();

    assert_eq!(found, Some(prebuild));
}

#[test]
fn loader_hands_resolved_prebuild_to_the_loading_primitive() {
    let pkg = TempDir::new().unwrap();
    let prebuild = pkg.path().join("prebuilds").join(host_prebuild("foo", 3));
    touch(&prebuild);

    let loader = Loader::new(resolver(), LibraryLoader);
    let err = loader
        .load(pkg.path(), &BindingDescriptor::napi("foo", [3]))
        .unwrap_err();

    // The stub file is not a real shared object, so the primitive rejects it
    match err {
        ResolveError::Load { path, .. } => assert_eq!(path, prebuild),
        other => panic!("expected Load error, got {other:?}"),
    }
}

#[test]
fn directory_in_place_of_binding_is_skipped() {
    let pkg = TempDir::new().unwrap();
    fs::create_dir_all(pkg.path().join("build/Debug/foo.node")).unwrap();
    let release = pkg.path().join("build/Release/foo.node");
    touch(&release);

    let found = resolver()
        .resolve(
            pkg.path(),
            &BindingDescriptor::napi("foo", [3]),
            &ResolveOptions::production(),
        )
        .unwrap();

    assert_eq!(found, Some(release));
}

#[test]
fn debug_build_beats_release_and_prebuilds() {
    let pkg = TempDir::new().unwrap();
    let debug = pkg.path().join("build/Debug/foo.node");
    touch(&debug);
    touch(&pkg.path().join("build/Release/foo.node"));
    touch(&pkg.path().join("prebuilds").join(host_prebuild("foo", 3)));

    let found = resolver()
        .resolve(
            pkg.path(),
            &BindingDescriptor::napi("foo", [3]),
            &ResolveOptions::production(),
        )
        .unwrap();

    assert_eq!(found, Some(debug));
}

#[test]
fn verify_mode_ignores_local_builds() {
    let pkg = TempDir::new().unwrap();
    touch(&pkg.path().join("build/Release/foo.node"));

    let overrides = EnvironmentOverride::none()
        .with_arch(host_arch())
        .with_platform(host_platform());
    let found = resolver()
        .resolve(
            pkg.path(),
            &BindingDescriptor::napi("foo", [3]),
            &ResolveOptions::verify(overrides),
        )
        .unwrap();

    assert_eq!(found, None);
}

#[test]
fn verify_mode_finds_foreign_target_prebuild() {
    let pkg = TempDir::new().unwrap();
    let foreign = pkg
        .path()
        .join("prebuilds/foo-win32-ia32/node-napi-v6.node");
    touch(&foreign);

    let overrides = EnvironmentOverride::none()
        .with_arch("ia32")
        .with_platform("win32");
    let found = resolver()
        .resolve(
            pkg.path(),
            &BindingDescriptor::napi("foo", [8, 6, 3]),
            &ResolveOptions::verify(overrides).throw_on_missing(true),
        )
        .unwrap();

    assert_eq!(found, Some(foreign));
}

#[test]
fn earlier_declared_napi_version_wins() {
    let pkg = TempDir::new().unwrap();
    let prebuilds = pkg.path().join("prebuilds");
    let v6 = prebuilds.join(host_prebuild("foo", 6));
    touch(&v6);
    touch(&prebuilds.join(host_prebuild("foo", 3)));

    let options = ResolveOptions::verify(EnvironmentOverride::none());
    let found = resolver()
        .resolve(pkg.path(), &BindingDescriptor::napi("foo", [6, 3]), &options)
        .unwrap();
    assert_eq!(found, Some(v6));

    let found: Option<PathBuf> = resolver()
        .resolve(pkg.path(), &BindingDescriptor::napi("foo", [3, 6]), &options)
        .unwrap();
    assert_eq!(found, Some(prebuilds.join(host_prebuild("foo", 3))));
}

#[test]
fn repeated_resolution_is_stable() {
    let pkg = TempDir::new().unwrap();
    touch(&pkg.path().join("prebuilds").join(host_prebuild("foo", 4)));

    let resolver = resolver();
    let descriptor = BindingDescriptor::napi("foo", [4]);
    let options = ResolveOptions::production();

    let first = resolver.resolve(pkg.path(), &descriptor, &options).unwrap();
    let second = resolver.resolve(pkg.path(), &descriptor, &options).unwrap();
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn legacy_descriptor_is_unsupported_even_with_files_present() {
    let pkg = TempDir::new().unwrap();
    touch(&pkg.path().join("build/Release/foo.node"));

    let err = resolver()
        .resolve(
            pkg.path(),
            &BindingDescriptor::legacy("foo"),
            &ResolveOptions::production(),
        )
        .unwrap_err();
    assert!(matches!(err, ResolveError::UnsupportedMode));
}
