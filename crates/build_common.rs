// Shared build script step that turns a crate README into its rustdoc front page.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Write `README.md` to `$OUT_DIR/README_GENERATED.md` with links rewritten for rustdoc.
///
/// Rewrites:
/// 1. `](src/foo.rs)` and `](src/handlers/mod.rs)` become module links (`](foo)`, `](handlers)`)
/// 2. `](../<crate>/README.md)` becomes a link to the sibling crate's docs
///
/// A missing README still produces an (empty) generated file so `include_str!` never fails.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let content = fs::read_to_string(&readme_path).unwrap_or_default();

    let rustdoc_content = rewrite_sibling_readme_links(
        &content
            .replace("/mod.rs)", ")")
            .replace("](src/", "](")
            .replace(".rs)", ")"),
    );

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).unwrap();
}

/// `](../prebind-core/README.md)` -> `](../prebind_core/index.html)`
fn rewrite_sibling_readme_links(content: &str) -> String {
    let mut rewritten = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("](../") {
        let (before, link) = rest.split_at(start);
        rewritten.push_str(before);

        let target = &link[5..];
        match target.find("/README.md)") {
            Some(end) if !target[..end].contains(')') => {
                let crate_name = target[..end].replace('-', "_");
                rewritten.push_str(&format!("](../{crate_name}/index.html)"));
                rest = &target[end + "/README.md)".len()..];
            }
            _ => {
                rewritten.push_str("](../");
                rest = target;
            }
        }
    }

    rewritten.push_str(rest);
    rewritten
}
