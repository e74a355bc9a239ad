// File: crates/logo-core/build.rs
// Summary: Build script linking the Windows system libraries Skia needs for font discovery.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
