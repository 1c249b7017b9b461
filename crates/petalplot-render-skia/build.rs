// File: crates/petalplot-render-skia/build.rs
// Summary: Links the Windows system libraries Skia/ICU expect when rasterising.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
