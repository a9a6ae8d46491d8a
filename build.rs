use chrono::Datelike;

fn main() {
    // Capture the build year for the footer, read with the env! macro
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs or the site content changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_FORM_ACCESS_KEY");
}
