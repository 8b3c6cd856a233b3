fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Relay settings are baked into the client bundle
    for var in [
        "PORTFOLIO_EMAIL_ENDPOINT",
        "PORTFOLIO_EMAIL_SERVICE_ID",
        "PORTFOLIO_EMAIL_TEMPLATE_ID",
        "PORTFOLIO_EMAIL_PUBLIC_KEY",
        "PORTFOLIO_EMAIL_TO_NAME",
        "PORTFOLIO_EMAIL_TO_ADDRESS",
    ] {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
