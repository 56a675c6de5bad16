/// Returns a version as specified in Cargo.toml
pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

/// Namespaced identity used to detect another running instance.
pub fn app_id() -> String {
    format!("{}.sock", app_name())
}
