pub const APP_NAME: &str = "Real Profit Calc";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Set by build.rs when the checkout carries a release tag.
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}
