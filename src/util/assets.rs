use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Stylesheets ship inside the binary so the app never depends on a
/// working directory at runtime.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| load_text("tailwind.css"))
        .as_str()
}

fn load_text(name: &str) -> String {
    let file = EmbeddedAssets::get(name)
        .unwrap_or_else(|| panic!("missing embedded asset: {name}"));
    String::from_utf8(file.data.into_owned())
        .unwrap_or_else(|_| panic!("embedded asset {name} is not valid UTF-8"))
}
