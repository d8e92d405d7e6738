use std::path::{Path, PathBuf};

/// Directory (relative to the asset root) where legacy templates keep their
/// jQuery plugins.
pub const PLUGIN_DIR: &str = "assets/js";

/// No-op plugin that returns the receiver so chained calls keep working.
pub fn plugin_stub(id: &str) -> String {
    format!("// {id} stub\n!function($){{$.fn.{id}=function(){{return this}}}}(window.jQuery||window.$);\n")
}

pub fn minified_path(js_dir: &Path, id: &str) -> PathBuf {
    js_dir.join(format!("jquery.{id}.min.js"))
}

pub fn unminified_path(js_dir: &Path, id: &str) -> PathBuf {
    js_dir.join(format!("jquery.{id}.js"))
}

/// Where a stub for `id` should be written, or `None` if either flavour of
/// the plugin already exists.
pub fn stub_target(js_dir: &Path, id: &str) -> Option<PathBuf> {
    let minified = minified_path(js_dir, id);
    if minified.exists() || unminified_path(js_dir, id).exists() {
        None
    } else {
        Some(minified)
    }
}
