pub mod templates;

use std::path::{Path, PathBuf};

use console::style;
use tera::{Context, Tera};

use crate::config::Layout;
use crate::error::{KitforgeError, Result};
use crate::fsutil::{copy_dir_all, reset_dir, validate_name, write_file};
use crate::patch::{patch, PatchReport};

use templates::KIT_FILES;

/// Options for the `generate` operation.
pub struct GenerateOptions {
    pub slug: String,
    pub variant: String,
    /// Kit directory name under the kits root; also the service/package name.
    pub out: String,
}

pub struct GeneratedKit {
    pub kit_dir: PathBuf,
    /// Copy of the template variant inside `client/public`.
    pub assets_dir: PathBuf,
    /// Boilerplate files rendered (excludes copied template assets).
    pub files_rendered: Vec<PathBuf>,
    pub files_copied: usize,
    pub patch: PatchReport,
}

/// Build a fresh kit for one stored template variant.
///
/// The kit directory is deleted and rebuilt on every call. The slug and
/// variant are only checked against the storage tree, not the manifest.
pub fn generate(layout: &Layout, options: GenerateOptions) -> Result<GeneratedKit> {
    println!("{}", style("→ Generating kit...").blue());

    validate_name("slug", &options.slug)?;
    validate_name("variant", &options.variant)?;
    validate_name("kit", &options.out)?;

    let source_dir = layout.variant_dir(&options.slug, &options.variant);
    if !source_dir.is_dir() {
        return Err(KitforgeError::VariantNotFound {
            slug: options.slug,
            variant: options.variant,
            path: source_dir,
        });
    }

    let kit_dir = layout.kit_dir(&options.out);
    reset_dir(&kit_dir)?;

    let context = kit_context(&options);
    let files_rendered = render_kit_files(&kit_dir, &context)?;
    println!(
        "  {}",
        style(format!(
            "Generated server/ and client/ boilerplate ({} files)",
            files_rendered.len()
        ))
        .dim()
    );

    let assets_dir = public_assets_dir(&kit_dir, &options.slug, &options.variant);
    let files_copied = copy_dir_all(&source_dir, &assets_dir)?;
    println!(
        "  {}",
        style(format!(
            "Copied {} template files into client/public/{}/{}",
            files_copied, options.slug, options.variant
        ))
        .dim()
    );

    let patch_report = patch(&assets_dir, &layout.plugins)?;

    println!(
        "  {} Kit created at {}",
        style("✓").green(),
        style(kit_dir.strip_prefix(&layout.root).unwrap_or(&kit_dir).display()).cyan()
    );

    Ok(GeneratedKit {
        kit_dir,
        assets_dir,
        files_rendered,
        files_copied,
        patch: patch_report,
    })
}

/// `client/public/<slug>/<variant>` inside a kit.
pub fn public_assets_dir(kit_dir: &Path, slug: &str, variant: &str) -> PathBuf {
    kit_dir.join("client").join("public").join(slug).join(variant)
}

pub fn kit_context(options: &GenerateOptions) -> Context {
    let mut context = Context::new();
    context.insert("kit_name", &options.out);
    context.insert("slug", &options.slug);
    context.insert("variant", &options.variant);
    context.insert("server_package", &format!("{}-server", options.out));
    context.insert("client_package", &format!("{}-client", options.out));
    context
}

/// Render every boilerplate file into `kit_dir`, returning relative paths.
pub fn render_kit_files(kit_dir: &Path, context: &Context) -> Result<Vec<PathBuf>> {
    let mut tera = Tera::default();
    // Generated files are code, not HTML to be escaped.
    tera.autoescape_on(vec![]);
    for (name, source) in KIT_FILES {
        tera.add_raw_template(name, source)
            .map_err(|e| KitforgeError::RenderError {
                file: name.to_string(),
                source: e,
            })?;
    }

    let mut written = Vec::with_capacity(KIT_FILES.len());
    for (name, _) in KIT_FILES {
        let rendered = tera
            .render(name, context)
            .map_err(|e| KitforgeError::RenderError {
                file: name.to_string(),
                source: e,
            })?;
        write_file(&kit_dir.join(name), rendered)?;
        written.push(PathBuf::from(name));
    }
    Ok(written)
}
