use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use kitforge::catalog::Catalog;
use kitforge::patch::{plugin_stub, SHIM_MARKER};
use kitforge::{generate, ingest, GenerateOptions, IngestOptions, KitforgeError, Layout};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Zip the contents of fixture `name` into `dir/<archive_name>`.
fn zip_fixture(name: &str, dir: &Path, archive_name: &str) -> PathBuf {
    let src = fixture_path(name);
    let archive = dir.join(archive_name);
    let mut writer = zip::ZipWriter::new(File::create(&archive).unwrap());

    for entry in WalkDir::new(&src).min_depth(1).sort_by_file_name() {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(&src).unwrap();
        let rel = rel.to_string_lossy().replace('\\', "/");
        if entry.file_type().is_dir() {
            writer
                .add_directory(rel, SimpleFileOptions::default())
                .unwrap();
        } else {
            writer.start_file(rel, SimpleFileOptions::default()).unwrap();
            writer.write_all(&fs::read(entry.path()).unwrap()).unwrap();
        }
    }

    writer.finish().unwrap();
    archive
}

fn ingest_options(archive: PathBuf) -> IngestOptions {
    IngestOptions {
        archive,
        slug: None,
        variant: None,
    }
}

fn generate_options(slug: &str, variant: &str, out: &str) -> GenerateOptions {
    GenerateOptions {
        slug: slug.into(),
        variant: variant.into(),
        out: out.into(),
    }
}

fn read_catalog(layout: &Layout) -> Catalog {
    Catalog::read(&layout.manifest_path).unwrap()
}

#[test]
fn test_ingest_acme_landing_scenario() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("acme-landing", root.path(), "acme-landing.zip");

    let entry = ingest(&layout, ingest_options(archive)).unwrap();

    assert_eq!(entry.slug, "acme-landing");
    assert_eq!(entry.label, "Acme-landing");
    assert_eq!(entry.variants, vec!["default"]);
    assert_eq!(entry.pages, vec!["about.html", "index.html"]);

    let catalog = read_catalog(&layout);
    assert_eq!(catalog.entries().cloned().collect::<Vec<_>>(), vec![entry]);
    assert!(layout
        .variant_dir("acme-landing", "default")
        .join("about.html")
        .is_file());
}

#[test]
fn test_ingest_detects_multiple_variants() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("multi-variant", root.path(), "Helios HTML.zip");

    let entry = ingest(&layout, ingest_options(archive)).unwrap();

    assert_eq!(entry.slug, "helios-html");
    assert_eq!(entry.label, "Helios-html");
    assert_eq!(entry.variants, vec!["amber", "cyan"]);
    assert_eq!(entry.pages, vec!["generic.html", "index.html"]);

    for variant in ["amber", "cyan"] {
        let css = layout
            .variant_dir("helios-html", variant)
            .join("assets/css/main.css");
        assert_eq!(
            fs::read_to_string(css).unwrap().trim(),
            format!("body {{ color: {variant}; }}")
        );
    }
    // Not a variant: no index.html
    assert!(!layout.variant_dir("helios-html", "images").exists());
}

#[test]
fn test_ingest_flat_archive_is_default_variant() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("flat-template", root.path(), "flat.zip");

    let entry = ingest(&layout, ingest_options(archive)).unwrap();

    assert_eq!(entry.variants, vec!["default"]);
    assert_eq!(
        entry.pages,
        vec!["elements.html", "index.html", "no-script.html"]
    );
    assert!(layout
        .variant_dir("flat", "default")
        .join("assets/js/jquery.min.js")
        .is_file());
}

#[test]
fn test_ingest_variant_override_uses_whole_tree() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("multi-variant", root.path(), "helios.zip");

    let entry = ingest(
        &layout,
        IngestOptions {
            archive,
            slug: Some("px-helios".into()),
            variant: Some("bundle".into()),
        },
    )
    .unwrap();

    assert_eq!(entry.slug, "px-helios");
    assert_eq!(entry.variants, vec!["bundle"]);
    // Whole tree stored, so the top level holds directories, not pages
    assert!(entry.pages.is_empty());
    let stored = layout.variant_dir("px-helios", "bundle");
    assert!(stored.join("cyan/index.html").is_file());
    assert!(stored.join("amber/index.html").is_file());
}

#[test]
fn test_reingest_replaces_entry_without_merging() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());

    let first = zip_fixture("flat-template", root.path(), "first.zip");
    ingest(
        &layout,
        IngestOptions {
            archive: first,
            slug: Some("flat".into()),
            variant: None,
        },
    )
    .unwrap();

    let other = zip_fixture("acme-landing", root.path(), "acme-landing.zip");
    ingest(&layout, ingest_options(other)).unwrap();

    let second = zip_fixture("flat-template-v2", root.path(), "second.zip");
    ingest(
        &layout,
        IngestOptions {
            archive: second,
            slug: Some("flat".into()),
            variant: None,
        },
    )
    .unwrap();

    let catalog = read_catalog(&layout);
    let slugs: Vec<_> = catalog.entries().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["acme-landing", "flat"]);

    let flat = catalog.get("flat").unwrap();
    assert_eq!(flat.variants, vec!["default"]);
    assert_eq!(flat.pages, vec!["index.html", "landing.html"]);
    assert!(!layout
        .variant_dir("flat", "default")
        .join("elements.html")
        .exists());
}

#[test]
fn test_ingest_recovers_from_corrupt_manifest() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    fs::create_dir_all(&layout.storage_root).unwrap();
    fs::write(&layout.manifest_path, "{ \"templates\": [ oops").unwrap();

    let archive = zip_fixture("acme-landing", root.path(), "acme-landing.zip");
    ingest(&layout, ingest_options(archive)).unwrap();

    let catalog = read_catalog(&layout);
    let slugs: Vec<_> = catalog.entries().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["acme-landing"]);
}

#[test]
fn test_ingest_clears_stale_scratch() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let stale = layout.scratch_dir("acme-landing").join("leftover");
    fs::create_dir_all(&stale).unwrap();
    fs::write(stale.join("index.html"), "stale").unwrap();

    let archive = zip_fixture("acme-landing", root.path(), "acme-landing.zip");
    let entry = ingest(&layout, ingest_options(archive)).unwrap();

    assert_eq!(entry.variants, vec!["default"]);
    assert!(!stale.exists());
}

#[test]
fn test_generate_acme_landing_scenario() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("acme-landing", root.path(), "acme-landing.zip");
    ingest(&layout, ingest_options(archive)).unwrap();

    let kit = generate(&layout, generate_options("acme-landing", "default", "my-kit")).unwrap();

    let kit_dir = root.path().join("kits/my-kit");
    assert_eq!(kit.kit_dir, kit_dir);
    assert!(kit_dir
        .join("client/public/acme-landing/default/index.html")
        .is_file());
    assert!(kit_dir.join("server/server.js").is_file());
    assert!(kit_dir.join("server/package.json").is_file());

    let home = fs::read_to_string(kit_dir.join("client/src/pages/Home.jsx")).unwrap();
    assert!(home.contains(r#"src="/acme-landing/default/index.html""#));
    assert!(home.contains(">my-kit</h1>"));
}

#[test]
fn test_generate_patches_copied_assets_not_catalog() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("flat-template", root.path(), "flat.zip");
    ingest(&layout, ingest_options(archive)).unwrap();

    let kit = generate(&layout, generate_options("flat", "default", "flat-kit")).unwrap();

    assert_eq!(kit.patch.stubbed, vec!["scrollex", "dropotron"]);
    assert_eq!(kit.patch.shimmed, vec!["index.html"]);

    let js = kit.assets_dir.join("assets/js");
    assert_eq!(
        fs::read_to_string(js.join("jquery.scrolly.min.js")).unwrap(),
        "/*! real scrolly plugin */\n"
    );
    assert_eq!(
        fs::read_to_string(js.join("jquery.scrollex.min.js")).unwrap(),
        plugin_stub("scrollex")
    );

    let index = fs::read_to_string(kit.assets_dir.join("index.html")).unwrap();
    assert_eq!(index.matches(SHIM_MARKER).count(), 1);
    assert!(index.contains(
        "<script src=\"assets/js/jquery.min.js\"></script>\n\t\t<script>window.$ = window.$ || window.jQuery;</script>"
    ));

    let stored = layout.variant_dir("flat", "default");
    assert_eq!(
        fs::read_to_string(kit.assets_dir.join("elements.html")).unwrap(),
        fs::read_to_string(stored.join("elements.html")).unwrap()
    );
    assert_eq!(
        fs::read_to_string(kit.assets_dir.join("no-script.html")).unwrap(),
        fs::read_to_string(stored.join("no-script.html")).unwrap()
    );
    // The catalog copy is never patched
    assert!(!fs::read_to_string(stored.join("index.html"))
        .unwrap()
        .contains(SHIM_MARKER));
    assert!(!stored.join("assets/js/jquery.scrollex.min.js").exists());
}

#[test]
fn test_generate_twice_produces_identical_kit() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("flat-template", root.path(), "flat.zip");
    ingest(&layout, ingest_options(archive)).unwrap();

    let first = generate(&layout, generate_options("flat", "default", "kit")).unwrap();
    let index_first = fs::read(first.assets_dir.join("index.html")).unwrap();

    let second = generate(&layout, generate_options("flat", "default", "kit")).unwrap();
    let index_second = fs::read(second.assets_dir.join("index.html")).unwrap();

    assert_eq!(index_first, index_second);
    assert_eq!(second.patch.shimmed, vec!["index.html"]);
}

#[test]
fn test_generate_missing_variant_fails_without_creating_kit() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("acme-landing", root.path(), "acme-landing.zip");
    ingest(&layout, ingest_options(archive)).unwrap();

    let result = generate(&layout, generate_options("acme-landing", "midnight", "my-kit"));

    match result {
        Err(KitforgeError::VariantNotFound { slug, variant, .. }) => {
            assert_eq!(slug, "acme-landing");
            assert_eq!(variant, "midnight");
        }
        Err(other) => panic!("expected VariantNotFound, got {other}"),
        Ok(_) => panic!("expected VariantNotFound, got a kit"),
    }
    assert!(!root.path().join("kits/my-kit").exists());
}

#[test]
fn test_generate_missing_variant_keeps_existing_kit() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let archive = zip_fixture("acme-landing", root.path(), "acme-landing.zip");
    ingest(&layout, ingest_options(archive)).unwrap();
    generate(&layout, generate_options("acme-landing", "default", "my-kit")).unwrap();

    let result = generate(&layout, generate_options("ghost", "default", "my-kit"));

    assert!(matches!(result, Err(KitforgeError::VariantNotFound { .. })));
    assert!(root.path().join("kits/my-kit/server/server.js").is_file());
}

#[test]
fn test_list_reflects_catalog() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    assert_eq!(kitforge::list(&layout).entries().count(), 0);

    let archive = zip_fixture("multi-variant", root.path(), "helios.zip");
    ingest(&layout, ingest_options(archive)).unwrap();

    let catalog = kitforge::list(&layout);
    let entries: Vec<_> = catalog.entries().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].variants, vec!["amber", "cyan"]);
}
