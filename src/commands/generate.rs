use console::style;
use kitforge::{GenerateOptions, Layout};
use miette::Result;

pub fn run(layout: &Layout, slug: String, variant: String, out: String) -> Result<()> {
    let options = GenerateOptions { slug, variant, out };

    let kit = kitforge::generate(layout, options)?;

    println!(
        "{} Kit generated at {}",
        style("✓").green().bold(),
        style(kit.kit_dir.display()).cyan()
    );
    println!(
        "  {} files rendered, {} template files copied",
        kit.files_rendered.len(),
        kit.files_copied
    );
    if !kit.patch.is_empty() {
        println!(
            "  {} plugin stub(s), {} page(s) shimmed",
            kit.patch.stubbed.len(),
            kit.patch.shimmed.len()
        );
    }
    Ok(())
}
