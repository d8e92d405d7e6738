use console::style;
use miette::Result;

use kitforge::{CatalogEntry, Layout};

pub fn run(layout: &Layout) -> Result<()> {
    let catalog = kitforge::list(layout);
    let entries: Vec<&CatalogEntry> = catalog.entries().collect();

    if entries.is_empty() {
        println!(
            "No templates cataloged. Use '{}' to add one.",
            style("kitforge ingest --zip <path>").cyan()
        );
        return Ok(());
    }

    println!(
        "{} ({} template{})\n",
        style("Cataloged templates").bold(),
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );

    for entry in entries {
        print_entry(entry);
    }

    Ok(())
}

fn print_entry(entry: &CatalogEntry) {
    println!(
        "  {} {}",
        style(&entry.slug).cyan().bold(),
        style(format!("({})", entry.label)).dim()
    );
    println!("  {} {}", style("variants:").dim(), entry.variants.join(", "));
    println!("  {}    {}", style("pages:").dim(), entry.pages.join(", "));
    println!();
}
