use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = PdfDocument::open(&path)?;
    let info = doc.get_info();
    let total = info.page_count;

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", total);

    if let Some(title) = &info.title {
        println!("Title: {}", title);
    }
    if let Some(author) = &info.author {
        println!("Author: {}", author);
    }

    if total == 0 {
        return Ok(());
    }

    println!("Splittable range: 1-{}", total);
    if total >= 5 {
        println!(
            "With cover trimming: 3-{} ({} inner page(s))",
            total - 2,
            total - 4
        );
    } else {
        println!("Cover trimming unavailable (needs at least 5 pages)");
    }

    Ok(())
}
