use crate::pdf::PdfDocument;
use crate::split_plan::{parse_start_pages, plan_split};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct SplitReport {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

pub fn run<P: AsRef<Path>>(
    input: P,
    output_dir: Option<&Path>,
    pages: &str,
    trim_covers: bool,
) -> Result<()> {
    let input = input.as_ref();
    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_output_dir(input),
    };

    let report = split_to_dir(input, &output_dir, pages, trim_covers)?;

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    println!(
        "Wrote {} file(s) to {}",
        report.files.len(),
        output_dir.display()
    );

    Ok(())
}

/// The source file's directory, where output lands unless told otherwise
pub fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Cut `input` at the given start pages and write one PDF per range into
/// `output_dir` (created if missing), named `start_<N>` after each
/// range's display start number.
pub fn split_to_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    pages: &str,
    trim_covers: bool,
) -> Result<SplitReport> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    let starts = parse_start_pages(pages)?;

    let doc = PdfDocument::open(input)?;
    let total = doc.page_count();

    let plan = plan_split(total, &starts, trim_covers)?;
    log::debug!(
        "splitting {} ({} pages): working range {}-{}, {} range(s)",
        input.display(),
        total,
        plan.work_start,
        plan.work_end,
        plan.spans.len()
    );

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("pdf");

    let mut files = Vec::with_capacity(plan.spans.len());
    for &span in &plan.spans {
        // A start past the last page can only come from malformed input;
        // skip it rather than fail.
        if span.start > total {
            continue;
        }

        let page_list: Vec<u32> = (span.start..=span.end.min(total)).collect();
        let mut part = doc.extract_pages(&page_list)?;

        let output_path = output_dir.join(format!("start_{}.{}", plan.display_start(span), ext));
        PdfDocument::save(&mut part, &output_path)?;
        files.push(output_path);
    }

    Ok(SplitReport {
        files,
        warnings: plan.warnings,
    })
}
