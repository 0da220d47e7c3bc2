use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("No start pages given: expected a comma-separated list of page numbers >= 1")]
    EmptyOrMalformedPageList,
    #[error("Document has {total} page(s); cover trimming needs at least 5")]
    InvalidTrimPolicy { total: u32 },
    #[error("No valid start pages fall inside the document")]
    NoValidRanges,
}

/// A contiguous run of pages, absolute 1-based, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    pub start: u32,
    pub end: u32,
}

/// The computed split: the working range, the spans to write (disjoint,
/// ordered by start), and any non-fatal warnings picked up along the way.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub work_start: u32,
    pub work_end: u32,
    pub spans: Vec<PageSpan>,
    pub warnings: Vec<String>,
}

impl SplitPlan {
    /// The start number encoded in a span's output filename. With cover
    /// trimming this is the 1-based position inside the trimmed inner
    /// range; without it (work_start = 1) it equals the absolute start.
    pub fn display_start(&self, span: PageSpan) -> u32 {
        span.start - (self.work_start - 1)
    }
}

/// Parse a comma-separated start-page list like "1,5,12,20".
///
/// Tokens that don't parse as an integer >= 1 are dropped; the survivors
/// are sorted and deduplicated. Fails only when nothing survives.
pub fn parse_start_pages(s: &str) -> Result<Vec<u32>, SplitError> {
    let mut pages: Vec<u32> = s
        .split(',')
        .filter_map(|tok| tok.trim().parse::<u32>().ok())
        .filter(|&p| p >= 1)
        .collect();
    pages.sort_unstable();
    pages.dedup();

    if pages.is_empty() {
        return Err(SplitError::EmptyOrMalformedPageList);
    }
    Ok(pages)
}

/// Compute the spans to cut a document of `total` pages into, one per
/// start page, each running up to the page before the next start (the
/// last one runs to the end of the working range).
///
/// With `trim_covers` the first two and last two pages are excluded and
/// `starts` are read as positions inside the remaining inner range;
/// otherwise they are absolute page numbers.
pub fn plan_split(total: u32, starts: &[u32], trim_covers: bool) -> Result<SplitPlan, SplitError> {
    let (work_start, work_end) = if trim_covers {
        if total < 5 {
            return Err(SplitError::InvalidTrimPolicy { total });
        }
        (3, total - 2)
    } else {
        (1, total)
    };

    let mut warnings = Vec::new();

    // Relative starts past the inner range are dropped; absolute starts
    // past the document are kept and fall out during span construction.
    let mut absolute: Vec<u32> = if trim_covers {
        let inner_count = work_end - work_start + 1;
        if starts.iter().any(|&r| r > inner_count) {
            warnings.push(format!(
                "some start pages exceed the inner range ({} page(s) after trimming)",
                inner_count
            ));
        }
        starts
            .iter()
            .filter(|&&r| r <= inner_count)
            .map(|&r| work_start + r - 1)
            .collect()
    } else {
        if starts.iter().any(|&p| p > total) {
            warnings.push(format!(
                "some start pages exceed the document ({} page(s) total)",
                total
            ));
        }
        starts.to_vec()
    };

    if absolute.is_empty() {
        return Err(SplitError::NoValidRanges);
    }

    absolute.sort_unstable();
    absolute.dedup();

    let mut spans = Vec::new();
    for (i, &start) in absolute.iter().enumerate() {
        let end = match absolute.get(i + 1) {
            Some(&next) => next - 1,
            None => work_end,
        };
        let span = PageSpan {
            start: start.max(work_start),
            end: end.min(work_end),
        };
        if span.start <= span.end {
            spans.push(span);
        }
    }

    if spans.is_empty() {
        return Err(SplitError::NoValidRanges);
    }

    Ok(SplitPlan {
        work_start,
        work_end,
        spans,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(plan: &SplitPlan) -> Vec<(u32, u32)> {
        plan.spans.iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_parse_simple_list() {
        assert_eq!(parse_start_pages("1,5,12,20").unwrap(), vec![1, 5, 12, 20]);
    }

    #[test]
    fn test_parse_sorts_and_dedupes() {
        assert_eq!(parse_start_pages("12, 5,5 ,1").unwrap(), vec![1, 5, 12]);
    }

    #[test]
    fn test_parse_drops_malformed_tokens() {
        assert_eq!(parse_start_pages("0,abc,3").unwrap(), vec![3]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(matches!(
            parse_start_pages(""),
            Err(SplitError::EmptyOrMalformedPageList)
        ));
        assert!(matches!(
            parse_start_pages("0, abc, -4"),
            Err(SplitError::EmptyOrMalformedPageList)
        ));
    }

    #[test]
    fn test_plan_without_trim() {
        let plan = plan_split(20, &[1, 5, 12, 20], false).unwrap();
        assert_eq!(spans(&plan), vec![(1, 4), (5, 11), (12, 19), (20, 20)]);
        assert!(plan.warnings.is_empty());

        let displays: Vec<u32> = plan
            .spans
            .iter()
            .map(|&s| plan.display_start(s))
            .collect();
        assert_eq!(displays, vec![1, 5, 12, 20]);
    }

    #[test]
    fn test_plan_with_trim() {
        // 20 pages, covers trimmed: working range [3,18], 16 inner pages.
        let plan = plan_split(20, &[1, 5, 10], true).unwrap();
        assert_eq!(plan.work_start, 3);
        assert_eq!(plan.work_end, 18);
        assert_eq!(spans(&plan), vec![(3, 6), (7, 11), (12, 18)]);

        let displays: Vec<u32> = plan
            .spans
            .iter()
            .map(|&s| plan.display_start(s))
            .collect();
        assert_eq!(displays, vec![1, 5, 10]);
    }

    #[test]
    fn test_trim_needs_five_pages() {
        assert!(matches!(
            plan_split(4, &[1], true),
            Err(SplitError::InvalidTrimPolicy { total: 4 })
        ));
        assert!(plan_split(5, &[1], true).is_ok());
    }

    #[test]
    fn test_trim_with_minimum_pages() {
        // Five pages leave a single inner page.
        let plan = plan_split(5, &[1], true).unwrap();
        assert_eq!(spans(&plan), vec![(3, 3)]);
        assert_eq!(plan.display_start(plan.spans[0]), 1);
    }

    #[test]
    fn test_trim_drops_starts_past_inner_range() {
        let plan = plan_split(20, &[1, 99], true).unwrap();
        assert_eq!(spans(&plan), vec![(3, 18)]);
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_trim_with_no_start_in_inner_range() {
        assert!(matches!(
            plan_split(20, &[17, 99], true),
            Err(SplitError::NoValidRanges)
        ));
    }

    #[test]
    fn test_start_past_total_kept_but_yields_no_span() {
        // Without trim, starts beyond the document stay in the set and
        // only drop out once start > end.
        let plan = plan_split(10, &[4, 15], false).unwrap();
        assert_eq!(spans(&plan), vec![(4, 10)]);
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_all_starts_past_total() {
        assert!(matches!(
            plan_split(10, &[15, 30], false),
            Err(SplitError::NoValidRanges)
        ));
    }

    #[test]
    fn test_spans_disjoint_and_ordered() {
        let plan = plan_split(50, &[9, 2, 30, 9, 17], false).unwrap();
        for pair in plan.spans.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
        let covered: u32 = plan.spans.iter().map(|s| s.end - s.start + 1).sum();
        assert!(covered <= 50);
        assert_eq!(plan.spans.first().unwrap().start, 2);
        assert_eq!(plan.spans.last().unwrap().end, 50);
    }

    #[test]
    fn test_trimmed_spans_stay_inside_working_range() {
        let plan = plan_split(30, &[1, 4, 9, 16], true).unwrap();
        for span in &plan.spans {
            assert!(span.start >= 3);
            assert!(span.end <= 28);
        }
    }
}
