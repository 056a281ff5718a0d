//! Page planning
//!
//! This module computes the page units of an export run from the total
//! record count and the configured page size. Pure arithmetic, separated
//! out so the paging contract is testable without any I/O.

/// One planned page unit
///
/// A page has no identity beyond the offset that produces it; it is the
/// unit of concurrent work (fetch → transform each → store each).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Start offset into the full result set
    pub offset: u64,

    /// Number of records this page requests, `min(page_size, remaining)`
    pub max_results: u64,
}

/// Plan the page units for a run
///
/// `ceil(total / page_size)` pages at offsets `0, page_size, ...`; the
/// last page requests only the remainder.
///
/// # Examples
///
/// ```
/// use quarry::core::export::page::plan_pages;
///
/// let pages = plan_pages(120, 50);
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages[2].offset, 100);
/// assert_eq!(pages[2].max_results, 20);
/// ```
pub fn plan_pages(total: u64, page_size: u64) -> Vec<PagePlan> {
    if total == 0 || page_size == 0 {
        return Vec::new();
    }

    let page_count = total.div_ceil(page_size);

    (0..page_count)
        .map(|index| {
            let offset = index * page_size;
            PagePlan {
                offset,
                max_results: page_size.min(total - offset),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_plan_pages_with_remainder() {
        let pages = plan_pages(120, 50);

        assert_eq!(
            pages,
            vec![
                PagePlan {
                    offset: 0,
                    max_results: 50
                },
                PagePlan {
                    offset: 50,
                    max_results: 50
                },
                PagePlan {
                    offset: 100,
                    max_results: 20
                },
            ]
        );
    }

    #[test_case(0, 50, 0; "empty result set")]
    #[test_case(1, 50, 1; "single record")]
    #[test_case(50, 50, 1; "exact single page")]
    #[test_case(100, 50, 2; "exact multiple")]
    #[test_case(101, 50, 3; "one past a boundary")]
    fn page_counts(total: u64, page_size: u64, expected: usize) {
        assert_eq!(plan_pages(total, page_size).len(), expected);
    }

    #[test]
    fn test_every_page_requests_at_most_page_size() {
        for page in plan_pages(1234, 50) {
            assert!(page.max_results <= 50);
            assert!(page.max_results > 0);
        }
    }

    #[test]
    fn test_offsets_are_contiguous() {
        let pages = plan_pages(250, 100);
        let offsets: Vec<u64> = pages.iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![0, 100, 200]);
    }

    #[test]
    fn test_zero_page_size_plans_nothing() {
        assert!(plan_pages(100, 0).is_empty());
    }
}
