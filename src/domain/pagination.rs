// src/domain/pagination.rs
use serde::Serialize;

/// Articles per listing page.
pub const PAGE_SIZE: u32 = 9;

pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size)).min(u64::from(u32::MAX)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Links for a pager: first, last, current and its neighbours, with a single
/// ellipsis standing in for every run of omitted pages.
pub fn page_links(current: u32, total_pages: u32) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let mut links = Vec::new();
    let mut previous = 0;
    for page in 1..=total_pages {
        let shown = page == 1 || page == total_pages || page.abs_diff(current) <= 1;
        if !shown {
            continue;
        }
        if previous != 0 && page - previous > 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(page));
        previous = page;
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(9, PAGE_SIZE), 1);
        assert_eq!(page_count(10, PAGE_SIZE), 2);
        assert_eq!(page_count(27, PAGE_SIZE), 3);
    }

    #[test]
    fn small_ranges_have_no_ellipsis() {
        assert_eq!(page_links(1, 1), vec![Page(1)]);
        assert_eq!(page_links(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_links(1, 0).is_empty());
    }

    #[test]
    fn gaps_collapse_to_one_ellipsis() {
        assert_eq!(
            page_links(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(page_links(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_links(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn single_missing_page_still_collapses() {
        assert_eq!(page_links(4, 5), vec![Page(1), Ellipsis, Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_links(99, 3), vec![Page(1), Page(2), Page(3)]);
    }
}
