//! Client-side paging over an already fetched list.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// One page of a list. `page` is 0-indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Slice `items` to the requested page, clamping `page` into range.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);
    let page = page.min(total_pages.saturating_sub(1));
    let start = (page * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_count,
        total_pages,
    }
}

/// Case-insensitive "contains" over several candidate fields. Blank query matches all.
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Descending order of API timestamps. RFC 3339 values compare as instants,
/// anything unparseable sorts after them by plain text.
pub fn newest_first(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| DateTime::parse_from_rfc3339(s).ok().map(|d| d.with_timezone(&Utc));
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_respects_offsets() {
        // 10:00+03:00 is 07:00 UTC, earlier than 08:00Z.
        assert_eq!(
            newest_first("2024-03-01T10:00:00+03:00", "2024-03-01T08:00:00Z"),
            Ordering::Greater
        );
        assert_eq!(newest_first("2024-03-01T08:00:00Z", "garbage"), Ordering::Less);
    }

    #[test]
    fn pages_are_sliced() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 9, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![5]);
    }

    #[test]
    fn empty_list() {
        let page = paginate::<u32>(&[], 0, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 0);
    }

    #[test]
    fn query_matching() {
        assert!(matches_query("", ["anything"]));
        assert!(matches_query("SHOP", ["my shop", "x"]));
        assert!(!matches_query("zzz", ["my shop", "x"]));
    }
}
