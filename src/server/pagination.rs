use serde::Deserialize;

use super::deserializers::deserialize_lenient_page;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `?page=N` query string. Absent or non-numeric values fall back to
/// page 1 rather than rejecting the request.
#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    pub page: Option<usize>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }
}

/// Slice out the 1-indexed `page` of a full ordered result set. Out-of-range
/// pages (page 0 and anything whose start offset does not fit in a usize
/// included) come back empty, never as an error.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_at_most_ten_items() {
        let items: Vec<i64> = (1..=15).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<i64> = (1..=15).collect();
        assert_eq!(paginate(&items, 2), (11..=15).collect::<Vec<i64>>());
    }

    #[test]
    fn pages_concatenate_back_to_the_full_set() {
        let items: Vec<i64> = (1..=37).collect();
        let mut rebuilt = Vec::new();
        for page in 1..=4 {
            rebuilt.extend_from_slice(paginate(&items, page));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(&items, 2).is_empty());
        assert!(paginate(&items, 100).is_empty());
    }

    #[test]
    fn huge_page_numbers_are_out_of_range_not_an_overflow() {
        let items: Vec<i64> = (1..=15).collect();
        assert!(paginate(&items, usize::MAX).is_empty());
        // One past the largest page whose start offset still fits in a usize;
        // a wrapping multiply here would alias back onto page 1.
        assert!(paginate(&items, usize::MAX / QUESTIONS_PER_PAGE + 2).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(&items, 0).is_empty());
    }

    #[test]
    fn empty_set_has_no_pages() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }

    #[test]
    fn repeated_fetch_of_a_page_is_identical() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 2), paginate(&items, 2));
    }
}
