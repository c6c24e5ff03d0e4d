//! Page selector planning.
//!
//! Produces at most nine tokens for any page count: the first two pages,
//! the last two, and a small window around the current page, with
//! ellipses for the gaps.

use serde::{Serialize, Serializer};

/// Text shown in place of skipped page numbers.
pub const ELLIPSIS: &str = "...";

/// Page counts up to this value list every page.
const LIST_ALL_THRESHOLD: usize = 8;

/// One entry in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A 1-based page number.
    Page(usize),
    /// A gap of one or more pages.
    Ellipsis,
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u64(*page as u64),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Number of pages needed for `total_items` (ceiling division).
///
/// Zero items, or a zero page size, means zero pages.
#[must_use]
pub const fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Plans the selector tokens for `current` out of `total_pages`.
#[must_use]
pub fn page_tokens(total_pages: usize, current: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    let n = total_pages;

    if n <= LIST_ALL_THRESHOLD {
        return (1..=n).map(Page).collect();
    }
    if current <= 4 {
        return vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(n - 1), Page(n)];
    }
    if current >= n - 3 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(n - 3),
            Page(n - 2),
            Page(n - 1),
            Page(n),
        ];
    }

    vec![
        Page(1),
        Page(2),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(n - 1),
        Page(n),
    ]
}

/// Returns `true` if moving from `current` to `requested` is a real
/// navigation: in range and not the page already shown.
#[must_use]
pub const fn is_navigable(requested: usize, current: usize, total_pages: usize) -> bool {
    requested >= 1 && requested <= total_pages && requested != current
}

/// Everything a page selector needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationControls {
    /// The page being shown.
    pub current: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Target of the "previous" button, `None` on the first page.
    pub prev: Option<usize>,
    /// Target of the "next" button, `None` on the last page.
    pub next: Option<usize>,
    /// Page numbers and gaps.
    pub tokens: Vec<PageToken>,
}

impl PaginationControls {
    /// Builds the controls, or `None` when there is at most one page and
    /// no selector should be shown.
    #[must_use]
    pub fn new(total_items: usize, page_size: usize, current: usize) -> Option<Self> {
        let total_pages = total_pages(total_items, page_size);
        if total_pages <= 1 {
            return None;
        }

        Some(Self {
            current,
            total_pages,
            prev: (current > 1).then(|| current - 1),
            next: (current < total_pages).then(|| current + 1),
            tokens: page_tokens(total_pages, current),
        })
    }
}
