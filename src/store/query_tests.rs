use super::query::*;

// ── total_pages ───────────────────────────────────────────────

#[test]
fn test_total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
}

// ── paginate ──────────────────────────────────────────────────

#[test]
fn test_paginate_slices_pages() {
    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(paginate(&items, 1, 10), &items[0..10]);
    assert_eq!(paginate(&items, 2, 10), &items[10..20]);
    assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
}

#[test]
fn test_paginate_out_of_range_is_empty() {
    let items: Vec<u32> = (1..=5).collect();
    assert!(paginate(&items, 0, 10).is_empty());
    assert!(paginate(&items, 2, 10).is_empty());
    assert!(paginate::<u32>(&[], 1, 10).is_empty());
}

#[test]
fn test_paginate_covers_every_item_once() {
    let items: Vec<u32> = (0..37).collect();
    let pages = total_pages(items.len(), 10);
    let joined: Vec<u32> = (1..=pages)
        .flat_map(|p| paginate(&items, p, 10).iter().copied())
        .collect();
    assert_eq!(joined, items);
}

// ── Pagination ────────────────────────────────────────────────

#[test]
fn test_pagination_clamps_requested_page() {
    let p = Pagination::new(7, 25, 10);
    assert_eq!(p.current_page, 3);
    let p = Pagination::new(0, 25, 10);
    assert_eq!(p.current_page, 1);
    let p = Pagination::new(4, 0, 10);
    assert_eq!(p.current_page, 1);
    assert_eq!(p.total_pages, 0);
}

#[test]
fn test_pagination_flags() {
    let first = Pagination::new(1, 25, 10);
    assert!(first.has_next_page());
    assert!(!first.has_previous_page());

    let middle = Pagination::new(2, 25, 10);
    assert!(middle.has_next_page());
    assert!(middle.has_previous_page());

    let last = Pagination::new(3, 25, 10);
    assert!(!last.has_next_page());
    assert!(last.has_previous_page());
}

#[test]
fn test_shown_range() {
    assert_eq!(Pagination::new(1, 25, 10).shown_range(), Some((1, 10)));
    assert_eq!(Pagination::new(3, 25, 10).shown_range(), Some((21, 25)));
    assert_eq!(Pagination::new(1, 0, 10).shown_range(), None);
}
