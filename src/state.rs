//! Grid State Machine
//!
//! Pure pagination/sort/merge logic driving the profile grid.

use crate::models::ProfileRow;

/// Rows requested per page-fetch
pub const PAGE_LIMIT: u32 = 5;

/// Sort direction, serialized as the API's `order` query value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One (column key, direction) pair controlling fetch ordering
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub key: String,
    pub order: SortOrder,
}

/// Which request the (page, sort) effect should issue
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPlan {
    Unsorted { page: u32 },
    Sorted { page: u32, spec: SortSpec },
}

/// How a fetched page merges into the accumulated rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    Replace,
    Append,
}

/// Select the fetch strategy for the current page cursor and sort state.
///
/// Exactly one sort spec selects the sorted endpoint; page 0 of a sorted
/// fetch replaces the accumulated rows, later pages append. An empty sort
/// state selects the unsorted incremental fetch. Two or more specs produce
/// no plan at all.
pub fn plan_fetch(page: u32, sort: &[SortSpec]) -> Option<(FetchPlan, MergeMode)> {
    match sort {
        [] => Some((FetchPlan::Unsorted { page }, MergeMode::Append)),
        [spec] => {
            let mode = if page == 0 {
                MergeMode::Replace
            } else {
                MergeMode::Append
            };
            Some((
                FetchPlan::Sorted {
                    page,
                    spec: spec.clone(),
                },
                mode,
            ))
        }
        _ => None,
    }
}

/// Merge a fetched page into the accumulated rows, keyed by row id.
///
/// An incoming row whose id is already present overwrites that row in
/// place; new ids append in response order.
pub fn merge_rows(rows: &mut Vec<ProfileRow>, incoming: Vec<ProfileRow>, mode: MergeMode) {
    if mode == MergeMode::Replace {
        rows.clear();
    }
    for row in incoming {
        match rows.iter_mut().find(|existing| existing.id == row.id) {
            Some(existing) => *existing = row,
            None => rows.push(row),
        }
    }
}

/// Cycle a sortable column: none -> asc -> desc -> none.
///
/// At most one spec is ever produced; clicking a different column replaces
/// the active one.
pub fn cycle_sort(sort: &mut Vec<SortSpec>, key: &str) {
    match sort.iter().position(|spec| spec.key == key) {
        Some(i) if sort[i].order == SortOrder::Asc => sort[i].order = SortOrder::Desc,
        Some(i) => {
            sort.remove(i);
        }
        None => {
            sort.clear();
            sort.push(SortSpec {
                key: key.to_string(),
                order: SortOrder::Asc,
            });
        }
    }
}

/// Viewport-bottom test for the scroll handler
pub fn is_at_bottom(scroll_top: i32, client_height: i32, scroll_height: i32) -> bool {
    scroll_top + client_height >= scroll_height
}

/// Whether a settling fetch is still the latest-issued one.
/// Stale responses are dropped instead of overwriting newer state.
pub fn response_is_current(issued_seq: u64, latest_seq: u64) -> bool {
    issued_seq == latest_seq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(id: &str, name: &str) -> ProfileRow {
        let mut row = ProfileRow::default();
        row.id = id.to_string();
        row.qr_display_name = name.to_string();
        row
    }

    fn sort_by(key: &str, order: SortOrder) -> SortSpec {
        SortSpec {
            key: key.to_string(),
            order,
        }
    }

    #[test]
    fn test_unsorted_pages_append_in_order() {
        let mut rows = Vec::new();

        let (plan, mode) = plan_fetch(0, &[]).unwrap();
        assert_eq!(plan, FetchPlan::Unsorted { page: 0 });
        merge_rows(
            &mut rows,
            vec![make_row("a", "A"), make_row("b", "B")],
            mode,
        );

        let (_, mode) = plan_fetch(1, &[]).unwrap();
        merge_rows(
            &mut rows,
            vec![make_row("c", "C"), make_row("d", "D")],
            mode,
        );

        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_repeated_id_overwrites_instead_of_duplicating() {
        let mut rows = vec![make_row("a", "old"), make_row("b", "B")];
        merge_rows(
            &mut rows,
            vec![make_row("a", "new"), make_row("c", "C")],
            MergeMode::Append,
        );

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].qr_display_name, "new");
        assert_eq!(rows[2].id, "c");
    }

    #[test]
    fn test_sorted_page_zero_replaces() {
        let sort = [sort_by("standNo", SortOrder::Asc)];
        let (plan, mode) = plan_fetch(0, &sort).unwrap();

        assert_eq!(mode, MergeMode::Replace);
        match plan {
            FetchPlan::Sorted { page, spec } => {
                assert_eq!(page, 0);
                assert_eq!(spec.key, "standNo");
            }
            other => panic!("unexpected plan {:?}", other),
        }

        let mut rows = vec![make_row("stale", "S")];
        merge_rows(&mut rows, vec![make_row("a", "A")], mode);
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn test_sorted_later_pages_append() {
        let sort = [sort_by("qrDisplayName", SortOrder::Desc)];
        let (_, mode) = plan_fetch(2, &sort).unwrap();
        assert_eq!(mode, MergeMode::Append);
    }

    #[test]
    fn test_two_sort_specs_produce_no_plan() {
        let sort = [
            sort_by("standNo", SortOrder::Asc),
            sort_by("qrDisplayName", SortOrder::Desc),
        ];
        assert_eq!(plan_fetch(0, &sort), None);
    }

    #[test]
    fn test_sort_cycle() {
        let mut sort = Vec::new();

        cycle_sort(&mut sort, "standNo");
        assert_eq!(sort, [sort_by("standNo", SortOrder::Asc)]);

        cycle_sort(&mut sort, "standNo");
        assert_eq!(sort, [sort_by("standNo", SortOrder::Desc)]);

        cycle_sort(&mut sort, "standNo");
        assert!(sort.is_empty());

        // Clicking a different column replaces the active spec
        cycle_sort(&mut sort, "standNo");
        cycle_sort(&mut sort, "qrDisplayName");
        assert_eq!(sort, [sort_by("qrDisplayName", SortOrder::Asc)]);
    }

    #[test]
    fn test_scroll_short_of_bottom_is_not_at_bottom() {
        assert!(!is_at_bottom(100, 400, 600));
        assert!(is_at_bottom(200, 400, 600));
        // Fractional overshoot reported by some engines
        assert!(is_at_bottom(201, 400, 600));
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        assert!(response_is_current(3, 3));
        assert!(!response_is_current(2, 3));
    }
}
