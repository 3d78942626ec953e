//! Grid Columns
//!
//! Declarative column descriptors for the profile grid.

use crate::state::{SortOrder, SortSpec};

/// One grid column: API field key, header label, sortability
pub struct Column {
    pub key: &'static str,
    pub name: &'static str,
    pub sortable: bool,
}

/// Columns in display order. Keys match the API's field names so the
/// active sort spec can be passed through to the sorted endpoint as-is.
pub const COLUMNS: &[Column] = &[
    Column {
        key: "qrDisplayName",
        name: "QR Display Name",
        sortable: true,
    },
    Column {
        key: "shortCode",
        name: "Short Code",
        sortable: false,
    },
    Column {
        key: "standNo",
        name: "Stand No.",
        sortable: true,
    },
    Column {
        key: "location",
        name: "Location",
        sortable: false,
    },
    Column {
        key: "linkedContent",
        name: "Linked Content",
        sortable: false,
    },
    Column {
        key: "qrStatus",
        name: "QR Status",
        sortable: false,
    },
    Column {
        key: "downloadStatus",
        name: "Download Status",
        sortable: false,
    },
    Column {
        key: "format",
        name: "Format",
        sortable: false,
    },
    Column {
        key: "actions",
        name: "",
        sortable: false,
    },
];

/// Header indicator for a sortable column
pub fn sort_symbol(sort: &[SortSpec], key: &str) -> &'static str {
    match sort.iter().find(|spec| spec.key == key) {
        Some(spec) if spec.order == SortOrder::Asc => "▴",
        Some(_) => "▾",
        None => "↕",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_symbol_tracks_active_spec() {
        let sort = vec![SortSpec {
            key: "standNo".to_string(),
            order: SortOrder::Desc,
        }];
        assert_eq!(sort_symbol(&sort, "standNo"), "▾");
        assert_eq!(sort_symbol(&sort, "qrDisplayName"), "↕");
        assert_eq!(sort_symbol(&[], "standNo"), "↕");
    }
}
