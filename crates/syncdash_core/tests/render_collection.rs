use std::sync::Once;

use syncdash_core::{
    render_collection, CollectionItem, CollectionView, RowView, Surface, SurfaceOp, Tone,
    NO_COLLECTION_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dash_logging::initialize_for_tests);
}

fn rows_of(ops: &[SurfaceOp], surface: Surface) -> &[RowView] {
    ops.iter()
        .find_map(|op| match op {
            SurfaceOp::SetRows { surface: s, rows } if *s == surface => Some(rows.as_slice()),
            _ => None,
        })
        .expect("rows op for surface")
}

fn warning_of(ops: &[SurfaceOp], surface: Surface) -> bool {
    ops.iter()
        .find_map(|op| match op {
            SurfaceOp::SetVisible {
                surface: s,
                visible,
            } if *s == surface => Some(*visible),
            _ => None,
        })
        .expect("visibility op for surface")
}

fn item(status: &str, artist: &str, title: &str) -> CollectionItem {
    CollectionItem {
        status: status.to_string(),
        artist: artist.to_string(),
        title: title.to_string(),
    }
}

#[test]
fn missing_file_shows_placeholder_row_and_both_warnings() {
    init_logging();
    let ops = render_collection(&CollectionView::MissingFile);

    for body in [Surface::CollectionBody, Surface::DashboardCollectionBody] {
        let rows = rows_of(&ops, body);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells, vec![NO_COLLECTION_MESSAGE]);
    }
    assert!(warning_of(&ops, Surface::CollectionWarning));
    assert!(warning_of(&ops, Surface::DashboardCollectionWarning));
}

#[test]
fn empty_inventory_shows_zero_rows_and_hides_both_warnings() {
    init_logging();
    let ops = render_collection(&CollectionView::Items(Vec::new()));

    for body in [Surface::CollectionBody, Surface::DashboardCollectionBody] {
        assert!(rows_of(&ops, body).is_empty());
    }
    assert!(!warning_of(&ops, Surface::CollectionWarning));
    assert!(!warning_of(&ops, Surface::DashboardCollectionWarning));
}

#[test]
fn item_rows_are_toned_by_status_with_default_for_unknown() {
    init_logging();
    let view = CollectionView::Items(vec![
        item("DOWNLOADED", "Ana", "First"),
        item("PENDING", "Ben", "Second"),
        item("FAILED", "Cleo", "Third"),
        item("IN_PROGRESS", "Dia", "Fourth"),
        item("UNKNOWN", "Eve", "Fifth"),
    ]);

    let ops = render_collection(&view);
    let rows = rows_of(&ops, Surface::CollectionBody);

    let tones: Vec<Tone> = rows.iter().map(|row| row.tone).collect();
    assert_eq!(
        tones,
        vec![
            Tone::Downloaded,
            Tone::Pending,
            Tone::Failed,
            Tone::InProgress,
            Tone::Muted,
        ]
    );
    // Raw status text is displayed verbatim, next to artist and title.
    assert_eq!(rows[0].cells, vec!["DOWNLOADED", "Ana", "First"]);
    assert_eq!(rows[4].cells, vec!["UNKNOWN", "Eve", "Fifth"]);
}

#[test]
fn both_body_targets_receive_identical_rows() {
    init_logging();
    let view = CollectionView::Items(vec![item("PENDING", "Ana", "First")]);

    let ops = render_collection(&view);

    assert_eq!(
        rows_of(&ops, Surface::CollectionBody),
        rows_of(&ops, Surface::DashboardCollectionBody)
    );
}
