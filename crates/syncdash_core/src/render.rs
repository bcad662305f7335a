use chrono::{Local, TimeZone};
use indexmap::IndexMap;

use crate::{
    CollectionItem, CollectionView, ItemStatus, Job, QueueCounts, RowView, Snapshot, Surface,
    SurfaceOp, Tone, UnitHealth,
};

/// Text shown in the job panel when the backend reports no active job.
pub const IDLE_JOB_MESSAGE: &str = "Idle. No active job.";
/// Placeholder row shown when the collection inventory is missing.
pub const NO_COLLECTION_MESSAGE: &str = "No collection data available.";
/// Rendered in a count slot whose value was absent from the response.
pub const UNDEFINED_COUNT: &str = "?";

/// Collection output goes to every registered body/warning target pair.
const COLLECTION_TARGETS: [(Surface, Surface); 2] = [
    (Surface::CollectionBody, Surface::CollectionWarning),
    (
        Surface::DashboardCollectionBody,
        Surface::DashboardCollectionWarning,
    ),
];

/// Projects one snapshot onto the full set of surface operations.
///
/// An offline snapshot produces only the header operation: no other facet
/// may reach a surface with stale data. `now` is the human-readable time of
/// the cycle, shown next to the online indicator.
pub fn render_snapshot(snapshot: &Snapshot, now: &str) -> Vec<SurfaceOp> {
    let mut ops = render_header(snapshot.alive, now);
    if !snapshot.alive {
        return ops;
    }
    ops.extend(render_units(&snapshot.units));
    ops.extend(render_queue(&snapshot.queue_counts));
    ops.extend(render_current_job(snapshot.current_job.as_ref()));
    ops.extend(render_logs(&snapshot.logs));
    if let Some(view) = &snapshot.collection {
        ops.extend(render_collection(view));
    }
    ops
}

pub fn render_header(alive: bool, now: &str) -> Vec<SurfaceOp> {
    let op = if alive {
        SurfaceOp::SetText {
            surface: Surface::HeaderStatus,
            text: format!("STATUS: ONLINE - {now}"),
            tone: Tone::Normal,
        }
    } else {
        SurfaceOp::SetText {
            surface: Surface::HeaderStatus,
            text: "STATUS: OFFLINE".to_string(),
            tone: Tone::Alert,
        }
    };
    vec![op]
}

/// One row per unit, in arrival order. No sorting.
pub fn render_units(units: &IndexMap<String, String>) -> Vec<SurfaceOp> {
    let rows = units
        .iter()
        .map(|(unit, raw)| {
            let tone = match UnitHealth::classify(raw) {
                UnitHealth::Active => Tone::Active,
                UnitHealth::Failed => Tone::Failed,
                UnitHealth::Inactive => Tone::Inactive,
            };
            RowView {
                cells: vec![crate::unit_display_name(unit), raw.clone()],
                tone,
            }
        })
        .collect();
    vec![SurfaceOp::SetRows {
        surface: Surface::UnitList,
        rows,
    }]
}

/// Writes the four counters verbatim into their fixed slots.
pub fn render_queue(counts: &QueueCounts) -> Vec<SurfaceOp> {
    fn slot(surface: Surface, value: Option<i64>) -> SurfaceOp {
        let text = value.map_or_else(|| UNDEFINED_COUNT.to_string(), |v| v.to_string());
        SurfaceOp::SetText {
            surface,
            text,
            tone: Tone::Normal,
        }
    }
    vec![
        slot(Surface::CountPending, counts.pending),
        slot(Surface::CountInProgress, counts.in_progress),
        slot(Surface::CountFailed, counts.failed),
        slot(Surface::CountDone, counts.done),
    ]
}

pub fn render_current_job(job: Option<&Job>) -> Vec<SurfaceOp> {
    let text = match job {
        None => IDLE_JOB_MESSAGE.to_string(),
        Some(job) => format!(
            "FILE: {}\nCONTENT: {}\nMODIFIED: {}",
            job.filename,
            job.content,
            format_local_timestamp(job.mtime)
        ),
    };
    vec![SurfaceOp::SetText {
        surface: Surface::JobDetails,
        text,
        tone: Tone::Normal,
    }]
}

/// Flattens grouped log lines into one `[source] line` sequence.
///
/// Ordering is source arrival order, then line order within each source; no
/// timestamp-based interleaving is attempted.
pub fn flatten_logs(logs: &IndexMap<String, Vec<String>>) -> String {
    let mut lines = Vec::new();
    for (source, entries) in logs {
        for line in entries {
            lines.push(format!("[{source}] {line}"));
        }
    }
    lines.join("\n")
}

/// The identical flattened text goes to both log surfaces; truncation is the
/// consuming surface's concern.
pub fn render_logs(logs: &IndexMap<String, Vec<String>>) -> Vec<SurfaceOp> {
    let text = flatten_logs(logs);
    vec![
        SurfaceOp::SetText {
            surface: Surface::MiniLogs,
            text: text.clone(),
            tone: Tone::Normal,
        },
        SurfaceOp::SetText {
            surface: Surface::FullLogs,
            text,
            tone: Tone::Normal,
        },
    ]
}

/// Renders the inventory to every body/warning target pair.
///
/// A missing inventory shows one placeholder row and the warning banner;
/// otherwise the banner is cleared and each item row is toned by its status
/// classification.
pub fn render_collection(view: &CollectionView) -> Vec<SurfaceOp> {
    let (rows, warn) = match view {
        CollectionView::MissingFile => (
            vec![RowView {
                cells: vec![NO_COLLECTION_MESSAGE.to_string()],
                tone: Tone::Muted,
            }],
            true,
        ),
        CollectionView::Items(items) => (items.iter().map(item_row).collect(), false),
    };
    let mut ops = Vec::with_capacity(COLLECTION_TARGETS.len() * 2);
    for (body, warning) in COLLECTION_TARGETS {
        ops.push(SurfaceOp::SetVisible {
            surface: warning,
            visible: warn,
        });
        ops.push(SurfaceOp::SetRows {
            surface: body,
            rows: rows.clone(),
        });
    }
    ops
}

fn item_row(item: &CollectionItem) -> RowView {
    let tone = match ItemStatus::classify(&item.status) {
        ItemStatus::Downloaded => Tone::Downloaded,
        ItemStatus::Pending => Tone::Pending,
        ItemStatus::Failed => Tone::Failed,
        ItemStatus::InProgress => Tone::InProgress,
        ItemStatus::Other => Tone::Muted,
    };
    RowView {
        cells: vec![item.status.clone(), item.artist.clone(), item.title.clone()],
        tone,
    }
}

fn format_local_timestamp(mtime: f64) -> String {
    Local
        .timestamp_opt(mtime as i64, 0)
        .single()
        .map_or_else(
            || "(invalid time)".to_string(),
            |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}
