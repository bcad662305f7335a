use indexmap::IndexMap;
use serde::Deserialize;

/// Aggregate of all polled data consumed by one cycle's renderers.
///
/// Built once per poll cycle and never mutated after construction. When
/// `alive` is false every other field is default/empty and must not be
/// presented as fresh data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub alive: bool,
    /// Raw unit statuses in arrival order from the backend.
    pub units: IndexMap<String, String>,
    pub queue_counts: QueueCounts,
    pub current_job: Option<Job>,
    /// Log lines grouped by source, in arrival order.
    pub logs: IndexMap<String, Vec<String>>,
    /// `None` when the collection resource was unavailable this cycle.
    pub collection: Option<CollectionView>,
}

impl Snapshot {
    /// Snapshot for a cycle whose essential fetches failed.
    pub fn offline() -> Self {
        Self::default()
    }
}

/// The single job currently being processed by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub filename: String,
    pub content: String,
    /// Modification time in epoch seconds (fractional on some backends).
    pub mtime: f64,
}

/// Per-state counts of the job queue. Fields missing from the response
/// deserialize to `None` and render as an undefined placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct QueueCounts {
    #[serde(default)]
    pub pending: Option<i64>,
    #[serde(default)]
    pub in_progress: Option<i64>,
    #[serde(default)]
    pub failed: Option<i64>,
    #[serde(default)]
    pub done: Option<i64>,
}

/// Collection inventory as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionView {
    /// The backend has no inventory file to report from.
    MissingFile,
    /// Inventory rows in backend order.
    Items(Vec<CollectionItem>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionItem {
    /// Raw status tag; displayed verbatim and classified via [`ItemStatus`].
    pub status: String,
    pub artist: String,
    pub title: String,
}

/// Four-way collection item classification used for row coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Downloaded,
    Pending,
    Failed,
    InProgress,
    /// Anything else the backend reports (e.g. `UNKNOWN`).
    Other,
}

impl ItemStatus {
    pub fn classify(raw: &str) -> Self {
        match raw {
            "DOWNLOADED" => Self::Downloaded,
            "PENDING" => Self::Pending,
            "FAILED" => Self::Failed,
            "IN_PROGRESS" => Self::InProgress,
            _ => Self::Other,
        }
    }
}
