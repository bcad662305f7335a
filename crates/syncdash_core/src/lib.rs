//! Syncdash core: pure snapshot model and render projections.
mod render;
mod snapshot;
mod surface;
mod units;
mod view;

pub use render::{
    flatten_logs, render_collection, render_current_job, render_header, render_logs, render_queue,
    render_snapshot, render_units, IDLE_JOB_MESSAGE, NO_COLLECTION_MESSAGE, UNDEFINED_COUNT,
};
pub use snapshot::{CollectionItem, CollectionView, ItemStatus, Job, QueueCounts, Snapshot};
pub use surface::{RowView, Surface, SurfaceOp, Tone};
pub use units::{unit_display_name, UnitHealth, UNIT_PREFIX};
pub use view::{ViewSwitcher, VIEW_COLLECTION, VIEW_DASHBOARD, VIEW_LOGS};
