/// Named display surfaces the renderers may target.
///
/// Each renderer owns a disjoint subset; the adapter owning the real output
/// decides which surfaces exist and silently drops operations for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    HeaderStatus,
    UnitList,
    CountPending,
    CountInProgress,
    CountFailed,
    CountDone,
    JobDetails,
    MiniLogs,
    FullLogs,
    CollectionBody,
    CollectionWarning,
    DashboardCollectionBody,
    DashboardCollectionWarning,
}

impl Surface {
    /// Every surface the default page layout provides.
    pub const ALL: [Surface; 13] = [
        Surface::HeaderStatus,
        Surface::UnitList,
        Surface::CountPending,
        Surface::CountInProgress,
        Surface::CountFailed,
        Surface::CountDone,
        Surface::JobDetails,
        Surface::MiniLogs,
        Surface::FullLogs,
        Surface::CollectionBody,
        Surface::CollectionWarning,
        Surface::DashboardCollectionBody,
        Surface::DashboardCollectionWarning,
    ];
}

/// Semantic tone of a text cell or row; the painter maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    /// Offline indicator and similar alert states.
    Alert,
    Active,
    Failed,
    Inactive,
    Downloaded,
    Pending,
    InProgress,
    /// Default class for unrecognized statuses and placeholders.
    Muted,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<String>,
    pub tone: Tone,
}

/// One write instruction for the surface adapter.
///
/// Every variant fully replaces the targeted surface content, so applying
/// the same list twice leaves the board in the same state as applying it
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    SetText {
        surface: Surface,
        text: String,
        tone: Tone,
    },
    SetRows {
        surface: Surface,
        rows: Vec<RowView>,
    },
    SetVisible {
        surface: Surface,
        visible: bool,
    },
}

impl SurfaceOp {
    /// The surface this operation targets.
    pub fn surface(&self) -> Surface {
        match self {
            SurfaceOp::SetText { surface, .. }
            | SurfaceOp::SetRows { surface, .. }
            | SurfaceOp::SetVisible { surface, .. } => *surface,
        }
    }
}
