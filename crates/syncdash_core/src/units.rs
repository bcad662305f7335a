/// Prefix shared by the supervised service units; stripped for display.
pub const UNIT_PREFIX: &str = "media-sync-";

/// Health classification for a service unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitHealth {
    Active,
    Failed,
    Inactive,
}

impl UnitHealth {
    /// Any status string other than exactly `active` or `failed` counts as
    /// inactive (e.g. `activating`, `not-found`, `unknown`).
    pub fn classify(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "failed" => Self::Failed,
            _ => Self::Inactive,
        }
    }
}

/// Derives a short display name from a raw unit identifier.
///
/// `media-sync-reconcile.service` becomes `reconcile`; a `.path` unit keeps
/// its base name with a ` (path)` marker.
pub fn unit_display_name(unit: &str) -> String {
    let name = unit.strip_prefix(UNIT_PREFIX).unwrap_or(unit);
    if let Some(base) = name.strip_suffix(".service") {
        return base.to_string();
    }
    if let Some(base) = name.strip_suffix(".path") {
        return format!("{base} (path)");
    }
    name.to_string()
}
