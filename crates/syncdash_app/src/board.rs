use std::collections::HashMap;

use syncdash_core::{RowView, Surface, SurfaceOp, Tone};

/// Content of one registered surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SurfaceContent {
    #[default]
    Empty,
    Text {
        text: String,
        tone: Tone,
    },
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Cell {
    content: SurfaceContent,
    // Only meaningful for warning banners; starts hidden.
    visible: bool,
}

/// In-memory stand-in for the page: current content per registered surface.
///
/// The thin adapter between the pure render projections and the terminal
/// painter. Operations fully replace cell content (renderers never read
/// back), and operations targeting unregistered surfaces are skipped
/// silently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceBoard {
    cells: HashMap<Surface, Cell>,
}

impl SurfaceBoard {
    /// Board with every known surface registered.
    pub fn with_all_surfaces() -> Self {
        let mut board = Self::default();
        for surface in Surface::ALL {
            board.register(surface);
        }
        board
    }

    pub fn register(&mut self, surface: Surface) {
        self.cells.entry(surface).or_default();
    }

    /// Applies write instructions in order.
    pub fn apply(&mut self, ops: &[SurfaceOp]) {
        for op in ops {
            let Some(cell) = self.cells.get_mut(&op.surface()) else {
                continue;
            };
            match op {
                SurfaceOp::SetText { text, tone, .. } => {
                    cell.content = SurfaceContent::Text {
                        text: text.clone(),
                        tone: *tone,
                    };
                }
                SurfaceOp::SetRows { rows, .. } => {
                    cell.content = SurfaceContent::Rows(rows.clone());
                }
                SurfaceOp::SetVisible { visible, .. } => {
                    cell.visible = *visible;
                }
            }
        }
    }

    pub fn text(&self, surface: Surface) -> Option<(&str, Tone)> {
        match &self.cells.get(&surface)?.content {
            SurfaceContent::Text { text, tone } => Some((text.as_str(), *tone)),
            _ => None,
        }
    }

    pub fn rows(&self, surface: Surface) -> Option<&[RowView]> {
        match &self.cells.get(&surface)?.content {
            SurfaceContent::Rows(rows) => Some(rows.as_slice()),
            _ => None,
        }
    }

    pub fn is_visible(&self, surface: Surface) -> bool {
        self.cells
            .get(&surface)
            .map(|cell| cell.visible)
            .unwrap_or(false)
    }
}
