/// Visual classification of one rendered cell. Mapping classifications to
/// colors and styles is the rendering layer's concern; the session only
/// decides which of the four states a position is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVisual {
    Dead,
    Alive,
    /// The selection cursor sits on a live cell (paused only).
    SelectedAlive,
    /// The selection cursor sits on a dead cell (paused only).
    SelectedDead,
}

/// Renderable description of one frame, produced on demand by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// The viewport has no usable size yet.
    Loading,

    /// A classified grid plus the two reserved text lines.
    Grid {
        /// Row-major visual states, `grid_height` rows of `grid_width`.
        cells: Vec<Vec<CellVisual>>,
        /// Character columns each logical cell occupies, already clamped >= 1.
        cell_width: u16,
        /// Context-sensitive key legend, right-padded to the viewport width.
        help: String,
        /// Running state, refresh interval and live count, right-padded.
        status: String,
    },
}
