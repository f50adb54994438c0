//! Click-driven selection controller.
//!
//! Turns cell clicks into selections and moves. Transitions depend only on
//! the clicked location, the highlights the engine reported for the current
//! selection, and board occupancy.

use tracing::trace;

use crate::board::Location;
use crate::movegen::HighlightGrid;
use crate::session::{Session, SessionError};

/// Controller state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        origin: Location,
        highlights: HighlightGrid,
    },
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected; its highlights are now active.
    Selected { origin: Location, highlights: HighlightGrid },
    /// The selected piece moved onto a highlighted cell.
    Moved { from: Location, to: Location, captured: bool },
    /// A selection was dropped by clicking an empty, unhighlighted cell.
    Cleared,
    /// Nothing selected and nothing to select.
    Ignored,
}

/// Finite-state controller over `{Idle, Selected(origin)}`.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    selection: Selection,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drops any selection.
    pub fn reset(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Handles a click on `loc`.
    ///
    /// With a selection active, a highlighted cell moves the selected piece
    /// there. Otherwise an occupied cell becomes the new selection, and an
    /// empty cell clears the selection.
    pub fn click(&mut self, session: &mut Session, loc: Location) -> Result<ClickOutcome, SessionError> {
        if let Selection::Selected { origin, highlights } = &self.selection {
            if highlights.get(loc).is_any() {
                let from = *origin;
                let captured = session.move_piece(from, loc)?.is_some();
                self.selection = Selection::Idle;
                trace!(?from, to = ?loc, "click moved piece");
                return Ok(ClickOutcome::Moved { from, to: loc, captured });
            }
        }

        if session.board().at(loc).is_some() {
            let highlights = session.highlights_for(loc)?;
            self.selection = Selection::Selected {
                origin: loc,
                highlights: highlights.clone(),
            };
            trace!(origin = ?loc, "click selected piece");
            return Ok(ClickOutcome::Selected { origin: loc, highlights });
        }

        match std::mem::take(&mut self.selection) {
            Selection::Idle => Ok(ClickOutcome::Ignored),
            Selection::Selected { .. } => Ok(ClickOutcome::Cleared),
        }
    }
}
