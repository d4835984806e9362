use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tactile_common::time::Instant;
use tactile_common::types::InteractionId;

use crate::behavior::{is_finite_point, ControlBehavior};
use crate::error::TactileSurfaceError;
use crate::store::ControlStore;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GridMode {
    /// A touch-down flips the cell; the flipped value paints the drag
    #[default]
    Toggle,
    /// A touch-down forces the cell on; it clears when no interaction
    /// occupies it anymore
    Momentary,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellGridConfig {
    pub rows: usize,
    pub columns: usize,
    pub mode: GridMode,
    /// Affect only the first-touched cell for the interaction's lifetime
    pub static_selection: bool,
}

impl Default for CellGridConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            mode: GridMode::Toggle,
            static_selection: false,
        }
    }
}

/// Per-interaction drag state: the occupied cell, the value the drag paints,
/// and the value the cell held before this drag entered it.
#[derive(Debug, Clone)]
struct DragState {
    cell: usize,
    paint: bool,
    under: bool,
}

/// A rows x columns grid of boolean cells with drag-repaint semantics.
///
/// Each cell carries the set of interaction ids currently inside it, so
/// logically-concurrent touches painting different cells never corrupt each
/// other. A departed cell is restored only once its occupant set empties.
#[derive(Debug, Clone)]
pub struct CellGrid {
    store: ControlStore<bool>,
    rows: usize,
    columns: usize,
    mode: GridMode,
    static_selection: bool,
    occupants: Vec<HashSet<InteractionId>>,
    drags: HashMap<InteractionId, DragState>,
}

impl CellGrid {
    pub fn new(config: &CellGridConfig) -> Result<Self, TactileSurfaceError> {
        if config.rows == 0 || config.columns == 0 {
            return Err(TactileSurfaceError::ZeroGridDimension {
                rows: config.rows,
                columns: config.columns,
            });
        }
        let count = config.rows * config.columns;
        Ok(Self {
            store: ControlStore::new(count, false),
            rows: config.rows,
            columns: config.columns,
            mode: config.mode,
            static_selection: config.static_selection,
            occupants: vec![HashSet::new(); count],
            drags: HashMap::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Flat element index of a (row, column) cell
    pub fn cell_index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn cell_at(&self, point: [f32; 2]) -> Option<usize> {
        if !is_finite_point(point) {
            return None;
        }
        let column = (self.columns as f32 * point[0].clamp(0.0, 1.0)).floor() as usize;
        let row = (self.rows as f32 * point[1].clamp(0.0, 1.0)).floor() as usize;
        Some(self.cell_index(row.min(self.rows - 1), column.min(self.columns - 1)))
    }

    /// Drop an interaction from a cell and restore the cell once vacant.
    ///
    /// Toggle drags restore the pre-entry value (the paint travels with the
    /// pointer); momentary cells always clear when their occupant set
    /// empties, regardless of selection mode.
    fn vacate(&mut self, interaction: InteractionId, drag: &DragState, committing: bool) {
        self.occupants[drag.cell].remove(&interaction);
        if !self.occupants[drag.cell].is_empty() {
            return;
        }
        match self.mode {
            GridMode::Toggle => {
                if !committing {
                    self.store.write(drag.cell, drag.under);
                }
            }
            GridMode::Momentary => {
                self.store.write(drag.cell, false);
            }
        }
    }

    fn enter(&mut self, interaction: InteractionId, cell: usize, paint: bool) {
        let under = *self.store.value(cell);
        self.occupants[cell].insert(interaction);
        self.store.write(cell, paint);
        self.drags.insert(
            interaction,
            DragState {
                cell,
                paint,
                under,
            },
        );
    }
}

impl ControlBehavior for CellGrid {
    type Value = bool;

    fn on_start(&mut self, interaction: InteractionId, point: [f32; 2], _now: Instant) {
        let Some(cell) = self.cell_at(point) else {
            return;
        };
        // A re-start for an id that never ended releases the stale drag first
        if let Some(stale) = self.drags.remove(&interaction) {
            self.vacate(interaction, &stale, true);
        }
        let paint = match self.mode {
            GridMode::Toggle => !*self.store.value(cell),
            GridMode::Momentary => true,
        };
        self.enter(interaction, cell, paint);
    }

    fn on_move(&mut self, interaction: InteractionId, point: [f32; 2]) {
        if self.static_selection {
            return;
        }
        let Some(drag) = self.drags.get(&interaction).cloned() else {
            return;
        };
        let Some(cell) = self.cell_at(point) else {
            return;
        };
        if cell == drag.cell {
            return;
        }
        self.vacate(interaction, &drag, false);
        self.enter(interaction, cell, drag.paint);
    }

    fn on_end(&mut self, interaction: InteractionId) {
        let Some(drag) = self.drags.remove(&interaction) else {
            return;
        };
        self.vacate(interaction, &drag, true);
    }

    fn store(&self) -> &ControlStore<bool> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ControlStore<bool> {
        &mut self.store
    }
}
