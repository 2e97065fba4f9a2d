use dioxus::logger::tracing::{debug, info, warn};

use crate::catalog::ComponentKind;
use crate::error::GridError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub component: Option<ComponentKind>,
}

/// The cell a grid-originated drag started from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSource {
    #[default]
    Idle,
    Armed {
        x: usize,
        y: usize,
        component: ComponentKind,
    },
}

/// What an accepted drop did to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Component came from the palette and landed on the target.
    Placed(ComponentKind),
    /// Component left its source cell for the target.
    Moved {
        from: (usize, usize),
        component: ComponentKind,
    },
    /// Dropped back onto the cell it was dragged from.
    Unchanged,
}

/// Cell matrix plus the transient drag state of one editor instance.
#[derive(Clone, Debug, PartialEq)]
pub struct GridEditor {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    drag_source: DragSource,
}

impl GridEditor {
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell { x, y, component: None }))
            .collect();
        Self {
            width,
            height,
            cells,
            drag_source: DragSource::Idle,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).ok().map(|i| &self.cells[i])
    }

    pub fn component_at(&self, x: usize, y: usize) -> Option<ComponentKind> {
        self.cell(x, y).and_then(|c| c.component)
    }

    pub fn drag_source(&self) -> DragSource {
        self.drag_source
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.component.is_none())
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn place(
        &mut self,
        x: usize,
        y: usize,
        component: Option<ComponentKind>,
    ) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i].component = component;
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.place(x, y, None)
    }

    pub fn clear_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.component = None;
        }
        self.drag_source = DragSource::Idle;
        info!(width = self.width, height = self.height, "grid cleared");
    }

    /// Arms the drag source from a cell. Empty or unknown cells leave it idle.
    pub fn on_drag_start(&mut self, x: usize, y: usize) -> Option<ComponentKind> {
        let component = self.component_at(x, y)?;
        self.drag_source = DragSource::Armed { x, y, component };
        debug!(x, y, %component, "drag started from grid");
        Some(component)
    }

    /// Called when a drag gesture ends, dropped or not.
    pub fn on_drag_end(&mut self) {
        if self.drag_source != DragSource::Idle {
            debug!("drag ended without drop, source reset");
        }
        self.drag_source = DragSource::Idle;
    }

    /// Resolves and applies a drop on `(x, y)`.
    ///
    /// The armed drag source wins over `payload`, which is only consulted for
    /// drags coming from the palette. The drag source is idle afterwards
    /// whatever the outcome.
    pub fn on_drop(
        &mut self,
        x: usize,
        y: usize,
        payload: Option<&str>,
    ) -> Result<DropOutcome, GridError> {
        let source = std::mem::take(&mut self.drag_source);
        let outcome = self.apply_drop(source, x, y, payload);
        match &outcome {
            Ok(outcome) => info!(x, y, ?outcome, "drop accepted"),
            Err(err) => warn!(x, y, %err, "drop rejected"),
        }
        outcome
    }

    fn apply_drop(
        &mut self,
        source: DragSource,
        x: usize,
        y: usize,
        payload: Option<&str>,
    ) -> Result<DropOutcome, GridError> {
        let target = self.index(x, y)?;
        if self.cells[target].component == Some(ComponentKind::Invalid) {
            return Err(GridError::InvalidTarget { x, y });
        }

        match source {
            DragSource::Armed {
                x: sx,
                y: sy,
                component,
            } => {
                if (sx, sy) == (x, y) {
                    self.cells[target].component = Some(component);
                    return Ok(DropOutcome::Unchanged);
                }
                self.cells[target].component = Some(component);
                self.clear(sx, sy)?;
                Ok(DropOutcome::Moved {
                    from: (sx, sy),
                    component,
                })
            }
            DragSource::Idle => {
                let text = payload.unwrap_or_default();
                let component = ComponentKind::from_payload(text)
                    .ok_or_else(|| GridError::UnknownComponent(text.to_string()))?;
                self.cells[target].component = Some(component);
                Ok(DropOutcome::Placed(component))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(placements: &[(usize, usize, ComponentKind)], w: usize, h: usize) -> GridEditor {
        let mut grid = GridEditor::new(w, h);
        for &(x, y, k) in placements {
            grid.place(x, y, Some(k)).unwrap();
        }
        grid
    }

    #[test]
    fn new_grid_has_one_empty_cell_per_coordinate() {
        let grid = GridEditor::new(3, 2);
        assert_eq!(grid.cells().len(), 6);
        assert!(grid.is_empty());
        for y in 0..2 {
            for x in 0..3 {
                let cell = grid.cell(x, y).unwrap();
                assert_eq!((cell.x, cell.y), (x, y));
            }
        }
        assert_eq!(grid.drag_source(), DragSource::Idle);
    }

    #[test]
    fn place_touches_only_the_target_cell() {
        let mut grid = GridEditor::new(4, 3);
        grid.place(2, 1, Some(ComponentKind::AirSupply)).unwrap();
        for cell in grid.cells() {
            let expected = if (cell.x, cell.y) == (2, 1) {
                Some(ComponentKind::AirSupply)
            } else {
                None
            };
            assert_eq!(cell.component, expected);
        }
    }

    #[test]
    fn place_overwrites_existing_component() {
        let mut grid = with(&[(0, 0, ComponentKind::Light)], 2, 2);
        grid.place(0, 0, Some(ComponentKind::AirReturn)).unwrap();
        assert_eq!(grid.component_at(0, 0), Some(ComponentKind::AirReturn));
    }

    #[test]
    fn out_of_bounds_place_is_rejected_without_change() {
        let mut grid = GridEditor::new(2, 2);
        let before = grid.clone();
        let err = grid.place(2, 0, Some(ComponentKind::Light)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn clear_all_empties_every_cell_and_keeps_dimensions() {
        let mut grid = with(
            &[
                (0, 0, ComponentKind::Light),
                (1, 1, ComponentKind::Invalid),
                (2, 0, ComponentKind::Delete),
            ],
            3,
            2,
        );
        grid.on_drag_start(0, 0);
        grid.clear_all();
        assert!(grid.is_empty());
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.drag_source(), DragSource::Idle);
    }

    #[test]
    fn drag_start_on_empty_cell_stays_idle() {
        let mut grid = GridEditor::new(2, 2);
        assert_eq!(grid.on_drag_start(1, 1), None);
        assert_eq!(grid.drag_source(), DragSource::Idle);
    }

    #[test]
    fn drag_start_arms_with_cell_contents() {
        let mut grid = with(&[(1, 0, ComponentKind::SmokeDetector)], 2, 2);
        grid.on_drag_start(1, 0);
        assert_eq!(
            grid.drag_source(),
            DragSource::Armed {
                x: 1,
                y: 0,
                component: ComponentKind::SmokeDetector
            }
        );
    }

    #[test]
    fn palette_drop_places_payload_component() {
        let mut grid = GridEditor::new(2, 2);
        let outcome = grid.on_drop(1, 0, Some("AirReturn")).unwrap();
        assert_eq!(outcome, DropOutcome::Placed(ComponentKind::AirReturn));
        assert_eq!(grid.component_at(1, 0), Some(ComponentKind::AirReturn));
    }

    #[test]
    fn grid_drag_moves_component_and_clears_source() {
        let mut grid = with(&[(0, 1, ComponentKind::Light)], 3, 3);
        grid.on_drag_start(0, 1);
        let outcome = grid.on_drop(2, 2, Some("Light")).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                from: (0, 1),
                component: ComponentKind::Light
            }
        );
        assert_eq!(grid.component_at(0, 1), None);
        assert_eq!(grid.component_at(2, 2), Some(ComponentKind::Light));
        assert_eq!(grid.drag_source(), DragSource::Idle);
    }

    #[test]
    fn armed_source_takes_precedence_over_payload() {
        let mut grid = with(&[(0, 0, ComponentKind::AirSupply)], 2, 2);
        grid.on_drag_start(0, 0);
        grid.on_drop(1, 1, Some("SmokeDetector")).unwrap();
        assert_eq!(grid.component_at(1, 1), Some(ComponentKind::AirSupply));
    }

    #[test]
    fn move_overwrites_occupied_target() {
        let mut grid = with(
            &[(0, 0, ComponentKind::Light), (1, 0, ComponentKind::Delete)],
            2,
            1,
        );
        grid.on_drag_start(0, 0);
        grid.on_drop(1, 0, None).unwrap();
        assert_eq!(grid.component_at(1, 0), Some(ComponentKind::Light));
        assert_eq!(grid.component_at(0, 0), None);
    }

    #[test]
    fn dropping_onto_itself_keeps_the_component() {
        let mut grid = with(&[(1, 1, ComponentKind::Light)], 2, 2);
        grid.on_drag_start(1, 1);
        let outcome = grid.on_drop(1, 1, None).unwrap();
        assert_eq!(outcome, DropOutcome::Unchanged);
        assert_eq!(grid.component_at(1, 1), Some(ComponentKind::Light));
        assert_eq!(grid.drag_source(), DragSource::Idle);
    }

    #[test]
    fn invalid_target_rejects_and_leaves_grid_unchanged() {
        let mut grid = with(
            &[(0, 0, ComponentKind::Light), (1, 0, ComponentKind::Invalid)],
            2,
            2,
        );
        grid.on_drag_start(0, 0);
        let snapshot = grid.cells().to_vec();

        let err = grid.on_drop(1, 0, Some("AirSupply")).unwrap_err();
        assert_eq!(err, GridError::InvalidTarget { x: 1, y: 0 });
        assert_eq!(err.to_string(), "the cell is invalid");
        assert_eq!(grid.cells(), snapshot.as_slice());
        assert_eq!(grid.drag_source(), DragSource::Idle);
    }

    #[test]
    fn invalid_marker_can_still_be_dragged_away() {
        let mut grid = with(&[(0, 0, ComponentKind::Invalid)], 2, 1);
        grid.on_drag_start(0, 0);
        grid.on_drop(1, 0, None).unwrap();
        assert_eq!(grid.component_at(0, 0), None);
        assert_eq!(grid.component_at(1, 0), Some(ComponentKind::Invalid));
    }

    #[test]
    fn malformed_payload_is_rejected_without_change() {
        let mut grid = with(&[(0, 0, ComponentKind::Light)], 2, 2);
        let err = grid.on_drop(0, 0, Some("Sprinkler")).unwrap_err();
        assert_eq!(err, GridError::UnknownComponent("Sprinkler".to_string()));
        assert_eq!(grid.component_at(0, 0), Some(ComponentKind::Light));

        let err = grid.on_drop(1, 1, None).unwrap_err();
        assert_eq!(err, GridError::UnknownComponent(String::new()));
        assert_eq!(grid.component_at(1, 1), None);
    }

    #[test]
    fn out_of_bounds_drop_resets_drag_source() {
        let mut grid = with(&[(0, 0, ComponentKind::Light)], 2, 2);
        grid.on_drag_start(0, 0);
        assert!(matches!(
            grid.on_drop(5, 5, None),
            Err(GridError::OutOfBounds { .. })
        ));
        assert_eq!(grid.component_at(0, 0), Some(ComponentKind::Light));
        assert_eq!(grid.drag_source(), DragSource::Idle);
    }

    #[test]
    fn abandoned_drag_does_not_leak_into_next_drop() {
        let mut grid = with(&[(0, 0, ComponentKind::Light)], 2, 2);
        grid.on_drag_start(0, 0);
        grid.on_drag_end();
        assert_eq!(grid.drag_source(), DragSource::Idle);

        grid.on_drop(1, 1, Some("AirSupply")).unwrap();
        assert_eq!(grid.component_at(0, 0), Some(ComponentKind::Light));
        assert_eq!(grid.component_at(1, 1), Some(ComponentKind::AirSupply));
    }

    #[test]
    fn two_by_two_walkthrough() {
        let mut grid = GridEditor::new(2, 2);

        grid.on_drop(0, 0, Some("Light")).unwrap();
        assert_eq!(grid.component_at(0, 0), Some(ComponentKind::Light));

        grid.on_drag_start(0, 0);
        grid.on_drop(1, 1, None).unwrap();
        assert_eq!(grid.component_at(0, 0), None);
        assert_eq!(grid.component_at(1, 1), Some(ComponentKind::Light));

        grid.clear_all();
        assert!(grid.cells().iter().all(|c| c.component.is_none()));
        assert_eq!(grid.cells().len(), 4);
    }
}
