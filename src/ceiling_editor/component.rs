use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::drag_data;
use super::grid::{Cell, GridEditor};
use crate::catalog::ComponentKind;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::notify;

/// Owner-side handle to one editor's state.
///
/// The page creates it with [`use_grid_handle`], passes it to [`CeilingGrid`]
/// and keeps a copy for controls that act on the whole grid.
#[derive(Clone, Copy, PartialEq)]
pub struct GridHandle {
    editor: Signal<GridEditor>,
    tile_size: u32,
}

impl GridHandle {
    pub fn clear_all(&mut self) {
        self.editor.write().clear_all();
    }
}

pub fn use_grid_handle(config: GridConfig) -> GridHandle {
    let GridConfig { width, height, .. } = config;
    let mut editor = use_signal(|| GridEditor::new(width, height));
    // Same page, new route dimensions: start a fresh grid.
    use_effect(use_reactive!(|(width, height)| {
        let current = editor.peek();
        if (current.width(), current.height()) != (width, height) {
            drop(current);
            editor.set(GridEditor::new(width, height));
        }
    }));
    GridHandle {
        editor,
        tile_size: config.tile_size,
    }
}

#[component]
pub fn CeilingGrid(handle: GridHandle) -> Element {
    let state = handle.editor.read();
    let width = state.width();
    let height = state.height();
    let tile = handle.tile_size;

    rsx! {
        div {
            class: "ceiling-grid",
            style: "
                display: grid;
                background: white;
                grid-template-columns: repeat({width}, {tile}px);
                grid-template-rows: repeat({height}, {tile}px);
            ",
            for cell in state.cells().iter() {
                GridTile { key: "{cell.x}-{cell.y}", handle, cell: *cell }
            }
        }
    }
}

#[component]
fn GridTile(handle: GridHandle, cell: Cell) -> Element {
    let Cell { x, y, component } = cell;
    let tile = handle.tile_size;

    rsx! {
        div {
            class: "ceiling-tile",
            style: "
                width: {tile}px;
                height: {tile}px;
                box-sizing: border-box;
                border: 1px solid #e5e7eb;
                display: flex;
                align-items: center;
                justify-content: center;
                cursor: pointer;
                user-select: none;
            ",
            draggable: component.is_some(),
            ondragstart: move |evt: DragEvent| {
                if let Some(kind) = start_dragging(handle, x, y) {
                    drag_data::write_payload(&evt, kind);
                }
            },
            ondragover: move |evt: DragEvent| drag_data::accept_drop(&evt),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                drop_on_cell(handle, x, y, drag_data::read_payload(&evt));
            },
            ondragend: move |_| stop_dragging(handle),

            if let Some(kind) = component {
                Marker { kind }
            }
        }
    }
}

#[component]
fn Marker(kind: ComponentKind) -> Element {
    let tool = kind.tool();

    rsx! {
        div {
            style: "
                width: 32px;
                height: 32px;
                border-radius: 4px;
                background: {tool.background};
                color: {tool.foreground};
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 12px;
                font-weight: 600;
            ",
            title: "{kind}",
            "{tool.glyph}"
        }
    }
}

fn start_dragging(mut handle: GridHandle, x: usize, y: usize) -> Option<ComponentKind> {
    handle.editor.write().on_drag_start(x, y)
}

fn stop_dragging(mut handle: GridHandle) {
    handle.editor.write().on_drag_end();
    drag_data::finish_drag();
}

fn drop_on_cell(mut handle: GridHandle, x: usize, y: usize, payload: Option<String>) {
    let result = handle.editor.write().on_drop(x, y, payload.as_deref());
    match result {
        Ok(_) => {}
        Err(err @ GridError::InvalidTarget { .. }) => notify::alert(&err.to_string()),
        Err(err) => debug!(%err, "drop ignored"),
    }
}
