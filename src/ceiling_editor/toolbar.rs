use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::drag_data;
use crate::catalog::{Tool, TOOLS};

/// Palette of draggable tools. Dragging one puts its identifier on the drag.
#[component]
pub fn Toolbar() -> Element {
    rsx! {
        div {
            label { style: "display: block; font-size: 12px; color: #94a3b8; margin: 8px 0;", "Tools (visual)" }
            div { style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for tool in TOOLS.iter() {
                    ToolButton { key: "{tool.label()}", tool: *tool }
                }
            }
        }
    }
}

#[component]
fn ToolButton(tool: Tool) -> Element {
    let label = tool.label();

    rsx! {
        button {
            draggable: true,
            title: "Drag to drop or click to select {label}",
            style: "
                padding: 8px 12px;
                border-radius: 4px;
                font-size: 14px;
                border: 1px solid #cbd5e1;
                display: flex;
                align-items: center;
                gap: 8px;
                background: {tool.background};
                color: {tool.foreground};
                cursor: grab;
            ",
            ondragstart: move |evt: DragEvent| {
                drag_data::write_payload(&evt, tool.kind);
                debug!(component = %tool.kind, "palette drag started");
            },
            ondragend: move |_| drag_data::finish_drag(),
            span { "{label}" }
        }
    }
}
