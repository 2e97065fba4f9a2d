use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::transform::{Point, ViewTransform};

/// Pan/zoom wrapper around arbitrary content, with its control row on top.
#[component]
pub fn ZoomProvider(
    children: Element,
    #[props(default = 1.0)] initial_scale: f64,
    #[props(default = 0.0)] initial_position_x: f64,
    #[props(default = 0.0)] initial_position_y: f64,
) -> Element {
    let mut transform = use_signal(|| {
        ViewTransform::new(
            initial_scale,
            Point::new(initial_position_x, initial_position_y),
        )
    });
    // Client rect of the viewport, for focus points.
    let mut frame = use_signal(|| (Point::ORIGIN, Point::ORIGIN));

    let view = transform.read();
    let content_style = view.css();
    let cursor = if view.pinned {
        "default"
    } else if view.is_panning() {
        "grabbing"
    } else {
        "grab"
    };
    drop(view);

    rsx! {
        ZoomControls { transform, frame }
        div {
            class: "zoom-viewport",
            style: "overflow: hidden; position: relative; width: 100%; height: 100%; cursor: {cursor};",
            onmounted: move |evt: MountedEvent| async move {
                if let Ok(rect) = evt.data().get_client_rect().await {
                    frame.set((
                        Point::new(rect.origin.x, rect.origin.y),
                        Point::new(rect.size.width, rect.size.height),
                    ));
                }
            },
            onmousedown: move |evt: MouseEvent| {
                let p = evt.client_coordinates();
                transform.write().begin_pan(Point::new(p.x, p.y));
            },
            onmousemove: move |evt: MouseEvent| {
                if !transform.read().is_panning() {
                    return;
                }
                let p = evt.client_coordinates();
                transform.write().pan_to(Point::new(p.x, p.y));
            },
            onmouseup: move |_| transform.write().end_pan(),
            onmouseleave: move |_| transform.write().end_pan(),
            // A native drag swallows the mouseup that would end the pan.
            ondragstart: move |_| transform.write().end_pan(),
            onwheel: move |evt: WheelEvent| {
                if transform.read().pinned {
                    return;
                }
                evt.prevent_default();
                let (origin, _) = *frame.read();
                let p = evt.client_coordinates();
                let delta = evt.delta().strip_units();
                transform
                    .write()
                    .wheel(delta.y, Point::new(p.x - origin.x, p.y - origin.y));
            },
            div {
                class: "zoom-content",
                style: "{content_style}",
                {children}
            }
        }
    }
}

#[component]
fn ZoomControls(mut transform: Signal<ViewTransform>, frame: Signal<(Point, Point)>) -> Element {
    let pinned = transform.read().pinned;
    let pin_bg = if pinned { "#fca5a5" } else { "#f1f5f9" };
    let center = move || {
        let (_, size) = *frame.read();
        Point::new(size.x / 2.0, size.y / 2.0)
    };

    rsx! {
        div { class: "tools", style: "margin-bottom: 8px;",
            label { style: "display: block; font-size: 12px; color: #94a3b8;", "Zoom" }
            div { style: "display: flex; align-items: center; gap: 8px;",
                button {
                    style: "width: 40px; height: 40px; border-radius: 4px; background: #f1f5f9; border: 1px solid #cbd5e1;",
                    onclick: move |_| transform.write().zoom_in(center()),
                    "+"
                }
                button {
                    style: "width: 40px; height: 40px; border-radius: 4px; background: #f1f5f9; border: 1px solid #cbd5e1;",
                    onclick: move |_| transform.write().zoom_out(center()),
                    "-"
                }
                button {
                    style: "width: 40px; height: 40px; border-radius: 4px; background: #f1f5f9; border: 1px solid #cbd5e1;",
                    onclick: move |_| transform.write().reset(),
                    "x"
                }
                button {
                    style: "padding: 8px 12px; border-radius: 4px; font-size: 14px; background: {pin_bg}; border: 1px solid #cbd5e1;",
                    onclick: move |_| {
                        transform.write().toggle_pin();
                        debug!(pinned = transform.read().pinned, "viewport pin toggled");
                    },
                    if pinned { "Pinned" } else { "Pin" }
                }
            }
        }
    }
}
