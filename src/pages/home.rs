use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::catalog::TOOLS;
use crate::ceiling_editor::{use_grid_handle, CeilingGrid, Toolbar};
use crate::config::{GridConfig, HOME_TILE_SIZE};
use crate::zoom::ZoomProvider;

#[component]
pub fn Home() -> Element {
    rsx! {
        EditorPage { config: GridConfig::home() }
    }
}

/// Editor with dimensions taken from the route. Bad values fall back to the
/// home layout.
#[component]
pub fn SizedGrid(width: usize, height: usize) -> Element {
    let config = match GridConfig::new(width, height, HOME_TILE_SIZE) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, width, height, "rejecting route dimensions");
            GridConfig::home()
        }
    };

    rsx! {
        EditorPage { config }
    }
}

#[component]
fn EditorPage(config: GridConfig) -> Element {
    let mut grid = use_grid_handle(config);

    rsx! {
        div {
            style: "min-height: 100vh; background: #f9fafb; font-family: system-ui; color: #1e293b; padding: 24px;",
            div {
                style: "max-width: 1280px; margin: 0 auto; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1); border-radius: 8px; overflow: hidden;",
                div { style: "display: flex; flex-wrap: wrap;",
                    aside {
                        style: "width: 288px; padding: 24px; border-right: 1px solid #f1f5f9;",
                        h2 { style: "margin: 0; font-size: 18px; font-weight: 600; color: #334155;", "Ceiling Grid Editor" }

                        div { style: "margin-top: 24px;",
                            Toolbar {}
                            button {
                                style: "margin-top: 12px; padding: 8px 12px; background: #fef2f2; color: #b91c1c; border-radius: 4px; border: 1px solid #fecaca;",
                                onclick: move |_| grid.clear_all(),
                                "Clear All"
                            }
                        }

                        Legend {}
                    }

                    main { style: "flex: 1; padding: 24px;",
                        ZoomProvider {
                            div { style: "padding: 40px; background: #f9fafb; width: 100%; height: 100%;",
                                CeilingGrid { handle: grid }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Legend() -> Element {
    rsx! {
        div { style: "margin-top: 24px;",
            label { style: "display: block; font-size: 12px; text-transform: uppercase; color: #94a3b8;", "Legend" }
            div { style: "margin-top: 8px; display: flex; flex-direction: column; gap: 8px;",
                for tool in TOOLS.iter() {
                    div { key: "{tool.label()}", style: "display: flex; align-items: center; gap: 12px;",
                        div {
                            style: "width: 32px; height: 32px; border-radius: 4px; display: flex; align-items: center; justify-content: center; font-size: 14px; font-weight: 600; background: {tool.background}; color: {tool.foreground};",
                            "{tool.initial()}"
                        }
                        div { style: "font-size: 14px; color: #334155;", "{tool.label()}" }
                    }
                }
            }
        }
    }
}
