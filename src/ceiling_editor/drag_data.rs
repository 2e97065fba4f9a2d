//! Plain-text drag payload shared between the palette and the grid.
//!
//! On the web the payload travels through the browser's `DataTransfer`.
//! Other renderers don't expose it, so the payload is kept in a global
//! signal for the duration of the gesture instead.

use dioxus::prelude::*;

use crate::catalog::ComponentKind;

pub const PAYLOAD_FORMAT: &str = "text/plain";
const EFFECT: &str = "copy";

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod channel {
    use dioxus::logger::tracing::warn;
    use dioxus::prelude::*;
    use dioxus::web::WebEventExt;

    fn transfer(evt: &DragEvent) -> Option<web_sys::DataTransfer> {
        evt.data().try_as_web_event()?.data_transfer()
    }

    pub fn write(evt: &DragEvent, text: &str) {
        let Some(dt) = transfer(evt) else {
            warn!("drag event carries no data transfer");
            return;
        };
        if let Err(err) = dt.set_data(super::PAYLOAD_FORMAT, text) {
            warn!(?err, "failed to write drag payload");
        }
        dt.set_effect_allowed(super::EFFECT);
    }

    pub fn read(evt: &DragEvent) -> Option<String> {
        transfer(evt)?.get_data(super::PAYLOAD_FORMAT).ok()
    }

    pub fn accept(evt: &DragEvent) {
        if let Some(dt) = transfer(evt) {
            dt.set_drop_effect(super::EFFECT);
        }
    }

    pub fn finish() {}
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
mod channel {
    use dioxus::prelude::*;

    static PAYLOAD: GlobalSignal<Option<String>> = Signal::global(|| None);

    pub fn write(_evt: &DragEvent, text: &str) {
        *PAYLOAD.write() = Some(text.to_string());
    }

    pub fn read(_evt: &DragEvent) -> Option<String> {
        PAYLOAD.read().clone()
    }

    pub fn accept(_evt: &DragEvent) {}

    pub fn finish() {
        *PAYLOAD.write() = None;
    }
}

/// Puts `kind`'s identifier on the drag with a copy hint.
pub fn write_payload(evt: &DragEvent, kind: ComponentKind) {
    channel::write(evt, kind.label());
}

pub fn read_payload(evt: &DragEvent) -> Option<String> {
    channel::read(evt)
}

/// Lets the element under the pointer receive the drop.
pub fn accept_drop(evt: &DragEvent) {
    evt.prevent_default();
    channel::accept(evt);
}

/// Forgets the payload once the gesture is over.
pub fn finish_drag() {
    channel::finish();
}
