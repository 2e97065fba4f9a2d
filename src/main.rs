use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

mod catalog;
mod ceiling_editor;
mod config;
mod error;
mod notify;
mod pages;
mod zoom;

use pages::{Home, SizedGrid};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/grid/:width/:height")]
    SizedGrid { width: usize, height: usize },
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    info!("starting ceiling grid editor");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
