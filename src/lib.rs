//! diffhide — hide and unhide individual files on a GitHub pull-request
//! "Files changed" page.
//!
//! Each file row in the review file tree gets a Hide/Unhide button. Hidden
//! rows move into a "Hidden Files" holding area below the tree, their diff
//! panels are hidden with them, and folders whose files are all hidden
//! collapse automatically. The hidden set can be shared through a `#hide=`
//! URL fragment or a sessionStorage key.
//!
//! The crate is split into a pure engine (`core`, `models`) that compiles and
//! tests on any target, and a browser layer (`dom`, `session`, `utils`) that
//! talks to the host page through `web-sys`.

pub mod config;
pub mod core;
pub mod dom;
pub mod models;
pub mod session;
pub mod utils;

use wasm_bindgen::prelude::*;

/// Module entry point, invoked once the wasm module is loaded into the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    session::start();
}
