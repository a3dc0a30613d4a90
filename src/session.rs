//! Process-wide session state and wiring.
//!
//! One [`Session`] owns every long-lived handle: the cached tree locator, the
//! live mutation-observer subscription, the toggle controller, the delegated
//! click listener, and the share-label reset timer. [`start`] and [`stop`]
//! are the documented lifecycle boundaries — an embedding shell calls them
//! around page navigations, and `start` always tears down the previous
//! session first so observers and listeners never accumulate.
//!
//! All user interaction funnels through one `click` listener on `document`;
//! [`ControlRole`] maps the clicked element to an action.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Element;

use crate::config::{
    FILE_ROW_QUERY, HOLDING_AREA_ID, RESTORE_SESSION_KEY, STATE_KEY_PREFIX, delays, labels,
};
use crate::core::sched::{BrowserTimers, DebounceSlot};
use crate::core::share;
use crate::core::toggle::ToggleController;
use crate::dom::locator::TreeLocator;
use crate::dom::observer::TreeObserver;
use crate::dom::rows;
use crate::dom::view::DomTreeView;
use crate::models::{ControlRole, PendingRestore, RestorePlan};
use crate::utils::{cache, dom};

struct Session {
    locator: Rc<RefCell<TreeLocator>>,
    controller: Rc<ToggleController<DomTreeView>>,
    observer: Option<TreeObserver>,
    click_hook: Option<Closure<dyn FnMut(web_sys::Event)>>,
    share_reset: DebounceSlot<BrowserTimers>,
    restore_started: Cell<bool>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn with_session<R>(f: impl FnOnce(&Session) -> R) -> Option<R> {
    SESSION.with(|cell| cell.borrow().as_ref().map(f))
}

/// Initialize the session: install the delegated click listener and start
/// polling for the file tree. Tears down any previous session first.
pub fn start() {
    stop();

    let Some(document) = dom::document() else {
        dom::warn("diffhide: no document available; not starting");
        return;
    };

    let locator = Rc::new(RefCell::new(TreeLocator::new()));
    let controller = Rc::new(ToggleController::new(DomTreeView::new(Rc::clone(&locator))));

    let hook = Closure::wrap(
        Box::new(|event: web_sys::Event| handle_click(&event)) as Box<dyn FnMut(web_sys::Event)>
    );
    if document
        .add_event_listener_with_callback("click", hook.as_ref().unchecked_ref())
        .is_err()
    {
        dom::warn("diffhide: failed to install click listener");
    }

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(Session {
            locator,
            controller,
            observer: None,
            click_hook: Some(hook),
            share_reset: DebounceSlot::new(BrowserTimers),
            restore_started: Cell::new(false),
        });
    });
    dom::log("diffhide: session started");

    poll_for_tree();
}

/// Tear down the session: disconnect the observer, remove the click
/// listener, cancel pending timers, and drop the cached root.
pub fn stop() {
    SESSION.with(|cell| {
        let Some(mut session) = cell.borrow_mut().take() else {
            return;
        };
        if let Some(observer) = session.observer.take() {
            observer.stop();
        }
        session.share_reset.cancel();
        if let Some(hook) = session.click_hook.take()
            && let Some(document) = dom::document()
        {
            let _ = document
                .remove_event_listener_with_callback("click", hook.as_ref().unchecked_ref());
        }
        session.locator.borrow_mut().invalidate();
        dom::log("diffhide: session stopped");
    });
}

// =============================================================================
// Tree discovery and synchronization
// =============================================================================

/// Poll until one of the known tree containers exists. A missing tree is the
/// page still loading, not an error.
fn poll_for_tree() {
    let Some(located) = with_session(|s| s.locator.borrow_mut().locate(false)) else {
        return; // session stopped; let the poll chain die
    };
    match located {
        Some(root) => tree_ready(root),
        None => {
            Timeout::new(delays::TREE_POLL_MS, poll_for_tree).forget();
        }
    }
}

fn tree_ready(root: Element) {
    full_sync();
    rebind_observer(root);
    begin_restore();
}

fn rebind_observer(root: Element) {
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            if let Some(previous) = session.observer.take() {
                previous.stop();
            }
            session.observer = TreeObserver::start(&root, resync);
        }
    });
}

/// One debounced pass after a burst of host-page mutations: re-attach
/// missing controls, re-assert hidden state, recompute directories. If the
/// host replaced the whole tree root, move the subscription over first.
fn resync() {
    let Some(located) = with_session(|s| s.locator.borrow_mut().locate(false)) else {
        return;
    };
    let Some(root) = located else {
        return; // tree gone entirely; a navigation boundary re-enters via start()
    };
    let replaced = with_session(|s| {
        s.observer
            .as_ref()
            .is_none_or(|observer| !dom::same_element(&root, observer.root()))
    })
    .unwrap_or(false);
    if replaced {
        rebind_observer(root);
    }
    full_sync();
}

/// Bring controls and derived state in line with the currently-rendered
/// tree. Idempotent; runs on startup and after every observer resync.
fn full_sync() {
    with_session(|session| {
        let Some(root) = session.locator.borrow_mut().locate(false) else {
            return;
        };
        let Some(document) = dom::document() else {
            return;
        };

        let _ = rows::ensure_holding_area(&document, &root);
        rows::ensure_actions_bar(&document, &root);

        let mut scopes = vec![root.clone()];
        if let Some(holding) = document.get_element_by_id(HOLDING_AREA_ID) {
            scopes.push(holding);
        }
        let mut files = Vec::new();
        for scope in &scopes {
            for row in rows::file_rows_in(scope) {
                rows::ensure_control(&document, &row.element);
                files.push(row.path);
            }
        }
        let dirs = rows::directory_rows_in(&root)
            .into_iter()
            .map(|row| row.path)
            .collect();

        session.controller.observe_tree(files, dirs);
        rows::refresh_holding_visibility(&document);
    });
}

// =============================================================================
// Click dispatch
// =============================================================================

fn handle_click(event: &web_sys::Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Some(role) = ControlRole::from_identity(&target.id(), &target.class_name()) else {
        return;
    };
    match role {
        ControlRole::Hide | ControlRole::Unhide => {
            let hidden = role == ControlRole::Hide;
            let Ok(Some(row)) = target.closest(FILE_ROW_QUERY) else {
                return;
            };
            let Some(path) = rows::row_path(&row) else {
                return;
            };
            cooldown(&target);
            match with_session(|s| s.controller.toggle(&path, hidden)) {
                Some(Ok(true)) => save_snapshot(),
                Some(Err(error)) => dom::warn(&format!("diffhide: {}", error)),
                _ => {}
            }
        }
        ControlRole::ShowAll => {
            cooldown(&target);
            if let Some(shown) = with_session(|s| s.controller.show_all())
                && shown > 0
            {
                dom::log(&format!("diffhide: unhid {} files", shown));
                save_snapshot();
            }
        }
        ControlRole::Share => share_current(target),
    }
}

/// Disable a just-clicked control for the cool-down window, absorbing rapid
/// double clicks.
fn cooldown(control: &Element) {
    rows::set_enabled(control, false);
    let control = control.clone();
    Timeout::new(delays::TOGGLE_COOLDOWN_MS, move || {
        rows::set_enabled(&control, true);
    })
    .forget();
}

// =============================================================================
// Share
// =============================================================================

/// Encode the hidden set into the URL fragment and copy the page link to the
/// clipboard. The button label reports the outcome and reverts after a
/// delay; a second click replaces the pending revert.
fn share_current(button: Element) {
    let Some(token) = with_session(|session| {
        let known = session.controller.known_paths();
        let hidden: BTreeSet<String> = session.controller.hidden_paths().into_iter().collect();
        share::encode(&hidden, &known)
    }) else {
        return;
    };
    dom::replace_hash(&share::fragment_for(&token));

    let Some(href) = dom::current_href() else {
        share_feedback(button, false);
        return;
    };
    let Some(clipboard) = dom::window().map(|w| w.navigator().clipboard()) else {
        share_feedback(button, false);
        return;
    };
    spawn_local(async move {
        let ok = JsFuture::from(clipboard.write_text(&href)).await.is_ok();
        if !ok {
            dom::warn("diffhide: clipboard write rejected");
        }
        share_feedback(button, ok);
    });
}

fn share_feedback(button: Element, ok: bool) {
    button.set_text_content(Some(if ok { labels::SHARE_OK } else { labels::SHARE_ERR }));
    with_session(|session| {
        let button = button.clone();
        session
            .share_reset
            .schedule(delays::SHARE_LABEL_RESET_MS, move || {
                button.set_text_content(Some(labels::SHARE));
            });
    });
}

// =============================================================================
// Restore
// =============================================================================

/// Pick the restoration source, in precedence order: the one-shot session
/// key, then the `#hide=` fragment, then the per-page snapshot.
fn restore_plan() -> Option<RestorePlan> {
    if let Some(token) = cache::take_raw(RESTORE_SESSION_KEY) {
        return Some(RestorePlan::Indices(share::decode(&token)));
    }
    if let Some(token) = share::token_from_fragment(&dom::get_hash()) {
        return Some(RestorePlan::Indices(share::decode(&token)));
    }
    cache::get::<Vec<String>>(&state_key()).map(RestorePlan::Paths)
}

/// Runs once per session, after the tree is first located.
fn begin_restore() {
    let fresh = with_session(|s| !s.restore_started.replace(true)).unwrap_or(false);
    if !fresh {
        return;
    }
    let Some(plan) = restore_plan() else {
        return;
    };
    let pending = PendingRestore::new(plan);
    if !pending.is_empty() {
        attempt_restore(pending);
    }
}

/// Apply a pending restore, retrying on a timer while no file rows exist
/// yet. Entries that never resolve are skipped, not errors.
fn attempt_restore(mut pending: PendingRestore) {
    let outcome = with_session(|session| {
        let known = session.controller.known_paths();
        if known.is_empty() {
            return None; // rows not rendered yet
        }
        let paths = match &pending.plan {
            RestorePlan::Indices(indices) => share::resolve(indices, &known),
            RestorePlan::Paths(paths) => paths.clone(),
        };
        let mut applied = 0;
        for path in &paths {
            if matches!(session.controller.toggle(path, true), Ok(true)) {
                applied += 1;
            }
        }
        Some((applied, paths.len()))
    });
    match outcome {
        None => {} // session stopped; drop the pending restore
        Some(None) => {
            if pending.next_attempt() {
                Timeout::new(delays::RESTORE_RETRY_MS, move || attempt_restore(pending)).forget();
            } else {
                dom::warn("diffhide: file rows never appeared; abandoning hidden-state restore");
            }
        }
        Some(Some((applied, requested))) => {
            dom::log(&format!(
                "diffhide: restored hidden state for {} of {} entries",
                applied, requested
            ));
            save_snapshot();
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

fn state_key() -> String {
    format!(
        "{}{}",
        STATE_KEY_PREFIX,
        dom::current_pathname().unwrap_or_default()
    )
}

/// Persist the hidden set for this page into sessionStorage, so soft
/// navigations within the tab come back to the same view.
fn save_snapshot() {
    let Some(paths) = with_session(|s| s.controller.hidden_paths()) else {
        return;
    };
    if let Err(error) = cache::set(&state_key(), &paths) {
        dom::warn(&format!("diffhide: snapshot not saved: {}", error));
    }
}
