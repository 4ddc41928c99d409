use std::collections::HashMap;

use crate::element::{find_element, find_element_mut, Element};
use crate::event::{Event, Key};
use crate::query::{ancestor_chain, closest, query_all, Selector};

/// Class toggled to represent "visible/open" state.
pub const ACTIVE_CLASS: &str = "is-active";
/// Burger controls toggling the navigation menu.
pub const BURGER_CLASS: &str = "navbar-burger";
/// Elements whose click opens the modal named by their target attribute.
pub const TRIGGER_CLASS: &str = "js-modal-trigger";
/// Overlay dialogs; also the dismissal scope boundary.
pub const MODAL_CLASS: &str = "modal";
/// Attribute naming a toggle or modal target by element ID.
pub const TARGET_ATTR: &str = "data-target";

/// The four dismissal roles: background overlay, close icon, header
/// delete icon, footer button.
fn dismisser_selectors() -> [Selector; 4] {
    [
        Selector::class("modal-background"),
        Selector::class("modal-close"),
        Selector::descendant("modal-card-head", "delete"),
        Selector::descendant("modal-card-foot", "button"),
    ]
}

/// A referenced target element could not be resolved at bind time.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BindError {
    #[error("element '{element}' has no data-target attribute")]
    MissingTargetAttr { element: String },

    #[error("data-target '{target}' on '{element}' names no element")]
    TargetNotFound { element: String, target: String },

    #[error("dismisser '{element}' has no enclosing '.modal'")]
    OrphanDismisser { element: String },
}

/// Wires declarative class/attribute markup to class toggles.
///
/// [`Binder::bind`] scans the tree once, after it is fully built, and
/// records ID-to-ID tables for every burger control, modal trigger, and
/// modal dismisser it finds. [`Binder::handle_event`] then applies the
/// recorded wiring to click and key events. The binder never creates or
/// destroys elements; the tree is borrowed for every dispatch.
#[derive(Debug, Default)]
pub struct Binder {
    burgers: HashMap<String, String>,
    triggers: HashMap<String, String>,
    dismissers: HashMap<String, String>,
}

impl Binder {
    /// Scan the tree and wire every burger, trigger, and dismisser.
    ///
    /// A missing or dangling target attribute skips that one wiring
    /// with a warning; everything else still gets bound.
    pub fn bind(root: &Element) -> Self {
        let mut binder = Binder::default();

        for id in query_all(root, &Selector::class(BURGER_CLASS)) {
            match resolve_target(root, &id) {
                Ok(target) => {
                    binder.burgers.insert(id, target);
                }
                Err(err) => log::warn!("skipping burger wiring: {err}"),
            }
        }

        for id in query_all(root, &Selector::class(TRIGGER_CLASS)) {
            match resolve_target(root, &id) {
                Ok(target) => {
                    log::debug!("wiring click listener on '{id}' -> modal '{target}'");
                    binder.triggers.insert(id, target);
                }
                Err(err) => log::warn!("skipping trigger wiring: {err}"),
            }
        }

        for selector in dismisser_selectors() {
            for id in query_all(root, &selector) {
                match closest(root, &id, MODAL_CLASS) {
                    Some(modal) => {
                        binder.dismissers.insert(id, modal);
                    }
                    None => log::warn!(
                        "skipping dismisser wiring: {}",
                        BindError::OrphanDismisser { element: id }
                    ),
                }
            }
        }

        binder
    }

    /// Like [`Binder::bind`], but an unresolvable target is an error
    /// instead of a skipped wiring.
    pub fn try_bind(root: &Element) -> Result<Self, BindError> {
        validate(root)?;
        Ok(Self::bind(root))
    }

    /// Whether any wiring was recorded for the element.
    pub fn is_bound(&self, id: &str) -> bool {
        self.burgers.contains_key(id)
            || self.triggers.contains_key(id)
            || self.dismissers.contains_key(id)
    }

    /// Dispatch one input event against the tree.
    ///
    /// Clicks propagate from the clicked element up through its
    /// ancestors, firing every wiring on the path, so a click on a
    /// descendant of a bound element still counts. Escape closes all
    /// modals; other keys are ignored. Clicks with no target, or a
    /// target absent from the tree, are no-ops.
    pub fn handle_event(&self, root: &mut Element, event: &Event) {
        match event {
            Event::Key {
                key: Key::Escape, ..
            } => close_all_modals(root),
            Event::Key { .. } => {}
            Event::Click {
                target: Some(target),
                ..
            } => {
                for id in ancestor_chain(root, target) {
                    self.fire(root, &id);
                }
            }
            Event::Click { target: None, .. } => {}
        }
    }

    fn fire(&self, root: &mut Element, id: &str) {
        if let Some(target) = self.burgers.get(id) {
            if let Some(el) = find_element_mut(root, id) {
                el.toggle_class(ACTIVE_CLASS);
            }
            if let Some(el) = find_element_mut(root, target) {
                el.toggle_class(ACTIVE_CLASS);
            }
        }

        if let Some(modal) = self.triggers.get(id) {
            log::debug!("trigger '{id}' opening modal '{modal}'");
            open_modal(root, modal);
        }

        if let Some(modal) = self.dismissers.get(id) {
            close_modal(root, modal);
        }
    }
}

/// Show a modal by adding the active class. Idempotent.
pub fn open_modal(root: &mut Element, id: &str) {
    if let Some(el) = find_element_mut(root, id) {
        el.add_class(ACTIVE_CLASS);
    }
}

/// Hide a modal by removing the active class. Idempotent.
pub fn close_modal(root: &mut Element, id: &str) {
    if let Some(el) = find_element_mut(root, id) {
        el.remove_class(ACTIVE_CLASS);
    }
}

/// Close every element carrying the modal class.
/// Safe to call when zero modals are open.
pub fn close_all_modals(root: &mut Element) {
    for id in query_all(root, &Selector::class(MODAL_CLASS)) {
        close_modal(root, &id);
    }
}

fn resolve_target(root: &Element, id: &str) -> Result<String, BindError> {
    let target = find_element(root, id)
        .and_then(|el| el.get_data(TARGET_ATTR))
        .cloned()
        .ok_or_else(|| BindError::MissingTargetAttr {
            element: id.to_string(),
        })?;

    if find_element(root, &target).is_none() {
        return Err(BindError::TargetNotFound {
            element: id.to_string(),
            target,
        });
    }

    Ok(target)
}

fn validate(root: &Element) -> Result<(), BindError> {
    let controls = query_all(root, &Selector::class(BURGER_CLASS))
        .into_iter()
        .chain(query_all(root, &Selector::class(TRIGGER_CLASS)));
    for id in controls {
        resolve_target(root, &id)?;
    }

    for selector in dismisser_selectors() {
        for id in query_all(root, &selector) {
            if closest(root, &id, MODAL_CLASS).is_none() {
                return Err(BindError::OrphanDismisser { element: id });
            }
        }
    }

    Ok(())
}
