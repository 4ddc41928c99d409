pub mod binder;
pub mod element;
pub mod event;
pub mod query;

pub use binder::{
    close_all_modals, close_modal, open_modal, BindError, Binder, ACTIVE_CLASS, BURGER_CLASS,
    MODAL_CLASS, TARGET_ATTR, TRIGGER_CLASS,
};
pub use element::{find_element, find_element_mut, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use query::{ancestor_chain, closest, query_all, Selector};
