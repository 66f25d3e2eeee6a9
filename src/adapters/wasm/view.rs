use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::domain::notification::{Notification, NotificationId, WidgetError};
use crate::ports::ViewPort;

use super::error_conversions::dom_error;

pub const LIST_CONTAINER_ID: &str = "notifications-list";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

type AckHandler = Rc<RefCell<Option<Rc<dyn Fn(NotificationId)>>>>;

/// A rendered node together with the click listener keeping it interactive.
/// Dropping this after the node left the document disposes the listener.
struct Rendered {
    node: Element,
    _onclick: Closure<dyn FnMut(Event)>,
}

/// DOM renderer over the two fixed containers.
///
/// Entry and toast nodes are kept in registries keyed by id, so removal
/// never queries the document and listener closures live exactly as long
/// as their nodes.
pub struct DomView {
    document: Document,
    list: Element,
    toasts: Element,
    ack: AckHandler,
    entries: RefCell<HashMap<String, Rendered>>,
    toast_nodes: RefCell<HashMap<String, Rendered>>,
}

impl DomView {
    /// Looks up both containers; they are assumed present in the page
    /// before the widget mounts.
    pub fn new(list_id: &str, toast_id: &str) -> Result<Self, WidgetError> {
        let window = super::window()?;
        let document = window
            .document()
            .ok_or_else(|| WidgetError::dom("no document on window"))?;
        let list = document
            .get_element_by_id(list_id)
            .ok_or_else(|| WidgetError::missing_container(list_id))?;
        let toasts = document
            .get_element_by_id(toast_id)
            .ok_or_else(|| WidgetError::missing_container(toast_id))?;

        Ok(Self {
            document,
            list,
            toasts,
            ack: Rc::new(RefCell::new(None)),
            entries: RefCell::new(HashMap::new()),
            toast_nodes: RefCell::new(HashMap::new()),
        })
    }

    /// Click listener dispatching into the ack handler current at click
    /// time, not at render time.
    fn onclick(&self, id: NotificationId) -> Closure<dyn FnMut(Event)> {
        let ack = Rc::clone(&self.ack);
        Closure::wrap(Box::new(move |_: Event| {
            let handler = ack.borrow().clone();
            if let Some(handler) = handler {
                handler(id.clone());
            }
        }) as Box<dyn FnMut(Event)>)
    }

    fn notification_body(&self, notification: &Notification) -> Result<Element, WidgetError> {
        let body = self.document.create_element("div").map_err(dom_error)?;

        let title = self.document.create_element("strong").map_err(dom_error)?;
        title.set_text_content(Some(notification.title_text()));
        let message = self.document.create_element("p").map_err(dom_error)?;
        message.set_text_content(Some(&notification.message));

        body.append_child(&title).map_err(dom_error)?;
        body.append_child(&message).map_err(dom_error)?;
        Ok(body)
    }

    fn register(
        registry: &RefCell<HashMap<String, Rendered>>,
        id: &NotificationId,
        rendered: Rendered,
    ) {
        // A displaced node for the same id leaves the document with its
        // listener.
        if let Some(previous) = registry.borrow_mut().insert(id.to_string(), rendered) {
            previous.node.remove();
        }
    }
}

impl ViewPort for DomView {
    fn append_entry(&self, notification: &Notification) -> Result<(), WidgetError> {
        let entry = self.document.create_element("div").map_err(dom_error)?;
        entry.set_class_name("notification");
        entry
            .set_attribute("data-id", &notification.id.to_string())
            .map_err(dom_error)?;
        entry
            .append_child(&self.notification_body(notification)?)
            .map_err(dom_error)?;

        let button = self.document.create_element("button").map_err(dom_error)?;
        button.set_text_content(Some("✓"));
        let onclick = self.onclick(notification.id.clone());
        button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        entry.append_child(&button).map_err(dom_error)?;

        self.list.append_child(&entry).map_err(dom_error)?;
        Self::register(
            &self.entries,
            &notification.id,
            Rendered {
                node: entry,
                _onclick: onclick,
            },
        );
        Ok(())
    }

    fn remove_entry(&self, id: &NotificationId) -> Result<(), WidgetError> {
        if let Some(entry) = self.entries.borrow_mut().remove(&id.to_string()) {
            entry.node.remove();
        }
        Ok(())
    }

    fn show_toast(&self, notification: &Notification) -> Result<(), WidgetError> {
        let toast = self.document.create_element("div").map_err(dom_error)?;
        toast.set_class_name("toast");
        toast
            .set_attribute("data-id", &notification.id.to_string())
            .map_err(dom_error)?;
        toast
            .append_child(&self.notification_body(notification)?)
            .map_err(dom_error)?;

        let onclick = self.onclick(notification.id.clone());
        toast
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .map_err(dom_error)?;

        self.toasts.append_child(&toast).map_err(dom_error)?;
        Self::register(
            &self.toast_nodes,
            &notification.id,
            Rendered {
                node: toast,
                _onclick: onclick,
            },
        );
        Ok(())
    }

    fn remove_toast(&self, id: &NotificationId) -> Result<(), WidgetError> {
        if let Some(toast) = self.toast_nodes.borrow_mut().remove(&id.to_string()) {
            toast.node.remove();
        }
        Ok(())
    }

    fn set_ack_handler(&self, handler: Rc<dyn Fn(NotificationId)>) {
        *self.ack.borrow_mut() = Some(handler);
    }
}
