use dioxus::prelude::*;
use std::rc::Rc;

/// A pending confirmation: what to ask and what to run on "yes"
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    on_confirm: Rc<dyn Fn()>,
}

impl ConfirmRequest {
    pub fn new(title: String, message: String, on_confirm: impl Fn() + 'static) -> Self {
        Self {
            title,
            message,
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            on_confirm: Rc::new(on_confirm),
        }
    }

    pub fn with_labels(mut self, confirm: &str, cancel: &str) -> Self {
        self.confirm_label = confirm.to_string();
        self.cancel_label = cancel.to_string();
        self
    }

    pub fn confirm(&self) {
        (self.on_confirm)()
    }
}

/// App-wide confirmation dialog; at most one request is shown at a time
#[derive(Clone, Copy)]
pub struct DialogContext {
    request: Signal<Option<ConfirmRequest>>,
}

impl Default for DialogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogContext {
    pub fn new() -> Self {
        Self {
            request: Signal::new(None),
        }
    }

    pub fn current(&self) -> Option<ConfirmRequest> {
        self.request.read().clone()
    }

    /// Replaces any request that is still open
    pub fn show(&self, request: ConfirmRequest) {
        let mut current = self.request;
        current.set(Some(request));
    }

    pub fn hide(&self) {
        let mut current = self.request;
        current.set(None);
    }
}
