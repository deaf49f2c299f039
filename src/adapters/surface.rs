use crate::domain::model::{Field, ScrollTarget};
use crate::domain::ports::FormSurface;
use std::collections::HashMap;

/// Terminal rendering of the form's presentation state. Error slots behave
/// like their DOM counterparts: setting the same message twice is a no-op.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    active_errors: HashMap<Field, String>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSurface for ConsoleSurface {
    fn set_error(&mut self, field: Field, message: &str) {
        if self.active_errors.get(&field).map(String::as_str) == Some(message) {
            return;
        }
        eprintln!("❌ {field}: {message}");
        self.active_errors.insert(field, message.to_string());
    }

    fn clear_error(&mut self, field: Field) {
        self.active_errors.remove(&field);
    }

    fn set_form_visible(&mut self, visible: bool) {
        if visible {
            println!("📝 The form is ready for another message.");
        }
    }

    fn set_banner_visible(&mut self, visible: bool) {
        if visible {
            println!("✅ Thanks! Your message has been sent.");
        }
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        tracing::debug!("Scrolling to {:?}", target);
    }
}
