use crate::domain::model::{Field, FormEvent};
use crate::domain::ports::EventSource;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Replays a pre-built event sequence, then ends the session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<FormEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = FormEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    /// The sequence a user filling the whole form produces: type into and
    /// leave each field in order, then submit.
    pub fn filled_form(name: &str, email: &str, subject: &str, message: &str) -> Self {
        let mut events = Vec::new();

        for (field, value) in [
            (Field::Name, name),
            (Field::Email, email),
            (Field::Subject, subject),
            (Field::Message, message),
        ] {
            events.push(FormEvent::Input {
                field,
                value: value.to_string(),
            });
            events.push(FormEvent::Blur { field });
        }
        events.push(FormEvent::Submit);

        Self::new(events)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[async_trait]
impl EventSource for ScriptedEvents {
    async fn next_event(&mut self) -> Option<FormEvent> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filled_form_event_order() {
        let mut source = ScriptedEvents::filled_form("Al", "a@b.co", "Hi", "Hello there!");

        let first = source.next_event().await;
        assert_eq!(
            first,
            Some(FormEvent::Input {
                field: Field::Name,
                value: "Al".to_string()
            })
        );
        assert_eq!(
            source.next_event().await,
            Some(FormEvent::Blur { field: Field::Name })
        );

        // Skip the remaining input/blur pairs; the script ends with Submit.
        let mut last = None;
        while let Some(event) = source.next_event().await {
            last = Some(event);
        }
        assert_eq!(last, Some(FormEvent::Submit));
        assert!(source.is_empty());
    }
}
