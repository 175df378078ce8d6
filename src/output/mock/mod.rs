use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Event, QuizOutput};

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Event> {
        std::mem::replace(&mut *self.events.write(), Vec::new())
    }

    pub fn contains_event(&self, event: &Event) -> bool {
        self.events.read().iter().any(|e| e == event)
    }

    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.read().iter().filter(|e| predicate(*e)).count()
    }
}

impl QuizOutput for MockQuizOutput {
    fn emit(&self, event: &Event) {
        self.events.write().push(event.clone());
    }
}
