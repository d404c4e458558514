//! Change subscriptions
//!
//! Consumers register a listener per topic and are called after every
//! persisted mutation of that topic with a read-only view of the state.

use super::{StoreState, Topic};

type Listener = Box<dyn FnMut(Topic, &StoreState) + Send>;

/// Handle returned by `AppStore::subscribe`, used to cancel the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    topic: Topic,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }
}

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(Subscription, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, topic: Topic, listener: Listener) -> Subscription {
        self.next_id += 1;
        let subscription = Subscription {
            id: self.next_id,
            topic,
        };
        self.entries.push((subscription, listener));
        subscription
    }

    /// Returns false if the subscription was already cancelled
    pub(crate) fn remove(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(s, _)| *s != subscription);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, topic: Topic, state: &StoreState) {
        for (subscription, listener) in self.entries.iter_mut() {
            if subscription.topic == topic {
                listener(topic, state);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
