use alloc::boxed::Box;
use core::fmt;

use crate::{ListenerId, MediaQuery};

/// "Does the pointing device hover and is it fine-grained": the desktop-mouse signal.
pub const POINTER_CAPABILITY_QUERY: &str = "(hover: hover) and (pointer: fine)";

/// How a [`CapabilityWatch`] is subscribed to its query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subscription {
    Modern(ListenerId),
    Legacy(ListenerId),
    /// The query offers no change notifications; its answer is read once.
    Inert,
}

impl Subscription {
    pub fn listener(&self) -> Option<ListenerId> {
        match *self {
            Self::Modern(id) | Self::Legacy(id) => Some(id),
            Self::Inert => None,
        }
    }
}

/// A media query plus its change subscription, behind one subscribe/unsubscribe contract.
pub struct CapabilityWatch {
    query: Box<dyn MediaQuery>,
    subscription: Subscription,
}

impl CapabilityWatch {
    /// Subscribes through the modern listener pair, falling back to the legacy pair.
    pub fn subscribe(mut query: Box<dyn MediaQuery>) -> Self {
        let subscription = if let Some(id) = query.add_change_listener() {
            Subscription::Modern(id)
        } else if let Some(id) = query.add_listener() {
            atrace!(media = query.media(), "capability query: legacy listener");
            Subscription::Legacy(id)
        } else {
            awarn!(
                media = query.media(),
                "capability query offers no change notifications"
            );
            Subscription::Inert
        };
        Self {
            query,
            subscription,
        }
    }

    pub fn matches(&self) -> bool {
        self.query.matches()
    }

    pub fn subscription(&self) -> Subscription {
        self.subscription
    }

    /// Whether `id` is this watch's change listener.
    pub fn owns(&self, id: ListenerId) -> bool {
        self.subscription.listener() == Some(id)
    }

    /// Releases the subscription through the same shape it was made with.
    pub fn unsubscribe(mut self) {
        match self.subscription {
            Subscription::Modern(id) => self.query.remove_change_listener(id),
            Subscription::Legacy(id) => self.query.remove_listener(id),
            Subscription::Inert => {}
        }
    }
}

impl fmt::Debug for CapabilityWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityWatch")
            .field("media", &self.query.media())
            .field("matches", &self.query.matches())
            .field("subscription", &self.subscription)
            .finish()
    }
}
