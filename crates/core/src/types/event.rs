//! Event record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::EventId;
use crate::types::price::Price;

/// A listed event.
///
/// Identity (`id`) and descriptive fields are immutable after seeding;
/// `registered_count` is the only mutable field and is changed exclusively
/// through the event store's atomic increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event ID.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// City or venue.
    pub location: String,
    /// Long-form description.
    pub description: String,
    /// Ticket price.
    pub price: Price,
    /// Maximum number of registrations.
    pub capacity: u32,
    /// Current number of registrations.
    pub registered_count: u32,
    /// Promotional image URL, if any.
    pub image_url: String,
    /// Ordered tag list for discovery.
    pub tags: Vec<String>,
    /// Organizer display name.
    pub organizer_name: String,
    /// Organizer contact address.
    pub organizer_contact: String,
}

impl Event {
    /// Whether the event has reached capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }

    /// Remaining open spots (never negative).
    #[must_use]
    pub const fn available_spots(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }

    /// Whether the event date is still in the future.
    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        self.date > Utc::now()
    }
}
