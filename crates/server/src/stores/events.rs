//! Event catalog store.
//!
//! Holds the canonical event records. The catalog is seeded lazily on
//! first access (exactly once, even under concurrent first readers) and
//! events are never added or deleted afterwards; the only mutation is the
//! atomic registration-count increment.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{Days, Utc};
use parking_lot::RwLock;

use gatherly_core::{Event, EventId, Price};

use super::StoreError;

/// Max entries in the by-id lookup cache. The seed catalog is small; this
/// only matters if the catalog ever grows.
const LOOKUP_CACHE_CAPACITY: u64 = 256;

/// Thread-safe event catalog.
///
/// A single store-wide write lock guards the check-capacity-then-increment
/// sequence; contention is expected to be low, so there is no per-event
/// locking.
pub struct EventStore {
    catalog: OnceLock<RwLock<BTreeMap<EventId, Event>>>,
    by_id: moka::sync::Cache<EventId, Event>,
}

impl EventStore {
    /// Create an empty store; the catalog seeds on first access.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: OnceLock::new(),
            by_id: moka::sync::Cache::new(LOOKUP_CACHE_CAPACITY),
        }
    }

    fn catalog(&self) -> &RwLock<BTreeMap<EventId, Event>> {
        self.catalog
            .get_or_init(|| RwLock::new(seed_catalog().into_iter().map(|e| (e.id, e)).collect()))
    }

    /// Snapshot of every event, ordered by ID.
    #[must_use]
    pub fn list_all(&self) -> Vec<Event> {
        self.catalog().read().values().cloned().collect()
    }

    /// Look up one event, caching the result for O(1) repeat lookups.
    #[must_use]
    pub fn get_by_id(&self, id: EventId) -> Option<Event> {
        if let Some(event) = self.by_id.get(&id) {
            return Some(event);
        }

        let event = self.catalog().read().get(&id).cloned();
        if let Some(ref event) = event {
            self.by_id.insert(id, event.clone());
        }
        event
    }

    /// Atomically increment an event's registration count.
    ///
    /// The existence check, capacity check, and increment happen under one
    /// write-lock acquisition, so the count can never exceed capacity even
    /// under concurrent callers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the event does not exist and
    /// [`StoreError::EventFull`] if it is at capacity.
    pub fn increment_registration(&self, id: EventId) -> Result<Event, StoreError> {
        let mut catalog = self.catalog().write();
        let event = catalog.get_mut(&id).ok_or(StoreError::NotFound)?;
        if event.is_full() {
            return Err(StoreError::EventFull);
        }
        event.registered_count += 1;

        let updated = event.clone();
        drop(catalog);

        // Keep the lookup cache coherent with the new count.
        self.by_id.insert(id, updated.clone());
        Ok(updated)
    }

    /// Invalidate derived lookup caches; the underlying catalog is untouched.
    pub fn clear_cache(&self) {
        self.by_id.invalidate_all();
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed seed catalog, dated relative to process start.
fn seed_catalog() -> Vec<Event> {
    let now = Utc::now();
    let event = |id: i32,
                 name: &str,
                 days_ahead: u64,
                 location: &str,
                 description: &str,
                 price: Price,
                 capacity: u32,
                 registered_count: u32,
                 organizer_name: &str,
                 organizer_contact: &str,
                 tags: &[&str]| Event {
        id: EventId::new(id),
        name: name.to_owned(),
        date: now.checked_add_days(Days::new(days_ahead)).unwrap_or(now),
        location: location.to_owned(),
        description: description.to_owned(),
        price,
        capacity,
        registered_count,
        image_url: String::new(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
        organizer_name: organizer_name.to_owned(),
        organizer_contact: organizer_contact.to_owned(),
    };

    vec![
        event(
            1,
            "Tech Innovation Summit 2026",
            15,
            "San Francisco",
            "Join industry leaders discussing the latest in AI, blockchain, and quantum computing. \
             Network with innovators and discover breakthrough technologies that will shape the future.",
            Price::usd_cents(29900),
            500,
            234,
            "TechEvents Inc.",
            "contact@techevents.com",
            &["Technology", "AI", "Networking", "Innovation"],
        ),
        event(
            2,
            "Community Food Festival",
            7,
            "New York",
            "Celebrate diverse cuisines from around the world. Local restaurants, food trucks, and \
             cooking demonstrations all day long. Family-friendly event with live music.",
            Price::free(),
            1000,
            567,
            "NYC Community Events",
            "info@nycevents.org",
            &["Food", "Community", "Family", "Culture"],
        ),
        event(
            3,
            "Digital Marketing Masterclass",
            22,
            "Los Angeles",
            "Learn advanced strategies for social media, SEO, and content marketing. Hands-on \
             workshops with industry experts and practical exercises.",
            Price::usd_cents(14950),
            200,
            89,
            "Marketing Pros Academy",
            "learn@marketingpros.com",
            &["Marketing", "Digital", "SEO", "Social Media"],
        ),
        event(
            4,
            "Startup Pitch Competition",
            30,
            "Chicago",
            "Watch promising startups pitch their ideas to investors. Network with entrepreneurs \
             and venture capitalists. Cash prizes for top 3 pitches.",
            Price::usd_cents(2500),
            300,
            156,
            "Startup Chicago",
            "events@startupchicago.com",
            &["Startup", "Investment", "Entrepreneurship", "Competition"],
        ),
        event(
            5,
            "Art & Culture Expo",
            12,
            "New York",
            "Explore contemporary art installations, meet local artists, and participate in \
             interactive cultural workshops. Live performances throughout the day.",
            Price::usd_cents(3500),
            400,
            278,
            "NYC Arts Council",
            "expo@nycartscouncil.org",
            &["Art", "Culture", "Exhibition", "Workshops"],
        ),
        event(
            6,
            "Blockchain & Crypto Conference",
            45,
            "Miami",
            "Deep dive into blockchain technology, cryptocurrency trends, and DeFi innovations. \
             Featuring keynotes from industry pioneers and hands-on workshops.",
            Price::usd_cents(39900),
            800,
            456,
            "CryptoWorld Events",
            "info@cryptoworldevents.com",
            &["Blockchain", "Cryptocurrency", "DeFi", "Technology"],
        ),
        event(
            7,
            "Fitness & Wellness Bootcamp",
            5,
            "Austin",
            "Transform your health with expert-led fitness sessions, nutrition workshops, and \
             mental wellness seminars. All fitness levels welcome.",
            Price::usd_cents(7500),
            150,
            89,
            "Austin Wellness Center",
            "events@austinwellness.com",
            &["Fitness", "Wellness", "Health", "Bootcamp"],
        ),
        event(
            8,
            "Jazz Under the Stars",
            18,
            "New Orleans",
            "An enchanting evening of live jazz music in an outdoor setting. Local and touring \
             musicians performing classic and contemporary pieces.",
            Price::usd_cents(4500),
            250,
            187,
            "New Orleans Music Society",
            "tickets@nolamusic.org",
            &["Music", "Jazz", "Outdoor", "Concert"],
        ),
        event(
            9,
            "Sustainable Living Workshop",
            25,
            "Portland",
            "Learn practical tips for eco-friendly living, sustainable fashion, zero-waste \
             practices, and renewable energy solutions for your home.",
            Price::free(),
            100,
            67,
            "Green Portland Initiative",
            "workshops@greenportland.org",
            &["Sustainability", "Environment", "Workshop", "Green Living"],
        ),
        event(
            10,
            "Photography Masterclass: Urban Landscapes",
            35,
            "Seattle",
            "Capture stunning urban photography with professional techniques. Morning theory \
             session followed by guided photo walk through the city.",
            Price::usd_cents(12000),
            30,
            23,
            "Seattle Photo Academy",
            "classes@seattlephoto.com",
            &["Photography", "Urban", "Masterclass", "Art"],
        ),
        event(
            11,
            "Wine Tasting & Vineyard Tour",
            40,
            "Napa Valley",
            "Discover exceptional wines from local vineyards. Guided tastings, winemaking \
             insights, and gourmet food pairings in beautiful vineyard settings.",
            Price::usd_cents(18500),
            60,
            42,
            "Napa Valley Tours",
            "bookings@napavalleytours.com",
            &["Wine", "Tasting", "Food", "Tourism"],
        ),
        event(
            12,
            "Gaming & Esports Tournament",
            28,
            "Las Vegas",
            "Competitive gaming tournament featuring multiple popular titles. Prize pools, \
             streaming, and meet & greets with professional gamers.",
            Price::usd_cents(5000),
            500,
            312,
            "Vegas Gaming Arena",
            "tournaments@vegasgaming.com",
            &["Gaming", "Esports", "Competition", "Technology"],
        ),
        event(
            13,
            "Mindfulness & Meditation Retreat",
            50,
            "Sedona",
            "Weekend retreat focused on mindfulness practices, guided meditation, and personal \
             wellness. Set in the serene red rock landscape of Sedona.",
            Price::usd_cents(35000),
            40,
            28,
            "Sedona Wellness Retreats",
            "info@sedonawellness.com",
            &["Mindfulness", "Meditation", "Retreat", "Wellness"],
        ),
        event(
            14,
            "Science Fiction Convention",
            60,
            "Denver",
            "Celebrate sci-fi culture with author panels, cosplay contests, technology demos, and \
             screenings of classic and new science fiction films.",
            Price::usd_cents(6500),
            1200,
            789,
            "Mile High Sci-Fi",
            "convention@milehighscifi.com",
            &["Science Fiction", "Convention", "Cosplay", "Entertainment"],
        ),
        event(
            15,
            "Cooking Class: Italian Cuisine",
            20,
            "Boston",
            "Learn authentic Italian cooking techniques from a professional chef. Hands-on \
             preparation of pasta, sauces, and traditional desserts.",
            Price::usd_cents(9500),
            24,
            18,
            "Boston Culinary Institute",
            "classes@bostonculi.edu",
            &["Cooking", "Italian", "Cuisine", "Class"],
        ),
    ]
}
