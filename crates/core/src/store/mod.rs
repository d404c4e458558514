//! Application state store
//!
//! Single source of truth for clubs, events, recruitments, applications and
//! the admin session flag. State is loaded from a [`KeyValueStore`] when the
//! store is opened. Every mutation computes the new collection, writes it to
//! the backend, swaps it in, then notifies subscribers. A failed write leaves
//! the in-memory state untouched.

mod subscription;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::AdminCredential;
use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{
    new_id, non_blank, Application, Club, Event, EventStatus, NewApplication, NewClub, NewEvent,
    NewRecruitment, Recruitment, Registration,
};
use crate::seed;
use crate::storage::{KeyValueStore, StorageKey};

pub use subscription::Subscription;
use subscription::Listeners;

/// What changed, for subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Clubs,
    Events,
    Recruitments,
    Applications,
    Admin,
}

impl Topic {
    fn storage_key(&self) -> StorageKey {
        match self {
            Topic::Clubs => StorageKey::Clubs,
            Topic::Events => StorageKey::Events,
            Topic::Recruitments => StorageKey::Recruitments,
            Topic::Applications => StorageKey::Applications,
            Topic::Admin => StorageKey::IsAdmin,
        }
    }
}

/// Immutable view of everything the store holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub clubs: Vec<Club>,
    pub events: Vec<Event>,
    pub recruitments: Vec<Recruitment>,
    pub applications: Vec<Application>,
    pub is_admin: bool,
}

impl StoreState {
    pub fn find_club(&self, id: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn find_recruitment(&self, id: &str) -> Option<&Recruitment> {
        self.recruitments.iter().find(|r| r.id == id)
    }
}

/// The state container, generic over its durable backend
pub struct AppStore<S: KeyValueStore> {
    backend: S,
    admin: AdminCredential,
    state: StoreState,
    listeners: Listeners,
}

impl<S: KeyValueStore> AppStore<S> {
    /// Load state from `backend`.
    ///
    /// Entries that are absent or fail to parse fall back to defaults (the
    /// seed clubs, empty collections, logged out) and the defaults are
    /// written back, so the backend always holds all five entries after
    /// opening.
    #[instrument(skip_all)]
    pub fn open(backend: S, admin: AdminCredential) -> Result<Self> {
        let mut missing = Vec::new();

        let clubs = load_collection(&backend, StorageKey::Clubs, &mut missing)
            .unwrap_or_else(seed::initial_clubs);
        let events = load_collection(&backend, StorageKey::Events, &mut missing).unwrap_or_default();
        let recruitments =
            load_collection(&backend, StorageKey::Recruitments, &mut missing).unwrap_or_default();
        let applications =
            load_collection(&backend, StorageKey::Applications, &mut missing).unwrap_or_default();
        let is_admin = load_admin_flag(&backend, &mut missing);

        let store = Self {
            backend,
            admin,
            state: StoreState {
                clubs,
                events,
                recruitments,
                applications,
                is_admin,
            },
            listeners: Listeners::default(),
        };

        for key in missing {
            store.write_key(key)?;
        }

        info!(
            clubs = store.state.clubs.len(),
            events = store.state.events.len(),
            recruitments = store.state.recruitments.len(),
            applications = store.state.applications.len(),
            is_admin = store.state.is_admin,
            "Store opened"
        );
        Ok(store)
    }

    /// Tear down the store and hand back its backend
    pub fn into_backend(self) -> S {
        self.backend
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> StoreState {
        self.state.clone()
    }

    pub fn clubs(&self) -> &[Club] {
        &self.state.clubs
    }

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn recruitments(&self) -> &[Recruitment] {
        &self.state.recruitments
    }

    pub fn applications(&self) -> &[Application] {
        &self.state.applications
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin
    }

    /// Register a listener for one topic
    pub fn subscribe<F>(&mut self, topic: Topic, listener: F) -> Subscription
    where
        F: FnMut(Topic, &StoreState) + Send + 'static,
    {
        self.listeners.add(topic, Box::new(listener))
    }

    /// Cancel a listener. Returns false if it was already cancelled.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.listeners.remove(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn add_club(&mut self, draft: NewClub) -> Result<Club> {
        let id = fresh_id(&self.state.clubs, |c| &c.id);
        invariants::assert_fresh_id(&id, self.state.clubs.iter().map(|c| c.id.as_str()), "clubs");
        let club = draft.into_club(id);

        let mut clubs = self.state.clubs.clone();
        clubs.push(club.clone());
        self.commit(Topic::Clubs, clubs, |state, v| state.clubs = v)?;

        info!(club_id = %club.id, "Club added");
        Ok(club)
    }

    #[instrument(skip(self, draft), fields(title = %draft.title, club_id = %draft.club_id))]
    pub fn add_event(&mut self, draft: NewEvent) -> Result<Event> {
        self.require_club(&draft.club_id)?;

        let id = fresh_id(&self.state.events, |e| &e.id);
        invariants::assert_fresh_id(&id, self.state.events.iter().map(|e| e.id.as_str()), "events");
        let event = draft.into_event(id);
        invariants::assert_club_resolves(&self.state.clubs, &event.club_id, "event");

        let mut events = self.state.events.clone();
        events.push(event.clone());
        self.commit(Topic::Events, events, |state, v| state.events = v)?;

        info!(event_id = %event.id, "Event added");
        Ok(event)
    }

    #[instrument(skip(self, draft), fields(position = %draft.position, club_id = %draft.club_id))]
    pub fn add_recruitment(&mut self, draft: NewRecruitment) -> Result<Recruitment> {
        self.require_club(&draft.club_id)?;

        let id = fresh_id(&self.state.recruitments, |r| &r.id);
        invariants::assert_fresh_id(
            &id,
            self.state.recruitments.iter().map(|r| r.id.as_str()),
            "recruitments",
        );
        let recruitment = draft.into_recruitment(id);
        invariants::assert_club_resolves(&self.state.clubs, &recruitment.club_id, "recruitment");

        let mut recruitments = self.state.recruitments.clone();
        recruitments.push(recruitment.clone());
        self.commit(Topic::Recruitments, recruitments, |state, v| {
            state.recruitments = v
        })?;

        info!(recruitment_id = %recruitment.id, "Recruitment added");
        Ok(recruitment)
    }

    /// Submit an application. Repeat submissions are accepted.
    #[instrument(skip(self, draft), fields(recruitment_id = %draft.recruitment_id))]
    pub fn add_application(&mut self, draft: NewApplication) -> Result<Application> {
        let club_id = self
            .state
            .find_recruitment(&draft.recruitment_id)
            .map(|r| r.club_id.clone())
            .ok_or_else(|| {
                Error::NotFound(format!("recruitment {}", draft.recruitment_id))
            })?;

        let id = fresh_id(&self.state.applications, |a| &a.id);
        invariants::assert_fresh_id(
            &id,
            self.state.applications.iter().map(|a| a.id.as_str()),
            "applications",
        );
        let application = draft.into_application(id, club_id, Utc::now());

        let mut applications = self.state.applications.clone();
        applications.push(application.clone());
        self.commit(Topic::Applications, applications, |state, v| {
            state.applications = v
        })?;

        info!(application_id = %application.id, "Application submitted");
        Ok(application)
    }

    /// Set the certificates link of an event. A blank link clears it.
    ///
    /// Returns `Ok(false)` and writes nothing if no event has this id.
    pub fn update_event(&mut self, id: &str, certificates_url: &str) -> Result<bool> {
        let url = non_blank(Some(certificates_url.to_string()));
        self.modify_event(id, move |event| event.certificates_url = url)
    }

    /// Set the status of an event. `Ok(false)` if no event has this id.
    pub fn update_event_status(&mut self, id: &str, status: EventStatus) -> Result<bool> {
        self.modify_event(id, |event| event.status = status)
    }

    /// Replace an event's whole roster. `Ok(false)` if no event has this id.
    ///
    /// Every registration must belong to `event_id`; otherwise nothing is
    /// written and `InvalidInput` is returned.
    pub fn update_event_registrations(
        &mut self,
        event_id: &str,
        registrations: Vec<Registration>,
    ) -> Result<bool> {
        if let Some(stray) = registrations.iter().find(|r| r.event_id != event_id) {
            return Err(Error::InvalidInput(format!(
                "registration {} belongs to event {}, not {}",
                stray.id, stray.event_id, event_id
            )));
        }
        self.modify_event(event_id, move |event| event.registrations = registrations)
    }

    /// Check the admin credential and set the flag on success.
    ///
    /// A failed attempt leaves the flag as it was.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        if !self.admin.matches(username, password) {
            warn!(username, "Admin login rejected");
            return Ok(false);
        }

        self.commit(Topic::Admin, true, |state, v| state.is_admin = v)?;
        info!(username, "Admin logged in");
        Ok(true)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.commit(Topic::Admin, false, |state, v| state.is_admin = v)?;
        info!("Admin logged out");
        Ok(())
    }

    fn require_club(&self, club_id: &str) -> Result<()> {
        if self.state.find_club(club_id).is_none() {
            return Err(Error::NotFound(format!("club {}", club_id)));
        }
        Ok(())
    }

    #[instrument(skip(self, apply))]
    fn modify_event<F>(&mut self, id: &str, apply: F) -> Result<bool>
    where
        F: FnOnce(&mut Event),
    {
        let Some(index) = self.state.events.iter().position(|e| e.id == id) else {
            debug!("No event with this id, nothing to update");
            return Ok(false);
        };

        let mut events = self.state.events.clone();
        apply(&mut events[index]);
        self.commit(Topic::Events, events, |state, v| state.events = v)?;

        info!("Event updated");
        Ok(true)
    }

    /// Persist `value` under the topic's key, then install it and notify
    fn commit<T, F>(&mut self, topic: Topic, value: T, install: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&mut StoreState, T),
    {
        let raw = serde_json::to_string(&value)?;
        self.backend.set(topic.storage_key().as_str(), &raw)?;

        install(&mut self.state, value);

        self.listeners.notify(topic, &self.state);
        Ok(())
    }

    fn write_key(&self, key: StorageKey) -> Result<()> {
        let raw = match key {
            StorageKey::Clubs => serde_json::to_string(&self.state.clubs)?,
            StorageKey::Events => serde_json::to_string(&self.state.events)?,
            StorageKey::Recruitments => serde_json::to_string(&self.state.recruitments)?,
            StorageKey::Applications => serde_json::to_string(&self.state.applications)?,
            StorageKey::IsAdmin => serde_json::to_string(&self.state.is_admin)?,
        };
        self.backend.set(key.as_str(), &raw)
    }
}

/// Read and parse one collection. `None` means "use the default" and the
/// key is queued for rewriting.
fn load_collection<S, T>(backend: &S, key: StorageKey, missing: &mut Vec<StorageKey>) -> Option<Vec<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let raw = match backend.get(key.as_str()) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = key.as_str(), "No stored value, using default");
            missing.push(key);
            return None;
        }
        Err(e) => {
            warn!(key = key.as_str(), error = %e, "Storage read failed, using default");
            missing.push(key);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Some(items),
        Err(e) => {
            warn!(key = key.as_str(), error = %e, "Stored value unreadable, using default");
            missing.push(key);
            None
        }
    }
}

/// Anything other than the literal `true` reads as logged out
fn load_admin_flag<S: KeyValueStore>(backend: &S, missing: &mut Vec<StorageKey>) -> bool {
    match backend.get(StorageKey::IsAdmin.as_str()) {
        Ok(Some(raw)) => raw.trim() == "true",
        Ok(None) => {
            missing.push(StorageKey::IsAdmin);
            false
        }
        Err(e) => {
            warn!(error = %e, "Storage read failed for admin flag");
            missing.push(StorageKey::IsAdmin);
            false
        }
    }
}

/// A new id that no record in `existing` already uses
fn fresh_id<T>(existing: &[T], id_of: impl Fn(&T) -> &String) -> String {
    loop {
        let id = new_id();
        if !existing.iter().any(|item| *id_of(item) == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, NewRegistration};
    use crate::storage::{Database, MemoryStorage};
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    fn open_memory() -> AppStore<MemoryStorage> {
        AppStore::open(MemoryStorage::new(), AdminCredential::default()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fest(club_id: &str) -> NewEvent {
        NewEvent {
            club_id: club_id.to_string(),
            title: "Fest".to_string(),
            date: date(2025, 1, 1),
            location: "Main Ground".to_string(),
            timings: "9:00 AM - 5:00 PM".to_string(),
            description: "Annual cultural fest".to_string(),
            poster_url: None,
            registration_url: None,
        }
    }

    fn opening(club_id: &str) -> NewRecruitment {
        NewRecruitment {
            club_id: club_id.to_string(),
            position: "Design Lead".to_string(),
            description: "Own posters and social media".to_string(),
            deadline: date(2025, 3, 31),
            is_active: true,
        }
    }

    fn applicant(recruitment_id: &str) -> NewApplication {
        NewApplication {
            recruitment_id: recruitment_id.to_string(),
            name: "Asha Rao".to_string(),
            roll_number: "160121733001".to_string(),
            section: "A".to_string(),
            year: "3rd Year".to_string(),
            branch: "CSE".to_string(),
        }
    }

    fn roster(event_id: &str) -> Vec<Registration> {
        ["Sample Student 1", "Sample Student 2", "Sample Student 3"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                NewRegistration {
                    name: name.to_string(),
                    roll_number: format!("16012173300{}", i + 1),
                    year: "2nd Year".to_string(),
                    section: "B".to_string(),
                }
                .into_registration(event_id, Utc::now())
            })
            .collect()
    }

    #[test]
    fn test_fresh_store_seeds_defaults() {
        let store = open_memory();
        assert_eq!(store.clubs().len(), 10);
        assert!(store.events().is_empty());
        assert!(store.recruitments().is_empty());
        assert!(store.applications().is_empty());
        assert!(!store.is_admin());

        let backend = store.into_backend();
        for key in StorageKey::all() {
            assert!(backend.get(key.as_str()).unwrap().is_some(), "{:?}", key);
        }
    }

    #[test]
    fn test_corrupt_entries_fall_back_to_defaults() {
        let backend = MemoryStorage::with_entries([
            (StorageKey::Clubs.as_str(), "{not json"),
            (StorageKey::Events.as_str(), "42"),
            (StorageKey::IsAdmin.as_str(), "yes"),
        ]);
        let store = AppStore::open(backend, AdminCredential::default()).unwrap();

        assert_eq!(store.clubs().len(), 10);
        assert!(store.events().is_empty());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_add_event_forces_upcoming_and_empty_roster() {
        let mut store = open_memory();
        let event = store.add_event(fest("1")).unwrap();

        assert_eq!(store.events().len(), 1);
        assert_eq!(event.status, EventStatus::Upcoming);
        assert!(event.registrations.is_empty());
        assert!(event.certificates_url.is_none());
        assert!(!event.id.is_empty());
        assert_ne!(event.id, "1");
    }

    #[test]
    fn test_fest_scenario() {
        let mut store = open_memory();
        assert!(store.events().is_empty());

        let event = store.add_event(fest("1")).unwrap();
        assert_eq!(store.events().len(), 1);
        assert_eq!(store.events()[0].status, EventStatus::Upcoming);

        assert!(store
            .update_event_status(&event.id, EventStatus::Completed)
            .unwrap());

        let stored = store.state().find_event(&event.id).unwrap();
        assert_eq!(stored.status, EventStatus::Completed);
        assert_eq!(stored.title, "Fest");
        assert_eq!(stored.date, date(2025, 1, 1));
        assert_eq!(stored.club_id, "1");
    }

    #[test]
    fn test_add_event_unknown_club_rejected() {
        let mut store = open_memory();
        let err = store.add_event(fest("missing")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_ids_unique_across_additions() {
        let mut store = open_memory();
        let mut ids = HashSet::new();
        for _ in 0..25 {
            let event = store.add_event(fest("2")).unwrap();
            assert!(ids.insert(event.id));
        }

        let club = store
            .add_club(NewClub {
                name: "Robotics Club".into(),
                description: "Build and race robots".into(),
                logo: "🤖".into(),
                contacts: vec![Contact::new("Lead", "+91 9000000000")],
            })
            .unwrap();
        assert!(!club.id.is_empty());
        assert_eq!(
            store.clubs().iter().filter(|c| c.id == club.id).count(),
            1
        );
        assert_eq!(store.clubs().len(), 11);
    }

    #[test]
    fn test_update_status_unknown_id_leaves_events_unchanged() {
        let mut store = open_memory();
        store.add_event(fest("1")).unwrap();
        store.add_event(fest("3")).unwrap();
        let before = store.events().to_vec();

        let changed = store
            .update_event_status("no-such-event", EventStatus::Postponed)
            .unwrap();

        assert!(!changed);
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn test_update_event_sets_certificates_only() {
        let mut store = open_memory();
        let event = store.add_event(fest("5")).unwrap();

        assert!(store
            .update_event(&event.id, "https://drive.example/certs")
            .unwrap());

        let stored = store.state().find_event(&event.id).unwrap();
        assert_eq!(
            stored.certificates_url.as_deref(),
            Some("https://drive.example/certs")
        );
        assert_eq!(stored.status, EventStatus::Upcoming);
        assert!(!store.update_event("ghost", "https://x").unwrap());
    }

    #[test]
    fn test_update_registrations_replaces_only_target() {
        let mut store = open_memory();
        let target = store.add_event(fest("1")).unwrap();
        let other = store.add_event(fest("2")).unwrap();
        let other_before = store.state().find_event(&other.id).unwrap().clone();

        let mut regs = roster(&target.id);
        regs[1].attended = true;
        assert!(store
            .update_event_registrations(&target.id, regs.clone())
            .unwrap());

        assert_eq!(
            store.state().find_event(&target.id).unwrap().registrations,
            regs
        );
        assert_eq!(store.state().find_event(&other.id).unwrap(), &other_before);
        assert!(!store.update_event_registrations("ghost", vec![]).unwrap());
    }

    #[test]
    fn test_update_registrations_rejects_foreign_roster() {
        let mut store = open_memory();
        let target = store.add_event(fest("1")).unwrap();
        let other = store.add_event(fest("2")).unwrap();
        let persisted = store
            .backend
            .get(StorageKey::Events.as_str())
            .unwrap();

        let err = store
            .update_event_registrations(&target.id, roster(&other.id))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(store.state().find_event(&target.id).unwrap().registrations.is_empty());
        assert_eq!(
            store.backend.get(StorageKey::Events.as_str()).unwrap(),
            persisted
        );
    }

    fn stored_event(id: &str, title: &str) -> String {
        format!(
            r#"{{"id":"{}","clubId":"1","title":"{}","date":"2025-01-01","location":"Main Ground","timings":"9:00 AM","description":"Fest","posterUrl":"","registrationUrl":"","certificatesUrl":"","status":"Upcoming","registrations":[]}}"#,
            id, title
        )
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let events = format!(
            "[{},{}]",
            stored_event("1700000000000", "First"),
            stored_event("1700000000000", "Second")
        );
        let backend = MemoryStorage::with_entries([(StorageKey::Events.as_str(), events)]);
        let mut store = AppStore::open(backend, AdminCredential::default()).unwrap();

        assert!(store
            .update_event_status("1700000000000", EventStatus::Completed)
            .unwrap());
        assert!(store.login("admin", "admin123").unwrap());

        assert_eq!(store.events().len(), 2);
        assert_eq!(store.events()[0].title, "First");
        assert_eq!(store.events()[0].status, EventStatus::Completed);
        assert_eq!(store.events()[1].status, EventStatus::Upcoming);
        assert_eq!(
            store.state().find_event("1700000000000").unwrap().title,
            "First"
        );
    }

    #[test]
    fn test_blank_links_are_absent() {
        let events = format!("[{}]", stored_event("1700000000001", "Hackathon"));
        let backend = MemoryStorage::with_entries([(StorageKey::Events.as_str(), events)]);
        let mut store = AppStore::open(backend, AdminCredential::default()).unwrap();

        let event = &store.events()[0];
        assert!(event.poster_url.is_none());
        assert!(event.registration_url.is_none());
        assert!(crate::directory::events_with_certificates(store.events()).is_empty());

        assert!(store.update_event("1700000000001", "https://certs.example").unwrap());
        assert!(store.update_event("1700000000001", "  ").unwrap());
        assert!(store.events()[0].certificates_url.is_none());

        let mut draft = fest("1");
        draft.poster_url = Some(String::new());
        assert!(store.add_event(draft).unwrap().poster_url.is_none());
    }

    #[test]
    fn test_add_recruitment_keeps_active_flag() {
        let mut store = open_memory();
        let mut draft = opening("4");
        draft.is_active = false;
        let recruitment = store.add_recruitment(draft).unwrap();
        assert!(!recruitment.is_active);
        assert!(store.add_recruitment(opening("nope")).is_err());
    }

    #[test]
    fn test_add_application_copies_club_and_stamps_time() {
        let mut store = open_memory();
        let recruitment = store.add_recruitment(opening("6")).unwrap();

        let before = Utc::now();
        let first = store.add_application(applicant(&recruitment.id)).unwrap();
        let second = store.add_application(applicant(&recruitment.id)).unwrap();

        assert_eq!(first.club_id, "6");
        assert!(first.submitted_at >= before);
        assert_ne!(first.id, second.id);
        assert_eq!(store.applications().len(), 2);
    }

    #[test]
    fn test_add_application_unknown_recruitment() {
        let mut store = open_memory();
        let err = store.add_application(applicant("ghost")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_login_and_logout() {
        let mut store = open_memory();

        assert!(!store.login("admin", "wrong").unwrap());
        assert!(!store.is_admin());

        assert!(store.login("admin", "admin123").unwrap());
        assert!(store.is_admin());

        // A bad attempt does not log the admin out
        assert!(!store.login("root", "admin123").unwrap());
        assert!(store.is_admin());

        store.logout().unwrap();
        assert!(!store.is_admin());
        store.logout().unwrap();
        assert!(!store.is_admin());
    }

    #[test]
    fn test_login_uses_configured_credential() {
        let mut store =
            AppStore::open(MemoryStorage::new(), AdminCredential::new("warden", "hunter2")).unwrap();
        assert!(!store.login("admin", "admin123").unwrap());
        assert!(store.login("warden", "hunter2").unwrap());
    }

    #[test]
    fn test_admin_flag_persists() {
        let mut store = open_memory();
        store.login("admin", "admin123").unwrap();

        let backend = store.into_backend();
        assert_eq!(
            backend.get(StorageKey::IsAdmin.as_str()).unwrap().as_deref(),
            Some("true")
        );
        let store = AppStore::open(backend, AdminCredential::default()).unwrap();
        assert!(store.is_admin());
    }

    #[test]
    fn test_reload_reproduces_state() {
        let mut store = open_memory();
        let event = store.add_event(fest("1")).unwrap();
        store
            .update_event_registrations(&event.id, roster(&event.id))
            .unwrap();
        store.update_event(&event.id, "https://certs.example").unwrap();
        let recruitment = store.add_recruitment(opening("10")).unwrap();
        store.add_application(applicant(&recruitment.id)).unwrap();
        let before = store.snapshot();

        let reopened = AppStore::open(store.into_backend(), AdminCredential::default()).unwrap();
        assert_eq!(reopened.snapshot(), before);
    }

    #[test]
    fn test_reload_from_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clubhub.db");

        let before = {
            let mut store =
                AppStore::open(Database::open(&path).unwrap(), AdminCredential::default()).unwrap();
            let event = store.add_event(fest("3")).unwrap();
            store
                .update_event_status(&event.id, EventStatus::Preponed)
                .unwrap();
            store.snapshot()
        };

        let store =
            AppStore::open(Database::open(&path).unwrap(), AdminCredential::default()).unwrap();
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_subscribers_notified_per_topic() {
        let mut store = open_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let sub = store.subscribe(Topic::Events, move |topic, state| {
            sink.lock().unwrap().push((topic, state.events.len()));
        });
        assert_eq!(sub.topic(), Topic::Events);

        store.add_event(fest("1")).unwrap();
        store.login("admin", "admin123").unwrap();
        store.add_event(fest("2")).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(Topic::Events, 1), (Topic::Events, 2)]
        );

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add_event(fest("3")).unwrap();
        assert_eq!(seen.lock().unwrap().len(), 2);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_no_notification_for_missing_event() {
        let mut store = open_memory();
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        store.subscribe(Topic::Events, move |_, _| *counter.lock().unwrap() += 1);

        store
            .update_event_status("ghost", EventStatus::Completed)
            .unwrap();
        assert_eq!(*calls.lock().unwrap(), 0);
    }
}
