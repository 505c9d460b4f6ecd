//! In-memory store implementing every repository port.
//!
//! Used by tests and for local development (`database.url = "memory://"`).
//! Data lives for the lifetime of the process.

mod clubs;
mod events;
mod memberships;
mod payments;
mod registrations;
mod users;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::club::Club;
use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError};
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;
use crate::domain::registration::Registration;
use crate::domain::user::User;
use crate::ports::{ListOptions, SortOrder};

/// Collections behind `tokio` read-write locks. Cloning shares the data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<Vec<User>>>,
    clubs: Arc<RwLock<Vec<Club>>>,
    events: Arc<RwLock<Vec<Event>>>,
    registrations: Arc<RwLock<Vec<Registration>>>,
    memberships: Arc<RwLock<Vec<Membership>>>,
    payments: Arc<RwLock<Vec<Payment>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a database error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Drops a club without touching records that reference it.
    pub async fn remove_club(&self, id: &ClubId) {
        self.clubs.write().await.retain(|c| &c.id != id);
    }

    pub async fn registration_count(&self) -> usize {
        self.registrations.read().await.len()
    }

    pub async fn payment_count(&self) -> usize {
        self.payments.read().await.len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::database("in-memory store unavailable"))
        } else {
            Ok(())
        }
    }
}

/// Sorts on `key` per `options` and applies the limit.
fn ordered<T, K, F>(mut items: Vec<T>, options: ListOptions, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by_key(|item| key(item));
    if options.sort == SortOrder::NewestFirst {
        items.reverse();
    }
    if let Some(limit) = options.limit {
        items.truncate(limit as usize);
    }
    items
}
