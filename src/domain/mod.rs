//! Domain layer: ClubHub records, value objects and read models.
//!
//! - `foundation` - ids, email, timestamps, errors, guard outcomes
//! - `user` - platform users and roles
//! - `club` - clubs and moderation status
//! - `event` - club events
//! - `registration` - event registrations
//! - `membership` - club memberships
//! - `payment` - recorded payments and amount conversion
//! - `overview` - joined read models for the overview endpoints

pub mod club;
pub mod event;
pub mod foundation;
pub mod membership;
pub mod overview;
pub mod payment;
pub mod registration;
pub mod user;
