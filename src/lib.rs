//! ClubHub - REST backend for clubs, events, memberships and payments.
//!
//! Members browse and join clubs, managers run clubs and their events,
//! administrators moderate clubs and watch platform-wide figures. Paid
//! memberships and event seats go through hosted Stripe checkout.
//!
//! Layout:
//! - `domain` - records, value objects, guard outcomes, overview read models
//! - `ports` - traits for token verification, storage and payments
//! - `application` - command and query handlers
//! - `adapters` - axum HTTP, PostgreSQL, in-memory store, JWKS, Stripe
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
