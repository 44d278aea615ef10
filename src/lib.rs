#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal booking client for Strajk bowling lanes.
//!
//! The booking form validates a [`model::BookingDraft`], submits it through a
//! [`api::BookingApi`], and keeps the resulting [`model::BookingConfirmation`]
//! in [`storage::SessionStorage`] so it can be shown again later.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod tui;
