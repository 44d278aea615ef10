//! Booking API client.

mod client;
mod error;
mod request;

pub use client::{BookingApi, HttpBookingApi};
pub use error::ApiError;
pub use request::BookingRequest;
