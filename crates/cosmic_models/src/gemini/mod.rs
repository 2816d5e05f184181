//! Google Gemini REST client.
//!
//! Requests go to `POST {endpoint}?key={API_KEY}` with a JSON body; the
//! response is decoded once into a [`cosmic_core::ResponseShape`].

mod client;

pub use client::GeminiHttpClient;
