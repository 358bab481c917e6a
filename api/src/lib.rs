//! # API crate — backend client and shared domain logic for the association site
//!
//! Everything in this crate is platform-agnostic: it compiles for the
//! browser (wasm32) and natively, so the whole layer is unit-testable
//! without a browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Backend-owned record shapes (`Doctor`, `Event`) and their field sets |
//! | [`client`] | Typed REST client over the association backend (reqwest) |
//! | [`editor`] | Record editor state machine used by the admin panel |
//! | [`session`] | Persisted bearer-token store (localStorage on the web) |
//! | [`contact`] | WhatsApp deep-link helpers for the public pages |
//! | [`config`] | Backend origin resolution |

pub mod client;
pub mod config;
pub mod contact;
pub mod editor;
mod error;
pub mod models;
pub mod session;

pub use client::{RestClient, SelectedFile};
pub use editor::{Draft, Editor, ImageMode};
pub use error::{ApiError, SubmitError};
pub use models::{Doctor, EntityKind, Event, EventStatus, ImageSource};
