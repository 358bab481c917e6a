//! Shared UI for the association site: session context, toast
//! notifications, public cards and the admin record dialog.

use dioxus::prelude::*;

mod session;
pub use session::{clear_token, store_token, use_session, SessionProvider, SessionState};

mod toast;
pub use toast::{push_toast, use_toasts, ToastHost, ToastLevel, Toasts};

mod cards;
pub use cards::{DoctorCard, EventCard};

mod skeleton;
pub use skeleton::SkeletonGrid;

mod record_dialog;
pub use record_dialog::RecordDialog;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
