//! Toast notifications, provided through context like the session state.

use dioxus::prelude::*;

/// How long a toast stays on screen.
const TOAST_TTL_MS: f64 = 4000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    created_ms: f64,
}

impl Toast {
    fn expired_at(&self, now: f64) -> bool {
        now - self.created_ms > TOAST_TTL_MS
    }
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let mut state = toasts.write();
    let id = state.next_id;
    state.next_id += 1;
    state.entries.push(Toast {
        id,
        level,
        message: message.to_string(),
        created_ms: now_ms(),
    });
}

/// Provides the toast context and renders the stacked notifications.
/// Wrap the router with this component.
#[component]
pub fn ToastHost(children: Element) -> Element {
    let mut toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    // Sweep of expired toasts: one timer armed for the oldest entry's
    // deadline, idle while the stack is empty (browser only; toasts are
    // also dismissable by click). Rearms whenever the stack changes.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(oldest) = toasts()
            .entries
            .iter()
            .map(|t| t.created_ms)
            .reduce(f64::min)
        else {
            return;
        };
        spawn(async move {
            // Small margin so the timer lands past the deadline.
            let wait = (oldest + TOAST_TTL_MS - now_ms()).max(0.0) as u64 + 50;
            gloo_timers::future::sleep(std::time::Duration::from_millis(wait)).await;
            let now = now_ms();
            if toasts().entries.iter().any(|t| t.expired_at(now)) {
                toasts.write().entries.retain(|t| !t.expired_at(now));
            }
        });
    });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in toasts().entries {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id: u64| {
                        toasts.write().entries.retain(|t| t.id != id);
                    },
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let class = match toast.level {
        ToastLevel::Success => "toast toast-success",
        ToastLevel::Error => "toast toast-error",
    };
    let id = toast.id;

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| on_dismiss.call(id),
            "{toast.message}"
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast_at(created_ms: f64) -> Toast {
        Toast {
            id: 1,
            level: ToastLevel::Success,
            message: "Removido com sucesso".to_string(),
            created_ms,
        }
    }

    #[test]
    fn a_toast_survives_until_its_deadline() {
        let toast = toast_at(1_000.0);
        assert!(!toast.expired_at(1_000.0));
        assert!(!toast.expired_at(1_000.0 + TOAST_TTL_MS));
    }

    #[test]
    fn a_toast_expires_past_its_deadline() {
        let toast = toast_at(1_000.0);
        assert!(toast.expired_at(1_001.0 + TOAST_TTL_MS));
    }
}
