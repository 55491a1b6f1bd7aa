//! トースト通知コンポーネント

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use text_grabber_common::Notification;

/// 表示中のトースト
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// トースト一覧
#[derive(Debug, Clone, Default)]
pub struct ToastList {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastList {
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            notification,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// トーストの追加口（表示時間が過ぎると自動で消える）
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<ToastList>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(ToastList::default()),
        }
    }

    pub fn push(&self, notification: Notification) {
        let millis = u32::try_from(notification.duration.as_millis()).unwrap_or(u32::MAX);
        let Some(id) = self.toasts.try_update(|t| t.push(notification)) else {
            return;
        };

        let toasts = self.toasts;
        Timeout::new(millis, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| {
            t.dismiss(id);
        });
    }

    fn items(&self) -> Vec<Toast> {
        self.toasts.with(|t| t.items().to_vec())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toasts(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || toaster.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast toast-{}", toast.notification.level.as_str());
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(id)>
                            <strong>{toast.notification.title}</strong>
                            <p>{toast.notification.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
