use std::time::Duration;

use dioxus::prelude::*;
use shared::{
    notification::{Notification, NotificationKind, Notifications},
    settings::NOTIFICATION_FADE,
    DashboardSettings,
};

use crate::timer::sleep;

/// Handle for pushing toasts from anywhere under [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Notifier {
    notifications: Signal<Notifications>,
    display: Signal<Duration>,
}

impl Notifier {
    pub fn success(mut self, message: impl Into<String>) {
        self.notifications
            .write()
            .push(NotificationKind::Success, message);
    }

    pub fn error(mut self, message: impl Into<String>) {
        self.notifications
            .write()
            .push(NotificationKind::Error, message);
    }

    /// How long later toasts stay fully visible.
    pub fn set_display(mut self, display: Duration) {
        self.display.set(display);
    }

    fn dismiss(mut self, id: u64) {
        self.notifications.write().dismiss(id);
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let notifications = use_signal(Notifications::default);
    let display = use_signal(|| DashboardSettings::default().notification_duration());
    let notifier = use_context_provider(|| Notifier {
        notifications,
        display,
    });

    let items: Vec<Notification> = notifications.read().iter().cloned().collect();

    rsx! {
      {children}
      div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 items-end",
        for notification in items {
          ToastItem {
            key: "{notification.id}",
            notification: notification.clone(),
            display: display(),
            on_expire: move |id| notifier.dismiss(id),
          }
        }
      }
    }
}

#[component]
fn ToastItem(notification: Notification, display: Duration, on_expire: EventHandler<u64>) -> Element {
    let mut fading = use_signal(|| false);
    let id = notification.id;

    // owned by this toast only, so every toast runs its own clock
    use_future(move || async move {
        sleep(display).await;
        fading.set(true);
        sleep(NOTIFICATION_FADE).await;
        on_expire.call(id);
    });

    let kind_classes = match notification.kind {
        NotificationKind::Success => "bg-emerald-600 text-white",
        NotificationKind::Error => "bg-red-600 text-white",
    };
    let opacity = if fading() { "opacity-0" } else { "opacity-100" };

    rsx! {
      div {
        class: "px-4 py-3 rounded-lg shadow-lg text-sm transition-opacity duration-300 {kind_classes} {opacity}",
        role: "status",
        "{notification.message}"
      }
    }
}
