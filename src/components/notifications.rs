//! Transient notification banners.
//!
//! `notify` pushes a banner onto the shared stack and schedules its exit:
//! visible for the configured lifetime, then a short exit animation
//! before removal from the DOM.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::{NotificationKind, NotificationQueue, Pacing};

/// Show a notification and schedule its dismissal.
pub fn notify(
    set_notifications: WriteSignal<NotificationQueue>,
    kind: NotificationKind,
    message: &str,
    pacing: Pacing,
) {
    // Mirror every banner into the console
    match kind {
        NotificationKind::Error => log::error!("{}", message),
        NotificationKind::Info => log::info!("{}", message),
    }

    let mut id = 0;
    set_notifications.update(|queue| id = queue.push(kind, message));

    spawn_local(async move {
        TimeoutFuture::new(pacing.notification_ttl_ms).await;
        set_notifications.update(|queue| queue.begin_exit(id));
        TimeoutFuture::new(pacing.notification_exit_ms).await;
        set_notifications.update(|queue| queue.remove(id));
    });
}

/// Fixed-position stack rendering the live notifications.
///
/// Items re-key on `(id, leaving)` so flipping the leaving flag swaps the
/// node and its animation from slide-in to slide-out.
#[component]
pub fn NotificationHost(notifications: ReadSignal<NotificationQueue>) -> impl IntoView {
    view! {
        <div class="notifications" id="notifications">
            <For
                each=move || notifications.with(|queue| queue.items().to_vec())
                key=|item| (item.id, item.leaving)
                children=move |item| {
                    view! {
                        <div
                            class=format!("notification {}", item.kind.css_class())
                            class:leaving=item.leaving
                        >
                            {item.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
