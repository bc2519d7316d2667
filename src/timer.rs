//! One-shot timeouts that hand back a [`Subscription`].

use std::time::Duration;

use crate::subscription::Subscription;

pub trait Scheduler {
    /// Run `callback` once after `delay`, unless the subscription is torn down first.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Subscription;
}

/// `setTimeout` / `clearTimeout` on the browser window.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Subscription {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            tracing::warn!("no window available; timeout of {:?} dropped", delay);
            return Subscription::noop();
        };

        let closure = Closure::once(move || callback());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        ) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!("setTimeout failed: {:?}", err);
                return Subscription::noop();
            }
        };

        // The closure must outlive the pending timeout, so it is owned by the teardown.
        Subscription::new(move || {
            window.clear_timeout_with_handle(handle);
            drop(closure);
        })
    }
}

/// Dioxus task sleeping on the tokio timer. Must be used inside a Dioxus runtime;
/// the task is also cancelled when the owning scope goes away.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TaskScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Subscription {
        let task = dioxus::prelude::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Subscription::new(move || task.cancel())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn platform_scheduler() -> BrowserScheduler {
    BrowserScheduler
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_scheduler() -> TaskScheduler {
    TaskScheduler
}
