use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::util::debounce::Debouncer;

/// Follows `source`, but only lets it fall back to `false` after the debounce period.
///
/// Used for loading indicators so that quick requests do not flash a spinner.
#[cfg(feature = "web")]
pub fn use_debounced_flag(source: Signal<bool>) -> Signal<bool> {
    use gloo_timers::future::TimeoutFuture;

    let mut visible = use_signal(|| *source.peek());
    let debouncer = use_hook(Debouncer::default);

    use_effect(move || {
        let value = source();
        let settle = debouncer.set(
            value,
            move |value| visible.set(value),
            |delay| TimeoutFuture::new(delay.as_millis() as u32),
        );
        if !value {
            spawn(settle);
        }
    });

    visible
}

#[cfg(not(feature = "web"))]
pub fn use_debounced_flag(source: Signal<bool>) -> Signal<bool> {
    source
}
