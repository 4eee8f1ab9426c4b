/// Accepts at most one call per interval. Rejected calls are dropped.
#[derive(Clone, Debug)]
pub struct ThrottleGate {
    interval_ms: f64,
    last_accepted: Option<f64>,
}

impl ThrottleGate {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_accepted: None,
        }
    }

    pub fn try_accept(&mut self, now_ms: f64) -> bool {
        match self.last_accepted {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_accepted = Some(now_ms);
                true
            }
        }
    }
}

/// Collapses bursts of calls into one.
///
/// Trailing mode keeps the latest arguments until [`DebounceState::expire`]
/// is called by the quiet-period timer. Leading mode (`immediate`) hands back
/// the first call of a quiet period and swallows the rest.
#[derive(Clone, Debug)]
pub struct DebounceState<A> {
    immediate: bool,
    armed: bool,
    pending: Option<A>,
}

impl<A> DebounceState<A> {
    pub fn new(immediate: bool) -> Self {
        Self {
            immediate,
            armed: false,
            pending: None,
        }
    }

    /// Records a call. Returns the arguments to run synchronously, if any.
    /// The caller must (re)start the quiet-period timer after every call.
    pub fn call(&mut self, args: A) -> Option<A> {
        let call_now = self.immediate && !self.armed;
        self.armed = true;

        if self.immediate {
            return call_now.then_some(args);
        }

        self.pending = Some(args);
        None
    }

    /// Quiet period elapsed. Returns the trailing call to run, if any.
    pub fn expire(&mut self) -> Option<A> {
        self.armed = false;
        self.pending.take()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{debounce, throttle};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{DebounceState, ThrottleGate};
    use crate::dom::now_ms;
    use gloo_timers::callback::Timeout;
    use std::{cell::RefCell, rc::Rc};

    pub fn throttle<A>(interval_ms: u32, mut callback: impl FnMut(A)) -> impl FnMut(A) {
        let mut gate = ThrottleGate::new(interval_ms);
        move |args| {
            if gate.try_accept(now_ms()) {
                callback(args);
            }
        }
    }

    pub fn debounce<A: 'static>(
        wait_ms: u32,
        immediate: bool,
        callback: impl FnMut(A) + 'static,
    ) -> impl FnMut(A) {
        let callback = Rc::new(RefCell::new(callback));
        let state = Rc::new(RefCell::new(DebounceState::new(immediate)));
        let mut timer: Option<Timeout> = None;

        move |args| {
            let run_now = state.borrow_mut().call(args);

            let timer_state = state.clone();
            let timer_callback = callback.clone();
            let next = Timeout::new(wait_ms, move || {
                let trailing = timer_state.borrow_mut().expire();
                if let Some(args) = trailing {
                    (timer_callback.borrow_mut())(args);
                }
            });
            if let Some(previous) = timer.replace(next) {
                previous.cancel();
            }

            if let Some(args) = run_now {
                (callback.borrow_mut())(args);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn throttle_accepts_first_call_and_drops_the_rest_of_the_window() {
        let mut gate = ThrottleGate::new(100);

        assert!(gate.try_accept(0.0));
        assert!(!gate.try_accept(10.0));
        assert!(!gate.try_accept(99.9));
        assert!(gate.try_accept(100.0));
        assert!(!gate.try_accept(150.0));
        assert!(gate.try_accept(230.0));
    }

    #[test]
    fn trailing_debounce_fires_once_with_last_arguments() {
        let mut state = DebounceState::new(false);

        for value in 1..=5 {
            assert_eq!(state.call(value), None);
        }

        assert_eq!(state.expire(), Some(5));
        assert_eq!(state.expire(), None);
    }

    #[test]
    fn leading_debounce_fires_first_call_then_waits_for_quiet() {
        let mut state = DebounceState::new(true);

        assert_eq!(state.call("a"), Some("a"));
        assert_eq!(state.call("b"), None);
        assert_eq!(state.call("c"), None);
        assert_eq!(state.expire(), None);

        assert_eq!(state.call("d"), Some("d"));
    }

    proptest! {
        #[test]
        fn throttle_invokes_once_per_window(
            interval in 1u32..5_000,
            offsets in proptest::collection::vec(0.0f64..1.0, 1..20),
        ) {
            let mut gate = ThrottleGate::new(interval);
            let window = f64::from(interval);
            let start = 1_000.0;

            let mut accepted = 0;
            for fraction in &offsets {
                if gate.try_accept(start + fraction * window * 0.999) {
                    accepted += 1;
                }
            }
            prop_assert!(accepted <= 1);
            prop_assert!(gate.try_accept(start + offsets.iter().cloned().fold(0.0, f64::max) * window + window));
        }

        #[test]
        fn trailing_debounce_collapses_any_burst(values in proptest::collection::vec(any::<i32>(), 1..50)) {
            let mut state = DebounceState::new(false);
            for value in &values {
                prop_assert_eq!(state.call(*value), None);
            }
            prop_assert_eq!(state.expire(), values.last().copied());
        }
    }
}
