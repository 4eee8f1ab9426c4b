/// Result of advancing an animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<T> {
    pub value: T,
    pub finished: bool,
}

pub trait FrameAnimation {
    type Output;

    /// Advances to `timestamp_ms`. The first call pins the start time.
    fn step(&mut self, timestamp_ms: f64) -> Frame<Self::Output>;
}

/// Milliseconds since the first frame, pinning `start` on first use.
pub(crate) fn elapsed_since(start: &mut Option<f64>, timestamp_ms: f64) -> f64 {
    let started_at = *start.get_or_insert(timestamp_ms);
    (timestamp_ms - started_at).max(0.0)
}

#[cfg(target_arch = "wasm32")]
pub use browser::drive;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::FrameAnimation;
    use crate::dom::{host_supports, now_ms};
    use gloo_render::{request_animation_frame, AnimationFrame};
    use gloo_timers::callback::Timeout;
    use std::{cell::RefCell, rc::Rc};

    const FALLBACK_FRAME_MS: u32 = 16;

    enum PendingFrame {
        Animation(AnimationFrame),
        Timer(Timeout),
    }

    struct Chain<A: FrameAnimation> {
        animation: A,
        apply: Box<dyn FnMut(A::Output)>,
        pending: Option<PendingFrame>,
    }

    /// Runs `animation` to completion, handing each frame's value to `apply`.
    pub fn drive<A>(animation: A, apply: impl FnMut(A::Output) + 'static)
    where
        A: FrameAnimation + 'static,
        A::Output: 'static,
    {
        let chain = Rc::new(RefCell::new(Chain {
            animation,
            apply: Box::new(apply),
            pending: None,
        }));
        schedule(&chain);
    }

    fn schedule<A>(chain: &Rc<RefCell<Chain<A>>>)
    where
        A: FrameAnimation + 'static,
        A::Output: 'static,
    {
        let next = Rc::clone(chain);
        let pending = if host_supports("requestAnimationFrame") {
            PendingFrame::Animation(request_animation_frame(move |timestamp| {
                run_frame(&next, timestamp)
            }))
        } else {
            PendingFrame::Timer(Timeout::new(FALLBACK_FRAME_MS, move || {
                run_frame(&next, now_ms())
            }))
        };
        chain.borrow_mut().pending = Some(pending);
    }

    fn run_frame<A>(chain: &Rc<RefCell<Chain<A>>>, timestamp: f64)
    where
        A: FrameAnimation + 'static,
        A::Output: 'static,
    {
        let finished = {
            let mut chain = chain.borrow_mut();
            chain.pending.take();
            let frame = chain.animation.step(timestamp);
            (chain.apply)(frame.value);
            frame.finished
        };

        if !finished {
            schedule(chain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_pins_first_timestamp() {
        let mut start = None;
        assert_eq!(elapsed_since(&mut start, 500.0), 0.0);
        assert_eq!(elapsed_since(&mut start, 516.0), 16.0);
        assert_eq!(start, Some(500.0));
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let mut start = Some(100.0);
        assert_eq!(elapsed_since(&mut start, 90.0), 0.0);
    }
}
