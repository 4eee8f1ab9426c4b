#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl VisibilityOptions {
    pub const SKILLS: Self = Self {
        threshold: 0.3,
        root_margin: "0px 0px -10% 0px",
    };
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -5% 0px",
    };
    pub const LAZY_IMAGES: Self = Self {
        threshold: 0.0,
        root_margin: "0px",
    };
}

/// Elements still waiting for their first intersection.
#[derive(Debug)]
pub struct PendingSet<T> {
    waiting: Vec<T>,
}

impl<T> Default for PendingSet<T> {
    fn default() -> Self {
        Self { waiting: Vec::new() }
    }
}

impl<T: PartialEq> PendingSet<T> {
    /// Returns false when `item` is already registered.
    pub fn register(&mut self, item: T) -> bool {
        if self.waiting.contains(&item) {
            return false;
        }
        self.waiting.push(item);
        true
    }

    /// Removes `item` if it was waiting. Only the first call for an item succeeds.
    pub fn take(&mut self, item: &T) -> bool {
        let Some(position) = self.waiting.iter().position(|candidate| candidate == item) else {
            return false;
        };
        self.waiting.swap_remove(position);
        true
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::VisibilityTrigger;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{PendingSet, VisibilityOptions};
    use crate::dom::host_supports;
    use crate::error::EnhanceError;
    use gloo_timers::callback::Timeout;
    use js_sys::Array;
    use std::{cell::RefCell, rc::Rc};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    const FALLBACK_REVEAL_MS: u32 = 100;

    type OnFirstVisible = Rc<dyn Fn(Element)>;

    /// Fires `on_first_visible` once per observed element.
    ///
    /// Without `IntersectionObserver` every element counts as visible shortly
    /// after registration.
    #[derive(Clone)]
    pub struct VisibilityTrigger {
        pending: Rc<RefCell<PendingSet<Element>>>,
        on_first_visible: OnFirstVisible,
        observer: Option<IntersectionObserver>,
    }

    impl VisibilityTrigger {
        pub fn new(
            options: VisibilityOptions,
            on_first_visible: impl Fn(Element) + 'static,
        ) -> Result<Self, EnhanceError> {
            let pending = Rc::new(RefCell::new(PendingSet::default()));
            let on_first_visible: OnFirstVisible = Rc::new(on_first_visible);

            let observer = if host_supports("IntersectionObserver") {
                Some(build_observer(options, pending.clone(), on_first_visible.clone())?)
            } else {
                None
            };

            Ok(Self {
                pending,
                on_first_visible,
                observer,
            })
        }

        pub fn observe(&self, element: &Element) {
            if !self.pending.borrow_mut().register(element.clone()) {
                return;
            }

            match &self.observer {
                Some(observer) => observer.observe(element),
                None => {
                    let pending = self.pending.clone();
                    let on_first_visible = self.on_first_visible.clone();
                    let element = element.clone();
                    Timeout::new(FALLBACK_REVEAL_MS, move || {
                        let first = pending.borrow_mut().take(&element);
                        if first {
                            on_first_visible(element);
                        }
                    })
                    .forget();
                }
            }
        }
    }

    fn build_observer(
        options: VisibilityOptions,
        pending: Rc<RefCell<PendingSet<Element>>>,
        on_first_visible: OnFirstVisible,
    ) -> Result<IntersectionObserver, EnhanceError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    let first = pending.borrow_mut().take(&target);
                    if first {
                        observer.unobserve(&target);
                        on_first_visible(target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();
        Ok(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_intersections_fire_once_per_element() {
        let mut pending = PendingSet::default();
        assert!(pending.register("card"));
        assert!(pending.register("stat"));

        let mut fired = Vec::new();
        for (element, intersecting) in [
            ("card", true),
            ("card", false),
            ("card", true),
            ("stat", false),
            ("stat", true),
            ("card", true),
        ] {
            if intersecting && pending.take(&element) {
                fired.push(element);
            }
        }

        assert_eq!(fired, vec!["card", "stat"]);
        assert_eq!(pending.len(), 0);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut pending = PendingSet::default();
        assert!(pending.register(7));
        assert!(!pending.register(7));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn unknown_elements_never_fire() {
        let mut pending: PendingSet<&str> = PendingSet::default();
        assert!(!pending.take(&"ghost"));
    }
}
