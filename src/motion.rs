/// Custom properties the stylesheet reads for animation timing.
pub const REDUCED_MOTION_PROPERTIES: [(&str, &str); 2] = [
    ("--animation-duration", "0.01ms"),
    ("--transition-duration", "0.01ms"),
];

#[cfg(target_arch = "wasm32")]
pub use browser::{apply_reduced_motion, prefers_reduced_motion};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::REDUCED_MOTION_PROPERTIES;
    use crate::dom::{document, set_style};
    use web_sys::window;

    pub fn prefers_reduced_motion() -> bool {
        window()
            .and_then(|w| {
                w.match_media("(prefers-reduced-motion: reduce)")
                    .ok()
                    .flatten()
            })
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    /// Shortens stylesheet-driven animations when the user asked for less motion.
    pub fn apply_reduced_motion() -> bool {
        if !prefers_reduced_motion() {
            return false;
        }

        if let Some(root) = document().and_then(|d| d.document_element()) {
            for (property, value) in REDUCED_MOTION_PROPERTIES {
                set_style(&root, property, value);
            }
        }
        true
    }
}
