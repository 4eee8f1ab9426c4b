pub const PHRASE_DELIMITER: &str = " • ";
pub const SUBTITLE_SELECTOR: &str = ".hero-subtitle, .hero-content h2";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub char_ms: u32,
    pub pause_ms: u32,
    pub delimiter_pause_ms: u32,
}

/// Text to show and how long to hold it before the next frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub hold_ms: u32,
}

/// Types the delimiter-separated phrases of `text` one character at a time.
///
/// Phrases accumulate left to right; the script ends after the last phrase
/// and never loops.
pub fn typing_frames(text: &str, timings: TypingTimings) -> Vec<TypingFrame> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let phrases: Vec<&str> = text.split(PHRASE_DELIMITER).collect();
    let mut frames = Vec::new();
    let mut shown = String::new();

    for (index, phrase) in phrases.iter().enumerate() {
        for character in phrase.chars() {
            shown.push(character);
            frames.push(TypingFrame {
                text: shown.clone(),
                hold_ms: timings.char_ms,
            });
        }

        if phrase.is_empty() {
            frames.push(TypingFrame {
                text: shown.clone(),
                hold_ms: timings.pause_ms,
            });
        } else if let Some(last) = frames.last_mut() {
            last.hold_ms += timings.pause_ms;
        }

        if index + 1 < phrases.len() {
            shown.push_str(PHRASE_DELIMITER);
            frames.push(TypingFrame {
                text: shown.clone(),
                hold_ms: timings.delimiter_pause_ms,
            });
        }
    }

    frames
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::query;
    use crate::error::EnhanceError;
    use crate::log::{log_event, LogLevel};
    use crate::motion::prefers_reduced_motion;
    use gloo_timers::future::TimeoutFuture;
    use serde_json::json;
    use wasm_bindgen_futures::spawn_local;

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        let Some(subtitle) = query(SUBTITLE_SELECTOR) else {
            log_event(config.log_level, LogLevel::Debug, "typing.skipped", json!({}));
            return Ok(());
        };
        if prefers_reduced_motion() {
            log_event(
                config.log_level,
                LogLevel::Debug,
                "typing.skipped",
                json!({ "reason": "reduced-motion" }),
            );
            return Ok(());
        }

        let frames = typing_frames(
            &subtitle.text_content().unwrap_or_default(),
            TypingTimings {
                char_ms: config.typing_char_ms,
                pause_ms: config.typing_pause_ms,
                delimiter_pause_ms: config.typing_delimiter_pause_ms,
            },
        );
        if frames.is_empty() {
            return Ok(());
        }

        spawn_local(async move {
            TimeoutFuture::new(config.typing_start_delay_ms).await;
            for frame in frames {
                subtitle.set_text_content(Some(&frame.text));
                TimeoutFuture::new(frame.hold_ms).await;
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMINGS: TypingTimings = TypingTimings {
        char_ms: 100,
        pause_ms: 1_000,
        delimiter_pause_ms: 200,
    };

    fn frame(text: &str, hold_ms: u32) -> TypingFrame {
        TypingFrame {
            text: text.to_string(),
            hold_ms,
        }
    }

    #[test]
    fn phrases_accumulate_with_delimiter_between_them() {
        let frames = typing_frames("Go • Rs", TIMINGS);

        assert_eq!(
            frames,
            vec![
                frame("G", 100),
                frame("Go", 1_100),
                frame("Go • ", 200),
                frame("Go • R", 100),
                frame("Go • Rs", 1_100),
            ]
        );
    }

    #[test]
    fn single_phrase_has_no_trailing_delimiter() {
        let frames = typing_frames("  Hi\n", TIMINGS);
        assert_eq!(frames, vec![frame("H", 100), frame("Hi", 1_100)]);
    }

    #[test]
    fn empty_text_types_nothing() {
        assert!(typing_frames("   ", TIMINGS).is_empty());
    }

    #[test]
    fn empty_phrase_still_pauses() {
        let frames = typing_frames("A •  • B", TIMINGS);
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();

        assert_eq!(texts, vec!["A", "A • ", "A • ", "A •  • ", "A •  • B"]);
        assert_eq!(frames[2].hold_ms, 1_000);
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let frames = typing_frames("né", TIMINGS);
        assert_eq!(frames[1].text, "né");
        assert_eq!(frames.len(), 2);
    }
}
