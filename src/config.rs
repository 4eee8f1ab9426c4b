use crate::log::LogLevel;

const DEFAULT_SCROLL_DURATION_MS: u32 = 800;
const DEFAULT_CTA_SCROLL_DURATION_MS: u32 = 1_000;
const DEFAULT_SKILL_DURATION_MS: u32 = 2_000;
const DEFAULT_HEADER_OFFSET_PX: u32 = 100;
const DEFAULT_HEADER_THROTTLE_MS: u32 = 16;
const DEFAULT_MENU_BREAKPOINT_PX: u32 = 768;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
const DEFAULT_CLEAR_ERROR_DEBOUNCE_MS: u32 = 300;
const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_500;
const DEFAULT_BANNER_MS: u32 = 5_000;
const DEFAULT_TYPING_CHAR_MS: u32 = 100;
const DEFAULT_TYPING_PAUSE_MS: u32 = 1_000;
const DEFAULT_TYPING_DELIMITER_PAUSE_MS: u32 = 200;
const DEFAULT_TYPING_START_DELAY_MS: u32 = 1_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLL_DURATION_MS_BOUNDS: (u32, u32) = (0, 10_000);
const SKILL_DURATION_MS_BOUNDS: (u32, u32) = (1, 20_000);
const HEADER_OFFSET_PX_BOUNDS: (u32, u32) = (0, 2_000);
const HEADER_THROTTLE_MS_BOUNDS: (u32, u32) = (1, 1_000);
const MENU_BREAKPOINT_PX_BOUNDS: (u32, u32) = (320, 4_096);
const DEBOUNCE_MS_BOUNDS: (u32, u32) = (0, 5_000);
const SUBMIT_DELAY_MS_BOUNDS: (u32, u32) = (0, 60_000);
const BANNER_MS_BOUNDS: (u32, u32) = (500, 60_000);
const TYPING_CHAR_MS_BOUNDS: (u32, u32) = (1, 2_000);
const TYPING_PAUSE_MS_BOUNDS: (u32, u32) = (0, 10_000);

/// Scroll target fallback when the page has no measurable header.
pub const FALLBACK_HEADER_HEIGHT_PX: f64 = 80.0;
/// Extra room left above a section after scrolling to it.
pub const SECTION_SCROLL_GAP_PX: f64 = 20.0;

/// Tunables read from `data-*` attributes on `<body>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnhancementConfig {
    pub scroll_duration_ms: u32,
    pub cta_scroll_duration_ms: u32,
    pub skill_duration_ms: u32,
    pub header_offset_px: u32,
    pub header_throttle_ms: u32,
    pub menu_breakpoint_px: u32,
    pub resize_debounce_ms: u32,
    pub clear_error_debounce_ms: u32,
    pub submit_delay_ms: u32,
    pub banner_ms: u32,
    pub typing_char_ms: u32,
    pub typing_pause_ms: u32,
    pub typing_delimiter_pause_ms: u32,
    pub typing_start_delay_ms: u32,
    pub log_level: LogLevel,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            cta_scroll_duration_ms: DEFAULT_CTA_SCROLL_DURATION_MS,
            skill_duration_ms: DEFAULT_SKILL_DURATION_MS,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            header_throttle_ms: DEFAULT_HEADER_THROTTLE_MS,
            menu_breakpoint_px: DEFAULT_MENU_BREAKPOINT_PX,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            clear_error_debounce_ms: DEFAULT_CLEAR_ERROR_DEBOUNCE_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            banner_ms: DEFAULT_BANNER_MS,
            typing_char_ms: DEFAULT_TYPING_CHAR_MS,
            typing_pause_ms: DEFAULT_TYPING_PAUSE_MS,
            typing_delimiter_pause_ms: DEFAULT_TYPING_DELIMITER_PAUSE_MS,
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl EnhancementConfig {
    /// Builds the config from an attribute lookup, e.g. `body.get_attribute`.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str, default: u32, bounds: (u32, u32)| {
            parse_u32_with_bounds(lookup(name), default, bounds)
        };

        Self {
            scroll_duration_ms: read(
                "data-scroll-duration-ms",
                DEFAULT_SCROLL_DURATION_MS,
                SCROLL_DURATION_MS_BOUNDS,
            ),
            cta_scroll_duration_ms: read(
                "data-cta-scroll-duration-ms",
                DEFAULT_CTA_SCROLL_DURATION_MS,
                SCROLL_DURATION_MS_BOUNDS,
            ),
            skill_duration_ms: read(
                "data-skill-duration-ms",
                DEFAULT_SKILL_DURATION_MS,
                SKILL_DURATION_MS_BOUNDS,
            ),
            header_offset_px: read(
                "data-header-offset-px",
                DEFAULT_HEADER_OFFSET_PX,
                HEADER_OFFSET_PX_BOUNDS,
            ),
            header_throttle_ms: read(
                "data-header-throttle-ms",
                DEFAULT_HEADER_THROTTLE_MS,
                HEADER_THROTTLE_MS_BOUNDS,
            ),
            menu_breakpoint_px: read(
                "data-menu-breakpoint-px",
                DEFAULT_MENU_BREAKPOINT_PX,
                MENU_BREAKPOINT_PX_BOUNDS,
            ),
            resize_debounce_ms: read(
                "data-resize-debounce-ms",
                DEFAULT_RESIZE_DEBOUNCE_MS,
                DEBOUNCE_MS_BOUNDS,
            ),
            clear_error_debounce_ms: read(
                "data-clear-error-debounce-ms",
                DEFAULT_CLEAR_ERROR_DEBOUNCE_MS,
                DEBOUNCE_MS_BOUNDS,
            ),
            submit_delay_ms: read(
                "data-submit-delay-ms",
                DEFAULT_SUBMIT_DELAY_MS,
                SUBMIT_DELAY_MS_BOUNDS,
            ),
            banner_ms: read("data-banner-ms", DEFAULT_BANNER_MS, BANNER_MS_BOUNDS),
            typing_char_ms: read(
                "data-typing-char-ms",
                DEFAULT_TYPING_CHAR_MS,
                TYPING_CHAR_MS_BOUNDS,
            ),
            typing_pause_ms: read(
                "data-typing-pause-ms",
                DEFAULT_TYPING_PAUSE_MS,
                TYPING_PAUSE_MS_BOUNDS,
            ),
            typing_delimiter_pause_ms: read(
                "data-typing-delimiter-pause-ms",
                DEFAULT_TYPING_DELIMITER_PAUSE_MS,
                TYPING_PAUSE_MS_BOUNDS,
            ),
            typing_start_delay_ms: read(
                "data-typing-start-delay-ms",
                DEFAULT_TYPING_START_DELAY_MS,
                TYPING_PAUSE_MS_BOUNDS,
            ),
            log_level: parse_log_level(lookup("data-log-level"), DEFAULT_LOG_LEVEL),
        }
    }
}

fn parse_u32_with_bounds(value: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" => LogLevel::Warn,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EnhancementConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        EnhancementConfig::from_attributes(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_resolve_to_defaults() {
        assert_eq!(config_from(&[]), EnhancementConfig::default());
    }

    #[test]
    fn in_bounds_values_are_accepted() {
        let config = config_from(&[
            ("data-scroll-duration-ms", " 450 "),
            ("data-menu-breakpoint-px", "1024"),
            ("data-log-level", "DEBUG"),
        ]);

        assert_eq!(config.scroll_duration_ms, 450);
        assert_eq!(config.menu_breakpoint_px, 1024);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_or_garbage_values_fall_back() {
        let config = config_from(&[
            ("data-menu-breakpoint-px", "12"),
            ("data-banner-ms", "soon"),
            ("data-header-throttle-ms", "0"),
            ("data-log-level", "trace"),
        ]);

        assert_eq!(config.menu_breakpoint_px, DEFAULT_MENU_BREAKPOINT_PX);
        assert_eq!(config.banner_ms, DEFAULT_BANNER_MS);
        assert_eq!(config.header_throttle_ms, DEFAULT_HEADER_THROTTLE_MS);
        assert_eq!(config.log_level, LogLevel::Info);
    }
}
