use crate::easing::ease_out_cubic;
use crate::error::EnhanceError;
use crate::frame::{elapsed_since, Frame, FrameAnimation};
use serde::{Deserialize, Deserializer};

pub const DEFAULT_SKILL_LEVEL: u8 = 80;
const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillEntry {
    pub name: String,
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Number(f64),
    Text(String),
}

fn deserialize_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(match RawLevel::deserialize(deserializer)? {
        RawLevel::Number(value) => clamp_level(value.trunc() as i64),
        RawLevel::Text(text) => parse_level(Some(&text)),
    })
}

impl SkillEntry {
    fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level,
        }
    }
}

pub fn default_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("Laser Precision", 95),
        SkillEntry::new("Space Navigation", 90),
        SkillEntry::new("Toy Protection", 100),
        SkillEntry::new("Friendship Building", 85),
        SkillEntry::new("Mission Planning", 92),
        SkillEntry::new("Karate Action", 88),
    ]
}

/// Parses a `data-skills` JSON array. Levels are truncated and clamped to 0..=100.
pub fn parse_skills(raw: &str) -> Result<Vec<SkillEntry>, EnhanceError> {
    Ok(serde_json::from_str(raw)?)
}

/// Target level from a `data-level` attribute, read from its leading integer
/// (`"90%"` is 90). Values without one fall back to [`DEFAULT_SKILL_LEVEL`].
pub fn parse_level(raw: Option<&str>) -> u8 {
    raw.and_then(leading_integer)
        .map(clamp_level)
        .unwrap_or(DEFAULT_SKILL_LEVEL)
}

fn leading_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    // long digit runs only need to saturate past the clamp
    Some(sign * digits.parse::<i64>().unwrap_or(i64::MAX))
}

fn clamp_level(level: i64) -> u8 {
    level.clamp(0, i64::from(MAX_SKILL_LEVEL)) as u8
}

/// Counts a skill level up from zero with a cubic ease-out.
#[derive(Clone, Debug)]
pub struct SkillProgress {
    target: u8,
    duration_ms: f64,
    started_at: Option<f64>,
    current: u8,
}

impl SkillProgress {
    pub fn new(target: u8, duration_ms: u32) -> Self {
        Self {
            target: target.min(MAX_SKILL_LEVEL),
            duration_ms: f64::from(duration_ms.max(1)),
            started_at: None,
            current: 0,
        }
    }
}

impl FrameAnimation for SkillProgress {
    type Output = u8;

    fn step(&mut self, timestamp_ms: f64) -> Frame<u8> {
        let elapsed = elapsed_since(&mut self.started_at, timestamp_ms);
        let progress = (elapsed / self.duration_ms).min(1.0);
        let level = (ease_out_cubic(progress) * f64::from(self.target)).floor() as u8;

        // frames can arrive with a stale timestamp; never count down
        self.current = self.current.max(level.min(self.target));

        Frame {
            value: self.current,
            finished: progress >= 1.0,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::{self, create_element, query_all, query_within, set_style};
    use crate::frame::drive;
    use crate::log::{log_event, LogLevel};
    use crate::visibility::{VisibilityOptions, VisibilityTrigger};
    use serde_json::json;
    use web_sys::Element;
    use yew::prelude::*;

    const BAR_SELECTOR: &str = ".skill-bar, .progress-bar";
    const ITEM_SELECTOR: &str = ".skill-item, .skill";

    #[derive(Properties, PartialEq)]
    struct SkillsGridProps {
        skills: Vec<SkillEntry>,
        #[prop_or_default]
        on_rendered: Callback<()>,
    }

    #[function_component(SkillsGrid)]
    fn skills_grid(props: &SkillsGridProps) -> Html {
        {
            let on_rendered = props.on_rendered.clone();
            use_effect_with((), move |_| {
                on_rendered.emit(());
                || ()
            });
        }

        html! {
            <div class="skills-grid">
                { for props.skills.iter().map(|skill| html! {
                    <div
                        class="skill-item"
                        role="progressbar"
                        aria-valuenow="0"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-label={format!("{} skill level", skill.name)}
                    >
                        <div class="skill-info">
                            <span class="skill-name">{skill.name.clone()}</span>
                            <span class="skill-percentage" aria-live="polite">{"0%"}</span>
                        </div>
                        <div class="skill-bar">
                            <div class="skill-progress" data-level={skill.level.to_string()}></div>
                        </div>
                    </div>
                }) }
            </div>
        }
    }

    struct SkillHandles {
        item: Element,
        progress: Option<Element>,
        progress_alt: Option<Element>,
        percentage: Option<Element>,
    }

    impl SkillHandles {
        fn resolve(bar: Element) -> Option<Self> {
            let item = bar.closest(ITEM_SELECTOR).ok().flatten().unwrap_or_else(|| bar.clone());
            let progress = query_within(&item, ".skill-progress");
            let progress_alt = if bar.class_list().contains("progress-bar") {
                Some(bar)
            } else {
                query_within(&item, ".progress-bar")
            };

            if progress.is_none() && progress_alt.is_none() {
                return None;
            }

            Some(Self {
                percentage: query_within(&item, ".skill-percentage"),
                item,
                progress,
                progress_alt,
            })
        }

        fn target_level(&self) -> u8 {
            let raw = self
                .progress
                .as_ref()
                .and_then(|bar| bar.get_attribute("data-level"))
                .or_else(|| {
                    self.progress_alt
                        .as_ref()
                        .and_then(|bar| bar.get_attribute("data-level"))
                });
            parse_level(raw.as_deref())
        }

        fn render(&self, level: u8) {
            let width = format!("{level}%");
            if let Some(progress) = &self.progress {
                set_style(progress, "width", &width);
                set_style(progress, "transform", &format!("scaleX({})", f64::from(level) / 100.0));
                set_style(progress, "transform-origin", "left");
            }
            if let Some(progress) = &self.progress_alt {
                set_style(progress, "width", &width);
            }
            if let Some(percentage) = &self.percentage {
                percentage.set_text_content(Some(&width));
            }
            let _ = self.item.set_attribute("aria-valuenow", &level.to_string());
        }
    }

    fn animate(bar: Element, duration_ms: u32) {
        let Some(handles) = SkillHandles::resolve(bar) else {
            return;
        };
        let progress = SkillProgress::new(handles.target_level(), duration_ms);
        drive(progress, move |level| handles.render(level));
    }

    fn observe_bars(trigger: &VisibilityTrigger) -> usize {
        let bars = query_all(BAR_SELECTOR);
        for bar in &bars {
            trigger.observe(bar);
        }
        bars.len()
    }

    fn skills_source(section: &Element, config: EnhancementConfig) -> Vec<SkillEntry> {
        let Some(raw) = section.get_attribute("data-skills") else {
            return default_skills();
        };

        match parse_skills(&raw) {
            Ok(skills) => skills,
            Err(error) => {
                log_event(
                    config.log_level,
                    LogLevel::Warn,
                    "skills.data_rejected",
                    json!({ "error": error.to_string() }),
                );
                default_skills()
            }
        }
    }

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        let duration_ms = config.skill_duration_ms;
        let trigger = VisibilityTrigger::new(VisibilityOptions::SKILLS, move |bar| {
            animate(bar, duration_ms)
        })?;

        if observe_bars(&trigger) > 0 {
            return Ok(());
        }

        let Some(section) = dom::document().and_then(|d| d.get_element_by_id("skills")) else {
            log_event(config.log_level, LogLevel::Debug, "skills.skipped", json!({}));
            return Ok(());
        };

        let container = query_within(&section, ".skills-container")
            .or_else(|| query_within(&section, ".container"))
            .unwrap_or_else(|| section.clone());
        let host = create_element("div", "skills-host")?;
        container.append_child(&host)?;

        let skills = skills_source(&section, config);
        let count = skills.len();
        let on_rendered = Callback::from(move |_| {
            observe_bars(&trigger);
        });

        yew::Renderer::<SkillsGrid>::with_root_and_props(
            host,
            SkillsGridProps {
                skills,
                on_rendered,
            },
        )
        .render();

        log_event(
            config.log_level,
            LogLevel::Debug,
            "skills.synthesized",
            json!({ "count": count }),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn level_defaults_when_absent_or_garbage() {
        assert_eq!(parse_level(None), 80);
        assert_eq!(parse_level(Some("abc")), 80);
        assert_eq!(parse_level(Some("%90")), 80);
        assert_eq!(parse_level(Some(" 92 ")), 92);
        assert_eq!(parse_level(Some("180")), 100);
    }

    #[test]
    fn level_reads_leading_integer() {
        assert_eq!(parse_level(Some("90%")), 90);
        assert_eq!(parse_level(Some("95.5")), 95);
        assert_eq!(parse_level(Some("+70px")), 70);
        assert_eq!(parse_level(Some("-5")), 0);
        assert_eq!(parse_level(Some("99999999999999999999999")), 100);
    }

    #[test]
    fn progress_follows_cubic_ease_out() {
        let mut progress = SkillProgress::new(90, 2_000);

        assert_eq!(progress.step(10_000.0), Frame { value: 0, finished: false });
        // halfway: 1 - 0.5^3 = 0.875 of 90 = 78.75
        assert_eq!(progress.step(11_000.0), Frame { value: 78, finished: false });
        assert_eq!(progress.step(12_000.0), Frame { value: 90, finished: true });
    }

    #[test]
    fn stale_timestamps_do_not_count_down() {
        let mut progress = SkillProgress::new(100, 1_000);
        progress.step(0.0);
        let ahead = progress.step(600.0).value;
        assert_eq!(progress.step(300.0).value, ahead);
    }

    #[test]
    fn default_list_has_six_entries() {
        let skills = default_skills();
        assert_eq!(skills.len(), 6);
        assert!(skills.iter().all(|skill| skill.level <= 100));
    }

    #[test]
    fn skills_json_is_parsed_and_clamped() {
        let skills = parse_skills(r#"[{"name":"Rust","level":97},{"name":"Patience","level":250}]"#)
            .expect("valid skills JSON");

        assert_eq!(
            skills,
            vec![SkillEntry::new("Rust", 97), SkillEntry::new("Patience", 100)]
        );
    }

    #[test]
    fn out_of_range_levels_do_not_reject_the_list() {
        let skills = parse_skills(
            r#"[{"name":"Big","level":300},{"name":"Low","level":-1},{"name":"Half","level":95.5},{"name":"Text","level":"88%"}]"#,
        )
        .expect("usable skills JSON");

        let levels: Vec<u8> = skills.iter().map(|skill| skill.level).collect();
        assert_eq!(levels, vec![100, 0, 95, 88]);
    }

    #[test]
    fn malformed_skills_json_is_an_error() {
        let error = parse_skills(r#"[{"name":"Rust"}]"#).expect_err("level is required");
        assert!(matches!(error, EnhanceError::SkillsData(_)));
    }

    proptest! {
        #[test]
        fn displayed_level_stays_in_range_and_never_decreases(
            target in 0u8..=100,
            duration in 1u32..5_000,
            mut deltas in proptest::collection::vec(0.0f64..400.0, 1..60),
        ) {
            let mut progress = SkillProgress::new(target, duration);
            let mut now = 0.0;
            let mut previous = progress.step(now).value;
            prop_assert_eq!(previous, 0);

            deltas.push(f64::from(duration));
            for delta in deltas {
                now += delta;
                let frame = progress.step(now);
                prop_assert!(frame.value <= target);
                prop_assert!(frame.value >= previous);
                previous = frame.value;
                if now >= f64::from(duration) {
                    prop_assert!(frame.finished);
                    prop_assert_eq!(frame.value, target);
                }
            }
        }
    }
}
