use log::Level;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::ScrollThresholds;

/// Id of the optional JSON block a page uses to pick a variant or override
/// individual settings.
pub const CONFIG_ELEMENT_ID: &str = "page-behavior-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Plain stylesheet landing page.
    #[default]
    Classic,
    /// Bootstrap landing page with navbar, counters and hero section.
    Bootstrap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    pub anchors: AnchorConfig,
    pub reveal: RevealConfig,
    pub hover: Vec<HoverRule>,
    pub scroll_top: ScrollTopConfig,
    pub download: DownloadConfig,
    pub navbar: Option<NavbarConfig>,
    pub mobile_menu: Option<MobileMenuConfig>,
    pub parallax: Option<ParallaxConfig>,
    pub counters: Option<CounterConfig>,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorConfig {
    pub selector: String,
    /// Element whose height is subtracted from the scroll target.
    pub nav_offset_selector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: f64,
    pub duration_secs: f64,
    /// Extra transition delay per element index.
    pub stagger_secs: f64,
    pub reveal_classes: Vec<String>,
    pub unobserve_after_reveal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverRule {
    pub selector: String,
    pub enter: Vec<(String, String)>,
    pub leave: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollTopConfig {
    pub threshold: f64,
    pub class: String,
    /// Icon font class; a plain arrow glyph is rendered when absent.
    pub icon_class: Option<String>,
    /// Own colors and hover state, for pages without a button theme.
    pub themed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisableMode {
    /// `disabled` and `aria-disabled` attributes.
    Attribute,
    /// `pointer-events: none`.
    PointerEvents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadConfig {
    pub selector: String,
    pub loading_html: String,
    pub delay_ms: u32,
    pub disable: DisableMode,
    pub press_feedback_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarConfig {
    pub selector: String,
    pub threshold: f64,
    pub scrolled_classes: Vec<String>,
    pub top_classes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobileMenuMode {
    Toggle,
    Stagger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileMenuConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub mode: MobileMenuMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    pub selector: String,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub selector: String,
    pub attribute: String,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub fade_in_body: bool,
    /// Floating phone frame, icon pulse, hover lifts and navbar transition.
    pub decorations: bool,
    pub pulse_selector: Option<String>,
    pub pulse_delay_ms: u32,
}

fn styles(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl ControllerConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Bootstrap => Self::bootstrap(),
        }
    }

    fn classic() -> Self {
        Self {
            anchors: AnchorConfig {
                selector: "a[href^=\"#\"]".to_string(),
                nav_offset_selector: None,
            },
            reveal: RevealConfig {
                selector: ".feature-card, .step, .download-section".to_string(),
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_string(),
                offset_px: 30.0,
                duration_secs: 0.6,
                stagger_secs: 0.0,
                reveal_classes: Vec::new(),
                unobserve_after_reveal: false,
            },
            hover: vec![
                HoverRule {
                    selector: ".version-badge".to_string(),
                    enter: styles(&[("transform", "scale(1.05)")]),
                    leave: styles(&[("transform", "scale(1)")]),
                },
                HoverRule {
                    selector: ".feature-card".to_string(),
                    enter: styles(&[
                        ("transform", "translateY(-4px)"),
                        ("box-shadow", "0 8px 30px rgba(0, 0, 0, 0.15)"),
                    ]),
                    leave: styles(&[
                        ("transform", "translateY(0)"),
                        ("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.1)"),
                    ]),
                },
            ],
            scroll_top: ScrollTopConfig {
                threshold: 300.0,
                class: "scroll-to-top".to_string(),
                icon_class: None,
                themed: true,
            },
            download: DownloadConfig {
                selector: ".download-btn.primary".to_string(),
                loading_html: "<span class=\"btn-icon\">⏳</span><span class=\"btn-text\">جاري التحميل...</span>".to_string(),
                delay_ms: 2000,
                disable: DisableMode::PointerEvents,
                press_feedback_ms: Some(150),
            },
            navbar: None,
            mobile_menu: Some(MobileMenuConfig {
                toggle_selector: ".mobile-menu-toggle".to_string(),
                menu_selector: ".mobile-menu".to_string(),
                mode: MobileMenuMode::Toggle,
            }),
            parallax: None,
            counters: None,
            page: PageConfig {
                fade_in_body: true,
                decorations: false,
                pulse_selector: None,
                pulse_delay_ms: 1000,
            },
        }
    }

    fn bootstrap() -> Self {
        Self {
            anchors: AnchorConfig {
                selector: "a[href^=\"#\"]".to_string(),
                nav_offset_selector: Some(".navbar".to_string()),
            },
            reveal: RevealConfig {
                selector: ".feature-card, .card, .step-number".to_string(),
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_string(),
                offset_px: 30.0,
                duration_secs: 0.6,
                stagger_secs: 0.1,
                reveal_classes: classes(&["animate__animated", "animate__fadeInUp"]),
                unobserve_after_reveal: true,
            },
            hover: vec![
                HoverRule {
                    selector: ".feature-card".to_string(),
                    enter: styles(&[
                        ("transform", "translateY(-10px) scale(1.02)"),
                        ("box-shadow", "0 20px 40px rgba(0, 0, 0, 0.15)"),
                    ]),
                    leave: styles(&[
                        ("transform", "translateY(0) scale(1)"),
                        ("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.1)"),
                    ]),
                },
                HoverRule {
                    selector: ".phone-frame".to_string(),
                    enter: styles(&[
                        ("transform", "rotateY(10deg) rotateX(5deg)"),
                        ("transition", "transform 0.3s ease"),
                    ]),
                    leave: styles(&[("transform", "rotateY(0deg) rotateX(0deg)")]),
                },
            ],
            scroll_top: ScrollTopConfig {
                threshold: 300.0,
                class: "btn btn-primary rounded-circle position-fixed".to_string(),
                icon_class: Some("bi bi-arrow-up".to_string()),
                themed: false,
            },
            download: DownloadConfig {
                selector: ".btn-primary[href*=\".apk\"]".to_string(),
                loading_html: "<span class=\"spinner-border spinner-border-sm me-2\" role=\"status\" aria-hidden=\"true\"></span>جاري التحميل...".to_string(),
                delay_ms: 3000,
                disable: DisableMode::Attribute,
                press_feedback_ms: None,
            },
            navbar: Some(NavbarConfig {
                selector: ".navbar".to_string(),
                threshold: 50.0,
                scrolled_classes: classes(&["bg-primary", "shadow"]),
                top_classes: classes(&["bg-transparent"]),
            }),
            mobile_menu: Some(MobileMenuConfig {
                toggle_selector: ".navbar-toggler".to_string(),
                menu_selector: ".navbar-collapse".to_string(),
                mode: MobileMenuMode::Stagger,
            }),
            parallax: Some(ParallaxConfig {
                selector: ".hero-section".to_string(),
                factor: 0.5,
            }),
            counters: Some(CounterConfig {
                selector: ".counter".to_string(),
                attribute: "data-count".to_string(),
                duration_ms: 2000,
                tick_ms: 16,
            }),
            page: PageConfig {
                fade_in_body: true,
                decorations: true,
                pulse_selector: Some(".badge.bg-success".to_string()),
                pulse_delay_ms: 1000,
            },
        }
    }

    /// Reads `{"variant": "...", ...overrides}`. Overrides are merged key by
    /// key over the variant preset.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut overrides: Value = serde_json::from_str(raw)?;
        let variant = match overrides.as_object_mut().and_then(|o| o.remove("variant")) {
            Some(v) => serde_json::from_value(v)?,
            None => Variant::default(),
        };

        let mut merged = serde_json::to_value(Self::for_variant(variant))?;
        merge(&mut merged, overrides);
        serde_json::from_value(merged)
    }

    pub fn scroll_thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            scroll_top: self.scroll_top.threshold,
            navbar: self
                .navbar
                .as_ref()
                .map(|n| n.threshold)
                .unwrap_or(f64::INFINITY),
            parallax_factor: self.parallax.as_ref().map(|p| p.factor).unwrap_or(0.0),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

/// Objects merge recursively, anything else replaces.
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_classic_preset() {
        let config = ControllerConfig::from_json("{}").unwrap();
        assert_eq!(config, ControllerConfig::for_variant(Variant::Classic));
    }

    #[test]
    fn variant_key_selects_preset() {
        let config = ControllerConfig::from_json(r#"{"variant": "bootstrap"}"#).unwrap();
        assert_eq!(config.download.delay_ms, 3000);
        assert_eq!(config.anchors.nav_offset_selector.as_deref(), Some(".navbar"));
    }

    #[test]
    fn overrides_keep_unspecified_keys() {
        let config = ControllerConfig::from_json(
            r#"{"variant": "bootstrap", "download": {"delay_ms": 2500}, "scroll_top": {"threshold": 500}}"#,
        )
        .unwrap();
        assert_eq!(config.download.delay_ms, 2500);
        assert_eq!(config.download.disable, DisableMode::Attribute);
        assert_eq!(config.scroll_top.threshold, 500.0);
        assert_eq!(config.scroll_top.icon_class.as_deref(), Some("bi bi-arrow-up"));
    }

    #[test]
    fn null_override_disables_optional_behavior() {
        let config =
            ControllerConfig::from_json(r#"{"variant": "bootstrap", "counters": null}"#).unwrap();
        assert!(config.counters.is_none());
        assert!(config.parallax.is_some());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(ControllerConfig::from_json("{not json").is_err());
        assert!(ControllerConfig::from_json(r#"{"variant": "retro"}"#).is_err());
    }

    #[test]
    fn only_bootstrap_decorates() {
        assert!(!ControllerConfig::for_variant(Variant::Classic).page.decorations);
        assert!(ControllerConfig::for_variant(Variant::Bootstrap).page.decorations);
    }

    #[test]
    fn both_presets_hide_scroll_top_under_300px() {
        for variant in [Variant::Classic, Variant::Bootstrap] {
            assert_eq!(ControllerConfig::for_variant(variant).scroll_top.threshold, 300.0);
        }
    }

    #[test]
    fn classic_thresholds_never_mark_navbar_scrolled() {
        let thresholds = ControllerConfig::default().scroll_thresholds();
        assert_eq!(thresholds.navbar, f64::INFINITY);
        assert_eq!(thresholds.parallax_factor, 0.0);
    }
}
