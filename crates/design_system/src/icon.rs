//! Inline SVG icon set used by the components.
//!
//! Glyphs are 24px stroke icons drawn with `currentColor`, so they inherit the text color of
//! the surrounding control.

use std::fmt;
use std::str::FromStr;

use leptos::*;
use ui_runtime::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Right-pointing chevron; the default breadcrumb separator.
    ChevronRight,
    /// Downward chevron used by accordion triggers.
    ChevronDown,
    /// Forward slash separator.
    Slash,
    /// Horizontal ellipsis for collapsed breadcrumb items.
    Ellipsis,
    /// Light appearance glyph.
    Sun,
    /// Dark appearance glyph.
    Moon,
}

impl IconName {
    const ALL: [Self; 6] = [
        Self::ChevronRight,
        Self::ChevronDown,
        Self::Slash,
        Self::Ellipsis,
        Self::Sun,
        Self::Moon,
    ];

    /// Stable token used for `data-icon` hooks and parsing.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Slash => "slash",
            Self::Ellipsis => "ellipsis",
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Self::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            Self::Slash => r#"<path d="M22 2 2 22"/>"#,
            Self::Ellipsis => {
                r#"<circle cx="12" cy="12" r="1"/><circle cx="19" cy="12" r="1"/><circle cx="5" cy="12" r="1"/>"#
            }
            Self::Sun => {
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
            }
            Self::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        }
    }
}

impl FromStr for IconName {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.token() == raw)
            .ok_or_else(|| ConfigError::InvalidOption {
                option: "icon",
                value: raw.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|icon| icon.token())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon sizes.
pub enum IconSize {
    /// 14px, breadcrumb separators.
    Xs,
    /// 16px, the default inside controls.
    #[default]
    Sm,
    /// 20px.
    Md,
}

impl IconSize {
    /// Pixel size.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
        }
    }
}

#[component]
/// Renders an icon as inline SVG.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Sm)] size: IconSize,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let size_px = size.px().to_string();
    view! {
        <svg
            class=class
            data-icon=icon.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
