//! Closed option sets accepted by component constructors.
//!
//! Every option enum maps to a stable lowercase token. Parsing is strict: unknown tokens are a
//! [`ConfigError::InvalidOption`], never silently coerced to a default.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Shared surface of closed option enums.
pub trait OptionToken: Copy + 'static {
    /// Option name used in error messages.
    const OPTION: &'static str;
    /// Every member of the set, in declaration order.
    const ALL: &'static [Self];

    /// Stable token emitted into markup and accepted by [`parse_option`].
    fn token(self) -> &'static str;
}

/// Parses `raw` into a member of the option set `T`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOption`] when `raw` matches no token of `T`.
pub fn parse_option<T: OptionToken>(raw: &str) -> Result<T, ConfigError> {
    T::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.token() == raw)
        .ok_or_else(|| ConfigError::InvalidOption {
            option: T::OPTION,
            value: raw.to_string(),
            expected: T::ALL
                .iter()
                .map(|candidate| candidate.token())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Implements `FromStr` (via [`parse_option`]) and `Display` (the token) for an option enum.
macro_rules! option_traits {
    ($ty:ty) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::ConfigError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                $crate::parse_option(raw)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::OptionToken::token(*self))
            }
        }
    };
}

pub(crate) use option_traits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Button visual variants.
pub enum ButtonVariant {
    /// Primary filled button.
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered button on the page background.
    Outline,
    /// Muted filled button.
    Secondary,
    /// Transparent until hovered.
    Ghost,
    /// Inline text link styling.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl OptionToken for ButtonVariant {
    const OPTION: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

option_traits!(ButtonVariant);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Default height and padding.
    Default,
    /// Compact button.
    Sm,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
    /// Small square icon-only button.
    IconSm,
    /// Large square icon-only button.
    IconLg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl OptionToken for ButtonSize {
    const OPTION: &'static str = "size";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Sm,
        Self::Lg,
        Self::Icon,
        Self::IconSm,
        Self::IconLg,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
            Self::IconSm => "icon_sm",
            Self::IconLg => "icon_lg",
        }
    }
}

option_traits!(ButtonSize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Form submission behavior of a `<button>` element.
pub enum ButtonType {
    /// Plain button.
    Button,
    /// Submits the enclosing form.
    Submit,
    /// Resets the enclosing form.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl OptionToken for ButtonType {
    const OPTION: &'static str = "type";
    const ALL: &'static [Self] = &[Self::Button, Self::Submit, Self::Reset];

    fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

option_traits!(ButtonType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Element kind rendered by the button component.
pub enum ButtonTag {
    /// `<button>` element.
    #[serde(rename = "button")]
    Button,
    /// `<a>` element, for navigation styled as a button.
    #[serde(rename = "a")]
    Anchor,
}

impl Default for ButtonTag {
    fn default() -> Self {
        Self::Button
    }
}

impl OptionToken for ButtonTag {
    const OPTION: &'static str = "tag";
    const ALL: &'static [Self] = &[Self::Button, Self::Anchor];

    fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Anchor => "a",
        }
    }
}

option_traits!(ButtonTag);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Badge visual variants.
pub enum BadgeVariant {
    /// Primary filled badge.
    Default,
    /// Muted filled badge.
    Secondary,
    /// Destructive badge.
    Destructive,
    /// Bordered badge.
    Outline,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl OptionToken for BadgeVariant {
    const OPTION: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

option_traits!(BadgeVariant);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Avatar diameter tokens.
pub enum AvatarSize {
    /// 2rem avatar.
    Sm,
    /// 2.5rem avatar.
    Md,
    /// 3.5rem avatar.
    Lg,
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self::Md
    }
}

impl OptionToken for AvatarSize {
    const OPTION: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

option_traits!(AvatarSize);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_parse_back_to_the_same_member() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(*variant));
        }
        assert_eq!("icon_sm".parse::<ButtonSize>(), Ok(ButtonSize::IconSm));
        assert_eq!("a".parse::<ButtonTag>(), Ok(ButtonTag::Anchor));
        assert_eq!("lg".parse::<AvatarSize>(), Ok(AvatarSize::Lg));
    }

    #[test]
    fn unknown_variant_is_rejected_with_the_accepted_set() {
        let err = "primary".parse::<BadgeVariant>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidOption {
                option: "variant",
                value: "primary".to_string(),
                expected: "default, secondary, destructive, outline".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid variant: `primary` (expected one of: default, secondary, destructive, outline)"
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Ghost".parse::<ButtonVariant>().is_err());
        assert!("SUBMIT".parse::<ButtonType>().is_err());
    }

    #[test]
    fn serde_uses_the_markup_tokens() {
        assert_eq!(
            serde_json::to_string(&ButtonSize::IconLg).expect("serialize"),
            "\"icon_lg\""
        );
        assert_eq!(
            serde_json::from_str::<ButtonTag>("\"a\"").expect("deserialize"),
            ButtonTag::Anchor
        );
        assert!(serde_json::from_str::<AvatarSize>("\"xl\"").is_err());
    }

    #[test]
    fn defaults_match_the_documented_component_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
        assert_eq!(ButtonType::default(), ButtonType::Button);
        assert_eq!(AvatarSize::default(), AvatarSize::Md);
        assert_eq!(BadgeVariant::default().to_string(), "default");
    }
}
