//! Accordion state machine: selection mode, default initialization, reducer, and keyboard
//! focus navigation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::option_traits;
use crate::{dom_id_segment, ConfigError, DisclosureState, OptionToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How many accordion items may be open at once.
pub enum AccordionMode {
    /// At most one open item.
    Single,
    /// Any subset of items may be open.
    Multiple,
}

impl Default for AccordionMode {
    fn default() -> Self {
        Self::Single
    }
}

impl OptionToken for AccordionMode {
    const OPTION: &'static str = "type";
    const ALL: &'static [Self] = &[Self::Single, Self::Multiple];

    fn token(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

option_traits!(AccordionMode);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Item keys opened when the accordion first renders.
pub enum DefaultValue {
    /// A single key.
    One(String),
    /// A set of keys; only valid in [`AccordionMode::Multiple`].
    Many(Vec<String>),
}

impl DefaultValue {
    /// Keys in declaration order.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::One(key) => vec![key.as_str()],
            Self::Many(keys) => keys.iter().map(String::as_str).collect(),
        }
    }

    /// Encodes the value for `data-accordion-default-value-value`.
    ///
    /// A single key is emitted verbatim; a set is emitted as a JSON array.
    pub fn to_attr(&self) -> String {
        match self {
            Self::One(key) => key.clone(),
            Self::Many(keys) => serde_json::to_string(keys).unwrap_or_default(),
        }
    }

    /// Decodes the attribute form produced by [`DefaultValue::to_attr`].
    ///
    /// JSON arrays become [`DefaultValue::Many`], JSON strings and bare text become
    /// [`DefaultValue::One`], and an empty attribute yields `None`.
    pub fn from_attr(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(values)) => Some(Self::Many(
                values
                    .into_iter()
                    .map(|value| match value {
                        serde_json::Value::String(key) => key,
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            Ok(serde_json::Value::String(key)) => Some(Self::One(key)),
            _ => Some(Self::One(raw.to_string())),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(key: &str) -> Self {
        Self::One(key.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(key: String) -> Self {
        Self::One(key)
    }
}

impl From<Vec<String>> for DefaultValue {
    fn from(keys: Vec<String>) -> Self {
        Self::Many(keys)
    }
}

impl From<Vec<&str>> for DefaultValue {
    fn from(keys: Vec<&str>) -> Self {
        Self::Many(keys.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Validated accordion configuration.
pub struct AccordionConfig {
    mode: AccordionMode,
    collapsible: bool,
    default_value: Option<DefaultValue>,
}

impl AccordionConfig {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DefaultValueMode`] when a key set is given to a single-selection
    /// accordion.
    pub fn new(
        mode: AccordionMode,
        collapsible: bool,
        default_value: Option<DefaultValue>,
    ) -> Result<Self, ConfigError> {
        if let (AccordionMode::Single, Some(DefaultValue::Many(keys))) = (mode, &default_value) {
            return Err(ConfigError::DefaultValueMode { count: keys.len() });
        }
        Ok(Self {
            mode,
            collapsible,
            default_value,
        })
    }

    /// Selection mode.
    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    /// Whether the last open item in single mode may be closed.
    pub fn collapsible(&self) -> bool {
        self.collapsible
    }

    /// Initially open keys, if any.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Declared item before state is attached.
pub struct AccordionItemSpec {
    /// Item key, unique within one accordion.
    pub value: String,
    /// Disabled items ignore every runtime action and are skipped by keyboard navigation.
    pub disabled: bool,
}

impl AccordionItemSpec {
    /// Creates an enabled item.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    /// Returns the item with its disabled flag set.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Runtime state of one accordion item.
pub struct AccordionItemState {
    /// Item key.
    pub value: String,
    /// Disabled flag fixed at construction.
    pub disabled: bool,
    /// Current disclosure state.
    pub state: DisclosureState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Open/closed state for every item of one accordion.
pub struct AccordionState {
    config: AccordionConfig,
    items: Vec<AccordionItemState>,
}

impl AccordionState {
    /// Builds initial state, opening the items named by the configured default value.
    ///
    /// Unknown default keys are ignored. Disabled items may start open.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateItemValue`] when two items share a key.
    pub fn new(
        config: AccordionConfig,
        items: impl IntoIterator<Item = AccordionItemSpec>,
    ) -> Result<Self, ConfigError> {
        let defaults: HashSet<String> = config
            .default_value()
            .map(|value| value.keys().into_iter().map(str::to_string).collect())
            .unwrap_or_default();
        let mut seen = HashSet::new();
        let mut states = Vec::new();
        for spec in items {
            if !seen.insert(spec.value.clone()) {
                return Err(ConfigError::DuplicateItemValue(spec.value));
            }
            let open = defaults.contains(&spec.value);
            states.push(AccordionItemState {
                value: spec.value,
                disabled: spec.disabled,
                state: DisclosureState::from_open(open),
            });
        }
        Ok(Self {
            config,
            items: states,
        })
    }

    /// Configuration this state was built from.
    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// Items in declaration order.
    pub fn items(&self) -> &[AccordionItemState] {
        &self.items
    }

    /// Looks up an item by key.
    pub fn item(&self, value: &str) -> Option<&AccordionItemState> {
        self.items.iter().find(|item| item.value == value)
    }

    /// Returns `true` when the item exists and is open.
    pub fn is_open(&self, value: &str) -> bool {
        self.item(value).is_some_and(|item| item.state.is_open())
    }

    /// Keys of open items in declaration order.
    pub fn open_values(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.state.is_open())
            .map(|item| item.value.clone())
            .collect()
    }

    /// Resolves the trigger that should receive focus for a navigation key.
    ///
    /// Only enabled items participate. Arrow keys wrap around. When `current` is not an
    /// enabled item, `ArrowDown` lands on the first and `ArrowUp` on the last enabled item.
    pub fn focus_target(&self, current: &str, key: NavigationKey) -> Option<&str> {
        let enabled: Vec<&str> = self
            .items
            .iter()
            .filter(|item| !item.disabled)
            .map(|item| item.value.as_str())
            .collect();
        let last = enabled.len().checked_sub(1)?;
        let position = enabled.iter().position(|value| *value == current);
        let index = match key {
            NavigationKey::ArrowDown => position.map_or(0, |index| (index + 1) % enabled.len()),
            NavigationKey::ArrowUp => match position {
                Some(0) | None => last,
                Some(index) => index - 1,
            },
            NavigationKey::Home => 0,
            NavigationKey::End => last,
        };
        enabled.get(index).copied()
    }

    fn index_of(&self, value: &str) -> Result<usize, AccordionError> {
        self.items
            .iter()
            .position(|item| item.value == value)
            .ok_or_else(|| AccordionError::ItemNotFound(value.to_string()))
    }

    fn set(&mut self, index: usize, open: bool, effects: &mut Vec<AccordionEffect>) {
        let item = &mut self.items[index];
        if item.state.is_open() == open {
            return;
        }
        item.state = DisclosureState::from_open(open);
        effects.push(if open {
            AccordionEffect::Opened(item.value.clone())
        } else {
            AccordionEffect::Closed(item.value.clone())
        });
    }

    fn open_at(&mut self, index: usize, effects: &mut Vec<AccordionEffect>) {
        if self.config.mode == AccordionMode::Single {
            for other in 0..self.items.len() {
                if other != index {
                    self.set(other, false, effects);
                }
            }
        }
        self.set(index, true, effects);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys that move focus between accordion triggers.
pub enum NavigationKey {
    /// Next enabled trigger.
    ArrowDown,
    /// Previous enabled trigger.
    ArrowUp,
    /// First enabled trigger.
    Home,
    /// Last enabled trigger.
    End,
}

impl NavigationKey {
    /// Maps a DOM `KeyboardEvent.key` value; other keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inputs to [`reduce_accordion`].
pub enum AccordionAction {
    /// Trigger activation.
    Toggle {
        /// Item key.
        value: String,
    },
    /// Programmatic open.
    Open {
        /// Item key.
        value: String,
    },
    /// Programmatic close.
    Close {
        /// Item key.
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// State changes produced by [`reduce_accordion`], in the order they happened.
pub enum AccordionEffect {
    /// The item with this key opened.
    Opened(String),
    /// The item with this key closed.
    Closed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Runtime accordion failures.
pub enum AccordionError {
    /// No item carries the requested key.
    #[error("accordion item `{0}` not found")]
    ItemNotFound(String),
}

/// Applies one action to accordion state.
///
/// # Errors
///
/// Returns [`AccordionError::ItemNotFound`] for an unknown key; state is left untouched.
pub fn reduce_accordion(
    state: &mut AccordionState,
    action: AccordionAction,
) -> Result<Vec<AccordionEffect>, AccordionError> {
    let mut effects = Vec::new();
    match action {
        AccordionAction::Toggle { value } => {
            let index = state.index_of(&value)?;
            let item = &state.items[index];
            if item.disabled {
                return Ok(effects);
            }
            if item.state.is_open() {
                if state.config.collapsible || state.config.mode == AccordionMode::Multiple {
                    state.set(index, false, &mut effects);
                }
            } else {
                state.open_at(index, &mut effects);
            }
        }
        AccordionAction::Open { value } => {
            let index = state.index_of(&value)?;
            if !state.items[index].disabled {
                state.open_at(index, &mut effects);
            }
        }
        AccordionAction::Close { value } => {
            let index = state.index_of(&value)?;
            if !state.items[index].disabled {
                state.set(index, false, &mut effects);
            }
        }
    }
    Ok(effects)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// DOM ids of one accordion item.
pub struct AccordionItemIds {
    /// Item container id.
    pub item: String,
    /// Trigger button id, referenced by the body's `aria-labelledby`.
    pub trigger: String,
    /// Body region id, referenced by the trigger's `aria-controls`.
    pub body: String,
}

/// Derives stable ids for an item from the accordion id (or `accordion`) and the item key.
pub fn accordion_item_ids(accordion_id: Option<&str>, value: &str) -> AccordionItemIds {
    let prefix = accordion_id
        .filter(|id| !id.trim().is_empty())
        .map(dom_id_segment)
        .unwrap_or_else(|| "accordion".to_string());
    let item = format!("{prefix}-item-{}", dom_id_segment(value));
    AccordionItemIds {
        trigger: format!("{item}-trigger"),
        body: format!("{item}-body"),
        item,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state(
        mode: AccordionMode,
        collapsible: bool,
        default_value: Option<DefaultValue>,
        items: &[(&str, bool)],
    ) -> AccordionState {
        let config = AccordionConfig::new(mode, collapsible, default_value).expect("config");
        AccordionState::new(
            config,
            items
                .iter()
                .map(|(value, disabled)| AccordionItemSpec::new(*value).disabled(*disabled)),
        )
        .expect("state")
    }

    fn toggle(state: &mut AccordionState, value: &str) -> Vec<AccordionEffect> {
        reduce_accordion(
            state,
            AccordionAction::Toggle {
                value: value.to_string(),
            },
        )
        .expect("toggle")
    }

    #[test]
    fn single_collapsible_toggle_walkthrough() {
        let mut accordion = state(
            AccordionMode::Single,
            true,
            Some("a".into()),
            &[("a", false), ("b", false), ("c", false)],
        );
        assert_eq!(accordion.open_values(), vec!["a".to_string()]);

        let effects = toggle(&mut accordion, "b");
        assert_eq!(
            effects,
            vec![
                AccordionEffect::Closed("a".to_string()),
                AccordionEffect::Opened("b".to_string()),
            ]
        );
        assert_eq!(accordion.open_values(), vec!["b".to_string()]);

        let effects = toggle(&mut accordion, "b");
        assert_eq!(effects, vec![AccordionEffect::Closed("b".to_string())]);
        assert!(accordion.open_values().is_empty());
    }

    #[test]
    fn single_non_collapsible_keeps_last_item_open() {
        let mut accordion = state(
            AccordionMode::Single,
            false,
            None,
            &[("a", false), ("b", false)],
        );
        toggle(&mut accordion, "a");
        let effects = toggle(&mut accordion, "a");
        assert!(effects.is_empty());
        assert_eq!(accordion.open_values(), vec!["a".to_string()]);
    }

    #[test]
    fn single_mode_never_has_more_than_one_open_item() {
        let mut accordion = state(
            AccordionMode::Single,
            true,
            None,
            &[("a", false), ("b", false), ("c", false)],
        );
        for value in ["a", "c", "c", "b", "a", "b", "b", "c"] {
            toggle(&mut accordion, value);
            assert!(accordion.open_values().len() <= 1);
        }
    }

    #[test]
    fn multiple_mode_toggles_items_independently() {
        let mut accordion = state(
            AccordionMode::Multiple,
            false,
            Some(vec!["a", "c"].into()),
            &[("a", false), ("b", false), ("c", false)],
        );
        assert_eq!(
            accordion.open_values(),
            vec!["a".to_string(), "c".to_string()]
        );

        let effects = toggle(&mut accordion, "b");
        assert_eq!(effects, vec![AccordionEffect::Opened("b".to_string())]);
        assert!(accordion.is_open("a") && accordion.is_open("c"));

        toggle(&mut accordion, "a");
        assert_eq!(
            accordion.open_values(),
            vec!["b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn single_key_default_is_accepted_in_multiple_mode() {
        let accordion = state(
            AccordionMode::Multiple,
            false,
            Some("b".into()),
            &[("a", false), ("b", false)],
        );
        assert_eq!(accordion.open_values(), vec!["b".to_string()]);
    }

    #[test]
    fn key_set_default_is_rejected_in_single_mode() {
        let err = AccordionConfig::new(
            AccordionMode::Single,
            false,
            Some(vec!["a", "b"].into()),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DefaultValueMode { count: 2 });
    }

    #[test]
    fn duplicate_item_values_are_rejected() {
        let config = AccordionConfig::new(AccordionMode::Multiple, false, None).expect("config");
        let err = AccordionState::new(
            config,
            [AccordionItemSpec::new("a"), AccordionItemSpec::new("a")],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateItemValue("a".to_string()));
    }

    #[test]
    fn equal_configurations_initialize_identically() {
        let items = [("a", false), ("b", true), ("c", false)];
        for (mode, default_value) in [
            (AccordionMode::Multiple, DefaultValue::from(vec!["c", "b"])),
            (AccordionMode::Multiple, DefaultValue::from("a")),
            (AccordionMode::Single, DefaultValue::from("c")),
        ] {
            let first = state(mode, false, Some(default_value.clone()), &items);
            let second = state(mode, false, Some(default_value), &items);
            assert_eq!(first.open_values(), second.open_values());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn mode_tokens_match_the_type_attribute() {
        assert_eq!("multiple".parse::<AccordionMode>(), Ok(AccordionMode::Multiple));
        assert_eq!(AccordionMode::Single.to_string(), "single");
        assert!(matches!(
            "many".parse::<AccordionMode>(),
            Err(ConfigError::InvalidOption { option: "type", .. })
        ));
    }

    #[test]
    fn unknown_default_keys_are_ignored() {
        let accordion = state(
            AccordionMode::Multiple,
            false,
            Some(vec!["zzz", "b"].into()),
            &[("a", false), ("b", false)],
        );
        assert_eq!(accordion.open_values(), vec!["b".to_string()]);
    }

    #[test]
    fn disabled_items_ignore_every_action() {
        let mut accordion = state(
            AccordionMode::Multiple,
            true,
            Some(vec!["locked-open"].into()),
            &[("locked-open", true), ("locked", true), ("free", false)],
        );
        for action in [
            AccordionAction::Toggle {
                value: "locked".to_string(),
            },
            AccordionAction::Open {
                value: "locked".to_string(),
            },
            AccordionAction::Close {
                value: "locked-open".to_string(),
            },
            AccordionAction::Toggle {
                value: "locked-open".to_string(),
            },
        ] {
            assert_eq!(reduce_accordion(&mut accordion, action), Ok(Vec::new()));
        }
        assert_eq!(accordion.open_values(), vec!["locked-open".to_string()]);
    }

    #[test]
    fn programmatic_open_in_single_mode_closes_others() {
        let mut accordion = state(
            AccordionMode::Single,
            false,
            Some("a".into()),
            &[("a", false), ("b", false)],
        );
        let effects = reduce_accordion(
            &mut accordion,
            AccordionAction::Open {
                value: "b".to_string(),
            },
        )
        .expect("open");
        assert_eq!(
            effects,
            vec![
                AccordionEffect::Closed("a".to_string()),
                AccordionEffect::Opened("b".to_string()),
            ]
        );

        let effects = reduce_accordion(
            &mut accordion,
            AccordionAction::Close {
                value: "b".to_string(),
            },
        )
        .expect("close");
        assert_eq!(effects, vec![AccordionEffect::Closed("b".to_string())]);
    }

    #[test]
    fn unknown_value_is_reported_without_touching_state() {
        let mut accordion = state(AccordionMode::Single, true, Some("a".into()), &[("a", false)]);
        let before = accordion.clone();
        let err = reduce_accordion(
            &mut accordion,
            AccordionAction::Toggle {
                value: "missing".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, AccordionError::ItemNotFound("missing".to_string()));
        assert_eq!(accordion, before);
    }

    #[test]
    fn keyboard_navigation_skips_disabled_and_wraps() {
        let accordion = state(
            AccordionMode::Single,
            false,
            None,
            &[("a", false), ("b", true), ("c", false), ("d", false)],
        );
        assert_eq!(accordion.focus_target("a", NavigationKey::ArrowDown), Some("c"));
        assert_eq!(accordion.focus_target("d", NavigationKey::ArrowDown), Some("a"));
        assert_eq!(accordion.focus_target("a", NavigationKey::ArrowUp), Some("d"));
        assert_eq!(accordion.focus_target("c", NavigationKey::ArrowUp), Some("a"));
        assert_eq!(accordion.focus_target("c", NavigationKey::Home), Some("a"));
        assert_eq!(accordion.focus_target("a", NavigationKey::End), Some("d"));
        assert_eq!(accordion.focus_target("b", NavigationKey::ArrowDown), Some("a"));
        assert_eq!(accordion.focus_target("b", NavigationKey::ArrowUp), Some("d"));
    }

    #[test]
    fn navigation_with_no_enabled_items_yields_nothing() {
        let accordion = state(AccordionMode::Single, false, None, &[("a", true)]);
        assert_eq!(accordion.focus_target("a", NavigationKey::Home), None);
        assert_eq!(NavigationKey::from_key("Tab"), None);
        assert_eq!(NavigationKey::from_key("End"), Some(NavigationKey::End));
    }

    #[test]
    fn navigation_does_not_change_open_state() {
        let accordion = state(
            AccordionMode::Single,
            false,
            Some("a".into()),
            &[("a", false), ("b", false)],
        );
        let before = accordion.open_values();
        let _ = accordion.focus_target("a", NavigationKey::ArrowDown);
        assert_eq!(accordion.open_values(), before);
    }

    #[test]
    fn default_value_attribute_wire_form() {
        let many = DefaultValue::from(vec!["a", "b"]);
        assert_eq!(many.to_attr(), r#"["a","b"]"#);
        assert_eq!(DefaultValue::from_attr(&many.to_attr()), Some(many));
        assert_eq!(
            DefaultValue::from_attr("faq-1"),
            Some(DefaultValue::One("faq-1".to_string()))
        );
        assert_eq!(
            DefaultValue::from_attr("\"faq-2\""),
            Some(DefaultValue::One("faq-2".to_string()))
        );
        assert_eq!(DefaultValue::from_attr(""), None);
    }

    #[test]
    fn item_ids_are_derived_from_keys() {
        assert_eq!(
            accordion_item_ids(None, "shipping"),
            AccordionItemIds {
                item: "accordion-item-shipping".to_string(),
                trigger: "accordion-item-shipping-trigger".to_string(),
                body: "accordion-item-shipping-body".to_string(),
            }
        );
        assert_eq!(
            accordion_item_ids(Some("faq"), "a b").trigger,
            "faq-item-a_20b-trigger"
        );
        assert_eq!(accordion_item_ids(Some("  "), "a").item, "accordion-item-a");
    }

    #[test]
    fn keys_that_differ_only_in_unsafe_characters_get_distinct_ids() {
        assert_ne!(
            accordion_item_ids(Some("faq"), "a b").trigger,
            accordion_item_ids(Some("faq"), "a-b").trigger
        );
        assert_ne!(
            accordion_item_ids(Some("faq"), "日本").body,
            accordion_item_ids(Some("faq"), "中国").body
        );
    }
}
