//! The persisted settings document

use crate::core::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Compiled-in defaults for the settings document
const SETTINGS_DEFAULTS: &str = include_str!("../../../assets/DefaultSettings.json");

/// Names accepted by [`Settings::get_toggle`] and [`Settings::set_toggle`]
pub const TOGGLE_NAMES: [&str; 3] = ["opted_in", "showExtensionInfo", "percent_main_page"];

/// A boolean option that remembers whether the user ever changed it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    /// Current value
    pub value: bool,
    /// Set once the user changes the value
    #[serde(default)]
    pub changed: bool,
}

/// The whole key-value store viewed as settings
///
/// `user_data` entries are kept as raw JSON so one user's malformed record
/// never blocks reading or rewriting another's. Keys this struct does not know
/// (such as `<title>-catmap` entries) are carried in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Opt-in to optional features
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opted_in: Option<Toggle>,

    /// Show the extension info banner
    #[serde(
        rename = "showExtensionInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub show_extension_info: Option<Toggle>,

    /// Show percents on the main grades page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_main_page: Option<Toggle>,

    /// `USERDATA_<username>` to `{ courses: [...] }`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Map<String, Value>>,

    /// Last user whose courses were saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_recent_user: Option<String>,

    /// Every other top-level key
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Settings {
    /// Settings from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded defaults are not valid JSON for this schema.
    #[must_use]
    pub fn from_defaults() -> Self {
        serde_json::from_str(SETTINGS_DEFAULTS)
            .expect("Failed to parse compiled-in default settings")
    }

    /// View a store document as settings
    ///
    /// # Errors
    /// Returns an error if a known key holds a value of the wrong shape.
    pub fn from_document(document: Map<String, Value>) -> Result<Self, StoreError> {
        Ok(serde_json::from_value(Value::Object(document))?)
    }

    /// Top-level entries to write back to the store
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_document(&self) -> Result<Map<String, Value>, StoreError> {
        match serde_json::to_value(self)? {
            Value::Object(document) => Ok(document),
            _ => Err(StoreError::Schema(
                "settings did not serialize to an object".to_string(),
            )),
        }
    }

    /// Fill fields that are absent here from `defaults`. Present fields are never replaced.
    ///
    /// # Returns
    ///
    /// `true` if any field was filled
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.opted_in.is_none() && defaults.opted_in.is_some() {
            self.opted_in = defaults.opted_in;
            changed = true;
        }
        if self.show_extension_info.is_none() && defaults.show_extension_info.is_some() {
            self.show_extension_info = defaults.show_extension_info;
            changed = true;
        }
        if self.percent_main_page.is_none() && defaults.percent_main_page.is_some() {
            self.percent_main_page = defaults.percent_main_page;
            changed = true;
        }
        if self.user_data.is_none() && defaults.user_data.is_some() {
            self.user_data.clone_from(&defaults.user_data);
            changed = true;
        }
        if self.most_recent_user.is_none() && defaults.most_recent_user.is_some() {
            self.most_recent_user.clone_from(&defaults.most_recent_user);
            changed = true;
        }

        changed
    }

    fn toggle_slot(&mut self, name: &str) -> Option<&mut Option<Toggle>> {
        match name {
            "opted_in" => Some(&mut self.opted_in),
            "showExtensionInfo" | "show_extension_info" => Some(&mut self.show_extension_info),
            "percent_main_page" => Some(&mut self.percent_main_page),
            _ => None,
        }
    }

    /// Current value of a toggle, `None` if the name is unknown or the toggle is unset
    #[must_use]
    pub fn get_toggle(&self, name: &str) -> Option<bool> {
        let toggle = match name {
            "opted_in" => self.opted_in,
            "showExtensionInfo" | "show_extension_info" => self.show_extension_info,
            "percent_main_page" => self.percent_main_page,
            _ => None,
        };
        toggle.map(|t| t.value)
    }

    /// Set a toggle and mark it changed
    ///
    /// # Errors
    /// Returns an error if the toggle name is unknown.
    pub fn set_toggle(&mut self, name: &str, value: bool) -> Result<(), String> {
        let slot = self
            .toggle_slot(name)
            .ok_or_else(|| format!("Unknown setting: '{name}'"))?;
        *slot = Some(Toggle {
            value,
            changed: true,
        });
        Ok(())
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |toggle: Option<Toggle>| {
            toggle.map_or_else(
                || "unset".to_string(),
                |t| {
                    if t.changed {
                        format!("{} (changed)", t.value)
                    } else {
                        t.value.to_string()
                    }
                },
            )
        };
        writeln!(f, "opted_in = {}", show(self.opted_in))?;
        writeln!(f, "showExtensionInfo = {}", show(self.show_extension_info))?;
        writeln!(f, "percent_main_page = {}", show(self.percent_main_page))?;
        writeln!(
            f,
            "most_recent_user = {}",
            self.most_recent_user.as_deref().unwrap_or("")
        )?;
        writeln!(
            f,
            "cached users = {}",
            self.user_data.as_ref().map_or(0, Map::len)
        )
    }
}
