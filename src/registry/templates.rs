//! In-memory view of the known templates.

use reqwest::Url;
use std::collections::HashMap;

use crate::config::{properties, Property};
use crate::error::{Result, SpecrigError};
use crate::version::Version;

use super::builtin::{builtin_properties, template_description};
use super::suggest::closest_matches;

/// A snapshot of template definitions.
///
/// `names` always holds exactly the keys of `entries`, sorted ascending.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    entries: HashMap<String, Property>,
    names: Vec<String>,
}

/// Check that `location` is an absolute URI with a scheme and an authority.
pub fn is_absolute_uri(location: &str) -> bool {
    match Url::parse(location) {
        Ok(url) => !url.cannot_be_a_base() && url.has_host(),
        Err(_) => false,
    }
}

/// Check that `name` survives a write and reload as a property key.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(['#', '!'])
        && !name
            .chars()
            .any(|c| c == '=' || c == ':' || c.is_whitespace() || c.is_control())
}

impl TemplateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in templates.
    pub fn defaults() -> Self {
        let mut registry = Self::new();
        for prop in builtin_properties() {
            registry.names.push(prop.key.clone());
            registry.entries.insert(prop.key.clone(), prop);
        }
        registry.names.sort();
        registry
    }

    /// Set the location of a template.
    ///
    /// With `validate`, the name must be a storable key and the location an
    /// absolute URI, or the registry is left untouched. Existing entries keep
    /// their description.
    pub fn update(&mut self, name: &str, location: &str, validate: bool) -> Result<()> {
        if validate && !is_valid_name(name) {
            return Err(SpecrigError::InvalidTemplateName {
                name: name.to_string(),
            });
        }
        if validate && !is_absolute_uri(location) {
            return Err(SpecrigError::InvalidTemplateLocation {
                name: name.to_string(),
            });
        }

        match self.entries.get_mut(name) {
            Some(existing) => existing.value = location.to_string(),
            None => {
                self.entries.insert(
                    name.to_string(),
                    Property::new(name, location, template_description(name)),
                );
                self.names.push(name.to_string());
                self.names.sort();
            }
        }

        Ok(())
    }

    /// Location of the named template.
    ///
    /// On a miss the error carries similar template names, if any.
    pub fn get(&self, name: &str) -> Result<&str> {
        if let Some(prop) = self.entries.get(name) {
            return Ok(&prop.value);
        }

        Err(SpecrigError::TemplateNotFound {
            name: name.to_string(),
            suggestions: self.closest_matches(name),
        })
    }

    /// Known names similar to `name`.
    pub fn closest_matches(&self, name: &str) -> Vec<String> {
        closest_matches(name, self.names.iter().map(String::as_str))
    }

    /// Template names in ascending order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a template with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All templates in name order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.names.iter().filter_map(|name| self.entries.get(name))
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry has no templates.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render the registry in the persisted property format.
    pub fn to_properties(&self, version: &Version) -> String {
        properties::serialize(version, self.properties())
    }
}
