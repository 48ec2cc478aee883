//! Template lookups backed by the user's `template.properties`.
//!
//! Every operation rebuilds the registry from scratch: built-in defaults
//! first, then the persisted overrides on top, so user values always win.

use serde::Serialize;

use crate::config::{ConfigPaths, PropertyStore};
use crate::error::Result;
use crate::ui::Table;
use crate::version::Version;

use super::templates::TemplateRegistry;

/// Reads and writes the template registry for one tool home.
#[derive(Debug, Clone)]
pub struct TemplateManager {
    store: PropertyStore,
    version: Version,
}

#[derive(Serialize)]
struct TemplateListing<'a> {
    key: &'a str,
    value: &'a str,
    description: &'a str,
}

impl TemplateManager {
    /// Manager for the templates file of `paths`, at the running version.
    pub fn new(paths: &ConfigPaths) -> Self {
        Self::with_store(PropertyStore::new(paths.templates_file()), Version::current())
    }

    /// Manager over an explicit store and tool version.
    pub fn with_store(store: PropertyStore, version: Version) -> Self {
        Self { store, version }
    }

    /// The backing property store.
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Built-in defaults overlaid with persisted overrides.
    ///
    /// A missing or unreadable templates file is not an error; the
    /// defaults are returned on their own.
    pub fn merged(&self) -> Result<TemplateRegistry> {
        let mut registry = TemplateRegistry::defaults();

        let overrides = match self.store.load() {
            Ok(Some(values)) => values,
            Ok(None) => return Ok(registry),
            Err(e) => {
                tracing::debug!(
                    "Ignoring unreadable {}: {}",
                    self.store.path().display(),
                    e
                );
                return Ok(registry);
            }
        };

        for (name, location) in &overrides {
            registry.update(name, location, false)?;
        }

        Ok(registry)
    }

    /// Rewrite the templates file if it predates the running version.
    ///
    /// Runs when the file is missing, has no readable version header, or
    /// records an older version. Returns whether the file was written.
    pub fn merge(&self) -> Result<bool> {
        if let Some(recorded) = self.store.recorded_version() {
            if recorded >= self.version {
                return Ok(false);
            }
            tracing::debug!(
                "Refreshing templates written by {} (running {})",
                recorded,
                self.version
            );
        }

        let registry = self.merged()?;
        self.write(&registry)?;
        Ok(true)
    }

    /// Add or change a template location and persist it.
    pub fn update(&self, name: &str, location: &str) -> Result<()> {
        let mut registry = self.merged()?;
        registry.update(name, location, true)?;
        self.write(&registry)?;
        tracing::info!("Template '{}' now points to {}", name, location);
        Ok(())
    }

    /// Location of the named template.
    pub fn get(&self, name: &str) -> Result<String> {
        let registry = self.merged()?;
        registry.get(name).map(str::to_string)
    }

    /// All template names, one per line.
    pub fn all(&self) -> Result<String> {
        Ok(self.merged()?.names().join("\n"))
    }

    /// Templates as a table, or as JSON when `machine_readable`.
    pub fn list(&self, machine_readable: bool) -> Result<String> {
        let registry = self.merged()?;

        if machine_readable {
            let listing: Vec<TemplateListing<'_>> = registry
                .properties()
                .map(|p| TemplateListing {
                    key: &p.key,
                    value: &p.value,
                    description: &p.description,
                })
                .collect();
            return serde_json::to_string_pretty(&listing)
                .map_err(|e| anyhow::anyhow!("Failed to serialize templates: {}", e).into());
        }

        let mut table = Table::new(vec!["Template Name", "Location"]);
        for prop in registry.properties() {
            table.add_row(vec![prop.key.as_str(), prop.value.as_str()]);
        }
        Ok(table.render())
    }

    fn write(&self, registry: &TemplateRegistry) -> Result<()> {
        self.store.persist(&registry.to_properties(&self.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::properties::serialize;
    use crate::config::Property;
    use crate::error::SpecrigError;
    use crate::registry::builtin::{template_url, BUILTIN_LANGUAGES};
    use std::fs;
    use tempfile::TempDir;

    fn manager(temp: &TempDir, version: Version) -> TemplateManager {
        TemplateManager::with_store(
            PropertyStore::new(temp.path().join("template.properties")),
            version,
        )
    }

    #[test]
    fn merged_without_file_is_defaults() {
        let temp = TempDir::new().unwrap();
        let registry = manager(&temp, Version::new(1, 0, 0)).merged().unwrap();

        for lang in BUILTIN_LANGUAGES {
            assert_eq!(registry.get(lang).unwrap(), template_url(lang));
        }
    }

    #[test]
    fn persisted_value_overrides_default() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp, Version::new(1, 0, 0));
        mgr.store()
            .persist(&serialize(
                &Version::new(1, 0, 0),
                &[
                    Property::new("java", "https://mirror.local/java.zip", "Java"),
                    Property::new("extra", "https://mirror.local/extra.zip", "Extra"),
                ],
            ))
            .unwrap();

        let registry = mgr.merged().unwrap();
        assert_eq!(registry.get("java").unwrap(), "https://mirror.local/java.zip");
        assert_eq!(registry.get("extra").unwrap(), "https://mirror.local/extra.zip");
        for lang in BUILTIN_LANGUAGES {
            assert!(registry.contains(lang));
        }
    }

    #[test]
    fn merge_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp, Version::new(1, 2, 0));

        assert!(mgr.merge().unwrap());
        assert_eq!(mgr.store().recorded_version(), Some(Version::new(1, 2, 0)));
        let loaded = mgr.store().load().unwrap().unwrap();
        assert_eq!(loaded.len(), BUILTIN_LANGUAGES.len());
    }

    #[test]
    fn merge_rewrites_older_file_and_keeps_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template.properties");
        fs::write(
            &path,
            "# Version 0.9.0\n\n# Java\njava = https://mirror.local/java.zip\n",
        )
        .unwrap();

        let mgr = manager(&temp, Version::new(1, 0, 0));
        assert!(mgr.merge().unwrap());

        let loaded = mgr.store().load().unwrap().unwrap();
        assert_eq!(loaded["java"], "https://mirror.local/java.zip");
        assert_eq!(loaded["ruby"], template_url("ruby"));
        assert_eq!(mgr.store().recorded_version(), Some(Version::new(1, 0, 0)));
    }

    #[test]
    fn merge_keeps_overrides_in_non_utf8_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template.properties");
        fs::write(
            &path,
            b"# Version 0.0.1\n# caf\xE9\ncustom = https://mirror.local/custom.zip\n",
        )
        .unwrap();

        let mgr = manager(&temp, Version::new(1, 0, 0));
        assert!(mgr.merge().unwrap());

        let loaded = mgr.store().load().unwrap().unwrap();
        assert_eq!(loaded["custom"], "https://mirror.local/custom.zip");
        assert_eq!(loaded["java"], template_url("java"));
    }

    #[test]
    fn merge_is_noop_for_same_or_newer_version() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template.properties");

        for recorded in ["1.0.0", "2.3.0"] {
            let content = format!("# Version {}\njava = https://custom/java.zip\n", recorded);
            fs::write(&path, &content).unwrap();

            let mgr = manager(&temp, Version::new(1, 0, 0));
            assert!(!mgr.merge().unwrap());
            assert_eq!(fs::read_to_string(&path).unwrap(), content);
        }
    }

    #[test]
    fn merge_rewrites_file_without_version_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("template.properties");
        fs::write(&path, "this is not a properties file header\n").unwrap();

        let mgr = manager(&temp, Version::new(1, 0, 0));
        assert!(mgr.merge().unwrap());
        assert!(fs::read_to_string(&path)
            .unwrap()
            .starts_with("# Version 1.0.0\n"));
    }

    #[test]
    fn update_persists_valid_location() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp, Version::new(1, 0, 0));

        mgr.update("kotlin", "https://example.com/kotlin.zip").unwrap();

        let fresh = manager(&temp, Version::new(1, 0, 0));
        assert_eq!(fresh.get("kotlin").unwrap(), "https://example.com/kotlin.zip");
    }

    #[test]
    fn update_rejects_invalid_location_without_writing() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp, Version::new(1, 0, 0));

        let result = mgr.update("kotlin", "not-a-url");
        assert!(matches!(
            result,
            Err(SpecrigError::InvalidTemplateLocation { .. })
        ));
        assert!(!mgr.store().path().exists());
    }

    #[test]
    fn update_rejects_unpersistable_name() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp, Version::new(1, 0, 0));

        let result = mgr.update("team=x", "https://example.com/t.zip");
        assert!(matches!(result, Err(SpecrigError::InvalidTemplateName { .. })));
        assert!(!mgr.store().path().exists());
        assert!(mgr.get("team").is_err());
    }

    #[test]
    fn get_unknown_template_suggests() {
        let temp = TempDir::new().unwrap();
        let mgr = manager(&temp, Version::new(1, 0, 0));

        let err = mgr.get("rubyy").unwrap_err();
        assert!(err.to_string().contains("ruby"));
    }

    #[test]
    fn all_joins_sorted_names() {
        let temp = TempDir::new().unwrap();
        let all = manager(&temp, Version::new(1, 0, 0)).all().unwrap();
        assert_eq!(all, "dotnet\njava\njs\npython\nruby\nts");
    }

    #[test]
    fn list_renders_table() {
        let temp = TempDir::new().unwrap();
        let out = manager(&temp, Version::new(1, 0, 0)).list(false).unwrap();
        assert!(out.contains("Template Name"));
        assert!(out.contains("Location"));
        assert!(out.contains(&template_url("python")));
    }

    #[test]
    fn list_machine_readable_is_json() {
        let temp = TempDir::new().unwrap();
        let out = manager(&temp, Version::new(1, 0, 0)).list(true).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), BUILTIN_LANGUAGES.len());
        assert_eq!(items[0]["key"], "dotnet");
        assert_eq!(items[0]["value"], template_url("dotnet"));
    }
}
