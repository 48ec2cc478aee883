//! Built-in template locations compiled into the binary.

use crate::config::Property;

/// Languages with an official template.
pub const BUILTIN_LANGUAGES: &[&str] = &["dotnet", "java", "js", "python", "ruby", "ts"];

const RELEASE_URL: &str = "https://github.com/specrig";

/// Description attached to template entries.
pub fn template_description(name: &str) -> String {
    format!("Template download information for specrig {} projects", name)
}

/// Download location of the official template for `language`.
pub fn template_url(language: &str) -> String {
    format!(
        "{}/template-{}/releases/latest/download/{}.zip",
        RELEASE_URL, language, language
    )
}

/// Properties for every built-in template.
pub fn builtin_properties() -> Vec<Property> {
    BUILTIN_LANGUAGES
        .iter()
        .map(|lang| Property::new(*lang, template_url(lang), template_description(lang)))
        .collect()
}
