//! Init command implementation.
//!
//! `specrig init <TEMPLATE>` initializes a project from a template given as
//! a local `.zip`, an archive URL, or a registered template name.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{ConfigPaths, Settings};
use crate::error::Result;
use crate::project::ProjectInitializer;
use crate::registry::{is_absolute_uri, TemplateManager};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// How the `init` argument was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    ZipFile(PathBuf),
    Url(String),
    Name(String),
}

impl TemplateSource {
    /// Classify a template argument.
    ///
    /// An existing `.zip` file wins over a URL, which wins over a name.
    pub fn detect(template: &str) -> Self {
        let path = Path::new(template);
        let is_zip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

        if is_zip && path.is_file() {
            Self::ZipFile(path.to_path_buf())
        } else if is_absolute_uri(template) {
            Self::Url(template.to_string())
        } else {
            Self::Name(template.to_string())
        }
    }
}

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    paths: ConfigPaths,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, paths: &ConfigPaths, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            paths: paths.clone(),
            args,
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let templates = TemplateManager::new(&self.paths);

        if self.args.list {
            ui.message(&templates.all()?);
            return Ok(CommandResult::success());
        }

        let Some(template) = self.args.template.as_deref() else {
            ui.error("Specify a template name, URL or .zip file");
            return Ok(CommandResult::failure(1));
        };

        let settings = Settings::load(&self.paths)?;
        let initializer = ProjectInitializer::new(&self.project_root, &self.paths, &settings)?;

        match TemplateSource::detect(template) {
            TemplateSource::ZipFile(path) => {
                tracing::debug!("Initializing from archive {}", path.display());
                initializer.from_zip_file(&path, self.args.silent, ui)?
            }
            TemplateSource::Url(url) => initializer.from_url(&url, self.args.silent, ui)?,
            TemplateSource::Name(name) => {
                initializer.from_template(&templates, &name, self.args.silent, ui)?
            }
        }

        Ok(CommandResult::success())
    }
}
