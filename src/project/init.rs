//! Project initialization from templates.
//!
//! Every entry point follows the same sequence:
//!
//! 1. refuse to touch a directory that already holds a project
//! 2. resolve the template archive (registry name, URL or local zip)
//! 3. extract it into a temporary directory that is always removed
//! 4. copy the template root into the project
//! 5. run the template's post install command, rolling back on failure
//! 6. install the language runner if it is missing (best effort)

use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::archive::{append_file, mirror_dir, unzip_archive};
use crate::config::{ConfigPaths, Settings};
use crate::error::{Result, SpecrigError};
use crate::plugin::{LocalPluginInstaller, PluginInstaller};
use crate::registry::fetch::{HttpDownloader, TemplateDownloader};
use crate::registry::TemplateManager;
use crate::shell::{execute_words, CommandOptions};
use crate::ui::UserInterface;

use super::manifest::{has_manifest, is_project, Manifest};
use super::metadata::{TemplateMetadata, METADATA_FILE};

const GITIGNORE_FILE: &str = ".gitignore";
const SECURE_SCHEME: &str = "https";
const TEMP_PREFIX: &str = "specrig-template-";

/// Initializes a project directory from a template.
pub struct ProjectInitializer {
    project_root: PathBuf,
    allow_insecure_download: bool,
    downloader: Box<dyn TemplateDownloader>,
    plugins: Box<dyn PluginInstaller>,
}

impl ProjectInitializer {
    /// Initializer for `project_root` using the tool home and settings.
    pub fn new(
        project_root: impl Into<PathBuf>,
        paths: &ConfigPaths,
        settings: &Settings,
    ) -> Result<Self> {
        let downloader = HttpDownloader::with_timeout(settings.download_timeout())?;

        Ok(Self {
            project_root: project_root.into(),
            allow_insecure_download: settings.allow_insecure_download,
            downloader: Box::new(downloader),
            plugins: Box::new(LocalPluginInstaller::from_settings(paths, settings)),
        })
    }

    /// Replace the archive downloader.
    pub fn with_downloader(mut self, downloader: impl TemplateDownloader + 'static) -> Self {
        self.downloader = Box::new(downloader);
        self
    }

    /// Replace the runner plugin installer.
    pub fn with_plugin_installer(mut self, plugins: impl PluginInstaller + 'static) -> Self {
        self.plugins = Box::new(plugins);
        self
    }

    /// Override whether plain `http` template URLs are accepted.
    pub fn allow_insecure_download(mut self, allow: bool) -> Self {
        self.allow_insecure_download = allow;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Initialize from a template registered under `name`.
    pub fn from_template(
        &self,
        templates: &TemplateManager,
        name: &str,
        silent: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        self.validate_directory()?;
        let url = templates.get(name)?;
        self.check_url(&url)?;
        self.initialize_template(&url, ui)?;
        self.install_runner(silent, ui);
        Ok(())
    }

    /// Initialize from a template archive URL.
    pub fn from_url(&self, url: &str, silent: bool, ui: &mut dyn UserInterface) -> Result<()> {
        self.validate_directory()?;
        self.check_url(url)?;
        self.initialize_template(url, ui)?;
        self.install_runner(silent, ui);
        Ok(())
    }

    /// Initialize from a template archive on disk.
    pub fn from_zip_file(
        &self,
        archive: &Path,
        silent: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        self.validate_directory()?;

        let temp = scratch_dir()?;
        let extracted = unzip_archive(archive, temp.path())?;
        self.copy_template_contents(&extracted, ui)?;

        self.install_runner(silent, ui);
        Ok(())
    }

    fn validate_directory(&self) -> Result<()> {
        if is_project(&self.project_root) {
            return Err(SpecrigError::AlreadyAProject {
                path: self.project_root.clone(),
            });
        }
        Ok(())
    }

    fn check_url(&self, url: &str) -> Result<()> {
        let parsed = Url::parse(url)
            .ok()
            .filter(|u| !u.cannot_be_a_base() && u.has_host())
            .ok_or_else(|| SpecrigError::InvalidTemplateUrl {
                url: url.to_string(),
            })?;

        if parsed.scheme() != SECURE_SCHEME {
            if !self.allow_insecure_download {
                return Err(SpecrigError::InsecureDownloadRejected {
                    url: url.to_string(),
                });
            }
            tracing::warn!("Downloading template over insecure connection: {}", url);
        }

        Ok(())
    }

    fn initialize_template(&self, url: &str, ui: &mut dyn UserInterface) -> Result<()> {
        let temp = scratch_dir()?;

        let mut spinner = ui.start_spinner(&format!("Initializing template from {}", url));
        let extracted = match self.downloader.download(url, temp.path()) {
            Ok(dir) => {
                spinner.finish_success("Template downloaded");
                dir
            }
            Err(e) => {
                spinner.finish_error("Template download failed");
                return Err(e);
            }
        };

        self.copy_template_contents(&extracted, ui)
    }

    fn copy_template_contents(&self, extracted: &Path, ui: &mut dyn UserInterface) -> Result<()> {
        let template_dir =
            find_template_root(extracted).ok_or_else(|| SpecrigError::MalformedTemplate {
                path: extracted.to_path_buf(),
            })?;

        let mut skip = Vec::new();
        let project_gitignore = self.project_root.join(GITIGNORE_FILE);
        let template_gitignore = template_dir.join(GITIGNORE_FILE);
        if project_gitignore.is_file() && template_gitignore.is_file() {
            append_file(&project_gitignore, &template_gitignore)?;
            skip.push(Path::new(GITIGNORE_FILE));
        }

        let template_name = template_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.message(&format!(
            "Copying template {} to {} ...",
            template_name,
            self.project_root.display()
        ));

        let log = mirror_dir(&template_dir, &self.project_root, &skip)?;
        tracing::debug!(
            "Copied {} template files, {} new entries",
            log.copied.len(),
            log.created.len()
        );

        let metadata_path = self.project_root.join(METADATA_FILE);
        let metadata = TemplateMetadata::load(&metadata_path)?;

        if metadata.has_post_install() {
            if let Err(e) = self.run_post_install(&metadata.post_install_cmd) {
                self.rollback(&log.created);
                return Err(e);
            }
        }

        fs::remove_file(&metadata_path)?;

        let notice = format!("Successfully initialized the project. {}", metadata.post_install_msg);
        ui.success(notice.trim_end());
        Ok(())
    }

    fn run_post_install(&self, command: &str) -> Result<()> {
        tracing::debug!("Running post install command {}", command);

        let options = CommandOptions::inherit_in(&self.project_root);
        let failed = |message: String| SpecrigError::PostInstallFailed {
            command: command.to_string(),
            message,
        };

        match execute_words(command, &options) {
            Ok(result) if result.success => Ok(()),
            Ok(result) => Err(failed(match result.exit_code {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            })),
            Err(e) => Err(failed(e.to_string())),
        }
    }

    /// Remove `created` entries, newest first.
    fn rollback(&self, created: &[PathBuf]) {
        for entry in created.iter().rev() {
            let path = self.project_root.join(entry);
            let removed = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            match removed {
                Ok(()) => tracing::debug!("Rolled back {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("Failed to remove {}: {}", path.display(), e),
            }
        }
    }

    fn install_runner(&self, silent: bool, ui: &mut dyn UserInterface) {
        let manifest = match Manifest::load(&self.project_root) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::error!("Failed to install language runner: {}", e);
                ui.warning(&format!("Failed to install language runner. {}", e));
                return;
            }
        };

        if manifest.language.is_empty() || self.plugins.is_installed(&manifest.language) {
            return;
        }

        ui.message(&format!(
            "Compatible language plugin {} is not installed. Installing plugin...",
            manifest.language
        ));
        match self.plugins.install(&manifest.language, silent) {
            Ok(()) => ui.success(&format!("Installed plugin {}", manifest.language)),
            Err(e) => {
                tracing::error!("Failed to install plugin {}: {}", manifest.language, e);
                ui.warning(&format!(
                    "Failed to install plugin {}. {}",
                    manifest.language, e
                ));
            }
        }
    }
}

fn scratch_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix(TEMP_PREFIX).tempdir()?)
}

/// Find the directory of an extracted archive that holds the template.
///
/// The shallowest directory containing a manifest wins; ties go to the
/// lexicographically smallest path.
pub fn find_template_root(extracted: &Path) -> Option<PathBuf> {
    WalkDir::new(extracted)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir() && has_manifest(entry.path()))
        .min_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.path().cmp(b.path())))
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;
    use zip::write::SimpleFileOptions;

    /// Serves a fixed directory tree instead of downloading.
    struct FixtureDownloader {
        files: Vec<(String, String)>,
        requested: Rc<RefCell<Vec<String>>>,
        scratch: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl FixtureDownloader {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(p, c)| (p.to_string(), c.to_string()))
                    .collect(),
                requested: Rc::default(),
                scratch: Rc::default(),
            }
        }
    }

    impl TemplateDownloader for FixtureDownloader {
        fn download(&self, url: &str, dest_dir: &Path) -> Result<PathBuf> {
            self.requested.borrow_mut().push(url.to_string());
            self.scratch.borrow_mut().push(dest_dir.to_path_buf());
            let root = dest_dir.join("fixture");
            for (path, content) in &self.files {
                let target = root.join(path);
                fs::create_dir_all(target.parent().unwrap())?;
                fs::write(target, content)?;
            }
            Ok(root)
        }
    }

    #[derive(Clone, Default)]
    struct RecordingPlugins {
        installed: Vec<String>,
        fail: bool,
        installs: Rc<RefCell<Vec<(String, bool)>>>,
    }

    impl PluginInstaller for RecordingPlugins {
        fn is_installed(&self, language: &str) -> bool {
            self.installed.iter().any(|l| l == language)
        }

        fn install(&self, language: &str, silent: bool) -> Result<()> {
            self.installs
                .borrow_mut()
                .push((language.to_string(), silent));
            if self.fail {
                return Err(anyhow::anyhow!("registry unreachable").into());
            }
            Ok(())
        }
    }

    const MANIFEST: &str = r#"{"Language": "python", "Plugins": ["html-report"]}"#;

    fn initializer(root: &Path, downloader: FixtureDownloader) -> ProjectInitializer {
        let home = root.join(".home");
        let paths = ConfigPaths::new(&home);
        ProjectInitializer::new(root.join("project"), &paths, &Settings::default())
            .unwrap()
            .with_downloader(downloader)
            .with_plugin_installer(RecordingPlugins::default())
    }

    fn project_dir(temp: &TempDir) -> PathBuf {
        let dir = temp.path().join("project");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn basic_template() -> FixtureDownloader {
        FixtureDownloader::new(&[
            ("python/manifest.json", MANIFEST),
            ("python/metadata.json", r#"{"PostInstallMsg": "Run specrig run specs"}"#),
            ("python/specs/example.spec", "# Example"),
            ("python/.gitignore", "reports/\n"),
        ])
    }

    #[test]
    fn initializes_from_url() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        let downloader = basic_template();
        let requested = Rc::clone(&downloader.requested);
        let init = initializer(temp.path(), downloader);
        let mut ui = MockUI::new();

        init.from_url("https://example.com/python.zip", false, &mut ui)
            .unwrap();

        assert_eq!(*requested.borrow(), ["https://example.com/python.zip"]);
        assert!(project.join("manifest.json").is_file());
        assert!(project.join("specs/example.spec").is_file());
        assert!(project.join(".gitignore").is_file());
        assert!(!project.join(METADATA_FILE).exists());
        assert!(ui.has_success("Successfully initialized the project. Run specrig run specs"));
    }

    #[test]
    fn already_a_project_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        fs::write(project.join("manifest.json"), MANIFEST).unwrap();
        let downloader = basic_template();
        let requested = Rc::clone(&downloader.requested);
        let init = initializer(temp.path(), downloader);
        let mut ui = MockUI::new();

        let err = init
            .from_url("https://example.com/python.zip", false, &mut ui)
            .unwrap_err();

        assert!(matches!(err, SpecrigError::AlreadyAProject { .. }));
        assert!(requested.borrow().is_empty());
        let entries: Vec<_> = fs::read_dir(&project).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn manifest_without_language_is_not_a_project() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        fs::write(project.join("manifest.json"), "{}").unwrap();
        let init = initializer(temp.path(), basic_template());

        init.from_url("https://example.com/python.zip", false, &mut MockUI::new())
            .unwrap();
        assert!(Manifest::load(&project).unwrap().language == "python");
    }

    #[test]
    fn insecure_url_rejected_by_default() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let downloader = basic_template();
        let requested = Rc::clone(&downloader.requested);
        let init = initializer(temp.path(), downloader);

        let err = init
            .from_url("http://example.com/python.zip", false, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, SpecrigError::InsecureDownloadRejected { .. }));
        assert!(requested.borrow().is_empty());
    }

    #[test]
    fn insecure_url_allowed_when_configured() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        let downloader = basic_template();
        let requested = Rc::clone(&downloader.requested);
        let init = initializer(temp.path(), downloader).allow_insecure_download(true);

        init.from_url("http://example.com/python.zip", false, &mut MockUI::new())
            .unwrap();

        assert_eq!(requested.borrow().len(), 1);
        assert!(project.join("manifest.json").is_file());
    }

    #[test]
    fn relative_url_is_invalid() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let init = initializer(temp.path(), basic_template());

        let err = init
            .from_url("not-a-url", false, &mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, SpecrigError::InvalidTemplateUrl { .. }));
    }

    #[test]
    fn unknown_template_name_suggests() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let init = initializer(temp.path(), basic_template());
        let templates = TemplateManager::new(&ConfigPaths::new(temp.path().join(".home")));

        let err = init
            .from_template(&templates, "pyhton", false, &mut MockUI::new())
            .unwrap_err();

        match err {
            SpecrigError::TemplateNotFound { suggestions, .. } => {
                assert!(suggestions.contains(&"python".to_string()))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn template_name_resolves_through_registry() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        let downloader = basic_template();
        let requested = Rc::clone(&downloader.requested);
        let init = initializer(temp.path(), downloader);
        let templates = TemplateManager::new(&ConfigPaths::new(temp.path().join(".home")));
        templates
            .update("custom", "https://templates.example.com/custom.zip")
            .unwrap();

        init.from_template(&templates, "custom", false, &mut MockUI::new())
            .unwrap();

        assert_eq!(
            *requested.borrow(),
            ["https://templates.example.com/custom.zip"]
        );
        assert!(project.join("manifest.json").is_file());
    }

    #[test]
    fn appends_to_existing_gitignore() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        fs::write(project.join(".gitignore"), "target/").unwrap();
        let init = initializer(temp.path(), basic_template());

        init.from_url("https://example.com/python.zip", false, &mut MockUI::new())
            .unwrap();

        let gitignore = fs::read_to_string(project.join(".gitignore")).unwrap();
        assert_eq!(gitignore, "target/\nreports/\n");
    }

    #[test]
    fn missing_manifest_is_malformed() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        let init = initializer(
            temp.path(),
            FixtureDownloader::new(&[("python/metadata.json", "{}")]),
        );

        let err = init
            .from_url("https://example.com/python.zip", false, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, SpecrigError::MalformedTemplate { .. }));
        assert_eq!(fs::read_dir(&project).unwrap().count(), 0);
    }

    #[test]
    fn malformed_metadata_is_error() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let init = initializer(
            temp.path(),
            FixtureDownloader::new(&[
                ("t/manifest.json", MANIFEST),
                ("t/metadata.json", "{not json"),
            ]),
        );

        let err = init
            .from_url("https://example.com/t.zip", false, &mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, SpecrigError::MetadataParseError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failed_post_install_rolls_back() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        fs::write(project.join("notes.txt"), "keep me").unwrap();
        let init = initializer(
            temp.path(),
            FixtureDownloader::new(&[
                ("t/manifest.json", MANIFEST),
                ("t/metadata.json", r#"{"PostInstallCmd": "false"}"#),
                ("t/specs/example.spec", "# Example"),
                ("t/notes.txt", "template notes"),
            ]),
        );

        let err = init
            .from_url("https://example.com/t.zip", false, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, SpecrigError::PostInstallFailed { .. }));
        assert!(!project.join("manifest.json").exists());
        assert!(!project.join("specs").exists());
        assert!(!project.join(METADATA_FILE).exists());
        assert!(project.join("notes.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn rollback_removes_files_added_to_existing_directories() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        fs::create_dir_all(project.join("src")).unwrap();
        fs::write(project.join("src/mine.txt"), "keep me").unwrap();
        let init = initializer(
            temp.path(),
            FixtureDownloader::new(&[
                ("t/manifest.json", MANIFEST),
                ("t/metadata.json", r#"{"PostInstallCmd": "false"}"#),
                ("t/src/test/Steps.java", "class Steps {}"),
                ("t/src/helper.txt", "helper"),
            ]),
        );

        let err = init
            .from_url("https://example.com/t.zip", false, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, SpecrigError::PostInstallFailed { .. }));
        assert!(!project.join("src/test").exists());
        assert!(!project.join("src/helper.txt").exists());
        assert_eq!(
            fs::read_to_string(project.join("src/mine.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn scratch_directory_removed_after_success() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let downloader = basic_template();
        let scratch = Rc::clone(&downloader.scratch);
        let init = initializer(temp.path(), downloader);

        init.from_url("https://example.com/python.zip", false, &mut MockUI::new())
            .unwrap();

        let scratch = scratch.borrow();
        assert_eq!(scratch.len(), 1);
        assert!(!scratch[0].exists());
    }

    #[test]
    fn scratch_directory_removed_after_failure() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let downloader = FixtureDownloader::new(&[("python/metadata.json", "{}")]);
        let scratch = Rc::clone(&downloader.scratch);
        let init = initializer(temp.path(), downloader);

        init.from_url("https://example.com/python.zip", false, &mut MockUI::new())
            .unwrap_err();

        let scratch = scratch.borrow();
        assert_eq!(scratch.len(), 1);
        assert!(!scratch[0].exists());
    }

    #[cfg(unix)]
    #[test]
    fn post_install_runs_in_project_root() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        let init = initializer(
            temp.path(),
            FixtureDownloader::new(&[
                ("t/manifest.json", MANIFEST),
                ("t/metadata.json", r#"{"PostInstallCmd": "touch installed.marker"}"#),
            ]),
        );

        init.from_url("https://example.com/t.zip", false, &mut MockUI::new())
            .unwrap();

        assert!(project.join("installed.marker").is_file());
        assert!(!project.join(METADATA_FILE).exists());
    }

    #[test]
    fn missing_runner_is_installed() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let plugins = RecordingPlugins::default();
        let installs = Rc::clone(&plugins.installs);
        let init = initializer(temp.path(), basic_template()).with_plugin_installer(plugins);

        init.from_url("https://example.com/python.zip", true, &mut MockUI::new())
            .unwrap();

        assert_eq!(*installs.borrow(), [("python".to_string(), true)]);
    }

    #[test]
    fn installed_runner_is_skipped() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let plugins = RecordingPlugins {
            installed: vec!["python".into()],
            ..Default::default()
        };
        let installs = Rc::clone(&plugins.installs);
        let init = initializer(temp.path(), basic_template()).with_plugin_installer(plugins);

        init.from_url("https://example.com/python.zip", false, &mut MockUI::new())
            .unwrap();

        assert!(installs.borrow().is_empty());
    }

    #[test]
    fn runner_install_failure_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        project_dir(&temp);
        let plugins = RecordingPlugins {
            fail: true,
            ..Default::default()
        };
        let init = initializer(temp.path(), basic_template()).with_plugin_installer(plugins);
        let mut ui = MockUI::new();

        init.from_url("https://example.com/python.zip", false, &mut ui)
            .unwrap();

        assert!(ui.has_warning("Failed to install plugin python"));
    }

    #[test]
    fn initializes_from_zip_file() {
        let temp = TempDir::new().unwrap();
        let project = project_dir(&temp);
        let archive = temp.path().join("java.zip");
        let mut writer = zip::ZipWriter::new(fs::File::create(&archive).unwrap());
        for (name, content) in [
            ("java/manifest.json", r#"{"Language": "java"}"#),
            ("java/metadata.json", "{}"),
            ("java/src/test/Steps.java", "class Steps {}"),
        ] {
            writer
                .start_file(name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();

        let init = initializer(temp.path(), FixtureDownloader::new(&[]));
        init.from_zip_file(&archive, false, &mut MockUI::new())
            .unwrap();

        assert!(project.join("src/test/Steps.java").is_file());
        assert_eq!(Manifest::load(&project).unwrap().language, "java");
    }

    #[test]
    fn template_root_prefers_shallowest_then_smallest() {
        let temp = TempDir::new().unwrap();
        for dir in ["b/inner", "a", "c"] {
            let path = temp.path().join(dir);
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("manifest.json"), MANIFEST).unwrap();
        }

        assert_eq!(find_template_root(temp.path()), Some(temp.path().join("a")));
    }

    #[test]
    fn template_root_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();
        assert_eq!(find_template_root(temp.path()), None);
    }
}
