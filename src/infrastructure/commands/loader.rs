//! Command loader - discovers groups and imports command modules

use std::env::consts::DLL_EXTENSION;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::{Library, Symbol};

use crate::application::errors::{BotError, ModuleLoadError, PathNotFoundError};
use crate::domain::entities::Command;
use super::registry::{CommandRegistry, LoadedCommand};

/// Constructor every command module must export.
pub const COMMAND_INIT_SYMBOL: &[u8] = b"botkit_command_init";

/// Signature of the exported constructor.
pub type CommandInitFn = extern "C" fn() -> *mut dyn Command;

/// How a command module that fails to load affects the loading pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Reject the whole pass on the first failure.
    Abort,
    /// Log the failure and keep loading the remaining modules.
    #[default]
    Skip,
}

/// Imports one module file and tags it with its owning group.
pub trait ModuleImporter: Send + Sync {
    fn import(&self, path: &Path, group: &str) -> Result<LoadedCommand, ModuleLoadError>;
}

/// Default importer backed by libloading.
pub struct DylibImporter;

impl ModuleImporter for DylibImporter {
    fn import(&self, path: &Path, group: &str) -> Result<LoadedCommand, ModuleLoadError> {
        let library = unsafe { Library::new(path) }.map_err(|e| ModuleLoadError::Library {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let init: Symbol<CommandInitFn> =
            unsafe { library.get(COMMAND_INIT_SYMBOL) }.map_err(|_| {
                ModuleLoadError::MissingSymbol {
                    path: path.to_path_buf(),
                    symbol: "botkit_command_init",
                }
            })?;

        let raw = init();
        if raw.is_null() {
            return Err(ModuleLoadError::NullInstance {
                path: path.to_path_buf(),
            });
        }

        // The module relinquishes ownership of the instance.
        let mut instance = unsafe { Box::from_raw(raw) };
        instance.set_group(group);

        drop(init);
        Ok(LoadedCommand::new(group, instance, Some(library)))
    }
}

/// Loads command modules from a commands root.
pub struct CommandLoader {
    root: PathBuf,
    policy: LoadPolicy,
    importer: Arc<dyn ModuleImporter>,
}

impl CommandLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: LoadPolicy::default(),
            importer: Arc::new(DylibImporter),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the module importer. Tests use this to drive the loading
    /// pass without compiling real shared libraries.
    pub fn with_importer(mut self, importer: Arc<dyn ModuleImporter>) -> Self {
        self.importer = importer;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the immediate subdirectories of the commands root.
    ///
    /// Non-directory entries and dot-directories are ignored. Order follows
    /// the directory listing and is not guaranteed.
    pub async fn discover_groups(&self) -> Result<Vec<String>, BotError> {
        if !self.root.exists() {
            return Err(PathNotFoundError {
                path: self.root.clone(),
            }
            .into());
        }

        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| self.read_dir_error(&self.root, e))?;

        let mut groups = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| self.read_dir_error(&self.root, e))?
        {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            groups.push(name.to_string());
        }

        Ok(groups)
    }

    /// Load every module under the given groups into one registry.
    ///
    /// Keys are module file stems; a stem shared across groups keeps
    /// whichever group loaded last. Under [`LoadPolicy::Skip`] a failing
    /// module is logged and skipped; under [`LoadPolicy::Abort`] it rejects
    /// the whole pass.
    pub async fn load_commands(&self, groups: &[String]) -> Result<CommandRegistry, BotError> {
        let mut registry = CommandRegistry::new();

        for group in groups {
            for path in self.list_modules(group).await? {
                let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };

                match self.importer.import(&path, group) {
                    Ok(command) => {
                        tracing::info!("Loaded command {} (group {})", name, group);
                        registry.insert(name, command);
                    }
                    Err(e) => match self.policy {
                        LoadPolicy::Abort => return Err(e.into()),
                        LoadPolicy::Skip => {
                            tracing::warn!("Failed to load {}: {}", path.display(), e);
                        }
                    },
                }
            }
        }

        Ok(registry)
    }

    /// List module files directly inside `root/group`, filtered by the
    /// platform dynamic-library suffix.
    pub async fn list_modules(&self, group: &str) -> Result<Vec<PathBuf>, ModuleLoadError> {
        let dir = self.root.join(group);
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| self.read_dir_error(&dir, e))?;

        let mut modules = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| self.read_dir_error(&dir, e))?
        {
            let path = entry.path();
            let is_module = path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(DLL_EXTENSION);
            if is_module {
                modules.push(path);
            }
        }

        Ok(modules)
    }

    fn read_dir_error(&self, dir: &Path, source: std::io::Error) -> ModuleLoadError {
        ModuleLoadError::ReadDir {
            dir: dir.to_path_buf(),
            source,
        }
    }
}
