//! Application state wiring the form service to its adapters.
//!
//! `FormService` is generic over the scanner/runtime ports; AppState pins it
//! to the Rhai implementations from scriptform-infra.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use scriptform_core::script::loader::{ScriptLoader, ScriptSource};
use scriptform_core::service::form::FormService;
use scriptform_infra::config::load_global_config;
use scriptform_infra::filesystem::{LocalScriptLoader, resolve_data_dir};
use scriptform_infra::script::runtime::RhaiRuntime;
use scriptform_infra::script::scanner::RhaiScanner;
use scriptform_types::config::GlobalConfig;
use scriptform_types::error::LoadError;

/// Concrete form service pinned to the Rhai adapters.
pub type ConcreteFormService = FormService<RhaiScanner, RhaiRuntime>;

/// Shared application state used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub form_service: Arc<ConcreteFormService>,
    pub loader: Arc<LocalScriptLoader>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, read `config.toml`, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        tracing::debug!(data_dir = %data_dir.display(), "application state initialized");
        Ok(Self::with_config(config, data_dir))
    }

    pub fn with_config(config: GlobalConfig, data_dir: PathBuf) -> Self {
        Self {
            form_service: Arc::new(FormService::new(RhaiScanner::new(), RhaiRuntime::new())),
            loader: Arc::new(LocalScriptLoader::new()),
            config: Arc::new(config),
            data_dir,
        }
    }

    /// Pick the script a command operates on: the explicit argument, else
    /// `default_script` from config.
    pub fn resolve_script(&self, reference: Option<&str>) -> anyhow::Result<ScriptSource> {
        if let Some(reference) = reference {
            return Ok(self.loader.resolve(reference));
        }

        let default = self.config.default_script.as_ref().with_context(|| {
            format!(
                "no script given and no default_script set in {}",
                self.data_dir.join("config.toml").display()
            )
        })?;
        Ok(ScriptSource::File(default.clone()))
    }

    /// Read the current text of a script.
    pub async fn load_script(&self, source: &ScriptSource) -> Result<String, LoadError> {
        self.loader.load(source).await
    }
}

/// State for the web server: the app plus the one script it serves.
#[derive(Clone)]
pub struct ServeState {
    pub app: AppState,
    pub script: Arc<ScriptSource>,
}

impl ServeState {
    pub fn new(app: AppState, script: ScriptSource) -> Self {
        Self {
            app,
            script: Arc::new(script),
        }
    }

    /// Re-read the served script so edits show up without a restart.
    pub async fn current_source(&self) -> Result<String, LoadError> {
        self.app.load_script(&self.script).await
    }
}
