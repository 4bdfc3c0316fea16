use crate::catalog::Catalog;
use crate::cli::GlobalArgs;
use crate::config::{self, AppConfig};
use crate::paths::DataPaths;
use crate::store::{FileStorage, RecordStore};
use crate::suggest::{build_gateway, SuggestionGateway};
use anyhow::Result;

/// Everything a command needs: resolved paths, validated config and the
/// catalog extended with configured brands.
pub(crate) struct AppContext {
    pub(crate) paths: DataPaths,
    pub(crate) config: AppConfig,
    pub(crate) catalog: Catalog,
}

impl AppContext {
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self> {
        let paths = DataPaths::resolve(global.data_dir.as_deref())?;
        let mut config = match global.config.as_deref() {
            Some(path) => config::load_config(path)?,
            None => config::load_config_or_default(&paths.config_path())?,
        };
        config::apply_env_overrides(&mut config);

        let mut catalog = Catalog::builtin();
        catalog.extend(config.extra_brands.iter().cloned());
        tracing::debug!(
            root = %paths.root().display(),
            brands = catalog.brands().len(),
            backend = ?config.suggestions.backend,
            "context loaded"
        );
        Ok(Self {
            paths,
            config,
            catalog,
        })
    }

    pub(crate) fn open_store(&self) -> RecordStore<FileStorage> {
        let storage = FileStorage::new(self.paths.records_path());
        tracing::debug!(path = %storage.path().display(), "opening records");
        RecordStore::open(storage)
    }

    pub(crate) fn gateway(&self) -> Box<dyn SuggestionGateway> {
        build_gateway(&self.config.suggestions)
    }
}
