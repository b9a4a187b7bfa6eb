use atlas_config::{AtlasConfig, StorageBackend};
use atlas_routes::RouteTable;
use atlas_store::{FavoritesStore, FileStore, KeyValueStore, MemoryStore};

/// Storage selected by configuration.
pub type DynStore = Box<dyn KeyValueStore>;

/// Shared application resources initialized once per invocation.
pub struct AppContext {
    pub config: AtlasConfig,
    pub routes: &'static RouteTable,
    pub favorites: FavoritesStore<DynStore>,
}

impl AppContext {
    /// Build the single favorites store for this session over the
    /// configured backend. `data_dir` overrides `storage.data_dir`.
    #[must_use]
    pub fn init(mut config: AtlasConfig, data_dir: Option<&str>) -> Self {
        if let Some(dir) = data_dir {
            config.storage.data_dir = dir.to_string();
        }

        let storage: DynStore = match config.storage.backend {
            StorageBackend::File => {
                let root = config.storage.resolved_data_dir();
                tracing::debug!(root = %root.display(), "using file storage");
                Box::new(FileStore::new(root))
            }
            StorageBackend::Memory => {
                tracing::debug!("using in-memory storage");
                Box::new(MemoryStore::new())
            }
        };

        Self {
            config,
            routes: RouteTable::canonical(),
            favorites: FavoritesStore::load(storage),
        }
    }
}
