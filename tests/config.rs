#[cfg(test)]
mod tests {
    use projman::libs::config::{Config, DocumentConfig, CONFIG_FILE_NAME};
    use projman::libs::data_storage::DataStorage;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each test its own data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base_path(temp_dir.path().join("projman"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.document.is_none());

        let document = config.document_or_default();
        assert!(document.default_path.is_none());
        assert!(document.pretty);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            document: Some(DocumentConfig {
                default_path: Some(PathBuf::from("/work/plan.projman")),
                pretty: false,
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        let read_config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_keys_use_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, r#"{"document": {}}"#).unwrap();

        let document = Config::read_from(&ctx.storage).unwrap().document.unwrap();
        assert!(document.pretty);
        assert!(document.default_path.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_get_path_creates_directory(ctx: &mut ConfigTestContext) {
        assert!(!ctx.storage.base_path().exists());
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        assert!(ctx.storage.base_path().is_dir());
        assert_eq!(path, ctx.storage.base_path().join(CONFIG_FILE_NAME));
    }
}
