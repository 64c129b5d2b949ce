#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::libs::config::{Config, ConfigUpdate, DatabaseConfig};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("worklog").join("config.json");
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.has_defaults());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn save_and_read_round_trip(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.apply(ConfigUpdate {
            consultant: Some("Alice".into()),
            client: Some("Acme".into()),
            project: Some("Apollo".into()),
            rate: Some(125.5),
            language: Some("en".into()),
            db_path: Some(PathBuf::from("/var/lib/worklog/ledger.db")),
        });
        config.save_to(&ctx.path).unwrap();

        let loaded = Config::read_from(&ctx.path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.database_path().unwrap(), PathBuf::from("/var/lib/worklog/ledger.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn unset_values_are_not_written(ctx: &mut ConfigTestContext) {
        let config = Config {
            default_rate: Some(90.0),
            ..Default::default()
        };
        config.save_to(&ctx.path).unwrap();

        let raw = std::fs::read_to_string(&ctx.path).unwrap();
        assert!(raw.contains("default_rate"));
        assert!(!raw.contains("default_consultant"));
        assert!(!raw.contains("database"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn layered_load_reads_the_file(ctx: &mut ConfigTestContext) {
        let config = Config {
            default_project: Some("Hermes".into()),
            database: DatabaseConfig {
                path: Some(PathBuf::from("ledger.db")),
            },
            ..Default::default()
        };
        config.save_to(&ctx.path).unwrap();

        let loaded = Config::load_from(&ctx.path).unwrap();
        assert_eq!(loaded.default_project.as_deref(), Some("Hermes"));
        assert_eq!(loaded.database.path, Some(PathBuf::from("ledger.db")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn clear_removes_defaults_from_disk(ctx: &mut ConfigTestContext) {
        let mut config = Config {
            default_consultant: Some("Alice".into()),
            default_rate: Some(50.0),
            language: Some("de".into()),
            ..Default::default()
        };
        config.save_to(&ctx.path).unwrap();

        config.clear();
        config.save_to(&ctx.path).unwrap();

        let loaded = Config::read_from(&ctx.path).unwrap();
        assert!(!loaded.has_defaults());
        assert_eq!(loaded.language.as_deref(), Some("de"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::create_dir_all(ctx.path.parent().unwrap()).unwrap();
        std::fs::write(&ctx.path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.path).is_err());
    }
}
