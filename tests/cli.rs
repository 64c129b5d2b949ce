#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Each test gets its own data directory through WORKLOG_HOME, set on the
    /// child process only.
    struct CliTestContext {
        home: TempDir,
    }

    impl TestContext for CliTestContext {
        fn setup() -> Self {
            CliTestContext {
                home: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl CliTestContext {
        fn worklog(&self) -> Command {
            let mut cmd = Command::cargo_bin("worklog").unwrap();
            cmd.env("WORKLOG_HOME", self.home.path())
                .env_remove("WORKLOG_DEBUG")
                .env_remove("RUST_LOG")
                .env_remove("WORKLOG_DEFAULT_CONSULTANT")
                .env_remove("WORKLOG_DEFAULT_CLIENT")
                .env_remove("WORKLOG_DEFAULT_PROJECT")
                .env_remove("WORKLOG_DEFAULT_RATE")
                .env_remove("WORKLOG_DATABASE__PATH")
                .current_dir(self.home.path());
            cmd
        }

        fn add(&self, hours: &str, description: &str, date: &str) {
            self.worklog()
                .args(["add", "-t", hours, "-d", description, "-p", "Apollo", "-c", "Acme", "-n", "Alice", "-r", "500", "-D", date])
                .assert()
                .success();
        }
    }

    #[test_context(CliTestContext)]
    #[test]
    fn add_reports_added_then_merged(ctx: &mut CliTestContext) {
        let args = ["add", "-t", "2", "-d", "Workshop", "-p", "Apollo", "-c", "Acme", "-n", "Alice", "-r", "500", "-D", "2024-03-04"];

        ctx.worklog()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Time entry added"))
            .stdout(predicate::str::contains("1000.00"));

        ctx.worklog()
            .args(["add", "-t", "1.5", "-d", "Workshop", "-p", "Apollo", "-c", "Acme", "-n", "Alice", "-r", "500", "-D", "2024-03-04"])
            .assert()
            .success()
            .stdout(predicate::str::contains("existing entry"))
            .stdout(predicate::str::contains("3.50"))
            .stdout(predicate::str::contains("1750.00"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn add_with_zero_hours_fails_before_touching_the_store(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["add", "-t", "0", "-d", "Nothing", "-p", "Apollo", "-c", "Acme", "-n", "Alice", "-r", "500"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Hours must be greater than zero"))
            .stderr(predicate::str::contains("worklog help"));

        assert!(!ctx.home.path().join("worklog.db").exists());
    }

    #[test_context(CliTestContext)]
    #[test]
    fn add_without_consultant_names_the_missing_field(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["add", "-t", "1", "-d", "Work", "-p", "Apollo", "-c", "Acme", "-r", "500"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("consultant is required"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn config_defaults_are_used_by_add(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["config", "set", "-n", "Bob", "-c", "Globex", "-p", "Hermes", "-r", "80"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration saved"));

        ctx.worklog()
            .args(["add", "-t", "2", "-d", "Support", "-D", "2024-05-02"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Globex"))
            .stdout(predicate::str::contains("160.00"));

        ctx.worklog()
            .args(["config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Bob"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn env_overrides_the_saved_rate(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["config", "set", "-n", "Bob", "-c", "Globex", "-p", "Hermes", "-r", "80"])
            .assert()
            .success();

        ctx.worklog()
            .env("WORKLOG_DEFAULT_RATE", "100")
            .args(["add", "-t", "2", "-d", "Support", "-D", "2024-05-02"])
            .assert()
            .success()
            .stdout(predicate::str::contains("200.00"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn numeric_names_from_env_stay_text(ctx: &mut CliTestContext) {
        ctx.worklog()
            .env("WORKLOG_DEFAULT_PROJECT", "2024")
            .env("WORKLOG_DEFAULT_CONSULTANT", "007")
            .args(["config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Project:    2024"))
            .stdout(predicate::str::contains("Consultant: 007"));

        ctx.worklog()
            .env("WORKLOG_DEFAULT_PROJECT", "2024")
            .env("WORKLOG_DEFAULT_CONSULTANT", "007")
            .args(["add", "-t", "1", "-d", "Planning", "-c", "Acme", "-r", "100", "-D", "2024-03-04"])
            .assert()
            .success();

        ctx.worklog()
            .args(["list", "consultants"])
            .assert()
            .success()
            .stdout(predicate::str::contains("007"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn config_clear_works_with_numeric_env_values(ctx: &mut CliTestContext) {
        ctx.worklog()
            .env("WORKLOG_DEFAULT_CLIENT", "42")
            .args(["config", "clear"])
            .assert()
            .success();
    }

    #[test_context(CliTestContext)]
    #[test]
    fn unsupported_language_is_rejected(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["config", "set", "-l", "sv"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Language 'sv' is not available"));

        assert!(!ctx.home.path().join("config.json").exists());

        ctx.worklog().args(["config", "set", "-l", "en"]).assert().success();
    }

    #[test_context(CliTestContext)]
    #[test]
    fn config_set_without_values_fails(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["config", "set"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Specify at least one value"))
            .stderr(predicate::str::contains("worklog help").not());
    }

    #[test_context(CliTestContext)]
    #[test]
    fn empty_range_is_not_an_error(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["get", "--month", "2001-01"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No time entries found"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn get_renders_csv_and_json(ctx: &mut CliTestContext) {
        ctx.add("3.5", "Workshop", "2024-03-04");

        ctx.worklog()
            .args(["get", "--month", "2024-03", "-o", "csv"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("DATE,CONSULTANT,PROJECT,CUSTOMER,DESCRIPTION,HOURS,RATE,COST\n"))
            .stdout(predicate::str::contains("2024-03-04,Alice,Apollo,Acme,Workshop,3.50,500.00,1750.00"))
            .stdout(predicate::str::contains(",,,,TOTAL,3.50,,1750.00"));

        ctx.worklog()
            .args(["get", "--date", "2024-03-04", "-o", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"total_cost\": 1750.0"))
            .stdout(predicate::str::contains("\"count\": 1"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn get_with_invalid_week_fails(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["get", "--week", "54"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Week must be between 1 and 53"))
            .stderr(predicate::str::contains("worklog help"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn export_is_unbounded_and_writes_files(ctx: &mut CliTestContext) {
        ctx.add("1", "Old work", "2019-06-01");
        ctx.add("2", "New work", "2024-03-04");

        ctx.worklog()
            .args(["export"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Old work"))
            .stdout(predicate::str::contains("New work"))
            .stdout(predicate::str::contains(",,,,TOTAL,3.00,,1500.00"));

        let target = ctx.home.path().join("out.csv");
        ctx.worklog()
            .args(["export", "--year", "2024", "-o"])
            .arg(&target)
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 1 time entries"));

        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.contains("New work"));
        assert!(!written.contains("Old work"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn report_shows_breakdowns(ctx: &mut CliTestContext) {
        ctx.add("3.5", "Workshop", "2024-03-04");

        ctx.worklog()
            .args(["report", "--month", "2024-03"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Time report - March 2024"))
            .stdout(predicate::str::contains("Per consultant"))
            .stdout(predicate::str::contains("1750.00"));

        ctx.worklog()
            .args(["report", "--month", "2024-04"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No time entries found for April 2024"));

        ctx.worklog()
            .args(["report", "--month", "2024-13"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Month must be between 1 and 12"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn migrations_status_names_pending_steps(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["migrations", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Schema version: 0"))
            .stdout(predicate::str::contains("pending v1: create_ledger_tables"));

        ctx.worklog()
            .args(["migrations", "history"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No migrations have been applied"));

        ctx.add("1", "Kickoff", "2024-03-04");

        ctx.worklog()
            .args(["migrations", "history"])
            .assert()
            .success()
            .stdout(predicate::str::contains("create_ledger_tables"))
            .stdout(predicate::str::contains("add_time_entry_indices"));
    }

    #[test_context(CliTestContext)]
    #[test]
    fn list_shows_known_entities(ctx: &mut CliTestContext) {
        ctx.worklog()
            .args(["list", "projects"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No projects recorded yet"));

        ctx.add("1", "Kickoff", "2024-03-04");

        ctx.worklog()
            .args(["list", "projects"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Apollo"))
            .stdout(predicate::str::contains("Acme"));
    }
}
