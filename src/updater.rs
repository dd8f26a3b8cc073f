use std::path::PathBuf;

use crate::db::PriceChangeSource;
use crate::document::{read_document, write_document};
use crate::error::Result;
use crate::fragment::build_fragments;
use crate::models::Job;
use crate::settings::{shellexpand_path, Settings};
use crate::substitute::substitute;

#[derive(Debug)]
pub struct UpdateResult {
    pub jobs: Vec<Job>,
    pub query_failed: bool,
    pub replaced: bool,
    pub output_path: PathBuf,
}

/// Fetch the pending price changes, then rewrite the configured fragment of
/// the input file into the output file.
///
/// The query is best-effort: a failure is logged and the run carries on with
/// no jobs. The fragments come from `settings` alone, so the jobs are only
/// reported back to the caller. Reading the input or writing the output is
/// fatal and returned as an error; the output is not created when the input
/// cannot be read.
pub fn run(settings: &Settings, source: &dyn PriceChangeSource) -> Result<UpdateResult> {
    let (jobs, query_failed) = match source.price_changes(settings.unit_id) {
        Ok(jobs) => {
            tracing::info!(unit_id = settings.unit_id, jobs = jobs.len(), "fetched price changes");
            (jobs, false)
        }
        Err(e) => {
            tracing::warn!(unit_id = settings.unit_id, error = %e, "price change query failed, continuing");
            (Vec::new(), true)
        }
    };

    let fragments = build_fragments(
        settings.style,
        &settings.plu,
        &settings.old_price,
        &settings.new_price,
    );
    tracing::debug!(old = %fragments.old, new = %fragments.new, "built fragments");

    let input_path = PathBuf::from(shellexpand_path(&settings.input_path));
    let output_path = PathBuf::from(shellexpand_path(&settings.output_path));

    let text = read_document(&input_path)?;

    let result = substitute(&text, &fragments);
    if !result.replaced {
        tracing::info!(fragment = %fragments.old, "fragment not found, output is unchanged");
    }

    write_document(&output_path, &result.text)?;
    tracing::info!(
        input = %input_path.display(),
        output = %output_path.display(),
        replaced = result.replaced,
        "wrote output"
    );

    Ok(UpdateResult {
        jobs,
        query_failed,
        replaced: result.replaced,
        output_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};
    use crate::error::UpdateError;

    struct FailingSource;

    impl PriceChangeSource for FailingSource {
        fn price_changes(&self, _unit_id: i64) -> Result<Vec<Job>> {
            Err(UpdateError::Db(rusqlite::Error::InvalidQuery))
        }
    }

    struct FixedSource(Vec<Job>);

    impl PriceChangeSource for FixedSource {
        fn price_changes(&self, _unit_id: i64) -> Result<Vec<Job>> {
            Ok(self.0.clone())
        }
    }

    fn settings_in(dir: &tempfile::TempDir, new_price: &str) -> Settings {
        Settings {
            new_price: new_price.to_string(),
            input_path: dir.path().join("test.rs").to_string_lossy().to_string(),
            output_path: dir.path().join("test2.rs").to_string_lossy().to_string(),
            db_path: dir.path().join("reporting.db").to_string_lossy().to_string(),
            ..Settings::default()
        }
    }

    const MENU: &str = "let water = item!(name: \"Water\", price: 0, plu: \"999\",);\n\
                        let refill = item!(name: \"Refill\", price: 0, plu: \"999\",);\n";

    #[test]
    fn test_rewrites_first_fragment_into_output() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "10");
        std::fs::write(&settings.input_path, MENU).unwrap();

        let result = run(&settings, &FixedSource(Vec::new())).unwrap();
        assert!(result.replaced);
        assert!(!result.query_failed);

        let out = std::fs::read_to_string(&settings.output_path).unwrap();
        assert_eq!(
            out,
            "let water = item!(name: \"Water\", price: 10, plu: \"999\",);\n\
             let refill = item!(name: \"Refill\", price: 0, plu: \"999\",);\n"
        );
        assert_eq!(std::fs::read_to_string(&settings.input_path).unwrap(), MENU);
    }

    #[test]
    fn test_default_prices_copy_input_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "0");
        std::fs::write(&settings.input_path, MENU).unwrap();

        run(&settings, &FixedSource(Vec::new())).unwrap();
        assert_eq!(std::fs::read_to_string(&settings.output_path).unwrap(), MENU);
    }

    #[test]
    fn test_query_failure_does_not_stop_run() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "10");
        std::fs::write(&settings.input_path, MENU).unwrap();

        let result = run(&settings, &FailingSource).unwrap();
        assert!(result.query_failed);
        assert!(result.jobs.is_empty());
        assert!(result.replaced);
        assert!(std::path::Path::new(&settings.output_path).exists());
    }

    #[test]
    fn test_jobs_do_not_drive_fragments() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "0");
        std::fs::write(&settings.input_path, MENU).unwrap();
        let jobs = vec![Job { plu: 999, price_old: "0".into(), price_new: "25".into() }];

        let result = run(&settings, &FixedSource(jobs.clone())).unwrap();
        assert_eq!(result.jobs, jobs);
        assert_eq!(std::fs::read_to_string(&settings.output_path).unwrap(), MENU);
    }

    #[test]
    fn test_non_utf8_input_is_rewritten_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "10");
        std::fs::write(
            &settings.input_path,
            b"item!(long_name: \"Jalape\xf1o\", price: 0, plu: \"999\",);\n// tail\n",
        )
        .unwrap();

        let result = run(&settings, &FixedSource(Vec::new())).unwrap();
        assert!(result.replaced);
        assert_eq!(
            std::fs::read(&settings.output_path).unwrap(),
            b"item!(long_name: \"Jalape\xf1o\", price: 10, plu: \"999\",);\n// tail\n".to_vec()
        );
    }

    #[test]
    fn test_missing_input_is_fatal_and_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "10");

        let err = run(&settings, &FixedSource(Vec::new())).unwrap_err();
        assert!(matches!(err, UpdateError::Io(_)));
        assert!(!std::path::Path::new(&settings.output_path).exists());
    }

    #[test]
    fn test_reads_jobs_from_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir, "10");
        std::fs::write(&settings.input_path, MENU).unwrap();
        let conn = get_connection(std::path::Path::new(&settings.db_path)).unwrap();
        init_db(&conn).unwrap();
        conn.execute(
            "INSERT INTO price_changes (unit_id, plu, price_old, price_new) VALUES (94, 999, '0', '10')",
            [],
        )
        .unwrap();

        let result = run(&settings, &conn).unwrap();
        assert_eq!(result.jobs.len(), 1);
        assert_eq!(result.jobs[0].plu, 999);
    }
}
