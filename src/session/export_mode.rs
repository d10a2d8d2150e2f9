//! Static export: the dashboard rendered once into SVG/HTML files

use super::{CommandError, SessionData};
use crate::dashboard::Dashboard;
use crate::surface::SvgSurface;
use crate::{print_cmd_info, print_cmd_success};
use std::path::{Path, PathBuf};

/// Render one sample (the first when `sample_id` is `None`) into `out_dir`.
///
/// Returns the files written, page first.
pub fn run_export_mode(
    session: SessionData,
    sample_id: Option<&str>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, CommandError> {
    let mut dashboard = Dashboard::initialize(session.dataset, SvgSurface::new());
    if let Some(id) = sample_id {
        dashboard.select_sample_by_id(id)?;
    }

    let Some(index) = dashboard.selected() else {
        return Err(CommandError::NothingToExport);
    };
    print_cmd_info!(
        "Exporting sample",
        "{} ({} of {})",
        dashboard.options()[index].text,
        index + 1,
        dashboard.options().len()
    );

    let written = dashboard
        .surface()
        .write_to(out_dir)
        .map_err(|source| CommandError::Export {
            dir: out_dir.to_path_buf(),
            source,
        })?;
    print_cmd_success!("Export complete", "{}", out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardError;
    use crate::dataset::fixtures::{dataset, sample_with_taxa};
    use crate::provider::DataSource;
    use crate::surface::svg::{BAR_FILE, BUBBLE_FILE, METADATA_FILE};
    use std::fs;

    fn session() -> SessionData {
        SessionData {
            dataset: dataset(vec![
                sample_with_taxa("940", 12),
                sample_with_taxa("941", 3),
            ]),
            source: DataSource::File(PathBuf::from("samples.json")),
            loaded_at: "2026-10-19 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_export_named_sample() {
        let dir = tempfile::tempdir().unwrap();
        let written = run_export_mode(session(), Some("941"), dir.path()).unwrap();
        assert_eq!(written.len(), 4);

        let bar = fs::read_to_string(dir.path().join(BAR_FILE)).unwrap();
        assert_eq!(bar.matches("<rect").count(), 3);
        let bubble = fs::read_to_string(dir.path().join(BUBBLE_FILE)).unwrap();
        assert_eq!(bubble.matches("<circle").count(), 3);
        let metadata = fs::read_to_string(dir.path().join(METADATA_FILE)).unwrap();
        assert!(metadata.starts_with("id: 941\n"));
    }

    #[test]
    fn test_export_defaults_to_first_sample() {
        let dir = tempfile::tempdir().unwrap();
        run_export_mode(session(), None, dir.path()).unwrap();
        let bar = fs::read_to_string(dir.path().join(BAR_FILE)).unwrap();
        assert_eq!(bar.matches("<rect").count(), 10);
    }

    #[test]
    fn test_export_unknown_sample() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_export_mode(session(), Some("999"), dir.path()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Selection(DashboardError::UnknownSample { ref id }) if id == "999"
        ));
    }

    #[test]
    fn test_export_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionData {
            dataset: dataset(Vec::new()),
            ..session()
        };
        let err = run_export_mode(session, None, dir.path()).unwrap_err();
        assert!(matches!(err, CommandError::NothingToExport));
    }

    #[test]
    // A file where the output directory should be makes the write fail.
    fn test_export_unwritable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "").unwrap();
        let err = run_export_mode(session(), None, &blocker).unwrap_err();
        assert!(matches!(err, CommandError::Export { dir: ref target, .. } if target == &blocker));
    }
}
