//! Writing the assembled script to disk.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::assemble::Section;
use crate::defaults::ExportConfig;
use crate::dialect::Dialect;
use crate::document::DocumentState;
use crate::error::{Error, Result};
use crate::io;

pub const MIME_TYPE: &str = "text/plain";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub overwrite: bool,
    pub executable: bool,
}

impl ExportOptions {
    /// Options from config, with an optional directory override and `--force`.
    pub fn from_config(config: &ExportConfig, output_dir: Option<PathBuf>, force: bool) -> Self {
        Self {
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(&config.output_dir)),
            overwrite: force || config.overwrite,
            executable: config.executable,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub path: String,
    pub file_name: String,
    pub dialect: Dialect,
    pub mime_type: &'static str,
    pub bytes: usize,
    pub sections: Vec<Section>,
    pub overwritten: bool,
    pub executable: bool,
    pub exported_at: String,
}

/// Target path for `dialect` inside `output_dir`.
pub fn target_path(output_dir: &Path, dialect: Dialect) -> PathBuf {
    output_dir.join(dialect.export_file_name())
}

pub fn export(state: &DocumentState, options: &ExportOptions) -> Result<ExportReport> {
    let report = state.report();
    let path = target_path(&options.output_dir, state.dialect);
    let existed = path.exists();

    if existed && !options.overwrite {
        return Err(Error::export_target_exists(path.display().to_string()));
    }

    io::ensure_dir(&options.output_dir)?;
    io::write_file_atomic(&path, &report.content, &format!("export {}", path.display()))?;

    let executable = options.executable && state.dialect == Dialect::Shell;
    if executable {
        io::make_executable(&path)?;
    }

    crate::log_status!("export", "Wrote {} ({} bytes)", path.display(), report.content.len());

    Ok(ExportReport {
        path: path.display().to_string(),
        file_name: state.dialect.export_file_name(),
        dialect: state.dialect,
        mime_type: MIME_TYPE,
        bytes: report.content.len(),
        sections: report.sections,
        overwritten: existed,
        executable: executable && cfg!(unix),
        exported_at: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn options(dir: &Path, overwrite: bool) -> ExportOptions {
        ExportOptions {
            output_dir: dir.to_path_buf(),
            overwrite,
            executable: true,
        }
    }

    #[test]
    fn writes_preview_under_dialect_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let state = DocumentState::new(Dialect::PowerShell);

        let report = export(&state, &options(dir.path(), false)).unwrap();

        assert_eq!(report.file_name, "script.ps1");
        assert_eq!(report.mime_type, "text/plain");
        assert!(!report.executable);
        let written = fs::read_to_string(dir.path().join("script.ps1")).unwrap();
        assert_eq!(written, state.preview());
    }

    #[test]
    fn refuses_to_overwrite_without_permission() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("script.sh"), "keep me").unwrap();

        let err = export(&DocumentState::default(), &options(dir.path(), false)).unwrap_err();

        assert_eq!(err.code.as_str(), "export.target_exists");
        assert_eq!(
            fs::read_to_string(dir.path().join("script.sh")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn overwrites_when_allowed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("script.sh"), "old").unwrap();

        let report = export(&DocumentState::default(), &options(dir.path(), true)).unwrap();

        assert!(report.overwritten);
        assert_eq!(
            fs::read_to_string(dir.path().join("script.sh")).unwrap(),
            "#!/bin/bash\n\n"
        );
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("scripts");

        export(&DocumentState::default(), &options(&nested, false)).unwrap();

        assert!(nested.join("script.sh").exists());
    }

    #[test]
    fn options_prefer_override_and_force() {
        let config = ExportConfig::default();
        let opts = ExportOptions::from_config(&config, Some(PathBuf::from("/tmp/x")), true);
        assert_eq!(opts.output_dir, PathBuf::from("/tmp/x"));
        assert!(opts.overwrite);

        let opts = ExportOptions::from_config(&config, None, false);
        assert_eq!(opts.output_dir, PathBuf::from("."));
        assert!(!opts.overwrite);
    }

    #[cfg(unix)]
    #[test]
    fn shell_export_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let report = export(&DocumentState::default(), &options(dir.path(), false)).unwrap();

        assert!(report.executable);
        let mode = fs::metadata(dir.path().join("script.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
