//! Per-input generation driver.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use cavemeta_core::{GeneratedFile, WriteResult};
use cavemeta_manifest::{Manifest, MissingInputPolicy};
use cavemeta_scan::{Diagnostic, FieldRecord, MarkerSet, Scanner};

use crate::{EmitSettings, GenerateError, MetaFile, Result};

/// What a run does with the rendered files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write files to the output directory.
    Write,
    /// Render files without touching the disk.
    Preview,
    /// Scan and render, then compare against the files on disk.
    Check,
}

/// Outcome for one configured input.
#[derive(Debug)]
pub enum FileStatus {
    Written,
    /// Existing file already had identical content.
    Unchanged,
    Preview {
        content: String,
    },
    Checked {
        /// Whether the file on disk matches what would be generated.
        up_to_date: bool,
    },
    /// Class marker present but nothing to register; no file is produced.
    NoProperties,
    /// Nothing to register any more; the previously generated file was deleted.
    Removed,
    /// Input skipped under [`MissingInputPolicy::Skip`].
    Missing {
        path: PathBuf,
    },
    Failed(Box<GenerateError>),
}

impl FileStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FileStatus::Failed(_))
    }
}

/// Report for one configured input.
#[derive(Debug)]
pub struct FileReport {
    /// Input path as written in the manifest.
    pub input: String,
    /// Generated file path, when one applies.
    pub output: Option<PathBuf>,
    pub class_name: Option<String>,
    pub fields: Vec<FieldRecord>,
    pub diagnostics: Vec<Diagnostic>,
    pub status: FileStatus,
}

impl FileReport {
    fn new(input: &str, status: FileStatus) -> Self {
        Self {
            input: input.to_string(),
            output: None,
            class_name: None,
            fields: Vec::new(),
            diagnostics: Vec::new(),
            status,
        }
    }
}

/// Result of processing every configured input.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// One report per processed input, in manifest order.
    pub files: Vec<FileReport>,
    /// A missing input stopped the run early.
    pub aborted: bool,
}

impl GenerateResult {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| f.status.is_failed()).count()
    }

    /// Whether the process should exit non-zero.
    pub fn has_failures(&self) -> bool {
        self.aborted || self.failed_count() > 0
    }
}

/// Drives scanning and emission for all inputs of a manifest.
///
/// Inputs are processed one at a time in manifest order. A failure only
/// affects its own input.
pub struct Generator<'m> {
    manifest: &'m Manifest,
    engine_root: PathBuf,
    settings: EmitSettings,
    markers: MarkerSet,
    on_missing: MissingInputPolicy,
}

impl<'m> Generator<'m> {
    pub fn new(manifest: &'m Manifest, engine_root: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            engine_root: engine_root.into(),
            settings: EmitSettings::from(manifest),
            markers: MarkerSet::new(&manifest.markers.class, &manifest.markers.property),
            on_missing: manifest.inputs.on_missing,
        }
    }

    /// Override the manifest's missing input policy.
    pub fn with_missing_policy(mut self, policy: MissingInputPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    pub fn engine_root(&self) -> &Path {
        &self.engine_root
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.engine_root.join(&self.settings.output_dir)
    }

    pub fn run(&self, mode: Mode) -> GenerateResult {
        let mut result = GenerateResult::default();

        for input in &self.manifest.inputs.files {
            let path = self.engine_root.join(input);
            if !path.is_file() {
                match self.on_missing {
                    MissingInputPolicy::Skip => {
                        result
                            .files
                            .push(FileReport::new(input, FileStatus::Missing { path }));
                        continue;
                    }
                    MissingInputPolicy::Abort => {
                        let err = Box::new(GenerateError::MissingInput { path });
                        result
                            .files
                            .push(FileReport::new(input, FileStatus::Failed(err)));
                        result.aborted = true;
                        break;
                    }
                }
            }

            result.files.push(self.process(input, &path, mode));
        }

        result
    }

    fn process(&self, input: &str, path: &Path, mode: Mode) -> FileReport {
        let src = match std::fs::read_to_string(path) {
            Ok(src) => src,
            Err(source) => {
                let err = GenerateError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                return FileReport::new(input, FileStatus::Failed(Box::new(err)));
            }
        };

        let scan = match Scanner::new(&self.markers).scan(&src, input) {
            Ok(scan) => scan,
            Err(e) => return FileReport::new(input, FileStatus::Failed(e.into())),
        };

        let mut report = FileReport::new(input, FileStatus::NoProperties);
        report.class_name = scan.class_name().map(str::to_string);
        report.diagnostics = scan.diagnostics.clone();

        let file = match MetaFile::new(&self.settings, input, &scan) {
            Ok(file) => file,
            Err(e) => {
                report.status = FileStatus::Failed(e);
                return report;
            }
        };
        report.fields = scan.fields.clone();
        let output = file.path(&self.engine_root);
        if !scan.has_fields() {
            return Self::retire(report, output, mode);
        }

        report.status = match mode {
            Mode::Write => match file.write(&self.engine_root) {
                Ok(WriteResult::Written) => FileStatus::Written,
                Ok(WriteResult::Unchanged | WriteResult::Skipped) => FileStatus::Unchanged,
                Err(source) => FileStatus::Failed(Box::new(GenerateError::Write {
                    path: output.clone(),
                    source,
                })),
            },
            Mode::Preview => FileStatus::Preview {
                content: file.render(),
            },
            Mode::Check => {
                let existing = std::fs::read_to_string(&output).ok();
                FileStatus::Checked {
                    up_to_date: existing.as_deref() == Some(file.render().as_str()),
                }
            }
        };
        report.output = Some(output);
        report
    }

    /// A header with nothing to register must not leave its old output behind.
    fn retire(mut report: FileReport, output: PathBuf, mode: Mode) -> FileReport {
        if !output.is_file() {
            return report;
        }

        report.status = match mode {
            Mode::Write => match std::fs::remove_file(&output) {
                Ok(()) => FileStatus::Removed,
                Err(source) => FileStatus::Failed(Box::new(GenerateError::Io {
                    path: output.clone(),
                    source,
                })),
            },
            Mode::Preview => FileStatus::NoProperties,
            Mode::Check => FileStatus::Checked { up_to_date: false },
        };
        report.output = Some(output);
        report
    }

    /// Generated files in the output directory that no configured input maps to.
    pub fn orphans(&self) -> Result<Vec<PathBuf>> {
        let dir = self.output_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let expected: BTreeSet<String> = self
            .manifest
            .inputs
            .files
            .iter()
            .filter_map(|input| self.manifest.output_file_name(input))
            .collect();

        let io_err = |source: std::io::Error| {
            Box::new(GenerateError::Io {
                path: dir.clone(),
                source,
            })
        };

        let mut orphans = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.ends_with(&self.settings.suffix) && !expected.contains(name) {
                orphans.push(path);
            }
        }
        orphans.sort();
        Ok(orphans)
    }

    /// Delete orphaned generated files; returns what was (or would be) removed.
    pub fn clean(&self, dry_run: bool) -> Result<Vec<PathBuf>> {
        let orphans = self.orphans()?;
        if !dry_run {
            for path in &orphans {
                std::fs::remove_file(path).map_err(|source| {
                    Box::new(GenerateError::Io {
                        path: path.clone(),
                        source,
                    })
                })?;
            }
        }
        Ok(orphans)
    }
}
