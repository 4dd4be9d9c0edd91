//! CLI presentation: text and json renderings of a fingerprint run.

use crate::error::ShafolderError;
use crate::fingerprint::builder::{TargetKind, TreeFingerprint};
use crate::fingerprint::format::{Formatter, Mode};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Everything a run produced, ready for presentation
#[derive(Debug, Clone, Serialize)]
pub struct FingerprintReport {
    pub path: PathBuf,
    pub mode: Mode,
    pub files: usize,
    pub full: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<EntryReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
    #[serde(skip)]
    kind: Option<TargetKind>,
}

/// Per-file line of a verbose report
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub path: PathBuf,
    pub full: String,
    pub tag: String,
}

impl FingerprintReport {
    /// Render the aggregate, and every file when `verbose`
    pub fn build(fingerprint: &TreeFingerprint, formatter: &Formatter, verbose: bool) -> Self {
        let rendering = formatter.format(&fingerprint.aggregate);
        let entries = verbose.then(|| {
            fingerprint
                .files
                .iter()
                .map(|file| {
                    let r = formatter.format(&file.digest);
                    EntryReport {
                        path: file.path.clone(),
                        full: r.full,
                        tag: r.tag,
                    }
                })
                .collect::<Vec<_>>()
        });

        Self {
            path: fingerprint.root.clone(),
            mode: formatter.mode(),
            files: fingerprint.file_count(),
            full: rendering.full,
            tag: rendering.tag,
            entries,
            copy: None,
            manifest: None,
            kind: Some(fingerprint.kind),
        }
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text output; the banner is dropped when `terse`
pub fn format_report_text(report: &FingerprintReport, terse: bool, color: bool) -> String {
    let mut lines = Vec::new();

    if !terse {
        let banner = format!("{} {}", report.mode.label(), report.path.display());
        if color {
            lines.push(format!("{}", banner.bold()));
        } else {
            lines.push(banner);
        }
    }

    if let Some(entries) = &report.entries {
        for entry in entries {
            lines.push(format!("FILE: {}", entry.path.display()));
            lines.push(indent(&entry.full));
        }
        if report.files > 1 {
            lines.push(format!("TOGETHER: ({} files)", report.files));
        }
    }

    // A lone verbose entry already is the fingerprint
    let already_shown = report.entries.is_some() && report.files == 1;
    if !already_shown {
        lines.push(indent(&report.full));
    }

    if !terse {
        if let Some(copy) = &report.copy {
            let noun = match report.kind {
                Some(TargetKind::Directory) => "folder",
                _ => "file",
            };
            lines.push(format!("Copied {} to {}", noun, copy.display()));
        }
        if let Some(manifest) = &report.manifest {
            lines.push(format!("Manifest written to {}", manifest.display()));
        }
    }

    lines.join("\n")
}

pub fn format_report_json(report: &FingerprintReport) -> Result<String, ShafolderError> {
    Ok(serde_json::to_string_pretty(report)?)
}
