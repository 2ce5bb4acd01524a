use std::path::{Component, Path};

use crate::{
    foundation::error::PlaceholderError,
    label::{derive_label, is_target_image},
    manifest::ManifestRecord,
    render::PlaceholderBackend,
};

/// A progress notice is emitted after every this many successes.
pub const PROGRESS_EVERY: usize = 100;

/// Notifications emitted while a batch runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchEvent {
    Started { total: usize },
    Progress { generated: usize, total: usize },
    ItemFailed { filename: String, reason: String },
}

/// One entry that could not be generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemFailure {
    pub filename: String,
    pub reason: String,
}

/// Outcome of a whole batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of manifest records, qualifying or not.
    pub total: usize,
    pub generated: usize,
    /// Records without a filename or with a non-PNG filename.
    pub skipped: usize,
    pub failures: Vec<ItemFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Render one placeholder per qualifying record into `out_dir`.
///
/// Per-item failures are collected into the report and the loop moves on.
#[tracing::instrument(skip(records, backend, observer), fields(total = records.len()))]
pub fn generate_all(
    records: &[ManifestRecord],
    out_dir: &Path,
    backend: &mut dyn PlaceholderBackend,
    observer: &mut dyn FnMut(&BatchEvent),
) -> BatchReport {
    let mut report = BatchReport {
        total: records.len(),
        ..BatchReport::default()
    };
    observer(&BatchEvent::Started {
        total: report.total,
    });

    for record in records {
        let Some(filename) = record.filename.as_deref().filter(|f| is_target_image(f)) else {
            report.skipped += 1;
            continue;
        };

        let label = derive_label(filename);
        let result = if is_plain_relative(filename) {
            backend.render_placeholder(&label, &out_dir.join(filename))
        } else {
            Err(PlaceholderError::render(
                "filename must stay inside the output directory",
            ))
        };

        match result {
            Ok(()) => {
                report.generated += 1;
                tracing::debug!(filename, label = %label, "generated placeholder");
                if report.generated % PROGRESS_EVERY == 0 {
                    observer(&BatchEvent::Progress {
                        generated: report.generated,
                        total: report.total,
                    });
                }
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(filename, %reason, "placeholder generation failed");
                observer(&BatchEvent::ItemFailed {
                    filename: filename.to_string(),
                    reason: reason.clone(),
                });
                report.failures.push(ItemFailure {
                    filename: filename.to_string(),
                    reason,
                });
            }
        }
    }

    tracing::info!(
        generated = report.generated,
        failed = report.failed(),
        skipped = report.skipped,
        "batch finished"
    );
    report
}

fn is_plain_relative(filename: &str) -> bool {
    Path::new(filename)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
