use super::*;
use crate::foundation::error::PlaceholderResult;
use std::path::PathBuf;

/// Records every call; fails for labels listed in `fail_on`.
#[derive(Default)]
struct RecordingBackend {
    calls: Vec<(String, PathBuf)>,
    fail_on: Vec<String>,
}

impl PlaceholderBackend for RecordingBackend {
    fn render_placeholder(&mut self, label: &str, path: &Path) -> PlaceholderResult<()> {
        self.calls.push((label.to_string(), path.to_path_buf()));
        if self.fail_on.iter().any(|f| f == label) {
            return Err(PlaceholderError::encode("disk full"));
        }
        Ok(())
    }
}

fn records(names: &[&str]) -> Vec<ManifestRecord> {
    names.iter().map(|n| ManifestRecord::with_filename(*n)).collect()
}

fn run(records: &[ManifestRecord], backend: &mut RecordingBackend) -> (BatchReport, Vec<BatchEvent>) {
    let mut events = Vec::new();
    let report = generate_all(records, Path::new("out"), backend, &mut |e: &BatchEvent| {
        events.push(e.clone())
    });
    (report, events)
}

#[test]
fn single_entry_renders_derived_label_into_out_dir() {
    let mut backend = RecordingBackend::default();
    let (report, events) = run(&records(&["space-my-cool-app.png"]), &mut backend);

    assert_eq!(
        backend.calls,
        vec![(
            "My Cool App".to_string(),
            Path::new("out").join("space-my-cool-app.png")
        )]
    );
    assert_eq!(report.generated, 1);
    assert_eq!(report.total, 1);
    assert_eq!(events, vec![BatchEvent::Started { total: 1 }]);
}

#[test]
fn non_png_and_missing_filenames_are_skipped_silently() {
    let mut recs = records(&["notes.txt", "space-a.png"]);
    recs.push(ManifestRecord::default());

    let mut backend = RecordingBackend::default();
    let (report, events) = run(&recs, &mut backend);

    assert_eq!(backend.calls.len(), 1);
    assert_eq!(report.generated, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.total, 3);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, BatchEvent::ItemFailed { .. }))
    );
}

#[test]
fn failures_are_recorded_and_the_batch_continues() {
    let mut backend = RecordingBackend {
        fail_on: vec!["Broken".to_string()],
        ..RecordingBackend::default()
    };
    let (report, events) = run(
        &records(&["space-ok-one.png", "space-broken.png", "space-ok-two.png"]),
        &mut backend,
    );

    assert_eq!(backend.calls.len(), 3);
    assert_eq!(report.generated, 2);
    assert_eq!(
        report.failures,
        vec![ItemFailure {
            filename: "space-broken.png".to_string(),
            reason: "encode error: disk full".to_string(),
        }]
    );
    assert!(events.contains(&BatchEvent::ItemFailed {
        filename: "space-broken.png".to_string(),
        reason: "encode error: disk full".to_string(),
    }));
}

#[test]
fn progress_is_reported_every_hundred_successes() {
    let names: Vec<String> = (0..250).map(|i| format!("space-app-{i}.png")).collect();
    let recs: Vec<ManifestRecord> = names.iter().map(ManifestRecord::with_filename).collect();

    let mut backend = RecordingBackend::default();
    let (report, events) = run(&recs, &mut backend);

    assert_eq!(report.generated, 250);
    assert_eq!(
        events,
        vec![
            BatchEvent::Started { total: 250 },
            BatchEvent::Progress {
                generated: 100,
                total: 250
            },
            BatchEvent::Progress {
                generated: 200,
                total: 250
            },
        ]
    );
}

#[test]
fn progress_counts_successes_not_records() {
    let mut recs = Vec::new();
    for i in 0..100 {
        recs.push(ManifestRecord::with_filename(format!("notes-{i}.txt")));
        recs.push(ManifestRecord::with_filename(format!("space-app-{i}.png")));
    }
    let mut backend = RecordingBackend::default();
    let (report, events) = run(&recs, &mut backend);

    assert_eq!(report.generated, 100);
    assert_eq!(report.skipped, 100);
    assert_eq!(
        events.last(),
        Some(&BatchEvent::Progress {
            generated: 100,
            total: 200
        })
    );
}

#[test]
fn filenames_escaping_the_output_dir_fail_without_rendering() {
    let mut backend = RecordingBackend::default();
    let (report, _) = run(&records(&["../space-evil.png", "/tmp/space-abs.png"]), &mut backend);

    assert!(backend.calls.is_empty());
    assert_eq!(report.failed(), 2);
    assert_eq!(report.generated, 0);
}

#[test]
fn empty_manifest_reports_zero() {
    let mut backend = RecordingBackend::default();
    let (report, events) = run(&[], &mut backend);
    assert_eq!(report, BatchReport::default());
    assert_eq!(events, vec![BatchEvent::Started { total: 0 }]);
}
