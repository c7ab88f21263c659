#![cfg(feature = "reconcile")]
//! Tests for the diagnostic events emitted by set reconciliation.
//!
//! Events are captured with a `tracing-subscriber` fmt layer that writes into
//! a shared buffer, so the assertions see exactly what a user would log.

use std::io::Write;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use seqkit::reconcile::{difference, intersection, xor};
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture<R>(level: Level, operation: impl FnOnce() -> R) -> (R, String) {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, operation);
    (result, output.contents())
}

#[rstest]
fn test_intersection_reports_early_exit() {
    let (result, logs) = capture(Level::DEBUG, || {
        intersection(&[vec![1, 2], vec![3], vec![1, 2]])
    });

    assert!(result.is_empty());
    assert!(logs.contains("intersection emptied early"));
    assert!(logs.contains("remaining_passes=1"));
}

#[rstest]
fn test_trace_level_reports_each_pass_and_fold_step() {
    let (result, logs) = capture(Level::TRACE, || {
        xor(&[vec![1, 2], vec![2, 3], vec![3, 4]])
    });

    assert_eq!(result, vec![1, 4]);
    assert!(logs.contains("xor fold step"));
    assert!(logs.contains("step=2"));
}

#[rstest]
fn test_events_above_max_level_are_not_emitted() {
    let (result, logs) = capture(Level::INFO, || difference(&[3, 2, 1], &[4, 2]));

    assert_eq!(result, vec![3, 1]);
    assert!(logs.is_empty());
}

#[rstest]
fn test_results_do_not_depend_on_subscriber() {
    let sequences = vec![vec![2, 1], vec![4, 2], vec![1, 2]];
    let (traced, _) = capture(Level::TRACE, || intersection(&sequences));

    assert_eq!(traced, intersection(&sequences));
}
