//! Batch Runner: run a set of uploaded files through the (mocked) analysis.
//!
//! Each file gets two independent placeholder measurements drawn from a
//! [`MeasurementSource`]. The completed table replaces whatever result the
//! session held before.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::constants::{AVG_INTENSITY_RANGE, CELL_COUNT_RANGE};
use crate::model::{BatchResult, BatchRow};
use crate::session::SessionStore;

/// Source of placeholder per-file measurements.
pub trait MeasurementSource {
    /// Cell count in `[50, 200]`.
    fn cell_count(&mut self) -> u32;

    /// Average intensity in `[0.2, 0.9]`.
    fn avg_intensity(&mut self) -> f64;
}

/// Uniform random measurements.
#[derive(Debug, Clone)]
pub struct RandomSource<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomSource<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource<StdRng> {
    /// Reproducible source for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MeasurementSource for RandomSource<R> {
    fn cell_count(&mut self) -> u32 {
        self.rng.gen_range(CELL_COUNT_RANGE.0..=CELL_COUNT_RANGE.1)
    }

    fn avg_intensity(&mut self) -> f64 {
        self.rng.gen_range(AVG_INTENSITY_RANGE.0..=AVG_INTENSITY_RANGE.1)
    }
}

/// Measure every file, reporting progress after each one.
///
/// `progress` receives the completed fraction `(i + 1) / n`. Returns `None`
/// for an empty file list; nothing is measured in that case.
pub fn run<S, M, P>(files: &[S], source: &mut M, mut progress: P) -> Option<BatchResult>
where
    S: AsRef<str>,
    M: MeasurementSource + ?Sized,
    P: FnMut(f32),
{
    if files.is_empty() {
        log::warn!("Batch run requested without files");
        return None;
    }

    let total = files.len();
    let mut rows = Vec::with_capacity(total);
    for (i, file) in files.iter().enumerate() {
        // Draw order matches the table's column order
        let cell_count = source.cell_count();
        let avg_intensity = source.avg_intensity();
        rows.push(BatchRow {
            filename: file.as_ref().to_string(),
            cell_count,
            avg_intensity,
        });
        progress((i + 1) as f32 / total as f32);
    }

    log::info!("Batch run complete: {} files", total);
    Some(BatchResult::new(rows))
}

/// Run a batch for the selected model and store the result in the session.
///
/// The model choice does not influence the measurements. Returns `false` when
/// there was nothing to run; the previous result is left untouched then.
pub fn run_into_session<S, M, P>(
    store: &mut SessionStore,
    model_name: Option<&str>,
    files: &[S],
    source: &mut M,
    progress: P,
) -> bool
where
    S: AsRef<str>,
    M: MeasurementSource + ?Sized,
    P: FnMut(f32),
{
    if let Some(name) = model_name {
        log::debug!("Running batch with model: {}", name);
    }

    match run(files, source, progress) {
        Some(table) => {
            store.replace_batch_result(table);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic source that counts up from fixed starting values.
    struct FixedSource {
        count: u32,
        intensity: f64,
    }

    impl MeasurementSource for FixedSource {
        fn cell_count(&mut self) -> u32 {
            self.count += 1;
            self.count
        }

        fn avg_intensity(&mut self) -> f64 {
            self.intensity += 0.1;
            self.intensity
        }
    }

    fn fixed() -> FixedSource {
        FixedSource {
            count: 99,
            intensity: 0.2,
        }
    }

    #[test]
    fn test_one_row_per_file_in_order() {
        let files = ["a.png", "b.png", "c.png"];
        let result = run(&files, &mut fixed(), |_| {}).unwrap();

        let names: Vec<&str> = result.rows().iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, files);
        assert_eq!(result.rows()[0].cell_count, 100);
        assert_eq!(result.rows()[2].cell_count, 102);
    }

    #[test]
    fn test_progress_reaches_one() {
        let mut seen = Vec::new();
        run(&["a", "b", "c", "d"], &mut fixed(), |p| seen.push(p));
        assert_eq!(seen, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_empty_batch_yields_nothing() {
        let files: [&str; 0] = [];
        let mut calls = 0;
        assert!(run(&files, &mut fixed(), |_| calls += 1).is_none());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_random_source_stays_in_range() {
        let mut source = RandomSource::seeded(7);
        for _ in 0..1000 {
            let count = source.cell_count();
            assert!((CELL_COUNT_RANGE.0..=CELL_COUNT_RANGE.1).contains(&count));
            let intensity = source.avg_intensity();
            assert!((AVG_INTENSITY_RANGE.0..=AVG_INTENSITY_RANGE.1).contains(&intensity));
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let files = ["x.tif", "y.tif"];
        let first = run(&files, &mut RandomSource::seeded(42), |_| {});
        let second = run(&files, &mut RandomSource::seeded(42), |_| {});
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_into_session_replaces_result() {
        let mut store = SessionStore::new();
        assert!(run_into_session(
            &mut store,
            Some("Nuclei Counter v1"),
            &["a.png", "b.png"],
            &mut fixed(),
            |_| {}
        ));
        assert!(run_into_session(&mut store, None, &["c.png"], &mut fixed(), |_| {}));

        let result = store.get_or_init().batch_result.as_ref().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.rows()[0].filename, "c.png");
    }

    #[test]
    fn test_empty_run_keeps_previous_result() {
        let mut store = SessionStore::new();
        run_into_session(&mut store, None, &["a.png"], &mut fixed(), |_| {});

        let none: [String; 0] = [];
        assert!(!run_into_session(&mut store, None, &none, &mut fixed(), |_| {}));
        assert_eq!(store.get_or_init().batch_result.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_thread_rng_source() {
        let mut source = RandomSource::new();
        let result = run(&["only.png"], &mut source, |_| {}).unwrap();
        assert_eq!(result.len(), 1);
    }
}
