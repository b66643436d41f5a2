use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crossbeam::channel::{self, RecvTimeoutError, Sender};
use log::{debug, error, info, warn};
use rayon::ThreadPoolBuildError;
use thiserror::Error;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::divergence_matrix::{DivergenceMatrix, INTERIOR};
use crate::core::data::point::Point;

/// Longest the waiting thread sleeps before re-checking its cancel token.
pub const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Error)]
pub enum FillMatrixError {
    #[error(
        "filling the {rows}x{cols} matrix exceeded the {deadline:?} limit after {elapsed:?}; \
         consider fewer iterations, a lower resolution or more threads"
    )]
    Timeout {
        rows: usize,
        cols: usize,
        deadline: Duration,
        elapsed: Duration,
    },
    #[error("filling the {rows}x{cols} matrix was interrupted after {elapsed:?}")]
    Interrupted {
        rows: usize,
        cols: usize,
        elapsed: Duration,
    },
}

/// State shared by every worker of one fill.
struct FillJob<Alg> {
    algorithm: Arc<Alg>,
    cells: Vec<AtomicI32>,
    cursor: AtomicUsize,
    abort: AtomicBool,
    live_workers: AtomicUsize,
}

impl<Alg: FractalAlgorithm> FillJob<Alg> {
    fn new(algorithm: Arc<Alg>, workers: usize) -> Self {
        let total = algorithm.rows() * algorithm.cols();

        Self {
            algorithm,
            cells: (0..total).map(|_| AtomicI32::new(INTERIOR)).collect(),
            cursor: AtomicUsize::new(0),
            abort: AtomicBool::new(false),
            live_workers: AtomicUsize::new(workers),
        }
    }

    /// Claims cells off the shared cursor until none are left or the fill is aborted.
    /// Each index is handed out exactly once, so writes never overlap.
    fn drain(&self) {
        let total = self.cells.len();
        let cols = self.algorithm.cols();

        while !self.abort.load(Ordering::Relaxed) {
            let index = self.cursor.fetch_add(1, Ordering::Relaxed);
            if index >= total {
                break;
            }

            let step = self.algorithm.compute(Point::from_index(index, cols));
            self.cells[index].store(step, Ordering::Relaxed);
        }
    }

    fn run_worker(&self, done: &Sender<()>) {
        self.drain();

        // AcqRel chains every worker's writes into the last one's send
        if self.live_workers.fetch_sub(1, Ordering::AcqRel) == 1 {
            let _ = done.send(());
        }
    }

    fn abort(&self) {
        self.abort.store(true, Ordering::Relaxed);
    }

    fn to_matrix(&self) -> DivergenceMatrix {
        let values = self
            .cells
            .iter()
            .map(|cell| cell.load(Ordering::Relaxed))
            .collect();

        DivergenceMatrix::from_filled_cells(self.algorithm.rows(), self.algorithm.cols(), values)
    }
}

/// Fills divergence matrices on a fixed-size worker pool under a wall-clock deadline.
///
/// Every fill fans out one drain task per pool thread; all of them race on a single
/// atomic cursor. The calling thread blocks until the last task reports completion,
/// the deadline passes, or the caller's cancel token fires. In the last two cases the
/// remaining work is abandoned and the partial matrix is dropped.
pub struct MatrixFiller {
    pool: rayon::ThreadPool,
    workers: usize,
    max_wait: Duration,
}

impl MatrixFiller {
    pub fn new(workers: NonZeroUsize, max_wait: Duration) -> Result<Self, ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("matrix-fill-{i}"))
            .panic_handler(|_| error!("matrix fill worker panicked"))
            .build()?;

        Ok(Self {
            pool,
            workers: workers.get(),
            max_wait,
        })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    #[must_use]
    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }

    pub fn fill<Alg, C>(
        &self,
        algorithm: Arc<Alg>,
        cancel: &C,
    ) -> Result<DivergenceMatrix, FillMatrixError>
    where
        Alg: FractalAlgorithm + 'static,
        C: CancelToken + ?Sized,
    {
        let rows = algorithm.rows();
        let cols = algorithm.cols();
        let started = Instant::now();
        // an unrepresentable deadline means no deadline
        let deadline = started.checked_add(self.max_wait);

        debug!(
            "filling {}x{} matrix on {} workers, deadline {:?}",
            rows, cols, self.workers, self.max_wait
        );

        let job = Arc::new(FillJob::new(algorithm, self.workers));
        let (done_tx, done_rx) = channel::bounded::<()>(1);

        for _ in 0..self.workers {
            let job = Arc::clone(&job);
            let done_tx = done_tx.clone();
            self.pool.spawn(move || job.run_worker(&done_tx));
        }
        drop(done_tx);

        loop {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => WAIT_POLL_INTERVAL,
            };

            if remaining.is_zero() {
                job.abort();
                let elapsed = started.elapsed();
                warn!("{}x{} matrix fill timed out after {:?}", rows, cols, elapsed);

                return Err(FillMatrixError::Timeout {
                    rows,
                    cols,
                    deadline: self.max_wait,
                    elapsed,
                });
            }

            if cancel.is_cancelled() {
                job.abort();
                let elapsed = started.elapsed();
                warn!("{}x{} matrix fill interrupted after {:?}", rows, cols, elapsed);

                return Err(FillMatrixError::Interrupted {
                    rows,
                    cols,
                    elapsed,
                });
            }

            match done_rx.recv_timeout(remaining.min(WAIT_POLL_INTERVAL)) {
                Ok(()) => break,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    // every worker is gone without the last one reporting in
                    job.abort();
                    let elapsed = started.elapsed();
                    error!("{}x{} matrix fill lost its workers after {:?}", rows, cols, elapsed);

                    return Err(FillMatrixError::Interrupted {
                        rows,
                        cols,
                        elapsed,
                    });
                }
            }
        }

        info!("filled {}x{} matrix in {:?}", rows, cols, started.elapsed());

        Ok(job.to_matrix())
    }
}
