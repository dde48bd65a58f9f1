//! Parallel fork-join reduction.
//!
//! ## Purpose
//!
//! This module provides the parallel counterpart of the sequential lockstep
//! fold. The index range is split into contiguous partitions, each partition
//! is folded into its own kernel on a worker thread, and the partial kernels
//! are merged in index order.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for the fork-join; one barrier, no locks.
//! * **Determinism**: The partition plan depends only on `n` and the partition
//!   count, and partials are merged in index order, so a fixed configuration
//!   always reproduces the same bits.
//! * **Fail-fast**: A panicking worker aborts the whole reduction and surfaces
//!   as `WorkerFailed`; no partial result escapes.
//! * **Fallback**: Without the `cpu` feature the same plan runs on the
//!   calling thread and yields identical results.
//!
//! ## Key concepts
//!
//! * **Partition count**: The configured parallelism, or the size of the
//!   global rayon pool. Clamped to `n` so no partition is empty.
//! * **Merge**: Plain addition for naive kernels, two-sum merge for
//!   compensated kernels.
//!
//! ## Invariants
//!
//! * Partitions are contiguous, non-overlapping and cover `[0, n)`.
//! * Results for different partition counts agree within the error bound of
//!   the kernel's accumulator, not bit for bit.
//!
//! ## Non-goals
//!
//! * This module does not support cancellation or timeouts.
//! * This module does not schedule work dynamically.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::{debug, trace};
use num_traits::Float;
use std::any::Any;
use std::fmt::Debug;
use std::ops::Range;
use std::panic::{catch_unwind, AssertUnwindSafe};

// Internal dependencies
use crate::algorithms::kernel::{fold, Kernel};
use crate::primitives::errors::CorrelationError;
use crate::primitives::view::{SequenceView, Transform};

// ============================================================================
// Partitioning
// ============================================================================

/// Split `[0, n)` into `partitions` contiguous ranges of near-equal length.
///
/// The first `n % partitions` ranges are one element longer. The count is
/// clamped to `1..=n`; an empty range yields no partitions.
pub fn partition_bounds(n: usize, partitions: usize) -> Vec<Range<usize>> {
    if n == 0 {
        return Vec::new();
    }

    let p = partitions.clamp(1, n);
    let base = n / p;
    let extra = n % p;

    let mut bounds = Vec::with_capacity(p);
    let mut start = 0;
    for i in 0..p {
        let len = base + usize::from(i < extra);
        bounds.push(start..start + len);
        start += len;
    }
    bounds
}

/// Partition count used when none is configured.
pub fn default_parallelism() -> usize {
    #[cfg(feature = "cpu")]
    {
        rayon::current_num_threads().max(1)
    }
    #[cfg(not(feature = "cpu"))]
    {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

// ============================================================================
// Parallel Reduction
// ============================================================================

/// Reduce two views with kernel `K` across worker threads.
///
/// `parallelism` fixes the number of partitions and the size of a dedicated
/// worker pool; both are clamped to `n`. `None` uses the global rayon pool
/// and one partition per worker.
pub fn reduce_parallel<T, K, FX, FY>(
    x: &SequenceView<'_, T, FX>,
    y: &SequenceView<'_, T, FY>,
    parallelism: Option<usize>,
) -> Result<K::Output, CorrelationError>
where
    T: Float + Debug + Send + Sync,
    K: Kernel<T>,
    FX: Transform<T>,
    FY: Transform<T>,
{
    if x.len() != y.len() {
        return Err(CorrelationError::mismatched(x.len(), y.len()));
    }
    if parallelism == Some(0) {
        return Err(CorrelationError::InvalidParallelism(0));
    }

    let n = x.len();
    let bounds = partition_bounds(n, parallelism.unwrap_or_else(default_parallelism));
    debug!(
        "parallel reduction: n={}, partitions={}, dedicated pool={}",
        n,
        bounds.len(),
        parallelism.is_some()
    );

    let fold_partition = |range: &Range<usize>| -> K {
        trace!("folding partition {:?}", range);
        fold::<T, K, FX, FY>(&x.subview(range.clone()), &y.subview(range.clone()))
    };

    let partials = run_partitions(&bounds, parallelism, fold_partition)?;

    // Merge in index order for reproducible output.
    let mut total = K::default();
    for partial in &partials {
        total.merge(partial);
    }
    Ok(total.finish())
}

#[cfg(feature = "cpu")]
fn run_partitions<K, F>(
    bounds: &[Range<usize>],
    parallelism: Option<usize>,
    fold_partition: F,
) -> Result<Vec<K>, CorrelationError>
where
    K: Send,
    F: Fn(&Range<usize>) -> K + Send + Sync,
{
    let work = || bounds.par_iter().map(&fold_partition).collect::<Vec<K>>();

    match parallelism {
        Some(threads) => {
            // Never more workers than partitions.
            let workers = threads.min(bounds.len()).max(1);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| CorrelationError::WorkerFailed(e.to_string()))?;
            catch_unwind(AssertUnwindSafe(|| pool.install(work)))
                .map_err(|payload| CorrelationError::WorkerFailed(panic_message(&*payload)))
        }
        None => catch_unwind(AssertUnwindSafe(work))
            .map_err(|payload| CorrelationError::WorkerFailed(panic_message(&*payload))),
    }
}

// Sequential fallback (when cpu feature is not enabled)
#[cfg(not(feature = "cpu"))]
fn run_partitions<K, F>(
    bounds: &[Range<usize>],
    _parallelism: Option<usize>,
    fold_partition: F,
) -> Result<Vec<K>, CorrelationError>
where
    K: Send,
    F: Fn(&Range<usize>) -> K + Send + Sync,
{
    catch_unwind(AssertUnwindSafe(|| {
        bounds.iter().map(&fold_partition).collect::<Vec<K>>()
    }))
    .map_err(|payload| CorrelationError::WorkerFailed(panic_message(&*payload)))
}
