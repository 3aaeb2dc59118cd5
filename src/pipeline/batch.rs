use rayon::prelude::*;

use crate::{
    foundation::{
        buffer::PixelBuffer,
        error::{FilterError, FilterResult},
    },
    pipeline::recipe::FilterChain,
};

/// Options for [`apply_batch`].
#[derive(Clone, Debug, Default)]
pub struct BatchOpts {
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

#[tracing::instrument(skip(buffers, chain), fields(count = buffers.len(), steps = chain.len()))]
/// Run `chain` over independent buffers on a dedicated thread pool.
///
/// Each buffer is moved into exactly one task. Output order matches input order. The first
/// failing buffer aborts the batch.
pub fn apply_batch(
    buffers: Vec<PixelBuffer>,
    chain: &FilterChain,
    opts: &BatchOpts,
) -> FilterResult<Vec<PixelBuffer>> {
    let pool = build_thread_pool(opts.threads)?;
    tracing::debug!(threads = pool.current_num_threads(), "batch pool ready");
    pool.install(|| {
        buffers
            .into_par_iter()
            .map(|buffer| chain.apply(buffer))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> FilterResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FilterError::invalid_parameter(
            "batch 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        FilterError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
