// src/twiddles.rs

//! Process-wide twiddle tables keyed by transform size.
//!
//! A table is pure derived data: it is built on first use, shared read-only
//! through an `Arc`, and lives until process exit. The lock only guards the
//! lookup/insert, never a transform.

use alloc::sync::Arc;
use num_complex::Complex64;
use crate::radix2::precompute_twiddles;

#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::sync::{Mutex, OnceLock};

#[cfg(feature = "std")]
static TWIDDLE_CACHE: OnceLock<Mutex<HashMap<usize, Arc<[Complex64]>>>> = OnceLock::new();

#[cfg(feature = "std")]
fn cache() -> &'static Mutex<HashMap<usize, Arc<[Complex64]>>> {
    TWIDDLE_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Builds a fresh N/2-entry table `exp(-2*pi*i*j/N)`.
pub fn compute(n: usize) -> Arc<[Complex64]> {
    let mut table = vec![Complex64::default(); n / 2];
    precompute_twiddles(&mut table, n);
    Arc::from(table)
}

/// Returns the N/2-entry table for size `n`, building it once per process.
#[cfg(feature = "std")]
pub fn for_size(n: usize) -> Arc<[Complex64]> {
    // A poisoned lock still holds valid tables: they are only ever inserted whole.
    let mut tables = cache().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    tables.entry(n).or_insert_with(|| compute(n)).clone()
}

/// Without `std` there is no global cache: every plan builds its own table.
#[cfg(not(feature = "std"))]
pub fn for_size(n: usize) -> Arc<[Complex64]> {
    compute(n)
}
