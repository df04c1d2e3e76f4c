use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::format;
use alloc::string::String;

static NEXT_REGION_ID: AtomicUsize = AtomicUsize::new(0);

/// Allocates a region id unique within the process.
pub(crate) fn next_region_id() -> String {
    let n = NEXT_REGION_ID.fetch_add(1, Ordering::Relaxed);
    format!("rsr-{n}")
}
