use std::sync::atomic::{AtomicU32, Ordering};

pub const DEBUG_ID_START: u32 = 1000;

static NEXT_DEBUG_ID: AtomicU32 = AtomicU32::new(DEBUG_ID_START);

/// Hands out process-wide monotonically increasing debug ids, assigned at
/// node construction. They exist purely as a deterministic tie-break before
/// external ids are assigned — never for identity or equality.
pub fn next_debug_id() -> u32 {
  NEXT_DEBUG_ID.fetch_add(1, Ordering::Relaxed)
}

#[test]
fn test_debug_ids_are_monotonic() {
  let a = next_debug_id();
  let b = next_debug_id();
  assert!(b > a);
  assert!(a >= DEBUG_ID_START);
}
