//! The compression function `g_N(h, m)`.

use crate::hash::streebog::schedule::e;
use crate::hash::streebog::transforms::{lps_fused, x};
use crate::primitives::Block512;

/// `g_N(h, m) = E(LPS(h ⊕ N), m) ⊕ h ⊕ m`.
///
/// `n` is the processed-bit-count value mixed into the key for this block —
/// "N" in the standard's notation, not to be confused with the accumulator
/// of the same name in [`super::state`], which is threaded through here one
/// block at a time.
pub(super) fn g(h: Block512, n: Block512, m: Block512) -> Block512 {
    let key = lps_fused(x(h, n));
    x(x(e(key, m), h), m)
}
