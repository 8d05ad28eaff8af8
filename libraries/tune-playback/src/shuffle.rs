//! Random next-track selection

use rand::Rng;

/// Pick a uniformly random index in `0..len` other than `current`
///
/// Returns `None` when there is no other index to pick.
pub fn pick_other_index<R: Rng + ?Sized>(rng: &mut R, len: usize, current: usize) -> Option<usize> {
    if len < 2 {
        return None;
    }

    // Draw from the len-1 other slots, then step over `current`
    let pick = rng.gen_range(0..len - 1);
    Some(if current < len && pick >= current { pick + 1 } else { pick })
}
