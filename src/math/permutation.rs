//! Permutation ranking in lexicographic (Lehmer) order
//!
//! Ordinal patterns are stored as their lexicographic rank in the space of
//! all `D!` permutations, so a pattern histogram is a dense vector whose index
//! order is already the canonical order used by Fisher information.

/// `n!` for small `n`, or `None` on overflow
pub fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, usize::checked_mul)
}

/// Lexicographic rank of a permutation of `0..len`
///
/// The identity permutation has rank 0 and the reversed permutation has rank
/// `len! - 1`.
pub fn lehmer_rank(permutation: &[usize]) -> usize {
    let len = permutation.len();
    let mut rank = 0;
    for (i, &value) in permutation.iter().enumerate() {
        let smaller_after = permutation
            .iter()
            .skip(i + 1)
            .filter(|&&later| later < value)
            .count();
        rank = rank * (len - i) + smaller_after;
    }
    rank
}

/// Permutation of `0..len` with the given lexicographic rank
///
/// Returns `None` if `rank >= len!`.
pub fn lehmer_unrank(mut rank: usize, len: usize) -> Option<Vec<usize>> {
    if rank >= factorial(len)? {
        return None;
    }

    let mut remaining: Vec<usize> = (0..len).collect();
    let mut permutation = Vec::with_capacity(len);
    for position in (0..len).rev() {
        let block = factorial(position)?;
        let index = rank / block;
        rank %= block;
        if index >= remaining.len() {
            return None;
        }
        permutation.push(remaining.remove(index));
    }
    Some(permutation)
}

/// Stable argsort of a short window into `order`
///
/// `order[k]` receives the index of the k-th smallest value; equal values keep
/// their original index order. `order` is resized to `values.len()`.
pub fn stable_argsort(values: &[f64], order: &mut Vec<usize>) {
    order.clear();
    order.extend(0..values.len());
    // Insertion sort keeps equal values in index order
    for i in 1..order.len() {
        let mut j = i;
        while j > 0 {
            let (Some(&prev), Some(&cur)) = (order.get(j - 1), order.get(j)) else {
                break;
            };
            let prev_value = values.get(prev).copied().unwrap_or(f64::NAN);
            let cur_value = values.get(cur).copied().unwrap_or(f64::NAN);
            if prev_value > cur_value {
                order.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }
}
