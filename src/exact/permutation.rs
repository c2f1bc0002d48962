//! Lexicographic permutation enumeration.

use crate::models::Tour;

/// Rearranges `perm` into its lexicographic successor.
///
/// Returns `false`, leaving `perm` untouched, if it is already the last
/// (descending) arrangement.
pub(crate) fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let Some(i) = (0..n - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };
    // A suffix element larger than perm[i] exists because perm[i] < perm[i + 1].
    let j = (i + 1..n).rev().find(|&j| perm[j] > perm[i]).unwrap_or(i + 1);
    perm.swap(i, j);
    perm[i + 1..].reverse();
    true
}

/// `n!`, or `None` if it overflows `u64` (n > 20).
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Returns up to `limit` tours in the order the exhaustive search visits them.
///
/// Every tour starts at city 0; the remaining cities run through their
/// permutations in lexicographic order. Front-ends use this to preview or
/// animate the search without running it.
///
/// # Examples
///
/// ```
/// use tsp_compare::exact::candidate_tours;
///
/// let tours = candidate_tours(4, 3);
/// let orders: Vec<&[usize]> = tours.iter().map(|t| t.as_slice()).collect();
/// assert_eq!(orders, vec![&[0, 1, 2, 3][..], &[0, 1, 3, 2], &[0, 2, 1, 3]]);
/// ```
pub fn candidate_tours(n: usize, limit: usize) -> Vec<Tour> {
    let mut tours = Vec::new();
    if n == 0 || limit == 0 {
        return tours;
    }
    let mut order: Vec<usize> = (0..n).collect();
    loop {
        tours.push(Tour::from_order(order.clone()));
        if tours.len() >= limit || !next_permutation(&mut order[1..]) {
            break;
        }
    }
    tours
}
