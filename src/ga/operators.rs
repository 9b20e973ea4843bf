//! Permutation operators for TSP tours.
//!
//! These operate on `&[usize]` index vectors.
//!
//! # Crossover
//!
//! - [`prefix_crossover`]: single-point, order-preserving recombination.
//!   Children can come out shorter than their parents.
//! - [`order_preserving_crossover`]: the same recombination followed by
//!   [`repair_permutation`], so children are always full permutations.
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions — O(1)

use rand::Rng;

use crate::random::shuffle;

// ============================================================================
// Construction
// ============================================================================

/// A uniformly random permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    shuffle(&mut order, rng);
    order
}

/// Whether `order` is a permutation of `0..n`.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at `point`, without repair.
///
/// Child A is `parent1[..point]` followed by each `parent2[i]`, `i >= point`,
/// not already in child A. Child B mirrors this with the parents swapped.
///
/// Genes that sit in one parent's prefix but in the other parent's suffix
/// are never re-added, so a child can be shorter than `n`. It never holds
/// duplicates.
///
/// # Panics
/// Panics if parents have different lengths or `point > len`.
pub fn prefix_crossover(
    parent1: &[usize],
    parent2: &[usize],
    point: usize,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    let child1 = build_prefix_child(parent1, parent2, point);
    let child2 = build_prefix_child(parent2, parent1, point);
    (child1, child2)
}

/// Copy `template[..point]`, then append unseen genes of `donor[point..]`.
fn build_prefix_child(template: &[usize], donor: &[usize], point: usize) -> Vec<usize> {
    let mut present = GeneSet::for_parents(template, donor);
    let mut child = Vec::with_capacity(template.len());

    for &gene in &template[..point] {
        present.insert(gene);
        child.push(gene);
    }
    for &gene in &donor[point..] {
        if present.insert(gene) {
            child.push(gene);
        }
    }
    child
}

/// Appends every gene of `donor` missing from `child`, in `donor` order.
///
/// Turns a short [`prefix_crossover`] child back into a full permutation
/// when `donor` is one.
pub fn repair_permutation(child: &mut Vec<usize>, donor: &[usize]) {
    let mut present = GeneSet::for_parents(child, donor);
    for &gene in child.iter() {
        present.insert(gene);
    }
    for &gene in donor {
        if present.insert(gene) {
            child.push(gene);
        }
    }
}

/// Order-preserving single-point crossover with repair.
///
/// Picks `point` uniformly in `[0, n)`, applies [`prefix_crossover`], and
/// repairs each child from the parent that donated its suffix. Two
/// permutation parents always yield two permutation children.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_preserving_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return (Vec::new(), Vec::new());
    }

    let point = rng.random_range(0..n);
    let (mut child1, mut child2) = prefix_crossover(parent1, parent2, point);
    repair_permutation(&mut child1, parent2);
    repair_permutation(&mut child2, parent1);
    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// The second position is shifted by one (mod len) when it coincides with
/// the first. Empty and single-element tours are left unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n == 0 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    if j == i {
        j = (j + 1) % n;
    }
    order.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Membership bitmap over gene values.
struct GeneSet {
    seen: Vec<bool>,
}

impl GeneSet {
    /// Sized to hold every gene in either slice.
    fn for_parents(a: &[usize], b: &[usize]) -> Self {
        let size = a.iter().chain(b).max().map_or(0, |&m| m + 1);
        Self {
            seen: vec![false; size],
        }
    }

    /// Marks `gene`; returns `true` if it was not present before.
    fn insert(&mut self, gene: usize) -> bool {
        !std::mem::replace(&mut self.seen[gene], true)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    // ---- Construction ----

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = create_rng(42);
        for n in [0, 1, 2, 7, 50] {
            let t = random_tour(n, &mut rng);
            assert!(is_permutation(&t, n), "n={n}: {t:?}");
        }
    }

    #[test]
    fn test_is_permutation_rejects() {
        assert!(!is_permutation(&[0, 1, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
    }

    // ---- Prefix crossover (unrepaired) ----

    #[test]
    fn test_prefix_crossover_can_drop_genes() {
        let p1 = vec![0, 1, 2, 3];
        let p2 = vec![1, 0, 3, 2];
        let (c1, c2) = prefix_crossover(&p1, &p2, 1);
        // Gene 1 lives in p2's prefix and p1's suffix: child A never sees it.
        assert_eq!(c1, vec![0, 3, 2]);
        assert_eq!(c2, vec![1, 2, 3]);
        assert!(!is_permutation(&c1, 4));
    }

    #[test]
    fn test_prefix_crossover_point_zero_swaps_parents() {
        let p1 = vec![0, 1, 2, 3];
        let p2 = vec![3, 1, 0, 2];
        let (c1, c2) = prefix_crossover(&p1, &p2, 0);
        assert_eq!(c1, p2);
        assert_eq!(c2, p1);
    }

    #[test]
    fn test_prefix_crossover_never_duplicates() {
        let p1 = vec![4, 2, 0, 1, 3, 5];
        let p2 = vec![1, 5, 3, 0, 2, 4];
        for point in 0..p1.len() {
            let (c1, c2) = prefix_crossover(&p1, &p2, point);
            for child in [&c1, &c2] {
                let mut sorted = child.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), child.len(), "duplicate at point {point}");
            }
        }
    }

    // ---- Repaired crossover ----

    #[test]
    fn test_repair_appends_missing_in_donor_order() {
        let mut child = vec![0, 3, 2];
        repair_permutation(&mut child, &[1, 0, 3, 2]);
        assert_eq!(child, vec![0, 3, 2, 1]);
    }

    #[test]
    fn test_repair_noop_on_full_permutation() {
        let mut child = vec![2, 0, 1];
        repair_permutation(&mut child, &[0, 1, 2]);
        assert_eq!(child, vec![2, 0, 1]);
    }

    #[test]
    fn test_order_preserving_valid_for_all_points() {
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![3, 7, 5, 1, 6, 0, 2, 4];
        for point in 0..8 {
            let (mut c1, mut c2) = prefix_crossover(&p1, &p2, point);
            repair_permutation(&mut c1, &p2);
            repair_permutation(&mut c2, &p1);
            assert!(is_permutation(&c1, 8), "point {point}: {c1:?}");
            assert!(is_permutation(&c2, 8), "point {point}: {c2:?}");
            assert_eq!(&c1[..point], &p1[..point]);
            assert_eq!(&c2[..point], &p2[..point]);
        }
    }

    #[test]
    fn test_order_preserving_random() {
        let mut rng = create_rng(42);
        let p1: Vec<usize> = (0..20).collect();
        let mut p2 = p1.clone();
        p2.reverse();
        for _ in 0..100 {
            let (c1, c2) = order_preserving_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&c1, 20), "{c1:?}");
            assert!(is_permutation(&c2, 20), "{c2:?}");
        }
    }

    #[test]
    fn test_order_preserving_identical_parents() {
        let mut rng = create_rng(9);
        let p = vec![3, 1, 4, 0, 2];
        let (c1, c2) = order_preserving_crossover(&p, &p, &mut rng);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }

    #[test]
    fn test_order_preserving_tiny() {
        let mut rng = create_rng(1);
        let (c1, c2) = order_preserving_crossover(&[0], &[0], &mut rng);
        assert_eq!((c1, c2), (vec![0], vec![0]));
        let (c1, c2) = order_preserving_crossover(&[], &[], &mut rng);
        assert!(c1.is_empty() && c2.is_empty());
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_unequal_parents_panic() {
        prefix_crossover(&[0, 1, 2], &[0, 1], 1);
    }

    // ---- Swap Mutation ----

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            swap_mutation(&mut perm, &mut rng);
            assert!(is_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_swap_always_changes_two_positions() {
        let mut rng = create_rng(5);
        for _ in 0..100 {
            let original: Vec<usize> = (0..6).collect();
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            let moved = perm.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert_eq!(moved, 2, "{perm:?}");
        }
    }

    #[test]
    fn test_swap_two_elements_always_swaps() {
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let mut perm = vec![0, 1];
            swap_mutation(&mut perm, &mut rng);
            assert_eq!(perm, vec![1, 0]);
        }
    }

    #[test]
    fn test_swap_single_and_empty() {
        let mut rng = create_rng(42);
        let mut one = vec![0];
        swap_mutation(&mut one, &mut rng);
        assert_eq!(one, vec![0]);

        let mut empty: Vec<usize> = vec![];
        swap_mutation(&mut empty, &mut rng);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_swap_on_short_child_uses_own_length() {
        let mut rng = create_rng(8);
        let mut short = vec![0, 3, 2];
        for _ in 0..20 {
            swap_mutation(&mut short, &mut rng);
            assert_eq!(short.len(), 3);
        }
    }
}
