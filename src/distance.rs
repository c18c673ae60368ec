//! Distance of a grid from being magic.
//!
//! The distance is the sum of absolute differences between neighbouring
//! row sums, neighbouring column sums, each row/column pair, and every row
//! and column against both diagonals. It is zero exactly when all row,
//! column and diagonal sums agree.
//!
//! # Numeric range
//!
//! Cell weights and sums use wrapping 64-bit arithmetic. For large values
//! combined with a large `power`, `v^power` does not fit in 64 bits and is
//! silently narrowed to its low 64 bits, so the reported distance no longer
//! reflects the true sums. Pick bounds and power so that
//! `size * (hi + hi^power)` stays below `i64::MAX`.

use crate::grid::Grid;

/// `value^exp`, narrowed to 64 bits.
///
/// Exponents up to 3 are plain multiplication; larger exponents keep the low
/// 64 bits of the exact result (two's complement), as an arbitrary-precision
/// power truncated to `i64` would.
#[inline]
pub fn power_of(value: i64, exp: u32) -> i64 {
    match exp {
        0 => 1,
        1 => value,
        2 => value.wrapping_mul(value),
        3 => value.wrapping_mul(value).wrapping_mul(value),
        _ => value.wrapping_pow(exp),
    }
}

/// Contribution of one cell to its sums: `v` for `power <= 1`,
/// `v + v^power` otherwise.
#[inline]
pub fn weight(value: i64, power: u32) -> i64 {
    if power > 1 {
        value.wrapping_add(power_of(value, power))
    } else {
        value
    }
}

/// Sums and distance computed from one grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Distance from a magic square; zero means solved.
    pub distance: u64,
    /// Weighted row sums.
    pub row_sums: Vec<i64>,
    /// Weighted column sums.
    pub col_sums: Vec<i64>,
    /// Weighted sum of the main diagonal (`i == j`).
    pub diag1: i64,
    /// Weighted sum of the anti-diagonal (`i + j == size - 1`).
    pub diag2: i64,
}

impl Evaluation {
    pub fn is_magic(&self) -> bool {
        self.distance == 0
    }
}

/// Computes [`Evaluation`]s for a fixed power.
#[derive(Debug, Clone, Copy)]
pub struct DistanceEvaluator {
    power: u32,
}

impl DistanceEvaluator {
    pub fn new(power: u32) -> Self {
        Self { power }
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    /// Recomputes every sum from scratch.
    pub fn evaluate(&self, grid: &Grid) -> Evaluation {
        let n = grid.size();
        let mut row_sums = vec![0i64; n];
        let mut col_sums = vec![0i64; n];
        let mut diag1 = 0i64;
        let mut diag2 = 0i64;

        for (i, row) in grid.rows().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                let w = weight(v, self.power);
                row_sums[i] = row_sums[i].wrapping_add(w);
                col_sums[j] = col_sums[j].wrapping_add(w);
                if i == j {
                    diag1 = diag1.wrapping_add(w);
                }
                if i + j == n - 1 {
                    diag2 = diag2.wrapping_add(w);
                }
            }
        }

        let mut distance = 0u64;
        for i in 0..n {
            let (r, c) = (row_sums[i], col_sums[i]);
            if i >= 1 {
                distance = distance
                    .saturating_add(r.abs_diff(row_sums[i - 1]))
                    .saturating_add(c.abs_diff(col_sums[i - 1]));
            }
            distance = distance
                .saturating_add(r.abs_diff(c))
                .saturating_add(r.abs_diff(diag1))
                .saturating_add(r.abs_diff(diag2))
                .saturating_add(c.abs_diff(diag1))
                .saturating_add(c.abs_diff(diag2));
        }

        Evaluation {
            distance,
            row_sums,
            col_sums,
            diag1,
            diag2,
        }
    }

    /// Distance only.
    pub fn distance(&self, grid: &Grid) -> u64 {
        self.evaluate(grid).distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: Vec<Vec<i64>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn lo_shu() -> Grid {
        grid(vec![vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]])
    }

    #[test]
    fn test_power_of_identities() {
        for v in [-7i64, -1, 0, 1, 2, 13, 399] {
            assert_eq!(power_of(v, 0), 1);
            assert_eq!(power_of(v, 1), v);
            assert_eq!(power_of(v, 2), v * v);
            assert_eq!(power_of(v, 3), v * v * v);
            assert_eq!(power_of(v, 4), v * v * v * v);
        }
    }

    #[test]
    fn test_power_of_narrows_large_results() {
        // 2^64 keeps only its low 64 bits
        assert_eq!(power_of(2, 64), 0);
        assert_eq!(power_of(3, 41), 3i64.wrapping_pow(41));
    }

    #[test]
    fn test_weight() {
        assert_eq!(weight(5, 1), 5);
        assert_eq!(weight(5, 2), 30);
        assert_eq!(weight(5, 3), 130);
        assert_eq!(weight(-2, 3), -10);
    }

    #[test]
    fn test_lo_shu_is_magic() {
        let eval = DistanceEvaluator::new(1).evaluate(&lo_shu());
        assert!(eval.is_magic());
        assert_eq!(eval.row_sums, vec![15, 15, 15]);
        assert_eq!(eval.col_sums, vec![15, 15, 15]);
        assert_eq!((eval.diag1, eval.diag2), (15, 15));
    }

    #[test]
    fn test_durer_is_magic() {
        let durer = grid(vec![
            vec![16, 3, 2, 13],
            vec![5, 10, 11, 8],
            vec![9, 6, 7, 12],
            vec![4, 15, 14, 1],
        ]);
        assert_eq!(DistanceEvaluator::new(1).distance(&durer), 0);
    }

    #[test]
    fn test_lo_shu_is_not_bimagic() {
        assert!(DistanceEvaluator::new(2).distance(&lo_shu()) > 0);
    }

    #[test]
    fn test_known_distance_power_one() {
        let eval = DistanceEvaluator::new(1).evaluate(&grid(vec![vec![1, 2], vec![3, 4]]));
        assert_eq!(eval.row_sums, vec![3, 7]);
        assert_eq!(eval.col_sums, vec![4, 6]);
        assert_eq!((eval.diag1, eval.diag2), (5, 5));
        assert_eq!(eval.distance, 20);
    }

    #[test]
    fn test_known_distance_power_two() {
        let eval = DistanceEvaluator::new(2).evaluate(&grid(vec![vec![1, 2], vec![3, 4]]));
        assert_eq!(eval.row_sums, vec![8, 32]);
        assert_eq!(eval.col_sums, vec![14, 26]);
        assert_eq!((eval.diag1, eval.diag2), (22, 18));
        assert_eq!(eval.distance, 120);
    }

    #[test]
    fn test_single_cell_is_magic() {
        assert_eq!(DistanceEvaluator::new(3).distance(&grid(vec![vec![17]])), 0);
    }

    #[test]
    fn test_constant_grid_is_magic_for_any_power() {
        let g = grid(vec![vec![3; 5]; 5]);
        for power in 1..6 {
            assert_eq!(DistanceEvaluator::new(power).distance(&g), 0);
        }
    }

    #[test]
    fn test_distance_never_negative_on_overflow() {
        let g = grid(vec![vec![i64::MAX, i64::MIN], vec![0, i64::MAX]]);
        let eval = DistanceEvaluator::new(1).evaluate(&g);
        assert!(eval.distance > 0);
    }

    /// All weighted line sums, computed independently of the evaluator.
    fn lines(values: &[i64], n: usize, power: u32) -> Vec<i64> {
        let w = |i: usize, j: usize| weight(values[i * n + j], power);
        let mut out = Vec::new();
        for i in 0..n {
            out.push((0..n).map(|j| w(i, j)).sum());
            out.push((0..n).map(|j| w(j, i)).sum());
        }
        out.push((0..n).map(|i| w(i, i)).sum());
        out.push((0..n).map(|i| w(i, n - 1 - i)).sum());
        out
    }

    proptest! {
        #[test]
        fn prop_zero_iff_all_sums_equal(
            n in 1usize..5,
            power in 1u32..4,
            raw in prop::collection::vec(0i64..3, 16),
        ) {
            let values = raw[..n * n].to_vec();
            let all = lines(&values, n, power);
            let equal = all.iter().all(|&s| s == all[0]);
            let g = Grid::from_row_major(n, values);
            let distance = DistanceEvaluator::new(power).distance(&g);
            prop_assert_eq!(distance == 0, equal);
        }

        #[test]
        fn prop_evaluate_is_idempotent(
            n in 1usize..6,
            power in 1u32..5,
            raw in prop::collection::vec(-50i64..50, 25),
        ) {
            let g = Grid::from_row_major(n, raw[..n * n].to_vec());
            let evaluator = DistanceEvaluator::new(power);
            let first = evaluator.evaluate(&g);
            let second = evaluator.evaluate(&g);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_power_of_matches_repeated_multiplication(v in -1000i64..1000, exp in 0u32..6) {
            let expected = (0..exp).fold(1i64, |acc, _| acc * v);
            prop_assert_eq!(power_of(v, exp), expected);
        }
    }
}
