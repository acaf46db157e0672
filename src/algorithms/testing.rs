//! Seeded graph generators shared by algorithm tests.

use rand::rngs::StdRng;
use rand::Rng;

/// Random `n x n` matrix with integer weights 1..=9 and roughly 40% density.
/// Diagonal stays zero.
pub(crate) fn random_matrix(rng: &mut StdRng, n: usize, symmetric: bool) -> Vec<Vec<f64>> {
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j || (symmetric && j < i) {
                continue;
            }
            if rng.gen_range(0..10) < 4 {
                let weight = rng.gen_range(1..=9) as f64;
                matrix[i][j] = weight;
                if symmetric {
                    matrix[j][i] = weight;
                }
            }
        }
    }
    matrix
}

/// Random connected symmetric matrix: a spanning path plus random extra edges.
#[cfg(feature = "mst")]
pub(crate) fn random_connected_matrix(rng: &mut StdRng, n: usize) -> Vec<Vec<f64>> {
    let mut matrix = random_matrix(rng, n, true);
    for i in 1..n {
        if matrix[i - 1][i] == 0.0 {
            let weight = rng.gen_range(1..=9) as f64;
            matrix[i - 1][i] = weight;
            matrix[i][i - 1] = weight;
        }
    }
    matrix
}
