//! Fast Walsh–Hadamard transform.

/*
Fast Walsh–Hadamard Transform
=============================

The Hadamard matrix H of order N = 2^k has only +1/-1 entries and mutually
orthogonal rows, so H·Hᵗ = N·I. Multiplying a vector by H costs N² additions
done naively; the fast transform factors H into k sparse stages and gets there
in N·log2(N) additions, with no multiplies at all.

Vocabulary
----------

  stage         One pass over the whole buffer. There are log2(N) of them.

  half-width    Distance P between the two elements a butterfly combines.
                Starts at N/2 and halves every stage.

  group         A block of 2P consecutive elements. Stage s has 2^s groups,
                each holding P butterflies.

  butterfly     The 2-point kernel applied to (a, b):

                    a' = a + b
                    b' = a - b

Stage layout for N = 8:

    stage 0 (P = 4):  [0 1 2 3 | 4 5 6 7]        pairs (0,4) (1,5) (2,6) (3,7)
    stage 1 (P = 2):  [0 1 | 2 3] [4 5 | 6 7]    pairs (0,2) (1,3) (4,6) (5,7)
    stage 2 (P = 1):  [0|1] [2|3] [4|5] [6|7]    pairs (0,1) (2,3) (4,5) (6,7)


Scaling and Naming
------------------

`unnormalized` applies H exactly once. `normalized` applies H and then divides
by N. Because H·H = N·I, each is the other's inverse:

    normalized(unnormalized(x)) == x
    unnormalized(normalized(x)) == x

Channel code treats the unscaled pass as the "inverse" direction and the scaled
pass as the "forward" one, which is the opposite of the Fourier engine's
convention (forward unscaled, inverse scaled by 1/N). The names here describe
what each function does to the data; only the pairing above is guaranteed.
*/

use crate::contract;
use crate::sample::Sample;

/// Multiply `x` by the Hadamard matrix in place (no scaling).
///
/// # Panics
/// If `x.len()` is not a power of two.
pub fn unnormalized<T: Sample>(x: &mut [T]) {
    let n = x.len();
    contract::power_of_two("hadamard", n);

    let mut half = n / 2;
    while half > 0 {
        let width = half * 2;
        for group in x.chunks_exact_mut(width) {
            let (lo, hi) = group.split_at_mut(half);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let (sum, diff) = (*a + *b, *a - *b);
                *a = sum;
                *b = diff;
            }
        }
        half /= 2;
    }
}

/// [`unnormalized`] followed by scaling every element by 1/N.
///
/// # Panics
/// If `x.len()` is not a power of two.
pub fn normalized<T: Sample>(x: &mut [T]) {
    unnormalized(x);
    let inv_n = 1.0 / x.len() as f64;
    for v in x.iter_mut() {
        *v = v.scale(inv_n);
    }
}
