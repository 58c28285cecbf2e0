//! Arithmetic tests for the register-accelerated 4-element vector.
//!
//! This suite validates the algebraic properties the dispatch layer must
//! preserve (commutativity of addition, additive inverses, and identical
//! results for both scalar-multiplication orderings) on fixed scenarios
//! and on randomly generated inputs.

use quadsimd::Vector4;

fn assert_vector_eq(result: Vector4, expected: [f32; 4]) {
    for i in 0..4 {
        assert_eq!(
            result.element(i).to_bits(),
            expected[i].to_bits(),
            "component {} differs: got {}, expected {}",
            i,
            result.element(i),
            expected[i]
        );
    }
}

#[test]
fn test_addition() {
    let a = Vector4::from([1.0, 2.0, 3.0, 4.0]);
    let b = Vector4::from([2.0, 4.0, 6.0, 8.0]);

    assert_vector_eq(a + b, [3.0, 6.0, 9.0, 12.0]);
}

#[test]
fn test_subtraction() {
    let a = Vector4::from([1.0, 2.0, 3.0, 4.0]);
    let b = Vector4::from([2.0, 4.0, 6.0, 8.0]);

    assert_vector_eq(b - a, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_negation() {
    let a = Vector4::from([1.0, 2.0, 3.0, 4.0]);

    assert_vector_eq(-a, [-1.0, -2.0, -3.0, -4.0]);
}

#[test]
fn test_scalar_multiplication() {
    let a = Vector4::from([1.0, 2.0, 3.0, 4.0]);

    assert_vector_eq(a * 2.0, [2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn test_addition_commutes() {
    let a = Vector4::from([1.5, -2.0, 3.25, 0.0]);
    let b = Vector4::from([-0.5, 4.0, 6.5, 8.0]);

    assert_eq!(a + b, b + a, "vector addition must commute");
}

#[test]
fn test_additive_inverse_is_zero() {
    let a = Vector4::from([1.0, -2.5, 3.0, 4.75]);
    let zero = Vector4::from([0.0, 0.0, 0.0, 0.0]);

    assert_eq!(a + (-a), zero, "a + (-a) must be the zero vector");
}

#[test]
fn test_scalar_multiplication_commutes() {
    let a = Vector4::from([1.0, 2.0, 3.0, 4.0]);

    for s in [-3.5f32, -1.0, 0.0, 0.5, 2.0, 1024.0] {
        let left = a * s;
        let right = s * a;

        println!("s = {s}: a*s = {:?}, s*a = {:?}", left, right);
        assert_eq!(left, right, "a * {s} and {s} * a must be identical");
    }
}

#[test]
fn test_properties_on_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(42);

    for case in 0..1000 {
        let a = Vector4::from([
            rng.random_range(-1000.0f32..1000.0),
            rng.random_range(-1000.0f32..1000.0),
            rng.random_range(-1000.0f32..1000.0),
            rng.random_range(-1000.0f32..1000.0),
        ]);
        let b = Vector4::from([
            rng.random_range(-1000.0f32..1000.0),
            rng.random_range(-1000.0f32..1000.0),
            rng.random_range(-1000.0f32..1000.0),
            rng.random_range(-1000.0f32..1000.0),
        ]);
        let s: f32 = rng.random_range(-100.0f32..100.0);

        assert_eq!(a + b, b + a, "addition must commute (case {case})");
        assert_eq!(a * s, s * a, "scaling must commute (case {case})");

        // the register path must match a plain per-component loop bit for bit
        let sum = a + b;
        for i in 0..4 {
            assert_eq!(
                sum.element(i).to_bits(),
                (a.element(i) + b.element(i)).to_bits(),
                "register sum differs from scalar sum at component {i} (case {case})"
            );
        }
    }
}

#[test]
fn test_results_are_independent_of_operands() {
    let mut a = Vector4::from([1.0, 2.0, 3.0, 4.0]);
    let b = Vector4::from([2.0, 4.0, 6.0, 8.0]);

    let sum = a + b;
    *a.element_mut(0) = 99.0;

    assert_vector_eq(sum, [3.0, 6.0, 9.0, 12.0]);
}
