//! Generic element-wise kernels: the registry's default implementations.
//!
//! These loops accept any operand engines satisfying the contract traits
//! and are what an operation resolves to when no register-path entry is
//! registered for a type pair: a foreign engine implements the operation
//! trait by delegating here. They are also the reference semantics for the
//! register path; for the element-wise operations the two must agree bit
//! for bit, since register lanes combine independently and in index order.
//!
//! Operand shapes are a caller precondition (the container wrappers only
//! combine equal-shape engines); they are checked with `debug_assert!`
//! only. The output engine type is chosen by the caller and constructed
//! zero-filled via `Default`.

use crate::engine::{MatrixEngine, VectorEngine};

/// Element-wise vector sum.
pub fn add_vectors<L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    L: VectorEngine,
    R: VectorEngine,
    Out: VectorEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(lhs.size(), rhs.size(), "operand sizes must agree");
    debug_assert_eq!(lhs.size(), out.size(), "output size must match operands");

    for i in 0..out.size() {
        *out.element_mut(i) = lhs.element(i) + rhs.element(i);
    }

    out
}

/// Element-wise vector difference.
pub fn sub_vectors<L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    L: VectorEngine,
    R: VectorEngine,
    Out: VectorEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(lhs.size(), rhs.size(), "operand sizes must agree");
    debug_assert_eq!(lhs.size(), out.size(), "output size must match operands");

    for i in 0..out.size() {
        *out.element_mut(i) = lhs.element(i) - rhs.element(i);
    }

    out
}

/// Element-wise vector negation.
pub fn neg_vector<E, Out>(operand: &E) -> Out
where
    E: VectorEngine,
    Out: VectorEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(operand.size(), out.size(), "output size must match operand");

    for i in 0..out.size() {
        *out.element_mut(i) = -operand.element(i);
    }

    out
}

/// Vector times scalar, one multiplication per component.
pub fn scale_vector<E, Out>(operand: &E, scalar: f32) -> Out
where
    E: VectorEngine,
    Out: VectorEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(operand.size(), out.size(), "output size must match operand");

    for i in 0..out.size() {
        *out.element_mut(i) = operand.element(i) * scalar;
    }

    out
}

/// Element-wise matrix sum.
pub fn add_matrices<L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    L: MatrixEngine,
    R: MatrixEngine,
    Out: MatrixEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(lhs.size(), rhs.size(), "operand shapes must agree");
    debug_assert_eq!(lhs.size(), out.size(), "output shape must match operands");

    for i in 0..out.rows() {
        for j in 0..out.columns() {
            *out.element_mut(i, j) = lhs.element(i, j) + rhs.element(i, j);
        }
    }

    out
}

/// Element-wise matrix difference.
pub fn sub_matrices<L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    L: MatrixEngine,
    R: MatrixEngine,
    Out: MatrixEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(lhs.size(), rhs.size(), "operand shapes must agree");
    debug_assert_eq!(lhs.size(), out.size(), "output shape must match operands");

    for i in 0..out.rows() {
        for j in 0..out.columns() {
            *out.element_mut(i, j) = lhs.element(i, j) - rhs.element(i, j);
        }
    }

    out
}

/// Element-wise matrix negation.
pub fn neg_matrix<E, Out>(operand: &E) -> Out
where
    E: MatrixEngine,
    Out: MatrixEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(operand.size(), out.size(), "output shape must match operand");

    for i in 0..out.rows() {
        for j in 0..out.columns() {
            *out.element_mut(i, j) = -operand.element(i, j);
        }
    }

    out
}

/// Matrix times scalar, one multiplication per element.
pub fn scale_matrix<E, Out>(operand: &E, scalar: f32) -> Out
where
    E: MatrixEngine,
    Out: MatrixEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(operand.size(), out.size(), "output shape must match operand");

    for i in 0..out.rows() {
        for j in 0..out.columns() {
            *out.element_mut(i, j) = operand.element(i, j) * scalar;
        }
    }

    out
}

/// Row vector times matrix: `out(j) = Σ_k lhs(k) · rhs(k, j)`.
pub fn vector_times_matrix<L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    L: VectorEngine,
    R: MatrixEngine,
    Out: VectorEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(lhs.size(), rhs.rows(), "inner dimensions must agree");
    debug_assert_eq!(out.size(), rhs.columns(), "output size must match columns");

    for j in 0..rhs.columns() {
        let mut acc = 0.0;
        for k in 0..lhs.size() {
            acc += lhs.element(k) * rhs.element(k, j);
        }
        *out.element_mut(j) = acc;
    }

    out
}

/// Matrix times column vector: `out(i) = Σ_j lhs(i, j) · rhs(j)`.
pub fn matrix_times_vector<L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    L: MatrixEngine,
    R: VectorEngine,
    Out: VectorEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(lhs.columns(), rhs.size(), "inner dimensions must agree");
    debug_assert_eq!(out.size(), lhs.rows(), "output size must match rows");

    for i in 0..lhs.rows() {
        let mut acc = 0.0;
        for j in 0..lhs.columns() {
            acc += lhs.element(i, j) * rhs.element(j);
        }
        *out.element_mut(i) = acc;
    }

    out
}

/// Matrix product: `out(i, j) = Σ_k lhs(i, k) · rhs(k, j)`.
pub fn multiply_matrices<L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    L: MatrixEngine,
    R: MatrixEngine,
    Out: MatrixEngine + Default,
{
    let mut out = Out::default();
    debug_assert_eq!(lhs.columns(), rhs.rows(), "inner dimensions must agree");
    debug_assert_eq!(
        out.size(),
        (lhs.rows(), rhs.columns()),
        "output shape must match outer dimensions"
    );

    for i in 0..lhs.rows() {
        for j in 0..rhs.columns() {
            let mut acc = 0.0;
            for k in 0..lhs.columns() {
                acc += lhs.element(i, k) * rhs.element(k, j);
            }
            *out.element_mut(i, j) = acc;
        }
    }

    out
}
