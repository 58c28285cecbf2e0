//! Operation dispatch registry.
//!
//! Arithmetic on the container wrappers is resolved at compile time by
//! looking up the pair of operand storage-engine types (plus the operation
//! kind) in this registry and obtaining the result engine type and the
//! function that computes it. In Rust the registry is a family of traits
//! (one per operation kind, keyed by the implementing left engine type and
//! the `Rhs` type parameter, with the result type as an associated type),
//! and a registered combination is a trait impl. Resolution happens during
//! monomorphization; there is no runtime table.
//!
//! The impls in this module are the register-path entries for the crate's
//! fixed engines: operands are loaded into their register view, combined
//! with one register-wide instruction, and the result copied out into a
//! freshly constructed engine. Outputs never alias their inputs, and
//! lane-wise operations are bit-identical to an element-by-element scalar
//! loop (lanes combine independently, in index order, with no
//! reassociation).
//!
//! A combination with no entry here is not left unimplemented: the generic
//! element-wise kernels in [`fallback`] accept any engine pair satisfying
//! the contract traits, and a foreign engine registers a combination by
//! implementing the operation trait with a one-line delegation to them.

use crate::engine::matrix4::Matrix4Engine;
use crate::engine::vector4::Vector4Engine;
use crate::engine::{MatrixEngine, VectorEngine};
use crate::simd::traits::SimdLoad;
use crate::simd::{F32x16, F32x4};

pub mod fallback;

/// Element-wise addition of two engines of matching shape.
pub trait EngineAdd<Rhs = Self> {
    /// Engine type of the sum.
    type Output;

    fn engine_add(&self, rhs: &Rhs) -> Self::Output;
}

/// Element-wise subtraction of two engines of matching shape.
pub trait EngineSub<Rhs = Self> {
    /// Engine type of the difference.
    type Output;

    fn engine_sub(&self, rhs: &Rhs) -> Self::Output;
}

/// Element-wise negation of an engine.
pub trait EngineNeg {
    /// Engine type of the negation.
    type Output;

    fn engine_neg(&self) -> Self::Output;
}

/// Multiplication of every element by one scalar.
///
/// Both operand orderings (`engine * s` and `s * engine`) resolve to this
/// single entry, so the two are identical by construction.
pub trait EngineScale {
    /// Engine type of the scaled result.
    type Output;

    fn engine_scale(&self, scalar: f32) -> Self::Output;
}

/// Contraction product between two engines.
///
/// Covers vector×matrix, matrix×vector and matrix×matrix; each destination
/// component is a dot product of a row/column pair.
pub trait EngineMul<Rhs> {
    /// Engine type of the product.
    type Output;

    fn engine_mul(&self, rhs: &Rhs) -> Self::Output;
}

// ---------------------------------------------------------------------------
// Registered entries: 4-element vector engine, register path
// ---------------------------------------------------------------------------

impl EngineAdd for Vector4Engine {
    type Output = Vector4Engine;

    #[inline(always)]
    fn engine_add(&self, rhs: &Self) -> Self::Output {
        Vector4Engine::from_register(self.to_register() + rhs.to_register())
    }
}

impl EngineSub for Vector4Engine {
    type Output = Vector4Engine;

    #[inline(always)]
    fn engine_sub(&self, rhs: &Self) -> Self::Output {
        Vector4Engine::from_register(self.to_register() - rhs.to_register())
    }
}

impl EngineNeg for Vector4Engine {
    type Output = Vector4Engine;

    #[inline(always)]
    fn engine_neg(&self) -> Self::Output {
        Vector4Engine::from_register(-self.to_register())
    }
}

impl EngineScale for Vector4Engine {
    type Output = Vector4Engine;

    /// Broadcasts the scalar across all 4 lanes and multiplies.
    #[inline(always)]
    fn engine_scale(&self, scalar: f32) -> Self::Output {
        let broadcast = unsafe { F32x4::splat(scalar) };

        Vector4Engine::from_register(self.to_register() * broadcast)
    }
}

// ---------------------------------------------------------------------------
// Registered entries: 4x4 matrix engine, register path
// ---------------------------------------------------------------------------

impl EngineAdd for Matrix4Engine {
    type Output = Matrix4Engine;

    #[inline(always)]
    fn engine_add(&self, rhs: &Self) -> Self::Output {
        Matrix4Engine::from_register(self.to_register() + rhs.to_register())
    }
}

impl EngineSub for Matrix4Engine {
    type Output = Matrix4Engine;

    #[inline(always)]
    fn engine_sub(&self, rhs: &Self) -> Self::Output {
        Matrix4Engine::from_register(self.to_register() - rhs.to_register())
    }
}

impl EngineNeg for Matrix4Engine {
    type Output = Matrix4Engine;

    #[inline(always)]
    fn engine_neg(&self) -> Self::Output {
        Matrix4Engine::from_register(-self.to_register())
    }
}

impl EngineScale for Matrix4Engine {
    type Output = Matrix4Engine;

    /// Broadcasts the scalar across the full 16-lane tile and multiplies.
    #[inline(always)]
    fn engine_scale(&self, scalar: f32) -> Self::Output {
        let broadcast = unsafe { F32x16::splat(scalar) };

        Matrix4Engine::from_register(self.to_register() * broadcast)
    }
}

// ---------------------------------------------------------------------------
// Registered entries: contraction products
//
// Each destination component is an explicit 4-term multiply-accumulate over
// the scalar view. The element groups of a dot product cross register rows,
// so no register-wide shortcut is taken here.
// ---------------------------------------------------------------------------

impl EngineMul<Matrix4Engine> for Vector4Engine {
    type Output = Vector4Engine;

    /// Row vector times matrix: `out(j) = Σ_k self(k) · rhs(k, j)`.
    fn engine_mul(&self, rhs: &Matrix4Engine) -> Self::Output {
        let mut out = Vector4Engine::default();

        for j in 0..rhs.columns() {
            *out.element_mut(j) = self.element(0) * rhs.element(0, j)
                + self.element(1) * rhs.element(1, j)
                + self.element(2) * rhs.element(2, j)
                + self.element(3) * rhs.element(3, j);
        }

        out
    }
}

impl EngineMul<Vector4Engine> for Matrix4Engine {
    type Output = Vector4Engine;

    /// Matrix times column vector: `out(i) = Σ_j self(i, j) · rhs(j)`.
    fn engine_mul(&self, rhs: &Vector4Engine) -> Self::Output {
        let mut out = Vector4Engine::default();

        for i in 0..self.rows() {
            *out.element_mut(i) = self.element(i, 0) * rhs.element(0)
                + self.element(i, 1) * rhs.element(1)
                + self.element(i, 2) * rhs.element(2)
                + self.element(i, 3) * rhs.element(3);
        }

        out
    }
}

impl EngineMul<Matrix4Engine> for Matrix4Engine {
    type Output = Matrix4Engine;

    /// 4×4 product: `out(i, j) = Σ_k self(i, k) · rhs(k, j)`, computed as
    /// 16 independent 4-term dot products.
    fn engine_mul(&self, rhs: &Matrix4Engine) -> Self::Output {
        let mut out = Matrix4Engine::default();

        for i in 0..self.rows() {
            for j in 0..rhs.columns() {
                *out.element_mut(i, j) = self.element(i, 0) * rhs.element(0, j)
                    + self.element(i, 1) * rhs.element(1, j)
                    + self.element(i, 2) * rhs.element(2, j)
                    + self.element(i, 3) * rhs.element(3, j);
            }
        }

        out
    }
}
