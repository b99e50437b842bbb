//! Small-dimension linear algebra for real-time graphics.
//!
//! This library provides the value types a renderer passes around every frame: fixed-size
//! [`Vector`]s, column-major [`Matrix`] types, rotation [`Quat`]ernions, the transform matrices
//! built from them (see [`space`]), and [`IndexList`], a vertex index buffer that stores its
//! contents in the narrowest width the GPU accepts.
//!
//! # Design
//!
//! - Dimensions are const generics. There are no dynamically-sized vectors or matrices.
//! - Matrices and vectors use a single, column-major, unpadded layout. Every type that wraps
//!   plain numbers implements [`bytemuck::Pod`], so it can be uploaded to the GPU as-is.
//! - Arithmetic between different element types is allowed. The result uses the element type
//!   that [`promote`] selects for the pair, so `Vec3<i32> + Vec3<f32>` is a `Vec3<f32>`.
//! - Floating-point comparisons go through the [`approx`] module rather than `==`.

pub mod approx;
mod index_list;
mod matrix;
pub mod promote;
mod quat;
pub mod space;
mod traits;
mod vector;

pub use index_list::*;
pub use matrix::*;
pub use promote::{Promote, Promoted};
pub use quat::*;
pub use traits::*;
pub use vector::*;
