/*!
# Math Library

Small linear-algebra library for 2D and 3D game transforms.

## Types

- **Vector2 / Vector3 / Vector4**: `f32` vectors with the usual arithmetic
- **Matrix3**: 2D homogeneous transforms (translation, rotation, scale)
- **Matrix4**: 3D homogeneous transforms, view and projection matrices

All types are `#[repr(C)]` and `Pod`, so they can be handed to a render
surface byte-for-byte. Matrices are stored row-major with fields named
`mRC` (row R, column C); the translation of a 2D transform lives in
`m02`/`m12`.

Conversions to and from the matching `glam` types are provided for
interop with renderers built on glam.
*/

#[macro_use]
mod ops;

pub mod angle;
mod matrix3;
mod matrix4;
mod vector2;
mod vector3;
mod vector4;

pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

// Re-export glam for interop
pub use glam;
