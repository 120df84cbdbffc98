/// Implements component-wise arithmetic operators for a vector type.
///
/// Generates `+`, `-` (binary and unary), component-wise `*` and `/`,
/// scalar `*` and `/` (both `v * s` and `s * v`), and the `+=`, `-=`,
/// `*=` and `/=` assign forms.
macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::Mul for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl std::ops::Div for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: f32) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl std::ops::Mul<$ty> for f32 {
            type Output = $ty;
            #[inline]
            fn mul(self, vector: $ty) -> $ty {
                vector * self
            }
        }

        impl std::ops::Div<f32> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, scalar: f32) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl std::ops::MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, scalar: f32) {
                $(self.$field *= scalar;)+
            }
        }

        impl std::ops::DivAssign<f32> for $ty {
            #[inline]
            fn div_assign(&mut self, scalar: f32) {
                $(self.$field /= scalar;)+
            }
        }
    };
}
