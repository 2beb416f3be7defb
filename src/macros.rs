//! Crate-local macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements slice construction, array export, tolerant equality, cached
/// hashing and `approx` comparison for a value type with `$n` scalar
/// components.
///
/// The type must have a `hash_cache: LazyHashCache<Self>` field initialized
/// with `Self::compute_hash`, a `to_array(&self) -> [f64; $n]` method and a
/// `From<[f64; $n]>` implementation.
macro_rules! impl_scalar_components {
    ($t:ident, $n:literal) => {
        impl $t {
            /// Creates a new value from a slice holding exactly the number of
            /// components returned by `to_array`, in the same order.
            ///
            /// # Panics
            /// If the slice length does not match the number of components.
            pub fn from_slice(components: &[f64]) -> Self {
                match Self::try_from(components) {
                    Ok(value) => value,
                    Err(error) => panic!("{error}"),
                }
            }

            /// Returns the hash of the components, computing it on first
            /// access.
            pub fn hash_value(&self) -> $crate::hash::Hash64 {
                self.hash_cache.get_or_compute(self)
            }

            fn compute_hash(value: &Self) -> $crate::hash::Hash64 {
                $crate::hash::compute_hash_of_scalars(&value.to_array())
            }
        }

        impl TryFrom<&[f64]> for $t {
            type Error = ::anyhow::Error;

            fn try_from(components: &[f64]) -> ::anyhow::Result<Self> {
                let Ok(array) = <[f64; $n]>::try_from(components) else {
                    ::anyhow::bail!(
                        "{} requires exactly {} components, got {}",
                        stringify!($t),
                        $n,
                        components.len()
                    );
                };
                Ok(Self::from(array))
            }
        }

        impl From<$t> for [f64; $n] {
            #[inline]
            fn from(value: $t) -> Self {
                value.to_array()
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::scalar::all_approx_eq(&self.to_array(), &other.to_array())
            }
        }

        // Equality is a tolerance relation, but hashing only depends on the
        // canonical representation, so equal values still hash equally at
        // canonical precision.
        impl Eq for $t {}

        impl ::std::hash::Hash for $t {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash_value().into());
            }
        }

        impl_abs_diff_eq!($t, |a, b, epsilon| {
            $crate::scalar::all_abs_diff_eq(&a.to_array(), &b.to_array(), epsilon)
        });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            $crate::scalar::all_relative_eq(&a.to_array(), &b.to_array(), epsilon, max_relative)
        });
    };
}
