/// Signed integers hash their magnitude, so `-n` and `n` share a hash.
macro_rules! impl_signed_key {
    ( $( $t: ty ),* ) => {
        $(
            impl $crate::hashing::KeyHash for $t {
                #[inline]
                fn key_hash(&self) -> i64 {
                    $crate::hashing::fold_magnitude(self.unsigned_abs() as u128)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_key {
    ( $( $t: ty ),* ) => {
        $(
            impl $crate::hashing::KeyHash for $t {
                #[inline]
                fn key_hash(&self) -> i64 {
                    $crate::hashing::fold_magnitude(*self as u128)
                }
            }
        )*
    };
}

macro_rules! impl_float_key {
    ( $( $t: ty ),* ) => {
        $(
            impl $crate::hashing::KeyHash for $t {
                #[inline]
                fn key_hash(&self) -> i64 {
                    $crate::hashing::fold_bytes(&self.to_ne_bytes())
                }
            }
        )*
    };
}
