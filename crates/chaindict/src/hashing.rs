//! Capacity-independent key hashing.
//!
//! Every key kind feeds its bytes through the same step, `acc = rotl(acc, 5) ^ byte`,
//! starting from zero. Tables reduce the result to a bucket index themselves.

use std::fmt;

/// A key the chained tables know how to hash.
///
/// Implementations must agree with `PartialEq`: keys that compare equal have
/// to produce the same hash.
pub trait KeyHash {
    fn key_hash(&self) -> i64;
}

/// The single accumulation step shared by every key kind.
#[inline]
pub const fn fold_byte(acc: i64, byte: u8) -> i64 {
    acc.rotate_left(5) ^ byte as i64
}

/// Folds `bytes` left to right.
#[inline]
pub fn fold_bytes(bytes: &[u8]) -> i64 {
    bytes.iter().fold(0, |acc, &b| fold_byte(acc, b))
}

/// Folds the low byte of `magnitude` and shifts it right by 8 until nothing is left.
///
/// Leading zero bytes are never consumed, so `0` hashes to `0` and the width of
/// the integer type does not matter.
#[inline]
pub fn fold_magnitude(mut magnitude: u128) -> i64 {
    let mut acc = 0;
    while magnitude != 0 {
        acc = fold_byte(acc, (magnitude & 0xFF) as u8);
        magnitude >>= 8;
    }
    acc
}

impl_signed_key!(i8, i16, i32, i64, i128, isize);
impl_unsigned_key!(u8, u16, u32, u64, u128, usize);
impl_float_key!(f32, f64);

impl KeyHash for str {
    #[inline]
    fn key_hash(&self) -> i64 {
        fold_bytes(self.as_bytes())
    }
}

impl KeyHash for String {
    #[inline]
    fn key_hash(&self) -> i64 {
        self.as_str().key_hash()
    }
}

impl KeyHash for char {
    #[inline]
    fn key_hash(&self) -> i64 {
        let mut buf = [0; 4];
        self.encode_utf8(&mut buf).key_hash()
    }
}

impl<T: KeyHash + ?Sized> KeyHash for &T {
    #[inline]
    fn key_hash(&self) -> i64 {
        (**self).key_hash()
    }
}

impl<T: ?Sized> KeyHash for *const T {
    #[inline]
    fn key_hash(&self) -> i64 {
        fold_bytes(&self.addr().to_ne_bytes())
    }
}

impl<T: ?Sized> KeyHash for *mut T {
    #[inline]
    fn key_hash(&self) -> i64 {
        self.cast_const().key_hash()
    }
}

/// Borrows a value as a key compared and hashed by its address.
///
/// Two `Identity` keys are equal only when they point at the same place, no
/// matter what the pointees compare as.
pub struct Identity<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Clone for Identity<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Identity<'_, T> {}

impl<T: ?Sized> PartialEq for Identity<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<T: ?Sized> Eq for Identity<'_, T> {}

impl<T: ?Sized> KeyHash for Identity<'_, T> {
    #[inline]
    fn key_hash(&self) -> i64 {
        (self.0 as *const T).key_hash()
    }
}

impl<T: ?Sized> fmt::Debug for Identity<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({:p})", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integers_fold_low_byte_first() {
        assert_eq!(0i32.key_hash(), 0);
        assert_eq!(1u8.key_hash(), 1);
        // 0x0102: 0x02 first, then rotl(2, 5) ^ 0x01
        assert_eq!(0x0102u16.key_hash(), 65);
        assert_eq!(0x0102i64.key_hash(), 65);
    }

    #[test]
    fn negative_integers_hash_their_magnitude() {
        assert_eq!((-258i32).key_hash(), 258i32.key_hash());
        assert_eq!((-1i8).key_hash(), 1);
    }

    #[test]
    fn signed_minimum_is_defined() {
        assert_eq!(i64::MIN.key_hash(), 0x80);
        assert_eq!(i64::MIN.key_hash(), (1u64 << 63).key_hash());
        assert_eq!(i8::MIN.key_hash(), 0x80);
    }

    #[test]
    fn text_folds_left_to_right() {
        assert_eq!("".key_hash(), 0);
        assert_eq!("a".key_hash(), 97);
        assert_eq!("ab".key_hash(), (97i64 << 5) ^ 98);
        assert_ne!("ab".key_hash(), "ba".key_hash());
        assert_eq!(String::from("apple").key_hash(), "apple".key_hash());
        assert_eq!('a'.key_hash(), "a".key_hash());
    }

    #[test]
    fn floats_hash_their_representation() {
        assert_eq!(1.5f64.key_hash(), fold_bytes(&1.5f64.to_ne_bytes()));
        assert_ne!(1.0f64.key_hash(), 1.000_000_000_1f64.key_hash());
        assert_ne!(0.0f64.key_hash(), (-0.0f64).key_hash());
        assert_eq!(0.0f32.key_hash(), 0);
    }

    #[test]
    fn rotation_wraps_around() {
        let acc = fold_byte(i64::MIN, 0);
        assert_eq!(acc, 1 << 4);
    }

    #[test]
    fn identity_compares_addresses() {
        let a = String::from("same");
        let b = String::from("same");

        assert_eq!(Identity(&a), Identity(&a));
        assert_ne!(Identity(&a), Identity(&b));
        assert_eq!(Identity(&a).key_hash(), (&a as *const String).key_hash());
        assert_eq!(
            (&a as *const String).key_hash(),
            (&a as *const String as *mut String).key_hash()
        );
    }
}
