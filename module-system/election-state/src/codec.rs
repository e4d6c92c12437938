//! Serialization and deserialization -related logic.

use borsh::{BorshDeserialize, BorshSerialize};

/// A trait for types that can serialize and deserialize values for storage
/// access.
pub trait StateValueCodec<V> {
    /// Error type that can arise during deserialization.
    type Error: std::fmt::Debug;

    /// Serializes a value into a bytes vector.
    ///
    /// This method **must** not panic as all instances of the value type are
    /// supposed to be serializable.
    fn encode_value(&self, value: &V) -> Vec<u8>;

    /// Tries to deserialize a value from a bytes slice, and returns a
    /// [`Result`] with either the deserialized value or an error.
    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::Error>;

    /// Deserializes a value from a bytes slice.
    ///
    /// # Panics
    /// Panics if the call to [`StateValueCodec::try_decode_value`] fails. Values
    /// only ever reach storage through [`StateValueCodec::encode_value`], so a
    /// failure here means the storage was corrupted.
    fn decode_value_unwrap(&self, bytes: &[u8]) -> V {
        match self.try_decode_value(bytes) {
            Ok(value) => value,
            Err(err) => panic!(
                "Failed to decode value 0x{}, error: {:?}",
                hex::encode(bytes),
                err
            ),
        }
    }
}

/// A trait for types that can serialize keys for storage access.
///
/// Keys are never read back, so there is no decoding counterpart.
pub trait StateKeyCodec<K> {
    /// Serializes a key into a bytes vector.
    ///
    /// Equal keys **MUST** be serialized to the same byte sequence.
    fn encode_key(&self, key: &K) -> Vec<u8>;
}

/// A trait for codecs which know how to serialize a type `Ref` as if it were
/// some other type `Target`.
///
/// This lets a `StateMap<String, _>` be queried with a `&str` without
/// allocating an owned key.
pub trait EncodeKeyLike<Ref: ?Sized, Target> {
    /// Encodes a reference to `Ref` as if it were a reference to `Target`.
    fn encode_key_like(&self, borrowed: &Ref) -> Vec<u8>;
}

// All items can be encoded like themselves by all codecs
impl<C, T> EncodeKeyLike<T, T> for C
where
    C: StateKeyCodec<T>,
{
    fn encode_key_like(&self, borrowed: &T) -> Vec<u8> {
        self.encode_key(borrowed)
    }
}

/// A [`StateValueCodec`] and [`StateKeyCodec`] that uses [`borsh`] for
/// everything.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, BorshDeserialize, BorshSerialize)]
pub struct BorshCodec;

impl<V> StateValueCodec<V> for BorshCodec
where
    V: BorshSerialize + BorshDeserialize,
{
    type Error = std::io::Error;

    fn encode_value(&self, value: &V) -> Vec<u8> {
        value.try_to_vec().expect("Failed to serialize value")
    }

    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::Error> {
        V::try_from_slice(bytes)
    }
}

impl<K> StateKeyCodec<K> for BorshCodec
where
    K: BorshSerialize,
{
    fn encode_key(&self, key: &K) -> Vec<u8> {
        key.try_to_vec().expect("Failed to serialize key")
    }
}

// In borsh, a `str` is encoded the same way as a `String`.
impl EncodeKeyLike<str, String> for BorshCodec {
    fn encode_key_like(&self, borrowed: &str) -> Vec<u8> {
        borrowed.try_to_vec().expect("Failed to serialize key")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::any;

    use super::*;

    proptest::proptest! {
        #[test]
        fn test_borsh_str_encode_alike(name in any::<String>()) {
            let codec = BorshCodec;
            assert_eq!(
                <BorshCodec as EncodeKeyLike<str, String>>::encode_key_like(&codec, name.as_str()),
                <BorshCodec as StateKeyCodec<String>>::encode_key(&codec, &name)
            );
        }
    }

    #[test]
    fn test_decode_rejects_truncated_value() {
        let codec = BorshCodec;
        let bytes = StateValueCodec::<u64>::encode_value(&codec, &33);
        let decoded = StateValueCodec::<u64>::try_decode_value(&codec, &bytes[..4]);
        assert!(decoded.is_err());
    }
}
