use std::marker::PhantomData;

use thiserror::Error;

use crate::codec::{BorshCodec, EncodeKeyLike, StateValueCodec};
use crate::scratchpad::{StateReader, StateWriter};
use crate::storage::{Prefix, StorageKey};

/// Error type for getters of state containers.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Value not found for prefix: {0}")]
    MissingValue(Prefix),
    #[error("Value not found for prefix: {0} and storage key: {1}")]
    MissingMapValue(Prefix, StorageKey),
}

/// Container for a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct StateValue<V, Codec = BorshCodec> {
    _phantom: PhantomData<V>,
    codec: Codec,
    prefix: Prefix,
}

impl<V> StateValue<V> {
    /// Creates a new [`StateValue`] with the given prefix and the default
    /// codec (i.e. [`BorshCodec`]).
    pub fn new(prefix: Prefix) -> Self {
        Self::with_codec(prefix, BorshCodec)
    }
}

impl<V, Codec> StateValue<V, Codec> {
    /// Creates a new [`StateValue`] with the given prefix and codec.
    pub fn with_codec(prefix: Prefix, codec: Codec) -> Self {
        Self {
            _phantom: PhantomData,
            codec,
            prefix,
        }
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }
}

impl<V, Codec> StateValue<V, Codec>
where
    Codec: StateValueCodec<V>,
{
    /// Sets the value.
    pub fn set<W: StateWriter>(&self, value: &V, working_set: &mut W) {
        let key = StorageKey::singleton(&self.prefix);
        working_set.set(&key, self.codec.encode_value(value));
    }

    /// Gets the value from state or returns None if the value is absent.
    pub fn get<R: StateReader>(&self, state: &R) -> Option<V> {
        let key = StorageKey::singleton(&self.prefix);
        state
            .get(&key)
            .map(|bytes| self.codec.decode_value_unwrap(&bytes))
    }

    /// Gets the value from state or Error if the value is absent.
    pub fn get_or_err<R: StateReader>(&self, state: &R) -> Result<V, StateError> {
        self.get(state)
            .ok_or_else(|| StateError::MissingValue(self.prefix.clone()))
    }
}

/// A container that maps keys to values.
///
/// # Type parameters
/// [`StateMap`] is generic over:
/// - a key type `K`;
/// - a value type `V`;
/// - a codec `Codec` encoding both.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMap<K, V, Codec = BorshCodec> {
    _phantom: (PhantomData<K>, PhantomData<V>),
    codec: Codec,
    prefix: Prefix,
}

impl<K, V> StateMap<K, V> {
    /// Creates a new [`StateMap`] with the given prefix and the default
    /// codec (i.e. [`BorshCodec`]).
    pub fn new(prefix: Prefix) -> Self {
        Self::with_codec(prefix, BorshCodec)
    }
}

impl<K, V, Codec> StateMap<K, V, Codec> {
    /// Creates a new [`StateMap`] with the given prefix and codec.
    pub fn with_codec(prefix: Prefix, codec: Codec) -> Self {
        Self {
            _phantom: (PhantomData, PhantomData),
            codec,
            prefix,
        }
    }

    /// Returns the prefix used when this [`StateMap`] was created.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    fn storage_key<Q>(&self, key: &Q) -> StorageKey
    where
        Codec: EncodeKeyLike<Q, K>,
        Q: ?Sized,
    {
        StorageKey::new(&self.prefix, &self.codec.encode_key_like(key))
    }
}

impl<K, V, Codec> StateMap<K, V, Codec>
where
    Codec: StateValueCodec<V>,
{
    /// Inserts a key-value pair into the map.
    ///
    /// The key may be any borrowed form of the map's key type the codec knows
    /// how to encode, see [`EncodeKeyLike`].
    pub fn set<Q, W>(&self, key: &Q, value: &V, working_set: &mut W)
    where
        Codec: EncodeKeyLike<Q, K>,
        Q: ?Sized,
        W: StateWriter,
    {
        working_set.set(&self.storage_key(key), self.codec.encode_value(value));
    }

    /// Returns the value corresponding to the key, or [`None`] if the map
    /// doesn't contain the key.
    pub fn get<Q, R>(&self, key: &Q, state: &R) -> Option<V>
    where
        Codec: EncodeKeyLike<Q, K>,
        Q: ?Sized,
        R: StateReader,
    {
        state
            .get(&self.storage_key(key))
            .map(|bytes| self.codec.decode_value_unwrap(&bytes))
    }

    /// Returns the value corresponding to the key or [`StateError`] if key is absent.
    pub fn get_or_err<Q, R>(&self, key: &Q, state: &R) -> Result<V, StateError>
    where
        Codec: EncodeKeyLike<Q, K>,
        Q: ?Sized,
        R: StateReader,
    {
        self.get(key, state)
            .ok_or_else(|| StateError::MissingMapValue(self.prefix.clone(), self.storage_key(key)))
    }
}
