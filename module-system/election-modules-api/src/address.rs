use core::fmt;
use core::str::FromStr;

use bech32::{FromBase32, ToBase32};
use borsh::{BorshDeserialize, BorshSerialize};
use derive_more::{Display, Into};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Bech32ParseError;

const HRP: &str = "elec";
const ADDRESS_LEN: usize = 32;

/// Everything the module system needs from an address type.
pub trait AddressTrait:
    fmt::Debug
    + fmt::Display
    + PartialEq
    + Eq
    + Clone
    + Send
    + Sync
    + BorshSerialize
    + BorshDeserialize
    + Serialize
    + DeserializeOwned
    + From<[u8; 32]>
    + AsRef<[u8]>
    + FromStr
    + 'static
{
}

/// A bech32m encoded address with the `elec` human readable part.
#[derive(
    Serialize,
    Deserialize,
    BorshDeserialize,
    BorshSerialize,
    Debug,
    PartialEq,
    Clone,
    Eq,
    Into,
    Display,
)]
#[serde(try_from = "String", into = "String")]
#[display(fmt = "{}", "value")]
pub struct AddressBech32 {
    value: String,
}

impl FromStr for AddressBech32 {
    type Err = Bech32ParseError;

    fn from_str(s: &str) -> Result<Self, Bech32ParseError> {
        decode_address_bytes(s)?;
        Ok(AddressBech32 {
            value: s.to_owned(),
        })
    }
}

impl TryFrom<String> for AddressBech32 {
    type Error = Bech32ParseError;

    fn try_from(addr: String) -> Result<Self, Bech32ParseError> {
        decode_address_bytes(&addr)?;
        Ok(AddressBech32 { value: addr })
    }
}

impl From<&Address> for AddressBech32 {
    fn from(addr: &Address) -> Self {
        AddressBech32 {
            value: bech32::encode(HRP, addr.addr.to_base32(), bech32::Variant::Bech32m)
                .expect("the human readable part is a valid constant"),
        }
    }
}

fn decode_address_bytes(s: &str) -> Result<[u8; ADDRESS_LEN], Bech32ParseError> {
    let (hrp, data, _) = bech32::decode(s)?;
    if hrp != HRP {
        return Err(Bech32ParseError::WrongHRP(hrp));
    }

    let bytes = Vec::<u8>::from_base32(&data)?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| Bech32ParseError::InvalidLength(bytes.len()))
}

/// A 32 byte account address, displayed as bech32m.
#[derive(PartialEq, Clone, Copy, Eq, Hash, BorshDeserialize, BorshSerialize)]
pub struct Address {
    addr: [u8; ADDRESS_LEN],
}

impl Address {
    /// Creates a new address containing the given bytes
    pub const fn new(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.addr
    }
}

impl From<[u8; 32]> for Address {
    fn from(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl<'a> TryFrom<&'a [u8]> for Address {
    type Error = anyhow::Error;

    fn try_from(addr: &'a [u8]) -> Result<Self, Self::Error> {
        let addr: [u8; ADDRESS_LEN] = addr
            .try_into()
            .map_err(|_| anyhow::anyhow!("Address must be {ADDRESS_LEN} bytes long"))?;
        Ok(Self { addr })
    }
}

impl FromStr for Address {
    type Err = Bech32ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_address_bytes(s).map(Address::new)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", AddressBech32::from(self))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", AddressBech32::from(self))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            Serialize::serialize(&AddressBech32::from(self), serializer)
        } else {
            Serialize::serialize(&self.addr, serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let addr: String = Deserialize::deserialize(deserializer)?;
            Address::from_str(&addr).map_err(serde::de::Error::custom)
        } else {
            let addr = <[u8; ADDRESS_LEN] as Deserialize>::deserialize(deserializer)?;
            Ok(Address { addr })
        }
    }
}

impl AddressTrait for Address {}

#[cfg(test)]
mod tests {
    use bech32::Variant;

    use super::*;

    #[test]
    fn test_address_serialization() {
        let address = Address::from([11; 32]);
        let data: String = serde_json::to_string(&address).unwrap();
        let deserialized_address = serde_json::from_str::<Address>(&data).unwrap();

        assert_eq!(address, deserialized_address);
        assert!(deserialized_address.to_string().starts_with("elec1"));
        assert_eq!(data, format!("\"{address}\""));
    }

    #[test]
    fn test_address_from_str_round_trip() {
        let address = Address::from([3; 32]);
        let parsed: Address = address.to_string().parse().unwrap();
        assert_eq!(parsed, address);

        let bech32: AddressBech32 = address.to_string().parse().unwrap();
        assert_eq!(bech32.to_string(), address.to_string());
    }

    #[test]
    fn test_address_rejects_foreign_hrp_and_short_payloads() {
        let payload = [1u8; 32].to_base32();
        let foreign = bech32::encode("sov", &payload, Variant::Bech32m).unwrap();
        assert!(matches!(
            Address::from_str(&foreign),
            Err(Bech32ParseError::WrongHRP(hrp)) if hrp == "sov"
        ));

        let payload = [1u8; 20].to_base32();
        let short = bech32::encode(HRP, &payload, Variant::Bech32m).unwrap();
        assert!(matches!(
            Address::from_str(&short),
            Err(Bech32ParseError::InvalidLength(20))
        ));

        assert!(Address::try_from(&[0u8; 31][..]).is_err());
    }
}
