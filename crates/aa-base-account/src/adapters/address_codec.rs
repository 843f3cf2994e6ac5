//! `0x`-prefixed lowercase hex addresses.

use crate::ports::outbound::AddressCodec;
use shared_types::{AccountAddress, CollaboratorError, ADDRESS_LEN};

#[derive(Debug, Clone, Copy, Default)]
pub struct HexAddressCodec;

impl AddressCodec for HexAddressCodec {
    fn bytes_to_string(&self, address: &AccountAddress) -> Result<String, CollaboratorError> {
        Ok(format!("0x{}", hex::encode(address.as_bytes())))
    }

    fn string_to_bytes(&self, text: &str) -> Result<AccountAddress, CollaboratorError> {
        let rejected = |reason: String| CollaboratorError::Rejected {
            service: "address codec",
            reason,
        };

        let digits = text
            .strip_prefix("0x")
            .ok_or_else(|| rejected(format!("missing 0x prefix: {text}")))?;
        let bytes = hex::decode(digits).map_err(|e| rejected(e.to_string()))?;
        let array: [u8; ADDRESS_LEN] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| rejected(format!("expected {ADDRESS_LEN} bytes, got {}", b.len())))?;
        Ok(AccountAddress::new(array))
    }
}
