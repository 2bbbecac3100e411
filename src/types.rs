//! Wallet service data types: configuration, request bodies, and the
//! domain models decoded from response payloads.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Opaque decentralized identifier, e.g. `did:ara:001`.
pub type Identifier = String;

/// Opaque wallet service endpoint string.
pub type DidEndpoint = String;

/// Wallet type tag. The closed set is service-defined; see the
/// `DID_TYPE_*` constants for observed values.
pub type DidType = String;

/// Wallet status tag. See [`DID_STATUS_VALID`].
pub type DidStatus = String;

/// Wallet type of a top-level organization wallet.
pub const DID_TYPE_ORGANIZATION: &str = "Organization";

/// Wallet type of a cash sub-wallet.
pub const DID_TYPE_CASH: &str = "cash";

/// Status of a valid, active wallet.
pub const DID_STATUS_VALID: &str = "Valid";

/// Configuration for a [`WalletClient`](crate::WalletClient).
#[derive(Debug, Clone, Default)]
pub struct WalletConfig {
    /// Base URL of the wallet service (e.g. `http://127.0.0.1:8006`).
    /// Required; construction fails when empty.
    pub address: String,
    /// Injected HTTP client, letting tests intercept traffic. A default
    /// client is created when absent.
    pub http_client: Option<reqwest::Client>,
    /// Request timeout applied when building the default client. Ignored
    /// when `http_client` is injected.
    pub timeout: Option<Duration>,
}

/// Base64-encoded key material returned by wallet registration.
///
/// The client passes both strings through without validating the
/// encoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPair {
    /// Base64-encoded private key.
    #[serde(default)]
    pub private_key: String,
    /// Base64-encoded public key.
    #[serde(default)]
    pub public_key: String,
}

/// Color metadata attached to a colored coin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoinColor {
    /// Color identifier.
    #[serde(default)]
    pub id: String,
    /// Identifier of the ancestor asset this color derives from.
    #[serde(default)]
    pub ancestor: String,
    /// DID of the issuer.
    #[serde(default)]
    pub issuer: Identifier,
    /// Issue time in seconds.
    #[serde(default)]
    pub issue_time: i64,
}

/// A fungible colored-coin position held by a wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColoredCoin {
    /// Held amount.
    #[serde(default)]
    pub amount: u64,
    /// The coin's color metadata.
    #[serde(default)]
    pub coin_color: Option<CoinColor>,
}

/// A non-fungible digital asset held by a wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DigitalAsset {
    /// Asset identifier.
    #[serde(default)]
    pub id: String,
    /// Asset display name.
    #[serde(default)]
    pub name: String,
}

/// A wallet's holdings, keyed by coin and asset identifier. Either map
/// may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletBalance {
    /// Colored-coin positions keyed by coin id.
    #[serde(default)]
    pub colored_coins: HashMap<String, ColoredCoin>,
    /// Digital assets keyed by asset id.
    #[serde(default)]
    pub digital_assets: HashMap<String, DigitalAsset>,
}

/// Descriptive record for a wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletInfo {
    /// Wallet DID.
    #[serde(default)]
    pub id: Identifier,
    /// Wallet type tag.
    #[serde(rename = "Type", default)]
    pub wallet_type: DidType,
    /// Wallet service endpoint.
    #[serde(default)]
    pub endpoint: DidEndpoint,
    /// Wallet status tag.
    #[serde(default)]
    pub status: DidStatus,
    /// Creation time in seconds.
    #[serde(default)]
    pub created: i64,
    /// Last update time in seconds.
    #[serde(default)]
    pub updated: i64,
}

/// Payload returned by registration and transfer operations.
///
/// The service reuses one payload shape across endpoints: registration
/// fills the identity fields and `key_pair`, transfers fill
/// `transaction_ids`. Fields absent on the wire decode to their zero
/// values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletResponse {
    /// DID of the wallet the operation acted on.
    #[serde(default)]
    pub id: Identifier,
    /// Endpoint assigned to the wallet.
    #[serde(default)]
    pub endpoint: DidEndpoint,
    /// Creation time in seconds.
    #[serde(default)]
    pub created: i64,
    /// Key pair generated for a newly registered wallet.
    #[serde(default)]
    pub key_pair: Option<KeyPair>,
    /// Transaction ids produced by a transfer.
    #[serde(default)]
    pub transaction_ids: Vec<String>,
}

/// Request body for registering a main wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterWalletBody {
    /// Enrollment identity performing the registration.
    pub enrollment_id: String,
    /// Wallet type tag.
    #[serde(rename = "Type")]
    pub wallet_type: DidType,
    /// Access name for the wallet.
    pub access: String,
    /// Access secret for the wallet.
    pub secret: String,
}

/// Request body for registering a sub-wallet under an existing wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterSubWalletBody {
    /// Enrollment identity performing the registration.
    pub enrollment_id: String,
    /// DID of the parent wallet.
    pub id: Identifier,
    /// Sub-wallet type tag (e.g. [`DID_TYPE_CASH`]).
    #[serde(rename = "Type")]
    pub wallet_type: DidType,
}

/// One coin position within a colored-coin transfer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoinAmount {
    /// Coin identifier.
    pub coin_id: String,
    /// Amount to transfer.
    pub amount: i64,
}

/// Request body for transferring colored coins between wallets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransferBody {
    /// Enrollment identity performing the transfer.
    pub enrollment_id: String,
    /// Source wallet DID.
    pub from: Identifier,
    /// Destination wallet DID.
    pub to: Identifier,
    /// Asset the coins belong to.
    pub asset_id: String,
    /// Coin positions to transfer, in order.
    pub coins: Vec<CoinAmount>,
}

/// Request body for transferring digital assets between wallets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransferAssetBody {
    /// Enrollment identity performing the transfer.
    pub enrollment_id: String,
    /// Source wallet DID.
    pub from: Identifier,
    /// Destination wallet DID.
    pub to: Identifier,
    /// Asset ids to transfer, in order.
    pub assets: Vec<String>,
}

/// Caller-supplied signature attached to state-changing operations.
///
/// The client never computes or verifies signatures; the raw bytes travel
/// as a standard-base64 string on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignatureBody {
    /// DID of the signer.
    pub creator: Identifier,
    /// Signing nonce.
    pub nonce: String,
    /// Raw signature bytes, base64-encoded on the wire.
    #[serde(with = "base64_bytes")]
    pub signature_value: Vec<u8>,
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
    }
}
