#![deny(missing_docs)]

//! # ara-wallet
//!
//! Typed HTTP client for the ARA wallet service: register wallets and
//! sub-wallets, transfer colored coins and digital assets, and query
//! balances and wallet records over the service's REST API.
//!
//! Every endpoint wraps its response in a uniform envelope
//! (`{ErrCode, ErrMessage, Payload}`) whose `Payload` is the JSON text of
//! the operation-specific body. The client collapses the service's two
//! failure channels — a non-2xx HTTP status with a coded body, and a
//! 200 OK whose body carries a non-zero `ErrCode` — into a single
//! [`WalletError::Coded`] value preserving the application code.
//!
//! # Example
//!
//! ```no_run
//! use ara_wallet::{WalletClient, WalletConfig};
//!
//! let client = WalletClient::new(WalletConfig {
//!     address: "http://127.0.0.1:8006".to_string(),
//!     ..Default::default()
//! }).unwrap();
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod types;


pub use client::WalletClient;
pub use envelope::{Envelope, ERR_PAYLOAD_DECODE};
pub use error::WalletError;
pub use types::{
    CoinAmount, CoinColor, ColoredCoin, DidEndpoint, DidStatus, DidType, DigitalAsset, Identifier,
    KeyPair, RegisterSubWalletBody, RegisterWalletBody, SignatureBody, TransferAssetBody,
    TransferBody, WalletBalance, WalletConfig, WalletInfo, WalletResponse, DID_STATUS_VALID,
    DID_TYPE_CASH, DID_TYPE_ORGANIZATION,
};
