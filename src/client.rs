//! Wallet service HTTP client: the six wallet operations and the request
//! dispatch they share.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::WalletError;
use crate::types::{
    RegisterSubWalletBody, RegisterWalletBody, SignatureBody, TransferAssetBody, TransferBody,
    WalletBalance, WalletConfig, WalletInfo, WalletResponse,
};

const REGISTER_PATH: &str = "/v1/wallet/register";
const REGISTER_SUBWALLET_PATH: &str = "/v1/wallet/register/subwallet";
const TRANSFER_CCOIN_PATH: &str = "/v1/wallet/coins/transfer";
const TRANSFER_ASSET_PATH: &str = "/v1/wallet/assets/transfer";
const BALANCE_PATH: &str = "/v1/wallet/balance";
const INFO_PATH: &str = "/v1/wallet/info";

/// Wire shape for state-changing operations that carry a signature: the
/// typed body under `Payload`, the signature block beside it.
#[derive(Serialize)]
struct SignedRequest<'a, T: Serialize> {
    #[serde(rename = "Payload")]
    payload: &'a T,
    #[serde(rename = "Signature")]
    signature: &'a SignatureBody,
}

/// HTTP client for the wallet service.
///
/// Immutable after construction; a single instance may be shared across
/// concurrent callers. Every operation takes the request headers as its
/// first argument and forwards them verbatim — callers are responsible
/// for `X-Auth-Token`.
#[derive(Debug, Clone)]
pub struct WalletClient {
    /// Base URL of the wallet service, without a trailing slash.
    base_url: String,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl WalletClient {
    /// Create a new wallet client from the given configuration.
    ///
    /// Fails when the address is empty or not a valid URL, or when the
    /// default HTTP client cannot be built.
    pub fn new(config: WalletConfig) -> Result<Self, WalletError> {
        if config.address.is_empty() {
            return Err(WalletError::Config("address is required".to_string()));
        }
        reqwest::Url::parse(&config.address)
            .map_err(|e| WalletError::Config(format!("invalid address: {e}")))?;
        let base_url = config.address.trim_end_matches('/').to_string();

        let client = match config.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self { base_url, client })
    }

    /// Register a main wallet.
    pub async fn register(
        &self,
        headers: &HeaderMap,
        body: &RegisterWalletBody,
    ) -> Result<WalletResponse, WalletError> {
        self.do_post(REGISTER_PATH, headers, body).await
    }

    /// Register a sub-wallet under an existing wallet.
    pub async fn register_sub_wallet(
        &self,
        headers: &HeaderMap,
        body: &RegisterSubWalletBody,
    ) -> Result<WalletResponse, WalletError> {
        self.do_post(REGISTER_SUBWALLET_PATH, headers, body).await
    }

    /// Transfer colored coins between wallets. The caller supplies the
    /// signature; the client does not compute or verify it.
    pub async fn transfer_c_coin(
        &self,
        headers: &HeaderMap,
        body: &TransferBody,
        sign: &SignatureBody,
    ) -> Result<WalletResponse, WalletError> {
        let request = SignedRequest {
            payload: body,
            signature: sign,
        };
        self.do_post(TRANSFER_CCOIN_PATH, headers, &request).await
    }

    /// Transfer digital assets between wallets. The caller supplies the
    /// signature; the client does not compute or verify it.
    pub async fn transfer_asset(
        &self,
        headers: &HeaderMap,
        body: &TransferAssetBody,
        sign: &SignatureBody,
    ) -> Result<WalletResponse, WalletError> {
        let request = SignedRequest {
            payload: body,
            signature: sign,
        };
        self.do_post(TRANSFER_ASSET_PATH, headers, &request).await
    }

    /// Query a wallet's colored-coin and digital-asset balances.
    pub async fn get_wallet_balance(
        &self,
        headers: &HeaderMap,
        id: &str,
    ) -> Result<WalletBalance, WalletError> {
        self.do_get(BALANCE_PATH, &[("id", id)], headers).await
    }

    /// Query a wallet's descriptive record.
    pub async fn get_wallet_info(
        &self,
        headers: &HeaderMap,
        id: &str,
    ) -> Result<WalletInfo, WalletError> {
        self.do_get(INFO_PATH, &[("id", id)], headers).await
    }

    /// POST a JSON body and decode the envelope response.
    async fn do_post<B, T>(
        &self,
        path: &str,
        headers: &HeaderMap,
        body: &B,
    ) -> Result<T, WalletError>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// GET with query parameters and decode the envelope response.
    async fn do_get<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        headers: &HeaderMap,
    ) -> Result<T, WalletError>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .headers(headers.clone())
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Read status and body, then run the two-stage envelope decode.
    async fn decode<T>(resp: reqwest::Response) -> Result<T, WalletError>
    where
        T: DeserializeOwned + Default,
    {
        let status = resp.status();
        let body = resp.text().await?;
        Envelope::from_body(status, &body)?.into_payload()
    }
}
