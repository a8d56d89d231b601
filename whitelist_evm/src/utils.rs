// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, ChainId, EthereumWallet};
use crate::{CustomNetwork, Network, RINKEBY_CHAIN_ID};
use alloy::network::Ethereum;
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::{Identity, ProviderBuilder, ReqwestProvider};
use alloy::transports::http::{reqwest, Client, Http};
use rand::Rng;
use std::env;
use std::str::FromStr;

/// environment variable selecting the target network: `rinkeby` or `custom`
pub const EVM_NETWORK: &str = "EVM_NETWORK";
/// environment variables to connect to a custom EVM network
pub const RPC_URL: &str = "RPC_URL";
const RPC_URL_BUILD_TIME_VAL: Option<&str> = option_env!("RPC_URL");
pub const CHAIN_ID: &str = "CHAIN_ID";
const CHAIN_ID_BUILD_TIME_VAL: Option<&str> = option_env!("CHAIN_ID");
pub const WHITELIST_CONTRACT_ADDRESS: &str = "WHITELIST_CONTRACT_ADDRESS";
const WHITELIST_CONTRACT_ADDRESS_BUILD_TIME_VAL: Option<&str> =
    option_env!("WHITELIST_CONTRACT_ADDRESS");
/// environment variable holding the hex encoded private key of the user's wallet
pub const EVM_PRIVATE_KEY: &str = "EVM_PRIVATE_KEY";

pub type RecommendedFillers = JoinFill<
    Identity,
    JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
>;

/// Read-only provider.
pub type ReadProvider = FillProvider<RecommendedFillers, ReqwestProvider, Http<Client>, Ethereum>;

/// Provider that signs and sends transactions with a wallet.
pub type WriteProvider = FillProvider<
    JoinFill<RecommendedFillers, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    Http<Client>,
    Ethereum,
>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to get EVM network: {0}")]
    FailedToGetEvmNetwork(String),
    #[error("Invalid whitelist contract address: {0}")]
    InvalidContractAddress(String),
}

/// Generate a random Address.
pub fn dummy_address() -> Address {
    Address::new(rand::rngs::OsRng.gen())
}

fn env_or_build_time(name: &str, build_time_val: Option<&str>) -> Option<String> {
    env::var(name)
        .ok()
        .or_else(|| build_time_val.map(|s| s.to_string()))
}

/// Get the `Network` from environment variables.
///
/// Without `EVM_NETWORK`, a custom network is used when both `RPC_URL` and `CHAIN_ID` are set.
/// `RPC_URL` alone replaces the public Rinkeby endpoint, keeping chain id 4.
pub fn get_evm_network_from_env() -> Result<Network, Error> {
    evm_network_from_vars(
        env::var(EVM_NETWORK).ok().as_deref(),
        env_or_build_time(RPC_URL, RPC_URL_BUILD_TIME_VAL).as_deref(),
        env_or_build_time(CHAIN_ID, CHAIN_ID_BUILD_TIME_VAL).as_deref(),
    )
}

/// Resolve the `Network` from already fetched variable values.
pub fn evm_network_from_vars(
    evm_network: Option<&str>,
    rpc_url: Option<&str>,
    chain_id: Option<&str>,
) -> Result<Network, Error> {
    match (evm_network, rpc_url, chain_id) {
        (Some("rinkeby"), Some(rpc_url), _) | (None, Some(rpc_url), None) => {
            info!("Using Rinkeby through the endpoint in {RPC_URL}");
            Ok(Network::Custom(CustomNetwork::new(
                rpc_url,
                RINKEBY_CHAIN_ID,
            )?))
        }
        (Some("rinkeby"), None, _) => {
            info!("Using Rinkeby EVM network as {EVM_NETWORK} is set to 'rinkeby'");
            Ok(Network::Rinkeby)
        }
        (Some("custom") | None, Some(rpc_url), Some(chain_id)) => {
            info!("Using custom EVM network from environment variables");
            let chain_id = ChainId::from_str(chain_id).map_err(|err| {
                Error::FailedToGetEvmNetwork(format!("invalid chain id {chain_id:?}: {err}"))
            })?;
            Ok(Network::Custom(CustomNetwork::new(rpc_url, chain_id)?))
        }
        (Some("custom"), _, _) => {
            error!("Custom EVM network requested without {RPC_URL} and {CHAIN_ID}");
            Err(Error::FailedToGetEvmNetwork(format!(
                "missing env var, make sure to set both {RPC_URL} and {CHAIN_ID}"
            )))
        }
        (None, None, _) => {
            debug!("No custom EVM network configured, defaulting to Rinkeby");
            Ok(Network::Rinkeby)
        }
        (Some(other), _, _) => Err(Error::FailedToGetEvmNetwork(format!(
            "unknown {EVM_NETWORK} value {other:?}, expected 'rinkeby' or 'custom'"
        ))),
    }
}

/// Parse a hex encoded contract address.
pub fn parse_contract_address(address: &str) -> Result<Address, Error> {
    Address::from_str(address.trim())
        .map_err(|err| Error::InvalidContractAddress(format!("{address:?}: {err}")))
}

/// Get the whitelist contract address from `WHITELIST_CONTRACT_ADDRESS`.
pub fn get_contract_address_from_env() -> Result<Address, Error> {
    let address = env_or_build_time(
        WHITELIST_CONTRACT_ADDRESS,
        WHITELIST_CONTRACT_ADDRESS_BUILD_TIME_VAL,
    )
    .ok_or_else(|| {
        Error::InvalidContractAddress(format!(
            "missing env var, make sure to set {WHITELIST_CONTRACT_ADDRESS}"
        ))
    })?;
    parse_contract_address(&address)
}

/// The wallet private key from `EVM_PRIVATE_KEY`, if set.
pub fn get_private_key_from_env() -> Option<String> {
    env::var(EVM_PRIVATE_KEY).ok()
}

pub fn http_provider(rpc_url: reqwest::Url) -> ReadProvider {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .on_http(rpc_url)
}

pub fn http_provider_with_wallet(rpc_url: reqwest::Url, wallet: EthereumWallet) -> WriteProvider {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url)
}
