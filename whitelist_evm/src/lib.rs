// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#[macro_use]
extern crate tracing;

use crate::common::{Address, ChainId};
use alloy::transports::http::reqwest;
use std::sync::LazyLock;

pub mod common;
pub mod contract;
pub mod testnet;
pub mod utils;
pub mod wallet;

/// Chain id of the Rinkeby test network, the network the whitelist contract lives on.
pub const RINKEBY_CHAIN_ID: ChainId = 4;

/// Public Rinkeby endpoint.
///
/// Rinkeby has been shut down, so this endpoint no longer answers. Point `RPC_URL` at a node
/// serving chain id 4 to keep using the Rinkeby deployment, see
/// [`utils::get_evm_network_from_env`].
static PUBLIC_RINKEBY_HTTP_RPC_URL: LazyLock<reqwest::Url> = LazyLock::new(|| {
    "https://rpc.ankr.com/eth_rinkeby"
        .parse()
        .expect("Invalid RPC URL")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomNetwork {
    pub rpc_url_http: reqwest::Url,
    pub chain_id: ChainId,
}

impl CustomNetwork {
    pub fn new(rpc_url: &str, chain_id: ChainId) -> Result<Self, utils::Error> {
        let rpc_url_http = reqwest::Url::parse(rpc_url).map_err(|err| {
            utils::Error::FailedToGetEvmNetwork(format!("invalid RPC URL {rpc_url:?}: {err}"))
        })?;
        Ok(Self {
            rpc_url_http,
            chain_id,
        })
    }
}

/// The network the wallet is required to be connected to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Network {
    #[default]
    Rinkeby,
    Custom(CustomNetwork),
}

impl Network {
    pub fn identifier(&self) -> &str {
        match self {
            Network::Rinkeby => "rinkeby",
            Network::Custom(_) => "custom",
        }
    }

    /// Human readable name, used in user facing notices.
    pub fn display_name(&self) -> String {
        match self.chain_id() {
            RINKEBY_CHAIN_ID => "Rinkeby".to_string(),
            chain_id => format!("the network with chain id {chain_id}"),
        }
    }

    pub fn rpc_url(&self) -> &reqwest::Url {
        match self {
            Network::Rinkeby => &PUBLIC_RINKEBY_HTTP_RPC_URL,
            Network::Custom(custom) => &custom.rpc_url_http,
        }
    }

    pub fn chain_id(&self) -> ChainId {
        match self {
            Network::Rinkeby => RINKEBY_CHAIN_ID,
            Network::Custom(custom) => custom.chain_id,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (chain id {})", self.identifier(), self.chain_id())
    }
}

/// Where the whitelist contract is deployed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub network: Network,
    pub contract_address: Address,
}

impl Deployment {
    pub fn new(network: Network, contract_address: Address) -> Self {
        Self {
            network,
            contract_address,
        }
    }
}
