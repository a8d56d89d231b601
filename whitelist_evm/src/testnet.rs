// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::Address;
use crate::contract::whitelist::error::Error as ContractError;
use crate::contract::whitelist::WhitelistHandler;
use crate::utils;
use crate::wallet::{self, Wallet};
use crate::{CustomNetwork, Deployment, Network};
use alloy::hex::ToHexExt;
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::signers::local::PrivateKeySigner;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not spawn Anvil node: {0}")]
    Anvil(String),
    #[error(transparent)]
    Network(#[from] utils::Error),
    #[error(transparent)]
    Wallet(#[from] wallet::Error),
    #[error(transparent)]
    Contract(#[from] ContractError),
}

/// A local Anvil node with a freshly deployed whitelist contract.
pub struct Testnet {
    anvil: AnvilInstance,
    contract_address: Address,
}

impl Testnet {
    /// Starts an Anvil node and deploys a whitelist with room for `max_whitelisted_addresses`
    /// members, paid for by the first default Anvil account.
    pub async fn new(max_whitelisted_addresses: u8) -> Result<Self, Error> {
        let anvil = start_node()?;
        let network = network_of(&anvil)?;

        let deployer = Wallet::new_from_private_key(network, &private_key_of(&anvil, 0))?;
        let whitelist =
            WhitelistHandler::deploy(deployer.to_provider(), max_whitelisted_addresses).await?;

        Ok(Testnet {
            contract_address: *whitelist.contract.address(),
            anvil,
        })
    }

    pub fn to_network(&self) -> Result<Network, Error> {
        network_of(&self.anvil)
    }

    pub fn to_deployment(&self) -> Result<Deployment, Error> {
        Ok(Deployment::new(self.to_network()?, self.contract_address))
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Hex encoded private key of the default Anvil account `index`, if there is one.
    pub fn wallet_private_key(&self, index: usize) -> Option<String> {
        (index < self.anvil.keys().len()).then(|| private_key_of(&self.anvil, index))
    }
}

/// Runs a local Anvil node on a free port.
pub fn start_node() -> Result<AnvilInstance, Error> {
    // Requires Foundry: https://book.getfoundry.sh/getting-started/installation
    let anvil = Anvil::new()
        .try_spawn()
        .map_err(|err| Error::Anvil(err.to_string()))?;
    debug!("Anvil running at {}", anvil.endpoint());
    Ok(anvil)
}

fn network_of(anvil: &AnvilInstance) -> Result<Network, Error> {
    let network = CustomNetwork::new(&anvil.endpoint(), anvil.chain_id())?;
    Ok(Network::Custom(network))
}

fn private_key_of(anvil: &AnvilInstance, index: usize) -> String {
    let signer: PrivateKeySigner = anvil.keys()[index].clone().into();
    signer.to_bytes().encode_hex_with_prefix()
}
