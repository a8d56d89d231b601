// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use color_eyre::Section;
use whitelist_evm::common::ChainId;
use whitelist_evm::utils::{
    get_contract_address_from_env, get_evm_network_from_env, parse_contract_address, CHAIN_ID,
    RPC_URL, WHITELIST_CONTRACT_ADDRESS,
};
use whitelist_evm::{CustomNetwork, Deployment, Network};

/// The network and contract to talk to: flags first, then the environment.
pub fn get_deployment(
    rpc_url: Option<&str>,
    chain_id: Option<ChainId>,
    contract_address: Option<&str>,
) -> Result<Deployment> {
    let network = match network_from_flags(rpc_url, chain_id)? {
        Some(network) => network,
        None => get_evm_network_from_env()
            .wrap_err("Failed to resolve the EVM network from the environment")
            .with_suggestion(|| {
                format!(
                    "set both {RPC_URL} and {CHAIN_ID} to use a custom network, \
                     or unset them to use Rinkeby"
                )
            })?,
    };

    let contract_address = match contract_address {
        Some(address) => parse_contract_address(address)
            .wrap_err("Please provide a valid whitelist contract address")?,
        None => get_contract_address_from_env()
            .wrap_err("Please provide the whitelist contract address")
            .with_suggestion(|| {
                format!(
                    "use the --contract-address option or the {WHITELIST_CONTRACT_ADDRESS} env var"
                )
            })
            .with_suggestion(|| {
                "an address looks like this: 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            })?,
    };

    info!("Using whitelist contract {contract_address} on {network}");
    Ok(Deployment::new(network, contract_address))
}

/// A custom network when both flags are given, nothing when neither is.
pub fn network_from_flags(
    rpc_url: Option<&str>,
    chain_id: Option<ChainId>,
) -> Result<Option<Network>> {
    match (rpc_url, chain_id) {
        (Some(rpc_url), Some(chain_id)) => {
            let network = CustomNetwork::new(rpc_url, chain_id)
                .wrap_err("Please provide a valid RPC url")?;
            Ok(Some(Network::Custom(network)))
        }
        (None, None) => Ok(None),
        _ => Err(eyre!("A custom network needs both an RPC url and a chain ID"))
            .with_suggestion(|| "use --rpc-url together with --chain-id"),
    }
}
