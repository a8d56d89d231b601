// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::access::{keys, network};
use crate::opt::Opt;
use color_eyre::Result;
use std::sync::Arc;
use whitelist_dapp::evm::EvmWalletConnector;
use whitelist_dapp::{ConnectorConfig, Notifier, WhitelistDapp};

pub type CliDapp = WhitelistDapp<EvmWalletConnector>;

/// Shows blocking notices on the terminal.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        warn!("Alerting the user: {message}");
        eprintln!("⚠️  {message}");
    }
}

/// Builds the page for the configured deployment. Does not touch the network.
pub fn load_dapp(opt: &Opt) -> Result<CliDapp> {
    let deployment = network::get_deployment(
        opt.rpc_url.as_deref(),
        opt.chain_id,
        opt.contract_address.as_deref(),
    )?;
    let connector = EvmWalletConnector::new(keys::get_private_key(opt.private_key.as_deref()));

    let mut config = ConnectorConfig::new(deployment.network);
    config.disable_injected_provider = opt.no_wallet;

    Ok(WhitelistDapp::with_config(
        connector,
        config,
        deployment.contract_address,
        Arc::new(TerminalNotifier),
    ))
}
