// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::commands::SubCmd;
use clap::Parser;
use whitelist_evm::common::ChainId;
use whitelist_logging::{LogFormat, LogOutputDest};

// Please do not remove the blank lines in these doc comments.
// They are used for inserting line breaks when the help menu is rendered in the UI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Opt {
    /// Available sub commands.
    #[clap(subcommand)]
    pub command: SubCmd,

    /// Specify the logging format.
    ///
    /// Valid values are "default" or "json".
    ///
    /// If the argument is not used, the default format will be applied.
    #[clap(long, value_parser = LogFormat::parse_from_str, verbatim_doc_comment)]
    pub log_format: Option<LogFormat>,

    /// Specify the logging output destination.
    ///
    /// Valid values are "stdout", "stderr", "data-dir", or a custom path.
    ///
    /// `data-dir` is the default value.
    ///
    /// The data directory location is platform specific:
    ///  - Linux: $HOME/.local/share/whitelist-dapp/logs
    ///  - macOS: $HOME/Library/Application Support/whitelist-dapp/logs
    ///  - Windows: C:\Users\<username>\AppData\Roaming\whitelist-dapp\logs
    #[allow(rustdoc::invalid_html_tags)]
    #[clap(
        long,
        value_parser = LogOutputDest::parse_from_str,
        verbatim_doc_comment,
        default_value = "data-dir"
    )]
    pub log_output_dest: LogOutputDest,

    /// The JSON-RPC endpoint of a custom EVM network.
    ///
    /// Overrides the RPC_URL env var. Must be used together with --chain-id.
    #[clap(long, global = true, verbatim_doc_comment)]
    pub rpc_url: Option<String>,

    /// The chain ID of a custom EVM network.
    ///
    /// Overrides the CHAIN_ID env var. Must be used together with --rpc-url.
    #[clap(long, global = true, verbatim_doc_comment)]
    pub chain_id: Option<ChainId>,

    /// The address of the deployed whitelist contract.
    ///
    /// Overrides the WHITELIST_CONTRACT_ADDRESS env var.
    #[clap(long, global = true, verbatim_doc_comment)]
    pub contract_address: Option<String>,

    /// The hex encoded private key of the wallet to connect.
    ///
    /// Overrides the EVM_PRIVATE_KEY env var.
    #[clap(long, global = true, verbatim_doc_comment)]
    pub private_key: Option<String>,

    /// Refuse to use a wallet, as if none was installed.
    #[clap(long, global = true)]
    pub no_wallet: bool,
}
