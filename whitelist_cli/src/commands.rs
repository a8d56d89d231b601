// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

mod whitelist;

use clap::Subcommand;
use color_eyre::Result;

use crate::opt::Opt;

#[derive(Subcommand, Debug)]
pub enum SubCmd {
    /// Show the whitelist page, connecting the wallet if one is configured.
    Status,

    /// Connect the wallet and show whether it is on the whitelist.
    Connect,

    /// Add the wallet's address to the whitelist and wait for the transaction to be mined.
    Join,
}

pub async fn handle_subcommand(opt: Opt) -> Result<()> {
    let dapp = crate::actions::load_dapp(&opt)?;

    match opt.command {
        SubCmd::Status => whitelist::status(dapp).await,
        SubCmd::Connect => whitelist::connect(dapp).await,
        SubCmd::Join => whitelist::join(dapp).await,
    }
}
