// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::actions::{report_pending, CliDapp};
use color_eyre::eyre::eyre;
use color_eyre::eyre::Result;
use color_eyre::Section;
use whitelist_dapp::Action;
use whitelist_evm::utils::EVM_PRIVATE_KEY;

pub async fn status(dapp: CliDapp) -> Result<()> {
    dapp.on_page_load().await;
    println!("{}", dapp.page());
    Ok(())
}

pub async fn connect(dapp: CliDapp) -> Result<()> {
    dapp.connect_wallet().await;
    ensure_connected(&dapp)?;
    println!("{}", dapp.page());
    Ok(())
}

pub async fn join(dapp: CliDapp) -> Result<()> {
    dapp.on_page_load().await;
    ensure_connected(&dapp)?;
    if dapp.state().joined_whitelist {
        println!("{}", dapp.page());
        return Ok(());
    }

    report_pending(dapp.add_address_to_whitelist(), dapp.subscribe(), |_| {
        println!("⏳ Transaction submitted, waiting for it to be mined...");
    })
    .await;

    let page = dapp.page();
    if page.action != Action::ThankYou {
        error!("Join did not complete, page shows {:?}", page.action);
        return Err(eyre!("Failed to join the whitelist"))
            .with_suggestion(|| "check the logs for the transaction error, then try again")
            .with_note(|| {
                format!("{} addresses have joined so far", page.number_of_whitelisted)
            });
    }

    info!("Joined the whitelist");
    println!("✅ Joined the whitelist");
    println!("{page}");
    Ok(())
}

fn ensure_connected(dapp: &CliDapp) -> Result<()> {
    if dapp.state().wallet_connected() {
        return Ok(());
    }
    Err(eyre!("Failed to connect the wallet"))
        .with_suggestion(|| {
            format!("use the --private-key option or the {EVM_PRIVATE_KEY} env var")
        })
        .with_suggestion(|| "make sure the wallet is on the network the whitelist is deployed to")
}
