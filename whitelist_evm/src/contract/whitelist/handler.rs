// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, TxHash};
use crate::contract::whitelist::error::Error;
use crate::contract::whitelist::interface::IWhitelist;
use crate::contract::whitelist::interface::IWhitelist::IWhitelistInstance;
use alloy::network::{Network, ReceiptResponse};
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::transports::Transport;
use futures::future::BoxFuture;

/// A submitted `addAddressToWhitelist` transaction that has not been confirmed yet.
pub struct PendingJoinTx {
    tx_hash: TxHash,
    confirmation: BoxFuture<'static, Result<TxHash, Error>>,
}

impl PendingJoinTx {
    pub fn new<T, N>(pending_tx_builder: PendingTransactionBuilder<T, N>) -> Self
    where
        T: Transport + Clone,
        N: Network,
    {
        let tx_hash = *pending_tx_builder.tx_hash();
        let confirmation = Box::pin(async move {
            let receipt = pending_tx_builder.get_receipt().await.inspect_err(|err| {
                error!("Error watching whitelist join tx with hash {tx_hash:?}: {err:?}")
            })?;
            if !receipt.status() {
                error!("Whitelist join tx with hash {tx_hash:?} reverted");
                return Err(Error::TransactionReverted(tx_hash));
            }
            debug!("Whitelist join tx with hash {tx_hash:?} is successful");
            Ok(tx_hash)
        });

        Self {
            tx_hash,
            confirmation,
        }
    }

    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Waits until the transaction is mined. There is no timeout besides the transport's own.
    pub async fn confirm(self) -> Result<TxHash, Error> {
        self.confirmation.await
    }
}

pub struct WhitelistHandler<T: Transport + Clone, P: Provider<T, N>, N: Network> {
    pub contract: IWhitelistInstance<T, P, N>,
}

impl<T, P, N> WhitelistHandler<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N>,
    N: Network,
{
    /// Create a new WhitelistHandler instance from the contract's address
    pub fn new(contract_address: Address, provider: P) -> Self {
        let contract = IWhitelist::new(contract_address, provider);
        Self { contract }
    }

    /// Deploys a whitelist with room for `max_whitelisted_addresses` members.
    pub async fn deploy(provider: P, max_whitelisted_addresses: u8) -> Result<Self, Error> {
        let contract = IWhitelist::deploy(provider, max_whitelisted_addresses)
            .await
            .inspect_err(|err| error!("Error deploying the whitelist contract: {err:?}"))?;
        info!("Whitelist contract deployed at {}", contract.address());
        Ok(Self { contract })
    }

    /// Number of addresses currently on the whitelist.
    pub async fn num_addresses_whitelisted(&self) -> Result<u8, Error> {
        let count = self
            .contract
            .numAddressesWhitelisted()
            .call()
            .await
            .inspect_err(|err| {
                error!("Error getting the number of whitelisted addresses: {err:?}")
            })?
            ._0;
        debug!("Number of whitelisted addresses is {count}");
        Ok(count)
    }

    /// Whether `address` has already joined the whitelist.
    pub async fn whitelisted_addresses(&self, address: Address) -> Result<bool, Error> {
        let joined = self
            .contract
            .whitelistedAddresses(address)
            .call()
            .await
            .inspect_err(|err| {
                error!("Error checking whitelist membership of {address:?}: {err:?}")
            })?
            ._0;
        debug!("Address {address:?} whitelisted: {joined}");
        Ok(joined)
    }

    /// The contract's capacity.
    pub async fn max_whitelisted_addresses(&self) -> Result<u8, Error> {
        let max = self
            .contract
            .maxWhitelistedAddresses()
            .call()
            .await
            .inspect_err(|err| error!("Error getting the whitelist capacity: {err:?}"))?
            ._0;
        Ok(max)
    }

    /// Submit the transaction adding the sender to the whitelist.
    ///
    /// Returns once the node accepted the transaction; use [`PendingJoinTx::confirm`] to wait for
    /// it to be mined.
    pub async fn add_address_to_whitelist(&self) -> Result<PendingJoinTx, Error> {
        debug!("Submitting addAddressToWhitelist transaction");
        let pending_tx_builder = self
            .contract
            .addAddressToWhitelist()
            .send()
            .await
            .inspect_err(|err| error!("Error submitting addAddressToWhitelist: {err:?}"))?;

        let pending = PendingJoinTx::new(pending_tx_builder);
        debug!(
            "The whitelist join is pending with tx_hash: {:?}",
            pending.tx_hash()
        );
        Ok(pending)
    }
}
