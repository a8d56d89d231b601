// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! The wallet and contract seams backed by an EVM JSON-RPC endpoint and a local private key.

use crate::error::{Error, Result};
use crate::wallet::{
    Access, ConnectorConfig, PendingJoin, WalletConnector, WalletHandle, WhitelistContract,
};
use alloy::network::Network;
use alloy::providers::Provider;
use alloy::transports::Transport;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;
use whitelist_evm::common::{Address, ChainId, TxHash};
use whitelist_evm::contract::whitelist::{
    error::Error as WhitelistError, PendingJoinTx, WhitelistHandler,
};
use whitelist_evm::utils::{http_provider, ReadProvider, WriteProvider, EVM_PRIVATE_KEY};
use whitelist_evm::wallet::Wallet;

/// Opens a session with the wallet whose private key it was given.
pub struct EvmWalletConnector {
    private_key: Option<String>,
}

impl EvmWalletConnector {
    pub fn new(private_key: Option<String>) -> Self {
        Self { private_key }
    }

    /// Uses the key in `EVM_PRIVATE_KEY`, if any.
    pub fn from_env() -> Self {
        Self::new(whitelist_evm::utils::get_private_key_from_env())
    }
}

#[async_trait]
impl WalletConnector for EvmWalletConnector {
    async fn connect(&self, config: &ConnectorConfig) -> Result<Arc<dyn WalletHandle>> {
        if config.disable_injected_provider {
            return Err(Error::WalletUnavailable(
                "the injected wallet provider is disabled".to_string(),
            ));
        }
        let private_key = self.private_key.as_deref().ok_or_else(|| {
            Error::WalletUnavailable(format!("no wallet found, set {EVM_PRIVATE_KEY}"))
        })?;
        let wallet = Wallet::new_from_private_key(config.network.clone(), private_key)
            .map_err(|err| Error::WalletUnavailable(err.to_string()))?;

        info!(
            "Wallet {} opened against {}",
            wallet.address(),
            config.network.rpc_url()
        );
        Ok(Arc::new(EvmWalletHandle::new(&wallet)))
    }
}

/// A wallet session: a read-only provider plus a signing provider for the same endpoint.
pub struct EvmWalletHandle {
    provider: ReadProvider,
    signer: WriteProvider,
    address: Address,
}

impl EvmWalletHandle {
    pub fn new(wallet: &Wallet) -> Self {
        Self {
            provider: http_provider(wallet.network().rpc_url().clone()),
            signer: wallet.to_provider(),
            address: wallet.address(),
        }
    }
}

#[async_trait]
impl WalletHandle for EvmWalletHandle {
    async fn chain_id(&self) -> Result<ChainId> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|err| Error::WalletUnavailable(format!("failed to query the chain id: {err}")))
    }

    async fn signer_address(&self) -> Result<Address> {
        Ok(self.address)
    }

    fn bind_whitelist(
        &self,
        contract_address: Address,
        access: Access,
    ) -> Box<dyn WhitelistContract> {
        match access {
            Access::Read => Box::new(WhitelistHandler::new(
                contract_address,
                self.provider.clone(),
            )),
            Access::Write => Box::new(WhitelistHandler::new(
                contract_address,
                self.signer.clone(),
            )),
        }
    }
}

fn read_failure(err: WhitelistError) -> Error {
    Error::RemoteReadFailure(err.to_string())
}

fn transaction_failure(err: WhitelistError) -> Error {
    Error::TransactionFailure(err.to_string())
}

#[async_trait]
impl<T, P, N> WhitelistContract for WhitelistHandler<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + 'static,
    N: Network,
{
    async fn num_addresses_whitelisted(&self) -> Result<u8> {
        WhitelistHandler::num_addresses_whitelisted(self)
            .await
            .map_err(read_failure)
    }

    async fn whitelisted_addresses(&self, address: Address) -> Result<bool> {
        WhitelistHandler::whitelisted_addresses(self, address)
            .await
            .map_err(read_failure)
    }

    async fn max_whitelisted_addresses(&self) -> Result<u8> {
        WhitelistHandler::max_whitelisted_addresses(self)
            .await
            .map_err(read_failure)
    }

    async fn add_address_to_whitelist(&self) -> Result<Box<dyn PendingJoin>> {
        let pending = WhitelistHandler::add_address_to_whitelist(self)
            .await
            .map_err(transaction_failure)?;
        Ok(Box::new(pending))
    }
}

impl PendingJoin for PendingJoinTx {
    fn tx_hash(&self) -> TxHash {
        PendingJoinTx::tx_hash(self)
    }

    fn wait(self: Box<Self>) -> BoxFuture<'static, Result<TxHash>> {
        let pending = *self;
        Box::pin(async move { pending.confirm().await.map_err(transaction_failure) })
    }
}
