// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! The seams between the workflow and the outside world: the wallet, the contract and the user.

use crate::error::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;
use whitelist_evm::common::{Address, ChainId, TxHash};
use whitelist_evm::Network;

/// Whether an accessor may only read (provider) or also sign transactions (signer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Settings handed to the connector when the wallet session is opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// The network the wallet has to be on.
    pub network: Network,
    /// Refuse to use the wallet injected into the environment.
    pub disable_injected_provider: bool,
}

impl ConnectorConfig {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            disable_injected_provider: false,
        }
    }
}

/// Opens wallet sessions.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Prompts the user for a wallet and returns the raw session handle.
    async fn connect(&self, config: &ConnectorConfig) -> Result<Arc<dyn WalletHandle>>;
}

/// A connected wallet, wrapped as a network provider.
#[async_trait]
pub trait WalletHandle: Send + Sync {
    /// The chain the wallet is currently connected to.
    async fn chain_id(&self) -> Result<ChainId>;

    /// The address transactions are signed with.
    async fn signer_address(&self) -> Result<Address>;

    /// Binds the whitelist contract at `contract_address` through this wallet.
    fn bind_whitelist(&self, contract_address: Address, access: Access)
        -> Box<dyn WhitelistContract>;
}

/// The remote operations of the whitelist contract.
#[async_trait]
pub trait WhitelistContract: Send + Sync {
    async fn num_addresses_whitelisted(&self) -> Result<u8>;
    async fn whitelisted_addresses(&self, address: Address) -> Result<bool>;
    async fn max_whitelisted_addresses(&self) -> Result<u8>;
    /// Submits the join transaction. Only a signer-bound contract can do this.
    async fn add_address_to_whitelist(&self) -> Result<Box<dyn PendingJoin>>;
}

/// A submitted join transaction.
pub trait PendingJoin: Send {
    fn tx_hash(&self) -> TxHash;

    /// Resolves once the transaction is mined. Cannot be cancelled.
    fn wait(self: Box<Self>) -> BoxFuture<'static, Result<TxHash>>;
}

/// Blocking, user visible notices.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
