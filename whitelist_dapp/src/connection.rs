// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::error::{Error, Result};
use crate::wallet::{
    Access, ConnectorConfig, Notifier, WalletConnector, WalletHandle, WhitelistContract,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use whitelist_evm::common::Address;

/// A handle to the active wallet, checked to be on the target network.
#[derive(Clone)]
pub enum Accessor {
    /// Read-only access.
    Provider { handle: Arc<dyn WalletHandle> },
    /// Write access, signing as `address`.
    Signer {
        handle: Arc<dyn WalletHandle>,
        address: Address,
    },
}

impl Accessor {
    pub fn access(&self) -> Access {
        match self {
            Accessor::Provider { .. } => Access::Read,
            Accessor::Signer { .. } => Access::Write,
        }
    }

    /// The signing address, only known to a signer.
    pub fn address(&self) -> Option<Address> {
        match self {
            Accessor::Provider { .. } => None,
            Accessor::Signer { address, .. } => Some(*address),
        }
    }

    /// Binds the whitelist contract through this accessor.
    pub fn bind_whitelist(&self, contract_address: Address) -> Box<dyn WhitelistContract> {
        let handle = match self {
            Accessor::Provider { handle } | Accessor::Signer { handle, .. } => handle,
        };
        handle.bind_whitelist(contract_address, self.access())
    }
}

impl std::fmt::Debug for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accessor::Provider { .. } => write!(f, "Accessor::Provider"),
            Accessor::Signer { address, .. } => write!(f, "Accessor::Signer({address})"),
        }
    }
}

/// Owns the wallet session for the lifetime of the application.
///
/// The session is opened lazily by the first accessor request. Concurrent first requests
/// share a single wallet prompt; a failed prompt leaves the session closed so the next
/// request prompts again.
pub struct ConnectionManager<C> {
    connector: C,
    config: ConnectorConfig,
    notifier: Arc<dyn Notifier>,
    session: OnceCell<Arc<dyn WalletHandle>>,
}

impl<C: WalletConnector> ConnectionManager<C> {
    pub fn new(connector: C, config: ConnectorConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            connector,
            config,
            notifier,
            session: OnceCell::new(),
        }
    }

    pub fn is_session_open(&self) -> bool {
        self.session.initialized()
    }

    async fn session(&self) -> Result<Arc<dyn WalletHandle>> {
        let handle = self
            .session
            .get_or_try_init(|| async {
                info!("No wallet session yet, prompting for a wallet");
                self.connector
                    .connect(&self.config)
                    .await
                    .inspect_err(|err| error!("Wallet prompt failed: {err}"))
            })
            .await?;
        Ok(Arc::clone(handle))
    }

    /// Returns a provider (`Access::Read`) or a signer (`Access::Write`) for the active wallet.
    ///
    /// Fails with [`Error::WrongNetwork`] after alerting the user when the wallet is not on the
    /// target network.
    pub async fn acquire_accessor(&self, access: Access) -> Result<Accessor> {
        let handle = self.session().await?;

        let expected = self.config.network.chain_id();
        let actual = handle.chain_id().await?;
        if actual != expected {
            let message = format!(
                "Change the network to {}",
                self.config.network.display_name()
            );
            warn!("Wallet is on chain {actual}, expected {expected}");
            self.notifier.alert(&message);
            return Err(Error::WrongNetwork { expected, actual });
        }

        match access {
            Access::Read => Ok(Accessor::Provider { handle }),
            Access::Write => {
                let address = handle.signer_address().await?;
                trace!("Signer accessor acquired for {address}");
                Ok(Accessor::Signer { handle, address })
            }
        }
    }
}
