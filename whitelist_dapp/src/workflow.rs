// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::connection::ConnectionManager;
use crate::error::{Error, Result};
use crate::state::{ConnectionState, DappState};
use crate::view::{render, Page};
use crate::wallet::{Access, ConnectorConfig, Notifier, WalletConnector};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use whitelist_evm::common::Address;
use whitelist_evm::Deployment;

/// The whitelist page: connects the wallet, tracks membership and submits the join transaction.
///
/// State changes are published on a [`watch`] channel, see [`WhitelistDapp::subscribe`].
/// Every remote failure is logged and leaves the state at its last known value; nothing is retried.
pub struct WhitelistDapp<C> {
    connection: ConnectionManager<C>,
    contract_address: Address,
    state: watch::Sender<DappState>,
    page_loaded: AtomicBool,
    join_in_flight: Mutex<()>,
}

impl<C: WalletConnector> WhitelistDapp<C> {
    pub fn new(connector: C, deployment: Deployment, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(
            connector,
            ConnectorConfig::new(deployment.network),
            deployment.contract_address,
            notifier,
        )
    }

    pub fn with_config(
        connector: C,
        config: ConnectorConfig,
        contract_address: Address,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (state, _) = watch::channel(DappState::default());
        Self {
            connection: ConnectionManager::new(connector, config, notifier),
            contract_address,
            state,
            page_loaded: AtomicBool::new(false),
            join_in_flight: Mutex::new(()),
        }
    }

    pub fn connection(&self) -> &ConnectionManager<C> {
        &self.connection
    }

    /// Receives every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<DappState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DappState {
        self.state.borrow().clone()
    }

    pub fn page(&self) -> Page {
        render(&self.state.borrow())
    }

    /// Lifecycle hook for when the page is first shown. Connects the wallet the first time
    /// it is called with the wallet disconnected; later calls do nothing.
    pub async fn on_page_load(&self) {
        if self.page_loaded.swap(true, Ordering::SeqCst) {
            trace!("Page already loaded");
            return;
        }
        if !self.is_connected() {
            self.connect_wallet().await;
        }
    }

    /// Connects the wallet, then reads membership and the whitelist count.
    ///
    /// Does nothing while a connection exists or is being made.
    pub async fn connect_wallet(&self) {
        let started = self.state.send_if_modified(|state| {
            if state.connection == ConnectionState::Disconnected {
                state.connection = ConnectionState::Connecting;
                true
            } else {
                false
            }
        });
        if !started {
            debug!("Wallet is already connected or connecting");
            return;
        }

        if let Err(err) = self.connection.acquire_accessor(Access::Read).await {
            error!("Failed to connect the wallet: {err}");
            self.state
                .send_modify(|state| state.connection = ConnectionState::Disconnected);
            return;
        }

        info!("Wallet connected");
        self.state
            .send_modify(|state| state.connection = ConnectionState::Connected);

        tokio::join!(
            self.check_if_address_in_whitelist(),
            self.get_number_of_whitelisted(),
            self.get_max_whitelisted(),
        );
    }

    /// Refreshes whether the connected address is on the whitelist.
    pub async fn check_if_address_in_whitelist(&self) {
        if !self.is_connected() {
            warn!("Cannot check whitelist membership without a connected wallet");
            return;
        }
        match self.fetch_membership().await {
            Ok(joined) => self
                .state
                .send_modify(|state| state.joined_whitelist = joined),
            Err(err) => error!("Failed to check whitelist membership: {err}"),
        }
    }

    /// Refreshes the number of whitelisted addresses.
    pub async fn get_number_of_whitelisted(&self) {
        if !self.is_connected() {
            warn!("Cannot read the whitelist count without a connected wallet");
            return;
        }
        match self.fetch_number_of_whitelisted().await {
            Ok(count) => self
                .state
                .send_modify(|state| state.number_of_whitelisted = count),
            Err(err) => error!("Failed to get the number of whitelisted addresses: {err}"),
        }
    }

    /// Refreshes the whitelist capacity.
    pub async fn get_max_whitelisted(&self) {
        if !self.is_connected() {
            warn!("Cannot read the whitelist capacity without a connected wallet");
            return;
        }
        match self.fetch_max_whitelisted().await {
            Ok(max) => self
                .state
                .send_modify(|state| state.max_whitelisted = Some(max)),
            Err(err) => error!("Failed to get the whitelist capacity: {err}"),
        }
    }

    /// Submits the join transaction and waits for it to be mined.
    ///
    /// Ignored unless the wallet is connected and not yet whitelisted, and while another
    /// join is in flight.
    pub async fn add_address_to_whitelist(&self) {
        let Ok(_join_guard) = self.join_in_flight.try_lock() else {
            warn!("A whitelist join is already in flight");
            return;
        };
        {
            let state = self.state.borrow();
            if !state.wallet_connected() {
                warn!("Cannot join the whitelist without a connected wallet");
                return;
            }
            if state.joined_whitelist {
                info!("Address already joined the whitelist");
                return;
            }
        }

        if let Err(err) = self.join().await {
            error!("Failed to join the whitelist: {err}");
            self.state.send_modify(|state| state.loading = false);
        }
    }

    async fn join(&self) -> Result<()> {
        let signer = self.connection.acquire_accessor(Access::Write).await?;
        let whitelist = signer.bind_whitelist(self.contract_address);

        let pending = whitelist.add_address_to_whitelist().await?;
        let tx_hash = pending.tx_hash();
        info!("Whitelist join submitted with tx_hash {tx_hash:?}, waiting for it to be mined");
        self.state.send_modify(|state| state.loading = true);

        pending.wait().await?;
        info!("Whitelist join {tx_hash:?} confirmed");
        self.state.send_modify(|state| {
            state.loading = false;
            state.joined_whitelist = true;
        });

        self.get_number_of_whitelisted().await;
        Ok(())
    }

    async fn fetch_membership(&self) -> Result<bool> {
        let signer = self.connection.acquire_accessor(Access::Write).await?;
        let address = signer.address().ok_or_else(|| {
            Error::WalletUnavailable("signer did not expose an address".to_string())
        })?;
        signer
            .bind_whitelist(self.contract_address)
            .whitelisted_addresses(address)
            .await
    }

    async fn fetch_number_of_whitelisted(&self) -> Result<u8> {
        let provider = self.connection.acquire_accessor(Access::Read).await?;
        provider
            .bind_whitelist(self.contract_address)
            .num_addresses_whitelisted()
            .await
    }

    async fn fetch_max_whitelisted(&self) -> Result<u8> {
        let provider = self.connection.acquire_accessor(Access::Read).await?;
        provider
            .bind_whitelist(self.contract_address)
            .max_whitelisted_addresses()
            .await
    }

    fn is_connected(&self) -> bool {
        self.state.borrow().wallet_connected()
    }
}
