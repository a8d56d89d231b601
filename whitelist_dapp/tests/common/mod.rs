// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#![allow(dead_code)]

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use whitelist_dapp::{
    Access, ConnectorConfig, Error, Notifier, PendingJoin, Result, WalletConnector, WalletHandle,
    WhitelistContract,
};
use whitelist_evm::common::{Address, ChainId, TxHash};
use whitelist_evm::utils::dummy_address;

/// In-memory stand-in for the deployed whitelist contract.
#[derive(Default)]
pub struct FakeChain {
    pub members: HashSet<Address>,
    pub count: u8,
    pub max: u8,
    pub fail_reads: bool,
    pub reject_submission: bool,
    pub revert: bool,
    /// Holds the next submitted transaction until the sender fires.
    pub gate: Option<oneshot::Receiver<()>>,
    pub reads: usize,
    pub submissions: usize,
}

pub type SharedChain = Arc<Mutex<FakeChain>>;

pub fn chain(count: u8) -> SharedChain {
    Arc::new(Mutex::new(FakeChain {
        count,
        max: 10,
        ..Default::default()
    }))
}

/// Gates the next join transaction; the returned sender mines it.
pub fn gate_next_join(chain: &SharedChain) -> oneshot::Sender<()> {
    let (tx, rx) = oneshot::channel();
    chain.lock().expect("chain lock").gate = Some(rx);
    tx
}

pub struct FakeWhitelist {
    chain: SharedChain,
    sender: Address,
    access: Access,
}

#[async_trait]
impl WhitelistContract for FakeWhitelist {
    async fn num_addresses_whitelisted(&self) -> Result<u8> {
        let mut chain = self.chain.lock().expect("chain lock");
        chain.reads += 1;
        if chain.fail_reads {
            return Err(Error::RemoteReadFailure("node unreachable".to_string()));
        }
        Ok(chain.count)
    }

    async fn whitelisted_addresses(&self, address: Address) -> Result<bool> {
        let mut chain = self.chain.lock().expect("chain lock");
        chain.reads += 1;
        if chain.fail_reads {
            return Err(Error::RemoteReadFailure("node unreachable".to_string()));
        }
        Ok(chain.members.contains(&address))
    }

    async fn max_whitelisted_addresses(&self) -> Result<u8> {
        let mut chain = self.chain.lock().expect("chain lock");
        chain.reads += 1;
        if chain.fail_reads {
            return Err(Error::RemoteReadFailure("node unreachable".to_string()));
        }
        Ok(chain.max)
    }

    async fn add_address_to_whitelist(&self) -> Result<Box<dyn PendingJoin>> {
        if self.access != Access::Write {
            return Err(Error::TransactionFailure(
                "cannot send a transaction through a provider".to_string(),
            ));
        }
        let mut chain = self.chain.lock().expect("chain lock");
        if chain.reject_submission {
            return Err(Error::TransactionFailure(
                "user rejected the transaction".to_string(),
            ));
        }
        chain.submissions += 1;
        Ok(Box::new(FakePendingJoin {
            chain: Arc::clone(&self.chain),
            sender: self.sender,
            gate: chain.gate.take(),
            tx_hash: TxHash::repeat_byte(chain.submissions as u8),
        }))
    }
}

pub struct FakePendingJoin {
    chain: SharedChain,
    sender: Address,
    gate: Option<oneshot::Receiver<()>>,
    tx_hash: TxHash,
}

impl PendingJoin for FakePendingJoin {
    fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    fn wait(self: Box<Self>) -> BoxFuture<'static, Result<TxHash>> {
        let FakePendingJoin {
            chain,
            sender,
            gate,
            tx_hash,
        } = *self;
        Box::pin(async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            let mut chain = chain.lock().expect("chain lock");
            if chain.revert {
                return Err(Error::TransactionFailure("execution reverted".to_string()));
            }
            if chain.members.insert(sender) {
                chain.count += 1;
            }
            Ok(tx_hash)
        })
    }
}

pub struct FakeHandle {
    pub chain: SharedChain,
    pub chain_id: ChainId,
    pub address: Address,
    pub binds: Arc<AtomicUsize>,
}

#[async_trait]
impl WalletHandle for FakeHandle {
    async fn chain_id(&self) -> Result<ChainId> {
        Ok(self.chain_id)
    }

    async fn signer_address(&self) -> Result<Address> {
        Ok(self.address)
    }

    fn bind_whitelist(
        &self,
        _contract_address: Address,
        access: Access,
    ) -> Box<dyn WhitelistContract> {
        self.binds.fetch_add(1, Ordering::SeqCst);
        Box::new(FakeWhitelist {
            chain: Arc::clone(&self.chain),
            sender: self.address,
            access,
        })
    }
}

/// A wallet that opens sessions on a fixed chain, counting prompts.
pub struct FakeConnector {
    pub handle: Arc<FakeHandle>,
    pub prompts: Arc<AtomicUsize>,
    /// Number of prompts the user rejects before accepting.
    pub rejections: AtomicUsize,
}

impl FakeConnector {
    pub fn new(chain: &SharedChain, chain_id: ChainId) -> Self {
        Self {
            handle: Arc::new(FakeHandle {
                chain: Arc::clone(chain),
                chain_id,
                address: dummy_address(),
                binds: Arc::new(AtomicUsize::new(0)),
            }),
            prompts: Arc::new(AtomicUsize::new(0)),
            rejections: AtomicUsize::new(0),
        }
    }

    pub fn address(&self) -> Address {
        self.handle.address
    }

    pub fn binds(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.handle.binds)
    }

    pub fn prompts(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl WalletConnector for FakeConnector {
    async fn connect(&self, _config: &ConnectorConfig) -> Result<Arc<dyn WalletHandle>> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        let rejected = self
            .rejections
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if rejected {
            return Err(Error::WalletUnavailable(
                "user rejected the request".to_string(),
            ));
        }
        let handle: Arc<dyn WalletHandle> = self.handle.clone();
        Ok(handle)
    }
}

/// Collects alerts instead of showing them.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("alerts lock")
            .push(message.to_string());
    }
}
