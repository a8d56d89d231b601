// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, EthereumWallet};
use crate::utils::{http_provider_with_wallet, WriteProvider};
use crate::Network;
use alloy::hex::ToHexExt;
use alloy::network::{Ethereum, NetworkWallet};
use alloy::signers::local::{LocalSigner, PrivateKeySigner};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Private key is invalid")]
    PrivateKeyInvalid,
}

/// A signing wallet bound to the network it transacts on.
#[derive(Clone)]
pub struct Wallet {
    wallet: EthereumWallet,
    network: Network,
}

impl Wallet {
    pub fn new(network: Network, wallet: EthereumWallet) -> Self {
        Self { wallet, network }
    }

    /// Creates a new Wallet based on the given private_key. Fails with Error::PrivateKeyInvalid if
    /// the key cannot be parsed.
    pub fn new_from_private_key(network: Network, private_key: &str) -> Result<Self, Error> {
        let wallet = from_private_key(private_key)?;
        Ok(Self::new(network, wallet))
    }

    /// Returns the address of this wallet.
    pub fn address(&self) -> Address {
        wallet_address(&self.wallet)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// A provider that signs transactions with this wallet.
    pub fn to_provider(&self) -> WriteProvider {
        http_provider_with_wallet(self.network.rpc_url().clone(), self.wallet.clone())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("network", &self.network)
            .finish()
    }
}

/// Generate a random hex encoded private key, `0x` prefixed.
pub fn random_private_key() -> String {
    let signer: PrivateKeySigner = LocalSigner::random();
    signer.to_bytes().encode_hex_with_prefix()
}

/// Creates a wallet based on a private key. Accepts keys with and without `0x` prefix.
fn from_private_key(private_key: &str) -> Result<EthereumWallet, Error> {
    let signer: PrivateKeySigner = private_key.trim().parse().map_err(|err| {
        error!("Error parsing private key: {err}");
        Error::PrivateKeyInvalid
    })?;
    Ok(EthereumWallet::from(signer))
}

/// Returns the address of a wallet.
pub fn wallet_address(wallet: &EthereumWallet) -> Address {
    <EthereumWallet as NetworkWallet<Ethereum>>::default_signer_address(wallet)
}
