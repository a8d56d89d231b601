// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use whitelist_evm::common::ChainId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the wallet or the whitelist contract.
///
/// None of these escape a user action: the workflow logs them and keeps its last known state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Wallet is connected to chain {actual} but chain {expected} is required")]
    WrongNetwork { expected: ChainId, actual: ChainId },
    #[error("Wallet is unavailable: {0}")]
    WalletUnavailable(String),
    #[error("Failed to read from the whitelist contract: {0}")]
    RemoteReadFailure(String),
    #[error("Whitelist transaction failed: {0}")]
    TransactionFailure(String),
}
