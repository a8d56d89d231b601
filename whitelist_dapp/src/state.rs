// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Everything the page shows, as last observed. Lives until the application exits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DappState {
    pub connection: ConnectionState,
    /// The connected address is on the whitelist.
    pub joined_whitelist: bool,
    /// A join transaction is waiting to be mined.
    pub loading: bool,
    /// Only ever updated from a fresh contract read.
    pub number_of_whitelisted: u8,
    /// The contract's capacity, once read.
    pub max_whitelisted: Option<u8>,
}

impl DappState {
    pub fn wallet_connected(&self) -> bool {
        self.connection == ConnectionState::Connected
    }
}
