// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! A wallet-connected front end for a whitelist contract.
//!
//! [`WhitelistDapp`] drives the page: it opens a wallet session through a [`WalletConnector`],
//! checks the wallet is on the target network, reads the whitelist membership and count, and
//! submits the join transaction. The page itself is a pure function of [`DappState`], see
//! [`render`].
//!
//! The `evm` module provides the seams backed by an EVM JSON-RPC endpoint.

#[macro_use]
extern crate tracing;

pub mod connection;
mod error;
pub mod evm;
pub mod state;
pub mod view;
pub mod wallet;
mod workflow;

pub use connection::{Accessor, ConnectionManager};
pub use error::{Error, Result};
pub use state::{ConnectionState, DappState};
pub use view::{render, Action, Page};
pub use wallet::{
    Access, ConnectorConfig, Notifier, PendingJoin, WalletConnector, WalletHandle,
    WhitelistContract,
};
pub use workflow::WhitelistDapp;
