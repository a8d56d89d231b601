// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::state::{ConnectionState, DappState};
use std::fmt;

pub const TITLE: &str = "Welcome to Crypto Devs!";
pub const DESCRIPTION: &str = "Its an NFT collection for developers in Crypto.";

/// The single call to action shown under the whitelist count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ThankYou,
    Loading,
    JoinWhitelist,
    ConnectWallet,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::ThankYou => "Thanks for joining the Whitelist!",
            Action::Loading => "Loading...",
            Action::JoinWhitelist => "Join the Whitelist",
            Action::ConnectWallet => "Connect your wallet",
        }
    }

    /// Whether the user can act on it.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Action::JoinWhitelist | Action::ConnectWallet)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub number_of_whitelisted: u8,
    pub spots_left: Option<u8>,
    pub action: Action,
}

/// Renders the page for `state`.
///
/// Precedence: joined, then a pending join, then the join button; the connect button
/// whenever the wallet is not connected.
pub fn render(state: &DappState) -> Page {
    let action = match state.connection {
        ConnectionState::Connected if state.joined_whitelist => Action::ThankYou,
        ConnectionState::Connected if state.loading => Action::Loading,
        ConnectionState::Connected => Action::JoinWhitelist,
        ConnectionState::Disconnected | ConnectionState::Connecting => Action::ConnectWallet,
    };

    Page {
        number_of_whitelisted: state.number_of_whitelisted,
        spots_left: state
            .max_whitelisted
            .map(|max| max.saturating_sub(state.number_of_whitelisted)),
        action,
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{DESCRIPTION}")?;
        writeln!(
            f,
            "{} have already joined the Whitelist",
            self.number_of_whitelisted
        )?;
        if let Some(spots_left) = self.spots_left {
            writeln!(f, "{spots_left} spots left")?;
        }
        match self.action {
            Action::ThankYou => write!(f, "{}", self.action.label()),
            Action::Loading => write!(f, "({})", self.action.label()),
            Action::JoinWhitelist | Action::ConnectWallet => {
                write!(f, "[ {} ]", self.action.label())
            }
        }
    }
}
