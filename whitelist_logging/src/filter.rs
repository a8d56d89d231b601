// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Which targets get logged, and at which level.

use crate::error::Result;
use tracing_core::Level;
use tracing_subscriber::filter::Targets;

/// Env var overriding the default targets, e.g. `WHITELIST_LOG=all,alloy=debug`.
pub const WHITELIST_LOG: &str = "WHITELIST_LOG";

/// Shorthand enabling every crate of the workspace at TRACE.
const ALL: &str = "all";

pub(crate) const WORKSPACE_CRATES: [&str; 4] = [
    "whitelist_cli",
    "whitelist_dapp",
    "whitelist_evm",
    "whitelist_logging",
];

/// The targets from `WHITELIST_LOG` when set, `defaults` otherwise.
pub(crate) fn targets_from_env(defaults: &[(String, Level)]) -> Result<Targets> {
    match std::env::var(WHITELIST_LOG) {
        Ok(value) => parse_targets(&value),
        Err(_) => Ok(Targets::new().with_targets(defaults.iter().cloned())),
    }
}

/// Parses comma separated `target=level` directives. A bare target logs at TRACE.
///
/// The `all` keyword adds the workspace crates at TRACE, unless a directive names them.
pub(crate) fn parse_targets(value: &str) -> Result<Targets> {
    let mut directives = Vec::new();
    let mut all = false;
    for directive in value.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if directive == ALL {
            all = true;
        } else {
            directives.push(directive);
        }
    }

    let mut targets = if directives.is_empty() {
        Targets::new()
    } else {
        directives.join(",").parse::<Targets>()?
    };
    if all {
        let named = |name: &str| {
            directives
                .iter()
                .any(|directive| directive.split('=').next() == Some(name))
        };
        targets = targets.with_targets(
            WORKSPACE_CRATES
                .into_iter()
                .filter(|name| !named(name))
                .map(|name| (name, Level::TRACE)),
        );
    }
    Ok(targets)
}
