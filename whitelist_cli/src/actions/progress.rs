// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use std::future::Future;
use tokio::sync::watch;
use whitelist_dapp::DappState;

/// Drives `task` to completion, calling `report` on every state change that shows a
/// transaction being mined.
pub async fn report_pending<F: Future>(
    task: F,
    mut state: watch::Receiver<DappState>,
    mut report: impl FnMut(&DappState),
) -> F::Output {
    tokio::pin!(task);
    loop {
        tokio::select! {
            biased;
            Ok(()) = state.changed() => {
                let current = state.borrow_and_update().clone();
                if current.loading {
                    report(&current);
                }
            }
            output = &mut task => return output,
        }
    }
}
