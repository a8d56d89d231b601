// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

mod common;

use common::{chain, gate_next_join, FakeConnector, RecordingNotifier, SharedChain};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use whitelist_dapp::{Action, ConnectionState, DappState, WhitelistDapp};
use whitelist_evm::utils::dummy_address;
use whitelist_evm::{Deployment, Network, RINKEBY_CHAIN_ID};
use whitelist_logging::LogBuilder;

fn dapp(connector: FakeConnector) -> (WhitelistDapp<FakeConnector>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let deployment = Deployment::new(Network::Rinkeby, dummy_address());
    let dapp = WhitelistDapp::new(connector, deployment, notifier.clone());
    (dapp, notifier)
}

fn on_target_network(chain: &SharedChain) -> FakeConnector {
    FakeConnector::new(chain, RINKEBY_CHAIN_ID)
}

#[tokio::test]
async fn page_load_shows_count_and_join_button() {
    let _log_guards = LogBuilder::init_single_threaded_tokio_test("workflow");
    let chain = chain(5);
    let (dapp, notifier) = dapp(on_target_network(&chain));

    assert_eq!(dapp.page().action, Action::ConnectWallet);
    dapp.on_page_load().await;

    let state = dapp.state();
    assert_eq!(state.connection, ConnectionState::Connected);
    assert!(!state.joined_whitelist);
    assert!(!state.loading);

    let page = dapp.page();
    assert_eq!(page.number_of_whitelisted, 5);
    assert_eq!(page.spots_left, Some(5));
    assert_eq!(page.action, Action::JoinWhitelist);
    assert!(page.action.is_interactive());
    assert!(page
        .to_string()
        .contains("5 have already joined the Whitelist"));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn pending_join_shows_loading_then_thanks() {
    let chain = chain(5);
    let (dapp, _) = dapp(on_target_network(&chain));
    let dapp = Arc::new(dapp);
    dapp.on_page_load().await;

    let mine = gate_next_join(&chain);
    let mut rx = dapp.subscribe();
    let join = tokio::spawn({
        let dapp = Arc::clone(&dapp);
        async move { dapp.add_address_to_whitelist().await }
    });

    rx.wait_for(|state| state.loading)
        .await
        .expect("state channel open");
    let page = dapp.page();
    assert_eq!(page.action, Action::Loading);
    assert!(!page.action.is_interactive());
    assert_eq!(page.number_of_whitelisted, 5);

    mine.send(()).expect("join still pending");
    join.await.expect("join task");

    let state = dapp.state();
    assert!(!state.loading);
    assert!(state.joined_whitelist);
    assert_eq!(state.number_of_whitelisted, 6);
    assert_eq!(dapp.page().action, Action::ThankYou);
    assert_eq!(chain.lock().expect("chain lock").submissions, 1);
}

#[tokio::test]
async fn wrong_network_alerts_and_binds_no_contract() {
    let chain = chain(5);
    let connector = FakeConnector::new(&chain, 1);
    let binds = connector.binds();
    let (dapp, notifier) = dapp(connector);

    dapp.on_page_load().await;

    assert_eq!(notifier.alerts(), vec!["Change the network to Rinkeby".to_string()]);
    assert_eq!(binds.load(Ordering::SeqCst), 0);
    assert_eq!(dapp.state().connection, ConnectionState::Disconnected);
    assert_eq!(dapp.page().action, Action::ConnectWallet);
    assert_eq!(chain.lock().expect("chain lock").reads, 0);
}

#[tokio::test]
async fn rejected_transaction_restores_join_button() {
    let chain = chain(5);
    let (dapp, _) = dapp(on_target_network(&chain));
    dapp.on_page_load().await;

    chain.lock().expect("chain lock").reject_submission = true;
    dapp.add_address_to_whitelist().await;

    let state = dapp.state();
    assert!(!state.loading);
    assert!(!state.joined_whitelist);
    assert_eq!(state.number_of_whitelisted, 5);
    assert_eq!(dapp.page().action, Action::JoinWhitelist);
}

#[tokio::test]
async fn reverted_join_clears_loading_without_refreshing_count() {
    let chain = chain(5);
    let (dapp, _) = dapp(on_target_network(&chain));
    dapp.on_page_load().await;

    let reads_before = {
        let mut chain = chain.lock().expect("chain lock");
        chain.revert = true;
        chain.reads
    };
    dapp.add_address_to_whitelist().await;

    let state = dapp.state();
    assert!(!state.loading);
    assert!(!state.joined_whitelist);
    assert_eq!(state.number_of_whitelisted, 5);
    assert_eq!(chain.lock().expect("chain lock").reads, reads_before);
}

#[tokio::test]
async fn whitelisted_address_sees_thanks_on_load() {
    let chain = chain(3);
    let connector = on_target_network(&chain);
    chain
        .lock()
        .expect("chain lock")
        .members
        .insert(connector.address());
    let (dapp, _) = dapp(connector);

    dapp.on_page_load().await;

    assert!(dapp.state().joined_whitelist);
    assert_eq!(dapp.page().action, Action::ThankYou);

    dapp.add_address_to_whitelist().await;
    assert_eq!(chain.lock().expect("chain lock").submissions, 0);
}

#[tokio::test]
async fn connect_is_idempotent() {
    let chain = chain(5);
    let connector = on_target_network(&chain);
    let prompts = connector.prompts();
    let (dapp, _) = dapp(connector);

    tokio::join!(dapp.connect_wallet(), dapp.connect_wallet());
    dapp.connect_wallet().await;
    dapp.on_page_load().await;

    assert_eq!(prompts.load(Ordering::SeqCst), 1);
    assert_eq!(dapp.state().connection, ConnectionState::Connected);
}

#[tokio::test]
async fn page_load_only_connects_once() {
    let chain = chain(5);
    let connector = on_target_network(&chain);
    connector.rejections.store(1, Ordering::SeqCst);
    let prompts = connector.prompts();
    let (dapp, _) = dapp(connector);

    dapp.on_page_load().await;
    dapp.on_page_load().await;

    assert_eq!(prompts.load(Ordering::SeqCst), 1);
    assert_eq!(dapp.state().connection, ConnectionState::Disconnected);
}

#[tokio::test]
async fn rejected_wallet_prompt_can_be_retried() {
    let chain = chain(5);
    let connector = on_target_network(&chain);
    connector.rejections.store(1, Ordering::SeqCst);
    let prompts = connector.prompts();
    let (dapp, _) = dapp(connector);

    dapp.connect_wallet().await;
    assert_eq!(dapp.state().connection, ConnectionState::Disconnected);
    assert!(!dapp.connection().is_session_open());

    dapp.connect_wallet().await;
    assert_eq!(prompts.load(Ordering::SeqCst), 2);
    assert_eq!(dapp.state().connection, ConnectionState::Connected);
    assert_eq!(dapp.state().number_of_whitelisted, 5);
}

#[tokio::test]
async fn failed_reads_keep_last_known_values() {
    let chain = chain(5);
    chain.lock().expect("chain lock").fail_reads = true;
    let (dapp, _) = dapp(on_target_network(&chain));

    dapp.on_page_load().await;

    let state = dapp.state();
    assert_eq!(state.connection, ConnectionState::Connected);
    assert_eq!(state.number_of_whitelisted, 0);
    assert_eq!(state.max_whitelisted, None);
    assert!(!state.joined_whitelist);
    assert_eq!(dapp.page().action, Action::JoinWhitelist);
}

#[tokio::test]
async fn duplicate_join_is_ignored_while_in_flight() {
    let chain = chain(5);
    let (dapp, _) = dapp(on_target_network(&chain));
    let dapp = Arc::new(dapp);
    dapp.on_page_load().await;

    let mine = gate_next_join(&chain);
    let mut rx = dapp.subscribe();
    let first = tokio::spawn({
        let dapp = Arc::clone(&dapp);
        async move { dapp.add_address_to_whitelist().await }
    });
    rx.wait_for(|state| state.loading)
        .await
        .expect("state channel open");

    dapp.add_address_to_whitelist().await;
    assert_eq!(chain.lock().expect("chain lock").submissions, 1);

    mine.send(()).expect("join still pending");
    first.await.expect("join task");
    assert_eq!(dapp.state().number_of_whitelisted, 6);
}

#[tokio::test]
async fn join_requires_a_connected_wallet() {
    let chain = chain(5);
    let connector = on_target_network(&chain);
    let prompts = connector.prompts();
    let (dapp, _) = dapp(connector);

    dapp.add_address_to_whitelist().await;

    assert_eq!(prompts.load(Ordering::SeqCst), 0);
    assert_eq!(chain.lock().expect("chain lock").submissions, 0);
    assert_eq!(dapp.state(), DappState::default());
}
