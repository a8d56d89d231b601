use whitelist_evm::utils::{evm_network_from_vars, parse_contract_address, Error};
use whitelist_evm::{CustomNetwork, Network, RINKEBY_CHAIN_ID};

#[test]
fn rinkeby_is_the_default_target() {
    let network = evm_network_from_vars(None, None, None).unwrap();

    assert_eq!(network, Network::Rinkeby);
    assert_eq!(network.chain_id(), RINKEBY_CHAIN_ID);
    assert_eq!(network.chain_id(), 4);
    assert_eq!(network.display_name(), "Rinkeby");
}

#[test]
fn rinkeby_endpoint_can_be_replaced() {
    let expected = Network::Custom(CustomNetwork::new("http://localhost:8545", 4).unwrap());

    let explicit =
        evm_network_from_vars(Some("rinkeby"), Some("http://localhost:8545"), Some("31337"))
            .unwrap();
    let implicit = evm_network_from_vars(None, Some("http://localhost:8545"), None).unwrap();

    assert_eq!(explicit, expected);
    assert_eq!(implicit, expected);
    assert_eq!(implicit.chain_id(), RINKEBY_CHAIN_ID);
    assert_eq!(implicit.display_name(), "Rinkeby");
}

#[test]
fn custom_network_from_rpc_url_and_chain_id() {
    let network =
        evm_network_from_vars(None, Some("http://localhost:8545"), Some("31337")).unwrap();

    let expected = Network::Custom(CustomNetwork::new("http://localhost:8545", 31337).unwrap());
    assert_eq!(network, expected);
    assert_eq!(network.chain_id(), 31337);
    assert_eq!(network.rpc_url().as_str(), "http://localhost:8545/");
    assert_eq!(network.display_name(), "the network with chain id 31337");
}

#[test]
fn custom_network_requires_both_vars() {
    let result = evm_network_from_vars(Some("custom"), Some("http://localhost:8545"), None);

    assert!(matches!(result, Err(Error::FailedToGetEvmNetwork(_))));
}

#[test]
fn invalid_chain_id_is_rejected() {
    let result = evm_network_from_vars(None, Some("http://localhost:8545"), Some("four"));

    assert!(matches!(result, Err(Error::FailedToGetEvmNetwork(_))));
}

#[test]
fn unknown_network_name_is_rejected() {
    let result = evm_network_from_vars(Some("mainnet"), None, None);

    assert!(matches!(result, Err(Error::FailedToGetEvmNetwork(_))));
}

#[test]
fn contract_address_parsing() {
    let address = parse_contract_address(" 0x5FbDB2315678afecb367f032d93F642f64180aa3 ").unwrap();
    assert_eq!(
        address.to_string(),
        "0x5FbDB2315678afecb367f032d93F642f64180aa3"
    );

    assert!(matches!(
        parse_contract_address("not-an-address"),
        Err(Error::InvalidContractAddress(_))
    ));
}
