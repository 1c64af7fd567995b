// Fee conversion against a deterministic router contract that swaps at a
// fixed price out of its own EGLD reserve.

use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::scenario_model::Log;

use mock_router::MockRouter;
use policy_token::{
    ledger::LedgerModule, liquidity::LiquidityModule, registry::PolicyRegistryModule, PolicyToken,
};

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const CAROL: TestAddress = TestAddress::new("carol");
const MARKETING: TestAddress = TestAddress::new("marketing");
const STAKING: TestAddress = TestAddress::new("staking");
const PAIR: TestAddress = TestAddress::new("pair");
const STALE_PAIR: TestAddress = TestAddress::new("stale-pair");
const BASE_ASSET: TestAddress = TestAddress::new("wegld");

const TOKEN: TestSCAddress = TestSCAddress::new("policy-token");
const ROUTER: TestSCAddress = TestSCAddress::new("mock-router");
const TOKEN_CODE: MxscPath = MxscPath::new("output/policy-token.mxsc.json");
const ROUTER_CODE: MxscPath = MxscPath::new("test-contracts/mock-router/output/mock-router.mxsc.json");

const ROUTER_RESERVE: u64 = 1_000_000;
const BASE_PER_TOKEN: u64 = 2;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(TOKEN_CODE, policy_token::ContractBuilder);
    blockchain.register_contract(ROUTER_CODE, mock_router::ContractBuilder);
    blockchain
}

fn managed(address: TestAddress) -> ManagedAddress<DebugApi> {
    ManagedAddress::from_address(&address.to_address())
}

fn managed_sc(address: TestSCAddress) -> ManagedAddress<DebugApi> {
    ManagedAddress::from_address(&address.to_address())
}

/// Router funded and deployed, token deployed against it with trading open,
/// and Alice holding 10_000 tokens.
fn setup(token_pair: TestAddress) -> ScenarioWorld {
    let mut world = world();
    world.account(OWNER).nonce(1).balance(ROUTER_RESERVE);
    for account in [ALICE, BOB, CAROL] {
        world.account(account).nonce(1);
    }

    world
        .tx()
        .from(OWNER)
        .raw_deploy()
        .code(ROUTER_CODE)
        .new_address(ROUTER)
        .whitebox(mock_router::contract_obj, |sc| {
            sc.init(managed(PAIR), managed(BASE_ASSET), BASE_PER_TOKEN);
        });
    world
        .tx()
        .from(OWNER)
        .to(ROUTER)
        .egld(ROUTER_RESERVE)
        .whitebox(mock_router::contract_obj, |sc| sc.fund());

    world
        .tx()
        .from(OWNER)
        .raw_deploy()
        .code(TOKEN_CODE)
        .new_address(TOKEN)
        .whitebox(policy_token::contract_obj, move |sc| {
            sc.init(
                BigUint::from(1_000_000u64),
                managed(MARKETING),
                managed(STAKING),
                managed_sc(ROUTER),
                managed(token_pair),
                managed(BASE_ASSET),
            );
        });
    world
        .tx()
        .from(OWNER)
        .to(TOKEN)
        .whitebox(policy_token::contract_obj, |sc| sc.enable_trading());

    transfer(&mut world, OWNER, ALICE, 10_000);
    world
}

fn transfer(world: &mut ScenarioWorld, from: TestAddress, to: TestAddress, amount: u64) {
    world
        .tx()
        .from(from)
        .to(TOKEN)
        .whitebox(policy_token::contract_obj, move |sc| {
            sc.transfer(managed(to), BigUint::from(amount));
        });
}

fn convert(world: &mut ScenarioWorld) -> Vec<Log> {
    world
        .tx()
        .from(CAROL)
        .to(TOKEN)
        .returns(ReturnsLogs)
        .whitebox(policy_token::contract_obj, |sc| sc.convert_fees())
}

fn check_token_balance(world: &mut ScenarioWorld, account: Address, expected: u64) {
    world
        .query()
        .to(TOKEN)
        .whitebox(policy_token::contract_obj, move |sc| {
            let account = ManagedAddress::from_address(&account);
            assert_eq!(sc.balance_of(&account), BigUint::from(expected));
        });
}

fn logs_named<'a>(logs: &'a [Log], identifier: &[u8]) -> Vec<&'a Log> {
    logs.iter()
        .filter(|log| log.topics.first().map(Vec::as_slice) == Some(identifier))
        .collect()
}

fn encoded(value: u64) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(&value)
}

#[test]
fn test_convert_odd_balance_deposits_remainder_half() {
    let mut world = setup(PAIR);
    // 3% of 1_100 leaves 33 on the contract
    transfer(&mut world, ALICE, BOB, 1_100);
    check_token_balance(&mut world, TOKEN.to_address(), 33);

    let logs = convert(&mut world);

    // 16 swapped, the remaining 17 deposited alongside 32 EGLD
    check_token_balance(&mut world, TOKEN.to_address(), 0);
    check_token_balance(&mut world, ROUTER.to_address(), 16);
    check_token_balance(&mut world, PAIR.to_address(), 17);

    world
        .query()
        .to(TOKEN)
        .whitebox(policy_token::contract_obj, |sc| {
            let egld = sc
                .blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
            assert_eq!(egld, BigUint::zero());
            assert_eq!(sc.get_router_allowance(), BigUint::zero());
            assert!(!sc.converting().get());
        });

    world
        .query()
        .to(ROUTER)
        .whitebox(mock_router::contract_obj, |sc| {
            assert_eq!(sc.swapped_tokens().get(), BigUint::from(16u64));
            assert_eq!(sc.deposited_tokens().get(), BigUint::from(17u64));
            assert_eq!(sc.deposited_base().get(), BigUint::from(32u64));
            // pool units go to the owner, not to whoever triggered it
            assert_eq!(sc.pool_units(&managed(OWNER)).get(), BigUint::from(17u64));
            assert_eq!(sc.pool_units(&managed(CAROL)).get(), BigUint::zero());
        });
    world.check_account(ROUTER).balance(ROUTER_RESERVE);

    let converted = logs_named(&logs, b"liquidityConverted");
    assert_eq!(converted.len(), 1);
    assert_eq!(converted[0].topics[1], encoded(16));
    assert_eq!(converted[0].topics[2], encoded(32));
    assert_eq!(converted[0].data, vec![encoded(17)]);

    // each router pull moved exactly its leg out of the contract
    let token_bytes = TOKEN.to_address().as_bytes().to_vec();
    let pulls: Vec<(Vec<u8>, Vec<u8>)> = logs_named(&logs, b"transfer")
        .into_iter()
        .filter(|log| log.topics[1] == token_bytes)
        .map(|log| (log.topics[2].clone(), log.data[0].clone()))
        .collect();
    assert_eq!(
        pulls,
        vec![
            (ROUTER.to_address().as_bytes().to_vec(), encoded(16)),
            (PAIR.to_address().as_bytes().to_vec(), encoded(17)),
        ]
    );
}

#[test]
fn test_convert_even_balance_splits_evenly() {
    let mut world = setup(PAIR);
    // 3% of 1_000 leaves 30 on the contract
    transfer(&mut world, ALICE, BOB, 1_000);

    convert(&mut world);

    check_token_balance(&mut world, TOKEN.to_address(), 0);
    check_token_balance(&mut world, ROUTER.to_address(), 15);
    check_token_balance(&mut world, PAIR.to_address(), 15);
    world
        .query()
        .to(ROUTER)
        .whitebox(mock_router::contract_obj, |sc| {
            assert_eq!(sc.deposited_base().get(), BigUint::from(30u64));
        });

    // nothing left to convert: a second run changes nothing
    let logs = convert(&mut world);
    assert!(logs_named(&logs, b"liquidityConverted").is_empty());
    check_token_balance(&mut world, PAIR.to_address(), 15);
}

#[test]
fn test_convert_leaves_single_unit_held() {
    let mut world = setup(PAIR);
    // 3% of 34 truncates to a single unit
    transfer(&mut world, ALICE, BOB, 34);
    check_token_balance(&mut world, TOKEN.to_address(), 1);

    let logs = convert(&mut world);

    assert!(logs.is_empty());
    check_token_balance(&mut world, TOKEN.to_address(), 1);
    check_token_balance(&mut world, ROUTER.to_address(), 0);
    world.check_account(ROUTER).balance(ROUTER_RESERVE);
}

#[test]
fn test_sync_pool_addresses_reads_router() {
    let mut world = setup(STALE_PAIR);

    world
        .tx()
        .from(OWNER)
        .to(TOKEN)
        .whitebox(policy_token::contract_obj, |sc| sc.sync_pool_addresses());

    world
        .query()
        .to(TOKEN)
        .whitebox(policy_token::contract_obj, |sc| {
            let (router, pair, base) = sc.get_pool_config().into_tuple();
            assert_eq!(router, managed_sc(ROUTER));
            assert_eq!(pair, managed(PAIR));
            assert_eq!(base, managed(BASE_ASSET));
        });
}

#[test]
fn test_sync_pool_addresses_only_owner() {
    let mut world = setup(STALE_PAIR);

    world
        .tx()
        .from(ALICE)
        .to(TOKEN)
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .whitebox(policy_token::contract_obj, |sc| sc.sync_pool_addresses());
}
