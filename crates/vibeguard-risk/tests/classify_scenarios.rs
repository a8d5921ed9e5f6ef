use serde_json::{json, Value};
use vibeguard_core::{
    AssetKind, BalanceChange, Direction, EffectsSummary, ObjectChangeKind, ObjectEffect,
    OwnerClass, PermissionChange, PermissionChangeKind, RawSimulation, RiskTier,
};
use vibeguard_effects::normalize;
use vibeguard_risk::{RiskClassifier, RiskSignal, RiskThresholds};

const ME: &str = "0x97b3aa00000000000000000000000000000000000000000000000000c807";
const STRANGER: &str = "0x1234567890123456789012345678901234567890123456789012345678901234";
const POOL: &str = "0x5eed000000000000000000000000000000000000000000000000000000000001";

fn dry_run(status: &str, computation: &str, balances: Value, objects: Value) -> RawSimulation {
    RawSimulation::new(json!({
        "effects": {
            "status": { "status": status },
            "gasUsed": { "computationCost": computation, "storageCost": "0", "storageRebate": "0" }
        },
        "balanceChanges": balances,
        "objectChanges": objects
    }))
}

fn reasons(signals: &[RiskSignal]) -> Vec<String> {
    signals.iter().map(|s| s.message().to_string()).collect()
}

fn change(direction: Direction, magnitude: u128, owner: OwnerClass) -> BalanceChange {
    BalanceChange {
        direction,
        magnitude,
        asset_kind: AssetKind::NativeAsset,
        owner,
    }
}

fn object(kind: ObjectChangeKind, owner: OwnerClass) -> ObjectEffect {
    ObjectEffect {
        kind,
        object_kind: "Coin".to_string(),
        owner,
    }
}

fn success() -> EffectsSummary {
    EffectsSummary {
        will_succeed: true,
        ..EffectsSummary::fail_closed()
    }
}

#[test]
fn simple_self_transfer_is_green() {
    let raw = dry_run(
        "success",
        "1000000",
        json!([{ "owner": { "AddressOwner": ME }, "coinType": "0x2::sui::SUI", "amount": "-1997880" }]),
        json!([{ "type": "mutated", "owner": { "AddressOwner": ME }, "objectType": "0x2::coin::Coin<0x2::sui::SUI>" }]),
    );
    let verdict = RiskClassifier::default().classify(&normalize(&raw, Some(ME)));

    assert_eq!(verdict.tier, RiskTier::Green);
    assert_eq!(
        verdict.reasons,
        reasons(&[
            RiskSignal::SelfTransfer,
            RiskSignal::NoOutflowToOthers,
            RiskSignal::NoPermissionChanges,
            RiskSignal::LowComplexity,
        ])
    );
    assert_eq!(verdict.confidence, 0.95);
}

#[test]
fn sending_to_third_party_is_red() {
    let raw = dry_run(
        "success",
        "1000000",
        json!([
            { "owner": { "AddressOwner": ME }, "coinType": "0x2::sui::SUI", "amount": "-100000" },
            { "owner": { "AddressOwner": STRANGER }, "coinType": "0x2::sui::SUI", "amount": "100000" }
        ]),
        json!([
            { "type": "mutated", "owner": { "AddressOwner": ME }, "objectType": "0x2::coin::Coin<0x2::sui::SUI>" },
            { "type": "created", "owner": { "AddressOwner": STRANGER }, "objectType": "0x2::coin::Coin<0x2::sui::SUI>" }
        ]),
    );
    let verdict = RiskClassifier::default().classify(&normalize(&raw, Some(ME)));

    assert_eq!(verdict.tier, RiskTier::Red);
    assert_eq!(verdict.reasons, reasons(&[RiskSignal::OutflowToOthers]));
    assert_eq!(verdict.confidence, 0.90);
}

#[test]
fn send_with_gas_folded_into_debit_is_red() {
    let raw = dry_run(
        "success",
        "1000000",
        json!([
            { "owner": { "AddressOwner": ME }, "coinType": "0x2::sui::SUI", "amount": "-2097880" },
            { "owner": { "AddressOwner": STRANGER }, "coinType": "0x2::sui::SUI", "amount": "100000" }
        ]),
        json!([]),
    );
    let verdict = RiskClassifier::default().classify(&normalize(&raw, Some(ME)));
    assert_eq!(verdict.tier, RiskTier::Red);
    assert_eq!(verdict.reasons, reasons(&[RiskSignal::OutflowToOthers]));
}

#[test]
fn failing_transaction_is_red() {
    let raw = dry_run(
        "failure",
        "1000000",
        json!([{ "owner": { "AddressOwner": ME }, "coinType": "0x2::sui::SUI", "amount": "-1000000" }]),
        json!([{ "type": "mutated", "owner": { "AddressOwner": ME }, "objectType": "0x2::coin::Coin<0x2::sui::SUI>" }]),
    );
    let verdict = RiskClassifier::default().classify(&normalize(&raw, Some(ME)));

    assert_eq!(verdict.tier, RiskTier::Red);
    assert_eq!(verdict.reasons, reasons(&[RiskSignal::WillFail]));
    assert_eq!(verdict.confidence, 0.90);
}

#[test]
fn complex_swap_through_shared_pool_is_yellow() {
    let raw = dry_run(
        "success",
        "12000000",
        json!([
            { "owner": { "AddressOwner": ME }, "coinType": "0x2::sui::SUI", "amount": "-5000000" },
            { "owner": { "AddressOwner": ME }, "coinType": "0xdba3::usdc::USDC", "amount": "4200" }
        ]),
        json!([
            { "type": "mutated", "owner": { "Shared": { "initial_shared_version": 9 } }, "objectType": "0xdee9::pool::Pool<0x2::sui::SUI, 0xdba3::usdc::USDC>" },
            { "type": "mutated", "owner": { "AddressOwner": ME }, "objectType": "0x2::coin::Coin<0x2::sui::SUI>" },
            { "type": "created", "owner": { "AddressOwner": ME }, "objectType": "0x2::coin::Coin<0xdba3::usdc::USDC>" },
            { "type": "created", "owner": { "ObjectOwner": POOL }, "objectType": "0x2::dynamic_field::Field<u64, u64>" },
            { "type": "mutated", "owner": { "ObjectOwner": POOL }, "objectType": "0xdee9::critbit::Leaf" }
        ]),
    );
    let verdict = RiskClassifier::default().classify(&normalize(&raw, Some(ME)));

    assert_eq!(verdict.tier, RiskTier::Yellow);
    assert_eq!(
        verdict.reasons,
        reasons(&[
            RiskSignal::ComplexTransaction,
            RiskSignal::ContractInteraction,
            RiskSignal::HighGasUsage,
        ])
    );
    assert_eq!(verdict.confidence, 0.80);
}

#[test]
fn missing_viewer_lowers_confidence_only() {
    let raw = dry_run(
        "success",
        "1000000",
        json!([{ "owner": { "AddressOwner": ME }, "coinType": "0x2::sui::SUI", "amount": "-1997880" }]),
        json!([{ "type": "mutated", "owner": { "AddressOwner": ME }, "objectType": "0x2::coin::Coin<0x2::sui::SUI>" }]),
    );
    let summary = normalize(&raw, None);
    assert_eq!(summary.uncertainty_notes.len(), 1);

    let verdict = RiskClassifier::default().classify(&summary);
    assert_eq!(verdict.tier, RiskTier::Green);
    assert_eq!(verdict.confidence, 0.90);
    assert!(!verdict.reasons.contains(&RiskSignal::SelfTransfer.message().to_string()));
}

#[test]
fn red_excludes_lower_tier_reasons() {
    let mut summary = EffectsSummary::fail_closed();
    summary.gas_used = 50_000_000;
    summary.object_effects = vec![
        object(ObjectChangeKind::Deleted, OwnerClass::Contract),
        object(ObjectChangeKind::Mutated, OwnerClass::You),
        object(ObjectChangeKind::Mutated, OwnerClass::You),
        object(ObjectChangeKind::Created, OwnerClass::You),
    ];
    summary.balance_changes = vec![
        change(Direction::Decrease, 9_000_000, OwnerClass::You),
        change(Direction::Increase, 9_000_000, OwnerClass::OtherAddress),
    ];

    let verdict = RiskClassifier::default().classify(&summary);
    assert_eq!(verdict.tier, RiskTier::Red);
    assert_eq!(
        verdict.reasons,
        reasons(&[RiskSignal::OutflowToOthers, RiskSignal::WillFail])
    );
}

#[test]
fn dust_outflow_below_materiality_is_not_red() {
    let mut summary = success();
    summary.balance_changes = vec![
        change(Direction::Decrease, 9_000, OwnerClass::You),
        change(Direction::Increase, 1_000, OwnerClass::OtherAddress),
    ];

    let verdict = RiskClassifier::default().classify(&summary);
    assert_eq!(verdict.tier, RiskTier::Green);
    assert_eq!(
        verdict.reasons,
        reasons(&[RiskSignal::NoPermissionChanges, RiskSignal::LowComplexity])
    );
}

#[test]
fn deletion_and_permission_changes_are_yellow() {
    let mut summary = success();
    summary.object_effects = vec![object(ObjectChangeKind::Deleted, OwnerClass::You)];
    summary.permission_changes = vec![PermissionChange {
        kind: PermissionChangeKind::Granted,
        permission: "AdminCap".to_string(),
        target: OwnerClass::OtherAddress,
    }];

    let verdict = RiskClassifier::default().classify(&summary);
    assert_eq!(verdict.tier, RiskTier::Yellow);
    assert_eq!(
        verdict.reasons,
        reasons(&[RiskSignal::ObjectDeletion, RiskSignal::PermissionChanges])
    );
}

#[test]
fn thresholds_are_configurable() {
    let mut summary = success();
    summary.gas_used = 2_000_000;

    let strict = RiskClassifier::new(RiskThresholds {
        high_gas: 1_000_000,
        ..RiskThresholds::default()
    });
    assert_eq!(strict.classify(&summary).tier, RiskTier::Yellow);
    assert_eq!(RiskClassifier::default().classify(&summary).tier, RiskTier::Green);
}

#[test]
fn more_notes_never_raise_confidence() {
    let classifier = RiskClassifier::default();
    let mut summary = success();
    let mut previous = classifier.classify(&summary);

    for i in 0..8 {
        summary.uncertainty_notes.push(format!("note {i}"));
        let verdict = classifier.classify(&summary);
        assert_eq!(verdict.tier, previous.tier);
        assert!(verdict.confidence <= previous.confidence);
        assert!(verdict.confidence >= 0.70);
        previous = verdict;
    }
    assert_eq!(previous.confidence, 0.70);
}

#[test]
fn classification_is_deterministic() {
    let mut summary = success();
    summary.balance_changes = vec![change(Direction::Decrease, 5, OwnerClass::You)];
    summary.object_effects = vec![object(ObjectChangeKind::Mutated, OwnerClass::Contract)];

    let classifier = RiskClassifier::default();
    assert_eq!(classifier.classify(&summary), classifier.classify(&summary));
}
