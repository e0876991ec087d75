use claimdrop::{verify_claim, ErrorCode};
use claimdrop_sdk::WhitelistEntry;
use claimdrop_testing::{
    deterministic_pubkey, AccountChange, DistributorSnapshot, FixtureStage, TestFixture,
};

/// Test the canonical four-claimant whitelist A=100, B=200, C=300, D=400
///
/// **Test flow:**
/// 1. Compile the whitelist and publish its root
/// 2. B's compiled proof verifies statelessly; an empty proof verifies for nobody
/// 3. B claims 200, moving exactly 200 out of the vault
/// 4. Repeating B's claim fails with AlreadyClaimed and moves nothing
#[test]
fn test_four_claimant_whitelist() {
    let names = ["A", "B", "C", "D"];
    let whitelist: Vec<WhitelistEntry> = names
        .iter()
        .zip([100u64, 200, 300, 400])
        .map(|(name, amount)| WhitelistEntry::new(deterministic_pubkey(name), amount))
        .collect();

    // 1. Compile and publish
    let mut test = TestFixture::with_whitelist(&whitelist);
    test.jump_to(FixtureStage::RootPublished);
    let root = test.distribution.merkle_root;
    assert_eq!(test.distribution.leaf_count, 4);

    // 2. Stateless checks
    let b = deterministic_pubkey("B");
    let claim_b = test.compiled_claim(&b);
    assert_eq!(claim_b.proof.len(), 2);
    assert!(verify_claim(&b, 200, &claim_b.proof, &root));
    assert!(test.distributor.can_claim(&b, 200, &claim_b.proof));
    for entry in &whitelist {
        assert!(!verify_claim(&entry.address, entry.amount, &[], &root));
    }

    // 3. B claims
    let before = DistributorSnapshot::capture_with_claimants(&test, &[b]);
    let receipt = test.try_claim_tokens(&b).expect("B should be able to claim");
    let after = DistributorSnapshot::capture_with_claimants(&test, &[b]);

    assert_eq!(receipt.amount, 200);
    assert!(test.distributor.has_claimed(&b));
    before.assert_changes(
        &after,
        &[
            AccountChange::Vault { delta: -200 },
            AccountChange::Claimant {
                pubkey: b,
                delta: 200,
            },
        ],
    );

    // 4. Replay
    assert_eq!(test.try_claim_tokens(&b), Err(ErrorCode::AlreadyClaimed));
    assert_eq!(
        after,
        DistributorSnapshot::capture_with_claimants(&test, &[b])
    );

    println!("✅ Four-claimant whitelist behaves as expected");
}
