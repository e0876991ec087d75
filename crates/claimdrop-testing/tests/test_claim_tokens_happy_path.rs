use claimdrop::{DistributorEvent, FIRST_EPOCH};
use claimdrop_testing::{
    deterministic_pubkey, AccountChange, DistributorSnapshot, FixtureStage, TestFixture,
};

/// Test a single successful claim end to end
///
/// **Test flow:**
/// 1. Compile the default whitelist, fund the vault, publish the root
/// 2. Claim as early_adopter_1 with the compiled proof
/// 3. Verify the receipt, the balances and the emitted event
#[test]
fn test_claim_tokens_happy_path() {
    let mut test = TestFixture::new();

    // 1. Set up a claimable distribution
    test.jump_to(FixtureStage::RootPublished);

    let claimant = deterministic_pubkey("early_adopter_1");
    let entitlement = test.compiled_claim(&claimant).entitlement;
    let before = DistributorSnapshot::capture_with_claimants(&test, &[claimant]);

    // 2. Claim
    let receipt = test
        .try_claim_tokens(&claimant)
        .expect("Claim should succeed");

    println!("✅ Claimed {} for {}", receipt.amount, claimant);

    // 3. Verify receipt and balances
    assert_eq!(receipt.claimant, claimant);
    assert_eq!(receipt.amount, entitlement);
    assert_eq!(receipt.epoch, FIRST_EPOCH);
    assert_eq!(receipt.merkle_root, test.distribution.merkle_root);
    assert!(test.distributor.has_claimed(&claimant));

    let after = DistributorSnapshot::capture_with_claimants(&test, &[claimant]);
    before.assert_changes(
        &after,
        &[
            AccountChange::Vault {
                delta: -(entitlement as i64),
            },
            AccountChange::Claimant {
                pubkey: claimant,
                delta: entitlement as i64,
            },
        ],
    );
    assert_eq!(after.receipt_count, before.receipt_count + 1);

    assert_eq!(
        test.distributor.events().last(),
        Some(&DistributorEvent::Claimed {
            epoch: FIRST_EPOCH,
            claimant,
            amount: entitlement,
        })
    );
}
