use claimdrop::{ClaimRequest, ErrorCode};
use claimdrop_testing::{deterministic_pubkey, DistributorSnapshot, FixtureStage, TestFixture};

/// Test that the read-only eligibility check agrees with the claim itself
///
/// **Test flow:**
/// 1. Paused distributor → can_claim is false and the claim fails with DistributorPaused
/// 2. Zero entitlement and empty proof → can_claim is false, the claim is MalformedInput
/// 3. Resumed with a genuine proof → can_claim is true and the claim succeeds
/// 4. After claiming → can_claim is false and the claim fails with AlreadyClaimed
#[test]
fn test_can_claim_matches_claim_outcome() {
    let mut test = TestFixture::new();
    test.jump_to(FixtureStage::RootPublished);

    let claimant = deterministic_pubkey("early_adopter_1");
    let claim = test.compiled_claim(&claimant);

    // 1. Paused
    test.try_pause().expect("Admin should pause");
    let paused_state = DistributorSnapshot::capture_with_claimants(&test, &[claimant]);

    assert!(!test
        .distributor
        .can_claim(&claimant, claim.entitlement, &claim.proof));
    assert_eq!(
        test.try_claim_tokens(&claimant),
        Err(ErrorCode::DistributorPaused)
    );
    assert_eq!(
        paused_state,
        DistributorSnapshot::capture_with_claimants(&test, &[claimant])
    );

    test.try_resume().expect("Admin should resume");

    // 2. Malformed requests
    assert!(!test.distributor.can_claim(&claimant, 0, &claim.proof));
    assert!(matches!(
        test.try_claim_with(ClaimRequest::new(claimant, 0, claim.proof.clone())),
        Err(ErrorCode::MalformedInput(_))
    ));

    assert!(!test.distributor.can_claim(&claimant, claim.entitlement, &[]));
    assert!(matches!(
        test.try_claim_with(ClaimRequest::new(claimant, claim.entitlement, vec![])),
        Err(ErrorCode::MalformedInput(_))
    ));

    // 3. Genuine claim
    assert!(test
        .distributor
        .can_claim(&claimant, claim.entitlement, &claim.proof));
    test.try_claim_tokens(&claimant)
        .expect("Claim should succeed once resumed");

    // 4. Already claimed
    assert!(!test
        .distributor
        .can_claim(&claimant, claim.entitlement, &claim.proof));
    assert_eq!(
        test.try_claim_tokens(&claimant),
        Err(ErrorCode::AlreadyClaimed)
    );

    println!("✅ can_claim agrees with claim_tokens");
}
