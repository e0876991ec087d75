use claimdrop::{ClaimRequest, ErrorCode};
use claimdrop_testing::{deterministic_pubkey, DistributorSnapshot, FixtureStage, TestFixture};

/// Test that forged claims are rejected
///
/// Covers the ways a claimant can tamper with a compiled claim:
/// - Inflated entitlement
/// - Another claimant's proof
/// - Flipped bit in a sibling hash
/// - Unlisted address reusing a listed claimant's proof
#[test]
fn test_claim_invalid_merkle_proof() {
    let mut test = TestFixture::new();
    test.jump_to(FixtureStage::RootPublished);

    let claimant = deterministic_pubkey("early_adopter_2");
    let other = deterministic_pubkey("power_user_1");
    let outsider = deterministic_pubkey("not_on_the_list");
    let claim = test.compiled_claim(&claimant);

    let before = DistributorSnapshot::capture_with_claimants(&test, &[claimant, outsider]);

    // Inflated entitlement
    let inflated = ClaimRequest::new(claimant, claim.entitlement + 1, claim.proof.clone());
    assert_eq!(test.try_claim_with(inflated), Err(ErrorCode::InvalidProof));

    // Another claimant's proof
    let borrowed = ClaimRequest::new(
        claimant,
        claim.entitlement,
        test.compiled_claim(&other).proof,
    );
    assert_eq!(test.try_claim_with(borrowed), Err(ErrorCode::InvalidProof));

    // Tampered sibling
    let mut tampered_proof = claim.proof.clone();
    tampered_proof[0][31] ^= 0x01;
    let tampered = ClaimRequest::new(claimant, claim.entitlement, tampered_proof);
    assert_eq!(test.try_claim_with(tampered), Err(ErrorCode::InvalidProof));

    // Unlisted address
    let stolen = ClaimRequest::new(outsider, claim.entitlement, claim.proof.clone());
    assert_eq!(test.try_claim_with(stolen), Err(ErrorCode::InvalidProof));

    assert_eq!(
        before,
        DistributorSnapshot::capture_with_claimants(&test, &[claimant, outsider]),
        "Rejected claims must not change any state"
    );

    // The genuine claim still works afterwards
    test.try_claim_tokens(&claimant)
        .expect("Genuine claim should succeed after rejected forgeries");

    println!("✅ All forged claims rejected, genuine claim accepted");
}
