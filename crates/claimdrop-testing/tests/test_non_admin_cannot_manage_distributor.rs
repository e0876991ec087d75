use claimdrop::{ErrorCode, RootUpdateKind};
use claimdrop_testing::{deterministic_pubkey, DistributorSnapshot, FixtureStage, TestFixture};

/// Test that every admin operation rejects other callers without side effects
#[test]
fn test_non_admin_cannot_manage_distributor() {
    let mut test = TestFixture::new();
    test.jump_to(FixtureStage::RootPublished);

    let intruder = deterministic_pubkey("intruder");
    let before = DistributorSnapshot::capture_with_claimants(&test, &[intruder]);
    let distributor = &mut test.distributor;

    assert_eq!(
        distributor.update_root(&intruder, [7u8; 32], 1, RootUpdateKind::Correction),
        Err(ErrorCode::Unauthorized)
    );
    assert_eq!(
        distributor.set_active_status(&intruder, false),
        Err(ErrorCode::Unauthorized)
    );
    assert_eq!(
        distributor.set_whitelist_status(&intruder, &[intruder], true),
        Err(ErrorCode::Unauthorized)
    );
    assert_eq!(
        distributor.batch_distribute(&intruder, &[intruder], &[1]),
        Err(ErrorCode::Unauthorized)
    );
    assert_eq!(
        distributor.reclaim_tokens(&intruder, &intruder),
        Err(ErrorCode::Unauthorized)
    );

    assert!(!test.distributor.is_whitelisted(&intruder));
    assert_eq!(
        before,
        DistributorSnapshot::capture_with_claimants(&test, &[intruder])
    );

    println!("✅ All admin operations rejected for non-admin caller");
}
