#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixtureStage {
    /// Whitelist has been compiled; the distributor exists with an empty vault
    #[default]
    DistributionCompiled,

    /// The vault holds the total entitlement plus a surplus
    VaultFunded,

    /// The compiled root has been published and claims are allowed
    RootPublished,
}

impl FixtureStage {
    pub fn all() -> &'static [FixtureStage] {
        &[
            FixtureStage::DistributionCompiled,
            FixtureStage::VaultFunded,
            FixtureStage::RootPublished,
        ]
    }

    /// Get the ordinal position of this stage in the progression
    pub fn ord(&self) -> u8 {
        match self {
            FixtureStage::DistributionCompiled => 0,
            FixtureStage::VaultFunded => 1,
            FixtureStage::RootPublished => 2,
        }
    }
}

impl PartialOrd for FixtureStage {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixtureStage {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ord().cmp(&other.ord())
    }
}
