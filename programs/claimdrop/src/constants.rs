/// Domain separation prefix for leaf nodes
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain separation prefix for internal nodes
pub const INTERNAL_PREFIX: u8 = 0x01;

/// Version of the leaf encoding and pair-ordering rule shared by tree builders and
/// the verifier. Bump it (and keep the old path) if `ClaimLeaf::encode` ever changes.
pub const LEAF_ENCODING_VERSION: u8 = 1;

/// Epoch number assigned to the first published root.
pub const FIRST_EPOCH: u64 = 1;
