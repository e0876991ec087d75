pub mod batch_distribute;
pub mod claim_tokens;
pub mod reclaim_tokens;
pub mod set_active_status;
pub mod set_whitelist_status;
pub mod update_root;

pub use batch_distribute::*;
pub use claim_tokens::*;
pub use reclaim_tokens::*;
pub use set_active_status::*;
pub use set_whitelist_status::*;
pub use update_root::*;
