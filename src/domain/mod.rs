/// A member's loyalty account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberAccount {
    /// Unique identifier for the member
    ///
    /// This is also the key clients use on the HTTP API.
    pub member_id: String,
    /// Current points balance
    ///
    /// Unbounded above. The lower bound of zero is a convention rather than
    /// an enforced invariant, so the total is signed.
    pub total_points: i64,
}

impl MemberAccount {
    pub fn new(member_id: impl Into<String>, total_points: i64) -> Self {
        Self {
            member_id: member_id.into(),
            total_points,
        }
    }
}

/// Points granted to every account at startup.
pub const SEED_POINTS: i64 = 1000;

/// The fixed membership roster.
///
/// There is no registration at runtime; these are the only accounts the
/// service knows about.
pub fn seed_accounts() -> Vec<MemberAccount> {
    ["SPU0001", "SPU0002", "SPU0003", "SPU0004", "SPU0005"]
        .into_iter()
        .map(|member_id| MemberAccount::new(member_id, SEED_POINTS))
        .collect()
}
