use crate::domain::MemberAccount;

#[mockall::automock]
#[async_trait::async_trait]
pub trait MemberStorePort {
    /// Look up a member account by its identifier.
    async fn find_member(&self, member_id: &str) -> Result<MemberAccount, Error>;

    /// Add earned points to a member account and return the updated account.
    ///
    /// Lookup and update happen atomically with respect to other accruals on
    /// the same account.
    async fn accrue_points(
        &self,
        member_id: &str,
        earned_points: i64,
    ) -> Result<MemberAccount, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Domain-level error when a member does not exist
    #[error("member {0} does not exist")]
    MemberNotFound(String),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as connectivity, configuration, or permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
