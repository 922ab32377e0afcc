use crate::{
    domain::MemberAccount,
    ports::store::{Error, MemberStorePort},
};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory member store
///
/// The roster is fixed at construction time; lookups are a linear scan over
/// the seeded accounts.
#[derive(Clone, Debug)]
pub struct MemoryMemberStore {
    accounts: Arc<Mutex<Vec<MemberAccount>>>,
}

impl MemoryMemberStore {
    pub fn new(accounts: Vec<MemberAccount>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }
}

impl Default for MemoryMemberStore {
    fn default() -> Self {
        Self::new(crate::domain::seed_accounts())
    }
}

#[async_trait::async_trait]
impl MemberStorePort for MemoryMemberStore {
    async fn find_member(&self, member_id: &str) -> Result<MemberAccount, Error> {
        self.accounts
            .lock()?
            .iter()
            .find(|account| account.member_id == member_id)
            .cloned()
            .ok_or_else(|| Error::MemberNotFound(member_id.to_string()))
    }

    async fn accrue_points(
        &self,
        member_id: &str,
        earned_points: i64,
    ) -> Result<MemberAccount, Error> {
        // Lookup and update share one lock so concurrent accruals on the same
        // account cannot lose updates.
        let mut accounts = self.accounts.lock()?;
        let account = accounts
            .iter_mut()
            .find(|account| account.member_id == member_id)
            .ok_or_else(|| Error::MemberNotFound(member_id.to_string()))?;

        account.total_points += earned_points;

        Ok(account.clone())
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus we erase the error
/// and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

/// We need to create a custom `From` implementation here for an error that's specific to this
/// adapter.
impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}
