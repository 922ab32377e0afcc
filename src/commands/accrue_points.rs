use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::ports::store::MemberStorePort;
use tower::Service;

use super::{DomainLogic, Error};

/// Points granted per full accrual block.
const POINTS_PER_BLOCK: i64 = 10;
/// Currency units per accrual block.
const BLOCK_SIZE: f64 = 100.0;

pub struct AccruePointsRequest {
    pub member_id: String,
    /// Amount paid, in currency units
    pub amount_paid: f64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AccruePointsResponse {
    pub member_id: String,
    /// Points earned by this accrual
    pub earned_points: i64,
    /// New points total after the accrual
    pub total_points: i64,
}

impl<S> Service<AccruePointsRequest> for DomainLogic<S>
where
    S: MemberStorePort + Send + Sync + 'static,
{
    type Response = AccruePointsResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: AccruePointsRequest) -> Self::Future {
        let store = self.store.clone();
        Box::pin(async move {
            let earned_points = earned_points(req.amount_paid);

            // Store the accrual and fetch the updated total
            let account = store.accrue_points(&req.member_id, earned_points).await?;

            // Return the response
            Ok(AccruePointsResponse {
                member_id: account.member_id,
                earned_points,
                total_points: account.total_points,
            })
        })
    }
}

/// Points earned for a payment amount
///
/// Every full block of 100 currency units is worth 10 points; fractional
/// remainders are discarded.
fn earned_points(amount_paid: f64) -> i64 {
    (amount_paid / BLOCK_SIZE).floor() as i64 * POINTS_PER_BLOCK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::store::memory::MemoryMemberStore,
        domain::{MemberAccount, SEED_POINTS},
        ports::store::{self, MockMemberStorePort},
    };
    use rstest::*;
    use speculoos::prelude::*;
    use std::sync::Arc;
    use tower::{BoxError, ServiceExt};

    /// Whole blocks earn points, remainders are discarded
    #[rstest]
    #[case(250.0, 20)]
    #[case(100.0, 10)]
    #[case(199.99, 10)]
    #[case(99.0, 0)]
    #[case(0.0, 0)]
    #[case(1050.5, 100)]
    fn test_earned_points(#[case] amount_paid: f64, #[case] expected: i64) {
        // GIVEN a payment amount

        // WHEN computing the earned points
        let res = earned_points(amount_paid);

        // THEN it should match the expected points amount
        assert_that!(res).is_equal_to(expected);
    }

    #[fixture]
    fn member_id() -> String {
        "SPU0001".to_string()
    }

    #[rstest]
    #[tokio::test]
    async fn test_call(member_id: String) -> Result<(), BoxError> {
        // GIVEN a store with the seeded roster
        let store = MemoryMemberStore::default();
        let mut domain = DomainLogic::new(Arc::new(store));

        // WHEN calling the service
        let req = AccruePointsRequest {
            member_id: member_id.clone(),
            amount_paid: 250.0,
        };
        let res = ServiceExt::<AccruePointsRequest>::ready(&mut domain)
            .await?
            .call(req)
            .await;

        // THEN the account is credited with the earned points
        assert_that!(res).is_ok().is_equal_to(AccruePointsResponse {
            member_id,
            earned_points: 20,
            total_points: SEED_POINTS + 20,
        });

        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn test_call_mocked_store(member_id: String) -> Result<(), BoxError> {
        // GIVEN a store port expecting a 20-point accrual
        let mut store = MockMemberStorePort::new();
        let expected_id = member_id.clone();
        store
            .expect_accrue_points()
            .times(1)
            .withf(move |id, earned| id == expected_id && *earned == 20)
            .returning(|id, earned| Ok(MemberAccount::new(id, SEED_POINTS + earned)));
        let mut domain = DomainLogic::new(Arc::new(store));

        // WHEN calling the service
        let req = AccruePointsRequest {
            member_id: member_id.clone(),
            amount_paid: 250.0,
        };
        let res = ServiceExt::<AccruePointsRequest>::ready(&mut domain)
            .await?
            .call(req)
            .await;

        // THEN
        // * It returns a valid response
        // * The store port is called exactly once
        assert_that!(res).is_ok().is_equal_to(AccruePointsResponse {
            member_id,
            earned_points: 20,
            total_points: SEED_POINTS + 20,
        });
        Arc::into_inner(domain.store).unwrap().checkpoint();

        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn test_call_unknown_member() -> Result<(), BoxError> {
        // GIVEN a store with the seeded roster
        let store = MemoryMemberStore::default();
        let mut domain = DomainLogic::new(Arc::new(store));

        // WHEN calling the service for a member outside the roster
        let req = AccruePointsRequest {
            member_id: "SPU9999".to_string(),
            amount_paid: 500.0,
        };
        let res = ServiceExt::<AccruePointsRequest>::ready(&mut domain)
            .await?
            .call(req)
            .await;

        // THEN it should report the missing member
        assert_that!(res).is_err().matches(|err| {
            matches!(err, Error::Store(store::Error::MemberNotFound(id)) if id == "SPU9999")
        });

        Ok(())
    }
}
