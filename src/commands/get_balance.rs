use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::ports::store::MemberStorePort;
use tower::Service;

use super::{DomainLogic, Error};

pub struct GetBalanceRequest {
    pub member_id: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct GetBalanceResponse {
    pub member_id: String,
    /// Current points total
    pub total_points: i64,
}

impl<S> Service<GetBalanceRequest> for DomainLogic<S>
where
    S: MemberStorePort + Send + Sync + 'static,
{
    type Response = GetBalanceResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: GetBalanceRequest) -> Self::Future {
        let store = self.store.clone();
        Box::pin(async move {
            let account = store.find_member(&req.member_id).await?;

            Ok(GetBalanceResponse {
                member_id: account.member_id,
                total_points: account.total_points,
            })
        })
    }
}
