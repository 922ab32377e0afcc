use std::sync::Arc;

pub mod accrue_points;
pub mod get_balance;

pub struct DomainLogic<S> {
    store: Arc<S>,
}

impl<S> DomainLogic<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> Clone for DomainLogic<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("member store port error: {0:?}")]
    Store(#[from] crate::ports::store::Error),
}
