//! Thread-safe handle around an opponent model

use crate::error::{ModelError, Result};
use crate::types::{Bid, Domain};
use std::sync::{Arc, Mutex, MutexGuard};

use super::OpponentModel;

/// Cloneable handle that serializes every model call behind one lock.
///
/// `evaluate` rewrites the weight table, so the whole model is locked for
/// each operation rather than individual tables.
pub struct SharedModel<M> {
    inner: Arc<Mutex<M>>,
}

impl<M> Clone for SharedModel<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: OpponentModel> SharedModel<M> {
    pub fn new(model: M) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, M>> {
        self.inner.lock().map_err(|_| ModelError::LockPoisoned)
    }

    pub fn name(&self) -> Result<&'static str> {
        Ok(self.lock()?.name())
    }

    pub fn initialize(&self, domain: &Domain) -> Result<()> {
        self.lock()?.initialize(domain)
    }

    pub fn observe(&self, bid: &Bid, time: f64) -> Result<()> {
        self.lock()?.observe(bid, time)
    }

    pub fn evaluate(&self, bid: &Bid) -> Result<f64> {
        self.lock()?.evaluate(bid)
    }

    /// Run `f` with exclusive access to the model
    pub fn with<R>(&self, f: impl FnOnce(&mut M) -> R) -> Result<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut *guard))
    }
}
