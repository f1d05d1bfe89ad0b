//! All-or-nothing execution of a batch of store operations.
//!
//! [`run_batch`] opens one writable transaction, lends it to the caller's
//! closure and commits only if the closure returns `Ok`. Every other exit,
//! an `Err` return or a panic unwinding out of the closure, rolls the
//! transaction back. The rollback happens in a drop guard, so a panic is
//! never caught: it keeps unwinding with its original payload.

use tracing::{debug, warn};

use crate::error::{Error, Op};
use crate::traits::{StoreTransaction, TransactionalStore};

const OP: Op = "batch::run";

/// Rolls the transaction back when dropped, unless disarmed.
struct RollbackGuard<'t, X: StoreTransaction> {
    tx: &'t X,
    armed: bool,
}

impl<'t, X: StoreTransaction> RollbackGuard<'t, X> {
    fn new(tx: &'t X) -> Self {
        Self { tx, armed: true }
    }

    /// The closure returned `Ok`; leave the transaction for the commit.
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<X: StoreTransaction> Drop for RollbackGuard<'_, X> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let unwinding = std::thread::panicking();
        match self.tx.rollback() {
            Ok(()) => debug!(unwinding, "batch rolled back"),
            // Nothing to return to from here: the closure's own error (or
            // panic) is what the caller sees.
            Err(e) => warn!(unwinding, "batch rollback failed: {}", e),
        }
    }
}

/// Run `op` inside a single writable transaction of `store`.
///
/// - `op` returns `Ok(v)`: the transaction is committed and `Ok(v)` returned.
///   A failed commit yields an [`ErrorKind::TransactionFailure`](crate::ErrorKind::TransactionFailure).
/// - `op` returns `Err(e)`: the transaction is rolled back and `Err(e)`
///   returned unchanged.
/// - `op` panics: the transaction is rolled back while the panic unwinds
///   through this frame; the panic itself is not intercepted.
///
/// The transaction handle is only lent to `op` and cannot escape it.
pub fn run_batch<'s, S, T, E, F>(store: &'s S, op: F) -> Result<T, E>
where
    S: TransactionalStore + ?Sized,
    F: FnOnce(&S::Tx<'s>) -> Result<T, E>,
    E: From<Error>,
{
    let tx = store.begin_rw().map_err(|e| E::from(e.context(OP)))?;

    let guard = RollbackGuard::new(&tx);
    let value = match op(&tx) {
        Ok(value) => {
            guard.disarm();
            value
        }
        Err(e) => {
            drop(guard);
            return Err(e);
        }
    };

    tx.commit().map_err(|e| E::from(e.context(OP)))?;
    debug!("batch committed");
    Ok(value)
}
