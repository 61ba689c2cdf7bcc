//! Single-flight session refresh coordination.
//!
//! Every protected call runs through [`RefreshCoordinator::execute`]. The
//! first caller to observe a 401 becomes the *leader*: it performs the one
//! refresh for the current window. Callers whose 401 arrives while that
//! refresh is in flight are queued and released once it settles. A
//! successful refresh replays every queued request plus the leader's own;
//! a failed refresh rejects them all with `SessionExpired` and clears the
//! local session store.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::{Mutex, oneshot};
use tracing::{debug, info, warn};

use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;

use crate::response::ClientResponse;
use crate::transport::SessionTransport;

type BoxRequest = Box<dyn FnOnce() -> BoxFuture<'static, AppResult<ClientResponse>> + Send>;

/// Coordinator mode. There is no terminal state; the coordinator lives for
/// the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Refreshing,
}

/// A caller parked while a refresh is in flight.
struct Waiter {
    /// Captured request, re-invoked once the refresh settles.
    retry: BoxRequest,
    /// Channel the waiter's `execute` call is blocked on.
    done: oneshot::Sender<AppResult<ClientResponse>>,
}

/// Mode flag and waiter queue. Guarded by one lock so the check-and-set
/// and the enqueue are atomic even on a multi-threaded runtime; without
/// this, two callers could both observe `Idle` and double-issue the
/// refresh.
struct CoordinatorState {
    mode: Mode,
    waiters: VecDeque<Waiter>,
}

/// What `execute` decided to do about a 401, under the state lock.
enum Role {
    Leader,
    Follower(oneshot::Receiver<AppResult<ClientResponse>>),
}

/// Client-side single-flight refresh controller.
///
/// One instance per client process owns the mode flag and waiter queue
/// exclusively; no other component reads or writes them.
pub struct RefreshCoordinator {
    transport: Arc<dyn SessionTransport>,
    state: Mutex<CoordinatorState>,
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator").finish()
    }
}

impl RefreshCoordinator {
    /// Creates a coordinator over the given session transport.
    pub fn new(transport: Arc<dyn SessionTransport>) -> Self {
        Self {
            transport,
            state: Mutex::new(CoordinatorState {
                mode: Mode::Idle,
                waiters: VecDeque::new(),
            }),
        }
    }

    /// Runs a request, transparently recovering from an expired access
    /// token.
    ///
    /// The fast path returns any non-401 outcome untouched, transport
    /// errors included. On a 401 the caller either leads the refresh or
    /// queues behind the one in flight; either way it resolves exactly
    /// once. Waiters are released in enqueue order, each with the result
    /// of its own replayed request; completion order is not promised.
    ///
    /// A 401 on the post-refresh replay is returned as-is: only the first
    /// authorization failure per caller is intercepted.
    pub async fn execute<F, Fut>(&self, build_request: F) -> AppResult<ClientResponse>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AppResult<ClientResponse>> + Send + 'static,
    {
        let request = Arc::new(build_request);

        let first = (*request)().await?;
        if !first.is_unauthorized() {
            return Ok(first);
        }

        let role = {
            let mut state = self.state.lock().await;
            match state.mode {
                Mode::Idle => {
                    state.mode = Mode::Refreshing;
                    Role::Leader
                }
                Mode::Refreshing => {
                    let (tx, rx) = oneshot::channel();
                    let retry = Arc::clone(&request);
                    state.waiters.push_back(Waiter {
                        retry: Box::new(move || {
                            let fut: BoxFuture<'static, AppResult<ClientResponse>> =
                                Box::pin((*retry)());
                            fut
                        }),
                        done: tx,
                    });
                    debug!(queued = state.waiters.len(), "Queued behind in-flight refresh");
                    Role::Follower(rx)
                }
            }
        };

        match role {
            Role::Follower(rx) => rx
                .await
                .map_err(|_| AppError::internal("Refresh coordinator dropped a queued request"))?,
            Role::Leader => match self.transport.refresh().await {
                Ok(()) => {
                    let waiters = self.settle().await;
                    info!(waiters = waiters.len(), "Session refreshed, replaying requests");
                    for waiter in waiters {
                        // Released in enqueue order; each resolves with its
                        // own result, independently of the others.
                        tokio::spawn(async move {
                            let result = (waiter.retry)().await;
                            let _ = waiter.done.send(result);
                        });
                    }
                    (*request)().await
                }
                Err(err) => {
                    let waiters = self.settle().await;
                    warn!(error = %err, waiters = waiters.len(), "Refresh failed, ending session");
                    self.transport.clear_session().await;
                    let expired = AppError::session_expired("Session expired");
                    for waiter in waiters {
                        let _ = waiter.done.send(Err(expired.clone()));
                    }
                    Err(expired)
                }
            },
        }
    }

    /// Returns to `Idle` and takes ownership of the queued waiters.
    async fn settle(&self) -> VecDeque<Waiter> {
        let mut state = self.state.lock().await;
        state.mode = Mode::Idle;
        std::mem::take(&mut state.waiters)
    }
}
