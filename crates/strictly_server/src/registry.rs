//! Process-wide session registry.

use derive_more::Display;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use strictly_boggle::{
    AttemptOutcome, BoardGenerator, Coordinate, Dictionary, GameSession, SessionSnapshot,
};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Registry lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RegistryError {
    /// No session with this id exists, or it was evicted.
    #[display("Session {} not found", _0)]
    NotFound(SessionId),
}

impl std::error::Error for RegistryError {}

/// Bounds on how many sessions are kept and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_new::new)]
pub struct RegistryLimits {
    /// Most sessions held at once. `None` is unbounded.
    pub max_sessions: Option<usize>,
    /// Idle time after which a session may be evicted. `None` keeps sessions
    /// forever.
    pub idle_ttl: Option<Duration>,
}

#[derive(Debug)]
struct SessionSlot {
    session: Mutex<GameSession>,
    last_access: Mutex<Instant>,
}

impl SessionSlot {
    fn new(session: GameSession) -> Self {
        Self {
            session: Mutex::new(session),
            last_access: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        *self.last_access.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }

    fn last_access(&self) -> Instant {
        *self.last_access.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive access to one session.
///
/// Holding the guard returned by [`SessionHandle::lock`] blocks other
/// mutations of the same session, but no other session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: SessionId,
    slot: Arc<SessionSlot>,
}

impl SessionHandle {
    /// The session's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Locks the session for reading or mutation.
    pub fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.slot
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
struct RegistryInner {
    sessions: Mutex<HashMap<SessionId, Arc<SessionSlot>>>,
    dictionary: Arc<Dictionary>,
    boards: Box<dyn BoardGenerator>,
    limits: RegistryLimits,
}

/// Maps session ids to games.
///
/// Cheap to clone; clones share the same sessions. The map lock is only held
/// for insert, lookup and eviction, while word attempts run under the
/// per-session lock.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    inner: Arc<RegistryInner>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[instrument(skip(dictionary, boards), fields(words = dictionary.len()))]
    pub fn new(
        dictionary: Arc<Dictionary>,
        boards: impl BoardGenerator + 'static,
        limits: RegistryLimits,
    ) -> Self {
        info!(?limits, "Creating session registry");
        Self {
            inner: Arc::new(RegistryInner {
                sessions: Mutex::new(HashMap::new()),
                dictionary,
                boards: Box::new(boards),
                limits,
            }),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, Arc<SessionSlot>>> {
        self.inner
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a new game and returns its id and initial state.
    #[instrument(skip(self))]
    pub fn create(&self) -> (SessionId, SessionSnapshot) {
        let session = GameSession::new(self.inner.boards.next_board(), self.inner.dictionary.clone());
        let snapshot = session.snapshot();

        let mut sessions = self.sessions();
        self.make_room(&mut sessions);

        let mut id = new_session_id();
        while sessions.contains_key(&id) {
            warn!(session_id = %id, "Session id collision, regenerating");
            id = new_session_id();
        }

        sessions.insert(id.clone(), Arc::new(SessionSlot::new(session)));
        info!(session_id = %id, active = sessions.len(), "Created new session");
        (id, snapshot)
    }

    /// Looks up a session and marks it as recently used.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<SessionHandle, RegistryError> {
        let sessions = self.sessions();
        let slot = sessions.get(id).cloned().ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            RegistryError::NotFound(id.to_string())
        })?;
        slot.touch();
        Ok(SessionHandle {
            id: id.to_string(),
            slot,
        })
    }

    /// Submits a traced path to a session.
    #[instrument(skip(self, path), fields(len = path.len()))]
    pub fn attempt(
        &self,
        id: &str,
        path: &[Coordinate],
    ) -> Result<AttemptOutcome, RegistryError> {
        let handle = self.get(id)?;
        let outcome = handle.lock().attempt_word(path);
        Ok(outcome)
    }

    /// Returns a session's current board, score and words.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<SessionSnapshot, RegistryError> {
        let handle = self.get(id)?;
        let snapshot = handle.lock().snapshot();
        Ok(snapshot)
    }

    /// Removes every session idle for at least the configured TTL.
    ///
    /// Returns the number of sessions removed.
    #[instrument(skip(self))]
    pub fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions();
        let evicted = self.evict_idle_locked(&mut sessions);
        if evicted > 0 {
            info!(evicted, active = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    fn evict_idle_locked(&self, sessions: &mut HashMap<SessionId, Arc<SessionSlot>>) -> usize {
        let Some(ttl) = self.inner.limits.idle_ttl else {
            return 0;
        };
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, slot| now.saturating_duration_since(slot.last_access()) < ttl);
        before - sessions.len()
    }

    /// Frees a slot for a new session when at capacity.
    fn make_room(&self, sessions: &mut HashMap<SessionId, Arc<SessionSlot>>) {
        let Some(max) = self.inner.limits.max_sessions else {
            return;
        };
        if sessions.len() < max {
            return;
        }

        let evicted = self.evict_idle_locked(sessions);
        debug!(evicted, "Purged idle sessions at capacity");

        while sessions.len() >= max.max(1) {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, slot)| slot.last_access())
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    warn!(session_id = %id, max, "Session limit reached, evicting least recently used");
                    sessions.remove(&id);
                }
                None => break,
            }
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    /// Returns true if no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }

    /// Lists all live session ids.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<SessionId> {
        let ids: Vec<_> = self.sessions().keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// The shared word list.
    pub fn dictionary(&self) -> &Dictionary {
        &self.inner.dictionary
    }
}

fn new_session_id() -> SessionId {
    uuid::Uuid::new_v4().simple().to_string()
}
