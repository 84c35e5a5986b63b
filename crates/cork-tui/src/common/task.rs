//! Async task lifecycle bookkeeping.
//!
//! The runtime emits `TaskStarted` when it spawns a request and
//! `TaskCompleted` with the result event when it finishes. The ledger here
//! only drives the spinner and busy indicators; it never gates a new
//! submission and completed results are always processed, so overlapping
//! requests stay possible exactly as the execution model allows.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Monotonic task id generator owned by the runtime.
#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    Register,
    FetchUser,
    FetchPosts,
    CreatePost,
    UpdatePost,
    DeletePost,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by the reducer).
///
/// Tracks the most recently started task of a kind. A second submission of
/// the same kind overwrites the slot; the earlier task still completes and
/// its result is still applied.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    /// Clears the slot if `id` is the latest task. Returns whether it was.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub register: TaskState,
    pub fetch_user: TaskState,
    pub fetch_posts: TaskState,
    pub create_post: TaskState,
    pub update_post: TaskState,
    pub delete_post: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Login => &self.login,
            TaskKind::Register => &self.register,
            TaskKind::FetchUser => &self.fetch_user,
            TaskKind::FetchPosts => &self.fetch_posts,
            TaskKind::CreatePost => &self.create_post,
            TaskKind::UpdatePost => &self.update_post,
            TaskKind::DeletePost => &self.delete_post,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
            TaskKind::FetchUser => &mut self.fetch_user,
            TaskKind::FetchPosts => &mut self.fetch_posts,
            TaskKind::CreatePost => &mut self.create_post,
            TaskKind::UpdatePost => &mut self.update_post,
            TaskKind::DeletePost => &mut self.delete_post,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.login.is_running()
            || self.register.is_running()
            || self.fetch_user.is_running()
            || self.fetch_posts.is_running()
            || self.create_post.is_running()
            || self.update_post.is_running()
            || self.delete_post.is_running()
    }
}
