/// How long a toast stays visible, in milliseconds.
pub const TOAST_TTL_MS: f64 = 2000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    expires_at_ms: f64,
}

/// Transient notification set. Entries self-destruct `TOAST_TTL_MS` after
/// creation; `prune` is called from the frame loop with the current clock.
pub struct ToastStore {
    next_id: u64,
    toasts: Vec<Toast>,
    generation: u64,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            toasts: Vec::new(),
            generation: 0,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            expires_at_ms: now_ms + TOAST_TTL_MS,
        });
        self.generation += 1;
        id
    }

    /// Drop every expired toast. Returns true when the visible set changed.
    pub fn prune(&mut self, now_ms: f64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at_ms > now_ms);
        if self.toasts.len() != before {
            self.generation += 1;
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Monotonic counter bumped on every visible change; lets the DOM layer
    /// skip rebuilds on frames where nothing happened.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}
