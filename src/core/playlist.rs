use glam::Vec3;

/// Fixed number of drop-target slots in the playlist panel.
pub const SLOT_COUNT: usize = 20;

/// One assigned playlist entry: a preset name and the camera position it
/// resolves to at assignment time.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub name: String,
    pub position: Vec3,
}

/// Ordered fixed-length slot array. Slots are only ever mutated by drop
/// events; slot order is playback order.
pub struct Playlist {
    slots: Vec<Option<Stop>>,
}

impl Playlist {
    pub fn new() -> Self {
        Self {
            slots: vec![None; SLOT_COUNT],
        }
    }

    pub fn slots(&self) -> &[Option<Stop>] {
        &self.slots
    }

    /// Overwrite slot `index` with `stop`, regardless of prior content.
    /// Out-of-range indices are ignored.
    pub fn assign(&mut self, index: usize, stop: Stop) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(stop);
                true
            }
            None => false,
        }
    }

    /// Non-empty stops in slot order: the playback queue.
    pub fn queue(&self) -> Vec<Stop> {
        self.slots.iter().flatten().cloned().collect()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

/// Playback cursor over the filtered queue, with the busy guard that makes
/// re-entrant `begin` calls a no-op.
pub struct Playback {
    playing: bool,
    cursor: usize,
    queue: Vec<Stop>,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            playing: false,
            cursor: 0,
            queue: Vec::new(),
        }
    }

    /// Start a playback over `queue`. Returns false, leaving cursor, queue and
    /// busy flag untouched, if a playback is already in progress or the queue
    /// is empty (an empty run could never clear the busy flag).
    pub fn begin(&mut self, queue: Vec<Stop>) -> bool {
        if self.playing || queue.is_empty() {
            return false;
        }
        self.playing = true;
        self.cursor = 0;
        self.queue = queue;
        true
    }

    /// The stop to move to next, while one remains.
    pub fn current(&self) -> Option<&Stop> {
        if self.playing {
            self.queue.get(self.cursor)
        } else {
            None
        }
    }

    /// Step past the stop that just completed. After the last stop the cursor
    /// lands on the total and the busy flag clears.
    pub fn advance(&mut self) {
        if !self.playing {
            return;
        }
        self.cursor += 1;
        if self.cursor >= self.queue.len() {
            self.cursor = self.queue.len();
            self.playing = false;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.queue.len()
    }

    /// Completed fraction for the progress bar, 0 when nothing was queued.
    pub fn progress(&self) -> f32 {
        if self.queue.is_empty() {
            0.0
        } else {
            self.cursor as f32 / self.queue.len() as f32
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
