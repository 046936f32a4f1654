// tests/support/mocks/util.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use jobboard_core::application::ports::{time::Clock, util::SuffixSource};

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Hands out the scripted suffixes in order, then `999` forever.
pub struct ScriptedSuffixes {
    queue: Mutex<VecDeque<u16>>,
}

impl ScriptedSuffixes {
    pub fn new(values: &[u16]) -> Self {
        Self {
            queue: Mutex::new(values.iter().copied().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.lock().unwrap().len()
    }
}

impl SuffixSource for ScriptedSuffixes {
    fn next_suffix(&self) -> u16 {
        self.queue.lock().unwrap().pop_front().unwrap_or(999)
    }
}
