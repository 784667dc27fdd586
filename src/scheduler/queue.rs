/*!
 * Ready Structures
 * Arrival-order queue and the unordered ready set used by shortest-first policies
 */

use crate::core::types::{Pid, Ticks};
use std::collections::VecDeque;

/// Strict arrival-order queue
#[derive(Debug, Clone, Default)]
pub struct FifoQueue {
    pids: VecDeque<Pid>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn push_back(&mut self, pid: Pid) {
        debug_assert!(!self.pids.contains(&pid), "Process {pid} already queued");
        self.pids.push_back(pid);
    }

    pub(super) fn front(&self) -> Option<Pid> {
        self.pids.front().copied()
    }

    /// Remove `pid`; O(1) for the head, which is the only id the engine takes
    pub(super) fn remove(&mut self, pid: Pid) -> bool {
        if self.front() == Some(pid) {
            self.pids.pop_front();
            return true;
        }
        match self.pids.iter().position(|&p| p == pid) {
            Some(pos) => self.pids.remove(pos).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.pids.iter().copied()
    }
}

/// Ready set kept in admission order so ties resolve to the earliest admitted id
#[derive(Debug, Clone, Default)]
pub struct ReadySet {
    pids: Vec<Pid>,
}

impl ReadySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn insert(&mut self, pid: Pid) {
        debug_assert!(!self.pids.contains(&pid), "Process {pid} already ready");
        self.pids.push(pid);
    }

    /// First id with the minimum key; ids the key function cannot resolve never win
    pub(super) fn min_by<F>(&self, key: F) -> Option<Pid>
    where
        F: Fn(Pid) -> Option<Ticks>,
    {
        self.pids
            .iter()
            .filter_map(|&pid| key(pid).map(|k| (k, pid)))
            .min_by_key(|&(k, _)| k)
            .map(|(_, pid)| pid)
    }

    pub(super) fn remove(&mut self, pid: Pid) -> bool {
        match self.pids.iter().position(|&p| p == pid) {
            Some(pos) => {
                self.pids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.pids.iter().copied()
    }
}
