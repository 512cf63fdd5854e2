// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Tracking of in-flight background requests.
//!
//! Each request sent to the task worker is stamped with a [`RequestToken`]
//! registered here together with whatever the reply is meant for. When the
//! reply comes back the token is looked up again; if the target has been
//! discarded in the meantime (a newer search replaced the results, say) the
//! token is gone and the reply is dropped instead of being applied to
//! something stale.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RequestToken(u64);

#[derive(Debug)]
pub(crate) struct PendingRequests<T> {
    next: u64,
    pending: HashMap<RequestToken, T>,
}

impl<T> Default for PendingRequests<T> {
    fn default() -> Self {
        Self {
            next: 0,
            pending: HashMap::new(),
        }
    }
}

impl<T> PendingRequests<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a new request for `target`, returning its token.
    ///
    /// Tokens are never reused for the lifetime of the table.
    pub(crate) fn register(&mut self, target: T) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        self.pending.insert(token, target);
        token
    }

    /// Completes a request, returning its target if it is still wanted.
    pub(crate) fn complete(&mut self, token: RequestToken) -> Option<T> {
        self.pending.remove(&token)
    }

    /// Changes the target of every pending request matching `predicate`.
    pub(crate) fn retarget(&mut self, mut predicate: impl FnMut(&T) -> bool, target: impl Fn() -> T) {
        for pending in self.pending.values_mut() {
            if predicate(pending) {
                *pending = target();
            }
        }
    }

    /// Forgets every pending request matching `predicate`.
    pub(crate) fn discard(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        self.pending.retain(|_, target| !predicate(target));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_token_is_not_pending() {
        let mut requests = PendingRequests::new();
        let token = requests.register("a");

        assert!(!requests.is_empty());
        assert_eq!(requests.complete(token), Some("a"));
        assert!(requests.is_empty());
        assert_eq!(requests.complete(token), None);
    }

    #[test]
    fn tokens_are_unique() {
        let mut requests = PendingRequests::new();
        let first = requests.register(1);
        requests.complete(first);
        let second = requests.register(1);

        assert_ne!(first, second);
    }

    #[test]
    fn discarded_requests_are_dropped() {
        let mut requests = PendingRequests::new();
        let keep = requests.register("library");
        let drop = requests.register("search");

        requests.discard(|target| *target == "search");

        assert_eq!(requests.complete(drop), None);
        assert_eq!(requests.complete(keep), Some("library"));
    }

    #[test]
    fn retarget_changes_matching_targets() {
        let mut requests = PendingRequests::new();
        let token = requests.register(("search", 1));
        let other = requests.register(("search", 2));

        requests.retarget(|target| target.1 == 1, || ("library", 1));

        assert_eq!(requests.complete(token), Some(("library", 1)));
        assert_eq!(requests.complete(other), Some(("search", 2)));
    }
}
