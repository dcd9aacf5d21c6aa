//! In-memory ticket registry.
//!
//! Tickets are kept in insertion order. A side index maps ticket ids to their
//! position so id lookups do not scan the whole sequence; it is rebuilt after
//! every removal.

use std::collections::HashMap;
use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::models::ticket::{Ticket, TICKET_ID_LEN};

pub mod seed;

/// Number of winners drawn when the caller does not ask for a count.
pub const DEFAULT_DRAW_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("ticket '{0}' was not found")]
    NotFound(String),

    #[error("cannot draw from an empty registry")]
    EmptyRegistry,
}

pub struct Registry {
    tickets: Vec<Ticket>,
    positions: HashMap<String, usize>,
    clock: Arc<dyn Clock>,
    rng: StdRng,
}

impl Registry {
    /// Creates an empty registry backed by an entropy-seeded random source.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(clock, StdRng::from_entropy())
    }

    /// Creates an empty registry with an explicit random source, so ids and
    /// draws are reproducible.
    pub fn with_rng(clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        Self {
            tickets: Vec::new(),
            positions: HashMap::new(),
            clock,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn list_all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.positions.get(id).map(|&index| &self.tickets[index])
    }

    pub fn list_by_username(&self, username: &str) -> Vec<Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| ticket.username == username)
            .cloned()
            .collect()
    }

    pub fn buy(&mut self, username: &str, price: Decimal) -> Ticket {
        let id = self.next_id();
        let ticket = Ticket::new(id, username, price, self.clock.now());
        self.insert(ticket.clone());

        info!(ticket_id = %ticket.id, username, %price, "Ticket sold");
        ticket
    }

    pub fn buy_bulk(&mut self, username: &str, price: Decimal, quantity: usize) -> Vec<Ticket> {
        (0..quantity).map(|_| self.buy(username, price)).collect()
    }

    /// Transfers the ticket with `id` to `username`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no ticket has that id; the
    /// registry is left unchanged.
    pub fn update(&mut self, id: &str, username: &str) -> Result<Ticket, RegistryError> {
        let index = *self
            .positions
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let now = self.clock.now();
        let ticket = &mut self.tickets[index];
        ticket.transfer_to(username, now);

        info!(ticket_id = %id, username, "Ticket transferred");
        Ok(ticket.clone())
    }

    /// Transfers every ticket owned by `old_username` to `new_username` and
    /// returns the whole registry afterwards.
    pub fn update_bulk(&mut self, old_username: &str, new_username: &str) -> &[Ticket] {
        let now = self.clock.now();
        let mut transferred = 0usize;

        for ticket in self
            .tickets
            .iter_mut()
            .filter(|ticket| ticket.username == old_username)
        {
            ticket.transfer_to(new_username, now);
            transferred += 1;
        }

        info!(old_username, new_username, transferred, "Bulk ticket transfer");
        &self.tickets
    }

    /// Removes the ticket with `id`. Returns whether a ticket was removed;
    /// deleting an unknown id is not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.positions.remove(id) else {
            debug!(ticket_id = %id, "Delete of unknown ticket ignored");
            return false;
        };

        self.tickets.remove(index);
        self.reindex_from(index);

        info!(ticket_id = %id, "Ticket deleted");
        true
    }

    /// Removes every ticket owned by `username` and returns what is left.
    pub fn delete_bulk(&mut self, username: &str) -> &[Ticket] {
        let before = self.tickets.len();
        self.tickets.retain(|ticket| ticket.username != username);
        let removed = before - self.tickets.len();

        if removed > 0 {
            self.positions.clear();
            self.reindex_from(0);
        }

        info!(username, removed, "Bulk ticket delete");
        &self.tickets
    }

    /// Draws `count` tickets uniformly at random, with replacement.
    ///
    /// The same ticket may appear several times in one draw.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyRegistry`] when `count > 0` and there are
    /// no tickets to draw from.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Ticket>, RegistryError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.tickets.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        let len = self.tickets.len();
        let winners: Vec<Ticket> = (0..count)
            .map(|_| self.tickets[self.rng.gen_range(0..len)].clone())
            .collect();

        info!(count, pool = len, "Tickets drawn");
        Ok(winners)
    }

    /// Loads pre-built tickets, such as the demo data set, keeping their ids
    /// and timestamps. Tickets whose id is already held are skipped.
    pub fn seed(&mut self, tickets: impl IntoIterator<Item = Ticket>) -> usize {
        let mut loaded = 0;
        for ticket in tickets {
            if self.positions.contains_key(&ticket.id) {
                warn!(ticket_id = %ticket.id, "Skipping seed ticket with duplicate id");
                continue;
            }
            self.insert(ticket);
            loaded += 1;
        }
        loaded
    }

    fn insert(&mut self, ticket: Ticket) {
        self.positions.insert(ticket.id.clone(), self.tickets.len());
        self.tickets.push(ticket);
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, ticket) in self.tickets.iter().enumerate().skip(start) {
            self.positions.insert(ticket.id.clone(), index);
        }
    }

    fn next_id(&mut self) -> String {
        loop {
            let id: String = (&mut self.rng)
                .sample_iter(&Alphanumeric)
                .take(TICKET_ID_LEN)
                .map(char::from)
                .collect();

            if !self.positions.contains_key(&id) {
                return id;
            }
        }
    }
}
