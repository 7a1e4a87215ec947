use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::account::AccountId;

/// all events that can be emitted by an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    AccountOpened {
        account_id: AccountId,
        opening_balance: Money,
        timestamp: DateTime<Utc>,
    },
    LoanIssued {
        account_id: AccountId,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    LoanRepaid {
        account_id: AccountId,
        amount: Money,
        remaining_loan: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    FundsDeposited {
        account_id: AccountId,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    PurchaseMade {
        account_id: AccountId,
        price: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_take_drains_store() {
        let mut store = EventStore::new();
        store.emit(Event::AccountOpened {
            account_id: Uuid::new_v4(),
            opening_balance: Money::from_major(200),
            timestamp: Utc::now(),
        });
        assert_eq!(store.events().len(), 1);

        let taken = store.take_events();
        assert_eq!(taken.len(), 1);
        assert!(store.events().is_empty());
    }
}
