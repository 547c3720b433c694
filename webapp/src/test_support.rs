//! Shared test doubles for unit tests.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{User, UserId};

/// Clock that only moves when a test advances it.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn fixed() -> Self {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 18, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        Self::new(now)
    }

    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => panic!("failed to convert Duration to TimeDelta: {error}"),
        };
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

pub fn alice() -> User {
    User::new(UserId::Number(1), "Alice", "a@x.com")
}

pub fn sample_users() -> Vec<User> {
    vec![
        alice(),
        User::new(UserId::Number(2), "Bob", "bob@y.org"),
        User::new(UserId::Number(3), "Carol", "carol@z.net"),
    ]
}
