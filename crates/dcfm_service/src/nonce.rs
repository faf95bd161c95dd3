//! Anti-forgery tokens for the contact form.
//!
//! A token is a truncated HMAC over (tick, action, session). Time is cut into
//! ticks of half the lifetime; a token is accepted during the tick it was
//! issued in and the one after, so it lives between `lifetime / 2` and
//! `lifetime` seconds.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use time::{Duration, OffsetDateTime};

type HmacSha256 = Hmac<Sha256>;

/// Action the form tokens are bound to.
pub const FORM_ACTION: &str = "dcfm_form_submission";

const TOKEN_BYTES: usize = 10;

#[derive(Error, Debug)]
pub enum NonceError {
    #[error("nonce secret must not be empty")]
    EmptySecret,

    #[error("nonce lifetime must be at least two seconds")]
    LifetimeTooShort,

    #[error("invalid nonce key: {0}")]
    InvalidKey(String),
}

/// How old a verified token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceAge {
    /// Issued during the current tick.
    Current,
    /// Issued during the previous tick; still valid.
    Previous,
}

#[derive(Clone)]
pub struct NonceIssuer {
    key: HmacSha256,
    half_life: i64,
}

impl NonceIssuer {
    pub const DEFAULT_LIFETIME: Duration = Duration::DAY;

    pub fn new(secret: impl AsRef<[u8]>, lifetime: Duration) -> Result<Self, NonceError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(NonceError::EmptySecret);
        }

        let half_life = lifetime.whole_seconds() / 2;
        if half_life < 1 {
            return Err(NonceError::LifetimeTooShort);
        }

        let key = HmacSha256::new_from_slice(secret)
            .map_err(|e| NonceError::InvalidKey(e.to_string()))?;

        Ok(Self { key, half_life })
    }

    pub fn create(&self, action: &str, session: &str) -> String {
        self.create_at(action, session, OffsetDateTime::now_utc())
    }

    pub fn create_at(&self, action: &str, session: &str, now: OffsetDateTime) -> String {
        let tag = self.mac(self.tick(now), action, session).finalize().into_bytes();
        hex::encode(&tag[..TOKEN_BYTES])
    }

    pub fn verify(&self, token: &str, action: &str, session: &str) -> Option<NonceAge> {
        self.verify_at(token, action, session, OffsetDateTime::now_utc())
    }

    pub fn verify_at(
        &self,
        token: &str,
        action: &str,
        session: &str,
        now: OffsetDateTime,
    ) -> Option<NonceAge> {
        if token.len() != TOKEN_BYTES * 2 {
            return None;
        }
        let tag = hex::decode(token).ok()?;

        let tick = self.tick(now);
        [(NonceAge::Current, tick), (NonceAge::Previous, tick - 1)]
            .into_iter()
            .find(|(_, tick)| {
                // verify_* compares in constant time
                self.mac(*tick, action, session)
                    .verify_truncated_left(&tag)
                    .is_ok()
            })
            .map(|(age, _)| age)
    }

    fn tick(&self, now: OffsetDateTime) -> i64 {
        let ts = now.unix_timestamp();
        // ceil(ts / half_life)
        ts.div_euclid(self.half_life) + i64::from(ts.rem_euclid(self.half_life) != 0)
    }

    fn mac(&self, tick: i64, action: &str, session: &str) -> HmacSha256 {
        let mut mac = self.key.clone();
        mac.update(format!("{}|{}|{}", tick, action, session).as_bytes());
        mac
    }
}
