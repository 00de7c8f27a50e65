use std::sync::Arc;

use super::{TokenPrimitive, TokenVerdict};
use crate::auth::Actor;
use crate::utils::{compute_hmac, tags_match, Clock};

/// Default token lifespan: one day.
pub const DEFAULT_LIFESPAN_SECS: u64 = 86_400;

/// Number of hex characters kept from the digest.
const TOKEN_LEN: usize = 10;

/// Tick-based nonce primitive.
///
/// Time is cut into ticks of half the lifespan. A token is a truncated
/// HMAC-SHA256 over the tick, the scope and the actor, keyed by a server
/// secret. It is accepted during the tick it was minted in (`ValidRecent`)
/// and the next one (`ValidAging`), then rejected.
pub struct HashedTokenPrimitive {
    secret: String,
    lifespan_secs: u64,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for HashedTokenPrimitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedTokenPrimitive")
            .field("lifespan_secs", &self.lifespan_secs)
            .finish_non_exhaustive()
    }
}

impl HashedTokenPrimitive {
    #[must_use]
    pub fn new(secret: &str, lifespan_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: secret.to_string(),
            lifespan_secs,
            clock,
        }
    }

    fn tick(&self) -> u64 {
        let half = (self.lifespan_secs / 2).max(1);
        let now = u64::try_from(self.clock.now().timestamp()).unwrap_or(0);
        now.div_ceil(half)
    }

    fn digest(&self, tick: u64, scope: &str, actor: &Actor) -> Option<String> {
        let payload = format!("{tick}|{scope}|{}", actor.id);
        let tag = compute_hmac(self.secret.as_bytes(), payload.as_bytes())?;
        tag.get(..TOKEN_LEN).map(str::to_string)
    }

    fn matches(&self, token: &str, tick: u64, scope: &str, actor: &Actor) -> bool {
        self.digest(tick, scope, actor)
            .is_some_and(|expected| tags_match(&expected, token))
    }
}

impl TokenPrimitive for HashedTokenPrimitive {
    fn create(&self, scope: &str, actor: &Actor) -> String {
        self.digest(self.tick(), scope, actor).unwrap_or_default()
    }

    fn verify(&self, token: &str, scope: &str, actor: &Actor) -> TokenVerdict {
        if token.is_empty() {
            return TokenVerdict::Invalid;
        }
        let tick = self.tick();
        if self.matches(token, tick, scope, actor) {
            return TokenVerdict::ValidRecent;
        }
        match tick.checked_sub(1) {
            Some(previous) if self.matches(token, previous, scope, actor) => {
                TokenVerdict::ValidAging
            }
            _ => TokenVerdict::Invalid,
        }
    }
}
