use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use std::{num::NonZeroU32, time::Duration};

// Small community site; keep the crawl gentle.
const REQ_PER_SEC: NonZeroU32 = nonzero!(5u32);
const MS_BETWEEN_REQ: Duration = Duration::from_millis(200);

type SpecificGovernorRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock, NoOpMiddleware<QuantaInstant>>;

pub struct RateLimiter {
    req_per_sec: SpecificGovernorRateLimiter,
    ms_between_req: SpecificGovernorRateLimiter,
}

impl RateLimiter {
    pub fn new() -> Self {
        // Cap the average request rate.
        let req_per_sec = GovernorRateLimiter::direct(Quota::per_second(REQ_PER_SEC));

        // No two requests closer than MS_BETWEEN_REQ, even when the
        // per-second quota still has room.
        let ms_between_req =
            GovernorRateLimiter::direct(Quota::with_period(MS_BETWEEN_REQ).unwrap());

        RateLimiter {
            req_per_sec,
            ms_between_req,
        }
    }

    pub async fn wait_until_ready(&self) {
        // Rate cap first, then the minimum gap: the gap check is the strict
        // one and must be the last gate before the request goes out.
        self.req_per_sec.until_ready().await;
        self.ms_between_req.until_ready().await;
    }
}
