use std::time::{Duration, Instant};

use mockall::mock;
use mockall::Sequence;
use ls8_core::soc::devices::Clock;

mock! {
    pub WallClock {}
    impl Clock for WallClock {
        fn now(&self) -> Instant;
    }
}

/// A clock that reports `base + offsets[i]` on its i-th reading, in order.
pub fn scripted_clock(base: Instant, offsets_ms: &[u64]) -> MockWallClock {
    let mut clock = MockWallClock::new();
    let mut seq = Sequence::new();
    for &ms in offsets_ms {
        let _ = clock
            .expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(base + Duration::from_millis(ms));
    }
    clock
}
