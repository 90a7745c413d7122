extern crate std;

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};
use crossbeam_utils::thread as scoped_thread;
use std::sync::Barrier;

use crate::atomic::{AtomicRef, AtomicShared};

const WRITES: u64 = 20_000;
const READERS: usize = 4;
const WIDTH: usize = 8;

/// A value whose fields must all agree with `seq`.
struct Snapshot {
    seq: u64,
    fields: [u64; WIDTH],
}

impl Snapshot {
    fn build(seq: u64) -> Self {
        let mut fields = [0; WIDTH];
        for (i, field) in fields.iter_mut().enumerate() {
            *field = seq.wrapping_mul(i as u64 + 1) ^ 0xa5a5;
        }
        Self { seq, fields }
    }

    fn check(&self) {
        for (i, field) in self.fields.iter().enumerate() {
            assert_eq!(*field, self.seq.wrapping_mul(i as u64 + 1) ^ 0xa5a5);
        }
    }
}

#[test]
fn test_reference_publish_is_fully_visible() {
    let cell: AtomicRef<'static, Snapshot> = AtomicRef::new();
    let done = AtomicBool::new(false);
    let barrier = Barrier::new(READERS + 1);

    scoped_thread::scope(|s| {
        s.spawn(|_| {
            barrier.wait();
            for seq in 1..=WRITES {
                let snapshot: &'static Snapshot = Box::leak(Box::new(Snapshot::build(seq)));
                cell.store(Some(snapshot));
            }
            done.store(true, Ordering::Release);
        });

        for _ in 0..READERS {
            s.spawn(|_| {
                barrier.wait();
                let mut last = 0;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    if let Some(snapshot) = cell.load() {
                        snapshot.check();
                        assert!(snapshot.seq >= last, "went back from {last} to {}", snapshot.seq);
                        last = snapshot.seq;
                    }
                    if finished {
                        break;
                    }
                }
                assert_eq!(last, WRITES);
            });
        }
    })
    .expect("failed to run threads");
}

#[test]
fn test_shared_publish_is_fully_visible() {
    let cell: Arc<AtomicShared<Snapshot>> = Arc::new(AtomicShared::new());
    let done = Arc::new(AtomicBool::new(false));
    let barrier = Arc::new(Barrier::new(READERS + 1));

    scoped_thread::scope(|s| {
        {
            let cell = Arc::clone(&cell);
            let done = Arc::clone(&done);
            let barrier = Arc::clone(&barrier);
            s.spawn(move |_| {
                barrier.wait();
                for seq in 1..=WRITES {
                    cell.store(Some(Arc::new(Snapshot::build(seq))));
                }
                done.store(true, Ordering::Release);
            });
        }

        for _ in 0..READERS {
            let cell = Arc::clone(&cell);
            let done = Arc::clone(&done);
            let barrier = Arc::clone(&barrier);
            s.spawn(move |_| {
                barrier.wait();
                let mut last = 0;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    if let Some(snapshot) = cell.load() {
                        snapshot.check();
                        assert!(snapshot.seq >= last, "went back from {last} to {}", snapshot.seq);
                        last = snapshot.seq;
                    }
                    if finished {
                        break;
                    }
                }
                assert_eq!(last, WRITES);
            });
        }
    })
    .expect("failed to run threads");

    assert_eq!(cell.load().map(|s| s.seq), Some(WRITES));
}
