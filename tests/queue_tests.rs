use jobqueue::queue::{PriorityQueue, QueueError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reference order: stable sort by descending priority.
fn expected_order(jobs: &[(u32, i64)]) -> Vec<u32> {
    let mut sorted = jobs.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.into_iter().map(|(id, _)| id).collect()
}

fn random_jobs(seed: u64, count: u32) -> Vec<(u32, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|id| (id, rng.gen_range(0..=10))).collect()
}

#[test]
fn test_concrete_scenario() {
    let mut pq = PriorityQueue::new();
    let input = [
        ("zbe", 7),
        ("lmy", 10),
        ("swc", 7),
        ("jtc", 2),
        ("slg", 4),
        ("rwa", 10),
        ("zln", 1),
        ("ytm", 6),
        ("aou", 8),
        ("uuv", 3),
    ];
    for (command, priority) in input {
        pq.enqueue(command, priority).unwrap();
    }

    let mut out = Vec::new();
    for _ in 0..10 {
        out.push(pq.dequeue().unwrap());
    }
    assert_eq!(
        out,
        vec!["lmy", "rwa", "aou", "zbe", "swc", "ytm", "slg", "uuv", "jtc", "zln"]
    );
    assert!(pq.is_empty());
    assert_eq!(pq.dequeue(), None);
}

#[test]
fn test_chain_invariant_holds_after_every_enqueue() {
    for seed in 0..20 {
        let jobs = random_jobs(seed, 60);
        let mut pq = PriorityQueue::new();
        for (i, &(id, priority)) in jobs.iter().enumerate() {
            pq.enqueue(id, priority).unwrap();

            let chain: Vec<(u32, u8)> = pq
                .iter()
                .map(|job| (*job.command(), job.priority().get()))
                .collect();
            assert_eq!(chain.len(), i + 1);
            for pair in chain.windows(2) {
                let (first, second) = (pair[0], pair[1]);
                assert!(first.1 >= second.1, "priorities increased: {:?}", chain);
                if first.1 == second.1 {
                    // ids are assigned in enqueue order
                    assert!(first.0 < second.0, "equal priorities reordered: {:?}", chain);
                }
            }
        }
    }
}

#[test]
fn test_drain_matches_stable_sort() {
    for seed in 100..110 {
        let jobs = random_jobs(seed, 200);
        let mut pq = PriorityQueue::new();
        for &(id, priority) in &jobs {
            pq.enqueue(id, priority).unwrap();
        }
        let drained: Vec<u32> = std::iter::from_fn(|| pq.dequeue()).collect();
        assert_eq!(drained, expected_order(&jobs));
    }
}

#[test]
fn test_peek_is_idempotent() {
    let mut pq = PriorityQueue::new();
    pq.enqueue("a", 3).unwrap();
    pq.enqueue("b", 9).unwrap();

    for _ in 0..5 {
        assert_eq!(pq.peek(), Some(&"b"));
        assert!(!pq.is_empty());
        assert_eq!(pq.len(), 2);
    }
    assert_eq!(pq.dequeue(), Some("b"));
    assert_eq!(pq.peek(), Some(&"a"));
    assert_eq!(pq.dequeue(), Some("a"));
    assert_eq!(pq.peek(), None);
}

#[test]
fn test_fresh_queue_reports_absent_values() {
    let mut pq: PriorityQueue<String> = PriorityQueue::default();
    assert!(pq.is_empty());
    assert!(pq.peek().is_none());
    assert!(pq.dequeue().is_none());
}

#[test]
fn test_priority_range_validation() {
    let mut pq = PriorityQueue::new();
    assert!(matches!(
        pq.enqueue("under", -1),
        Err(QueueError::InvalidPriority(-1))
    ));
    assert!(matches!(
        pq.enqueue("over", 11),
        Err(QueueError::InvalidPriority(11))
    ));
    assert!(pq.is_empty());

    pq.enqueue("floor", 0).unwrap();
    pq.enqueue("ceiling", 10).unwrap();
    assert_eq!(pq.dequeue(), Some("ceiling"));
    assert_eq!(pq.dequeue(), Some("floor"));
}

#[test]
fn test_error_message_names_range() {
    let mut pq = PriorityQueue::new();
    let err = pq.enqueue((), 99).unwrap_err();
    assert_eq!(err.to_string(), "priority 99 is out of range [0, 10]");
}

#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut pq = PriorityQueue::new();
    pq.enqueue("a", 5).unwrap();
    pq.enqueue("b", 5).unwrap();
    assert_eq!(pq.dequeue(), Some("a"));
    pq.enqueue("c", 5).unwrap();
    pq.enqueue("d", 6).unwrap();
    assert_eq!(pq.into_iter().collect::<Vec<_>>(), vec!["d", "b", "c"]);
}
