use broadside::{
    full_pool, Coord, ProbeAndTrack, RandomSearch, ShotOutcome, Targeting, TargetingState,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn cells(coords: &[Coord]) -> Vec<(usize, usize)> {
    let mut v: Vec<_> = coords.iter().map(|c| (c.row, c.col)).collect();
    v.sort();
    v
}

/// State of a tracker that has just fired at `last` with nothing queued.
fn state_after_shot(grid: usize, last: (usize, usize), anchor: Option<(usize, usize)>) -> TargetingState {
    let last = Coord::new(last.0, last.1);
    TargetingState {
        pool: full_pool(grid)
            .into_iter()
            .filter(|c| *c != last)
            .collect(),
        queue: Vec::new(),
        last_shot: Some(last),
        anchor: anchor.map(|(r, c)| Coord::new(r, c)),
    }
}

#[test]
fn test_random_search_draws_each_cell_once() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut strategy = RandomSearch::new(5);

    let mut seen = Vec::new();
    while let Some(shot) = strategy.next_shot(&mut rng, ShotOutcome::Water) {
        seen.push(shot);
    }
    assert_eq!(seen.len(), 25);
    let mut unique = cells(&seen);
    unique.dedup();
    assert_eq!(unique.len(), 25);
}

#[test]
fn test_random_search_ignores_feedback() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut strategy = RandomSearch::new(10);

    strategy.next_shot(&mut rng, ShotOutcome::Water).unwrap();
    strategy.next_shot(&mut rng, ShotOutcome::Hit).unwrap();
    let snap = strategy.snapshot();
    assert!(snap.queue.is_empty());
    assert_eq!(snap.pool.len(), 98);
}

#[test]
fn test_search_mode_shrinks_pool_by_one() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategy = ProbeAndTrack::new(10);
    assert_eq!(strategy.snapshot().pool.len(), 100);

    let shot = strategy.next_shot(&mut rng, ShotOutcome::Water).unwrap();
    let snap = strategy.snapshot();
    assert_eq!(snap.pool.len(), 99);
    assert!(snap.queue.is_empty());
    assert_eq!(snap.last_shot, Some(shot));
    assert!(!snap.pool.contains(&shot));
}

#[test]
fn test_first_hit_probes_the_cross() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut strategy = ProbeAndTrack::from_state(state_after_shot(10, (5, 5), None));

    let shot = strategy.next_shot(&mut rng, ShotOutcome::Hit).unwrap();
    let snap = strategy.snapshot();

    // the follow-up shot and what remains queued are exactly the four
    // orthogonal neighbors of the hit
    let mut probed = snap.queue.clone();
    probed.push(shot);
    assert_eq!(cells(&probed), vec![(4, 5), (5, 4), (5, 6), (6, 5)]);
    assert_eq!(snap.anchor, Some(Coord::new(5, 5)));
    // queued cells left the pool
    for c in &snap.queue {
        assert!(!snap.pool.contains(c));
    }
}

#[test]
fn test_corner_hit_probes_two_neighbors() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut strategy = ProbeAndTrack::from_state(state_after_shot(10, (0, 0), None));

    let shot = strategy.next_shot(&mut rng, ShotOutcome::Hit).unwrap();
    let snap = strategy.snapshot();
    let mut probed = snap.queue.clone();
    probed.push(shot);
    assert_eq!(cells(&probed), vec![(0, 1), (1, 0)]);
}

#[test]
fn test_second_hit_locks_the_axis() {
    // cross probe of (5,5) already fired, (5,6) just hit as well
    let last = Coord::new(5, 6);
    let anchor = Coord::new(5, 5);
    let queued = [Coord::new(4, 5), Coord::new(6, 5), Coord::new(5, 4)];
    let pool: Vec<Coord> = full_pool(10)
        .into_iter()
        .filter(|c| *c != last && *c != anchor && !queued.contains(c))
        .collect();
    let mut strategy = ProbeAndTrack::from_state(TargetingState {
        pool,
        queue: queued.to_vec(),
        last_shot: Some(last),
        anchor: Some(anchor),
    });

    let mut rng = SmallRng::seed_from_u64(6);
    let shot = strategy.next_shot(&mut rng, ShotOutcome::Hit).unwrap();
    let snap = strategy.snapshot();

    // only the two row-5 extensions survive as follow-ups
    let mut tracked = snap.queue.clone();
    tracked.push(shot);
    assert_eq!(cells(&tracked), vec![(5, 4), (5, 7)]);
    // the off-axis probes went back to the pool
    assert!(snap.pool.contains(&Coord::new(4, 5)));
    assert!(snap.pool.contains(&Coord::new(6, 5)));
    assert_eq!(snap.anchor, Some(last));
}

#[test]
fn test_vertical_axis_tracking() {
    let last = Coord::new(6, 5);
    let anchor = Coord::new(5, 5);
    let queued = [Coord::new(5, 4), Coord::new(5, 6), Coord::new(4, 5)];
    let pool: Vec<Coord> = full_pool(10)
        .into_iter()
        .filter(|c| *c != last && *c != anchor && !queued.contains(c))
        .collect();
    let mut strategy = ProbeAndTrack::from_state(TargetingState {
        pool,
        queue: queued.to_vec(),
        last_shot: Some(last),
        anchor: Some(anchor),
    });

    let mut rng = SmallRng::seed_from_u64(7);
    let shot = strategy.next_shot(&mut rng, ShotOutcome::Hit).unwrap();
    let snap = strategy.snapshot();

    let mut tracked = snap.queue.clone();
    tracked.push(shot);
    assert_eq!(cells(&tracked), vec![(4, 5), (7, 5)]);
    assert!(snap.pool.contains(&Coord::new(5, 4)));
    assert!(snap.pool.contains(&Coord::new(5, 6)));
}

#[test]
fn test_sink_drains_the_queue() {
    let last = Coord::new(5, 6);
    let queued = [Coord::new(4, 5), Coord::new(6, 5), Coord::new(5, 4)];
    let pool: Vec<Coord> = full_pool(10)
        .into_iter()
        .filter(|c| *c != last && *c != Coord::new(5, 5) && !queued.contains(c))
        .collect();
    let pool_len = pool.len();
    let mut strategy = ProbeAndTrack::from_state(TargetingState {
        pool,
        queue: queued.to_vec(),
        last_shot: Some(last),
        anchor: Some(Coord::new(5, 5)),
    });

    let mut rng = SmallRng::seed_from_u64(8);
    strategy.next_shot(&mut rng, ShotOutcome::HitAndSunk).unwrap();
    let snap = strategy.snapshot();

    assert!(snap.queue.is_empty());
    assert_eq!(snap.anchor, None);
    // the queued probes rejoined the pool before the draw removed one cell
    assert_eq!(snap.pool.len(), pool_len + queued.len() - 1);
}

#[test]
fn test_water_changes_nothing_but_the_draw() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut strategy = ProbeAndTrack::from_state(state_after_shot(10, (5, 5), None));

    strategy.next_shot(&mut rng, ShotOutcome::Water).unwrap();
    let snap = strategy.snapshot();
    assert!(snap.queue.is_empty());
    assert_eq!(snap.anchor, None);
    assert_eq!(snap.pool.len(), 98);
}

#[test]
fn test_pool_and_queue_partition_the_grid() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut strategy = ProbeAndTrack::new(20);
    assert_eq!(strategy.snapshot().pool.len(), 400);

    // feed a noisy outcome pattern and check the bookkeeping after every shot
    let outcomes = [
        ShotOutcome::Water,
        ShotOutcome::Hit,
        ShotOutcome::Hit,
        ShotOutcome::Water,
        ShotOutcome::Hit,
        ShotOutcome::HitAndSunk,
        ShotOutcome::Water,
    ];
    let mut fired = Vec::new();
    for (i, &outcome) in outcomes.iter().cycle().take(60).enumerate() {
        let shot = strategy.next_shot(&mut rng, outcome).unwrap();
        assert!(!fired.contains(&shot), "cell fired twice at step {}", i);
        fired.push(shot);

        let snap = strategy.snapshot();
        assert_eq!(snap.pool.len() + snap.queue.len() + fired.len(), 400);
        for c in &snap.queue {
            assert!(!snap.pool.contains(c));
        }
    }
}
