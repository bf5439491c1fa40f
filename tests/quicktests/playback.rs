use bintree::config::PlaybackConfig;
use bintree::scheduler::TimerQueue;
use bintree::stepper::{PlaybackState, StepEvent, StepOutcome, Stepper};
use bintree::traversal::TraversalPlan;
use quickcheck_macros::quickcheck;

/// A user poking at playback while it runs.
#[derive(Copy, Clone, Debug)]
enum Poke {
    Fire,
    Pause,
    Resume,
    Speed(u8),
}

impl quickcheck::Arbitrary for Poke {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Poke::Fire,
            1 => Poke::Pause,
            2 => Poke::Resume,
            _ => Poke::Speed(u8::arbitrary(g) % 101),
        }
    }
}

/// However playback is paused, resumed and sped up, it never has more than one live step pending
/// (exactly one while running), emits the plan in order without repeats, and finishes it once left
/// alone.
#[quickcheck]
fn plan_emitted_in_order_once(plan: Vec<u8>, pokes: Vec<Poke>) -> bool {
    let mut queue = TimerQueue::new();
    let mut events: Vec<StepEvent<u8>> = Vec::new();
    let mut stepper = Stepper::new(PlaybackConfig::default());
    stepper.start(TraversalPlan::new(plan.clone()), &mut queue);

    for poke in pokes {
        match poke {
            Poke::Fire => {
                if let Some(fired) = queue.pop_next() {
                    stepper.fire(fired.ticket, &mut queue, &mut events);
                }
            }
            Poke::Pause => {
                stepper.pause();
            }
            Poke::Resume => {
                stepper.resume(&mut queue, &mut events);
            }
            Poke::Speed(speed) => stepper.set_speed(speed).unwrap(),
        }
        if stepper.visited() != &plan[..stepper.visited().len()] {
            return false;
        }
        let live = queue
            .pending()
            .filter(|ticket| *ticket == stepper.current_ticket())
            .count();
        if live > 1 || (stepper.state() == PlaybackState::Running && live != 1) {
            return false;
        }
    }

    if stepper.state() == PlaybackState::Paused {
        stepper.resume(&mut queue, &mut events);
    }
    let mut emitted = 0;
    while let Some(fired) = queue.pop_next() {
        if stepper.fire(fired.ticket, &mut queue, &mut events) == StepOutcome::Emitted {
            emitted += 1;
        }
    }

    let visible: Vec<u8> = events
        .iter()
        .filter_map(|e| match e {
            StepEvent::Visible(v) => Some(*v),
            StepEvent::Completed => None,
        })
        .collect();
    emitted <= plan.len()
        && visible == plan
        && events.last() == Some(&StepEvent::Completed)
        && stepper.state() == PlaybackState::Completed
}
