mod inbox;

use anyhow::{bail, Context};
use inbox::{ConsoleSelection, ConsoleToolbar, Inbox};
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use swipeselect_foundation::{EventClock, Point, PointerEvent};
use swipeselect_list::{Feature, GestureArbiter};

const FRAME: Duration = Duration::from_millis(16);
const SUBJECTS: &[&str] = &[
    "Standup notes",
    "Build is green again",
    "Lunch on Friday?",
    "Quarterly report draft",
    "Re: flaky test",
];

type Arbiter = GestureArbiter<Rc<Inbox>>;

/// Replays scripted touches against the arbiter on the wall clock.
struct Finger {
    clock: EventClock,
}

impl Finger {
    fn press(&self, arbiter: &mut Arbiter, at: Point) {
        arbiter.on_pointer_event(&PointerEvent::down(at, self.clock.now()));
    }

    fn move_to(&self, arbiter: &mut Arbiter, at: Point) -> bool {
        thread::sleep(FRAME);
        arbiter.on_pointer_event(&PointerEvent::moved(at, self.clock.now()))
    }

    fn release(&self, arbiter: &mut Arbiter, at: Point) -> bool {
        thread::sleep(FRAME);
        arbiter.on_pointer_event(&PointerEvent::up(at, self.clock.now()))
    }

    fn swipe(&self, arbiter: &mut Arbiter, from: Point, offsets: &[f32]) {
        self.press(arbiter, from);
        let mut at = from;
        for dx in offsets {
            at = from.offset(*dx, 0.0);
            self.move_to(arbiter, at);
        }
        self.release(arbiter, at);
    }

    fn hold(&self, arbiter: &mut Arbiter, at: Point) {
        self.press(arbiter, at);
        let timeout = arbiter.config().long_press_timeout;
        let deadline = self.clock.now() + timeout;
        while self.clock.now() < deadline {
            thread::sleep(FRAME);
            arbiter.poll(self.clock.now());
        }
        arbiter.poll(self.clock.now());
        self.release(arbiter, at);
    }

    fn tap(&self, arbiter: &mut Arbiter, at: Point) {
        self.press(arbiter, at);
        self.release(arbiter, at);
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let inbox = Rc::new(Inbox::new(SUBJECTS.iter().copied(), 360.0, 56.0));
    let mut arbiter = GestureArbiter::builder(Rc::clone(&inbox))
        .feature(Feature::ItemDrag, true)
        .feature(Feature::MultiSelect, true)
        .listener(inbox.clone())
        .selection_animator(Rc::new(ConsoleSelection))
        .toolbar(Rc::new(ConsoleToolbar))
        .title_template("{count} selected")
        .build()
        .context("building the gesture arbiter")?;
    let animator = arbiter
        .default_drag_animator()
        .context("item drag installs a drag animator")?;
    let finger = Finger {
        clock: EventClock::new(),
    };

    println!("=== Swipe-to-delete and multi-select ===");
    println!("inbox: {:?}", inbox.subjects());
    println!();

    println!("Short swipe on row 1 (not past the delete threshold):");
    let key = inbox.key_at(1).context("row 1 exists")?;
    finger.swipe(&mut arbiter, inbox.row_center(1), &[12.0, 24.0, 40.0, 60.0]);
    while animator.is_animating() {
        let offset = animator.translation_at(key, finger.clock.now());
        println!("  row {} offset {offset:.1}", key.0);
        thread::sleep(FRAME * 3);
    }

    println!("Long swipe on \"Lunch on Friday?\":");
    let row = inbox
        .position_of("Lunch on Friday?")
        .context("message is listed")?;
    let key = inbox.key_at(row).context("row exists")?;
    finger.swipe(&mut arbiter, inbox.row_center(row), &[12.0, 30.0, 60.0, 90.0, 120.0]);
    if inbox.position_of("Lunch on Friday?").is_some() {
        bail!("armed swipe did not delete the row");
    }
    if animator.translation_at(key, finger.clock.now()) != 0.0 || animator.is_animating() {
        bail!("deleted row kept its drag offset");
    }
    println!();

    println!("Long-press row 0, then tap rows 2 and 0:");
    finger.hold(&mut arbiter, inbox.row_center(0));
    finger.tap(&mut arbiter, inbox.row_center(2));
    finger.tap(&mut arbiter, inbox.row_center(0));
    println!("  selected: {:?}", arbiter.selected_indices());

    println!("Swipe while selecting is ignored:");
    finger.swipe(&mut arbiter, inbox.row_center(3), &[12.0, 60.0]);
    println!("  still selecting: {}", arbiter.is_selecting());

    println!("Finishing selection:");
    arbiter.finish_selection();
    println!();

    println!("Tap row 0:");
    finger.tap(&mut arbiter, inbox.row_center(0));

    println!();
    println!("inbox: {:?}", inbox.subjects());
    Ok(())
}
