//! Start/stop lifecycle of the frame loop, driven by a manual clock.

use floating_tags_engine::simulation::{
    ConstantRandom, FrameHandle, FrameScheduler, LoopState, PointerCapture, Simulator,
};
use floating_tags_engine::core::error::Result;
use floating_tags_engine::{default_tags, PhysicsConfig, TagWorldCore};

#[derive(Default)]
struct ManualScheduler {
    next_id: i32,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

#[derive(Default)]
struct RecordingCapture {
    attached: bool,
    attaches: u32,
    detaches: u32,
}

impl PointerCapture for RecordingCapture {
    fn attach(&mut self) -> Result<()> {
        assert!(!self.attached, "listeners attached twice");
        self.attached = true;
        self.attaches += 1;
        Ok(())
    }

    fn detach(&mut self) {
        assert!(self.attached, "detach without attach");
        self.attached = false;
        self.detaches += 1;
    }
}

fn simulator(width: f32, height: f32) -> Simulator<ManualScheduler, RecordingCapture> {
    let mut config = PhysicsConfig::default();
    config.layout.jitter = 0.0;
    let world = TagWorldCore::new(width, height, default_tags(), config, Box::new(ConstantRandom(0)))
        .expect("world");
    Simulator::new(world, ManualScheduler::default(), RecordingCapture::default())
}

#[test]
fn one_frame_outstanding_at_a_time() {
    let mut sim = simulator(800.0, 400.0);
    assert_eq!(sim.state(), LoopState::Stopped);

    sim.start().unwrap();
    sim.start().unwrap();
    assert_eq!(sim.state(), LoopState::Running);
    assert_eq!(sim.scheduler().requested.len(), 1);

    for n in 1..=5u64 {
        assert!(sim.on_frame().unwrap());
        assert_eq!(sim.world().frame(), n);
        assert_eq!(sim.scheduler().requested.len() as u64, n + 1);
    }
    assert_eq!(sim.pending_frame(), Some(FrameHandle(6)));
}

#[test]
fn stop_cancels_pending_frame() {
    let mut sim = simulator(800.0, 400.0);
    sim.start().unwrap();
    sim.on_frame().unwrap();

    sim.stop();
    assert_eq!(sim.state(), LoopState::Stopped);
    assert_eq!(sim.scheduler().cancelled, vec![FrameHandle(2)]);
    assert_eq!(sim.pending_frame(), None);

    // A frame that was already in flight does nothing
    assert!(!sim.on_frame().unwrap());
    assert_eq!(sim.world().frame(), 1);
    assert_eq!(sim.scheduler().requested.len(), 2);
}

#[test]
fn start_waits_for_a_usable_size() {
    let mut sim = simulator(0.0, 0.0);
    sim.start().unwrap();

    assert_eq!(sim.state(), LoopState::WaitingForSize);
    assert!(sim.scheduler().requested.is_empty());

    assert!(!sim.resize(0.0, 300.0).unwrap());
    assert!(sim.scheduler().requested.is_empty());

    assert!(sim.resize(800.0, 400.0).unwrap());
    assert_eq!(sim.state(), LoopState::Running);
    assert_eq!(sim.scheduler().requested.len(), 1);
    assert!(sim.on_frame().unwrap());
}

#[test]
fn listeners_live_exactly_as_long_as_the_drag() {
    let mut sim = simulator(800.0, 400.0);
    sim.start().unwrap();
    let p = sim.world().body(0).unwrap().pos;

    assert!(sim.pointer_down(0, p.x, p.y).unwrap());
    assert!(sim.is_capturing());
    assert!(sim.capture().attached);

    // Ignored second grab does not attach again
    let q = sim.world().body(1).unwrap().pos;
    assert!(!sim.pointer_down(1, q.x, q.y).unwrap());

    sim.pointer_move(p.x + 40.0, p.y);
    sim.on_frame().unwrap();
    assert!(sim.pointer_up(2000.0, 2000.0));

    assert!(!sim.capture().attached);
    assert_eq!(sim.capture().attaches, 1);
    assert_eq!(sim.capture().detaches, 1);
    assert!(!sim.world().body(0).unwrap().held);
}

#[test]
fn stop_mid_drag_releases_listeners_and_body() {
    let mut sim = simulator(800.0, 400.0);
    sim.start().unwrap();
    let p = sim.world().body(3).unwrap().pos;
    sim.pointer_down(3, p.x, p.y).unwrap();
    sim.pointer_move(p.x + 100.0, p.y - 30.0);

    sim.stop();

    assert!(!sim.capture().attached);
    assert_eq!(sim.world().held_index(), None);
    let body = sim.world().body(3).unwrap();
    assert!(!body.held);
    assert_eq!(body.velocity.x, 0.0);
    assert_eq!(body.velocity.y, 0.0);
}

#[test]
fn pointer_up_without_drag_is_harmless() {
    let mut sim = simulator(800.0, 400.0);
    assert!(!sim.pointer_up(10.0, 10.0));
    assert!(!sim.pointer_move(10.0, 10.0));
    assert_eq!(sim.capture().detaches, 0);
}

#[test]
fn hit_test_grab_attaches_listeners() {
    let mut sim = simulator(800.0, 400.0);
    let p = sim.world().body(5).unwrap().pos;
    assert_eq!(sim.pointer_down_at(p.x, p.y).unwrap(), Some(5));
    assert!(sim.capture().attached);
    assert_eq!(sim.pointer_down_at(-50.0, -50.0).unwrap(), None);
}
