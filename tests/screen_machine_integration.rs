//! Screen machine integration tests: hook ordering, transitions and shutdown.

use aberredshell::platform::EventSource;
use aberredshell::screens::machine::ScreenMachine;
use aberredshell::screens::{Screen, Transition};
use aberredshell::systems::gameloop::LoopControl;

/// Context that records every hook call and can request close on a given poll.
#[derive(Default)]
struct Recorder {
    log: Vec<String>,
    polls: u32,
    close_on_poll: Option<u32>,
}

impl Recorder {
    fn record(&mut self, event: String) {
        self.log.push(event);
    }
}

impl EventSource for Recorder {
    fn poll_close_requested(&mut self) -> bool {
        self.polls += 1;
        self.close_on_poll.is_some_and(|n| self.polls >= n)
    }
}

enum Plan {
    Idle,
    SwitchOnStep(u32, &'static str),
    QuitOnStep(u32),
}

struct Scripted {
    name: &'static str,
    steps: u32,
    plan: Plan,
}

impl Scripted {
    fn idle(name: &'static str) -> Box<dyn Screen<Recorder>> {
        Box::new(Scripted {
            name,
            steps: 0,
            plan: Plan::Idle,
        })
    }

    fn with_plan(name: &'static str, plan: Plan) -> Box<dyn Screen<Recorder>> {
        Box::new(Scripted {
            name,
            steps: 0,
            plan,
        })
    }
}

impl Screen<Recorder> for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn enter(&mut self, ctx: &mut Recorder) {
        ctx.record(format!("{}.enter", self.name));
    }

    fn exit(&mut self, ctx: &mut Recorder) {
        ctx.record(format!("{}.exit", self.name));
    }

    fn step(&mut self, ctx: &mut Recorder) -> Transition<Recorder> {
        self.steps += 1;
        ctx.record(format!("{}.step", self.name));
        match self.plan {
            Plan::SwitchOnStep(n, next) if n == self.steps => {
                Transition::Switch(Scripted::idle(next))
            }
            Plan::QuitOnStep(n) if n == self.steps => Transition::Quit,
            _ => Transition::Stay,
        }
    }

    fn render(&mut self, ctx: &mut Recorder, fraction: f32) {
        ctx.record(format!("{}.render({:.2})", self.name, fraction));
    }
}

#[test]
fn activate_then_replace_then_shutdown_runs_hooks_in_order() {
    let mut ctx = Recorder::default();
    let mut machine = ScreenMachine::new();

    machine.activate(&mut ctx, Some(Scripted::idle("a")));
    machine.activate(&mut ctx, Some(Scripted::idle("b")));
    machine.shutdown(&mut ctx);

    assert_eq!(ctx.log, vec!["a.enter", "a.exit", "b.enter", "b.exit"]);
    assert!(!machine.is_active());
    assert_eq!(machine.transitions(), 3);
}

#[test]
fn activating_none_on_an_inactive_machine_runs_no_hooks() {
    let mut ctx = Recorder::default();
    let mut machine: ScreenMachine<Recorder> = ScreenMachine::new();

    machine.activate(&mut ctx, None);

    assert!(ctx.log.is_empty());
    assert!(!machine.is_active());
    assert_eq!(machine.active_name(), None);
}

#[test]
fn shutdown_twice_exits_once() {
    let mut ctx = Recorder::default();
    let mut machine = ScreenMachine::new();
    machine.activate(&mut ctx, Some(Scripted::idle("a")));

    machine.shutdown(&mut ctx);
    machine.shutdown(&mut ctx);

    assert_eq!(ctx.log, vec!["a.enter", "a.exit"]);
}

#[test]
fn inactive_machine_step_quits() {
    let mut ctx = Recorder::default();
    let mut machine: ScreenMachine<Recorder> = ScreenMachine::new();

    assert_eq!(machine.step(&mut ctx), LoopControl::Quit);
    assert!(ctx.log.is_empty());
}

#[test]
fn close_request_quits_without_stepping_the_screen() {
    let mut ctx = Recorder {
        close_on_poll: Some(2),
        ..Default::default()
    };
    let mut machine = ScreenMachine::new();
    machine.activate(&mut ctx, Some(Scripted::idle("a")));

    assert_eq!(machine.step(&mut ctx), LoopControl::Continue);
    assert_eq!(machine.step(&mut ctx), LoopControl::Quit);

    assert_eq!(ctx.log, vec!["a.enter", "a.step"]);
    // The screen stays active until the application shuts the machine down.
    assert_eq!(machine.active_name(), Some("a"));
    machine.shutdown(&mut ctx);
    assert_eq!(ctx.log.last().map(String::as_str), Some("a.exit"));
}

#[test]
fn switch_from_step_applies_after_the_step_returns() {
    let mut ctx = Recorder::default();
    let mut machine = ScreenMachine::new();
    machine.activate(&mut ctx, Some(Scripted::with_plan("a", Plan::SwitchOnStep(1, "b"))));

    assert_eq!(machine.step(&mut ctx), LoopControl::Continue);
    assert_eq!(machine.active_name(), Some("b"));
    assert_eq!(machine.step(&mut ctx), LoopControl::Continue);
    machine.render(&mut ctx, 0.5);

    assert_eq!(
        ctx.log,
        vec![
            "a.enter",
            "a.step",
            "a.exit",
            "b.enter",
            "b.step",
            "b.render(0.50)"
        ]
    );
    assert_eq!(machine.transitions(), 2);
}

#[test]
fn quit_from_screen_keeps_it_active() {
    let mut ctx = Recorder::default();
    let mut machine = ScreenMachine::new();
    machine.activate(&mut ctx, Some(Scripted::with_plan("a", Plan::QuitOnStep(2))));

    assert_eq!(machine.step(&mut ctx), LoopControl::Continue);
    assert_eq!(machine.step(&mut ctx), LoopControl::Quit);
    assert!(machine.is_active());
    assert!(!ctx.log.iter().any(|e| e == "a.exit"));
}

#[test]
fn render_without_active_screen_does_nothing() {
    let mut ctx = Recorder::default();
    let mut machine: ScreenMachine<Recorder> = ScreenMachine::new();
    machine.render(&mut ctx, 0.25);
    assert!(ctx.log.is_empty());
}
