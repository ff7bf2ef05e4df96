use mdconsole_core::{Console, Message, MessageLevel};
use mdconsole_testkit::{assert_json_eq, DrawCommand, FrameHarness, RecordingPresenter};
use mdconsole_ui::{ConsoleOverlay, FixedAdvanceShaper, OverlayConfig};
use std::thread;

#[test]
fn messages_from_worker_threads_reach_the_overlay_in_order() {
    let (sender, mut console) = Console::channel();
    let workers: Vec<_> = (0..3)
        .map(|worker| {
            let sender = console.sender();
            thread::spawn(move || {
                sender
                    .log(MessageLevel::Info, format!("worker {worker} ready"), 2.0)
                    .unwrap();
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    sender.log(MessageLevel::Warn, "main thread", 2.0).unwrap();

    let mut overlay = ConsoleOverlay::default();
    overlay.update(&mut console, 0.0);
    assert_eq!(overlay.len(), 4);

    let mut presenter = RecordingPresenter::at(1.0);
    let summary = overlay.draw(&FixedAdvanceShaper::default(), &mut presenter);
    assert_eq!(summary.boxes.len(), 4);
    assert_eq!(presenter.texts().last(), Some(&"main thread"));

    // Every box sits directly below the previous one.
    for pair in summary.boxes.windows(2) {
        assert_eq!(pair[1].y, pair[0].bottom());
    }
}

#[test]
fn single_error_draws_background_stripe_and_text() {
    let mut harness = FrameHarness::new(OverlayConfig::default(), FixedAdvanceShaper::default());
    harness.push(Message::error("boom", 2.0));
    harness.step(0.0);
    let frame = harness.step(1.0);

    assert_eq!(
        frame.commands,
        vec![
            DrawCommand::FillRect {
                x: 4,
                y: 4,
                width: 270,
                height: 11,
                color: 0xFF19_0000,
            },
            DrawCommand::FillRect {
                x: 4,
                y: 4,
                width: 1,
                height: 11,
                color: 0xFFA0_0000,
            },
            DrawCommand::Text {
                text: "boom".to_string(),
                x: 10,
                y: 5,
                color: 0xFFDC_0000,
            },
        ]
    );
}

#[test]
fn hovering_dims_the_whole_stack() {
    let mut harness = FrameHarness::new(OverlayConfig::default(), FixedAdvanceShaper::default());
    harness
        .push(Message::info("first", 4.0))
        .push(Message::warn("second", 4.0));
    harness.step(0.0);

    harness.set_pointer(Some((10.0, 6.0)));
    let frame = harness.step(1.0);
    assert!(frame.hovered);
    assert!(frame.commands.iter().all(|command| command.alpha() == 102));

    harness.set_pointer(Some((500.0, 500.0)));
    let frame = harness.step(1.5);
    assert!(!frame.hovered);
    assert!(frame.commands.iter().all(|command| command.alpha() == 255));
}

#[test]
fn expired_messages_leave_and_the_stack_closes_up() {
    let mut harness = FrameHarness::new(OverlayConfig::default(), FixedAdvanceShaper::default());
    harness
        .push(Message::info("short", 1.0))
        .push(Message::warn("long", 5.0));
    harness.step(0.0);

    let before = harness.step(0.5);
    assert_eq!(before.boxes.len(), 2);
    assert_eq!(before.boxes[1].y, 15);

    let after = harness.step(1.5);
    assert_eq!(harness.overlay().len(), 1);
    assert_eq!(after.boxes.len(), 1);
    assert_eq!(after.boxes[0].y, 4);
}

#[test]
fn redrawing_a_frame_is_deterministic() {
    let mut harness = FrameHarness::new(OverlayConfig::default(), FixedAdvanceShaper::default());
    harness.push(Message::warn(
        "a warning long enough to wrap across more than one line of the console box",
        3.0,
    ));
    harness.step(0.0);
    let first = harness.step(1.2);
    let second = harness.redraw(1.2);
    assert!(first.boxes[0].lines.len() > 1);
    assert_json_eq(&first, &second).unwrap();
}
