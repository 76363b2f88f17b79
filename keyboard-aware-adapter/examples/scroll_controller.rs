// Example: drive a keyboard-aware scroll controller the way a toolkit binding would.
use keyboard_aware::{MeasurementSample, TrackerOptions};
use keyboard_aware_adapter::{
    ContentOffset, ElementLayout, KeyboardAwareScrollController, ScrollControllerOptions, sink_fn,
};

fn main() {
    let sink = sink_fn(|event| println!("bridge: {} {:?}", event.name(), event.payload));
    let mut c = KeyboardAwareScrollController::new(
        7,
        TrackerOptions::new(),
        ScrollControllerOptions::new().with_extra_scroll_height(16),
        sink,
    );

    c.on_measure(MeasurementSample::new(0, 0, 1080, 1920), 0);
    c.on_scroll(ContentOffset::new(0, 300));
    c.set_focused_input(Some(ElementLayout::new(0, 1150, 1000, 120)));

    let out = c.on_measure(MeasurementSample::height_change(1080, 1920, 1200), 16);
    println!("shown: inset={} outcome={out:?}", c.bottom_inset());

    for now_ms in (32..=320).step_by(16) {
        if let Some(cmd) = c.tick(now_ms) {
            println!("t={now_ms} scroll_to={cmd:?}");
            c.on_scroll(cmd.offset());
        }
    }

    let out = c.on_measure(MeasurementSample::height_change(1080, 1200, 1920), 400);
    println!("hidden: inset={} outcome={out:?}", c.bottom_inset());
}
