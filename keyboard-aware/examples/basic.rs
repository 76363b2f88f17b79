// Example: feed a tracker the measurement passes of a keyboard show/hide cycle.
use keyboard_aware::{KeyboardTracker, MeasurementSample, TrackerOptions};

fn main() {
    let mut tracker = KeyboardTracker::new(42, TrackerOptions::new());

    let passes = [
        MeasurementSample::new(0, 0, 1080, 1920),        // initial layout
        MeasurementSample::height_change(1080, 1920, 1880), // toolbar appears
        MeasurementSample::height_change(1080, 1880, 1100), // keyboard opens
        MeasurementSample::new(1080, 1100, 1920, 600),   // rotation
        MeasurementSample::height_change(1920, 600, 1000), // keyboard closes
    ];

    for (i, sample) in passes.into_iter().enumerate() {
        let now_ms = 16 * i as u64;
        let event = tracker.on_measure(sample, now_ms);
        println!("pass={i} sample={sample:?} event={event:?} state={:?}", tracker.state());
    }
}
