// Example: tune the heuristic for a device class with a short screen.
use keyboard_aware::{DetectorPolicy, KeyboardVisibilityDetector, MeasurementSample};

fn main() {
    let default = KeyboardVisibilityDetector::default();
    let tuned = KeyboardVisibilityDetector::new(DetectorPolicy::new().with_threshold(0.15));

    let sample = MeasurementSample::height_change(720, 800, 640);
    println!(
        "ratio={:?}",
        KeyboardVisibilityDetector::height_ratio(sample)
    );
    println!("default={:?}", default.evaluate(sample, 800));
    println!("tuned={:?}", tuned.evaluate(sample, 800));
}
