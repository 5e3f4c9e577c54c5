// demos/save_load_weights.rs
use logreg_gd::model::{BinaryClassifier, LogisticRegression};
use ndarray::array;

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let x = array![[0.0, 0.5], [0.5, 0.0], [5.0, 4.5], [4.5, 5.0]];
    let y = array![0u8, 0, 1, 1];

    // Reference hyperparameters, progress printed every iteration.
    let mut model = LogisticRegression::new(100, 0.01, 0.01, 0.001);
    model.fit(x.view(), y.view()).unwrap();

    let dir = std::env::temp_dir();
    let path = dir.join("logreg_demo_weights.txt");
    model.save_weights(&path);
    println!("Saved: {}", std::fs::read_to_string(&path).unwrap());

    let mut restored = LogisticRegression::default();
    restored.load_weights(&path);
    assert_eq!(restored.weights(), model.weights());
    println!("Restored predictions: {}", restored.predict(x.view()).unwrap());

    // A failed load is reported on stderr and leaves the weights untouched.
    restored.load_weights(dir.join("does_not_exist.txt"));
    assert_eq!(restored.weights(), model.weights());

    let _ = std::fs::remove_file(&path);
}
