// demos/train_logistic.rs
use logreg_gd::{
    metrics::accuracy,
    model::{BinaryClassifier, LogisticRegression, LogisticRegressionConfig},
};
use ndarray::array;

fn main() {
    // Binary data: y = 1 if x1 + x2 > 3, otherwise 0
    let x = array![
        [1.0, 1.0], // sum=2 → y=0
        [1.0, 2.0], // sum=3 → y=0 (boundary)
        [2.0, 2.0], // sum=4 → y=1
        [3.0, 1.0], // sum=4 → y=1
        [0.5, 0.5], // sum=1 → y=0
        [3.0, 3.0], // sum=6 → y=1
    ];
    let y = array![0u8, 0, 1, 1, 0, 1];

    let config = LogisticRegressionConfig::builder()
        .max_iter(1000)
        .alpha(0.1)
        .lambda(0.0)
        .tolerance(1e-3)
        .seed(42)
        .verbose(false)
        .build()
        .unwrap();

    let mut model = LogisticRegression::with_config(config);
    model.fit(x.view(), y.view()).unwrap();

    let history = model.history().unwrap();
    println!(
        "Iterations: {}, initial logloss: {:.5}, final logloss: {:.5}",
        history.iterations(),
        history.initial_loss,
        history.final_loss()
    );
    println!("Weights (coefficients, then bias): {:?}", model.weights().unwrap());

    let preds = model.predict(x.view()).unwrap();
    println!("Training accuracy: {:.3}", accuracy(y.view(), preds.view()).unwrap());

    let query = array![[2.5, 2.0]];
    let prob = model.predict_prob(query.view()).unwrap();
    println!("P(y=1 | [2.5, 2.0]) = {:.4}", prob[0]);
}
