// ============================================================
// Layer 5 — Estimators
// ============================================================
// The regression step at the end of a pipeline. Three kinds are
// understood, selected by the "type" tag in the artifact:
//
//   linear            → intercept + Σ wᵢ·xᵢ           (linear.rs)
//   random_forest     → mean of the trees' outputs
//   gradient_boosting → init + learning_rate · Σ trees
//
// Trees are flat node arrays. A split sends a row left when
// x[feature] <= threshold. Children always point further down
// the array, so walking a tree can never loop.

use serde::Deserialize;

use crate::domain::error::PredictError;
use crate::ml::error::PipelineError;
use crate::ml::linear::LinearRegressor;

/// Estimator section of a pipeline artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EstimatorSpec {
    Linear {
        intercept: f64,
        weights:   Vec<f64>,
    },
    RandomForest {
        trees: Vec<TreeSpec>,
    },
    GradientBoosting {
        init:          f64,
        learning_rate: f64,
        trees:         Vec<TreeSpec>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeSpec {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature:   usize,
        threshold: f64,
        left:      usize,
        right:     usize,
    },
    Leaf {
        value: f64,
    },
}

/// A validated regression tree.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn new(index: usize, spec: TreeSpec, n_features: usize) -> Result<Self, PipelineError> {
        let invalid = |message: String| PipelineError::InvalidTree { tree: index, message };

        if spec.nodes.is_empty() {
            return Err(invalid("no nodes".into()));
        }

        let len = spec.nodes.len();
        for (i, node) in spec.nodes.iter().enumerate() {
            match *node {
                Node::Split { feature, threshold, left, right } => {
                    if feature >= n_features {
                        return Err(invalid(format!(
                            "node {i} splits on feature {feature}, but there are only {n_features}"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(invalid(format!("node {i} has a NaN threshold")));
                    }
                    for child in [left, right] {
                        if child <= i || child >= len {
                            return Err(invalid(format!(
                                "node {i} points to child {child} outside {}..{len}",
                                i + 1
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(invalid(format!("leaf {i} is not finite")));
                    }
                }
            }
        }

        Ok(Self { nodes: spec.nodes })
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                Node::Leaf { value } => return Ok(value),
                Node::Split { feature, threshold, left, right } => {
                    let x = features.get(feature).ok_or_else(|| {
                        PredictError::Inference(format!(
                            "tree needs feature {feature}, row has {}",
                            features.len()
                        ))
                    })?;
                    i = if *x <= threshold { left } else { right };
                }
            }
        }
    }
}

pub enum Estimator {
    Linear(LinearRegressor),
    RandomForest {
        trees: Vec<DecisionTree>,
    },
    GradientBoosting {
        init:          f64,
        learning_rate: f64,
        trees:         Vec<DecisionTree>,
    },
}

impl Estimator {
    /// Validate the estimator section against the encoder's feature count.
    pub fn from_spec(spec: EstimatorSpec, n_features: usize) -> Result<Self, PipelineError> {
        match spec {
            EstimatorSpec::Linear { intercept, weights } => {
                if weights.len() != n_features {
                    return Err(PipelineError::WeightCount {
                        expected: n_features,
                        actual:   weights.len(),
                    });
                }
                if !intercept.is_finite() {
                    return Err(PipelineError::NonFinite { name: "intercept" });
                }
                if weights.iter().any(|w| !w.is_finite()) {
                    return Err(PipelineError::NonFinite { name: "weights" });
                }
                Ok(Estimator::Linear(LinearRegressor::new(intercept, &weights)))
            }
            EstimatorSpec::RandomForest { trees } => {
                let trees = build_trees(trees, n_features)?;
                Ok(Estimator::RandomForest { trees })
            }
            EstimatorSpec::GradientBoosting { init, learning_rate, trees } => {
                if !init.is_finite() {
                    return Err(PipelineError::NonFinite { name: "init" });
                }
                if !learning_rate.is_finite() {
                    return Err(PipelineError::NonFinite { name: "learning_rate" });
                }
                let trees = build_trees(trees, n_features)?;
                Ok(Estimator::GradientBoosting { init, learning_rate, trees })
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::Linear(_)                => "linear",
            Estimator::RandomForest { .. }      => "random_forest",
            Estimator::GradientBoosting { .. }  => "gradient_boosting",
        }
    }

    /// Predict from an encoded feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        match self {
            Estimator::Linear(model) => model.predict(features),
            Estimator::RandomForest { trees } => {
                let sum = sum_trees(trees, features)?;
                Ok(sum / trees.len() as f64)
            }
            Estimator::GradientBoosting { init, learning_rate, trees } => {
                let sum = sum_trees(trees, features)?;
                Ok(init + learning_rate * sum)
            }
        }
    }
}

fn sum_trees(trees: &[DecisionTree], features: &[f64]) -> Result<f64, PredictError> {
    trees.iter().map(|t| t.predict(features)).sum()
}

fn build_trees(specs: Vec<TreeSpec>, n_features: usize) -> Result<Vec<DecisionTree>, PipelineError> {
    if specs.is_empty() {
        return Err(PipelineError::NoTrees);
    }
    specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| DecisionTree::new(i, spec, n_features))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // x[0] <= 8 → 10.0, else x[1] <= 0.5 → 11.0, else 12.0
    fn stump_json() -> serde_json::Value {
        json!({"nodes": [
            {"feature": 0, "threshold": 8.0, "left": 1, "right": 2},
            {"value": 10.0},
            {"feature": 1, "threshold": 0.5, "left": 3, "right": 4},
            {"value": 11.0},
            {"value": 12.0}
        ]})
    }

    fn tree(v: serde_json::Value) -> TreeSpec {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_tree_walks_left_on_less_or_equal() {
        let t = DecisionTree::new(0, tree(stump_json()), 2).unwrap();
        assert_eq!(t.predict(&[8.0, 0.0]).unwrap(), 10.0);
        assert_eq!(t.predict(&[16.0, 0.0]).unwrap(), 11.0);
        assert_eq!(t.predict(&[16.0, 1.0]).unwrap(), 12.0);
    }

    #[test]
    fn test_short_feature_vector_is_an_inference_error() {
        let t = DecisionTree::new(0, tree(stump_json()), 2).unwrap();
        assert!(matches!(t.predict(&[]), Err(PredictError::Inference(_))));
    }

    #[test]
    fn test_forest_is_mean_of_trees() {
        let spec: EstimatorSpec = serde_json::from_value(json!({
            "type": "random_forest",
            "trees": [stump_json(), {"nodes": [{"value": 13.0}]}]
        }))
        .unwrap();
        let est = Estimator::from_spec(spec, 2).unwrap();
        assert_eq!(est.kind(), "random_forest");
        assert_eq!(est.predict(&[4.0, 0.0]).unwrap(), 11.5);
    }

    #[test]
    fn test_boosting_adds_scaled_sum_to_init() {
        let spec: EstimatorSpec = serde_json::from_value(json!({
            "type": "gradient_boosting",
            "init": 10.0,
            "learning_rate": 0.1,
            "trees": [
                {"nodes": [{"value": 2.0}]},
                {"nodes": [{"value": 3.0}]}
            ]
        }))
        .unwrap();
        let est = Estimator::from_spec(spec, 0).unwrap();
        assert!((est.predict(&[]).unwrap() - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_linear_weight_count_must_match_features() {
        let spec: EstimatorSpec = serde_json::from_value(json!({
            "type": "linear", "intercept": 1.0, "weights": [1.0, 2.0]
        }))
        .unwrap();
        assert!(matches!(
            Estimator::from_spec(spec, 3),
            Err(PipelineError::WeightCount { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_backward_child_is_rejected() {
        let bad = tree(json!({"nodes": [
            {"feature": 0, "threshold": 1.0, "left": 0, "right": 1},
            {"value": 1.0}
        ]}));
        assert!(matches!(
            DecisionTree::new(3, bad, 1),
            Err(PipelineError::InvalidTree { tree: 3, .. })
        ));
    }

    #[test]
    fn test_out_of_range_feature_is_rejected() {
        assert!(DecisionTree::new(0, tree(stump_json()), 1).is_err());
    }

    #[test]
    fn test_empty_forest_is_rejected() {
        let spec: EstimatorSpec =
            serde_json::from_value(json!({"type": "random_forest", "trees": []})).unwrap();
        assert!(matches!(Estimator::from_spec(spec, 2), Err(PipelineError::NoTrees)));
    }
}
