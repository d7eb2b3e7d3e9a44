//! WebAssembly entry points.
//!
//! Coordinates are passed as an array of `{ x, y }` objects and the ACO
//! configuration as an `AcoConfig`-shaped object; missing fields take their
//! defaults.

use crate::aco::{AcoConfig, AcoRunner};
use crate::exact::BruteForceRunner;
use crate::geometry::{DistanceMatrix, Point};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::{prelude::*, JsError};

/// Solution shape handed back to JavaScript.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Solved {
    /// Closed tour starting and ending at node 0.
    path: Vec<usize>,
    distance: f64,
    history: Vec<f64>,
    elapsed_ms: f64,
}

/// Runs ACO over `coords` with `config`.
#[wasm_bindgen(js_name = solveAco)]
pub fn solve_aco(coords: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let points: Vec<Point> = from_value(coords)?;
    let config: AcoConfig = from_value(config)?;
    let distances = DistanceMatrix::from_points(&points)?;

    let result = AcoRunner::run(&distances, &config)?;
    let solved = Solved {
        path: result.normalized_best()?,
        distance: result.best_cost,
        history: result.cost_history,
        elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
    };
    Ok(to_value(&solved)?)
}

/// Solves `coords` exactly. Keep the instance small.
#[wasm_bindgen(js_name = solveExact)]
pub fn solve_exact(coords: JsValue) -> Result<JsValue, JsError> {
    let points: Vec<Point> = from_value(coords)?;
    let distances = DistanceMatrix::from_points(&points)?;

    let result = BruteForceRunner::run(&distances);
    let solved = Solved {
        path: result.closed_best(),
        distance: result.best_cost,
        history: Vec::new(),
        elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
    };
    Ok(to_value(&solved)?)
}
