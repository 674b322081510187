//! Internal force and deflected-shape diagrams
//!
//! Shear and moment come from the method of sections: every sample sums the
//! contributions acting to the left of the cut. Deflection is reconstructed
//! between nodes with cubic Hermite shape functions from the nodal
//! translations and rotations.
//!
//! Sign conventions are fixed:
//! - positive V(x): net upward force to the left of the section
//! - positive M(x): net counter-clockwise moment from the left
//! - positive w(x): upward

use std::collections::HashMap;

use crate::elements::Node;
use crate::loads::{Load, LoadCategory};
use crate::math;
use crate::results::{Diagram, DiagramPoint, NodeDisplacement, Reaction};

/// Default number of sample intervals along the beam
pub const DEFAULT_RESOLUTION: usize = 200;

/// Tolerance for including a point contribution at a sample, in m
const SAMPLE_EPS: f64 = 1e-3;

/// Magnitudes below this snap to zero in the shear and moment sequences
const SNAP_TOLERANCE: f64 = 1e-4;

/// A concentrated contribution at the section sum
struct PointAction {
    x: f64,
    force: f64,
    moment: f64,
}

/// A uniform distributed contribution
struct SpanAction {
    start_x: f64,
    end_x: f64,
    w: f64,
}

/// Compute shear, moment and deflection diagrams
///
/// Samples `resolution + 1` positions at uniform spacing `length /
/// resolution`. Applied loads are filtered by `category`; the supplied
/// reactions are ingested as-is, so the caller is responsible for passing
/// reactions consistent with the requested category.
pub fn diagrams(
    length: f64,
    nodes: &[Node],
    loads: &[Load],
    reactions: &HashMap<String, Reaction>,
    displacements: &HashMap<String, NodeDisplacement>,
    resolution: usize,
    category: LoadCategory,
) -> Diagram {
    let resolution = resolution.max(1);

    let mut points: Vec<PointAction> = Vec::new();
    let mut spans: Vec<SpanAction> = Vec::new();

    for load in loads.iter().filter(|l| l.category() == category) {
        match load {
            Load::PointForce { x, magnitude, .. } => points.push(PointAction {
                x: *x,
                force: *magnitude,
                moment: 0.0,
            }),
            Load::PointMoment { x, magnitude, .. } => points.push(PointAction {
                x: *x,
                force: 0.0,
                moment: *magnitude,
            }),
            Load::DistributedForce {
                start_x, end_x, w, ..
            } => spans.push(SpanAction {
                start_x: *start_x,
                end_x: *end_x,
                w: *w,
            }),
        }
    }

    // Reactions enter the section sum as point actions; the moment sign is
    // inverted to move from the external-reaction convention to the internal
    // one used by the method of sections
    for node in nodes {
        if let Some(reaction) = reactions.get(&node.id) {
            points.push(PointAction {
                x: node.x,
                force: reaction.fy,
                moment: -reaction.m,
            });
        }
    }

    let step = length / resolution as f64;
    let mut shear = Vec::with_capacity(resolution + 1);
    let mut moment = Vec::with_capacity(resolution + 1);
    let mut deflection = Vec::with_capacity(resolution + 1);

    for i in 0..=resolution {
        let x = i as f64 * step;

        let (v, m) = section_sums(x, length, &points, &spans);
        shear.push(DiagramPoint { x, value: snap(v) });
        moment.push(DiagramPoint { x, value: snap(m) });
        deflection.push(DiagramPoint {
            x,
            value: interpolate_deflection(x, nodes, displacements),
        });
    }

    Diagram {
        shear,
        moment,
        deflection,
    }
}

/// Sum contributions to the left of the section at `x`
fn section_sums(x: f64, length: f64, points: &[PointAction], spans: &[SpanAction]) -> (f64, f64) {
    let mut v = 0.0;
    let mut m = 0.0;

    for action in points {
        // Contributions at the far end stay out of the sum so the last
        // samples show the internal force arriving at the final support
        if action.x >= length - SAMPLE_EPS {
            continue;
        }
        if action.x <= x + SAMPLE_EPS {
            v += action.force;
            m += action.force * (x - action.x) + action.moment;
        }
    }

    for span in spans {
        if x > span.start_x {
            let width = x.min(span.end_x) - span.start_x;
            let centroid = span.start_x + width / 2.0;
            v += span.w * width;
            m += span.w * width * (x - centroid);
        }
    }

    (v, m)
}

/// Hermite interpolation of the deflected shape at `x`
fn interpolate_deflection(
    x: f64,
    nodes: &[Node],
    displacements: &HashMap<String, NodeDisplacement>,
) -> f64 {
    for pair in nodes.windows(2) {
        let (start, end) = (&pair[0], &pair[1]);
        if x < start.x - SAMPLE_EPS || x > end.x + SAMPLE_EPS {
            continue;
        }

        let (Some(d1), Some(d2)) = (displacements.get(&start.id), displacements.get(&end.id))
        else {
            continue;
        };

        let l = end.x - start.x;
        let xi = (x - start.x) / l;
        let n = math::hermite_shape(xi, l);

        return n[0] * d1.y + n[1] * d1.rotation + n[2] * d2.y + n[3] * d2.rotation;
    }

    0.0
}

fn snap(value: f64) -> f64 {
    if value.abs() < SNAP_TOLERANCE {
        0.0
    } else {
        value
    }
}
