// src/mc/histogram.rs
//! Angle histograms and the scorer that fills them
//!
//! # Bucketing
//!
//! The angle domain [0, π] is split into `B` equal buckets; bucket `i`
//! covers `[i·π/B, (i+1)·π/B)`. The angle exactly π belongs to the last
//! bucket, so every angle in the closed domain maps to a valid index.
//!
//! # Scoring
//!
//! The angle between a sample `v` and the unit reference axis `n` is
//! ```text
//! θ = acos(clamp(v·n / |v|, -1, 1))        (geometric)
//! θ = acos(clamp(v·n, -1, 1))              (raw inner product)
//! ```
//! Raw inner-product scoring is only a true angle for unit samples. For the
//! ball sampler it measures the projection onto the axis, which has the
//! density ¾ sin³θ instead of ½ sin θ.

use crate::math_utils::clamp_cosine;
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Bucket counts for one worker or one merged sampler run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Zero-filled histogram with `buckets` buckets
    pub fn new(buckets: usize) -> Self {
        Histogram {
            counts: vec![0; buckets],
        }
    }

    pub fn buckets(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn record(&mut self, bucket: usize) {
        self.counts[bucket] += 1;
    }

    /// Number of recorded samples
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Element-wise sum of two histograms over the same buckets
    pub fn merged(mut self, other: &Histogram) -> Histogram {
        assert_eq!(
            self.buckets(),
            other.buckets(),
            "cannot merge histograms with different bucket counts"
        );
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += b;
        }
        self
    }
}

/// How a sample is turned into an angle with the reference axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Normalize the sample first; always a geometric angle
    #[default]
    Geometric,
    /// Use the raw dot product as the cosine
    RawInnerProduct,
}

/// Bucket index for an angle in [0, π]
pub fn bucket_index(angle: f64, buckets: usize) -> usize {
    let idx = (angle / PI * buckets as f64).floor();
    if idx > 0.0 {
        (idx as usize).min(buckets - 1)
    } else {
        0
    }
}

#[derive(Clone, Debug)]
pub struct AngleScorer {
    axis: Vector3<f64>,
    scoring: Scoring,
    buckets: usize,
}

impl AngleScorer {
    /// `axis` must be unit length
    pub fn new(axis: Vector3<f64>, scoring: Scoring, buckets: usize) -> Self {
        AngleScorer {
            axis,
            scoring,
            buckets,
        }
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }

    pub fn angle(&self, v: &Vector3<f64>) -> f64 {
        let dot = v.dot(&self.axis);
        let cosine = match self.scoring {
            Scoring::Geometric => {
                let norm = v.norm();
                // a zero sample has no direction; score it as aligned
                if norm > 0.0 {
                    dot / norm
                } else {
                    1.0
                }
            }
            Scoring::RawInnerProduct => dot,
        };
        clamp_cosine(cosine).acos()
    }

    pub fn bucket(&self, v: &Vector3<f64>) -> usize {
        bucket_index(self.angle(v), self.buckets)
    }

    pub fn score(&self, v: &Vector3<f64>, histogram: &mut Histogram) {
        histogram.record(self.bucket(v));
    }
}
