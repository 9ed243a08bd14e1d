//! Hysteresis peak detection over a power sequence.
//!
//! A single left-to-right pass that alternates between hunting for a
//! maximum and hunting for the following trough. A candidate maximum is
//! only committed once the sequence has descended more than `delta` below
//! it; the detector then ignores everything until the sequence rises more
//! than `delta` above the running minimum, which re-arms max hunting.
//! Noise wiggles smaller than `delta` can therefore never register a peak.
//!
//! `delta` is relative: `threshold * max(values)`, so the discrimination
//! scales with the strongest component instead of an absolute level.
//!
//! A maximum still being tracked when the sequence ends is dropped — only
//! a confirmed descent commits a peak. Callers that need "the" peak of a
//! spectrum rely on this strictness: an unconfirmed trailing rise is more
//! often a leaked band edge than a tone.

use crate::{AnalysisError, Result};

/// One detected peak: a position in the scanned sequence and the value
/// there. Created per call, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Index into the scanned sequence.
    pub index: usize,
    /// Value at that index.
    pub power: f32,
}

/// Scan `values` for local maxima that survive hysteresis `threshold`.
///
/// Returns peaks sorted descending by power — `result[0]` is the globally
/// strongest confirmed peak. O(n) time, O(1) state beyond the output.
///
/// # Arguments
///
/// * `threshold` - Relative hysteresis in `(0, 1]`. 1.0 keeps at most the
///   single most discriminable peak; smaller values admit finer structure.
/// * `values` - The sequence to scan (typically in-band spectrum powers).
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] for an empty sequence (the relative
/// threshold is undefined); [`AnalysisError::InvalidConfig`] for a
/// threshold outside `(0, 1]`.
pub fn detect_peaks(threshold: f32, values: &[f32]) -> Result<Vec<Peak>> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(AnalysisError::InvalidConfig(format!(
            "peak threshold {threshold} must be in (0, 1]"
        )));
    }

    let peak_value = values.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let delta = threshold * peak_value;

    let mut mx = f32::NEG_INFINITY;
    let mut mn = f32::INFINITY;
    let mut mxpos = 0usize;
    let mut lookformax = true;

    let mut result = Vec::new();

    for (i, &this) in values.iter().enumerate() {
        if this > mx {
            mx = this;
            mxpos = i;
        }
        if this < mn {
            mn = this;
        }

        if lookformax {
            if this < mx - delta {
                result.push(Peak {
                    index: mxpos,
                    power: mx,
                });
                mn = this;
                lookformax = false;
            }
        } else if this > mn + delta {
            mx = this;
            mxpos = i;
            lookformax = true;
        }
    }

    result.sort_by(|a, b| b.power.total_cmp(&a.power));

    Ok(result)
}
