//! The rule matrix for group-pair attraction forces.
//!
//! The rule matrix defines how particle groups affect each other. Each cell
//! `[self_group][other_group]` holds a signed coefficient in `[-1, 1]`:
//! positive attracts, negative repels, zero ignores. Complex emergent
//! behavior arises from nothing more than this table and pairwise distance
//! falloff.
//!
//! # Example
//!
//! ```ignore
//! use plife::prelude::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let rules = RuleMatrix::symmetric(3, &mut rng);
//! assert_eq!(rules.get(0, 2), rules.get(2, 0));
//! ```

use std::path::Path;

use rand::Rng;

use crate::error::ExportError;

/// How to generate a rule matrix during setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixMode {
    /// `rule[i][j] == rule[j][i]` for all pairs: every interaction is mutual.
    Symmetric,
    /// Every cell drawn independently; chases and flights become possible
    /// because `rule[i][j]` and `rule[j][i]` can disagree.
    Asymmetric,
}

/// Square table of signed attraction coefficients between groups.
///
/// Stored flattened row-major: `[self_group * size + other_group]`.
/// Once installed in an engine the matrix is only ever replaced wholesale
/// by a new setup, never patched cell by cell.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMatrix {
    coeffs: Vec<f32>,
    size: usize,
}

impl RuleMatrix {
    /// Create an all-zero matrix for `size` groups.
    ///
    /// Zero everywhere means no group exerts any force on any other.
    pub fn zeros(size: usize) -> Self {
        Self {
            coeffs: vec![0.0; size * size],
            size,
        }
    }

    /// Generate a symmetric matrix with coefficients uniform in `[-1, 1]`.
    ///
    /// The upper triangle, diagonal included, is drawn and mirrored, so
    /// `get(i, j) == get(j, i)` holds for every pair.
    pub fn symmetric(size: usize, rng: &mut impl Rng) -> Self {
        let mut matrix = Self::zeros(size);
        for i in 0..size {
            for j in i..size {
                let coeff = rng.gen_range(-1.0..1.0);
                matrix.set(i, j, coeff);
                if j != i {
                    matrix.set(j, i, coeff);
                }
            }
        }
        matrix
    }

    /// Generate an asymmetric matrix with coefficients uniform in `[-1, 1]`.
    ///
    /// Every cell, diagonal included, is drawn independently exactly once.
    pub fn asymmetric(size: usize, rng: &mut impl Rng) -> Self {
        let mut matrix = Self::zeros(size);
        for i in 0..size {
            for j in 0..size {
                matrix.set(i, j, rng.gen_range(-1.0..1.0));
            }
        }
        matrix
    }

    /// Number of groups this matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Attraction coefficient felt by `self_group` toward `other_group`.
    pub fn get(&self, self_group: usize, other_group: usize) -> f32 {
        self.coeffs[self_group * self.size + other_group]
    }

    /// Set one coefficient.
    ///
    /// Intended for hand-building a matrix before handing it to
    /// [`Simulation::with_matrix`](crate::Simulation::with_matrix); an
    /// installed matrix is never mutated.
    pub fn set(&mut self, self_group: usize, other_group: usize, coeff: f32) {
        self.coeffs[self_group * self.size + other_group] = coeff;
    }

    // ========== Export ==========

    /// Render the matrix as delimited text, one row per line, four-decimal
    /// fixed-point coefficients separated by commas.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for i in 0..self.size {
            let row: Vec<String> = (0..self.size)
                .map(|j| format!("{:.4}", self.get(i, j)))
                .collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }

    /// Write the CSV rendering to a file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }

    /// Serialize the matrix as nested JSON arrays, one inner array per row.
    pub fn to_json(&self) -> Result<String, ExportError> {
        let rows: Vec<Vec<f32>> = (0..self.size)
            .map(|i| (0..self.size).map(|j| self.get(i, j)).collect())
            .collect();
        Ok(serde_json::to_string(&rows)?)
    }

    /// Render the matrix as raw RGBA pixels, one pixel per cell, row-major.
    ///
    /// Negative coefficients map to the red channel, positive to blue,
    /// alpha always opaque. A renderer can blit this directly or scale it
    /// up for an on-screen matrix inspector.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.size * self.size * 4);
        for i in 0..self.size {
            for j in 0..self.size {
                pixels.extend_from_slice(&cell_rgba(self.get(i, j)));
            }
        }
        pixels
    }

    /// Write the RGBA rendering as a PNG, one pixel per cell.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let size = self.size as u32;
        let img: image::RgbaImage = image::ImageBuffer::from_fn(size, size, |x, y| {
            image::Rgba(cell_rgba(self.get(y as usize, x as usize)))
        });
        img.save(path)?;
        Ok(())
    }
}

fn cell_rgba(coeff: f32) -> [u8; 4] {
    let level = (coeff.abs().min(1.0) * 255.0) as u8;
    if coeff.is_sign_negative() {
        [level, 0, 0, 255]
    } else {
        [0, 0, level, 255]
    }
}
