use std::ops::Mul;

use crate::error::ImgprocError;

/// A 2D affine transform in homogeneous coordinates.
///
/// The matrix is stored row-major and acts on `(row, col, 1)` column vectors, so
/// `m[0]` produces the row coordinate and `m[1]` the column coordinate. The bottom row is
/// always `[0, 0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMatrix {
    m: [[f32; 3]; 3],
}

impl AffineMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Create a new affine matrix from its rows.
    ///
    /// # Errors
    ///
    /// Fails if an entry is not finite or the bottom row is not `[0, 0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use bpimage_imgproc::warp::AffineMatrix;
    ///
    /// let m = AffineMatrix::new([[1.0, 0.0, 2.0], [0.0, 1.0, 3.0], [0.0, 0.0, 1.0]]).unwrap();
    /// assert_eq!(m.transform_point(1.0, 1.0), (3.0, 4.0));
    ///
    /// assert!(AffineMatrix::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 1.0]]).is_err());
    /// ```
    pub fn new(m: [[f32; 3]; 3]) -> Result<Self, ImgprocError> {
        if m.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ImgprocError::invalid_parameter(
                "matrix",
                "all entries must be finite",
            ));
        }

        if m[2] != [0.0, 0.0, 1.0] {
            return Err(ImgprocError::invalid_parameter(
                "matrix",
                format!("bottom row must be [0, 0, 1], got {:?}", m[2]),
            ));
        }

        Ok(Self { m })
    }

    /// Create a new affine matrix from 9 values in row-major order.
    pub fn from_slice(values: &[f32]) -> Result<Self, ImgprocError> {
        let [a, b, c, d, e, f, g, h, i]: [f32; 9] = values.try_into().map_err(|_| {
            ImgprocError::invalid_parameter(
                "matrix",
                format!("expected 9 values for a 3x3 matrix, got {}", values.len()),
            )
        })?;
        Self::new([[a, b, c], [d, e, f], [g, h, i]])
    }

    /// A translation by `dr` rows and `dc` columns.
    pub fn translation(dr: f32, dc: f32) -> Self {
        Self {
            m: [[1.0, 0.0, dr], [0.0, 1.0, dc], [0.0, 0.0, 1.0]],
        }
    }

    /// A scaling by `sr` along the rows and `sc` along the columns.
    pub fn scaling(sr: f32, sc: f32) -> Self {
        Self {
            m: [[sr, 0.0, 0.0], [0.0, sc, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// A rotation about the origin by `angle` degrees.
    ///
    /// Positive angles turn the content counter-clockwise as displayed, with rows growing
    /// downwards.
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// A shear with `x' = x + shear_x * y` and `y' = shear_y * x + y`.
    ///
    /// `x` is the column and `y` the row coordinate.
    pub fn shear(shear_x: f32, shear_y: f32) -> Self {
        Self {
            m: [[1.0, shear_y, 0.0], [shear_x, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// The rows of the matrix.
    pub fn as_array(&self) -> &[[f32; 3]; 3] {
        &self.m
    }

    /// The determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        let [[a, b, _], [d, e, _], _] = self.m;
        a * e - b * d
    }

    /// The inverse transform.
    ///
    /// # Errors
    ///
    /// Fails with [`ImgprocError::SingularTransform`] if the linear part is not invertible.
    ///
    /// # Example
    ///
    /// ```
    /// use bpimage_imgproc::warp::AffineMatrix;
    ///
    /// let m = AffineMatrix::translation(2.0, -1.0);
    /// assert_eq!(m.inverse().unwrap(), AffineMatrix::translation(-2.0, 1.0));
    ///
    /// assert!(AffineMatrix::scaling(0.0, 1.0).inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Self, ImgprocError> {
        let [[a, b, c], [d, e, f], _] = self.m;

        let det = self.determinant();
        let norm = (a * e).abs().max((b * d).abs());
        if !det.is_finite() || det.abs() <= f32::EPSILON * norm {
            return Err(ImgprocError::SingularTransform(det));
        }

        let inv_det = 1.0 / det;
        let (ia, ib) = (e * inv_det, -b * inv_det);
        let (id, ie) = (-d * inv_det, a * inv_det);

        Ok(Self {
            m: [
                [ia, ib, -(ia * c + ib * f)],
                [id, ie, -(id * c + ie * f)],
                [0.0, 0.0, 1.0],
            ],
        })
    }

    /// Map the point `(row, col)` through the transform.
    pub fn transform_point(&self, row: f32, col: f32) -> (f32, f32) {
        let [[a, b, c], [d, e, f], _] = self.m;
        (a * row + b * col + c, d * row + e * col + f)
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for AffineMatrix {
    type Output = Self;

    /// Compose two transforms, `rhs` is applied first.
    fn mul(self, rhs: Self) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        // keep the affine bottom row exact
        m[2] = [0.0, 0.0, 1.0];
        Self { m }
    }
}
