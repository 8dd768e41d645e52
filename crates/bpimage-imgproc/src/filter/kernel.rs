use crate::error::ImgprocError;

/// A square convolution kernel of odd size greater than one.
///
/// The weights are stored in row-major order. A kernel may also carry the two 1D factors it
/// was built from, in which case [`crate::filter::convolve`] applies it as two 1D passes.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    data: Vec<f32>,
    factors: Option<(Vec<f32>, Vec<f32>)>,
}

impl Kernel {
    /// Create a new kernel from its weights.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of rows of the kernel.
    /// * `cols` - The number of columns of the kernel.
    /// * `data` - The weights in row-major order.
    ///
    /// # Errors
    ///
    /// Fails if the kernel is not square, not odd-sized, has size one or less, if the data
    /// length does not match the shape, or if a weight is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use bpimage_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::new(3, 3, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(kernel.size(), 3);
    /// assert_eq!(kernel.radius(), 1);
    ///
    /// assert!(Kernel::new(2, 2, vec![0.0; 4]).is_err());
    /// assert!(Kernel::new(3, 5, vec![0.0; 15]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, ImgprocError> {
        if rows != cols || rows <= 1 || rows % 2 == 0 {
            return Err(ImgprocError::InvalidKernelShape(rows, cols));
        }

        if data.len() != rows * cols {
            return Err(ImgprocError::InvalidKernelData(data.len(), rows * cols));
        }

        if data.iter().any(|w| !w.is_finite()) {
            return Err(ImgprocError::invalid_parameter(
                "kernel",
                "all weights must be finite",
            ));
        }

        Ok(Self {
            size: rows,
            data,
            factors: None,
        })
    }

    /// Create a new kernel of the given size from a function of `(ky, kx)`.
    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> f32) -> Result<Self, ImgprocError> {
        let data = (0..size * size).map(|i| f(i / size, i % size)).collect();
        Self::new(size, size, data)
    }

    /// Create a separable kernel as the outer product of two 1D kernels.
    ///
    /// # Arguments
    ///
    /// * `column` - The vertical 1D kernel, applied along the rows.
    /// * `row` - The horizontal 1D kernel, applied along the columns.
    ///
    /// # Example
    ///
    /// ```
    /// use bpimage_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::separable(vec![1.0, 2.0, 1.0], vec![-1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(kernel.get(1, 0), Some(-2.0));
    /// assert!(kernel.factors().is_some());
    /// ```
    pub fn separable(column: Vec<f32>, row: Vec<f32>) -> Result<Self, ImgprocError> {
        let data = column
            .iter()
            .flat_map(|&cy| row.iter().map(move |&rx| cy * rx))
            .collect();

        let mut kernel = Self::new(column.len(), row.len(), data)?;
        kernel.factors = Some((column, row));
        Ok(kernel)
    }

    /// Create the identity kernel of the given size.
    pub fn identity(size: usize) -> Result<Self, ImgprocError> {
        let center = size / 2;
        Self::from_fn(size, |ky, kx| {
            if ky == center && kx == center {
                1.0
            } else {
                0.0
            }
        })
    }

    /// The number of rows (and columns) of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The half width of the kernel, `size / 2`.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// The weight at row `ky` and column `kx`.
    pub fn get(&self, ky: usize, kx: usize) -> Option<f32> {
        if ky >= self.size || kx >= self.size {
            return None;
        }
        self.data.get(ky * self.size + kx).copied()
    }

    /// The weights in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The sum of all the weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// The `(column, row)` 1D factors of a separable kernel.
    pub fn factors(&self) -> Option<(&[f32], &[f32])> {
        self.factors
            .as_ref()
            .map(|(column, row)| (column.as_slice(), row.as_slice()))
    }
}
