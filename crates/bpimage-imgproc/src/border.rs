/// Border handling modes for neighborhood operations.
///
/// Decides which source sample is read when a kernel window extends past the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    /// Replicate the value of the nearest border pixel.
    /// Corresponds to OpenCV's `BORDER_REPLICATE`.
    #[default]
    Replicate,

    /// Reflect the image across the border, excluding the border pixel.
    /// Corresponds to OpenCV's `BORDER_REFLECT_101`.
    Reflect101,

    /// Fill all out-of-bounds samples with a constant value.
    /// Corresponds to OpenCV's `BORDER_CONSTANT`.
    Constant(f32),
}

impl BorderMode {
    /// Resolve a possibly out-of-range index along an axis of length `len`.
    ///
    /// # Returns
    ///
    /// The in-bounds index to sample, or `None` when the sample must be taken from
    /// [`BorderMode::constant_value`].
    ///
    /// # Example
    ///
    /// ```
    /// use bpimage_imgproc::border::BorderMode;
    ///
    /// assert_eq!(BorderMode::Replicate.map_index(-2, 5), Some(0));
    /// assert_eq!(BorderMode::Reflect101.map_index(-2, 5), Some(2));
    /// assert_eq!(BorderMode::Constant(0.0).map_index(5, 5), None);
    /// ```
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }

        match self {
            BorderMode::Constant(_) => None,
            BorderMode::Replicate => Some(if i < 0 { 0 } else { len - 1 }),
            BorderMode::Reflect101 => {
                if len == 1 {
                    return Some(0);
                }
                let period = (2 * len - 2) as isize;
                let r = i.rem_euclid(period) as usize;
                Some(if r < len { r } else { period as usize - r })
            }
        }
    }

    /// The value used for samples that fall outside the image.
    pub fn constant_value(&self) -> f32 {
        match self {
            BorderMode::Constant(value) => *value,
            _ => 0.0,
        }
    }

    /// Build a lookup table resolving the padded indices `[-radius, len + radius)`.
    ///
    /// Entry `i` of the table holds the resolved index of `i - radius`.
    pub(crate) fn lookup_table(&self, len: usize, radius: usize) -> Vec<Option<usize>> {
        (0..len + 2 * radius)
            .map(|i| self.map_index(i as isize - radius as isize, len))
            .collect()
    }
}
