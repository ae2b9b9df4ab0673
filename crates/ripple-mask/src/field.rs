//! Mask registry and depth-field composition.

use crate::shape::MaskShape;
use indexmap::IndexMap;
use ndarray::{Array2, Zip};
use ripple_core::{MaskError, MaskId};
use ripple_space::Domain;
use tracing::debug;

/// A validated mask: a `[0, 1]` multiplier over the domain grid.
#[derive(Clone, Debug)]
pub struct Mask {
    kind: &'static str,
    rel_deep: Option<f64>,
    values: Array2<f64>,
}

impl Mask {
    /// Evaluate `shape` over `domain` and validate the result.
    ///
    /// If `rel_deep` is set, every cell equal to zero is remapped to it
    /// before validation, turning a wall into a shallower bed.
    ///
    /// # Errors
    ///
    /// - `InvalidRelativeDepth` if `rel_deep` lies outside `[0, 1]`.
    /// - Any generator error from [`MaskShape::generate`].
    /// - `ValueOutOfRange` if a (remapped) value lies outside `[0, 1]`.
    pub fn build(
        domain: &Domain,
        shape: &MaskShape,
        rel_deep: Option<f64>,
    ) -> Result<Self, MaskError> {
        if let Some(value) = rel_deep {
            if !(0.0..=1.0).contains(&value) {
                return Err(MaskError::InvalidRelativeDepth { value });
            }
        }
        let mut values = shape.generate(domain)?;
        if let Some(deep) = rel_deep {
            values.mapv_inplace(|v| if v == 0.0 { deep } else { v });
        }
        if let Some(((r, c), &value)) = values
            .indexed_iter()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(MaskError::ValueOutOfRange {
                value,
                cell: (r, c),
            });
        }
        Ok(Self {
            kind: shape.kind(),
            rel_deep,
            values,
        })
    }

    /// Validate a precomputed array.
    pub fn from_array(
        domain: &Domain,
        values: Array2<f64>,
        rel_deep: Option<f64>,
    ) -> Result<Self, MaskError> {
        Self::build(domain, &MaskShape::Array(values), rel_deep)
    }

    /// Name of the generator that produced this mask.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Relative depth applied to zero cells, if any.
    pub fn rel_deep(&self) -> Option<f64> {
        self.rel_deep
    }

    /// The multiplier grid.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

/// Registry of masks and their composed depth field.
///
/// Holds the masks in registration order alongside the last composition:
/// the relative depth (product of all masks), the masked depth
/// (`relative · base_depth`), and the baseline propagation speed
/// (`sqrt(g · masked_depth)`). Mutations mark the composition stale;
/// [`recompose`](DepthField::recompose) brings it up to date.
#[derive(Clone, Debug)]
pub struct DepthField {
    shape: (usize, usize),
    base_depth: f64,
    gravity: f64,
    masks: IndexMap<MaskId, Mask>,
    next_id: u32,
    stale: bool,
    relative: Array2<f64>,
    masked_depth: Array2<f64>,
    baseline_speed: Array2<f64>,
}

impl DepthField {
    /// An empty (all open water) depth field over `domain`.
    ///
    /// `base_depth` and `gravity` must already be validated as finite and
    /// positive by the caller.
    pub fn new(domain: &Domain, base_depth: f64, gravity: f64) -> Self {
        let shape = domain.shape();
        let relative = Array2::ones(shape);
        let masked_depth = Array2::from_elem(shape, base_depth);
        let baseline_speed = Array2::from_elem(shape, (gravity * base_depth).sqrt());
        Self {
            shape,
            base_depth,
            gravity,
            masks: IndexMap::new(),
            next_id: 0,
            stale: false,
            relative,
            masked_depth,
            baseline_speed,
        }
    }

    /// Register a validated mask.
    ///
    /// Returns `ShapeMismatch` if the mask was built for a different grid;
    /// the registry is untouched in that case.
    pub fn insert(&mut self, mask: Mask) -> Result<MaskId, MaskError> {
        if mask.values.dim() != self.shape {
            return Err(MaskError::ShapeMismatch {
                expected: self.shape,
                got: mask.values.dim(),
            });
        }
        let id = MaskId(self.next_id);
        self.next_id += 1;
        self.masks.insert(id, mask);
        self.stale = true;
        Ok(id)
    }

    /// Remove a mask, returning it.
    pub fn remove(&mut self, id: MaskId) -> Result<Mask, MaskError> {
        let mask = self
            .masks
            .shift_remove(&id)
            .ok_or(MaskError::UnknownMask { id })?;
        self.stale = true;
        Ok(mask)
    }

    /// Remove every mask.
    pub fn clear(&mut self) {
        if !self.masks.is_empty() {
            self.masks.clear();
            self.stale = true;
        }
    }

    /// Recompute the composed fields from the registered masks.
    ///
    /// Idempotent: calling it twice without an intervening mutation yields
    /// the same fields.
    pub fn recompose(&mut self) {
        self.relative = compose(self.shape, self.masks.values());
        self.masked_depth = &self.relative * self.base_depth;
        let g = self.gravity;
        self.baseline_speed = self.masked_depth.mapv(|h| (g * h.max(0.0)).sqrt());
        self.stale = false;
        debug!(
            masks = self.masks.len(),
            obstructed = self.relative.iter().filter(|&&v| v == 0.0).count(),
            "depth field recomposed"
        );
    }

    /// Whether masks changed since the last [`recompose`](DepthField::recompose).
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Look up a registered mask.
    pub fn get(&self, id: MaskId) -> Option<&Mask> {
        self.masks.get(&id)
    }

    /// Registered masks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (MaskId, &Mask)> {
        self.masks.iter().map(|(id, m)| (*id, m))
    }

    /// Number of registered masks.
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Whether no mask is registered.
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Grid shape `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Depth of open water.
    pub fn base_depth(&self) -> f64 {
        self.base_depth
    }

    /// Gravitational constant used for the baseline speed.
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Composed relative depth in `[0, 1]`.
    pub fn relative_depth(&self) -> &Array2<f64> {
        &self.relative
    }

    /// `relative_depth · base_depth`.
    pub fn masked_depth(&self) -> &Array2<f64> {
        &self.masked_depth
    }

    /// `sqrt(g · masked_depth)`.
    pub fn baseline_speed(&self) -> &Array2<f64> {
        &self.baseline_speed
    }

    /// Cells that are fully obstructed (relative depth exactly zero).
    pub fn obstacles(&self) -> Array2<bool> {
        self.relative.mapv(|v| v == 0.0)
    }

    /// Whether every cell is either open water or a wall.
    pub fn is_binary(&self) -> bool {
        self.relative.iter().all(|&v| v == 0.0 || v == 1.0)
    }
}

/// Elementwise product of `masks`, or all ones when there are none.
pub fn compose<'a>(
    shape: (usize, usize),
    masks: impl IntoIterator<Item = &'a Mask>,
) -> Array2<f64> {
    let mut out = Array2::ones(shape);
    for mask in masks {
        Zip::from(&mut out)
            .and(&mask.values)
            .for_each(|o, &m| *o *= m);
    }
    out
}
