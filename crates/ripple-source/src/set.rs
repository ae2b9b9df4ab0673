//! The registered set of forcing sources.

use crate::source::Source;
use ndarray::{Array2, Zip};
use ripple_core::SourceId;
use smallvec::SmallVec;

/// Combined forcing of every source at one step.
#[derive(Clone, Debug, PartialEq)]
pub struct Forcing {
    /// Summed forcing values, zero outside `active`.
    pub values: Array2<f64>,
    /// Cells that must be overwritten with `values` at this step.
    pub active: Array2<bool>,
}

impl Forcing {
    /// Overwrite the active cells of `target` with the forcing values.
    pub fn apply(&self, mut target: ndarray::ArrayViewMut2<'_, f64>) {
        Zip::from(&mut target)
            .and(&self.values)
            .and(&self.active)
            .for_each(|t, &v, &on| {
                if on {
                    *t = v;
                }
            });
    }

    /// Whether no cell is forced.
    pub fn is_idle(&self) -> bool {
        !self.active.iter().any(|&a| a)
    }
}

/// Registered sources, in registration order.
#[derive(Clone, Debug)]
pub struct SourceSet {
    shape: (usize, usize),
    sources: SmallVec<[(SourceId, Source); 4]>,
    next_id: u32,
}

impl SourceSet {
    /// An empty set for a grid of `shape` `(ny, nx)`.
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            shape,
            sources: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Register `source`, returning its id.
    ///
    /// The caller guarantees `source` was resolved on the same grid.
    pub fn add(&mut self, source: Source) -> SourceId {
        debug_assert_eq!(source.region().dim(), self.shape);
        let id = SourceId(self.next_id);
        self.next_id += 1;
        self.sources.push((id, source));
        id
    }

    /// Look up a source.
    pub fn get(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    /// Sources in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceId, &Source)> {
        self.sources.iter().map(|(id, s)| (*id, s))
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no source is registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Sum of every source's forcing grid at `step`; all zeros when empty.
    pub fn evaluate(&self, step: usize, dt: f64, depth: f64) -> Array2<f64> {
        self.forcing(step, dt, depth).values
    }

    /// Union of every source region: the cells any source may clamp.
    pub fn forced_positions(&self) -> Array2<bool> {
        let mut out = Array2::from_elem(self.shape, false);
        for (_, s) in &self.sources {
            Zip::from(&mut out)
                .and(s.region())
                .for_each(|o, &r| *o |= r);
        }
        out
    }

    /// Summed values and clamp mask at `step`.
    ///
    /// A source contributes to `active` only when its waveform imposes a
    /// value at this step, so a drop source clamps at step 0 and then
    /// leaves its cells to evolve freely.
    pub fn forcing(&self, step: usize, dt: f64, depth: f64) -> Forcing {
        let mut values = Array2::zeros(self.shape);
        let mut active = Array2::from_elem(self.shape, false);
        for (_, s) in &self.sources {
            let Some(v) = s.value(step, dt, depth) else {
                continue;
            };
            Zip::from(&mut values)
                .and(&mut active)
                .and(s.region())
                .for_each(|val, act, &inside| {
                    if inside {
                        *val += v;
                        *act = true;
                    }
                });
        }
        Forcing { values, active }
    }
}
