use crate::{BeamDirection, BeamPoint, ValidBeamConfig, DMX_MAX};

/// Evenly spaced DMX values from 0 to 255 inclusive.
#[derive(Debug, Clone)]
pub struct DmxSamples {
    count: usize,
    pos: usize,
}

impl DmxSamples {
    pub(crate) fn new(count: usize) -> Self {
        assert!(count >= 2);
        Self { count, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Exact at both endpoints: `value(0) == 0.` and `value(count - 1) == 255.`
    pub fn value(&self, i: usize) -> f64 {
        (i as f64 * DMX_MAX) / (self.count - 1) as f64
    }
}

impl Iterator for DmxSamples {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.count {
            let before = self.pos;
            self.pos += 1;
            Some(self.value(before))
        } else {
            None
        }
    }
}

/// One evaluated grid position. `row` selects the tilt sample, `col` the pan
/// sample, matching the meshgrid layout of the output planes.
#[derive(Debug)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub pan: f64,
    pub tilt: f64,
    pub direction: BeamDirection,
}

/// Walks the full pan x tilt Cartesian product in row-major order, mapping
/// every cell through the configured fixture. Cells are independent of each
/// other, so consumers may buffer and reorder them freely.
pub struct BeamGridIterator<'a> {
    config: &'a ValidBeamConfig,
    samples: DmxSamples,
    row: usize,
    col: usize,
}

impl<'a> BeamGridIterator<'a> {
    pub fn from_config(config: &'a ValidBeamConfig) -> Self {
        Self {
            config,
            samples: DmxSamples::new(config.samples_per_axis()),
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for BeamGridIterator<'_> {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row == self.samples.len() {
            return None;
        }
        let (row, col) = (self.row, self.col);
        self.col += 1;
        if self.col == self.samples.len() {
            self.col = 0;
            self.row += 1;
        }

        let pan = self.samples.value(col);
        let tilt = self.samples.value(row);
        Some(GridCell {
            row,
            col,
            pan,
            tilt,
            direction: self.config.beam_direction(pan, tilt),
        })
    }
}

/// Component planes of the beam directions over the whole DMX domain, three
/// row-major `samples_per_axis x samples_per_axis` arrays.
pub struct BeamGrid {
    samples_per_axis: usize,
    x: Box<[f64]>,
    y: Box<[f64]>,
    z: Box<[f64]>,
}

impl BeamGrid {
    pub fn evaluate(config: &ValidBeamConfig) -> Self {
        let mut grid = Self::zeroed(config.samples_per_axis());
        for cell in BeamGridIterator::from_config(config) {
            grid.set(&cell);
        }
        log::debug!(
            "Evaluated {n}x{n} beam grid for {:?}",
            config.fixture(),
            n = config.samples_per_axis()
        );
        grid
    }

    fn zeroed(samples_per_axis: usize) -> Self {
        let plane = || vec![0.; samples_per_axis * samples_per_axis].into_boxed_slice();
        Self {
            samples_per_axis,
            x: plane(),
            y: plane(),
            z: plane(),
        }
    }

    fn set(&mut self, cell: &GridCell) {
        let idx = cell.row * self.samples_per_axis + cell.col;
        self.x[idx] = cell.direction.x;
        self.y[idx] = cell.direction.y;
        self.z[idx] = cell.direction.z;
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.samples_per_axis, self.samples_per_axis)
    }

    pub fn direction(&self, row: usize, col: usize) -> BeamDirection {
        let idx = row * self.samples_per_axis + col;
        BeamDirection {
            x: self.x[idx],
            y: self.y[idx],
            z: self.z[idx],
        }
    }

    pub fn x_plane(&self) -> &[f64] {
        &self.x
    }

    pub fn y_plane(&self) -> &[f64] {
        &self.y
    }

    pub fn z_plane(&self) -> &[f64] {
        &self.z
    }

    /// Flattens the grid to single-precision points in row-major cell order,
    /// ready for `bytemuck::cast_slice` or a point-cloud writer.
    pub fn points(&self) -> Vec<BeamPoint> {
        let (rows, cols) = self.shape();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| BeamPoint::from(self.direction(row, col)))
            .collect()
    }
}
