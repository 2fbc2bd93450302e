use crate::config::HeatMapConfig;
use crate::constants::{HEAT_MAX_ALPHA, MAX_STRENGTH, SPREAD_BASE_RADIUS, SPREAD_RADIUS_SPAN};
use crate::decay::FrameDecay;
use crate::metal::{color_for, MetalKind};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeatCell {
    pub value: f32,
    pub metal: Option<MetalKind>,
}

impl HeatCell {
    /// Max-wins merge; the tag follows the update only if it raised the value.
    #[inline]
    fn raise(&mut self, value: f32, metal: Option<MetalKind>) -> bool {
        if value > self.value {
            self.value = value;
            self.metal = metal;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPaint {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

/// Spread radius in cells for an update of the given strength.
#[inline]
pub fn spread_radius(strength: f32) -> i32 {
    let t = (strength / MAX_STRENGTH).clamp(0.0, 1.0);
    (SPREAD_BASE_RADIUS + t * SPREAD_RADIUS_SPAN).ceil() as i32
}

/// Neutral gradient for untagged cells: yellow at low strength to red at full.
pub fn strength_gradient(value: f32) -> [u8; 3] {
    let t = (value / MAX_STRENGTH).clamp(0.0, 1.0);
    [255, (220.0 * (1.0 - t)).round() as u8, 0]
}

/// Paint style for a cell, or `None` when it is too faint to draw.
pub fn paint_for(cell: &HeatCell, config: &HeatMapConfig) -> Option<CellPaint> {
    if cell.value < config.visible_threshold {
        return None;
    }
    let rgb = match cell.metal {
        Some(kind) => color_for(kind, cell.value),
        None => strength_gradient(cell.value),
    };
    let alpha = (cell.value / MAX_STRENGTH).clamp(0.0, 1.0) * HEAT_MAX_ALPHA;
    Some(CellPaint { rgb, alpha })
}

pub struct HeatMapGrid {
    cols: usize,
    rows: usize,
    cell_size: f32,
    paint_threshold: f32,
    decay: FrameDecay,
    cells: Vec<HeatCell>,
}

impl HeatMapGrid {
    pub fn new(width: f32, height: f32, config: &HeatMapConfig) -> Self {
        let cols = (width / config.cell_size).ceil().max(1.0) as usize;
        let rows = (height / config.cell_size).ceil().max(1.0) as usize;
        Self {
            cols,
            rows,
            cell_size: config.cell_size,
            paint_threshold: config.paint_threshold,
            decay: FrameDecay::new(config.decay_rate, config.epsilon, config.decay_enabled),
            cells: vec![HeatCell::default(); cols * rows],
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cells(&self) -> &[HeatCell] {
        &self.cells
    }

    pub fn decay_strategy(&self) -> &FrameDecay {
        &self.decay
    }

    pub fn decay_enabled(&self) -> bool {
        self.decay.enabled
    }

    /// With decay off the grid keeps every peak it has seen.
    pub fn set_decay_enabled(&mut self, enabled: bool) {
        self.decay.enabled = enabled;
    }

    #[inline]
    fn index(&self, cx: i64, cy: i64) -> Option<usize> {
        if cx < 0 || cy < 0 || cx >= self.cols as i64 || cy >= self.rows as i64 {
            return None;
        }
        Some(cy as usize * self.cols + cx as usize)
    }

    /// Cell coordinates under a canvas position (may be out of bounds).
    #[inline]
    pub fn cell_coords(&self, pos: Vec2) -> (i64, i64) {
        (
            (pos.x / self.cell_size).floor() as i64,
            (pos.y / self.cell_size).floor() as i64,
        )
    }

    pub fn cell_at(&self, cx: i64, cy: i64) -> Option<&HeatCell> {
        self.index(cx, cy).map(|i| &self.cells[i])
    }

    pub fn value_at(&self, cx: i64, cy: i64) -> f32 {
        self.cell_at(cx, cy).map_or(0.0, |c| c.value)
    }

    /// Max-wins Gaussian splat around `pos`; readings below the paint
    /// threshold are dropped.
    pub fn update(&mut self, pos: Vec2, strength: f32, metal: Option<MetalKind>) {
        if !(strength >= self.paint_threshold) {
            return;
        }
        let (cx, cy) = self.cell_coords(pos);
        let radius = spread_radius(strength);
        let r2 = (radius * radius) as f32;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = (dx * dx + dy * dy) as f32;
                if d2 > r2 {
                    continue;
                }
                let Some(i) = self.index(cx + dx as i64, cy + dy as i64) else {
                    continue;
                };
                let value = strength * (-d2 / r2).exp();
                self.cells[i].raise(value, metal);
            }
        }
    }

    /// One frame of fade. No-op when decay is disabled.
    pub fn decay(&mut self) {
        if !self.decay.enabled {
            return;
        }
        let decay = self.decay;
        for cell in &mut self.cells {
            if cell.value == 0.0 {
                continue;
            }
            cell.value = decay.step(cell.value);
            if cell.value == 0.0 {
                cell.metal = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(HeatCell::default());
    }

    pub fn max_value(&self) -> f32 {
        self.cells.iter().map(|c| c.value).fold(0.0, f32::max)
    }

    pub fn visible_cells<'a>(
        &'a self,
        config: &'a HeatMapConfig,
    ) -> impl Iterator<Item = (usize, usize, CellPaint)> + 'a {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            paint_for(cell, config).map(|p| (i % self.cols, i / self.cols, p))
        })
    }
}
