use crate::config::CoverageConfig;
use crate::decay::TimeFade;
use glam::Vec2;
use instant::Instant;

pub struct CoverageGrid {
    cols: usize,
    rows: usize,
    cell_size: f32,
    fade: TimeFade,
    touched: Vec<Option<Instant>>,
    covered: usize,
}

impl CoverageGrid {
    pub fn new(width: f32, height: f32, config: &CoverageConfig) -> Self {
        let cols = (width / config.cell_size).ceil().max(1.0) as usize;
        let rows = (height / config.cell_size).ceil().max(1.0) as usize;
        Self {
            cols,
            rows,
            cell_size: config.cell_size,
            fade: TimeFade::new(config.fade_window, config.fade_enabled),
            touched: vec![None; cols * rows],
            covered: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn total_cells(&self) -> usize {
        self.touched.len()
    }

    pub fn covered_cells(&self) -> usize {
        self.covered
    }

    pub fn set_fade_enabled(&mut self, enabled: bool) {
        self.fade.enabled = enabled;
    }

    /// Mark every cell whose center is within `radius` of `pos`, stamped now.
    pub fn update(&mut self, pos: Vec2, radius: f32) {
        self.update_at(pos, radius, Instant::now());
    }

    /// Mark cells as in [`update`](Self::update) with an explicit timestamp.
    ///
    /// Timestamps are overwritten, not merged: only the latest pass counts.
    pub fn update_at(&mut self, pos: Vec2, radius: f32, now: Instant) {
        if !(radius >= 0.0) {
            return;
        }
        let size = self.cell_size;
        let min_cx = ((pos.x - radius) / size).floor().max(0.0) as usize;
        let min_cy = ((pos.y - radius) / size).floor().max(0.0) as usize;
        let max_cx = ((pos.x + radius) / size).floor();
        let max_cy = ((pos.y + radius) / size).floor();
        if max_cx < 0.0 || max_cy < 0.0 {
            return;
        }
        let max_cx = (max_cx as usize).min(self.cols - 1);
        let max_cy = (max_cy as usize).min(self.rows - 1);
        let r2 = radius * radius;
        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                let center = Vec2::new((cx as f32 + 0.5) * size, (cy as f32 + 0.5) * size);
                if center.distance_squared(pos) > r2 {
                    continue;
                }
                let slot = &mut self.touched[cy * self.cols + cx];
                if slot.is_none() {
                    self.covered += 1;
                }
                *slot = Some(now);
            }
        }
    }

    /// Share of cells ever swept, in percent (0..100).
    pub fn percentage_covered(&self) -> f32 {
        if self.touched.is_empty() {
            return 0.0;
        }
        if self.covered == self.touched.len() {
            return 100.0;
        }
        self.covered as f32 / self.touched.len() as f32 * 100.0
    }

    fn cell_index(&self, pos: Vec2) -> Option<usize> {
        let cx = (pos.x / self.cell_size).floor();
        let cy = (pos.y / self.cell_size).floor();
        if cx < 0.0 || cy < 0.0 || cx >= self.cols as f32 || cy >= self.rows as f32 {
            return None;
        }
        Some(cy as usize * self.cols + cx as usize)
    }

    pub fn is_covered(&self, pos: Vec2) -> bool {
        self.cell_index(pos).is_some_and(|i| self.touched[i].is_some())
    }

    pub fn last_touched(&self, cx: usize, cy: usize) -> Option<Instant> {
        if cx >= self.cols || cy >= self.rows {
            return None;
        }
        self.touched[cy * self.cols + cx]
    }

    /// Render opacity of a cell at `now` (0 for never-swept cells).
    pub fn opacity_at(&self, cx: usize, cy: usize, now: Instant) -> f32 {
        self.last_touched(cx, cy).map_or(0.0, |t| self.fade.opacity(t, now))
    }

    pub fn reset(&mut self) {
        self.touched.fill(None);
        self.covered = 0;
    }
}
