//! Frame diffing.

use crate::buffer::Buffer;

/// A horizontal run of changed cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtyRun {
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

/// Cells that differ between two frames, grouped into runs per row.
#[derive(Clone, Debug, Default)]
pub struct BufferDiff {
    pub runs: Vec<DirtyRun>,
    pub change_count: usize,
}

impl BufferDiff {
    /// Compare two frames. Frames of different sizes count as fully changed.
    #[must_use]
    pub fn compute(old: &Buffer, new: &Buffer) -> Self {
        let (width, height) = new.size();
        if old.size() != new.size() {
            let runs = (0..height)
                .filter(|_| width > 0)
                .map(|y| DirtyRun { x: 0, y, width })
                .collect();
            return Self {
                runs,
                change_count: width as usize * height as usize,
            };
        }

        let mut diff = Self::default();
        let old_cells = old.cells();
        let new_cells = new.cells();
        for y in 0..height {
            let row = y as usize * width as usize;
            let mut run: Option<DirtyRun> = None;
            for x in 0..width {
                let i = row + x as usize;
                if old_cells[i] == new_cells[i] {
                    continue;
                }
                diff.change_count += 1;
                match run.as_mut() {
                    Some(r) if r.x + r.width == x => r.width += 1,
                    _ => {
                        diff.runs.extend(run.take());
                        run = Some(DirtyRun { x, y, width: 1 });
                    }
                }
            }
            diff.runs.extend(run);
        }
        diff
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.change_count == 0
    }

    /// Whether repainting everything is likely cheaper than patching.
    #[must_use]
    pub fn should_full_redraw(&self, total_cells: usize) -> bool {
        self.change_count > total_cells / 2
    }
}
