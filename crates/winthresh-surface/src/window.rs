//! Window grid
//!
//! The image is partitioned into `N x N` equally sized windows. With
//! `cell_width = width / N` and `cell_height = height / N`, the windows
//! cover `[0, N * cell_width) x [0, N * cell_height)`; the remainder strip
//! along the right and bottom edges belongs to no window.
//!
//! Windows live in a flat row-major arena indexed by `(gx, gy)`.

use crate::{SurfaceError, SurfaceResult};
use std::ops::{Index, IndexMut};
use winthresh_core::{PixMut, Region};

/// One cell of the window grid
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Grid column
    pub gx: u32,
    /// Grid row
    pub gy: u32,
    /// Pixel extent
    pub region: Region,
    /// Center column, `(gx + 1) * cell_width - cell_width / 2`
    pub center_x: u32,
    /// Center row, `(gy + 1) * cell_height - cell_height / 2`
    pub center_y: u32,
    /// Current threshold
    pub threshold: u8,
    /// Weighted within-class spread at the solved threshold
    pub spread: f64,
    /// Whether the window may donate its threshold to neighbors
    pub is_valid: bool,
    /// Set when the threshold was replaced by a neighbor average
    pub was_repaired: bool,
}

/// The `N x N` arena of windows covering an image
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGrid {
    divisions: u32,
    cell_width: u32,
    cell_height: u32,
    windows: Vec<Window>,
}

impl WindowGrid {
    /// Lay out the grid for an image of the given size.
    ///
    /// Every window starts valid and unrepaired, with threshold 0 and
    /// spread 0.
    ///
    /// # Errors
    /// [`SurfaceError::InvalidDimensions`] if `divisions` is 0 or exceeds
    /// the image width or height.
    pub fn new(width: u32, height: u32, divisions: u32) -> SurfaceResult<Self> {
        if divisions == 0 || width / divisions == 0 || height / divisions == 0 {
            return Err(SurfaceError::InvalidDimensions {
                width,
                height,
                divisions,
            });
        }

        let cell_width = width / divisions;
        let cell_height = height / divisions;

        let mut windows = Vec::with_capacity((divisions * divisions) as usize);
        for gy in 0..divisions {
            for gx in 0..divisions {
                windows.push(Window {
                    gx,
                    gy,
                    region: Region::new(gx * cell_width, gy * cell_height, cell_width, cell_height),
                    center_x: (gx + 1) * cell_width - cell_width / 2,
                    center_y: (gy + 1) * cell_height - cell_height / 2,
                    threshold: 0,
                    spread: 0.0,
                    is_valid: true,
                    was_repaired: false,
                });
            }
        }

        Ok(Self {
            divisions,
            cell_width,
            cell_height,
            windows,
        })
    }

    /// Number of windows along each axis
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// Width of every window in pixels
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Height of every window in pixels
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Total number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Always false for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The pixel area covered by the windows
    pub fn coverage(&self) -> Region {
        Region::new(
            0,
            0,
            self.divisions * self.cell_width,
            self.divisions * self.cell_height,
        )
    }

    /// Get a window by grid coordinates
    pub fn get(&self, gx: u32, gy: u32) -> Option<&Window> {
        self.offset(gx, gy).map(|i| &self.windows[i])
    }

    /// Get a mutable window by grid coordinates
    pub fn get_mut(&mut self, gx: u32, gy: u32) -> Option<&mut Window> {
        self.offset(gx, gy).map(|i| &mut self.windows[i])
    }

    /// Iterate windows in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, Window> {
        self.windows.iter()
    }

    /// Iterate windows mutably in row-major order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Window> {
        self.windows.iter_mut()
    }

    /// Number of windows currently flagged invalid
    pub fn invalid_count(&self) -> usize {
        self.windows.iter().filter(|w| !w.is_valid).count()
    }

    /// Grid coordinates of the 8-connected neighbors of `(gx, gy)`,
    /// clipped at the grid edges
    pub fn neighbors(&self, gx: u32, gy: u32) -> impl Iterator<Item = (u32, u32)> + use<> {
        let n = i64::from(self.divisions);
        let (cx, cy) = (i64::from(gx), i64::from(gy));
        (-1i64..=1)
            .flat_map(move |dy| (-1i64..=1).map(move |dx| (cx + dx, cy + dy)))
            .filter(move |&(x, y)| (x, y) != (cx, cy) && x >= 0 && y >= 0 && x < n && y < n)
            .map(|(x, y)| (x as u32, y as u32))
    }

    /// Write the threshold of window `(gx, gy)` over its whole extent
    pub fn broadcast(&self, gx: u32, gy: u32, surface: &mut PixMut) -> SurfaceResult<()> {
        let window = self.get(gx, gy).ok_or_else(|| {
            SurfaceError::InvalidParameters(format!(
                "window ({gx}, {gy}) outside a {0}x{0} grid",
                self.divisions
            ))
        })?;
        surface.fill_region(&window.region, window.threshold)?;
        Ok(())
    }

    fn offset(&self, gx: u32, gy: u32) -> Option<usize> {
        if gx < self.divisions && gy < self.divisions {
            Some((gy * self.divisions + gx) as usize)
        } else {
            None
        }
    }
}

impl Index<(u32, u32)> for WindowGrid {
    type Output = Window;

    fn index(&self, (gx, gy): (u32, u32)) -> &Window {
        let divisions = self.divisions;
        self.get(gx, gy)
            .unwrap_or_else(|| panic!("window ({gx}, {gy}) outside a {divisions}x{divisions} grid"))
    }
}

impl IndexMut<(u32, u32)> for WindowGrid {
    fn index_mut(&mut self, (gx, gy): (u32, u32)) -> &mut Window {
        let divisions = self.divisions;
        self.get_mut(gx, gy)
            .unwrap_or_else(|| panic!("window ({gx}, {gy}) outside a {divisions}x{divisions} grid"))
    }
}
