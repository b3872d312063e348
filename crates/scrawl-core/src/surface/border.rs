//! Border operations
//!
//! Adding padding around a surface, used to letterbox a non-square crop
//! before it is resampled.

use super::{Surface, SurfaceMut};
use crate::error::{Error, Result};

impl Surface {
    /// Add a border with different sizes per side.
    ///
    /// # Arguments
    ///
    /// * `left` - Left border width
    /// * `right` - Right border width
    /// * `top` - Top border height
    /// * `bot` - Bottom border height
    /// * `val` - Border pixel value
    ///
    /// # Errors
    ///
    /// Returns an error if the new dimensions overflow `u32`.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: u32,
    ) -> Result<Surface> {
        let overflow = || {
            Error::InvalidParameter(format!(
                "border {}+{}x{}+{} overflows surface {}x{}",
                left,
                right,
                top,
                bot,
                self.width(),
                self.height()
            ))
        };
        let w = self
            .width()
            .checked_add(left)
            .and_then(|w| w.checked_add(right))
            .ok_or_else(overflow)?;
        let h = self
            .height()
            .checked_add(top)
            .and_then(|h| h.checked_add(bot))
            .ok_or_else(overflow)?;

        let mut out = SurfaceMut::new(w, h)?;
        out.fill(val);
        let (l, sw) = (left as usize, self.width() as usize);
        for y in 0..self.height() {
            out.row_data_mut(y + top)[l..l + sw].copy_from_slice(self.row_data(y));
        }
        Ok(out.into())
    }

    /// Pad the shorter side with transparent pixels so the surface becomes
    /// square, keeping the content centered.
    ///
    /// When the padding is odd, the extra pixel goes to the right (or
    /// bottom). An already square surface is returned as a cheap clone.
    pub fn pad_to_square(&self) -> Result<Surface> {
        let (w, h) = (self.width(), self.height());
        if w == h {
            return Ok(self.clone());
        }
        let side = w.max(h);
        let dx = side - w;
        let dy = side - h;
        self.add_border_general(
            dx / 2,
            dx - dx / 2,
            dy / 2,
            dy - dy / 2,
            crate::color::TRANSPARENT,
        )
    }
}
