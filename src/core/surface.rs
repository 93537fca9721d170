use super::blob::BlobSprite;

/// Drawing target for the blob field.
///
/// The browser build draws onto a 2D canvas; tests record the calls.
pub trait Surface {
    /// Match the backing store to the viewport.
    fn resize(&mut self, width: u32, height: u32);
    /// Wipe the whole `width` x `height` area to transparent.
    fn clear(&mut self, width: u32, height: u32);
    fn draw_blob(&mut self, sprite: &BlobSprite);
}
