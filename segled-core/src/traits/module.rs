//! LED module trait

/// Addressable seven-segment module
///
/// This is the capability set both controller families share. Pattern
/// writes only touch the in-memory buffer; nothing reaches the hardware
/// until [`flush`](LedModule::flush).
///
/// Calling anything other than `begin()` on a module that has not been
/// begun is a caller error. It is not detected.
pub trait LedModule {
    /// Transport error type
    type Error;

    /// Initialize the transport, then blank the buffer
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Push patterns and brightness to the hardware
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Number of digit positions (fixed for the module's lifetime)
    fn size(&self) -> u8;

    /// Set the pattern at a digit position
    ///
    /// Positions past the last digit are ignored.
    fn set_pattern_at(&mut self, pos: u8, pattern: u8);

    /// Pattern currently stored at a digit position
    fn pattern_at(&self, pos: u8) -> u8;

    /// Set the brightness (0-7)
    ///
    /// Takes effect on the next flush. Levels above 7 saturate.
    fn set_brightness(&mut self, level: u8);

    /// Current brightness
    fn brightness(&self) -> u8;

    /// Whether the buffer changed since the last flush
    fn is_flush_required(&self) -> bool;
}
