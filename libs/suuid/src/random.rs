//! Random sources and the alphabet filler.
//!
//! The generator never probes for randomness itself. It is handed a
//! [`RandomSource`]; [`SystemRandom::detect`] picks the OS source when it
//! works and a seeded non-cryptographic generator otherwise.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng, TryRngCore};
use tracing::{debug, warn};

use crate::alphabet;
use crate::SuuidError;

/// A capability that fills buffers with random bytes.
pub trait RandomSource {
    /// Fills `buf` with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SuuidError>;

    /// Whether the bytes come from a cryptographically secure generator.
    fn is_secure(&self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SuuidError> {
        (**self).fill(buf)
    }

    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SuuidError> {
        (**self).fill(buf)
    }

    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }
}

/// The operating system's secure random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SuuidError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| SuuidError::Entropy(e.to_string()))
    }

    fn is_secure(&self) -> bool {
        true
    }
}

/// A fast, non-cryptographic generator.
#[derive(Debug, Clone)]
pub struct WeakRandom(SmallRng);

impl WeakRandom {
    /// Seeds from the OS source, or from the clock when that fails.
    #[must_use]
    pub fn new() -> Self {
        let mut seed = [0u8; 8];
        let seed = match OsRng.try_fill_bytes(&mut seed) {
            Ok(()) => u64::from_le_bytes(seed),
            Err(_) => clock_seed(),
        };
        Self::seeded(seed)
    }

    /// A reproducible generator for a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for WeakRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for WeakRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SuuidError> {
        self.0.fill_bytes(buf);
        Ok(())
    }

    fn is_secure(&self) -> bool {
        false
    }
}

/// The host's best available source, chosen once at construction.
#[derive(Debug, Clone)]
pub enum SystemRandom {
    /// The OS source answered the probe.
    Os(OsRandom),
    /// The OS source failed; bytes come from [`WeakRandom`].
    Weak(WeakRandom),
}

impl SystemRandom {
    /// Probes the OS source with a one-byte draw.
    #[must_use]
    pub fn detect() -> Self {
        let mut probe = [0u8; 1];
        match OsRandom.fill(&mut probe) {
            Ok(()) => Self::Os(OsRandom),
            Err(e) => {
                warn!(error = %e, "secure random source unavailable, using weak generator");
                Self::Weak(WeakRandom::new())
            }
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::detect()
    }
}

impl RandomSource for SystemRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SuuidError> {
        match self {
            Self::Os(os) => os.fill(buf),
            Self::Weak(weak) => weak.fill(buf),
        }
    }

    fn is_secure(&self) -> bool {
        matches!(self, Self::Os(_))
    }
}

/// Draws `n` characters with `byte mod 63`.
pub fn fill_strong<R: RandomSource + ?Sized>(
    n: usize,
    source: &mut R,
) -> Result<String, SuuidError> {
    if n == 0 {
        return Ok(String::new());
    }
    let bytes = random_bytes(n, source)?;
    Ok(bytes.into_iter().map(alphabet::from_byte).collect())
}

/// Draws `n` characters with `floor(u * 62)`, one uniform sample each.
pub fn fill_weak<R: RandomSource + ?Sized>(
    n: usize,
    source: &mut R,
) -> Result<String, SuuidError> {
    if n == 0 {
        return Ok(String::new());
    }
    let len = n.checked_mul(8).ok_or_else(|| {
        SuuidError::invalid_argument(format!("fill of {n} characters is too large"))
    })?;
    let bytes = random_bytes(len, source)?;
    Ok(bytes
        .chunks_exact(8)
        .map(|chunk| alphabet::from_unit(unit_sample(chunk)))
        .collect())
}

/// Reserves fallibly so an absurd length is an error, not an abort.
fn random_bytes<R: RandomSource + ?Sized>(
    len: usize,
    source: &mut R,
) -> Result<Vec<u8>, SuuidError> {
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(len).map_err(|e| {
        SuuidError::invalid_argument(format!("cannot allocate {len} random bytes: {e}"))
    })?;
    bytes.resize(len, 0);
    source.fill(&mut bytes)?;
    Ok(bytes)
}

/// Top 53 bits of a little-endian u64, scaled into `[0, 1)`.
fn unit_sample(chunk: &[u8]) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(chunk);
    (u64::from_le_bytes(raw) >> 11) as f64 / (1u64 << 53) as f64
}

fn clock_seed() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    debug!(seed = nanos, "seeding weak generator from clock");
    nanos
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed byte pattern.
    struct Replay {
        bytes: Vec<u8>,
        pos: usize,
        secure: bool,
    }

    impl Replay {
        fn new(bytes: Vec<u8>, secure: bool) -> Self {
            Self {
                bytes,
                pos: 0,
                secure,
            }
        }
    }

    impl RandomSource for Replay {
        fn fill(&mut self, buf: &mut [u8]) -> Result<(), SuuidError> {
            for b in buf.iter_mut() {
                *b = self.bytes[self.pos % self.bytes.len()];
                self.pos += 1;
            }
            Ok(())
        }

        fn is_secure(&self) -> bool {
            self.secure
        }
    }

    #[test]
    fn test_fill_strong_maps_bytes() {
        let mut source = Replay::new(vec![0, 1, 62, 63, 255], true);
        let s = fill_strong(5, &mut source).unwrap();
        assert_eq!(s, "qw_qr");
    }

    #[test]
    fn test_fill_zero_consumes_nothing() {
        let mut source = Replay::new(vec![7], true);
        assert_eq!(fill_strong(0, &mut source).unwrap(), "");
        assert_eq!(fill_weak(0, &mut source).unwrap(), "");
        assert_eq!(source.pos, 0);
    }

    #[test]
    fn test_fill_weak_extremes() {
        let mut zeros = Replay::new(vec![0], false);
        assert_eq!(fill_weak(3, &mut zeros).unwrap(), "qqq");

        let mut ones = Replay::new(vec![0xFF], false);
        assert_eq!(fill_weak(3, &mut ones).unwrap(), "999");
    }

    #[test]
    fn test_fill_weak_never_emits_underscore() {
        let mut source = WeakRandom::seeded(42);
        let s = fill_weak(10_000, &mut source).unwrap();
        assert_eq!(s.len(), 10_000);
        assert!(!s.contains('_'));
        assert!(s.chars().all(alphabet::contains));
    }

    #[test]
    fn test_oversized_fill_is_rejected() {
        let mut source = Replay::new(vec![0], true);
        let err = fill_weak(usize::MAX / 4, &mut source).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = fill_strong(usize::MAX, &mut source).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(source.pos, 0);
    }

    #[test]
    fn test_os_random_is_secure() {
        let mut os = OsRandom;
        assert!(os.is_secure());
        let mut buf = [0u8; 32];
        os.fill(&mut buf).unwrap();
    }

    #[test]
    fn test_weak_random_is_reproducible() {
        let a = fill_weak(16, &mut WeakRandom::seeded(7)).unwrap();
        let b = fill_weak(16, &mut WeakRandom::seeded(7)).unwrap();
        assert_eq!(a, b);
        assert!(!WeakRandom::seeded(7).is_secure());
    }

    #[test]
    fn test_system_random_detects_os_source() {
        let system = SystemRandom::detect();
        assert!(system.is_secure());
    }
}
