use crate::error::{DemucsError, DemucsResult};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// One isolated source in a separated track
///
/// Variant order is the order stems are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    /// Drums and percussion
    Drums,
    /// Bass
    Bass,
    /// Everything that is not one of the other stems
    Other,
    /// Vocals
    Vocals,
}

/// Stems found on disk, keyed by stem
pub type StemMap = BTreeMap<Stem, PathBuf>;

impl Stem {
    /// Every stem demucs can produce
    pub const ALL: [Stem; 4] = [Stem::Drums, Stem::Bass, Stem::Other, Stem::Vocals];

    /// Stem name as used by demucs
    pub fn as_str(&self) -> &'static str {
        match self {
            Stem::Drums => "drums",
            Stem::Bass => "bass",
            Stem::Other => "other",
            Stem::Vocals => "vocals",
        }
    }

    /// File name demucs writes this stem to
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.as_str())
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stem {
    type Err = DemucsError;

    fn from_str(s: &str) -> DemucsResult<Self> {
        Stem::ALL
            .into_iter()
            .find(|stem| stem.as_str() == s)
            .ok_or_else(|| DemucsError::Configuration(format!("Unknown stem: {}", s)))
    }
}

/// Header details of a separated stem file
#[derive(Debug, Clone, PartialEq)]
pub struct StemInfo {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Samples per channel
    pub frames: u32,
}

impl StemInfo {
    /// Read the WAV header of a stem file
    pub fn probe<P: AsRef<Path>>(path: P) -> DemucsResult<Self> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        Ok(StemInfo {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            frames: reader.duration(),
        })
    }

    /// Playback duration
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames as f64 / self.sample_rate as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stem_order() {
        let mut stems = vec![Stem::Vocals, Stem::Other, Stem::Drums, Stem::Bass];
        stems.sort();
        assert_eq!(stems, Stem::ALL);
    }

    #[test]
    fn test_stem_file_name() {
        assert_eq!(Stem::Drums.file_name(), "drums.wav");
        assert_eq!(Stem::Vocals.file_name(), "vocals.wav");
    }

    #[test]
    fn test_stem_from_str() {
        assert_eq!("bass".parse::<Stem>().unwrap(), Stem::Bass);
        assert!(matches!(
            "guitar".parse::<Stem>(),
            Err(DemucsError::Configuration(_))
        ));
    }

    #[test]
    fn test_probe_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocals.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for _ in 0..44100 * 2 {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();

        let info = StemInfo::probe(&path).unwrap();
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.channels, 2);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.frames, 44100);
        assert_eq!(info.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_probe_not_wav() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drums.wav");
        std::fs::write(&path, b"not a riff file").unwrap();

        assert!(StemInfo::probe(&path).is_err());
    }
}
