//! Intermediate waveform lifecycle and MP3 transcoding.

mod transcoder;
mod waveform;

pub use transcoder::{FfmpegTranscoder, TranscodeError, Transcoder, wav_duration};
pub use waveform::{IntermediateWaveform, temp_wav_path};

#[cfg(test)]
pub(crate) use transcoder::MockTranscoder;

/// Silent 16-bit mono WAV data for tests.
#[cfg(test)]
pub(crate) fn silent_wav(sample_rate: u32, samples: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for _ in 0..samples {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}
