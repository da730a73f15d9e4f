//! Audiobook generation pipeline.
//!
//! Wires the input loader, voice selector, synthesizer and transcoder into
//! a single linear run.

mod generator;

pub use generator::{Audiobook, AudiobookGenerator, GenerateRequest, PipelineError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{MockTranscoder, TranscodeError, silent_wav, wav_duration};
    use crate::backend::{HealthResponse, MockBackend, SynthesizeRequest};
    use crate::input::InputError;
    use crate::voice::VoiceError;
    use std::path::Path;
    use tempfile::TempDir;

    fn healthy_backend() -> MockBackend {
        let mut mock_backend = MockBackend::new();
        mock_backend.expect_health().returning(|| {
            Ok(HealthResponse {
                status: "healthy".to_string(),
                model: "xtts_v2".to_string(),
                cuda_available: false,
                gpu: None,
                device: "cpu".to_string(),
            })
        });
        mock_backend
    }

    /// Stands in for ffmpeg: reads the real WAV and writes a fake MP3.
    fn fake_encoder() -> MockTranscoder {
        let mut transcoder = MockTranscoder::new();
        transcoder.expect_transcode().returning(|wav: &Path, output: &Path| {
            let duration = wav_duration(wav)?;
            std::fs::write(output, b"ID3 fake mp3")?;
            Ok(duration)
        });
        transcoder
    }

    fn request(temp_dir: &TempDir, text: &str) -> GenerateRequest {
        let input = temp_dir.path().join("book.txt");
        std::fs::write(&input, text).unwrap();
        GenerateRequest {
            input,
            output: temp_dir.path().join("book.mp3"),
            voice_file: None,
            voice_name: None,
        }
    }

    fn expect_speaker(mock_backend: &mut MockBackend, speaker: &'static str) {
        mock_backend
            .expect_synthesize()
            .withf(move |req: &SynthesizeRequest| req.speaker.as_deref() == Some(speaker))
            .times(1)
            .returning(|_| Ok(silent_wav(24_000, 48_000)));
    }

    #[test]
    fn test_default_voice_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let request = request(&temp_dir, "Witaj świecie");
        let mut mock_backend = healthy_backend();
        expect_speaker(&mut mock_backend, "Damien Black");

        let generator = AudiobookGenerator::new(mock_backend, fake_encoder());
        let audiobook = generator.generate(&request).unwrap();

        assert_eq!(audiobook.path(), request.output.as_path());
        assert_eq!(audiobook.duration_display(), "2.00");
        assert!(request.output.exists());
        assert!(!temp_dir.path().join("book_temp.wav").exists());
    }

    #[test]
    fn test_catalog_voice_passed_through() {
        let temp_dir = TempDir::new().unwrap();
        let mut request = request(&temp_dir, "Witaj świecie");
        request.voice_name = Some("Ana Florence".to_string());
        let mut mock_backend = healthy_backend();
        expect_speaker(&mut mock_backend, "Ana Florence");

        let generator = AudiobookGenerator::new(mock_backend, fake_encoder());

        assert!(generator.generate(&request).is_ok());
    }

    #[test]
    fn test_unknown_voice_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let mut request = request(&temp_dir, "Witaj świecie");
        request.voice_name = Some("Nonexistent Person".to_string());
        let mut mock_backend = healthy_backend();
        expect_speaker(&mut mock_backend, "Damien Black");

        let generator = AudiobookGenerator::new(mock_backend, fake_encoder());

        assert!(generator.generate(&request).is_ok());
    }

    #[test]
    fn test_missing_voice_file_fails_before_synthesis() {
        let temp_dir = TempDir::new().unwrap();
        let mut request = request(&temp_dir, "Witaj świecie");
        request.voice_file = Some(temp_dir.path().join("missing.wav"));

        // No expectations: any backend or transcoder call panics.
        let generator = AudiobookGenerator::new(MockBackend::new(), MockTranscoder::new());
        let result = generator.generate(&request);

        assert!(matches!(
            result.unwrap_err(),
            PipelineError::Voice(VoiceError::NotFound(_))
        ));
    }

    #[test]
    fn test_missing_input_fails_before_synthesis() {
        let temp_dir = TempDir::new().unwrap();
        let request = GenerateRequest {
            input: temp_dir.path().join("nope.txt"),
            output: temp_dir.path().join("book.mp3"),
            voice_file: None,
            voice_name: None,
        };

        let generator = AudiobookGenerator::new(MockBackend::new(), MockTranscoder::new());
        let result = generator.generate(&request);

        assert!(matches!(
            result.unwrap_err(),
            PipelineError::Input(InputError::NotFound(_))
        ));
    }

    #[test]
    fn test_empty_input_fails_before_synthesis() {
        let temp_dir = TempDir::new().unwrap();
        let request = request(&temp_dir, "   \n\t ");

        let generator = AudiobookGenerator::new(MockBackend::new(), MockTranscoder::new());
        let result = generator.generate(&request);

        assert!(matches!(
            result.unwrap_err(),
            PipelineError::Input(InputError::Empty(_))
        ));
    }

    #[test]
    fn test_cloned_voice_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let mut request = request(&temp_dir, "Witaj świecie");
        let reference = temp_dir.path().join("speaker.wav");
        std::fs::write(&reference, silent_wav(22_050, 22_050 * 6)).unwrap();
        request.voice_file = Some(reference);

        let mut mock_backend = healthy_backend();
        mock_backend
            .expect_clone_voice()
            .times(1)
            .returning(|_, _| Ok(silent_wav(24_000, 12_000)));

        let generator = AudiobookGenerator::new(mock_backend, fake_encoder());
        let audiobook = generator.generate(&request).unwrap();

        assert_eq!(audiobook.duration_display(), "0.50");
    }

    #[test]
    fn test_transcode_failure_still_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let request = request(&temp_dir, "Witaj świecie");
        let mut mock_backend = healthy_backend();
        expect_speaker(&mut mock_backend, "Damien Black");

        let mut transcoder = MockTranscoder::new();
        transcoder.expect_transcode().times(1).returning(|wav: &Path, _: &Path| {
            assert!(wav.exists());
            Err(TranscodeError::FfmpegFailed {
                code: Some(1),
                stderr: "Unknown encoder 'libmp3lame'".to_string(),
            })
        });

        let generator = AudiobookGenerator::new(mock_backend, transcoder);
        let result = generator.generate(&request);

        assert!(matches!(
            result.unwrap_err(),
            PipelineError::Transcode(_)
        ));
        assert!(!temp_dir.path().join("book_temp.wav").exists());
    }

    #[test]
    fn test_rerun_overwrites_output_without_stray_files() {
        let temp_dir = TempDir::new().unwrap();
        let request = request(&temp_dir, "Witaj świecie");
        let mut mock_backend = healthy_backend();
        mock_backend
            .expect_synthesize()
            .times(2)
            .returning(|_| Ok(silent_wav(24_000, 24_000)));

        let generator = AudiobookGenerator::new(mock_backend, fake_encoder());
        let first = generator.generate(&request).unwrap();
        let second = generator.generate(&request).unwrap();

        assert_eq!(first, second);
        let mut entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        entries.sort();
        assert_eq!(entries, vec!["book.mp3", "book.txt"]);
    }
}
