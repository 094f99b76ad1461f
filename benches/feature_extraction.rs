use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use orate::analysis::AnalysisSettings;
use orate::analysis::features;
use orate::audio::AudioSample;
use std::hint::black_box;

/// Synthesize a speech-shaped waveform: alternating loud bursts and silence.
fn synth_waveform(seconds: u32, sample_rate: u32) -> AudioSample {
    let total = (seconds * sample_rate) as usize;
    let samples: Vec<i16> = (0..total)
        .map(|i| {
            // ~1s of "speech" followed by ~0.5s of silence
            let position = i % (sample_rate as usize * 3 / 2);
            if position < sample_rate as usize {
                ((i % 97) as i16 - 48) * 300
            } else {
                (i % 7) as i16
            }
        })
        .collect();
    AudioSample::new(samples, sample_rate)
}

/// Synthesize a transcript of the given word count with occasional fillers.
fn synth_transcript(words: usize) -> String {
    (0..words)
        .map(|i| {
            if i % 17 == 0 {
                "um"
            } else if i % 23 == 0 {
                "presentation."
            } else {
                "because"
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_pause_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("pause_count");
    for seconds in [10u32, 60, 300] {
        let audio = synth_waveform(seconds, 16000);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}s", seconds)),
            &audio,
            |b, audio| b.iter(|| features::pause_count(black_box(audio), 0.3, 500)),
        );
    }
    group.finish();
}

fn bench_transcript_metrics(c: &mut Criterion) {
    let settings = AnalysisSettings::default();
    let transcript = synth_transcript(2000);

    c.bench_function("filler_count/2000_words", |b| {
        b.iter(|| features::filler_count(black_box(&transcript), &settings.filler_words))
    });

    c.bench_function("grammar_issue_count/2000_words", |b| {
        b.iter(|| features::grammar_issue_count(black_box(&transcript)))
    });
}

fn bench_full_extraction(c: &mut Criterion) {
    let settings = AnalysisSettings::default();
    let audio = synth_waveform(60, 16000);
    let transcript = synth_transcript(150);

    c.bench_function("extract/60s_150_words", |b| {
        b.iter(|| features::extract(black_box(&transcript), black_box(&audio), &settings))
    });
}

criterion_group!(
    benches,
    bench_pause_count,
    bench_transcript_metrics,
    bench_full_extraction
);
criterion_main!(benches);
