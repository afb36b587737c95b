//! Timing engine tests against standard CW ratios

use morse_core::hal::mock::MockKeyOutput;
use morse_core::test_utils::analysis::analyze;
use morse_core::test_utils::render::to_morse_string;
use morse_core::{
    Duration, EmbeddedHalKeyOutput, EncodeMode, KeyEvent, KeyOutput, MorseCodec, MorseConfig,
    MorseEncoder, TimingEngine,
};

const UNIT_MS: u64 = 100;

fn codec(wpm: u32) -> MorseCodec {
    let config = MorseConfig::new(EncodeMode::Strict, wpm).unwrap();
    MorseCodec::new(config).unwrap()
}

fn events_for(text: &str) -> heapless::Vec<KeyEvent, 512> {
    let encoder = MorseEncoder::default();
    let engine = TimingEngine::new(Duration::from_millis(UNIT_MS));
    let chars = encoder.encode::<64>(text).unwrap();
    engine.to_events(&chars).unwrap()
}

#[test]
fn sos_on_time_matches_cw() {
    let events = events_for("SOS");
    let analysis = analyze(&events);

    // 3 dits + 3 dahs + 3 dits of key-down time
    assert_eq!(analysis.on_time.as_millis(), (3 + 9 + 3) * UNIT_MS);
    assert_eq!(analysis.on_units(Duration::from_millis(UNIT_MS)), Some(15));
    assert_eq!(analysis.on_events, 9);

    // 6 intra-character gaps, 2 character-boundary gaps
    assert_eq!(analysis.off_time.as_millis(), (6 + 2 * 3) * UNIT_MS);
    assert_eq!(analysis.off_events, 8);
}

#[test]
fn paris_plus_word_gap_is_fifty_units() {
    // The WPM calibration word: PARIS followed by a word gap is
    // exactly 50 units of line time
    let events = events_for("PARIS ");
    let analysis = analyze(&events);
    assert_eq!(analysis.total().as_millis(), 50 * UNIT_MS);
}

#[test]
fn dit_dah_ratio_is_one_to_three() {
    let events = events_for("A");
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], KeyEvent::on_for(Duration::from_millis(UNIT_MS)));
    assert_eq!(events[1], KeyEvent::off_for(Duration::from_millis(UNIT_MS)));
    assert_eq!(events[2], KeyEvent::on_for(Duration::from_millis(3 * UNIT_MS)));
}

#[test]
fn word_gap_is_seven_units_total() {
    let events = events_for("E E");
    assert_eq!(
        events.as_slice(),
        &[
            KeyEvent::on_for(Duration::from_millis(UNIT_MS)),
            KeyEvent::off_for(Duration::from_millis(7 * UNIT_MS)),
            KeyEvent::on_for(Duration::from_millis(UNIT_MS)),
        ]
    );
}

#[test]
fn consecutive_spaces_accumulate() {
    let events = events_for("E  E");
    let analysis = analyze(&events);
    assert_eq!(analysis.off_time.as_millis(), 14 * UNIT_MS);
    assert_eq!(analysis.off_events, 2);
}

#[test]
fn events_start_and_end_keyed() {
    for text in ["E", "SOS", "CQ CQ", "73"] {
        let events = events_for(text);
        assert!(events.first().unwrap().on, "leading gap for {:?}", text);
        assert!(events.last().unwrap().on, "trailing gap for {:?}", text);
    }
}

#[test]
fn facade_scales_with_wpm() {
    let slow = codec(10).encode::<64>("T").unwrap();
    let fast = codec(20).encode::<64>("T").unwrap();

    assert_eq!(slow[0].duration.as_millis(), 360);
    assert_eq!(fast[0].duration.as_millis(), 180);
}

#[test]
fn render_matches_convention() {
    let encoder = MorseEncoder::default();
    let chars = encoder.encode::<16>("SOS").unwrap();
    let rendered: heapless::String<64> = to_morse_string(&chars);
    assert_eq!(rendered.as_str(), "... --- ...");

    let chars = encoder.encode::<16>("A B").unwrap();
    let rendered: heapless::String<64> = to_morse_string(&chars);
    assert_eq!(rendered.as_str(), ".- / -...");
}

#[test]
fn inverted_pin_output() {
    #[derive(Debug, Default)]
    struct PinStub {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for PinStub {
        type Error = core::convert::Infallible;
    }

    impl embedded_hal::digital::OutputPin for PinStub {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    let mut key = EmbeddedHalKeyOutput::new(PinStub::default(), true);
    key.set_state(true).unwrap();
    assert!(key.get_state().unwrap());

    // Active-low wiring: key down drives the pin low
    let pin = key.free();
    assert!(!pin.high);
}

#[tokio::test]
async fn playback_wall_clock_sanity() {
    // 100 WPM keeps the replay short: unit is 12ms
    let events = codec(100).encode::<64>("EE").unwrap();
    let expected_ms: u64 = events.iter().map(|e| e.duration.as_millis()).sum();

    let start = std::time::Instant::now();
    let mut key = MockKeyOutput::new();
    for event in &events {
        key.set_state(event.on).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(event.duration.as_millis())).await;
    }
    key.set_state(false).unwrap();

    // Sleeps never undershoot; allow generous slack above
    let elapsed = start.elapsed();
    assert!(elapsed.as_millis() as u64 >= expected_ms);
    assert!(elapsed.as_millis() as u64 <= expected_ms + 500);
    assert!(!key.is_active());
    assert_eq!(key.transitions(), 4);
}
