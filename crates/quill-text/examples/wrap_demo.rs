use quill_core::FixedAdvance;
use quill_text::layout::wrap::{CharMeasure, WrapMode, wrap_text};

fn main() {
    println!("=== Line Wrapping Demo ===\n");

    // 10 px per character, 20 px line height.
    let metrics = FixedAdvance::new(0.5, 1.0);
    let measure = CharMeasure::new(&metrics, 20.0, None);

    let text = "The quick brown fox jumps over the lazy dog.\nSecond paragraph here.";

    for width in [80.0, 120.0, 240.0] {
        println!("Wrap width {width} px:");
        let lines = wrap_text(text, width, WrapMode::Word, &measure);
        for line in &lines {
            println!("  {:>5.0} px | {:?}", line.width, line.display_text(text));
        }
        println!();
    }

    println!("No wrapping (horizontal scroll mode):");
    let lines = wrap_text(text, 80.0, WrapMode::NoWrap, &measure);
    for line in &lines {
        println!("  {:>5.0} px | {:?}", line.width, line.display_text(text));
    }
}
